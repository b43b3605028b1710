use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplayIndex;
use crate::model::Document;
use chrono::NaiveDate;

use super::helpers::{position_of, resolve_index};

/// Removes the first document structurally equal to `doc`.
///
/// `doc` must come from a listing or search over this same collection; a
/// document that is not present is reported as `NotFound`.
pub fn remove(documents: &mut Vec<Document>, doc: &Document) -> Result<Document> {
    let position = position_of(documents, doc)?;
    Ok(documents.remove(position))
}

pub fn run(
    documents: &mut Vec<Document>,
    today: NaiveDate,
    index: DisplayIndex,
) -> Result<CmdResult> {
    let target = resolve_index(documents, today, index)?;
    let removed = remove(documents, &target.document)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Document removed ({}): {}",
        index, removed.name
    )));
    Ok(result.with_affected_documents(vec![removed]))
}
