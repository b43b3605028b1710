//! Two-phase edit: stage one field change, then commit or roll back.
//!
//! [`stage`] snapshots the target and applies the change to the live
//! collection, so listings taken before the edit is resolved already show the
//! proposed state. [`rollback`] writes the snapshot back verbatim. Neither
//! function persists anything; the API saves after [`commit`] only.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{DocwatchError, Result};
use crate::index::DisplayIndex;
use crate::model::{calculate_status, DocStatus, Document};
use chrono::NaiveDate;

use super::helpers::{position_of, resolve_index, validate_lead_days, validate_name};

/// The single field change an edit applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    Rename(String),
    Redate(NaiveDate),
    SetLeadDays(i64),
}

/// An applied but unresolved edit.
#[derive(Debug, Clone)]
#[must_use = "a staged edit must be committed or rolled back"]
pub struct StagedEdit {
    position: usize,
    before: Document,
    after: Document,
}

/// Status of the edited document before and after the change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditPreview {
    pub before: DocStatus,
    pub after: DocStatus,
}

impl StagedEdit {
    pub fn before(&self) -> &Document {
        &self.before
    }

    pub fn after(&self) -> &Document {
        &self.after
    }

    pub fn preview(&self, today: NaiveDate) -> EditPreview {
        EditPreview {
            before: calculate_status(&self.before, today),
            after: calculate_status(&self.after, today),
        }
    }

    /// The edit is only resolvable while the live slot still holds `after`.
    fn check_live(&self, documents: &[Document]) -> Result<()> {
        match documents.get(self.position) {
            Some(doc) if *doc == self.after => Ok(()),
            _ => Err(DocwatchError::NotFound(format!(
                "staged edit of {} no longer matches the collection",
                self.before.name
            ))),
        }
    }
}

/// Applies `edit` to the first document equal to `target`.
///
/// Validation happens before anything is touched: an invalid name or a
/// negative lead time leaves the collection unchanged.
pub fn stage(
    documents: &mut [Document],
    target: &Document,
    edit: FieldEdit,
) -> Result<StagedEdit> {
    let position = position_of(documents, target)?;
    let before = documents[position].clone();

    let mut after = before.clone();
    match edit {
        FieldEdit::Rename(name) => after.name = validate_name(&name)?,
        FieldEdit::Redate(date) => after.expiry_date = date,
        FieldEdit::SetLeadDays(days) => after.alert_lead_days = validate_lead_days(days)?,
    }

    documents[position] = after.clone();
    Ok(StagedEdit {
        position,
        before,
        after,
    })
}

/// Stages an edit on the document shown at `index` in the full listing.
pub fn stage_at(
    documents: &mut [Document],
    today: NaiveDate,
    index: DisplayIndex,
    edit: FieldEdit,
) -> Result<StagedEdit> {
    let target = resolve_index(documents, today, index)?;
    stage(documents, &target.document, edit)
}

/// Keeps the staged state.
pub fn commit(documents: &[Document], staged: StagedEdit) -> Result<CmdResult> {
    staged.check_live(documents)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Document updated: {}",
        staged.after.name
    )));
    Ok(result.with_affected_documents(vec![staged.after]))
}

/// Restores the pre-edit snapshot.
pub fn rollback(documents: &mut [Document], staged: StagedEdit) -> Result<CmdResult> {
    staged.check_live(documents)?;
    documents[staged.position] = staged.before;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info("Changes discarded."));
    Ok(result)
}
