use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Document;

/// Removes every document.
pub fn run(documents: &mut Vec<Document>) -> Result<CmdResult> {
    let removed: Vec<Document> = documents.drain(..).collect();

    let mut result = CmdResult::default();
    if removed.is_empty() {
        result.add_message(CmdMessage::warning("No documents to remove."));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Removed {} document(s).",
            removed.len()
        )));
    }
    Ok(result.with_affected_documents(removed))
}
