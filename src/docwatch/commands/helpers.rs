use crate::error::{DocwatchError, Result};
use crate::index::{index_documents, DisplayDocument, DisplayIndex};
use crate::model::Document;
use chrono::NaiveDate;

/// Trims `name` and rejects it when nothing is left.
pub fn validate_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DocwatchError::InvalidName);
    }
    Ok(trimmed.to_string())
}

pub fn validate_lead_days(days: i64) -> Result<u32> {
    u32::try_from(days).map_err(|_| DocwatchError::InvalidLeadTime(days))
}

/// Looks up the document shown at `index` in the full listing.
pub fn resolve_index(
    documents: &[Document],
    today: NaiveDate,
    index: DisplayIndex,
) -> Result<DisplayDocument> {
    index_documents(documents, today)
        .into_iter()
        .find(|dd| dd.index == index)
        .ok_or_else(|| DocwatchError::NotFound(format!("no document at index {}", index)))
}

/// Position of the first document structurally equal to `doc`.
pub fn position_of(documents: &[Document], doc: &Document) -> Result<usize> {
    documents
        .iter()
        .position(|d| d == doc)
        .ok_or_else(|| DocwatchError::NotFound(doc.name.clone()))
}
