use crate::commands::CmdResult;
use crate::error::{DocwatchError, Result};
use crate::index::index_documents;
use crate::model::Document;
use chrono::NaiveDate;

/// Documents whose name contains `term`, ignoring case, in input order.
pub fn search<'a>(documents: &'a [Document], term: &str) -> Result<Vec<&'a Document>> {
    let needle = normalize_term(term)?;
    Ok(documents
        .iter()
        .filter(|doc| name_matches(doc, &needle))
        .collect())
}

/// Search for display: matches in canonical order, with their listing index.
pub fn run(documents: &[Document], today: NaiveDate, term: &str) -> Result<CmdResult> {
    let needle = normalize_term(term)?;
    let listed = index_documents(documents, today)
        .into_iter()
        .filter(|dd| name_matches(&dd.document, &needle))
        .collect();
    Ok(CmdResult::default().with_listed_documents(listed))
}

fn normalize_term(term: &str) -> Result<String> {
    if term.trim().is_empty() {
        return Err(DocwatchError::EmptyQuery);
    }
    Ok(term.to_lowercase())
}

fn name_matches(doc: &Document, needle: &str) -> bool {
    doc.name.to_lowercase().contains(needle)
}
