//! # Display Indexes
//!
//! Documents have no stable id in the store, so users refer to them by their
//! position in the listing. [`index_documents`] sorts the full collection in
//! canonical order (expiry date, then name) and numbers the result from 1.
//!
//! Filtered views (alerts, search) keep the number a document has in the full
//! listing. That way `docwatch alerts` followed by `docwatch remove 3` removes
//! the same document that `docwatch list` shows as 3.

use crate::model::{calculate_status, canonical_order, DocStatus, Document, Status};
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DisplayIndex(pub usize);

impl fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DisplayIndex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<usize>() {
            Ok(n) if n > 0 => Ok(DisplayIndex(n)),
            _ => Err(format!("Invalid index: {}", s)),
        }
    }
}

/// A document as shown in a listing, with its status as of the listing day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayDocument {
    pub document: Document,
    pub index: DisplayIndex,
    pub days: i64,
    pub status: Status,
}

/// Sorts `documents` canonically and assigns 1-based display indexes.
pub fn index_documents(documents: &[Document], today: NaiveDate) -> Vec<DisplayDocument> {
    let mut sorted: Vec<&Document> = documents.iter().collect();
    sorted.sort_by(|a, b| canonical_order(a, b));

    sorted
        .into_iter()
        .enumerate()
        .map(|(i, doc)| {
            let DocStatus { days, status } = calculate_status(doc, today);
            DisplayDocument {
                document: doc.clone(),
                index: DisplayIndex(i + 1),
                days,
                status,
            }
        })
        .collect()
}
