use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::index_documents;
use crate::model::Document;
use chrono::NaiveDate;

/// Lists the documents that are expired or inside their warning window.
pub fn run(documents: &[Document], today: NaiveDate) -> Result<CmdResult> {
    let listed = index_documents(documents, today)
        .into_iter()
        .filter(|dd| dd.status.needs_attention())
        .collect();
    Ok(CmdResult::default().with_listed_documents(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::DisplayIndex;
    use crate::model::Status;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn keeps_only_warning_and_expired() {
        let today = date("2024-01-10");
        let docs = vec![
            Document::new("Later", date("2024-12-31"), 5),
            Document::new("Old", date("2024-01-01"), 0),
            Document::new("Soon", date("2024-01-12"), 5),
        ];
        let result = run(&docs, today).unwrap();

        let got: Vec<_> = result
            .listed_documents
            .iter()
            .map(|dd| (dd.document.name.as_str(), dd.status))
            .collect();
        assert_eq!(got, [("Old", Status::Expired), ("Soon", Status::Warning)]);
    }

    #[test]
    fn keeps_full_listing_indexes() {
        let today = date("2024-01-10");
        let docs = vec![
            Document::new("Fine", date("2024-01-11"), 0),
            Document::new("Due", date("2024-02-01"), 30),
        ];
        let result = run(&docs, today).unwrap();
        assert_eq!(result.listed_documents.len(), 1);
        assert_eq!(result.listed_documents[0].index, DisplayIndex(2));
    }

    #[test]
    fn nothing_to_report_is_empty() {
        let docs = vec![Document::new("Fine", date("2030-01-01"), 10)];
        let result = run(&docs, date("2024-01-01")).unwrap();
        assert!(result.listed_documents.is_empty());
    }
}
