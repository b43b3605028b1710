use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::index_documents;
use crate::model::Document;
use chrono::NaiveDate;

pub fn run(documents: &[Document], today: NaiveDate) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_documents(index_documents(documents, today)))
}
