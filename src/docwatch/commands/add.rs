use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Document;
use chrono::NaiveDate;

use super::helpers::{validate_lead_days, validate_name};

/// Appends a new document. Does not persist.
pub fn run(
    documents: &mut Vec<Document>,
    name: &str,
    expiry_date: NaiveDate,
    alert_lead_days: i64,
) -> Result<CmdResult> {
    let name = validate_name(name)?;
    let lead = validate_lead_days(alert_lead_days)?;

    let document = Document::new(name, expiry_date, lead);
    documents.push(document.clone());

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Document added: {} (expires {})",
        document.name, document.expiry_date
    )));
    Ok(result.with_affected_documents(vec![document]))
}
