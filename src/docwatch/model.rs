use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A tracked document with an expiry date.
///
/// The serialized field names match the `documentos.json` files written by
/// earlier versions of the tool, so existing stores load unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "validade")]
    pub expiry_date: NaiveDate,
    /// Days before `expiry_date` at which the document starts warning.
    #[serde(rename = "alerta")]
    pub alert_lead_days: u32,
}

impl Document {
    pub fn new(name: impl Into<String>, expiry_date: NaiveDate, alert_lead_days: u32) -> Self {
        Self {
            name: name.into(),
            expiry_date,
            alert_lead_days,
        }
    }

    pub fn days_until_expiry(&self, today: NaiveDate) -> i64 {
        (self.expiry_date - today).num_days()
    }

    pub fn status(&self, today: NaiveDate) -> DocStatus {
        calculate_status(self, today)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Expired,
    Warning,
    Ok,
}

impl Status {
    /// True for the states that show up in the alerts listing.
    pub fn needs_attention(&self) -> bool {
        !matches!(self, Status::Ok)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Expired => write!(f, "Expired"),
            Status::Warning => write!(f, "Warning"),
            Status::Ok => write!(f, "OK"),
        }
    }
}

/// Status of a document as of a given day. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocStatus {
    pub days: i64,
    pub status: Status,
}

/// Derives the status of `doc` relative to `today`.
///
/// The warning window is inclusive on both ends: a document expiring today or
/// exactly `alert_lead_days` from now is already a `Warning`.
pub fn calculate_status(doc: &Document, today: NaiveDate) -> DocStatus {
    let days = doc.days_until_expiry(today);
    let status = if days < 0 {
        Status::Expired
    } else if days <= i64::from(doc.alert_lead_days) {
        Status::Warning
    } else {
        Status::Ok
    };
    DocStatus { days, status }
}

/// Display order: soonest expiry first, ties by name.
pub fn canonical_order(a: &Document, b: &Document) -> Ordering {
    a.expiry_date
        .cmp(&b.expiry_date)
        .then_with(|| a.name.cmp(&b.name))
}
