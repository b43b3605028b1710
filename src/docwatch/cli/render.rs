use colored::{ColoredString, Colorize};
use docwatch::api::{CmdMessage, EditPreview, MessageLevel, StagedEdit};
use docwatch::index::DisplayDocument;
use docwatch::model::{DocStatus, Document, Status};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const MAX_NAME_WIDTH: usize = 40;
const DAYS_WIDTH: usize = 14;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// Prints one row per document, or `empty_message` when there are none.
pub(super) fn print_documents(documents: &[DisplayDocument], empty_message: &str) {
    if documents.is_empty() {
        println!("{}", empty_message);
        return;
    }

    let name_width = documents
        .iter()
        .map(|dd| dd.document.name.width())
        .max()
        .unwrap_or(0)
        .min(MAX_NAME_WIDTH);
    let idx_width = documents
        .iter()
        .map(|dd| dd.index.to_string().len())
        .max()
        .unwrap_or(1);

    for dd in documents {
        let idx = format!("{:>width$}.", dd.index, width = idx_width);
        let name = pad_to_width(&truncate_to_width(&dd.document.name, name_width), name_width);
        let days = format!("{:>width$}", describe_days(dd.days), width = DAYS_WIDTH);

        println!(
            "{} {}  {}  {}  {}",
            idx.dimmed(),
            name,
            dd.document.expiry_date,
            days,
            status_label(dd.status)
        );
    }
}

/// The single document a confirmation prompt is about.
pub(super) fn print_document(dd: &DisplayDocument) {
    println!(
        "{}. {} (expires {}, warns {} day(s) before) {} {}",
        dd.index,
        dd.document.name.bold(),
        dd.document.expiry_date,
        dd.document.alert_lead_days,
        describe_days(dd.days),
        status_label(dd.status)
    );
}

pub(super) fn print_edit_preview(staged: &StagedEdit, preview: &EditPreview) {
    println!("{}", "Before:".bold());
    print_snapshot(staged.before(), &preview.before);
    println!("{}", "After:".bold());
    print_snapshot(staged.after(), &preview.after);
}

fn print_snapshot(doc: &Document, status: &DocStatus) {
    println!("  name:      {}", doc.name);
    println!("  expires:   {}", doc.expiry_date);
    println!("  lead days: {}", doc.alert_lead_days);
    println!(
        "  status:    {} ({})",
        status_label(status.status),
        describe_days(status.days)
    );
}

fn status_label(status: Status) -> ColoredString {
    let label = format!("{:<7}", status.to_string());
    match status {
        Status::Ok => label.green(),
        Status::Warning => label.yellow(),
        Status::Expired => label.red().bold(),
    }
}

fn describe_days(days: i64) -> String {
    match days {
        0 => "today".to_string(),
        1 => "in 1 day".to_string(),
        -1 => "1 day ago".to_string(),
        d if d > 0 => format!("in {} days", d),
        d => format!("{} days ago", -d),
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}
