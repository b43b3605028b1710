use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use docwatch::api::FieldEdit;
use docwatch::index::DisplayIndex;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "docwatch", bin_name = "docwatch", version)]
#[command(about = "Track expiring documents and get warned before they lapse", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the document store and config.json
    #[arg(long, global = true, env = "DOCWATCH_DATA", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Compute statuses as of this date instead of the local date
    #[arg(
        long,
        global = true,
        env = "DOCWATCH_TODAY",
        value_name = "YYYY-MM-DD",
        hide = true
    )]
    pub today: Option<NaiveDate>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register a document
    #[command(alias = "a")]
    Add {
        /// Document name
        name: String,

        /// Expiry date
        #[arg(value_name = "YYYY-MM-DD")]
        expiry: NaiveDate,

        /// Days before expiry to start warning (defaults to config)
        #[arg(short, long, allow_negative_numbers = true)]
        lead_days: Option<i64>,
    },

    /// List all documents with their status
    #[command(alias = "ls")]
    List,

    /// List documents that are expired or in their warning window
    Alerts,

    /// Search documents by name
    Search {
        /// Case-insensitive part of the name
        term: String,
    },

    /// Change one field of a document, after confirmation
    #[command(alias = "e")]
    Edit {
        /// Index from `docwatch list`
        index: DisplayIndex,

        #[command(flatten)]
        change: EditArgs,

        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Remove a document, after confirmation
    #[command(alias = "rm")]
    Remove {
        /// Index from `docwatch list`
        index: DisplayIndex,

        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Remove every document, after confirmation
    Clear {
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (store-file, default-lead-days)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

/// Exactly one field change per edit.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct EditArgs {
    /// New name
    #[arg(long)]
    pub name: Option<String>,

    /// New expiry date
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub expiry: Option<NaiveDate>,

    /// New warning lead time in days
    #[arg(long, allow_negative_numbers = true)]
    pub lead_days: Option<i64>,
}

impl EditArgs {
    /// The arg group guarantees exactly one field is set.
    pub fn into_field_edit(self) -> FieldEdit {
        match (self.name, self.expiry, self.lead_days) {
            (Some(name), None, None) => FieldEdit::Rename(name),
            (None, Some(date), None) => FieldEdit::Redate(date),
            (None, None, Some(days)) => FieldEdit::SetLeadDays(days),
            _ => unreachable!("clap enforces exactly one of --name, --expiry, --lead-days"),
        }
    }
}
