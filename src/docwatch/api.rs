//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for front ends.
//!
//! `DocwatchApi` owns the three pieces of state the commands need: the
//! in-memory collection, the store it came from, and the day used for status
//! computation. It:
//! - **Loads** the whole collection once, in [`DocwatchApi::open`]
//! - **Dispatches** to the command functions, passing the collection and `today`
//! - **Persists** the whole collection after every successful mutation
//!
//! It does not print, prompt, or read the clock after construction; the
//! confirmation steps of edit and remove belong to the caller. Configuration
//! is handled before the API is built (see [`crate::commands::config`]).
//!
//! ## Generic Over DocumentStore
//!
//! - Production: `DocwatchApi<FileStore>`
//! - Testing: `DocwatchApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::index::{DisplayDocument, DisplayIndex};
use crate::model::Document;
use crate::store::DocumentStore;
use chrono::{Local, NaiveDate};

pub struct DocwatchApi<S: DocumentStore> {
    store: S,
    documents: Vec<Document>,
    today: NaiveDate,
}

impl<S: DocumentStore> DocwatchApi<S> {
    /// Loads the collection from `store`. Statuses are computed against the
    /// local date unless overridden with [`DocwatchApi::with_today`].
    pub fn open(store: S) -> Result<Self> {
        let documents = store.load()?;
        tracing::debug!(count = documents.len(), "collection loaded");
        Ok(Self {
            store,
            documents,
            today: Local::now().date_naive(),
        })
    }

    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Writes the full collection. Safe to call any number of times.
    pub fn save(&mut self) -> Result<()> {
        self.store.save(&self.documents)
    }

    pub fn add_document(
        &mut self,
        name: &str,
        expiry_date: NaiveDate,
        alert_lead_days: i64,
    ) -> Result<commands::CmdResult> {
        let previous = self.documents.clone();
        let result = commands::add::run(&mut self.documents, name, expiry_date, alert_lead_days)?;
        self.persist_or_restore(previous)?;
        tracing::info!(name = %result.affected_documents[0].name, "document added");
        Ok(result)
    }

    pub fn list_documents(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.documents, self.today)
    }

    pub fn list_alerts(&self) -> Result<commands::CmdResult> {
        commands::alerts::run(&self.documents, self.today)
    }

    pub fn search_documents(&self, term: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.documents, self.today, term)
    }

    /// The document shown at `index`, e.g. for a confirmation prompt.
    pub fn view_document(&self, index: DisplayIndex) -> Result<DisplayDocument> {
        commands::helpers::resolve_index(&self.documents, self.today, index)
    }

    pub fn remove_document(&mut self, index: DisplayIndex) -> Result<commands::CmdResult> {
        let previous = self.documents.clone();
        let result = commands::remove::run(&mut self.documents, self.today, index)?;
        self.persist_or_restore(previous)?;
        tracing::info!(%index, "document removed");
        Ok(result)
    }

    pub fn clear_documents(&mut self) -> Result<commands::CmdResult> {
        let previous = self.documents.clone();
        let result = commands::clear::run(&mut self.documents)?;
        if !result.affected_documents.is_empty() {
            self.persist_or_restore(previous)?;
            tracing::info!(count = result.affected_documents.len(), "collection cleared");
        }
        Ok(result)
    }

    /// Applies `edit` to the live collection without saving. Resolve the
    /// returned edit with [`commit_edit`](Self::commit_edit) or
    /// [`rollback_edit`](Self::rollback_edit).
    pub fn stage_edit(&mut self, index: DisplayIndex, edit: FieldEdit) -> Result<StagedEdit> {
        let staged = commands::edit::stage_at(&mut self.documents, self.today, index, edit)?;
        tracing::debug!(name = %staged.before().name, "edit staged");
        Ok(staged)
    }

    /// Saves the staged state. If the save fails the edit is rolled back, so
    /// the collection matches the store again.
    pub fn commit_edit(&mut self, staged: StagedEdit) -> Result<commands::CmdResult> {
        let snapshot = staged.clone();
        let result = commands::edit::commit(&self.documents, staged)?;
        if let Err(e) = self.save() {
            tracing::warn!(error = %e, "save failed, rolling back edit");
            commands::edit::rollback(&mut self.documents, snapshot)?;
            return Err(e);
        }
        tracing::info!(name = %result.affected_documents[0].name, "edit committed");
        Ok(result)
    }

    /// Puts the pre-edit state back. Nothing is written to the store.
    pub fn rollback_edit(&mut self, staged: StagedEdit) -> Result<commands::CmdResult> {
        let result = commands::edit::rollback(&mut self.documents, staged)?;
        tracing::debug!("edit rolled back");
        Ok(result)
    }

    fn persist_or_restore(&mut self, previous: Vec<Document>) -> Result<()> {
        if let Err(e) = self.save() {
            tracing::warn!(error = %e, "save failed, restoring previous collection");
            self.documents = previous;
            return Err(e);
        }
        Ok(())
    }
}

pub use crate::commands::edit::{EditPreview, FieldEdit, StagedEdit};
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
