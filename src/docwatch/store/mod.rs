//! # Storage Layer
//!
//! The [`DocumentStore`] trait is the only seam between the record engine and
//! persistence. The engine never touches the file system: the API loads the
//! whole collection once through [`DocumentStore::load`] and hands the whole
//! collection back to [`DocumentStore::save`] after every successful mutation.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production store, a single JSON file (`documentos.json`
//!   by default) holding an array of records.
//! - [`memory::InMemoryStore`]: keeps the last saved collection in memory and
//!   counts saves, so tests can check that discarded edits never persist.
//!
//! ## Storage Format
//!
//! ```text
//! [
//!   { "nome": "Passport", "validade": "2031-04-02", "alerta": 60 },
//!   { "nome": "Car insurance", "validade": "2025-01-15", "alerta": 30 }
//! ]
//! ```
//!
//! Writes replace the whole file; there are no partial updates.

use crate::error::Result;
use crate::model::Document;

pub mod fs;
pub mod memory;

/// Abstract interface for whole-collection persistence.
pub trait DocumentStore {
    /// Load every stored document. A store that was never written is empty.
    fn load(&self) -> Result<Vec<Document>>;

    /// Replace the stored collection with `documents`.
    ///
    /// Must be idempotent: saving the same collection twice leaves the same
    /// store behind.
    fn save(&mut self, documents: &[Document]) -> Result<()>;
}
