use super::DocumentStore;
use crate::error::Result;
use crate::model::Document;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    documents: Vec<Document>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// What the last `save` wrote (or the seeded collection).
    pub fn stored(&self) -> &[Document] {
        &self.documents
    }

    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DocumentStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Document>> {
        Ok(self.documents.clone())
    }

    fn save(&mut self, documents: &[Document]) -> Result<()> {
        self.documents = documents.to_vec();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use chrono::{Duration, NaiveDate};

    /// Builds a seeded store relative to a fixed `today`.
    pub struct StoreFixture {
        pub store: InMemoryStore,
        pub today: NaiveDate,
    }

    impl StoreFixture {
        pub fn new(today: NaiveDate) -> Self {
            Self {
                store: InMemoryStore::new(),
                today,
            }
        }

        /// Adds a document expiring `days` from `today` (negative for the past).
        pub fn with_document(mut self, name: &str, days: i64, lead: u32) -> Self {
            let expiry = self.today + Duration::days(days);
            self.store
                .documents
                .push(Document::new(name, expiry, lead));
            self
        }
    }
}
