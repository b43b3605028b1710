use super::DocumentStore;
use crate::error::{DocwatchError, Result};
use crate::model::Document;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(DocwatchError::Io)?;
            }
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("documents");
        self.path
            .with_file_name(format!(".{}-{}.tmp", file_name, Uuid::new_v4()))
    }
}

impl DocumentStore for FileStore {
    fn load(&self) -> Result<Vec<Document>> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "store file missing, starting empty");
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).map_err(DocwatchError::Io)?;
        let documents: Vec<Document> =
            serde_json::from_str(&content).map_err(|e| DocwatchError::CorruptStore {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;

        if let Some(bad) = documents.iter().find(|d| d.name.trim().is_empty()) {
            return Err(DocwatchError::CorruptStore {
                path: self.path.clone(),
                reason: format!("record expiring {} has an empty name", bad.expiry_date),
            });
        }

        tracing::debug!(path = %self.path.display(), count = documents.len(), "loaded store");
        Ok(documents)
    }

    fn save(&mut self, documents: &[Document]) -> Result<()> {
        self.ensure_parent()?;

        let content =
            serde_json::to_string_pretty(documents).map_err(DocwatchError::Serialization)?;

        // Atomic write: readers see either the old file or the new one
        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, content).map_err(DocwatchError::Io)?;
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(DocwatchError::Io(e));
        }

        tracing::debug!(path = %self.path.display(), count = documents.len(), "saved store");
        Ok(())
    }
}
