//! Shared assembly-trace snippets.
//!
//! Each snippet is a plain text file (`assembly_<id>.txt`) in the data
//! directory; the metadata record is returned to the caller rather than
//! persisted, matching the share-link contract.

use std::fs;

use serde::{Deserialize, Serialize};

use crate::errors::StoreError;
use crate::store::{is_valid_id, unix_now, JsonStore};

/// Metadata returned when a snippet is shared.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssemblyRecord {
    /// Store-issued identifier.
    pub id: String,
    /// Caller-supplied description (`"Untitled"` when omitted).
    pub description: String,
    /// UNIX seconds at save time.
    pub created_at: u64,
    /// Share link for loading this snippet.
    pub share_url: String,
}

fn snippet_file(id: &str) -> String {
    format!("assembly_{id}.txt")
}

impl JsonStore {
    /// Persists an assembly snippet and returns its share metadata.
    ///
    /// # Errors
    ///
    /// [`StoreError::InvalidRequest`] for empty code, otherwise any
    /// filesystem error.
    pub fn save_assembly(
        &self,
        code: &str,
        description: Option<&str>,
    ) -> Result<AssemblyRecord, StoreError> {
        if code.trim().is_empty() {
            return Err(StoreError::InvalidRequest {
                reason: "assembly code must not be empty".to_owned(),
            });
        }

        let id = self.next_id()?;
        fs::write(self.file_path(&snippet_file(&id)), code)?;
        Ok(AssemblyRecord {
            share_url: self.share_url("assembly", &id),
            description: description.unwrap_or("Untitled").to_owned(),
            created_at: unix_now(),
            id,
        })
    }

    /// Loads a shared assembly snippet.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] when the identifier is malformed or the
    /// snippet file does not exist.
    pub fn load_assembly(&self, id: &str) -> Result<String, StoreError> {
        if !is_valid_id(id) {
            return Err(StoreError::NotFound {
                kind: "assembly",
                id: id.to_owned(),
            });
        }
        fs::read_to_string(self.file_path(&snippet_file(id))).map_err(|_| StoreError::NotFound {
            kind: "assembly",
            id: id.to_owned(),
        })
    }
}
