//! Named saved-state blobs with share links.
//!
//! States are opaque to the store: the blob is persisted verbatim and
//! returned byte-for-byte on load. Only the name and identifier are
//! interpreted.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::StoreError;
use crate::store::{unix_now, JsonStore, SAVED_STATES_FILE};

/// One saved calculator state.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedState {
    /// Store-issued identifier.
    pub id: String,
    /// Caller-chosen display name.
    pub name: String,
    /// The opaque state blob, persisted verbatim.
    pub state: Value,
    /// UNIX seconds at save time.
    pub created_at: u64,
    /// Share link for loading this state.
    pub share_url: String,
}

/// Listing entry for a saved state (the blob itself is omitted).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedStateSummary {
    /// Store-issued identifier.
    pub id: String,
    /// Caller-chosen display name.
    pub name: String,
    /// UNIX seconds at save time.
    pub created_at: u64,
    /// Share link for loading this state.
    pub share_url: String,
}

type StateMap = BTreeMap<String, SavedState>;

impl JsonStore {
    /// Persists a named state blob and returns the stored record with its
    /// share link.
    ///
    /// # Errors
    ///
    /// [`StoreError::InvalidRequest`] for an empty name, otherwise any
    /// backing-file error.
    pub fn save_state(&self, name: &str, state: Value) -> Result<SavedState, StoreError> {
        if name.trim().is_empty() {
            return Err(StoreError::InvalidRequest {
                reason: "state name must not be empty".to_owned(),
            });
        }

        let mut states: StateMap = self.read_json(SAVED_STATES_FILE)?;
        let id = self.next_id()?;
        let record = SavedState {
            share_url: self.share_url("state/load", &id),
            id: id.clone(),
            name: name.to_owned(),
            state,
            created_at: unix_now(),
        };
        states.insert(id, record.clone());
        self.write_json(SAVED_STATES_FILE, &states)?;
        Ok(record)
    }

    /// Loads a saved state by identifier.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] for an unknown identifier.
    pub fn load_state(&self, id: &str) -> Result<SavedState, StoreError> {
        let states: StateMap = self.read_json(SAVED_STATES_FILE)?;
        states.get(id).cloned().ok_or_else(|| StoreError::NotFound {
            kind: "state",
            id: id.to_owned(),
        })
    }

    /// Lists every saved state, oldest first.
    ///
    /// # Errors
    ///
    /// Any backing-file error.
    pub fn list_states(&self) -> Result<Vec<SavedStateSummary>, StoreError> {
        let states: StateMap = self.read_json(SAVED_STATES_FILE)?;
        let mut summaries: Vec<SavedStateSummary> = states
            .values()
            .map(|state| SavedStateSummary {
                id: state.id.clone(),
                name: state.name.clone(),
                created_at: state.created_at,
                share_url: state.share_url.clone(),
            })
            .collect();
        summaries.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(summaries)
    }

    /// Deletes a saved state.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] for an unknown identifier.
    pub fn delete_state(&self, id: &str) -> Result<(), StoreError> {
        let mut states: StateMap = self.read_json(SAVED_STATES_FILE)?;
        if states.remove(id).is_none() {
            return Err(StoreError::NotFound {
                kind: "state",
                id: id.to_owned(),
            });
        }
        self.write_json(SAVED_STATES_FILE, &states)
    }
}
