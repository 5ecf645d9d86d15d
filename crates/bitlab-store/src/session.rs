//! Session records and activity tracking.
//!
//! Sessions live together in `sessions.json`, keyed by identifier. Every
//! activity update bumps `last_active` and the operation counter; tools are
//! recorded once each, operations append to the stack history.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::StoreError;
use crate::store::{unix_now, JsonStore, SESSIONS_FILE};

/// One recorded operation inside a session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ActivityEntry {
    /// UNIX seconds when the operation was reported.
    pub timestamp: u64,
    /// Free-form operation description from the client.
    pub operation: String,
}

/// One client session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    /// Store-issued identifier.
    pub id: String,
    /// UNIX seconds at creation.
    pub created_at: u64,
    /// UNIX seconds of the latest activity.
    pub last_active: u64,
    /// Operations reported by the client, oldest first.
    pub stack_history: Vec<ActivityEntry>,
    /// Number of activity updates received.
    pub operation_count: u64,
    /// Distinct tools the session touched, in first-use order.
    pub tools_used: Vec<String>,
}

type SessionMap = BTreeMap<String, SessionRecord>;

impl JsonStore {
    /// Creates a new session record.
    ///
    /// # Errors
    ///
    /// Any [`StoreError::Io`]/[`StoreError::Json`] from the backing file.
    pub fn create_session(&self) -> Result<SessionRecord, StoreError> {
        let mut sessions: SessionMap = self.read_json(SESSIONS_FILE)?;
        let now = unix_now();
        let record = SessionRecord {
            id: self.next_id()?,
            created_at: now,
            last_active: now,
            stack_history: Vec::new(),
            operation_count: 0,
            tools_used: Vec::new(),
        };
        sessions.insert(record.id.clone(), record.clone());
        self.write_json(SESSIONS_FILE, &sessions)?;
        Ok(record)
    }

    /// Looks up a session by identifier.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] for an unknown identifier.
    pub fn session(&self, id: &str) -> Result<SessionRecord, StoreError> {
        let sessions: SessionMap = self.read_json(SESSIONS_FILE)?;
        sessions.get(id).cloned().ok_or_else(|| StoreError::NotFound {
            kind: "session",
            id: id.to_owned(),
        })
    }

    /// Records activity against a session: bumps the counters, remembers
    /// the tool (once), and appends the operation to the stack history.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] for an unknown identifier.
    pub fn record_activity(
        &self,
        id: &str,
        tool: Option<&str>,
        operation: Option<&str>,
    ) -> Result<SessionRecord, StoreError> {
        let mut sessions: SessionMap = self.read_json(SESSIONS_FILE)?;
        let record = sessions.get_mut(id).ok_or_else(|| StoreError::NotFound {
            kind: "session",
            id: id.to_owned(),
        })?;

        record.last_active = unix_now();
        record.operation_count += 1;
        if let Some(tool) = tool {
            if !record.tools_used.iter().any(|used| used == tool) {
                record.tools_used.push(tool.to_owned());
            }
        }
        if let Some(operation) = operation {
            record.stack_history.push(ActivityEntry {
                timestamp: record.last_active,
                operation: operation.to_owned(),
            });
        }

        let updated = record.clone();
        self.write_json(SESSIONS_FILE, &sessions)?;
        Ok(updated)
    }
}
