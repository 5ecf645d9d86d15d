//! File-backed persistence layer for the Bitlab teaching tools.
//!
//! This crate implements the behavior behind the session, saved-state,
//! assembly-sharing and analytics endpoints as a plain library, so any HTTP
//! front end can satisfy the request/response shapes. Storage is a
//! best-effort JSON file cache: no transactions, no durability guarantees
//! beyond a successful write.

/// Error types for the store.
pub mod errors;
pub use errors::StoreError;

/// Store configuration and the JSON file backend.
pub mod store;
pub use store::{JsonStore, StoreConfig};

/// Session records and activity tracking.
pub mod session;
pub use session::{ActivityEntry, SessionRecord};

/// Named saved-state blobs with share links.
pub mod state;
pub use state::{SavedState, SavedStateSummary};

/// Shared assembly-trace snippets.
pub mod assembly;
pub use assembly::AssemblyRecord;

/// Usage analytics accumulation and summaries.
pub mod analytics;
pub use analytics::{Analytics, AnalyticsSummary, ConversionEvent, ToolCount};

/// Stateless server-side mirrors of the conversion operations.
pub mod convert;
pub use convert::{
    binary_arithmetic, convert, parse_operation, BinaryArithmeticResponse, ConversionSteps,
    ConvertResponse,
};

#[cfg(test)]
use tempfile as _;
