//! # Storage Layer
//!
//! This module defines the storage abstraction for talekeep. The
//! [`StateStore`] trait allows the application to work with different
//! persistence backends.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Allow **future backends** (browser local storage, database) without
//!   changing core logic
//! - Keep the progress/preference rules **decoupled** from persistence
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - Preferences in `preferences.json`
//!   - Per-story reading records in `progress.json` (map keyed by story id)
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Fast, isolated test execution
//!
//! ## Degradation Contract
//!
//! Local persistence can be unavailable (quota, permissions) or hold a
//! corrupted blob. Reads therefore never fail the caller: a missing or
//! malformed document loads as defaults, with a `tracing` warning for the
//! malformed case. Writes return `Result` and the command layer downgrades
//! a failure to a warning message — the application stays usable without
//! persistence for the rest of the session.

use crate::error::Result;
use crate::model::{Preferences, ReadingRecord, StoryId};
use std::collections::HashMap;

pub mod fs;
pub mod memory;

/// Abstract interface for durable preference and reading-record storage.
///
/// Writes are last-write-wins per document; there is no cross-process
/// coordination.
pub trait StateStore {
    /// Current preferences, with defaults for anything missing
    fn load_preferences(&self) -> Result<Preferences>;

    /// Persist the full preferences record
    fn save_preferences(&mut self, prefs: &Preferences) -> Result<()>;

    /// All stored reading records
    fn load_records(&self) -> Result<HashMap<StoryId, ReadingRecord>>;

    /// One story's record, if a write has ever created it
    fn get_record(&self, id: &StoryId) -> Result<Option<ReadingRecord>>;

    /// Persist one story's record (create or update)
    fn save_record(&mut self, id: &StoryId, record: &ReadingRecord) -> Result<()>;
}
