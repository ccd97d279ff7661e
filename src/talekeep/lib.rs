//! # Talekeep Architecture
//!
//! Talekeep is a **UI-agnostic reading-tracker library**. This is not a CLI application
//! that happens to have some library code—it's a library that happens to have a CLI client.
//!
//! It is the single source of truth for the durable, client-local state of a story
//! library: theme and font preferences, per-story reading progress and completion,
//! bookmarks, and the aggregate reading statistics derived from them. Every front end
//! reads and writes through this crate instead of touching raw storage directly.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (raw strings → validated StoryId)      │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic                                      │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract StateStore trait                                │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Invariants
//!
//! The record-level rules live on the model types, not in the storage code, so they
//! hold no matter which backend is in use:
//!
//! - Reading progress is monotonically non-decreasing; a lower sample from the same
//!   scroll stream never erases forward progress.
//! - Completion flips false→true at most once per story and is irreversible.
//! - Font sizes are clamped to a per-context band on every mutation, never rejected.
//! - Statistics are recomputed from the record set on demand; there are no
//!   incremental counters that can drift.
//!
//! ## Degraded Storage
//!
//! Persistence is local and must never take the application down. Missing or
//! corrupt state files read back as defaults, and a failed write is reported as a
//! warning message while the in-memory result still stands. See [`store`].
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! This means the same core could serve a web view, a TUI, or any other UI.
//!
//! ## Testing Strategy
//!
//! 1. **Model** (`model.rs`, `scroll.rs`): the clamp/monotonic/completion rules are
//!    pure functions and carry the lion's share of unit tests.
//! 2. **Commands** (`commands/*.rs`): business logic against `InMemoryStore`.
//! 3. **CLI** (`tests/`): end-to-end runs of the binary against a temp data dir.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Preferences`, `ReadingRecord`, `StoryId`)
//! - [`scroll`]: Viewport geometry → progress percentage, DOM-free
//! - [`catalog`]: The story catalog document and search over it
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod scroll;
pub mod store;
