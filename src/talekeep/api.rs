//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for all talekeep operations, regardless of the UI being used.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (raw story-id strings → validated [`StoryId`])
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **I/O operations**: no stdout, stderr, or file formatting
//! - **Presentation concerns**: returns data structures, not strings
//!
//! ## Generic Over StateStore
//!
//! `TalekeepApi<S: StateStore>` is generic over the storage backend:
//! - Production: `TalekeepApi<FileStore>`
//! - Testing: `TalekeepApi<InMemoryStore>`

use crate::catalog::Catalog;
use crate::commands;
use crate::config::TalekeepConfig;
use crate::error::Result;
use crate::model::{FontContext, FontFamily, StoryId, Theme};
use crate::store::StateStore;

/// The main API facade for talekeep operations.
///
/// Generic over `StateStore` to allow different storage backends.
/// All UI clients (CLI, web, etc.) should interact through this API.
pub struct TalekeepApi<S: StateStore> {
    store: S,
    config: TalekeepConfig,
    paths: commands::StorePaths,
}

impl<S: StateStore> TalekeepApi<S> {
    pub fn new(store: S, config: TalekeepConfig, paths: commands::StorePaths) -> Self {
        Self {
            store,
            config,
            paths,
        }
    }

    // --- Preferences ---

    pub fn preferences(&self) -> Result<commands::CmdResult> {
        commands::prefs::show(&self.store)
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<commands::CmdResult> {
        commands::prefs::set_theme(&mut self.store, theme)
    }

    pub fn set_font_family(&mut self, family: FontFamily) -> Result<commands::CmdResult> {
        commands::prefs::set_font_family(&mut self.store, family)
    }

    pub fn adjust_font_size(&mut self, ctx: FontContext, delta: i32) -> Result<commands::CmdResult> {
        commands::prefs::adjust_font(&mut self.store, ctx, delta)
    }

    pub fn reset_font_size(&mut self, ctx: FontContext) -> Result<commands::CmdResult> {
        commands::prefs::reset_font(&mut self.store, ctx)
    }

    // --- Reading records ---

    pub fn reading_record(&self, story: &str) -> Result<commands::CmdResult> {
        let id = StoryId::new(story)?;
        commands::view::run(&self.store, &id)
    }

    pub fn record_progress(&mut self, story: &str, percent: f64) -> Result<commands::CmdResult> {
        let id = StoryId::new(story)?;
        commands::progress::record(
            &mut self.store,
            &id,
            percent,
            self.config.completion_threshold,
        )
    }

    pub fn mark_complete(&mut self, story: &str) -> Result<commands::CmdResult> {
        let id = StoryId::new(story)?;
        commands::progress::complete(&mut self.store, &id)
    }

    pub fn toggle_bookmark(&mut self, story: &str) -> Result<commands::CmdResult> {
        let id = StoryId::new(story)?;
        commands::bookmark::toggle(&mut self.store, &id)
    }

    pub fn begin_session(&mut self, story: &str) -> Result<commands::CmdResult> {
        let id = StoryId::new(story)?;
        commands::progress::begin_session(&mut self.store, &id)
    }

    pub fn record_session_time(
        &mut self,
        story: &str,
        elapsed_secs: u64,
    ) -> Result<commands::CmdResult> {
        let id = StoryId::new(story)?;
        commands::progress::log_session(&mut self.store, &id, elapsed_secs)
    }

    // --- Aggregates & listing ---

    pub fn stats(&self) -> Result<commands::CmdResult> {
        commands::stats::run(&self.store)
    }

    pub fn list_stories(
        &self,
        catalog: &Catalog,
        filter: commands::list::StoryFilter,
        search: Option<&str>,
    ) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, catalog, filter, search)
    }

    // --- Housekeeping ---

    pub fn config_action(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn init(&self) -> Result<commands::CmdResult> {
        commands::init::run(&self.paths)
    }

    pub fn config(&self) -> &TalekeepConfig {
        &self.config
    }

    pub fn paths(&self) -> &commands::StorePaths {
        &self.paths
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::list::{ListedStory, StoryFilter};
pub use commands::{CmdMessage, CmdResult, MessageLevel, StorePaths};
