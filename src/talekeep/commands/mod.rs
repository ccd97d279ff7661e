use crate::config::TalekeepConfig;
use crate::model::{Preferences, ProgressUpdate, ReadingRecord, ReadingStats, StoryId};
use std::path::PathBuf;

pub mod bookmark;
pub mod config;
pub mod helpers;
pub mod init;
pub mod list;
pub mod prefs;
pub mod progress;
pub mod stats;
pub mod view;

/// Filesystem locations the commands may need outside the store itself.
#[derive(Debug, Clone)]
pub struct StorePaths {
    /// Directory holding the state documents and config.json
    pub data: PathBuf,
}

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub records: Vec<(StoryId, ReadingRecord)>,
    pub listed_stories: Vec<list::ListedStory>,
    pub preferences: Option<Preferences>,
    pub progress: Option<ProgressUpdate>,
    pub font_px: Option<i32>,
    pub bookmarked: Option<bool>,
    pub stats: Option<ReadingStats>,
    pub config: Option<TalekeepConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_record(mut self, id: StoryId, record: ReadingRecord) -> Self {
        self.records.push((id, record));
        self
    }

    pub fn with_preferences(mut self, prefs: Preferences) -> Self {
        self.preferences = Some(prefs);
        self
    }

    pub fn with_stats(mut self, stats: ReadingStats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_config(mut self, config: TalekeepConfig) -> Self {
        self.config = Some(config);
        self
    }
}
