use crate::error::{Result, TalekeepError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque, stable identifier for one story (the catalog slug).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoryId(String);

impl StoryId {
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(TalekeepError::InvalidStoryId(raw));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl std::str::FromStr for Theme {
    type Err = TalekeepError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(TalekeepError::Api(format!("Unknown theme: {}", other))),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => f.write_str("light"),
            Theme::Dark => f.write_str("dark"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    #[default]
    Default,
    Serif,
}

impl std::str::FromStr for FontFamily {
    type Err = TalekeepError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "default" => Ok(FontFamily::Default),
            "serif" => Ok(FontFamily::Serif),
            other => Err(TalekeepError::Api(format!("Unknown font family: {}", other))),
        }
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontFamily::Default => f.write_str("default"),
            FontFamily::Serif => f.write_str("serif"),
        }
    }
}

/// The font size context a caller adjusts: the site chrome and the in-story
/// reader carry different clamp bands and defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontContext {
    Site,
    Reader,
}

impl FontContext {
    pub fn band(self) -> FontBand {
        match self {
            FontContext::Site => FontBand {
                min: 12,
                max: 24,
                default: 16,
            },
            FontContext::Reader => FontBand {
                min: 14,
                max: 24,
                default: 18,
            },
        }
    }
}

/// Valid pixel range for one font size context. Values outside the band are
/// clamped on every mutation, never rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontBand {
    pub min: i32,
    pub max: i32,
    pub default: i32,
}

impl FontBand {
    pub fn clamp(&self, px: i32) -> i32 {
        px.clamp(self.min, self.max)
    }
}

/// Site-wide display settings, independent of any single story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub theme: Theme,

    #[serde(default = "default_site_font")]
    pub site_font_px: i32,

    #[serde(default = "default_reader_font")]
    pub reader_font_px: i32,

    #[serde(default)]
    pub font_family: FontFamily,
}

fn default_site_font() -> i32 {
    FontContext::Site.band().default
}

fn default_reader_font() -> i32 {
    FontContext::Reader.band().default
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            site_font_px: default_site_font(),
            reader_font_px: default_reader_font(),
            font_family: FontFamily::default(),
        }
    }
}

impl Preferences {
    pub fn font_px(&self, ctx: FontContext) -> i32 {
        match ctx {
            FontContext::Site => self.site_font_px,
            FontContext::Reader => self.reader_font_px,
        }
    }

    /// Adjust the size for one context by `delta`, clamped to the context band.
    /// Returns the resulting size so callers can update their display without
    /// a second read.
    pub fn adjust_font(&mut self, ctx: FontContext, delta: i32) -> i32 {
        let band = ctx.band();
        let new = band.clamp(self.font_px(ctx).saturating_add(delta));
        self.set_font(ctx, new);
        new
    }

    /// Restore the context's default size. Returns the resulting size.
    pub fn reset_font(&mut self, ctx: FontContext) -> i32 {
        let def = ctx.band().default;
        self.set_font(ctx, def);
        def
    }

    fn set_font(&mut self, ctx: FontContext, px: i32) {
        match ctx {
            FontContext::Site => self.site_font_px = px,
            FontContext::Reader => self.reader_font_px = px,
        }
    }
}

/// Outcome of one progress write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProgressUpdate {
    /// The stored percent actually increased.
    pub updated: bool,
    /// This write crossed the completion threshold for the first time.
    pub completed_just_now: bool,
}

/// Durable per-story reading state. Created lazily on first write; never
/// deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ReadingRecord {
    #[serde(default)]
    pub progress_percent: f64,

    #[serde(default)]
    pub completed: bool,

    #[serde(default)]
    pub bookmarked: bool,

    #[serde(default)]
    pub last_read_at: Option<DateTime<Utc>>,

    /// Cumulative time read across all sessions, in seconds.
    #[serde(default)]
    pub time_read_secs: u64,
}

impl ReadingRecord {
    /// Apply one progress sample. The stored percent only moves forward:
    /// a lower reading (page resize, transient scroll jump) is a no-op.
    /// Crossing `threshold` marks the record completed exactly once.
    pub fn apply_progress(&mut self, percent: f64, threshold: f64) -> ProgressUpdate {
        let clamped = percent.clamp(0.0, 100.0);
        if clamped <= self.progress_percent {
            return ProgressUpdate::default();
        }

        self.progress_percent = clamped;
        let completed_just_now = !self.completed && clamped >= threshold;
        if completed_just_now {
            self.completed = true;
        }

        ProgressUpdate {
            updated: true,
            completed_just_now,
        }
    }

    /// Explicit user action: raise progress to 100 and mark completed.
    /// Only ever moves upward, consistent with the monotonic invariant.
    pub fn force_complete(&mut self) -> ProgressUpdate {
        let completed_just_now = !self.completed;
        self.progress_percent = 100.0;
        self.completed = true;
        ProgressUpdate {
            updated: true,
            completed_just_now,
        }
    }

    /// Flip the bookmark flag; returns the new value.
    pub fn toggle_bookmark(&mut self) -> bool {
        self.bookmarked = !self.bookmarked;
        self.bookmarked
    }

    /// Stamp the start of a reading session.
    pub fn begin_session(&mut self, now: DateTime<Utc>) {
        self.last_read_at = Some(now);
    }

    /// Add one flushed session's elapsed time to the cumulative total.
    pub fn add_session_time(&mut self, elapsed_secs: u64, now: DateTime<Utc>) {
        self.time_read_secs = self.time_read_secs.saturating_add(elapsed_secs);
        self.last_read_at = Some(now);
    }
}

/// Aggregates derived from the full record set. Recomputed on demand —
/// never independently mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReadingStats {
    pub stories_read: usize,
    pub total_time_secs: u64,
    pub favorites: usize,
}

impl ReadingStats {
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a ReadingRecord>,
    {
        let mut stats = Self::default();
        for record in records {
            if record.completed {
                stats.stories_read += 1;
            }
            if record.bookmarked {
                stats.favorites += 1;
            }
            stats.total_time_secs += record.time_read_secs;
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: f64 = 95.0;

    #[test]
    fn story_id_rejects_empty() {
        assert!(StoryId::new("").is_err());
        assert!(StoryId::new("   ").is_err());
        assert!(StoryId::new("the-last-garden").is_ok());
    }

    #[test]
    fn progress_is_monotonic() {
        let mut rec = ReadingRecord::default();

        let up = rec.apply_progress(42.0, THRESHOLD);
        assert!(up.updated);
        assert!(!up.completed_just_now);
        assert_eq!(rec.progress_percent, 42.0);

        // Lower sample from the same stream is ignored
        let up = rec.apply_progress(30.0, THRESHOLD);
        assert!(!up.updated);
        assert_eq!(rec.progress_percent, 42.0);
    }

    #[test]
    fn progress_clamps_out_of_range_input() {
        let mut rec = ReadingRecord::default();
        rec.apply_progress(250.0, THRESHOLD);
        assert_eq!(rec.progress_percent, 100.0);

        let mut rec = ReadingRecord::default();
        let up = rec.apply_progress(-5.0, THRESHOLD);
        assert!(!up.updated);
        assert_eq!(rec.progress_percent, 0.0);
    }

    #[test]
    fn completion_fires_exactly_once() {
        let mut rec = ReadingRecord::default();

        let up = rec.apply_progress(96.0, THRESHOLD);
        assert!(up.updated);
        assert!(up.completed_just_now);
        assert!(rec.completed);

        // Repeated crossings do not re-trigger
        let up = rec.apply_progress(98.0, THRESHOLD);
        assert!(up.updated);
        assert!(!up.completed_just_now);

        // Completion never reverts
        let up = rec.apply_progress(50.0, THRESHOLD);
        assert!(!up.updated);
        assert!(rec.completed);
        assert_eq!(rec.progress_percent, 98.0);
    }

    #[test]
    fn read_in_two_sittings_scenario() {
        let mut rec = ReadingRecord::default();

        let up = rec.apply_progress(42.0, THRESHOLD);
        assert_eq!((up.updated, up.completed_just_now), (true, false));
        assert_eq!(rec.progress_percent, 42.0);

        let up = rec.apply_progress(30.0, THRESHOLD);
        assert_eq!((up.updated, up.completed_just_now), (false, false));
        assert_eq!(rec.progress_percent, 42.0);

        let up = rec.apply_progress(96.0, THRESHOLD);
        assert_eq!((up.updated, up.completed_just_now), (true, true));
        assert!(rec.completed);

        let up = rec.apply_progress(50.0, THRESHOLD);
        assert_eq!((up.updated, up.completed_just_now), (false, false));
        assert_eq!(rec.progress_percent, 96.0);
        assert!(rec.completed);
    }

    #[test]
    fn force_complete_only_raises() {
        let mut rec = ReadingRecord::default();
        rec.apply_progress(40.0, THRESHOLD);

        let up = rec.force_complete();
        assert!(up.completed_just_now);
        assert_eq!(rec.progress_percent, 100.0);

        // Second call keeps state, reports nothing new
        let up = rec.force_complete();
        assert!(!up.completed_just_now);
        assert!(rec.completed);
    }

    #[test]
    fn bookmark_toggle_parity() {
        let mut rec = ReadingRecord::default();
        assert!(rec.toggle_bookmark());
        assert!(!rec.toggle_bookmark());
        assert!(!rec.bookmarked);
    }

    #[test]
    fn font_adjust_clamps_to_band() {
        let mut prefs = Preferences::default();

        // Reader band is [14, 24], default 18
        assert_eq!(prefs.adjust_font(FontContext::Reader, 100), 24);
        assert_eq!(prefs.adjust_font(FontContext::Reader, 2), 24);
        assert_eq!(prefs.adjust_font(FontContext::Reader, -100), 14);
        assert_eq!(prefs.adjust_font(FontContext::Reader, -4), 14);

        // Site band is [12, 24], default 16
        assert_eq!(prefs.adjust_font(FontContext::Site, -2), 14);
        assert_eq!(prefs.adjust_font(FontContext::Site, -4), 12);
        assert_eq!(prefs.reset_font(FontContext::Site), 16);
    }

    #[test]
    fn font_bounds_from_extremes() {
        let mut prefs = Preferences {
            site_font_px: 24,
            ..Default::default()
        };
        assert_eq!(prefs.adjust_font(FontContext::Site, 2), 24);

        prefs.site_font_px = 12;
        assert_eq!(prefs.adjust_font(FontContext::Site, -4), 12);
    }

    #[test]
    fn stats_derive_from_records() {
        let mut a = ReadingRecord::default();
        a.apply_progress(100.0, THRESHOLD);
        a.add_session_time(120, Utc::now());

        let mut b = ReadingRecord::default();
        b.toggle_bookmark();
        b.add_session_time(60, Utc::now());

        let c = ReadingRecord::default();

        let stats = ReadingStats::from_records([&a, &b, &c]);
        assert_eq!(stats.stories_read, 1);
        assert_eq!(stats.favorites, 1);
        assert_eq!(stats.total_time_secs, 180);
    }

    #[test]
    fn partial_preferences_json_loads_with_defaults() {
        let prefs: Preferences = serde_json::from_str(r#"{"theme":"light"}"#).unwrap();
        assert_eq!(prefs.theme, Theme::Light);
        assert_eq!(prefs.site_font_px, 16);
        assert_eq!(prefs.reader_font_px, 18);
        assert_eq!(prefs.font_family, FontFamily::Default);
    }
}
