use super::StateStore;
use crate::error::{Result, TalekeepError};
use crate::model::{Preferences, ReadingRecord, StoryId};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

const PREFERENCES_FILENAME: &str = "preferences.json";
const PROGRESS_FILENAME: &str = "progress.json";

/// File-backed store: two JSON documents in a data directory, written
/// through on every mutation.
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn preferences_path(&self) -> PathBuf {
        self.data_dir.join(PREFERENCES_FILENAME)
    }

    fn progress_path(&self) -> PathBuf {
        self.data_dir.join(PROGRESS_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.data_dir.exists() {
            fs::create_dir_all(&self.data_dir).map_err(TalekeepError::Io)?;
        }
        Ok(())
    }

    /// Read a JSON document, treating anything unreadable as absent.
    /// A malformed blob is reinitialized to defaults rather than surfaced —
    /// the next write replaces it.
    fn read_document<T: serde::de::DeserializeOwned + Default>(&self, path: &Path) -> T {
        if !path.exists() {
            return T::default();
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "state file unreadable, using defaults");
                return T::default();
            }
        };

        match serde_json::from_str(&content) {
            Ok(value) => value,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "state file malformed, using defaults");
                T::default()
            }
        }
    }

    fn write_document<T: serde::Serialize>(&self, path: &Path, value: &T) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(value).map_err(TalekeepError::Serialization)?;
        fs::write(path, content).map_err(TalekeepError::Io)?;
        Ok(())
    }
}

impl StateStore for FileStore {
    fn load_preferences(&self) -> Result<Preferences> {
        Ok(self.read_document(&self.preferences_path()))
    }

    fn save_preferences(&mut self, prefs: &Preferences) -> Result<()> {
        self.write_document(&self.preferences_path(), prefs)
    }

    fn load_records(&self) -> Result<HashMap<StoryId, ReadingRecord>> {
        Ok(self.read_document(&self.progress_path()))
    }

    fn get_record(&self, id: &StoryId) -> Result<Option<ReadingRecord>> {
        let mut records = self.load_records()?;
        Ok(records.remove(id))
    }

    fn save_record(&mut self, id: &StoryId, record: &ReadingRecord) -> Result<()> {
        let mut records = self.load_records()?;
        records.insert(id.clone(), record.clone());
        self.write_document(&self.progress_path(), &records)
    }
}
