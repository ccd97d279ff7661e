use super::StateStore;
use crate::error::Result;
use crate::model::{Preferences, ReadingRecord, StoryId};
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    preferences: Preferences,
    records: HashMap<StoryId, ReadingRecord>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for InMemoryStore {
    fn load_preferences(&self) -> Result<Preferences> {
        Ok(self.preferences.clone())
    }

    fn save_preferences(&mut self, prefs: &Preferences) -> Result<()> {
        self.preferences = prefs.clone();
        Ok(())
    }

    fn load_records(&self) -> Result<HashMap<StoryId, ReadingRecord>> {
        Ok(self.records.clone())
    }

    fn get_record(&self, id: &StoryId) -> Result<Option<ReadingRecord>> {
        Ok(self.records.get(id).cloned())
    }

    fn save_record(&mut self, id: &StoryId, record: &ReadingRecord) -> Result<()> {
        self.records.insert(id.clone(), record.clone());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use chrono::Utc;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_progress(mut self, id: &str, percent: f64) -> Self {
            let id = StoryId::new(id).unwrap();
            let mut record = self.store.get_record(&id).unwrap().unwrap_or_default();
            record.apply_progress(percent, 95.0);
            self.store.save_record(&id, &record).unwrap();
            self
        }

        pub fn with_completed(mut self, id: &str) -> Self {
            let id = StoryId::new(id).unwrap();
            let mut record = self.store.get_record(&id).unwrap().unwrap_or_default();
            record.force_complete();
            self.store.save_record(&id, &record).unwrap();
            self
        }

        pub fn with_bookmark(mut self, id: &str) -> Self {
            let id = StoryId::new(id).unwrap();
            let mut record = self.store.get_record(&id).unwrap().unwrap_or_default();
            record.bookmarked = true;
            self.store.save_record(&id, &record).unwrap();
            self
        }

        pub fn with_time_read(mut self, id: &str, secs: u64) -> Self {
            let id = StoryId::new(id).unwrap();
            let mut record = self.store.get_record(&id).unwrap().unwrap_or_default();
            record.add_session_time(secs, Utc::now());
            self.store.save_record(&id, &record).unwrap();
            self
        }
    }
}
