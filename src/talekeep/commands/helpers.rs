use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Preferences, ReadingRecord, StoryId};
use crate::store::StateStore;

/// The stored record, or a fresh default if the story was never written.
/// Does not create a persisted entry.
pub fn load_record<S: StateStore>(store: &S, id: &StoryId) -> Result<ReadingRecord> {
    Ok(store.get_record(id)?.unwrap_or_default())
}

/// Persist a record, degrading a storage failure to a warning message.
/// The in-memory state in `result` stands either way; the site stays usable
/// without persistence.
pub fn save_record_or_warn<S: StateStore>(
    store: &mut S,
    id: &StoryId,
    record: &ReadingRecord,
    result: &mut CmdResult,
) {
    if let Err(e) = store.save_record(id, record) {
        result.add_message(CmdMessage::warning(format!(
            "Could not persist progress for {}: {} (changes last only for this session)",
            id, e
        )));
    }
}

/// Same degradation policy for the preferences document.
pub fn save_preferences_or_warn<S: StateStore>(
    store: &mut S,
    prefs: &Preferences,
    result: &mut CmdResult,
) {
    if let Err(e) = store.save_preferences(prefs) {
        result.add_message(CmdMessage::warning(format!(
            "Could not persist preferences: {} (changes last only for this session)",
            e
        )));
    }
}
