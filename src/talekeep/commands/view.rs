use crate::commands::helpers::load_record;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::StoryId;
use crate::store::StateStore;

/// One story's reading record — the stored one, or a fresh default if no
/// write has ever happened. Looking at a record does not persist it.
pub fn run<S: StateStore>(store: &S, id: &StoryId) -> Result<CmdResult> {
    let record = load_record(store, id)?;
    Ok(CmdResult::default().with_record(id.clone(), record))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::StateStore;

    #[test]
    fn unknown_story_yields_default_without_persisting() {
        let fixture = StoreFixture::new();
        let store = fixture.store;
        let id = StoryId::new("never-seen").unwrap();

        let result = run(&store, &id).unwrap();
        let (_, record) = &result.records[0];
        assert_eq!(record.progress_percent, 0.0);
        assert!(!record.completed);
        assert!(!record.bookmarked);

        // Reading must not create an entry
        assert!(store.get_record(&id).unwrap().is_none());
        assert!(store.load_records().unwrap().is_empty());
    }

    #[test]
    fn returns_stored_record() {
        let fixture = StoreFixture::new().with_progress("story-a", 60.0);
        let id = StoryId::new("story-a").unwrap();

        let result = run(&fixture.store, &id).unwrap();
        let (_, record) = &result.records[0];
        assert_eq!(record.progress_percent, 60.0);
    }
}
