use crate::catalog::{Catalog, Story};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ReadingRecord;
use crate::store::StateStore;

/// Which stories to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoryFilter {
    #[default]
    All,
    Bookmarked,
    Completed,
}

/// One catalog entry joined with its reading record (default if unread).
#[derive(Debug, Clone)]
pub struct ListedStory {
    pub story: Story,
    pub record: ReadingRecord,
}

/// Catalog listing in publication order, each entry joined with the local
/// reading state. `search` narrows by the catalog's text fields first.
pub fn run<S: StateStore>(
    store: &S,
    catalog: &Catalog,
    filter: StoryFilter,
    search: Option<&str>,
) -> Result<CmdResult> {
    let records = store.load_records()?;

    let stories: Vec<&Story> = match search {
        Some(query) => catalog.search(query),
        None => catalog.stories.iter().collect(),
    };

    let listed: Vec<ListedStory> = stories
        .into_iter()
        .map(|story| {
            let record = records.get(&story.id).cloned().unwrap_or_default();
            ListedStory {
                story: story.clone(),
                record,
            }
        })
        .filter(|entry| match filter {
            StoryFilter::All => true,
            StoryFilter::Bookmarked => entry.record.bookmarked,
            StoryFilter::Completed => entry.record.completed,
        })
        .collect();

    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info("No stories found."));
    }
    result.listed_stories = listed;
    Ok(result)
}
