use crate::commands::helpers::{load_record, save_record_or_warn};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::StoryId;
use crate::store::StateStore;

/// Flip the bookmark flag for a story, creating its record on first use.
/// Returns the new value in `CmdResult::bookmarked`.
pub fn toggle<S: StateStore>(store: &mut S, id: &StoryId) -> Result<CmdResult> {
    let mut record = load_record(store, id)?;
    let bookmarked = record.toggle_bookmark();

    let mut result = CmdResult::default();
    result.bookmarked = Some(bookmarked);
    save_record_or_warn(store, id, &record, &mut result);

    let verb = if bookmarked { "Bookmarked" } else { "Removed bookmark from" };
    result.add_message(CmdMessage::success(format!("{} {}", verb, id)));
    result.records.push((id.clone(), record));
    Ok(result)
}
