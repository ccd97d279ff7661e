use crate::commands::helpers::{load_record, save_record_or_warn};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::StoryId;
use crate::store::StateStore;
use chrono::Utc;

/// One progress sample for a story. The stored percent only moves forward;
/// crossing the completion threshold is announced exactly once.
pub fn record<S: StateStore>(
    store: &mut S,
    id: &StoryId,
    percent: f64,
    threshold: f64,
) -> Result<CmdResult> {
    let mut record = load_record(store, id)?;
    let update = record.apply_progress(percent, threshold);

    let mut result = CmdResult::default();
    result.progress = Some(update);

    if update.updated {
        save_record_or_warn(store, id, &record, &mut result);
        result.add_message(CmdMessage::success(format!(
            "{}: {:.0}% read",
            id, record.progress_percent
        )));
    } else {
        result.add_message(CmdMessage::info(format!(
            "{}: already at {:.0}%, sample ignored",
            id, record.progress_percent
        )));
    }

    if update.completed_just_now {
        result.add_message(CmdMessage::success(format!(
            "Story completed! You've finished \"{}\"",
            id
        )));
    }

    result.records.push((id.clone(), record));
    Ok(result)
}

/// Explicit mark-complete: forces progress to 100 regardless of the current
/// sample stream. Upward only.
pub fn complete<S: StateStore>(store: &mut S, id: &StoryId) -> Result<CmdResult> {
    let mut record = load_record(store, id)?;
    let update = record.force_complete();

    let mut result = CmdResult::default();
    result.progress = Some(update);
    save_record_or_warn(store, id, &record, &mut result);

    if update.completed_just_now {
        result.add_message(CmdMessage::success(format!("Marked {} as completed", id)));
    } else {
        result.add_message(CmdMessage::info(format!("{} was already completed", id)));
    }

    result.records.push((id.clone(), record));
    Ok(result)
}

/// Stamp the start of a reading session (updates last-read time).
pub fn begin_session<S: StateStore>(store: &mut S, id: &StoryId) -> Result<CmdResult> {
    let mut record = load_record(store, id)?;
    record.begin_session(Utc::now());

    let mut result = CmdResult::default();
    save_record_or_warn(store, id, &record, &mut result);
    result.add_message(CmdMessage::info(format!("Reading session started: {}", id)));
    result.records.push((id.clone(), record));
    Ok(result)
}

/// Flush one finished session's elapsed time into the per-story cumulative
/// total. Callers flush each session exactly once, at session end; a session
/// lost to a crash is simply not counted.
pub fn log_session<S: StateStore>(
    store: &mut S,
    id: &StoryId,
    elapsed_secs: u64,
) -> Result<CmdResult> {
    let mut record = load_record(store, id)?;
    record.add_session_time(elapsed_secs, Utc::now());

    let mut result = CmdResult::default();
    save_record_or_warn(store, id, &record, &mut result);
    result.add_message(CmdMessage::success(format!(
        "Logged {} of reading on {} ({} total)",
        format_duration(elapsed_secs),
        id,
        format_duration(record.time_read_secs)
    )));
    result.records.push((id.clone(), record));
    Ok(result)
}

/// "2h 5m", "3m 20s", "45s"
pub fn format_duration(secs: u64) -> String {
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;

    if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}
