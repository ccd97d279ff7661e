use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::ReadingStats;
use crate::store::StateStore;

/// Aggregate reading statistics, recomputed fresh from the record set on
/// every call. There is deliberately no stored counter to keep in sync.
pub fn run<S: StateStore>(store: &S) -> Result<CmdResult> {
    let records = store.load_records()?;
    let stats = ReadingStats::from_records(records.values());
    Ok(CmdResult::default().with_stats(stats))
}
