use crate::commands::{CmdMessage, CmdResult, StorePaths};
use crate::config::TalekeepConfig;
use crate::error::{Result, TalekeepError};
use std::fs;

/// Create the data directory with a default config. Existing state is left
/// alone — running init twice is harmless.
pub fn run(paths: &StorePaths) -> Result<CmdResult> {
    let dir = &paths.data;
    let mut result = CmdResult::default();

    if dir.join("config.json").exists() {
        result.add_message(CmdMessage::info(format!(
            "Already initialized at {}",
            dir.display()
        )));
        return Ok(result);
    }

    fs::create_dir_all(dir).map_err(TalekeepError::Io)?;
    TalekeepConfig::default().save(dir)?;

    result.add_message(CmdMessage::success(format!(
        "Initialized talekeep data in {}",
        dir.display()
    )));
    Ok(result)
}
