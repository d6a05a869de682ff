use crate::catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use std::path::Path;

pub fn run(path: &Path) -> Result<CmdResult> {
    let loaded = catalog::open(path)?;

    let mut result = CmdResult::default()
        .with_cache(loaded.cache.snapshot())
        .with_entries(loaded.entries);
    if loaded.skipped_blocks > 0 {
        result.add_message(CmdMessage::warning(format!(
            "Skipped {} entry block(s) that could not be decoded",
            loaded.skipped_blocks
        )));
    }
    Ok(result)
}
