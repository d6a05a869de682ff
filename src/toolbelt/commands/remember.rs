use crate::cache::Bucket;
use crate::catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use std::path::Path;

/// Inserts one value into a cache bucket and persists the front matter
/// right away, without touching any entry block.
pub fn run(path: &Path, bucket: Bucket, value: &str) -> Result<CmdResult> {
    let value = value.trim();
    if value.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("Nothing to remember."));
        return Ok(result);
    }

    let mut loaded = catalog::open(path)?;
    loaded.cache.add(bucket, value);
    catalog::persist_cache(path, &loaded.cache)?;

    let mut result = CmdResult::default().with_cache(loaded.cache.snapshot());
    result.add_message(CmdMessage::success(format!(
        "Remembered {} under {}",
        value, bucket
    )));
    Ok(result)
}
