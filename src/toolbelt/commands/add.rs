use crate::catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Entry;
use std::path::Path;

/// Adds one entry: merge its facets into the cache, persist the front
/// matter, then append the encoded block. The cache write comes first, so
/// a reader always sees the cache at least as new as the last block.
pub fn run(path: &Path, entry: Entry) -> Result<CmdResult> {
    let mut loaded = catalog::open(path)?;
    loaded.cache.merge_entry(&entry);
    catalog::persist_cache(path, &loaded.cache)?;
    catalog::append_entry(path, &entry)?;

    let mut result = CmdResult::default().with_cache(loaded.cache.snapshot());
    result.add_message(CmdMessage::success(format!(
        "Added {} to catalog",
        entry.name
    )));
    Ok(result)
}
