use crate::cache::Bucket;
use crate::catalog::{self, LoadedCatalog};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use std::path::Path;

/// Reports remembered values: one bucket's sorted list, or the whole
/// snapshot. A document that cannot be read still yields the seeded
/// defaults, with a warning, so completion data is never a hard failure.
pub fn run(path: &Path, bucket: Option<Bucket>) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let loaded = match catalog::open(path) {
        Ok(loaded) => loaded,
        Err(err) => {
            result.add_message(CmdMessage::warning(format!(
                "Could not load cached values: {}",
                err
            )));
            LoadedCatalog::default()
        }
    };

    match bucket {
        Some(bucket) => {
            let suggestions = loaded.cache.values(bucket).iter().cloned().collect();
            Ok(result.with_suggestions(suggestions))
        }
        None => Ok(result.with_cache(loaded.cache.snapshot())),
    }
}
