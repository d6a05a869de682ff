//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the
//! single entry point for all toolbelt operations, regardless of the UI
//! being used.
//!
//! The facade:
//! - **Resolves the catalog path** once (`--file` override or configured
//!   default; neither present is a [`ToolbeltError::MissingPath`])
//! - **Normalizes inputs** (e.g., parsing bucket names into [`Bucket`])
//! - **Dispatches** to the appropriate command function
//!
//! It explicitly avoids business logic (that belongs in `commands/*.rs`),
//! I/O beyond what the commands do, and presentation concerns: it returns
//! data structures, not strings.

use crate::cache::Bucket;
use crate::commands;
use crate::error::{Result, ToolbeltError};
use crate::model::Entry;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// The main API facade for toolbelt operations.
///
/// Holds the resolved catalog path (if any) and the config directory; all
/// UI clients should interact through this API.
pub struct ToolbeltApi {
    catalog: Option<PathBuf>,
    config_dir: PathBuf,
}

impl ToolbeltApi {
    pub fn new(catalog: Option<PathBuf>, config_dir: PathBuf) -> Self {
        Self {
            catalog,
            config_dir,
        }
    }

    pub fn add_entry(&self, entry: Entry) -> Result<commands::CmdResult> {
        commands::add::run(self.catalog_path()?, entry)
    }

    pub fn list_entries(&self) -> Result<commands::CmdResult> {
        commands::list::run(self.catalog_path()?)
    }

    pub fn suggest(&self, bucket: Option<&str>) -> Result<commands::CmdResult> {
        let bucket = bucket.map(parse_bucket).transpose()?;
        commands::suggest::run(self.catalog_path()?, bucket)
    }

    pub fn remember(&self, bucket: &str, value: &str) -> Result<commands::CmdResult> {
        commands::remember::run(self.catalog_path()?, parse_bucket(bucket)?, value)
    }

    pub fn new_catalog(&self, path: Option<PathBuf>, force: bool) -> Result<commands::CmdResult> {
        let path = match path {
            Some(path) => path,
            None => self.catalog_path()?.to_path_buf(),
        };
        commands::new::run(&path, force)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    /// The catalog this invocation works on.
    pub fn catalog_path(&self) -> Result<&Path> {
        self.catalog.as_deref().ok_or(ToolbeltError::MissingPath)
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }
}

fn parse_bucket(name: &str) -> Result<Bucket> {
    Bucket::from_str(name).map_err(ToolbeltError::Api)
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
