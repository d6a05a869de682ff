use crate::catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ToolbeltError};
use std::path::Path;

pub fn run(path: &Path, force: bool) -> Result<CmdResult> {
    if path.exists() && !force {
        return Err(ToolbeltError::Api(format!(
            "{} already exists (pass --force to overwrite)",
            path.display()
        )));
    }
    catalog::create_new(path)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Created new toolbelt file: {}",
        path.display()
    )));
    Ok(result)
}
