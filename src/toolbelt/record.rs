//! Record codec: one catalog entry to and from its fenced block.

use crate::error::Result;
use crate::model::Entry;
use crate::scan::{DELIMITER, ENTRY_FENCE};

/// Decodes the YAML inside one entry block. Strict: a block whose shape does
/// not match (missing `name`, a `lastUsed` that is not an ISO date, wrong
/// types) is an error, which scanning callers treat as "no contribution".
pub fn decode(yaml: &str) -> Result<Entry> {
    Ok(serde_yaml::from_str(yaml)?)
}

/// Encodes an entry as the full appendable block: level-3 heading with the
/// entry's name, blank line, fenced delimited YAML. Every field is always
/// emitted, empty or not, and the key order is fixed by the model.
pub fn encode(entry: &Entry) -> Result<String> {
    let yaml = serde_yaml::to_string(entry)?;
    Ok(format!(
        "### {}\n\n{}\n{}\n{}{}\n```\n",
        entry.name, ENTRY_FENCE, DELIMITER, yaml, DELIMITER
    ))
}
