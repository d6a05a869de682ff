//! # Catalog Synchronizer
//!
//! Orchestrates the scanner, the codecs and the cache over one document
//! path. Every write is a whole-file read-transform-write except
//! [`append_entry`], which opens the file in append mode so bytes before the
//! original end of file cannot change.
//!
//! The cache is an explicit value: [`open`] returns it, [`persist_cache`]
//! takes it back. Nothing here holds state between calls, so callers are
//! free to re-open after every mutation or to keep one store alive for a
//! whole session; the on-disk outcome is the same.

use crate::cache::CacheStore;
use crate::error::Result;
use crate::model::Entry;
use crate::{frontmatter, record, scan};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Everything one load pass recovers from a document.
#[derive(Debug, Clone, Default)]
pub struct LoadedCatalog {
    /// Cache rebuilt from front matter plus every decodable entry block.
    pub cache: CacheStore,
    /// The decodable entries, in document order.
    pub entries: Vec<Entry>,
    /// Entry blocks the scanner found but the record codec rejected.
    pub skipped_blocks: usize,
}

/// Reads and scans the document at `path`. A missing file yields a default
/// store (seeded proficiency, no entries); any other read failure is an
/// error. Malformed front matter contributes nothing; malformed entry
/// blocks are counted and skipped.
pub fn open(path: &Path) -> Result<LoadedCatalog> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(LoadedCatalog::default())
        }
        Err(err) => return Err(err.into()),
    };
    Ok(load_from_text(&text))
}

/// The pure part of [`open`]: rebuilds the cache and entry list from raw
/// document text.
pub fn load_from_text(text: &str) -> LoadedCatalog {
    let mut loaded = LoadedCatalog::default();

    if let Some(block) = scan::locate_front_matter(text) {
        // A front matter that does not decode reads as if it were absent
        if let Ok(snapshot) = frontmatter::decode(block.inner.slice(text)) {
            loaded.cache.merge_snapshot(&snapshot);
        }
    }

    for block in scan::entry_blocks(text) {
        match record::decode(block.inner.slice(text)) {
            Ok(entry) => {
                loaded.cache.merge_entry(&entry);
                loaded.entries.push(entry);
            }
            Err(_) => loaded.skipped_blocks += 1,
        }
    }

    loaded
}

/// Rewrites the document's front matter from `store`, leaving every byte
/// outside the front-matter span untouched. Missing file reads as empty
/// text, so this also creates a document from nothing. In the add flow this
/// runs before [`append_entry`], which keeps the persisted cache ahead of
/// the appended block.
pub fn persist_cache(path: &Path, store: &CacheStore) -> Result<()> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(err) => return Err(err.into()),
    };
    let updated = splice_front_matter(&text, store)?;
    fs::write(path, updated)?;
    Ok(())
}

/// The pure part of [`persist_cache`]: replaces the located front-matter
/// span with a freshly encoded one, or prepends one if the document has
/// none.
pub fn splice_front_matter(text: &str, store: &CacheStore) -> Result<String> {
    let block = format!(
        "{}\n{}{}",
        scan::DELIMITER,
        frontmatter::encode(store)?,
        scan::DELIMITER
    );
    Ok(match scan::locate_front_matter(text) {
        Some(span) => format!(
            "{}{}{}",
            &text[..span.outer.start],
            block,
            &text[span.outer.end..]
        ),
        None => format!("{}\n\n{}", block, text),
    })
}

/// Appends one encoded entry, preceded by a blank-line separator, at end of
/// file. Append mode leaves everything before the old end of file alone.
pub fn append_entry(path: &Path, entry: &Entry) -> Result<()> {
    let block = record::encode(entry)?;
    let mut file = fs::OpenOptions::new().create(true).append(true).open(path)?;
    write!(file, "\n{}", block)?;
    Ok(())
}

/// Writes a fresh catalog: default front matter (so the first `open` sees
/// exactly the seeded store) plus a prose skeleton and one template entry
/// block showing the record shape. The template's placeholder date keeps it
/// from ever feeding the cache.
pub fn create_new(path: &Path) -> Result<()> {
    fs::write(path, new_catalog_template()?)?;
    Ok(())
}

/// The template text written by [`create_new`].
pub fn new_catalog_template() -> Result<String> {
    let front = splice_front_matter("", &CacheStore::default())?;
    Ok(format!(
        "{}# Developer's Toolbelt

This file contains a curated list of development tools and resources.

## Tool Template (YAML)

### Tool Name

```yaml
---
name: Tool Name
category:
- primary: Development Tools
- secondary: Template
language: YAML
lastUsed: YYYY-MM-DD
proficiency: beginner|intermediate|advanced
documentation:
- title: Official Documentation
  url: https://example.com/docs
alternatives:
- name: Alternative Tool
  url: https://example.com
tags:
- example
- template
description: Replace this block with a real tool entry.
---
```
",
        front
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::Bucket;

    #[test]
    fn test_load_from_text_merges_front_matter_and_entries() {
        let text = "\
---
cache:
  primary_category:
  - Editors
  secondary_category: []
  language:
  - Go
  proficiency:
  - advanced
  - beginner
  - intermediate
  tags: []
---

### Grep

```yaml
---
name: Grep
category:
- primary: CLI
- secondary: Search
language: C
lastUsed: 2024-05-01
proficiency: advanced
documentation: []
alternatives: []
tags:
- text
description: ''
---
```
";
        let loaded = load_from_text(text);
        assert_eq!(loaded.entries.len(), 1);
        assert_eq!(loaded.skipped_blocks, 0);
        assert!(loaded.cache.values(Bucket::PrimaryCategory).contains("Editors"));
        assert!(loaded.cache.values(Bucket::PrimaryCategory).contains("CLI"));
        assert!(loaded.cache.values(Bucket::Language).contains("Go"));
        assert!(loaded.cache.values(Bucket::Language).contains("C"));
        assert!(loaded.cache.values(Bucket::Tags).contains("text"));
    }

    #[test]
    fn test_load_from_text_skips_malformed_blocks() {
        let text = "\
```yaml
---
name: [unclosed
---
```

```yaml
---
name: Valid
lastUsed: 2024-01-01
---
```
";
        let loaded = load_from_text(text);
        assert_eq!(loaded.entries.len(), 1);
        assert_eq!(loaded.entries[0].name, "Valid");
        assert_eq!(loaded.skipped_blocks, 1);
    }

    #[test]
    fn test_load_from_text_bad_front_matter_contributes_nothing() {
        let text = "---\n: : not yaml : :\n---\nbody\n";
        let loaded = load_from_text(text);
        assert_eq!(loaded.cache, CacheStore::default());
    }

    #[test]
    fn test_splice_replaces_only_the_front_matter_span() {
        let text = "---\ncache:\n  tags:\n  - old\n---\nbody stays\n\nmore body\n";
        let mut store = CacheStore::default();
        store.add(Bucket::Tags, "new");
        let updated = splice_front_matter(text, &store).unwrap();
        assert!(updated.ends_with("\nbody stays\n\nmore body\n"));
        assert!(updated.contains("- new"));
        // The replaced span no longer mentions the old value
        assert!(!updated.contains("old"));
    }

    #[test]
    fn test_splice_prepends_when_absent() {
        let text = "# Plain document\n";
        let updated = splice_front_matter(text, &CacheStore::default()).unwrap();
        assert!(updated.starts_with("---\ncache:\n"));
        assert!(updated.ends_with("---\n\n# Plain document\n"));
    }

    #[test]
    fn test_template_loads_as_exact_default_store() {
        let template = new_catalog_template().unwrap();
        let loaded = load_from_text(&template);
        assert_eq!(loaded.cache, CacheStore::default());
        // The template block is present but intentionally undecodable
        assert_eq!(loaded.entries.len(), 0);
        assert_eq!(loaded.skipped_blocks, 1);
    }
}
