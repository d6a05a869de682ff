use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use toolbelt::cache::{Bucket, CacheStore};
use toolbelt::catalog;
use toolbelt::model::{CategoryFacet, Entry};
use toolbelt::{record, scan};

fn setup() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tools.md");
    (dir, path)
}

fn grep_entry() -> Entry {
    let mut entry = Entry::new("Grep".to_string());
    entry.category = vec![
        CategoryFacet::Primary("CLI".to_string()),
        CategoryFacet::Secondary("Search".to_string()),
    ];
    entry.language = "C".to_string();
    entry.last_used = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
    entry.tags = vec!["text".to_string(), "search".to_string()];
    entry
}

/// A hand-written catalog the way a user would keep one: prose around the
/// structured regions.
const HAND_WRITTEN: &str = "\
---
cache:
  primary_category:
  - Editors
  secondary_category: []
  language: []
  proficiency:
  - advanced
  - beginner
  - intermediate
  tags: []
---

# My Toolbelt

Notes to self about tools worth keeping.

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
- search
description: The classic.
---
```

Some closing remarks that must survive every rewrite.
";

#[test]
fn test_fresh_file_starts_from_seeded_cache() {
    let (_dir, path) = setup();

    catalog::create_new(&path).unwrap();
    let loaded = catalog::open(&path).unwrap();

    assert_eq!(loaded.cache, CacheStore::default());
    assert!(loaded.cache.values(Bucket::PrimaryCategory).is_empty());
    assert!(loaded.cache.values(Bucket::SecondaryCategory).is_empty());
    assert!(loaded.cache.values(Bucket::Language).is_empty());
    assert!(loaded.cache.values(Bucket::Tags).is_empty());
    let proficiency: Vec<_> = loaded
        .cache
        .values(Bucket::Proficiency)
        .iter()
        .cloned()
        .collect();
    assert_eq!(proficiency, ["advanced", "beginner", "intermediate"]);
}

#[test]
fn test_open_merges_entry_values_into_cache() {
    let (_dir, path) = setup();
    fs::write(&path, HAND_WRITTEN).unwrap();

    let loaded = catalog::open(&path).unwrap();

    assert_eq!(loaded.entries.len(), 1);
    assert_eq!(loaded.entries[0].name, "Grep");
    let cache = &loaded.cache;
    assert!(cache.values(Bucket::PrimaryCategory).contains("CLI"));
    assert!(cache.values(Bucket::PrimaryCategory).contains("Editors"));
    assert!(cache.values(Bucket::SecondaryCategory).contains("Search"));
    assert!(cache.values(Bucket::Language).contains("C"));
    assert!(cache.values(Bucket::Tags).contains("text"));
    assert!(cache.values(Bucket::Tags).contains("search"));
    // The entry's proficiency stays out of the cache
    assert_eq!(cache.values(Bucket::Proficiency).len(), 3);
}

#[test]
fn test_malformed_block_contributes_nothing() {
    let (_dir, path) = setup();
    let text = "\
### Broken

```yaml
---
name: Broken
language: Zig
lastUsed: [
---
```

### Valid

```yaml
---
name: Valid
language: Rust
lastUsed: 2024-01-01
---
```
";
    fs::write(&path, text).unwrap();

    let loaded = catalog::open(&path).unwrap();

    assert_eq!(loaded.entries.len(), 1);
    assert_eq!(loaded.entries[0].name, "Valid");
    assert_eq!(loaded.skipped_blocks, 1);
    assert!(loaded.cache.values(Bucket::Language).contains("Rust"));
    assert!(!loaded.cache.values(Bucket::Language).contains("Zig"));
}

#[test]
fn test_append_never_touches_existing_bytes() {
    let (_dir, path) = setup();
    fs::write(&path, HAND_WRITTEN).unwrap();
    let before = fs::read_to_string(&path).unwrap();

    let entry = grep_entry();
    catalog::append_entry(&path, &entry).unwrap();

    let after = fs::read_to_string(&path).unwrap();
    assert!(after.starts_with(&before));
    // Exactly one separator newline plus the encoded block
    let block = record::encode(&entry).unwrap();
    assert_eq!(after.len(), before.len() + 1 + block.len());
}

#[test]
fn test_append_twice_keeps_submission_order() {
    let (_dir, path) = setup();
    catalog::create_new(&path).unwrap();

    let mut first = grep_entry();
    first.name = "First".to_string();
    let mut second = grep_entry();
    second.name = "Second".to_string();
    catalog::append_entry(&path, &first).unwrap();
    catalog::append_entry(&path, &second).unwrap();

    let loaded = catalog::open(&path).unwrap();
    let names: Vec<_> = loaded.entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["First", "Second"]);
    assert_eq!(loaded.entries[0].language, "C");
    assert_eq!(loaded.entries[1].language, "C");
}

#[test]
fn test_persist_rewrites_only_the_front_matter_span() {
    let (_dir, path) = setup();
    fs::write(&path, HAND_WRITTEN).unwrap();
    let before = fs::read_to_string(&path).unwrap();
    let span_before = scan::locate_front_matter(&before).unwrap();

    let mut store = catalog::open(&path).unwrap().cache;
    store.add(Bucket::Language, "Rust");
    catalog::persist_cache(&path, &store).unwrap();

    let after = fs::read_to_string(&path).unwrap();
    let span_after = scan::locate_front_matter(&after).unwrap();
    assert_eq!(
        &before[span_before.outer.end..],
        &after[span_after.outer.end..],
        "everything after the front matter must be byte-identical"
    );
    assert!(after.contains("- Rust"));
    assert!(after.contains("Some closing remarks that must survive every rewrite."));
}

#[test]
fn test_persist_is_idempotent_on_bytes() {
    let (_dir, path) = setup();
    fs::write(&path, HAND_WRITTEN).unwrap();

    let store = catalog::open(&path).unwrap().cache;
    catalog::persist_cache(&path, &store).unwrap();
    let once = fs::read_to_string(&path).unwrap();
    catalog::persist_cache(&path, &store).unwrap();
    let twice = fs::read_to_string(&path).unwrap();

    assert_eq!(once, twice);
}

#[test]
fn test_add_flow_lands_cache_ahead_of_the_block() {
    let (_dir, path) = setup();
    catalog::create_new(&path).unwrap();

    // The synchronizer's add sequence: merge, persist, then append
    let mut loaded = catalog::open(&path).unwrap();
    let entry = grep_entry();
    loaded.cache.merge_entry(&entry);
    catalog::persist_cache(&path, &loaded.cache).unwrap();
    catalog::append_entry(&path, &entry).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let block_at = text.find("### Grep").unwrap();
    let front = &text[..block_at];
    assert!(front.contains("- CLI"));
    assert!(front.contains("- Search"));
    assert!(front.contains("- C"));
    assert!(front.contains("- text"));

    // And a re-open agrees with what was persisted
    let reloaded = catalog::open(&path).unwrap();
    assert_eq!(reloaded.cache, loaded.cache);
    assert_eq!(reloaded.entries.len(), 1);
}

#[test]
fn test_front_matter_decode_failure_degrades_to_defaults() {
    let (_dir, path) = setup();
    fs::write(&path, "---\nnot a cache mapping\n---\n\n# Doc\n").unwrap();

    let loaded = catalog::open(&path).unwrap();
    assert_eq!(loaded.cache, CacheStore::default());
    assert!(loaded.entries.is_empty());
}
