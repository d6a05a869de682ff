//! The suggestion cache: five set-valued buckets of previously seen field
//! values, rebuilt on every load and persisted in the document's front
//! matter. Buckets only ever grow; nothing on this type removes a value.

use crate::model::{CategoryFacet, Entry};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Values every store starts with in the proficiency bucket.
pub const PROFICIENCY_SEED: [&str; 3] = ["beginner", "intermediate", "advanced"];

/// One named bucket of the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    PrimaryCategory,
    SecondaryCategory,
    Language,
    Proficiency,
    Tags,
}

impl Bucket {
    pub const ALL: [Bucket; 5] = [
        Bucket::PrimaryCategory,
        Bucket::SecondaryCategory,
        Bucket::Language,
        Bucket::Proficiency,
        Bucket::Tags,
    ];

    /// Canonical name, identical to the front-matter key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Bucket::PrimaryCategory => "primary_category",
            Bucket::SecondaryCategory => "secondary_category",
            Bucket::Language => "language",
            Bucket::Proficiency => "proficiency",
            Bucket::Tags => "tags",
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Bucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "primary_category" => Ok(Bucket::PrimaryCategory),
            "secondary_category" => Ok(Bucket::SecondaryCategory),
            "language" => Ok(Bucket::Language),
            "proficiency" => Ok(Bucket::Proficiency),
            "tags" => Ok(Bucket::Tags),
            _ => Err(format!(
                "Unknown bucket: {} (expected one of primary_category, secondary_category, language, proficiency, tags)",
                s
            )),
        }
    }
}

/// Serialized form of the cache, and the decode target for front matter.
///
/// Field order is the wire order. Every field defaults so a front matter
/// carrying only some buckets still decodes; the missing buckets merge as
/// no-ops.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheSnapshot {
    #[serde(default)]
    pub primary_category: Vec<String>,
    #[serde(default)]
    pub secondary_category: Vec<String>,
    #[serde(default)]
    pub language: Vec<String>,
    #[serde(default)]
    pub proficiency: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// The in-memory aggregation of known values.
///
/// `BTreeSet` buckets give the serialized form its sorted, duplicate-free
/// determinism without a normalization pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheStore {
    primary_category: BTreeSet<String>,
    secondary_category: BTreeSet<String>,
    language: BTreeSet<String>,
    proficiency: BTreeSet<String>,
    tags: BTreeSet<String>,
}

impl Default for CacheStore {
    fn default() -> Self {
        let proficiency = PROFICIENCY_SEED.iter().map(|s| s.to_string()).collect();
        Self {
            primary_category: BTreeSet::new(),
            secondary_category: BTreeSet::new(),
            language: BTreeSet::new(),
            proficiency,
            tags: BTreeSet::new(),
        }
    }
}

impl CacheStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts one value into a bucket. Whitespace is trimmed and empty
    /// values are ignored, so merging a record with a blank facet is a no-op.
    pub fn add(&mut self, bucket: Bucket, value: &str) {
        let value = value.trim();
        if value.is_empty() {
            return;
        }
        self.bucket_mut(bucket).insert(value.to_string());
    }

    /// Unions a decoded front-matter snapshot into the store.
    pub fn merge_snapshot(&mut self, snapshot: &CacheSnapshot) {
        for value in &snapshot.primary_category {
            self.add(Bucket::PrimaryCategory, value);
        }
        for value in &snapshot.secondary_category {
            self.add(Bucket::SecondaryCategory, value);
        }
        for value in &snapshot.language {
            self.add(Bucket::Language, value);
        }
        for value in &snapshot.proficiency {
            self.add(Bucket::Proficiency, value);
        }
        for value in &snapshot.tags {
            self.add(Bucket::Tags, value);
        }
    }

    /// Unions an entry's cache-relevant fields: category facets, language and
    /// tags. An entry's proficiency never feeds the cache; that bucket grows
    /// only through front matter or [`CacheStore::add`].
    pub fn merge_entry(&mut self, entry: &Entry) {
        for facet in &entry.category {
            match facet {
                CategoryFacet::Primary(name) => self.add(Bucket::PrimaryCategory, name),
                CategoryFacet::Secondary(name) => self.add(Bucket::SecondaryCategory, name),
            }
        }
        self.add(Bucket::Language, &entry.language);
        for tag in &entry.tags {
            self.add(Bucket::Tags, tag);
        }
    }

    /// Current values of one bucket, sorted.
    pub fn values(&self, bucket: Bucket) -> &BTreeSet<String> {
        match bucket {
            Bucket::PrimaryCategory => &self.primary_category,
            Bucket::SecondaryCategory => &self.secondary_category,
            Bucket::Language => &self.language,
            Bucket::Proficiency => &self.proficiency,
            Bucket::Tags => &self.tags,
        }
    }

    /// Sorted, duplicate-free serialized form.
    pub fn snapshot(&self) -> CacheSnapshot {
        CacheSnapshot {
            primary_category: self.primary_category.iter().cloned().collect(),
            secondary_category: self.secondary_category.iter().cloned().collect(),
            language: self.language.iter().cloned().collect(),
            proficiency: self.proficiency.iter().cloned().collect(),
            tags: self.tags.iter().cloned().collect(),
        }
    }

    fn bucket_mut(&mut self, bucket: Bucket) -> &mut BTreeSet<String> {
        match bucket {
            Bucket::PrimaryCategory => &mut self.primary_category,
            Bucket::SecondaryCategory => &mut self.secondary_category,
            Bucket::Language => &mut self.language,
            Bucket::Proficiency => &mut self.proficiency,
            Bucket::Tags => &mut self.tags,
        }
    }
}
