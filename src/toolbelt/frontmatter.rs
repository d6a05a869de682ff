//! Front-matter codec: the cache mapping under the top-level `cache:` key.
//! Pure text-to-value transforms; the `---` delimiters around the mapping
//! belong to the document layer, not to this codec.

use crate::cache::{CacheSnapshot, CacheStore};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// On-disk wrapper: the cache lives under a single top-level key.
#[derive(Debug, Serialize, Deserialize)]
struct FrontMatter {
    cache: CacheSnapshot,
}

/// Decodes a front-matter mapping. Anything that is not a mapping with a
/// well-formed `cache` key is an error; callers treat that as "no cached
/// values" rather than a failed load.
pub fn decode(yaml: &str) -> Result<CacheSnapshot> {
    let front: FrontMatter = serde_yaml::from_str(yaml)?;
    Ok(front.cache)
}

/// Encodes the store as the front-matter mapping: fixed key order, each
/// bucket a sorted, duplicate-free list. `decode` re-reads the output
/// unchanged.
pub fn encode(store: &CacheStore) -> Result<String> {
    let front = FrontMatter {
        cache: store.snapshot(),
    };
    Ok(serde_yaml::to_string(&front)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::Bucket;

    #[test]
    fn test_round_trip() {
        let mut store = CacheStore::default();
        store.add(Bucket::PrimaryCategory, "CLI");
        store.add(Bucket::Language, "Rust");
        store.add(Bucket::Tags, "search");
        store.add(Bucket::Tags, "text");

        let encoded = encode(&store).unwrap();
        let decoded = decode(&encoded).unwrap();
        assert_eq!(decoded, store.snapshot());
    }

    #[test]
    fn test_encode_fixed_key_order() {
        let encoded = encode(&CacheStore::default()).unwrap();
        let keys: Vec<usize> = [
            "primary_category",
            "secondary_category",
            "language",
            "proficiency",
            "tags",
        ]
        .iter()
        .map(|k| encoded.find(k).unwrap())
        .collect();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        assert_eq!(keys, sorted);
        assert!(encoded.starts_with("cache:"));
    }

    #[test]
    fn test_decode_partial_buckets() {
        let decoded = decode("cache:\n  language:\n  - C\n").unwrap();
        assert_eq!(decoded.language, vec!["C"]);
        assert!(decoded.tags.is_empty());
        assert!(decoded.proficiency.is_empty());
    }

    #[test]
    fn test_decode_rejects_wrong_shapes() {
        assert!(decode("").is_err());
        assert!(decode("not a mapping").is_err());
        assert!(decode("- a\n- b\n").is_err());
        assert!(decode("title: no cache here\n").is_err());
        // The legacy template shipped a bare `cache:` with nothing under it
        assert!(decode("cache:\n").is_err());
        assert!(decode("cache:\n  language: 3\n").is_err());
    }

    #[test]
    fn test_decode_ignores_extra_keys() {
        let decoded = decode("cache:\n  tags:\n  - cli\nauthor: someone\n").unwrap();
        assert_eq!(decoded.tags, vec!["cli"]);
    }
}
