use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// One half of an entry's category pair. On the wire each list element is a
/// single-key mapping (`- primary: CLI`), so an element can never carry both
/// facets. serde_yaml renders enums as `!primary`-style tags unless told
/// otherwise; the `singleton_map_recursive` adapter on `Entry::category`
/// keeps the mapping form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFacet {
    Primary(String),
    Secondary(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocLink {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alternative {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    #[serde(default, with = "serde_yaml::with::singleton_map_recursive")]
    pub category: Vec<CategoryFacet>,
    #[serde(default)]
    pub language: String,
    // Field order is the wire order; lastUsed is the one legacy camelCase key
    #[serde(rename = "lastUsed")]
    pub last_used: NaiveDate,
    #[serde(default)]
    pub proficiency: String,
    #[serde(default)]
    pub documentation: Vec<DocLink>,
    #[serde(default)]
    pub alternatives: Vec<Alternative>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub description: String,
}

impl Entry {
    pub fn new(name: String) -> Self {
        Self {
            name,
            category: Vec::new(),
            language: String::new(),
            last_used: Local::now().date_naive(),
            proficiency: String::new(),
            documentation: Vec::new(),
            alternatives: Vec::new(),
            tags: Vec::new(),
            description: String::new(),
        }
    }

    /// First primary facet, if any.
    pub fn primary_category(&self) -> Option<&str> {
        self.category.iter().find_map(|facet| match facet {
            CategoryFacet::Primary(name) => Some(name.as_str()),
            CategoryFacet::Secondary(_) => None,
        })
    }

    /// First secondary facet, if any.
    pub fn secondary_category(&self) -> Option<&str> {
        self.category.iter().find_map(|facet| match facet {
            CategoryFacet::Primary(_) => None,
            CategoryFacet::Secondary(name) => Some(name.as_str()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry_is_empty_except_name_and_date() {
        let entry = Entry::new("Grep".to_string());
        assert_eq!(entry.name, "Grep");
        assert!(entry.category.is_empty());
        assert!(entry.tags.is_empty());
        assert_eq!(entry.last_used, Local::now().date_naive());
    }

    #[test]
    fn test_category_accessors() {
        let mut entry = Entry::new("Grep".to_string());
        entry.category = vec![
            CategoryFacet::Primary("CLI".to_string()),
            CategoryFacet::Secondary("Search".to_string()),
        ];
        assert_eq!(entry.primary_category(), Some("CLI"));
        assert_eq!(entry.secondary_category(), Some("Search"));
    }

    #[test]
    fn test_category_accessors_empty() {
        let entry = Entry::new("Grep".to_string());
        assert_eq!(entry.primary_category(), None);
        assert_eq!(entry.secondary_category(), None);
    }

    #[test]
    fn test_category_serializes_as_singleton_maps() {
        let mut entry = Entry::new("Grep".to_string());
        entry.category = vec![
            CategoryFacet::Primary("CLI".to_string()),
            CategoryFacet::Secondary("Search".to_string()),
        ];
        let yaml = serde_yaml::to_string(&entry).unwrap();
        assert!(
            yaml.contains("category:\n- primary: CLI\n- secondary: Search\n"),
            "unexpected category shape in {}",
            yaml
        );
        // no `!primary`-style YAML tags may leak into the document
        assert!(!yaml.contains('!'));

        let parsed: Entry = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.category, entry.category);
    }

    #[test]
    fn test_category_decodes_quoted_singleton_maps() {
        let yaml = "name: Grep\ncategory:\n- primary: \"CLI\"\n- secondary: \"Search\"\nlastUsed: 2024-05-01\n";
        let entry: Entry = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(entry.primary_category(), Some("CLI"));
        assert_eq!(entry.secondary_category(), Some("Search"));
    }
}
