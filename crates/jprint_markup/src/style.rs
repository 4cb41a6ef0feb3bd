//! Markup configuration.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Which element wraps decorated sub-trees and which class types are left
/// bare.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MarkupStyle {
    /// Element name of every tag.
    pub tag: String,
    /// Simple names of class types rendered without markup in type
    /// positions.
    pub class_blacklist: Vec<String>,
    /// Extra CSS classes per markup type, e.g. `{"class": ["type"]}`.
    pub classes: BTreeMap<String, Vec<String>>,
}

impl Default for MarkupStyle {
    fn default() -> Self {
        Self {
            tag: "span".to_string(),
            class_blacklist: ["Map", "List", "ArrayList", "LinkedList"].map(String::from).to_vec(),
            classes: BTreeMap::new(),
        }
    }
}

impl MarkupStyle {
    pub fn is_blacklisted(&self, simple_name: &str) -> bool {
        self.class_blacklist.iter().any(|name| name == simple_name)
    }

    /// Extra classes configured for `kind`.
    pub fn classes_for(&self, kind: &str) -> &[String] {
        self.classes.get(kind).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let style = MarkupStyle::default();
        assert_eq!(style.tag, "span");
        assert!(style.is_blacklisted("ArrayList"));
        assert!(!style.is_blacklisted("String"));
        assert!(style.classes_for("class").is_empty());
    }

    #[test]
    fn test_json() {
        let style: MarkupStyle = serde_json::from_str(
            r#"{ "tag": "code", "classBlacklist": ["Set"], "classes": { "new": ["ctor", "hl"] } }"#,
        )
        .unwrap();
        assert_eq!(style.tag, "code");
        assert!(style.is_blacklisted("Set"));
        assert!(!style.is_blacklisted("List"));
        assert_eq!(style.classes_for("new"), ["ctor".to_string(), "hl".to_string()]);
    }

    #[test]
    fn test_partial_json_keeps_blacklist() {
        let style: MarkupStyle = serde_json::from_str(r#"{ "tag": "em" }"#).unwrap();
        assert!(style.is_blacklisted("Map"));
    }
}
