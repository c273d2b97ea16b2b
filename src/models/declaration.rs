// Copyright (c) 2025 Nicholas D. Crosbie
use serde::Deserialize;
use std::collections::HashMap;

/// One node of the declaration tree the upstream parser serialized.
///
/// Container declarations carry the tag `class` (structs and unions are
/// class nodes distinguished by their `kind` attribute, as the parser emits
/// them), member declarations carry `cdecl`. Anything else is ignored by the
/// traversal.
#[derive(Debug, Clone, Deserialize)]
pub struct DeclNode {
    pub tag: String,
    #[serde(default)]
    pub attributes: HashMap<String, String>,
    #[serde(default)]
    pub children: Vec<DeclNode>,
}

impl DeclNode {
    /// Attribute lookup; a missing attribute reads as the empty string.
    pub fn attr(&self, key: &str) -> &str {
        self.attributes.get(key).map(String::as_str).unwrap_or("")
    }

    /// Attribute lookup preserving the absent/empty distinction.
    pub fn attr_opt(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    pub fn is_container(&self) -> bool {
        matches!(self.tag.as_str(), "class" | "struct" | "union")
    }

    pub fn is_member(&self) -> bool {
        self.tag == "cdecl"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn attributes_and_children_default_to_empty() {
        let node: DeclNode = serde_json::from_value(json!({ "tag": "top" })).unwrap();
        assert_eq!(node.tag, "top");
        assert!(node.attributes.is_empty());
        assert!(node.children.is_empty());
    }

    #[test]
    fn missing_attribute_reads_as_empty_string() {
        let node: DeclNode = serde_json::from_value(json!({
            "tag": "cdecl",
            "attributes": { "sym:name": "x" }
        }))
        .unwrap();
        assert_eq!(node.attr("sym:name"), "x");
        assert_eq!(node.attr("kind"), "");
        assert_eq!(node.attr_opt("kind"), None);
        assert_eq!(node.attr_opt("sym:name"), Some("x"));
    }

    #[test]
    fn container_and_member_tags_are_recognised() {
        for tag in ["class", "struct", "union"] {
            let node: DeclNode = serde_json::from_value(json!({ "tag": tag })).unwrap();
            assert!(node.is_container());
            assert!(!node.is_member());
        }
        let node: DeclNode = serde_json::from_value(json!({ "tag": "cdecl" })).unwrap();
        assert!(node.is_member());
        assert!(!node.is_container());
    }
}
