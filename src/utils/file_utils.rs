// Copyright (c) 2025 Nicholas D. Crosbie
use crate::models::DeclNode;
use std::error::Error;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

pub fn read_file_to_string(path: &Path) -> io::Result<String> {
    let mut file = File::open(path)?;
    let mut content = String::new();
    file.read_to_string(&mut content)?;
    Ok(content)
}

// Load the declaration tree the upstream parser serialized to JSON
pub fn load_tree(path: &Path) -> Result<DeclNode, Box<dyn Error>> {
    let content = read_file_to_string(path)?;
    let root: DeclNode = serde_json::from_str(&content)?;
    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_tree_reads_a_serialized_root() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tree.json");
        std::fs::write(
            &path,
            r#"{ "tag": "top", "children": [ { "tag": "class",
                 "attributes": { "sym:name": "Point" } } ] }"#,
        )
        .unwrap();

        let root = load_tree(&path).unwrap();
        assert_eq!(root.tag, "top");
        assert_eq!(root.children.len(), 1);
        assert_eq!(root.children[0].attr("sym:name"), "Point");
    }

    #[test]
    fn load_tree_reports_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_tree(&dir.path().join("absent.json")).is_err());
    }

    #[test]
    fn load_tree_reports_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(load_tree(&path).is_err());
    }
}
