//! Pre-order flattening of the bookmark forest
//!
//! Produces the ordered list the picker operates on: every node with a
//! non-empty address, parent before children, siblings in original order.
//! Folder-only nodes are skipped but their children are still visited.

use super::model::{BookmarkEntry, BookmarkNode, classify};

/// Flatten a forest to its addressable leaves in document order.
///
/// No node is duplicated or reordered; an empty forest yields an empty
/// list. Classification against `internal_schemes` happens here so it is
/// computed exactly once per entry.
#[must_use]
pub fn flatten(forest: &[BookmarkNode], internal_schemes: &[String]) -> Vec<BookmarkEntry> {
    let mut out = Vec::new();
    for node in forest {
        walk(node, internal_schemes, &mut out);
    }
    out
}

fn walk(node: &BookmarkNode, internal_schemes: &[String], out: &mut Vec<BookmarkEntry>) {
    if let Some(address) = node.address.as_deref()
        && !address.is_empty()
    {
        out.push(BookmarkEntry {
            id: node.id.clone(),
            title: node.title.clone(),
            address: address.to_string(),
            kind: classify(address, internal_schemes),
        });
    }
    for child in &node.children {
        walk(child, internal_schemes, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bookmarks::EntryKind;

    fn no_schemes() -> Vec<String> {
        Vec::new()
    }

    #[test]
    fn test_flatten_empty() {
        assert!(flatten(&[], &no_schemes()).is_empty());
    }

    #[test]
    fn test_flatten_skips_folders() {
        // [A, Folder[B]] flattens to [A, B]
        let forest = vec![
            BookmarkNode::leaf("1", "A", "http://a"),
            BookmarkNode::folder("2", "Folder", vec![BookmarkNode::leaf("3", "B", "http://b")]),
        ];

        let flat = flatten(&forest, &no_schemes());
        let titles: Vec<&str> = flat.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B"]);
    }

    #[test]
    fn test_flatten_preorder() {
        // parent-before-children, children before the next sibling
        let forest = vec![
            BookmarkNode::folder(
                "f1",
                "Work",
                vec![
                    BookmarkNode::leaf("1", "first", "http://1"),
                    BookmarkNode::folder(
                        "f2",
                        "Deep",
                        vec![BookmarkNode::leaf("2", "second", "http://2")],
                    ),
                    BookmarkNode::leaf("3", "third", "http://3"),
                ],
            ),
            BookmarkNode::leaf("4", "fourth", "http://4"),
        ];

        let flat = flatten(&forest, &no_schemes());
        let ids: Vec<&str> = flat.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_flatten_skips_empty_addresses() {
        let forest = vec![
            BookmarkNode {
                id: "1".to_string(),
                title: "blank".to_string(),
                address: Some(String::new()),
                children: Vec::new(),
            },
            BookmarkNode::leaf("2", "kept", "http://kept"),
        ];

        let flat = flatten(&forest, &no_schemes());
        assert_eq!(flat.len(), 1);
        assert_eq!(flat[0].id, "2");
    }

    #[test]
    fn test_flatten_classifies_entries() {
        let schemes = vec!["chrome://".to_string()];
        let forest = vec![
            BookmarkNode::leaf("1", "settings", "chrome://settings"),
            BookmarkNode::leaf("2", "docs", "https://docs.rs"),
        ];

        let flat = flatten(&forest, &schemes);
        assert_eq!(flat[0].kind, EntryKind::Privileged);
        assert_eq!(flat[1].kind, EntryKind::Web);
    }
}
