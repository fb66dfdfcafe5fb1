//! Structural tree of matched tags
//!
//! The tree is a recursive, insertion-ordered mapping from tag name to subtree, rooted at
//! a synthetic `root` node. Siblings are keyed by name: inserting a name that already
//! exists under a node replaces its subtree in place (last write wins, first position kept).
//!
//! A [`TreePath`] records where the next opened tag is inserted. It always starts with
//! `root` and never pops below it.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Name of the synthetic top-level node.
pub const ROOT: &str = "root";

/// One node of the structure tree: an ordered map of child names to subtrees.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructureNode {
    children: Vec<(String, StructureNode)>,
}

impl StructureNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[(String, StructureNode)] {
        &self.children
    }

    pub fn get(&self, name: &str) -> Option<&StructureNode> {
        self.children
            .iter()
            .find(|(child, _)| child == name)
            .map(|(_, node)| node)
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Insert an empty subtree under `name`, replacing any existing one.
    pub fn insert(&mut self, name: &str) -> &mut StructureNode {
        let index = match self.children.iter().position(|(child, _)| child == name) {
            Some(index) => {
                self.children[index].1 = StructureNode::new();
                index
            }
            None => {
                self.children.push((name.to_string(), StructureNode::new()));
                self.children.len() - 1
            }
        };
        &mut self.children[index].1
    }

    /// Number of nodes below this one.
    pub fn descendant_count(&self) -> usize {
        self.children
            .iter()
            .map(|(_, child)| 1 + child.descendant_count())
            .sum()
    }
}

impl Serialize for StructureNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.children.len()))?;
        for (name, child) in &self.children {
            map.serialize_entry(name, child)?;
        }
        map.end()
    }
}

/// Sequence of tag names from `root` to the current insertion point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreePath {
    segments: Vec<String>,
}

impl TreePath {
    pub fn new() -> Self {
        TreePath {
            segments: vec![ROOT.to_string()],
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn push(&mut self, name: &str) {
        self.segments.push(name.to_string());
    }

    /// Remove the innermost segment. `root` is never removed; popping at the root returns `None`.
    pub fn pop(&mut self) -> Option<String> {
        if self.segments.len() > 1 {
            self.segments.pop()
        } else {
            None
        }
    }

    pub fn last(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or(ROOT)
    }

    /// Number of segments below `root`.
    pub fn depth(&self) -> usize {
        self.segments.len() - 1
    }

    pub fn is_at_root(&self) -> bool {
        self.depth() == 0
    }
}

impl Default for TreePath {
    fn default() -> Self {
        Self::new()
    }
}

/// The whole tree, serialized as `{"root": {...}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructureTree {
    root: StructureNode,
}

impl StructureTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self) -> &StructureNode {
        &self.root
    }

    /// Insert `name` under the node reached by following `path`.
    ///
    /// Segments that no longer resolve stop the walk at the deepest node found.
    pub fn insert_at(&mut self, path: &TreePath, name: &str) {
        let mut node = &mut self.root;
        for segment in path.segments().iter().skip(1) {
            match node.children.iter().position(|(child, _)| child == segment) {
                Some(index) => node = &mut node.children[index].1,
                None => break,
            }
        }
        node.insert(name);
    }

    /// Follow a sequence of names from `root`.
    pub fn node_at<S: AsRef<str>>(&self, names: &[S]) -> Option<&StructureNode> {
        names
            .iter()
            .try_fold(&self.root, |node, name| node.get(name.as_ref()))
    }

    pub fn node_count(&self) -> usize {
        self.root.descendant_count()
    }
}

impl Serialize for StructureTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(ROOT, &self.root)?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn path_never_pops_root() {
        let mut path = TreePath::new();
        path.push("div");
        assert_eq!(path.pop().as_deref(), Some("div"));
        assert_eq!(path.pop(), None);
        assert_eq!(path.segments(), &[ROOT.to_string()]);
        assert!(path.is_at_root());
    }

    #[test]
    fn inserts_follow_the_path() {
        let mut tree = StructureTree::new();
        let mut path = TreePath::new();
        tree.insert_at(&path, "div");
        path.push("div");
        tree.insert_at(&path, "span");
        path.push("span");

        assert_eq!(path.last(), "span");
        assert_eq!(path.depth(), 2);
        assert!(tree.node_at(&["div", "span"]).is_some());
        assert_eq!(
            serde_json::to_value(&tree).unwrap(),
            json!({"root": {"div": {"span": {}}}})
        );
    }

    #[test]
    fn same_named_sibling_replaces_subtree_in_place() {
        let mut tree = StructureTree::new();
        let mut path = TreePath::new();
        tree.insert_at(&path, "li");
        path.push("li");
        tree.insert_at(&path, "a");
        path.pop();
        tree.insert_at(&path, "p");
        tree.insert_at(&path, "li");

        let names: Vec<&str> = tree.root().entries().iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["li", "p"]);
        assert!(tree.node_at(&["li"]).unwrap().is_empty());
    }

    #[test]
    fn unresolved_segments_insert_at_deepest_node() {
        let mut tree = StructureTree::new();
        let mut path = TreePath::new();
        tree.insert_at(&path, "div");
        path.push("div");
        path.push("ghost");
        tree.insert_at(&path, "p");
        assert!(tree.node_at(&["div", "p"]).is_some());
    }

    #[test]
    fn serializes_in_insertion_order() {
        let mut tree = StructureTree::new();
        let path = TreePath::new();
        tree.insert_at(&path, "zeta");
        tree.insert_at(&path, "alpha");
        let text = serde_json::to_string(&tree).unwrap();
        assert_eq!(text, r#"{"root":{"zeta":{},"alpha":{}}}"#);
        assert_eq!(tree.node_count(), 2);
    }
}
