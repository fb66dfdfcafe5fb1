//! Treeviz formatter for the structure tree
//!
//! One line per node, nesting encoded by connectors:
//!
//! ```text
//! root
//! └─ html
//!   ├─ head
//!   │ └─ title
//!   └─ body
//! ```

use crate::structure::{StructureNode, StructureTree, ROOT};

pub fn to_treeviz_str(tree: &StructureTree) -> String {
    let mut result = String::new();
    result.push_str(ROOT);
    result.push('\n');
    append_children(&mut result, tree.root(), "");
    result
}

fn append_node(result: &mut String, name: &str, node: &StructureNode, prefix: &str, is_last: bool) {
    let connector = if is_last { "└─" } else { "├─" };
    result.push_str(&format!("{}{} {}\n", prefix, connector, name));

    let new_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    append_children(result, node, &new_prefix);
}

fn append_children(result: &mut String, node: &StructureNode, prefix: &str) {
    let entries = node.entries();
    for (i, (name, child)) in entries.iter().enumerate() {
        let is_last = i == entries.len() - 1;
        append_node(result, name, child, prefix, is_last);
    }
}
