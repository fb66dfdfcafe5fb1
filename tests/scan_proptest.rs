//! Property-based tests for the scanner and matcher
//!
//! Well-formed documents are generated from random element trees; arbitrary text checks
//! that scanning never panics and that offsets always point back at the raw span.

use lexy::vocabulary::is_self_closing;
use lexy::{scan, TagScanner};
use proptest::prelude::*;
use serde_json::{Map, Value};

#[derive(Debug, Clone)]
enum Node {
    Text(String),
    Element(String, Vec<Node>),
}

fn tag_name_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["div", "span", "p", "ul", "li", "nav", "section", "em"])
        .prop_map(String::from)
}

fn node_strategy() -> impl Strategy<Value = Node> {
    let leaf = "[a-z ]{0,8}".prop_map(Node::Text);
    leaf.prop_recursive(4, 32, 4, |inner| {
        (tag_name_strategy(), prop::collection::vec(inner, 0..4))
            .prop_map(|(tag, children)| Node::Element(tag, children))
    })
}

fn render(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Element(tag, children) => {
                out.push_str(&format!("<{} class=\"x\">", tag));
                render(children, out);
                out.push_str(&format!("</{}>", tag));
            }
        }
    }
}

/// Expected structure: children keyed by name, later siblings replacing earlier ones
fn expected_structure(nodes: &[Node]) -> Value {
    let mut map = Map::new();
    for node in nodes {
        if let Node::Element(tag, children) = node {
            map.insert(tag.clone(), expected_structure(children));
        }
    }
    Value::Object(map)
}

proptest! {
    #[test]
    fn well_formed_documents_are_clean(nodes in prop::collection::vec(node_strategy(), 0..4)) {
        let mut document = String::new();
        render(&nodes, &mut document);

        let result = scan(&document);
        prop_assert!(result.is_clean(), "errors in {:?}: {:?}", document, result.errors);
        prop_assert_eq!(result.path_desyncs, 0);

        let mut expected = Map::new();
        expected.insert("root".to_string(), expected_structure(&nodes));
        prop_assert_eq!(serde_json::to_value(&result.structure).unwrap(), Value::Object(expected));
    }

    #[test]
    fn scanning_is_idempotent(document in "[<>/a-z \"=]{0,64}") {
        prop_assert_eq!(scan(&document), scan(&document));
    }

    #[test]
    fn offsets_point_back_at_the_raw_span(document in "\\PC{0,80}") {
        let chars: Vec<char> = document.chars().collect();
        for record in scan(&document).errors {
            let slice: String = chars[record.span.start..record.span.end].iter().collect();
            prop_assert_eq!(slice, record.span.raw.clone());
            prop_assert_eq!(record.span.length, record.span.tag.chars().count());
        }
    }

    #[test]
    fn void_tags_are_never_unclosed(tags in prop::collection::vec(
        prop::sample::select(vec!["img", "meta", "link", "input", "br", "hr", "!DOCTYPE"]),
        1..10,
    )) {
        let document: String = tags.iter().map(|tag| format!("<{}>", tag)).collect();
        let result = scan(&document);
        prop_assert!(result.unclosed().all(|record| !is_self_closing(record.tag())));
        prop_assert!(result.is_clean());
    }

    #[test]
    fn path_never_loses_root(document in "(</?[a-c]>){0,24}") {
        let mut scanner = TagScanner::new(&document);
        while scanner.advance() {
            prop_assert_eq!(scanner.path().segments()[0].as_str(), "root");
        }
    }
}
