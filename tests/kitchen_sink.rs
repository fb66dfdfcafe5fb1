//! End-to-end scan of a full page with two misspelled closing tags
//!
//! The fixture nests a `<u>` that is closed as `</ul>` and a `<footer>` closed as
//! `</footr>`, plus a void `<img />` that is never closed.

use lexy::loader::DocumentLoader;
use lexy::{scan, ErrorKind, TagScanner};
use serde_json::json;

const FIXTURE: &str = "tests/fixtures/kitchen_sink.html";

fn load() -> DocumentLoader {
    DocumentLoader::from_path(FIXTURE).expect("fixture to load")
}

#[test]
fn reports_two_unopened_then_two_hinted_unclosed() {
    let result = load().scan();

    let kinds: Vec<(ErrorKind, &str)> = result
        .errors
        .iter()
        .map(|record| (record.error, record.tag()))
        .collect();
    assert_eq!(
        kinds,
        vec![
            (ErrorKind::Unopened, "ul"),
            (ErrorKind::Unopened, "footr"),
            (ErrorKind::Unclosed, "u"),
            (ErrorKind::Unclosed, "footer"),
        ]
    );
}

#[test]
fn unclosed_records_carry_offsets_and_hints() {
    let result = load().scan();

    assert_eq!(
        serde_json::to_value(&result.errors[2]).unwrap(),
        json!({
            "end": 391,
            "error": "Unclosed",
            "hint": "Possible misspelled tag: ul",
            "suggestion": "ul",
            "length": 1,
            "match": "<u>",
            "start": 388,
            "tag": "u",
        })
    );
    assert_eq!(
        serde_json::to_value(&result.errors[3]).unwrap(),
        json!({
            "end": 734,
            "error": "Unclosed",
            "hint": "Possible misspelled tag: footr",
            "suggestion": "footr",
            "length": 6,
            "match": "<footer>",
            "start": 726,
            "tag": "footer",
        })
    );
}

#[test]
fn unopened_records_point_at_the_closers() {
    let result = load().scan();
    let ul = &result.errors[0];
    assert_eq!((ul.span.start, ul.span.end, ul.span.raw.as_str()), (522, 527, "</ul>"));
    assert_eq!(ul.hint, None);
    let footr = &result.errors[1];
    assert_eq!((footr.span.start, footr.span.end), (797, 805));
}

#[test]
fn structure_follows_insertion_path() {
    let result = load().scan();

    assert_eq!(
        serde_json::to_value(&result.structure).unwrap(),
        json!({
            "root": {
                "html": {
                    "head": {
                        "title": {},
                    },
                    "body": {
                        "div": {
                            "span": {},
                            "p": {},
                        },
                        "section": {
                            "div": {
                                "nav": {
                                    "u": {
                                        "li": {},
                                    },
                                },
                            },
                            "img": {
                                "a": {},
                            },
                        },
                        "footer": {
                            "span": {},
                        },
                    },
                },
            },
        })
    );
    assert_eq!(result.path_desyncs, 5);
}

#[test]
fn path_ends_inside_html() {
    let loader = load();
    let mut scanner = TagScanner::new(loader.source());
    while scanner.advance() {}
    assert_eq!(scanner.path().segments(), ["root", "html"]);
}

#[test]
fn rescanning_is_idempotent() {
    let loader = load();
    assert_eq!(scan(loader.source()), scan(loader.source()));
}
