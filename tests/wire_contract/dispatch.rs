//! Tagged dispatch through `Record` / `RecordKind`

use crate::init_tracing;
use genai_types::prelude::*;

/// Truncated and otherwise malformed payloads
const BROKEN: &[&[u8]] = &[
    b"",
    b"{",
    b"{\"name\":",
    br#"{"publicationDate": {"year": 2023"#,
    br#"{"tokenIds": ["1", "2", "3""#,
    br#"{"endOffset": "15s"#,
    b"{'single': 'quotes'}",
    b"{} trailing",
];

#[test]
fn test_syntax_failure_for_every_kind() {
    init_tracing();
    for kind in RecordKind::all() {
        for payload in BROKEN {
            let err = Record::decode(*kind, payload).unwrap_err();
            assert!(
                err.is_syntax(),
                "{} accepted {:?}",
                kind,
                String::from_utf8_lossy(payload)
            );
        }
    }
}

#[test]
fn test_non_object_top_level_for_every_kind() {
    init_tracing();
    for kind in RecordKind::all() {
        for payload in [&b"null"[..], b"[]", b"\"text\"", b"7"] {
            let err = Record::decode(*kind, payload).unwrap_err();
            assert!(err.is_format());
            assert_eq!(err.field(), Some("$"));
        }
    }
}

#[test]
fn test_kind_lookup_by_name() {
    assert_eq!(RecordKind::from_name("File"), Some(RecordKind::File));
    assert_eq!(
        RecordKind::from_name("GenerateContentResponse"),
        Some(RecordKind::GenerateContentResponse)
    );
    assert_eq!(RecordKind::from_name("file"), None);
    assert_eq!(RecordKind::File.key_order().first(), Some(&"name"));
}

#[test]
fn test_dispatch_matches_generic_codec() {
    init_tracing();
    let payload = br#"{"triggerTokens": "2048", "slidingWindow": {"targetTokens": "512"}}"#;
    let record = Record::decode(RecordKind::ContextWindowCompressionConfig, payload).unwrap();
    let direct: ContextWindowCompressionConfig = decode(payload).unwrap();
    assert_eq!(record, Record::from(direct.clone()));
    assert_eq!(record.encode().unwrap(), encode(&direct).unwrap());
}

#[test]
fn test_dispatch_surfaces_field_errors() {
    init_tracing();
    let err = Record::decode(RecordKind::File, br#"{"createTime": "yesterday"}"#).unwrap_err();
    assert_eq!(err.field(), Some("createTime"));
}

#[test]
fn test_every_kind_has_declared_keys() {
    for kind in RecordKind::all() {
        assert!(!kind.key_order().is_empty(), "{}", kind);
        for key in kind.key_order() {
            assert!(
                key.chars().next().is_some_and(|c| c.is_ascii_lowercase()),
                "{}.{} is not camelCase",
                kind,
                key
            );
        }
    }
}
