//! Contract laws every caller can rely on

use crate::{encode_str, utc};
use genai_types::prelude::*;
use genai_wire::{DecodeError, Malformed};

// =============================================================================
// Omission
// =============================================================================

#[test]
fn test_default_records_encode_empty() {
    assert_eq!(encode_str(&Schema::default()), "{}");
    assert_eq!(encode_str(&CitationMetadata::default()), "{}");
    assert_eq!(encode_str(&TokensInfo::default()), "{}");
    assert_eq!(encode_str(&CreateCachedContentConfig::default()), "{}");
    assert_eq!(encode_str(&UpdateCachedContentConfig::default()), "{}");
    assert_eq!(encode_str(&CachedContent::default()), "{}");
    assert_eq!(encode_str(&File::default()), "{}");
    assert_eq!(encode_str(&VideoMetadata::default()), "{}");
    assert_eq!(encode_str(&SlidingWindow::default()), "{}");
    assert_eq!(encode_str(&ContextWindowCompressionConfig::default()), "{}");
    assert_eq!(encode_str(&Candidate::default()), "{}");
    assert_eq!(encode_str(&GenerateContentResponse::default()), "{}");
    assert_eq!(encode_str(&TunedModelInfo::default()), "{}");
}

#[test]
fn test_file_times_omitted_independently() {
    let file = File {
        update_time: Some(utc(2025, 1, 1, 0, 0, 0)),
        ..Default::default()
    };
    assert_eq!(encode_str(&file), r#"{"updateTime":"2025-01-01T00:00:00Z"}"#);
}

// =============================================================================
// Required fields
// =============================================================================

#[test]
fn test_checkpoint_counters_always_emitted() {
    let checkpoint = Checkpoint {
        checkpoint_id: "ckpt-1".into(),
        epoch: 0,
        step: 0,
    };
    assert_eq!(
        encode_str(&checkpoint),
        r#"{"checkpointId":"ckpt-1","epoch":"0","step":"0"}"#
    );
}

#[test]
fn test_citation_indices_always_emitted() {
    assert_eq!(
        encode_str(&Citation::default()),
        r#"{"endIndex":0,"startIndex":0}"#
    );
}

// =============================================================================
// Strict integers
// =============================================================================

#[test]
fn test_non_numeric_big_int_rejected() {
    let err = decode::<Schema>(br#"{"maxLength": "abc"}"#).unwrap_err();
    assert!(err.is_format());
    assert_eq!(err.field(), Some("maxLength"));
}

#[test]
fn test_numeric_big_int_accepted() {
    let schema: Schema = decode(br#"{"maxLength": "10"}"#).unwrap();
    assert_eq!(schema.max_length, Some(10));
}

#[test]
fn test_big_int_never_coerced() {
    for payload in [
        &br#"{"sizeBytes": ""}"#[..],
        br#"{"sizeBytes": " 12"}"#,
        br#"{"sizeBytes": "12.0"}"#,
        br#"{"sizeBytes": true}"#,
        br#"{"sizeBytes": 12}"#,
    ] {
        let err = decode::<File>(payload).unwrap_err();
        assert_eq!(err.field(), Some("sizeBytes"));
    }
}

// =============================================================================
// Dates
// =============================================================================

#[test]
fn test_date_without_year_rejected() {
    let err = decode::<Citation>(br#"{"publicationDate": {"month": 10, "day": 26}}"#).unwrap_err();
    assert_eq!(
        err,
        Error::Decode(DecodeError::format(
            "publicationDate.year",
            Malformed::MissingKey
        ))
    );
}

#[test]
fn test_year_only_date_accepted() {
    let citation: Citation = decode(br#"{"publicationDate": {"year": 2023}}"#).unwrap();
    assert_eq!(citation.publication_date.year, 2023);
    assert_eq!(citation.publication_date.month, 0);
    assert_eq!(citation.publication_date.day, 0);
}

// =============================================================================
// Bytes
// =============================================================================

#[test]
fn test_token_bytes_exact() {
    let info: TokensInfo = decode(br#"{"tokens": ["YQ==", "Yg=="]}"#).unwrap();
    assert_eq!(info.tokens, vec![vec![0x61], vec![0x62]]);
}

// =============================================================================
// Video offsets
// =============================================================================

#[test]
fn test_offset_asymmetry() {
    let cases = [
        (0, 15, r#"{"endOffset":"15s","startOffset":"0s"}"#),
        (0, 0, "{}"),
        (5, 0, r#"{"startOffset":"5s"}"#),
        (10, 20, r#"{"endOffset":"20s","startOffset":"10s"}"#),
    ];
    for (start, end, expected) in cases {
        let meta = VideoMetadata::segment(TimeDelta::seconds(start), TimeDelta::seconds(end));
        assert_eq!(encode_str(&meta), expected, "start={} end={}", start, end);
    }
}

// =============================================================================
// Wire forms
// =============================================================================

#[test]
fn test_durations_are_seconds_strings() {
    let config = CreateCachedContentConfig {
        ttl: TimeDelta::days(1),
        ..Default::default()
    };
    assert_eq!(encode_str(&config), r#"{"ttl":"86400s"}"#);

    let err = decode::<CreateCachedContentConfig>(br#"{"ttl": "P1D"}"#).unwrap_err();
    assert_eq!(err.field(), Some("ttl"));
}

#[test]
fn test_timestamps_are_utc() {
    let info = TunedModelInfo {
        base_model: "models/base".into(),
        create_time: Some(utc(2024, 2, 29, 12, 30, 0)),
        update_time: None,
    };
    assert_eq!(
        encode_str(&info),
        r#"{"baseModel":"models/base","createTime":"2024-02-29T12:30:00Z"}"#
    );
}

#[test]
fn test_timestamps_outside_four_digit_years_fail_encode() {
    let info = TunedModelInfo {
        update_time: Some(utc(10000, 1, 1, 0, 0, 0)),
        ..Default::default()
    };
    let err = encode(&info).unwrap_err();
    assert!(err.is_encode());
    assert_eq!(err.field(), Some("updateTime"));

    let response = GenerateContentResponse {
        create_time: Some(utc(-1, 6, 1, 0, 0, 0)),
        ..Default::default()
    };
    assert_eq!(encode(&response).unwrap_err().field(), Some("createTime"));

    let info = TunedModelInfo {
        create_time: Some(utc(9999, 12, 31, 23, 59, 59)),
        ..Default::default()
    };
    assert_eq!(encode_str(&info), r#"{"createTime":"9999-12-31T23:59:59Z"}"#);
}

#[test]
fn test_extreme_floats_round_trip() {
    for bits in [6231366892129786964u64, 1, 0x7fef_ffff_ffff_ffff, 0x8000_0000_0000_0001] {
        let schema = Schema {
            maximum: Some(f64::from_bits(bits)),
            ..Default::default()
        };
        let back: Schema = decode(&encode(&schema).unwrap()).unwrap();
        assert_eq!(back.maximum.map(f64::to_bits), Some(bits), "bits {}", bits);
    }
}

#[test]
fn test_explicit_null_schema_values_round_trip() {
    let schema = Schema {
        default: Some(serde_json::Value::Null),
        example: Some(serde_json::Value::Null),
        ..Default::default()
    };
    assert_eq!(encode_str(&schema), r#"{"default":null,"example":null}"#);
    assert_eq!(decode::<Schema>(&encode(&schema).unwrap()), Ok(schema));
}

#[test]
fn test_unknown_keys_ignored() {
    let checkpoint: Checkpoint =
        decode(br#"{"checkpointId": "a", "futureField": {"nested": [1, 2]}, "step": "3"}"#).unwrap();
    assert_eq!(
        checkpoint,
        Checkpoint {
            checkpoint_id: "a".into(),
            epoch: 0,
            step: 3,
        }
    );
}

#[test]
fn test_unknown_enum_values_round_trip() {
    let candidate: Candidate = decode(br#"{"finishReason": "UNKNOWN_VALUE"}"#).unwrap();
    assert!(candidate.finish_reason.as_ref().is_some_and(FinishReason::is_other));
    assert_eq!(encode_str(&candidate), r#"{"finishReason":"UNKNOWN_VALUE"}"#);
}

#[test]
fn test_known_spelling_in_other_equals_variant() {
    let built = Candidate {
        finish_reason: Some(FinishReason::Other("STOP".into())),
        ..Default::default()
    };
    assert_eq!(encode_str(&built), r#"{"finishReason":"STOP"}"#);
    let back: Candidate = decode(&encode(&built).unwrap()).unwrap();
    assert_eq!(back.finish_reason, Some(FinishReason::Stop));
    assert_eq!(back, built);
}

#[test]
fn test_non_finite_float_fails_encode() {
    let meta = VideoMetadata {
        fps: Some(f64::NAN),
        ..Default::default()
    };
    let err = encode(&meta).unwrap_err();
    assert!(err.is_encode());
    assert_eq!(err.field(), Some("fps"));
}
