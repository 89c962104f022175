//! Concurrent encode/decode from independent threads

use crate::utc;
use genai_types::prelude::*;
use std::thread;

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_records_are_send_and_sync() {
    assert_send_sync::<Schema>();
    assert_send_sync::<File>();
    assert_send_sync::<GenerateContentResponse>();
    assert_send_sync::<Record>();
    assert_send_sync::<Error>();
}

#[test]
fn test_parallel_round_trips() {
    let files: Vec<File> = (0..8)
        .map(|i| File {
            name: format!("files/f{}", i),
            size_bytes: Some(i * 1024),
            create_time: Some(utc(2024, 1, 1, 0, 0, i as u32)),
            ..Default::default()
        })
        .collect();

    thread::scope(|s| {
        let handles: Vec<_> = files
            .iter()
            .map(|file| {
                s.spawn(move || {
                    for _ in 0..100 {
                        let bytes = encode(file).unwrap();
                        let back: File = decode(&bytes).unwrap();
                        assert_eq!(&back, file);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
    });
}

#[test]
fn test_shared_payload_decoded_concurrently() {
    let payload: &[u8] = br#"{"tokenIds": ["1", "2"], "tokens": ["YQ==", "Yg=="], "role": "model"}"#;
    let expected: TokensInfo = decode(payload).unwrap();

    thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                for _ in 0..100 {
                    let info: TokensInfo = decode(payload).unwrap();
                    assert_eq!(info, expected);
                }
            });
        }
    });
}
