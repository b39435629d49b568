// Contract tests for the public helper surface (`bunplate::api`).
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use bunplate::api::{
    Debounce, ErrorKind, Locale, Theme, Throttle, chunk, format_bytes, format_bytes_with_decimals,
    format_date, format_relative_time, is_valid_email, is_valid_url, localized_path,
    merge_classes, negotiate, omit, pick, range, sleep, slugify, unique,
};
use serde_json::{Value, json};

fn object(value: Value) -> serde_json::Map<String, Value> {
    value.as_object().cloned().expect("object")
}

#[test]
fn range_has_length_n_and_identity_elements() {
    for n in [0, 1, 7, 128] {
        let values = range(n);
        assert_eq!(values.len(), n);
        for (idx, value) in values.iter().enumerate() {
            assert_eq!(*value, idx);
        }
    }
}

#[test]
fn chunk_concatenation_reproduces_input() {
    let items: Vec<u32> = (0..23).collect();
    for size in 1..=25 {
        let chunks = chunk(&items, size).expect("chunk");
        let flattened: Vec<u32> = chunks.iter().flatten().copied().collect();
        assert_eq!(flattened, items, "size {size}");
        let (last, rest) = chunks.split_last().expect("non-empty");
        assert!(rest.iter().all(|group| group.len() == size));
        assert!(!last.is_empty() && last.len() <= size);
    }
}

#[test]
fn chunk_of_zero_is_invalid_argument() {
    let err = chunk(&[1, 2, 3], 0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn unique_is_idempotent() {
    let inputs: [&[i32]; 4] = [&[], &[1, 1, 1], &[3, 1, 3, 2, 1], &[5, 4, 3, 2, 1]];
    for xs in inputs {
        let once = unique(xs);
        assert_eq!(unique(&once), once);
    }
}

#[test]
fn byte_formatting_examples() {
    assert_eq!(format_bytes(0), "0 Bytes");
    assert_eq!(format_bytes(1024), "1 KB");
    assert_eq!(format_bytes(1_048_576), "1 MB");
    assert_eq!(format_bytes_with_decimals(1536, 1), "1.5 KB");
    assert_eq!(format_bytes(1152), "1.13 KB");
    assert_eq!(format_bytes(1_048_575), "1 MB");
}

#[test]
fn slug_examples() {
    assert_eq!(slugify("Hello, World! 123"), "hello-world-123");
    assert_eq!(slugify("hello   world"), "hello-world");
}

#[test]
fn email_examples() {
    assert!(is_valid_email("test@example.com"));
    assert!(!is_valid_email("invalid-email"));
    assert!(!is_valid_email("test@"));
    assert!(!is_valid_email("@example.com"));
}

#[test]
fn url_examples() {
    assert!(is_valid_url("https://example.com"));
    assert!(is_valid_url("http://localhost:3000"));
    assert!(!is_valid_url("not-a-url"));
    assert!(!is_valid_url("ftp://example"));
}

#[test]
fn date_examples() {
    assert_eq!(format_date("2023-12-25"), "December 25, 2023");
    assert_eq!(format_date("garbage"), "Invalid Date");

    let now = time::OffsetDateTime::now_utc();
    assert_eq!(format_relative_time(now), "just now");
    assert_eq!(
        format_relative_time(now - time::Duration::hours(2)),
        "2 hours ago"
    );
}

#[test]
fn pick_and_omit_examples() {
    let obj = object(json!({"a": 1, "b": 2, "c": 3}));
    assert_eq!(Value::Object(pick(&obj, &["a", "c"])), json!({"a": 1, "c": 3}));
    assert_eq!(Value::Object(omit(&obj, &["b"])), json!({"a": 1, "c": 3}));
    assert_eq!(Value::Object(pick(&obj, &["a", "zzz"])), json!({"a": 1}));
}

#[test]
fn class_locale_and_theme_examples() {
    assert_eq!(merge_classes(["px-2 py-1", "px-4"]), "py-1 px-4");
    assert_eq!(
        merge_classes(["flex flex-col", "text-sm text-center"]),
        "flex flex-col text-sm text-center"
    );
    assert_eq!(localized_path("/en/about", Locale::Cs), "/cs/about");
    assert_eq!(negotiate("cs-CZ,cs;q=0.9,en;q=0.8"), Locale::Cs);
    assert_eq!(Theme::System.toggled(true), Theme::Light);
}

#[tokio::test(start_paused = true)]
async fn debounce_three_sync_calls_invoke_once_with_last_args() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let debounced = Debounce::new(Duration::from_millis(100), move |value: &'static str| {
        sink.lock().unwrap().push(value);
    });

    debounced.call("first").unwrap();
    debounced.call("second").unwrap();
    debounced.call("third").unwrap();
    assert!(seen.lock().unwrap().is_empty());

    sleep(150).await;
    assert_eq!(*seen.lock().unwrap(), vec!["third"]);
}

#[tokio::test(start_paused = true)]
async fn throttle_three_sync_calls_invoke_once_then_again_after_window() {
    let count = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&count);
    let throttled = Throttle::new(Duration::from_millis(100), move |_: ()| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    throttled.call(());
    throttled.call(());
    throttled.call(());
    assert_eq!(count.load(Ordering::SeqCst), 1);

    sleep(150).await;
    throttled.call(());
    assert_eq!(count.load(Ordering::SeqCst), 2);
}
