use std::error::Error;

use youtube_quick_jump::{JumpError, MemoryPage, Viewport};

// Test JumpError display implementation
#[test]
fn test_jump_error_display() {
    assert_eq!(
        format!("{}", JumpError::EmptyInput),
        "Timestamp input is empty"
    );

    let err = JumpError::InputTooLong { len: 25, max: 20 };
    assert_eq!(
        format!("{}", err),
        "Timestamp input too long (25 chars, max 20)"
    );

    let err = JumpError::ComponentOutOfRange {
        component: "minutes",
        value: 75,
    };
    assert_eq!(
        format!("{}", err),
        "Timestamp minutes component out of range: 75"
    );

    let err = JumpError::PlayerControlFailed("boom".to_string());
    assert_eq!(format!("{}", err), "Player control seek failed: boom");

    assert!(format!("{}", JumpError::NoVideoCandidate).contains("video"));
}

// Test JumpError implements Error trait
#[test]
fn test_jump_error_trait() {
    let err = JumpError::UnrecognizedFormat("abc".to_string());

    fn takes_error(_: &dyn Error) {}
    takes_error(&err);
}

// Test classification into parse errors and seek failures
#[test]
fn test_error_classification() {
    let parse_errors = [
        JumpError::EmptyInput,
        JumpError::InputTooLong { len: 21, max: 20 },
        JumpError::UnrecognizedFormat("x".to_string()),
        JumpError::ComponentOutOfRange {
            component: "seconds",
            value: 61,
        },
        JumpError::Overflow,
    ];
    for err in &parse_errors {
        assert!(err.is_parse_error(), "{:?}", err);
        assert!(!err.is_seek_failure(), "{:?}", err);
    }

    let seek_failures = [
        JumpError::NoVideoCandidate,
        JumpError::PlayerControlFailed("x".to_string()),
        JumpError::ElementRejected("x".to_string()),
        JumpError::LocationRejected("x".to_string()),
    ];
    for err in &seek_failures {
        assert!(err.is_seek_failure(), "{:?}", err);
        assert!(!err.is_parse_error(), "{:?}", err);
    }
}

// Test conversions to JumpError
#[test]
fn test_jump_error_conversions() {
    let err = MemoryPage::new("not a url", Viewport::default()).unwrap_err();
    match err {
        JumpError::InvalidLocation(_) => {} // Success
        _ => panic!("Expected InvalidLocation variant"),
    }
    assert!(err.source().is_some());

    let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
    let err: JumpError = json_err.into();
    match err {
        JumpError::SnapshotDecodeFailed(_) => {} // Success
        _ => panic!("Expected SnapshotDecodeFailed variant"),
    }
}

// Test the memory page refuses cross-origin URL replacement
#[test]
fn test_cross_origin_replacement_rejected() {
    use youtube_quick_jump::VideoPage;

    let mut page =
        MemoryPage::new("https://www.youtube.com/shorts/abc", Viewport::default()).unwrap();
    let err = page
        .replace_location("https://evil.example/shorts/abc?t=5s")
        .unwrap_err();
    assert!(matches!(err, JumpError::LocationRejected(_)));
    assert!(page.history().is_empty());
}
