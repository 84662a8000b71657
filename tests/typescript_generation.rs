//! TypeScript Generation Tests
//!
//! Validates that run and editor types can be exported to TypeScript when the tauri
//! feature is enabled.

#[cfg(feature = "tauri")]
#[test]
fn test_core_types_implement_specta_type() {
    use specta::Type;

    // If this compiles, all types are properly configured for TypeScript export.
    fn assert_type<T: Type>() {}

    assert_type::<runsplit::Run>();
    assert_type::<runsplit::Segment>();
    assert_type::<runsplit::SegmentRow>();
    assert_type::<runsplit::Column>();
    assert_type::<runsplit::RunEditor>();
    assert_type::<runsplit::EditorConfig>();
    assert_type::<runsplit::AttemptsPolicy>();
}

#[cfg(not(feature = "tauri"))]
#[test]
fn test_tauri_feature_disabled() {
    // Types still compile without specta::Type
    let _ = runsplit::AttemptsPolicy::default();
}
