use super::*;

// =============================================================
// splash_class
// =============================================================

#[test]
fn splash_class_stays_plain_while_loading() {
    assert_eq!(splash_class(0.0), "initial-loader");
    assert_eq!(splash_class(85.0), "initial-loader");
    assert_eq!(splash_class(99.9), "initial-loader");
}

#[test]
fn splash_class_fades_at_full_progress() {
    assert_eq!(splash_class(100.0), "initial-loader initial-loader--complete");
}
