use super::*;

#[test]
fn release_is_a_no_op_outside_the_browser() {
    release();
    release();
    assert!(!is_released());
}

#[test]
fn class_name_matches_stylesheet_hook() {
    assert_eq!(BODY_CLASS, "initial-load-complete");
}
