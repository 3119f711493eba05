use super::*;

#[test]
fn non_browser_build_never_looks_ready() {
    let snap = DomProbe.snapshot();
    assert_eq!(snap, ReadinessSnapshot::default());
    assert!(!snap.is_ready());
}
