use super::*;

use loadgate::LoadSession;

#[test]
fn non_browser_build_reports_unavailable() {
    let store = BrowserSessionStore;
    assert_eq!(store.get("siteInitiallyLoaded"), Err(SessionError::Unavailable));
    assert_eq!(store.set("siteInitiallyLoaded", "true"), Err(SessionError::Unavailable));
}

#[test]
fn unavailable_storage_reads_as_first_visit() {
    assert!(!LoadSession::read(&BrowserSessionStore, "siteInitiallyLoaded").has_shown_this_session);
}
