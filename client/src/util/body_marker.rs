//! One-time "entrance animations may run" marker on `<body>`.
//!
//! Page sections key their entrance animations off this class (CSS selector
//! `body.initial-load-complete`), and script can ask [`is_released`]. Outside
//! a browser build both calls are no-ops.

pub const BODY_CLASS: &str = "initial-load-complete";

/// Add the marker class to `<body>`. Idempotent.
pub fn release() {
    #[cfg(feature = "csr")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            if let Err(e) = body.class_list().add_1(BODY_CLASS) {
                log::warn!("failed to mark body as loaded: {e:?}");
            }
        }
    }
}

/// Whether the marker has been released in this document.
pub fn is_released() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .is_some_and(|body| body.class_list().contains(BODY_CLASS))
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

#[cfg(all(test, not(feature = "csr")))]
#[path = "body_marker_test.rs"]
mod body_marker_test;
