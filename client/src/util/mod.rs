//! Browser glue for the load gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! These modules isolate `web-sys` access behind the `loadgate` traits so the
//! gate itself stays testable outside a browser.

pub mod body_marker;
pub mod dom_probe;
pub mod session_storage;
