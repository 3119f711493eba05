//! Reactive hooks that bridge browser APIs into Leptos signals.

pub mod initial_loader;
