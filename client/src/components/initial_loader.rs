//! Full-screen splash shown while the initial load gate is open.

#[cfg(test)]
#[path = "initial_loader_test.rs"]
mod initial_loader_test;

use leptos::prelude::*;
use loadgate::progress::{bar_width, display_percent, loading_message};

/// Container classes for the given progress; `complete` starts the fade-out.
pub fn splash_class(progress: f64) -> &'static str {
    if progress >= 100.0 {
        "initial-loader initial-loader--complete"
    } else {
        "initial-loader"
    }
}

/// Splash screen with logo, spinner, progress bar, and status copy.
///
/// Purely presentational: `progress` comes from `use_initial_loader`.
#[component]
pub fn InitialLoader(#[prop(into)] progress: Signal<f64>) -> impl IntoView {
    view! {
        <div class=move || splash_class(progress.get()) role="status" aria-live="polite">
            <div class="initial-loader__content">
                <h1 class="initial-loader__logo">"PYTHON LEARNING"</h1>
                <p class="initial-loader__tagline">"Master Programming Excellence"</p>

                <div class="initial-loader__spinner-ring">
                    <div class="initial-loader__spinner"></div>
                </div>

                <div class="initial-loader__progress">
                    <div class="initial-loader__track">
                        <div class="initial-loader__bar" style:width=move || bar_width(progress.get())></div>
                    </div>
                    <p class="initial-loader__percent">{move || format!("{}%", display_percent(progress.get()))}</p>
                </div>

                <p class="initial-loader__message">{move || loading_message(progress.get())}</p>
            </div>
        </div>
    }
}
