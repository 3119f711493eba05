//! Root application component.

use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};

use crate::components::{initial_loader::InitialLoader, site_shell::SiteShell};
use crate::hooks::initial_loader::use_initial_loader;

/// Root application component.
///
/// The site shell always renders so the readiness probe has landmarks to
/// find; the splash overlays it until the load gate opens.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let load = use_initial_loader();
    let is_loading = move || load.get().is_loading;
    let progress = Signal::derive(move || load.get().progress);

    view! {
        <Title text="Python Learning"/>
        <Meta name="description" content="Master Programming Excellence"/>

        <Show when=is_loading>
            <InitialLoader progress/>
        </Show>
        <SiteShell/>
    }
}
