//! Static page shell rendered behind the splash.
//!
//! The `<header>`, `<main>`, and `[data-animate]` elements double as the
//! landmarks the readiness probe looks for, so they render from the first
//! frame rather than after the gate opens. Entrance animations key off the
//! `initial-load-complete` body class in the stylesheet.

use leptos::prelude::*;

#[component]
pub fn SiteShell() -> impl IntoView {
    view! {
        <header class="site-header">
            <a class="site-header__brand" href="/">"Python Learning"</a>
            <nav class="site-header__nav">
                <a href="/products">"Products"</a>
                <a href="/blog">"Blog"</a>
            </nav>
        </header>
        <main class="site-main">
            <section class="hero" data-animate="">
                <h1 class="hero__title">"Master Programming Excellence"</h1>
                <p class="hero__subtitle">"Courses, exercises, and projects for every stage of your Python journey."</p>
                <a class="hero__cta" href="/products">"Browse courses"</a>
            </section>
        </main>
    }
}
