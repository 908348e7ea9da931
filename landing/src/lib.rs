//! # ollabridge-landing
//!
//! Landing page and documentation for OllaBridge, rendered client-side with
//! [Leptos](https://leptos.dev/) and served as static files.
//!
//! Navigation is fragment based (`#/docs?section=quickstart`), so the site
//! works from any static host without URL rewriting:
//!
//! - [`route`] - parsing a location into a [`route::Route`]
//! - [`router`] - the route holder, its subscribers and the browser listeners
//! - [`scroll`] - deep-link scrolling inside the docs page
//! - [`clipboard`] - copy buttons on code windows
//! - [`config`] - `site.toml` settings
//! - [`logging`] - `tracing` output to the browser console
//!
//! ---
//!
//! OllaBridge site - Leptos 0.8 Edition

pub mod clipboard;
pub mod config;
pub mod logging;
pub mod pages;
pub mod route;
pub mod router;
pub mod scroll;
pub mod sections;

use leptos::prelude::*;

use config::SiteConfig;
use pages::{DocsPage, HomePage};
use route::Page;
use router::{BrowserLocation, NavigationListeners, Router};
use sections::{Footer, Nav};

/// Entry point of the wasm binary.
pub fn run() {
    console_error_panic_hook::set_once();

    let config = SiteConfig::get();
    logging::init(&config.log_level);
    tracing::info!(
        product = %config.product,
        version = env!("CARGO_PKG_VERSION"),
        "mounting site"
    );

    leptos::mount::mount_to_body(App);
}

/// Application shell: owns the router and renders the page it selects.
#[component]
pub fn App() -> impl IntoView {
    let mut router = Router::new(BrowserLocation);
    let route = RwSignal::new(router.current().clone());
    router.subscribe(move |next| route.set(next.clone()));

    let listeners = NavigationListeners::attach(move || router.refresh());
    on_cleanup(move || listeners.detach());

    let page = Memo::new(move |_| route.with(|route| route.page));
    let section = Memo::new(move |_| route.with(|route| route.section.clone()));

    view! {
        <Nav page=page />
        {move || match page.get() {
            Page::Docs => view! { <DocsPage section=section /> }.into_any(),
            Page::Home => view! { <main><HomePage /></main> }.into_any(),
        }}
        <Footer />
    }
}
