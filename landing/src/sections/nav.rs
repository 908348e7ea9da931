use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::route::{Page, Route};

#[component]
pub fn Nav(#[prop(into)] page: Signal<Page>) -> impl IntoView {
    let config = SiteConfig::get();
    let (menu_open, set_menu_open) = signal(false);
    let quickstart = Route::new(Page::Docs, "quickstart").href();
    let mobile_quickstart = quickstart.clone();

    view! {
        <nav class="nav">
            <div class="nav-inner">
                <a href="#/" class="nav-brand" on:click=move |_| set_menu_open.set(false)>
                    <img class="nav-logo" src=config.logo.clone() alt={format!("{} Logo", config.product)} />
                    <span class="nav-title">{config.product.clone()}</span>
                    <span class="nav-bolt">"⚡"</span>
                </a>

                <div class="nav-links">
                    <NavLinks page=page link_class="nav-link" set_menu_open=set_menu_open />
                </div>

                <a href=quickstart class="nav-cta">"Get Started"</a>

                <button
                    class="nav-menu-toggle"
                    aria-label="Toggle navigation"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "[x]" } else { "[=]" }}
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <div class="nav-drawer">
                    <NavLinks page=page link_class="nav-drawer-link" set_menu_open=set_menu_open />
                    <a
                        href=mobile_quickstart.clone()
                        class="nav-drawer-cta"
                        on:click=move |_| set_menu_open.set(false)
                    >
                        "Get Started"
                    </a>
                </div>
            </Show>
        </nav>
    }
}

/// Links shared by the desktop bar and the mobile drawer. On the home page
/// they point at in-page anchors; elsewhere they offer a way back home.
#[component]
fn NavLinks(
    page: Signal<Page>,
    link_class: &'static str,
    set_menu_open: WriteSignal<bool>,
) -> impl IntoView {
    let config = SiteConfig::get();
    let docs_href = Route::new(Page::Docs, "").href();
    let close = move |_| set_menu_open.set(false);
    let docs_class = move || {
        if page.get() == Page::Docs {
            format!("{link_class} active")
        } else {
            link_class.to_string()
        }
    };

    view! {
        <Show
            when=move || page.get() == Page::Home
            fallback=move || view! { <a href="#/" class=link_class on:click=close>"Home"</a> }
        >
            <a href="#features" class=link_class on:click=close>"Features"</a>
            <a href="#architecture" class=link_class on:click=close>"Architecture"</a>
        </Show>
        <a href=docs_href class=docs_class on:click=close>"Documentation"</a>
        <a
            href=config.repository.clone()
            target="_blank"
            rel="noopener noreferrer"
            class=link_class
            on:click=close
        >
            "GitHub"
        </a>
    }
}
