use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::route::{Page, Route};

#[component]
pub fn CallToAction() -> impl IntoView {
    let config = SiteConfig::get();

    view! {
        <section class="cta-band">
            <div class="container">
                <h2 class="cta-title">"Turn spare GPUs into an API in a minute."</h2>
                <p class="cta-description">
                    {format!("pip install {}, run ollabridge start, paste the key into your SDK.", config.package)}
                </p>
                <div class="cta-actions">
                    <a href={Route::new(Page::Docs, "quickstart").href()} class="btn btn-primary">"Read the Quickstart"</a>
                    <a href={Route::new(Page::Docs, "nodes").href()} class="btn btn-secondary">"Add a GPU node"</a>
                </div>
            </div>
        </section>
    }
}
