use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::route::{Page, Route};

#[component]
pub fn Footer() -> impl IntoView {
    let config = SiteConfig::get();
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-brand">
                    <img class="footer-logo" src=config.logo.clone() alt={format!("{} Logo", config.product)} />
                    <span class="footer-title">{config.product.clone()}</span>
                    <span class="footer-copyright">{format!("© {year}")}</span>
                </div>
                <div class="footer-links">
                    <a href={Route::new(Page::Docs, "").href()} class="footer-link">"Documentation"</a>
                    <a href=config.repository.clone() target="_blank" rel="noopener noreferrer" class="footer-link">
                        "GitHub"
                    </a>
                    <a href={format!("{}/blob/master/LICENSE", config.repository)} target="_blank" class="footer-link">
                        "License (MIT)"
                    </a>
                </div>
                <a href=config.repository.clone() class="footer-status">
                    <span class="footer-status-dot"></span>
                    "System Operational"
                </a>
            </div>
        </footer>
    }
}
