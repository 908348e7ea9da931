use leptos::prelude::*;

use super::{Callout, CheckList, CodeWindow, SectionTitle};
use crate::config::SiteConfig;

const PRINTED_ON_START: &[&str] = &[
    "A local gateway URL (default port 11435) with /health and /v1",
    "An API key you pass as an OpenAI key (X-API-Key or Authorization: Bearer)",
    "A node join token + example join command for remote GPUs",
];

#[component]
pub fn Quickstart() -> impl IntoView {
    let config = SiteConfig::get();
    let start = format!(
        "ollabridge start\n\n# Gateway online at {}\n# Local OpenAI base_url: {}",
        config.gateway_url,
        config.api_base()
    );

    view! {
        <section class="doc-section">
            <SectionTitle
                id="quickstart"
                icon="plug"
                overline="Quickstart"
                title="Start a gateway in ~60 seconds"
                desc="Install, start, copy your API key, and you're ready to use any OpenAI SDK or toolchain."
            />

            <div class="doc-grid">
                <CodeWindow title="Install" subtitle="local machine" code={format!("pip install {}", config.package)} />
                <CodeWindow title="Start the gateway" subtitle="prints URL + key + join token" code=start />
            </div>

            <Callout title="What you get after start" icon="key">
                <p class="callout-text">"When you run "<code>"ollabridge start"</code>", it prints:"</p>
                <CheckList items=PRINTED_ON_START />
            </Callout>
        </section>
    }
}
