use leptos::prelude::*;

use super::{Callout, SectionTitle};
use crate::route::{Page, Route};

#[component]
pub fn Troubleshooting() -> impl IntoView {
    view! {
        <section class="doc-section">
            <SectionTitle
                id="troubleshooting"
                icon="shield"
                overline="Help"
                title="Troubleshooting"
                desc="The most common gotchas and how to fix them."
            />

            <div class="doc-stack">
                <Callout title="Gateway starts but requests fail">
                    <p class="callout-text">
                        "Double-check your "<code>"base_url"</code>" ends with "<code>"/v1"</code>
                        " and that you're sending the printed API key."
                    </p>
                </Callout>
                <Callout title="Remote node can't connect">
                    <p class="callout-text">
                        "Ensure the gateway URL is reachable from the node (public IP/DNS for internet nodes). "
                        "If exposing publicly, prefer HTTPS and allow outbound traffic from the node environment."
                    </p>
                </Callout>
                <Callout title="Model not found">
                    <p class="callout-text">
                        "Confirm the model name your client requests matches what your gateway/node has available. "
                        "Start with the model printed by the gateway on startup."
                    </p>
                </Callout>
            </div>

            <div class="doc-cta">
                <div>
                    <div class="doc-cta-title">"Ready to run your first request?"</div>
                    <div class="doc-cta-text">"Jump back to Quickstart and copy/paste the examples."</div>
                </div>
                <a href={Route::new(Page::Docs, "quickstart").href()} class="btn btn-primary">"Go to Quickstart →"</a>
            </div>
        </section>
    }
}
