use leptos::prelude::*;

use super::{Callout, CodeWindow, SectionTitle};
use crate::config::SiteConfig;

#[component]
pub fn Nodes() -> impl IntoView {
    let package = &SiteConfig::get().package;
    let remote = format!(
        "pip install {package}\n\n# Paste the join command from gateway startup\nollabridge-node join --control http://YOUR_GATEWAY_IP:11435 --token eyJ0eXAi..."
    );
    let colab = format!(
        "!pip -q install {package}\n!ollabridge-node join --control https://your-gateway.com --token eyJ0eXAi..."
    );

    view! {
        <section class="doc-section">
            <SectionTitle
                id="nodes"
                icon="network"
                overline="Distributed compute"
                title="Add a GPU node (Colab, workstation, cloud)"
                desc="Run this on the remote machine. The node will auto-install prerequisites if needed and then connect back to your gateway."
            />

            <div class="doc-grid">
                <CodeWindow title="Remote machine" subtitle="Linux/macOS/Windows (WSL)" code=remote />
                <CodeWindow title="Google Colab" subtitle="run in a notebook cell" code=colab />
            </div>

            <Callout title="Security note" icon="shield">
                <p class="callout-text">
                    "Treat the join token like a password. Use HTTPS for public gateways, rotate tokens/keys when sharing access, "
                    "and avoid posting tokens in logs or screenshots."
                </p>
            </Callout>
        </section>
    }
}
