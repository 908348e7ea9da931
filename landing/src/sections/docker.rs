use leptos::prelude::*;

use super::{Callout, CodeWindow, SectionTitle};
use crate::config::SiteConfig;

#[component]
pub fn Docker() -> impl IntoView {
    let package = &SiteConfig::get().package;
    let gateway = format!(
        r#"docker run -d --name ollabridge \
  -p 11435:11435 \
  -e API_KEYS=sk-ollabridge-change-this \
  -e OLLAMA_BASE_URL=http://host.docker.internal:11434 \
  -v ollabridge-data:/root/.ollabridge \
  python:3.11-slim \
  sh -c "pip install {package} && ollabridge start""#
    );
    let node = format!(
        r#"docker run -d --name ollabridge-node --gpus all \
  python:3.11-slim \
  sh -c "pip install {package} && ollabridge-node join --control https://your-gateway.com --token eyJ0eXAi...""#
    );

    view! {
        <section class="doc-section">
            <SectionTitle
                id="docker"
                icon="box"
                overline="Docker"
                title="Run the gateway and nodes in containers"
                desc="Settings come from environment variables, so the same image works for development and production."
            />

            <div class="doc-grid">
                <CodeWindow title="Gateway" subtitle="persist keys + registry in a volume" code=gateway />
                <CodeWindow title="GPU node" subtitle="needs the NVIDIA container toolkit" code=node />
            </div>

            <Callout title="Useful environment variables" icon="key">
                <p class="callout-text">
                    <code>"API_KEYS"</code>" (comma-separated), "<code>"PORT"</code>", "
                    <code>"OLLAMA_BASE_URL"</code>", "<code>"DEFAULT_MODEL"</code>" and "
                    <code>"ENROLLMENT_TTL_SECONDS"</code>". Data lives in "<code>"~/.ollabridge"</code>"."
                </p>
            </Callout>
        </section>
    }
}
