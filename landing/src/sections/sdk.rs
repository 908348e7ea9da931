use leptos::prelude::*;

use super::{CodeWindow, SectionTitle};
use crate::config::SiteConfig;

#[component]
pub fn Sdk() -> impl IntoView {
    let api = SiteConfig::get().api_base();
    let python = format!(
        r#"from openai import OpenAI

client = OpenAI(
    base_url="{api}",
    api_key="sk-ollabridge-..."
)

resp = client.chat.completions.create(
    model="deepseek-r1",
    messages=[{{"role": "user", "content": "Hello!"}}]
)

print(resp.choices[0].message.content)"#
    );
    let curl = format!(
        r#"curl {api}/chat/completions \
  -H "Authorization: Bearer sk-ollabridge-..." \
  -H "Content-Type: application/json" \
  -d '{{
    "model": "deepseek-r1",
    "messages": [{{"role": "user", "content": "Say hi"}}]
  }}'"#
    );

    view! {
        <section class="doc-section">
            <SectionTitle
                id="sdk"
                icon="plug"
                overline="SDK"
                title="Use with the OpenAI SDK"
                desc="Point the OpenAI client at your gateway's /v1 endpoint and use the key printed on startup."
            />

            <div class="doc-grid">
                <CodeWindow title="Python" subtitle="openai SDK" code=python />
                <CodeWindow title="curl" subtitle="OpenAI-compatible REST" code=curl />
            </div>
        </section>
    }
}
