use leptos::prelude::*;

use super::CodeWindow;
use crate::config::SiteConfig;

/// Languages offered in the home page code tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sample {
    Python,
    Curl,
    Node,
}

impl Sample {
    const ALL: [Sample; 3] = [Sample::Python, Sample::Curl, Sample::Node];

    fn label(self) -> &'static str {
        match self {
            Sample::Python => "Python",
            Sample::Curl => "curl",
            Sample::Node => "Node.js",
        }
    }

    fn subtitle(self) -> &'static str {
        match self {
            Sample::Python => "openai SDK",
            Sample::Curl => "OpenAI-compatible REST",
            Sample::Node => "openai npm package",
        }
    }

    fn code(self, config: &SiteConfig) -> String {
        let api = config.api_base();
        match self {
            Sample::Python => format!(
                r#"from openai import OpenAI

client = OpenAI(base_url="{api}", api_key="sk-ollabridge-...")

resp = client.chat.completions.create(
    model="deepseek-r1",
    messages=[{{"role": "user", "content": "Hello!"}}],
)
print(resp.choices[0].message.content)"#
            ),
            Sample::Curl => format!(
                r#"curl {api}/chat/completions \
  -H "Authorization: Bearer sk-ollabridge-..." \
  -H "Content-Type: application/json" \
  -d '{{"model": "deepseek-r1", "messages": [{{"role": "user", "content": "Say hi"}}]}}'"#
            ),
            Sample::Node => format!(
                r#"import OpenAI from "openai";

const client = new OpenAI({{ baseURL: "{api}", apiKey: "sk-ollabridge-..." }});

const resp = await client.chat.completions.create({{
  model: "deepseek-r1",
  messages: [{{ role: "user", content: "Hello!" }}],
}});
console.log(resp.choices[0].message.content);"#
            ),
        }
    }
}

#[component]
pub fn CodeSamples() -> impl IntoView {
    let (active, set_active) = signal(Sample::Python);

    view! {
        <section id="code" class="code-samples">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Drop-in"</p>
                    <h2 class="section-title">"Change one line: the base_url."</h2>
                </div>

                <div class="sample-tabs">
                    {Sample::ALL
                        .into_iter()
                        .map(|sample| {
                            view! {
                                <button
                                    class=move || if active.get() == sample { "sample-tab active" } else { "sample-tab" }
                                    on:click=move |_| set_active.set(sample)
                                >
                                    {sample.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                {move || {
                    let sample = active.get();
                    view! {
                        <CodeWindow
                            title=sample.label()
                            subtitle=sample.subtitle()
                            code={sample.code(SiteConfig::get())}
                        />
                    }
                }}
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_sample_targets_the_configured_gateway() {
        let mut config = SiteConfig::default();
        config.gateway_url = "https://gw.example.com".into();

        for sample in Sample::ALL {
            let code = sample.code(&config);
            assert!(code.contains("https://gw.example.com/v1"), "{sample:?}");
        }
    }

    #[test]
    fn braces_survive_formatting() {
        let code = Sample::Curl.code(&SiteConfig::default());
        assert!(code.contains(r#"-d '{"model": "deepseek-r1""#));
    }
}
