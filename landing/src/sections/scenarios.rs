use leptos::prelude::*;

use super::SectionTitle;

struct Scenario {
    title: &'static str,
    desc: &'static str,
    cmd: &'static str,
}

const SCENARIOS: &[Scenario] = &[
    Scenario {
        title: "Home gaming PC as your \"GPU cloud\"",
        desc: "Join your desktop GPU to a gateway so your laptop can use it from anywhere.",
        cmd: "ollabridge-node join --control https://your-gateway.com --token ...",
    },
    Scenario {
        title: "Free Colab GPU for burst compute",
        desc: "Attach a Colab session as a node; if it dies, start a new one. Your app URL stays the same.",
        cmd: "!ollabridge-node join --control https://your-gateway.com --token ...",
    },
    Scenario {
        title: "Team-wide gateway in a VPC",
        desc: "Expose one internal OpenAI base_url; let OllaBridge load-balance across multiple nodes.",
        cmd: "ollabridge start  # on a small control-plane VM",
    },
    Scenario {
        title: "Hybrid: local + remote routing",
        desc: "Keep a fast local model for dev and a bigger remote model for heavy jobs; same API surface.",
        cmd: "client = OpenAI(base_url=\"http://gateway/v1\", api_key=\"...\")",
    },
];

#[component]
pub fn Scenarios() -> impl IntoView {
    view! {
        <section class="doc-section">
            <SectionTitle
                id="scenarios"
                icon="network"
                overline="Scenarios"
                title="Common usage patterns"
                desc="These are the most popular ways people deploy OllaBridge in practice."
            />

            <div class="card-grid">
                {SCENARIOS
                    .iter()
                    .map(|scenario| {
                        view! {
                            <div class="scenario-card">
                                <h3 class="card-title">{scenario.title}</h3>
                                <p class="card-text">{scenario.desc}</p>
                                <div class="card-cmd">{scenario.cmd}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
