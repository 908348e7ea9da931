use leptos::prelude::*;

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="features">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Features"</p>
                    <h2 class="section-title">"Your own inference cloud, without the cloud."</h2>
                    <p class="section-description">
                        "One control plane, any number of GPU nodes, and the API surface your tools already speak."
                    </p>
                </div>
                <div class="features-grid">
                    <FeatureCard
                        icon="plug"
                        title="OpenAI compatible"
                        description="Chat completions, embeddings and model listing under /v1. Swap base_url and keep your code."
                    />
                    <FeatureCard
                        icon="network"
                        title="Nodes dial out"
                        description="Compute nodes open the connection to the gateway, so they work behind NAT and firewalls."
                    />
                    <FeatureCard
                        icon="heal"
                        title="Self-healing start"
                        description="ollabridge start installs Ollama, pulls the default model and generates an API key if needed."
                    />
                    <FeatureCard
                        icon="balance"
                        title="Load balancing"
                        description="Requests are spread across healthy nodes. Add more nodes for throughput, remove them any time."
                    />
                    <FeatureCard
                        icon="key"
                        title="Keys and join tokens"
                        description="API keys protect the gateway, short-lived enrollment tokens let new nodes join."
                    />
                    <FeatureCard
                        icon="globe"
                        title="Local or public"
                        description="Run on localhost for development or share a public URL for teammates and remote nodes."
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    let icon_class = format!("feature-icon icon-{}", icon);
    view! {
        <div class="feature-card">
            <div class=icon_class></div>
            <h3 class="feature-title">{title}</h3>
            <p class="feature-description">{description}</p>
        </div>
    }
}
