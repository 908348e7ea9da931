use leptos::prelude::*;

use super::{CheckList, SectionTitle};

const SECURITY: &[&str] = &[
    "Use HTTPS when exposing a gateway publicly.",
    "Rotate API keys / join tokens if shared.",
    "Keep join tokens out of logs and screenshots.",
];

const RELIABILITY: &[&str] = &[
    "Run the gateway on a small always-on machine/VM.",
    "Attach multiple nodes for failover and load balancing.",
    "Prefer stable model names in your app config.",
];

const PERFORMANCE: &[&str] = &[
    "Keep nodes close (region-wise) to reduce latency.",
    "Reserve a small local model for fast iterations.",
    "Use multiple GPUs/nodes for higher throughput.",
];

const HYGIENE: &[&str] = &[
    "Document your base_url + key distribution for teammates.",
    "Use a process manager (systemd, Docker, etc.) in production.",
    "Keep your gateway host updated and locked down.",
];

#[component]
pub fn BestPractices() -> impl IntoView {
    view! {
        <section class="doc-section">
            <SectionTitle
                id="best-practices"
                icon="shield"
                overline="Best practices"
                title="Production-ready defaults"
                desc="A short checklist that keeps your gateway stable, secure, and easy to operate."
            />

            <div class="card-grid">
                <PracticeCard title="Security" items=SECURITY />
                <PracticeCard title="Reliability" items=RELIABILITY />
                <PracticeCard title="Performance" items=PERFORMANCE />
                <PracticeCard title="Operational hygiene" items=HYGIENE />
            </div>
        </section>
    }
}

#[component]
fn PracticeCard(title: &'static str, items: &'static [&'static str]) -> impl IntoView {
    view! {
        <div class="practice-card">
            <h3 class="card-title">{title}</h3>
            <CheckList items=items />
        </div>
    }
}
