use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::route::{Page, Route};

#[component]
pub fn Hero() -> impl IntoView {
    let config = SiteConfig::get();
    let badge_text = format!("{} - v{}", config.product, env!("CARGO_PKG_VERSION"));

    view! {
        <section class="hero">
            <div class="container">
                <div class="hero-grid">
                    <div class="hero-content">
                        <div class="hero-badge">
                            <span class="hero-badge-dot"></span>
                            {badge_text}
                        </div>
                        <h1 class="hero-title">
                            <span class="hero-title-accent">"Every GPU you own,"</span>
                            <br />
                            "one OpenAI-compatible API."
                        </h1>
                        <p class="hero-description">
                            "Start a gateway in seconds, attach laptops, workstations and Colab sessions as nodes, "
                            "and point any OpenAI SDK at a single base_url. Nodes dial out, so there is no port forwarding."
                        </p>
                        <div class="hero-actions">
                            <a href={Route::new(Page::Docs, "quickstart").href()} class="btn btn-primary">
                                "Get Started"
                            </a>
                            <a href=config.repository.clone() target="_blank" class="btn btn-secondary">
                                "View on GitHub →"
                            </a>
                        </div>
                    </div>
                    <Terminal />
                </div>
            </div>
        </section>
    }
}

#[component]
fn Terminal() -> impl IntoView {
    let config = SiteConfig::get();
    let api_base = config.api_base();
    let join = format!(
        "ollabridge-node join --control {} --token eyJ0eXAi...",
        config.gateway_url
    );

    view! {
        <div class="hero-terminal">
            <div class="terminal-header">
                <div class="terminal-dot red"></div>
                <div class="terminal-dot yellow"></div>
                <div class="terminal-dot green"></div>
                <span class="terminal-title">"~/gateway"</span>
            </div>
            <div class="terminal-body">
                <div class="terminal-line">
                    <span class="terminal-prompt">"$"</span>
                    <span class="terminal-command">{format!("pip install {}", config.package)}</span>
                </div>
                <div class="terminal-line" style="margin-top: 12px;">
                    <span class="terminal-prompt">"$"</span>
                    <span class="terminal-command">"ollabridge start"</span>
                </div>
                <div class="terminal-output success">{format!("✓ {} is online", config.product)}</div>
                <div class="terminal-output">{format!("  Local API:  {api_base}")}</div>
                <div class="terminal-output">"  Key:        sk-ollabridge-..."</div>
                <div class="terminal-output muted">"  Node join token: eyJ0eXAi..."</div>

                <div class="terminal-line" style="margin-top: 12px;">
                    <span class="terminal-prompt">"colab$"</span>
                    <span class="terminal-command">{join}</span>
                </div>
                <div class="terminal-output success">"✓ node colab-t4 connected (1 GPU)"</div>
            </div>
        </div>
    }
}
