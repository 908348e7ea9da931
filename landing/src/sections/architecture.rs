use leptos::prelude::*;

use crate::config::SiteConfig;

#[component]
pub fn Architecture() -> impl IntoView {
    let config = SiteConfig::get();

    view! {
        <section id="architecture" class="architecture">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Architecture"</p>
                    <h2 class="section-title">"Clients talk to one gateway. Nodes do the work."</h2>
                </div>

                <div class="arch-diagram">
                    <div class="arch-column">
                        <div class="arch-column-title">"Clients"</div>
                        <ArchBox label="OpenAI SDK" detail="Python / Node" />
                        <ArchBox label="curl" detail="REST" />
                        <ArchBox label="Your app" detail="any HTTP client" />
                    </div>

                    <div class="arch-arrow">"→"</div>

                    <div class="arch-column arch-gateway">
                        <div class="arch-column-title">"Gateway"</div>
                        <ArchBox label=config.product.clone() detail=config.api_base() />
                        <ul class="arch-gateway-duties">
                            <li>"API key auth"</li>
                            <li>"Node registry + enrollment"</li>
                            <li>"Routing + load balancing"</li>
                        </ul>
                    </div>

                    <div class="arch-arrow">"←"</div>

                    <div class="arch-column">
                        <div class="arch-column-title">"Nodes (dial out)"</div>
                        <ArchBox label="Local runtime" detail="Ollama on the gateway host" />
                        <ArchBox label="Workstation" detail="home GPU" />
                        <ArchBox label="Colab / cloud" detail="burst compute" />
                    </div>
                </div>

                <ol class="arch-steps">
                    <li>"The gateway starts and prints its URL, an API key and a node join token."</li>
                    <li>"Nodes connect outward to the gateway with the join token and register their models."</li>
                    <li>"Clients send OpenAI requests to the gateway, which relays them to a healthy node."</li>
                </ol>
            </div>
        </section>
    }
}

#[component]
fn ArchBox(#[prop(into)] label: String, #[prop(into)] detail: String) -> impl IntoView {
    view! {
        <div class="arch-box">
            <span class="arch-box-label">{label}</span>
            <span class="arch-box-detail">{detail}</span>
        </div>
    }
}
