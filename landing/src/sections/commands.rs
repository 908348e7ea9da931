use leptos::prelude::*;

use super::{CodeWindow, SectionTitle};

const GATEWAY_COMMANDS: &str = "# Start the gateway (auto-installs Ollama / models if needed)
ollabridge start

# Expose a public URL for remote nodes and teammates
ollabridge start --share

# Create a short-lived enrollment token for a new node
ollabridge enroll-create --ttl 3600

# Older alias, same as start
ollabridge up";

const NODE_COMMANDS: &str = "# Join a gateway (use the command printed by 'ollabridge start')
ollabridge-node join \\
  --control http://YOUR_GATEWAY_IP:11435 \\
  --token eyJ0eXAi...

# Tip: if you use a public domain, prefer HTTPS
ollabridge-node join --control https://gateway.example.com --token eyJ0eXAi...";

#[component]
pub fn Commands() -> impl IntoView {
    view! {
        <section class="doc-section">
            <SectionTitle
                id="commands"
                icon="terminal"
                overline="CLI"
                title="Commands you'll use most"
                desc="OllaBridge ships two entry points: the gateway controller and the node client."
            />

            <div class="doc-grid">
                <div class="doc-column">
                    <h3 class="doc-subtitle">"Gateway (control plane)"</h3>
                    <p class="doc-text">"Start and manage the gateway that exposes an OpenAI-compatible API endpoint."</p>
                    <CodeWindow title="ollabridge" subtitle="common subcommands" code=GATEWAY_COMMANDS />
                </div>
                <div class="doc-column">
                    <h3 class="doc-subtitle">"Nodes (compute clients)"</h3>
                    <p class="doc-text">
                        "Join extra machines (laptop, workstation, Colab, cloud) to your gateway. "
                        "Nodes dial out to the gateway, so they work behind NAT/firewalls."
                    </p>
                    <CodeWindow title="ollabridge-node" subtitle="join a gateway" code=NODE_COMMANDS />
                </div>
            </div>

            <div class="cli-grid">
                <div class="cli-group">
                    <h3 class="cli-group-title">"ollabridge start"</h3>
                    <CliItem cmd="--host <addr>" desc="Bind host (default 0.0.0.0)" />
                    <CliItem cmd="--port <n>" desc="Bind port (default 11435)" />
                    <CliItem cmd="--share" desc="Expose a public URL (best effort)" />
                    <CliItem cmd="--workers <n>" desc="Worker processes (default 1)" />
                    <CliItem cmd="--model <name>" desc="Default chat model to ensure (default deepseek-r1)" />
                </div>
                <div class="cli-group">
                    <h3 class="cli-group-title">"Other subcommands"</h3>
                    <CliItem cmd="ollabridge enroll-create --ttl <s>" desc="New enrollment token (default 3600 s)" />
                    <CliItem cmd="ollabridge up [--share]" desc="Backwards-compatible alias of start" />
                    <CliItem cmd="ollabridge-node join" desc="Connect this machine to a gateway" />
                </div>
            </div>
        </section>
    }
}

#[component]
fn CliItem(cmd: &'static str, desc: &'static str) -> impl IntoView {
    view! {
        <div class="cli-item">
            <code class="cli-cmd">{cmd}</code>
            <span class="cli-desc">{desc}</span>
        </div>
    }
}
