use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::clipboard::{copy_text, display_lines};
use crate::config::SiteConfig;

/// Terminal-style code block with a copy button.
///
/// The copy always ends with the "Copied" acknowledgment, even when both
/// clipboard mechanisms failed.
#[component]
pub fn CodeWindow(
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
    #[prop(into)] code: String,
) -> impl IntoView {
    let (copied, set_copied) = signal(false);
    let feedback = SiteConfig::get().copy_feedback();

    let lines: Vec<String> = display_lines(&code)
        .into_iter()
        .map(str::to_owned)
        .collect();

    let copy_code = move |_| {
        let code = code.clone();
        spawn_local(async move {
            match copy_text(&code).await {
                Ok(method) => tracing::debug!(?method, "copied code block"),
                Err(err) => tracing::debug!(%err, "copy failed"),
            }
            set_copied.set(true);
            set_timeout(move || set_copied.set(false), feedback);
        });
    };

    view! {
        <div class="code-window">
            <div class="code-window-header">
                <div class="code-window-title">
                    <div class="terminal-dot red"></div>
                    <div class="terminal-dot yellow"></div>
                    <div class="terminal-dot green"></div>
                    <span class="code-window-name">{title}</span>
                    {subtitle.map(|sub| view! { <span class="code-window-subtitle">"- " {sub}</span> })}
                </div>
                <button
                    type="button"
                    class=move || if copied.get() { "code-copy-btn copied" } else { "code-copy-btn" }
                    aria-label="Copy to clipboard"
                    on:click=copy_code
                >
                    {move || if copied.get() { "Copied" } else { "Copy" }}
                </button>
            </div>
            <pre class="code-window-body">
                {lines
                    .into_iter()
                    .map(|line| view! { <div class="code-line">{line}</div> })
                    .collect_view()}
            </pre>
        </div>
    }
}
