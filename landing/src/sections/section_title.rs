use leptos::prelude::*;

/// Heading block for a docs section. Carries the `id` that deep links and the
/// table of contents scroll to.
#[component]
pub fn SectionTitle(
    id: &'static str,
    icon: &'static str,
    overline: &'static str,
    title: &'static str,
    #[prop(optional)] desc: Option<&'static str>,
) -> impl IntoView {
    let icon_class = format!("overline-icon icon-{}", icon);
    view! {
        <div id=id class="doc-section-title">
            <div class="doc-overline">
                <span class=icon_class></span>
                {overline}
            </div>
            <h2 class="doc-title">{title}</h2>
            {desc.map(|desc| view! { <p class="doc-desc">{desc}</p> })}
        </div>
    }
}

#[component]
pub fn Pill(label: &'static str) -> impl IntoView {
    view! { <span class="pill">{label}</span> }
}

/// Bulleted list with check marks.
#[component]
pub fn CheckList(items: &'static [&'static str]) -> impl IntoView {
    view! {
        <ul class="check-list">
            {items
                .iter()
                .map(|item| view! { <li class="check-item"><span class="check-mark">"✓"</span>{*item}</li> })
                .collect_view()}
        </ul>
    }
}

/// Bordered callout used for notes and troubleshooting entries.
#[component]
pub fn Callout(
    title: &'static str,
    #[prop(optional)] icon: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="callout">
            {icon.map(|icon| view! { <span class={format!("callout-icon icon-{icon}")}></span> })}
            <div class="callout-body">
                <h3 class="callout-title">{title}</h3>
                {children()}
            </div>
        </div>
    }
}
