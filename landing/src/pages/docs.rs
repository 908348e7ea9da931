// Docs page - table of contents + guides, scrolled to the routed section
use crate::config::SiteConfig;
use crate::route::{Page, Route};
use crate::scroll::{ScrollTracker, scroll_to_section};
use crate::sections::{
    BestPractices, Commands, Docker, Nodes, Pill, Quickstart, Scenarios, Sdk, Troubleshooting,
};
use leptos::prelude::*;

/// An entry in the docs table of contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocSection {
    pub id: &'static str,
    pub label: &'static str,
}

impl DocSection {
    /// Deep link that opens the docs page scrolled to this section.
    pub fn href(&self) -> String {
        Route::new(Page::Docs, self.id).href()
    }
}

pub const DOC_SECTIONS: &[DocSection] = &[
    DocSection { id: "quickstart", label: "Quickstart" },
    DocSection { id: "commands", label: "CLI commands" },
    DocSection { id: "nodes", label: "Add GPU nodes" },
    DocSection { id: "sdk", label: "OpenAI SDK usage" },
    DocSection { id: "docker", label: "Docker usage" },
    DocSection { id: "best-practices", label: "Best practices" },
    DocSection { id: "troubleshooting", label: "Troubleshooting" },
];

/// Documentation view.
///
/// The scroll below runs once per distinct non-empty `section` and again
/// whenever the page is mounted.
#[component]
pub fn DocsPage(#[prop(into)] section: Signal<String>) -> impl IntoView {
    let mut tracker = ScrollTracker::default();
    Effect::new(move |_| {
        let section = section.get();
        if let Some(target) = tracker.next_target(&section) {
            scroll_to_section(target);
        }
    });

    view! {
        <DocsHeader />
        <main class="docs-main">
            <div class="container docs-layout">
                <TableOfContents />
                <div class="docs-content">
                    <Quickstart />
                    <Commands />
                    <Nodes />
                    <Sdk />
                    <Docker />
                    <Scenarios />
                    <BestPractices />
                    <Troubleshooting />
                </div>
            </div>
        </main>
    }
}

#[component]
fn DocsHeader() -> impl IntoView {
    let product = &SiteConfig::get().product;

    view! {
        <header class="page-header docs-header">
            <div class="container">
                <div class="breadcrumb">
                    <a href="#/" class="breadcrumb-link">"Home"</a>
                    <span class="breadcrumb-sep">"›"</span>
                    <span class="breadcrumb-current">"Documentation"</span>
                </div>
                <h1 class="page-title">{format!("{product} Documentation")}</h1>
                <p class="page-description">
                    "A practical guide to install, start the gateway, attach GPU nodes, and use a single "
                    "OpenAI-compatible API across all your compute."
                </p>
                <div class="pill-row">
                    <Pill label="OpenAI compatible" />
                    <Pill label="No port forwarding" />
                    <Pill label="Nodes dial out" />
                    <Pill label="Works local + remote" />
                </div>
            </div>
        </header>
    }
}

#[component]
fn TableOfContents() -> impl IntoView {
    view! {
        <aside class="docs-toc">
            <div class="docs-toc-inner">
                <div class="docs-toc-title">"On this page"</div>
                <nav class="docs-toc-links">
                    {DOC_SECTIONS
                        .iter()
                        .map(|entry| {
                            view! {
                                <a href=entry.href() class="docs-toc-link">
                                    <span>{entry.label}</span>
                                    <span class="docs-toc-hash">"#"</span>
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
            </div>
        </aside>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn toc_links_deep_link_into_docs() {
        for entry in DOC_SECTIONS {
            let route = Route::from_location(&entry.href(), "/");
            assert_eq!(route, Route::new(Page::Docs, entry.id));
        }
    }

    #[test]
    fn toc_ids_are_unique() {
        let mut ids: Vec<_> = DOC_SECTIONS.iter().map(|entry| entry.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), DOC_SECTIONS.len());
    }

    #[test]
    fn quickstart_link_matches_navbar_cta() {
        assert_eq!(DOC_SECTIONS[0].href(), "#/docs?section=quickstart");
    }
}
