//! Smooth scrolling to a docs section named in the route.

use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// The element id to scroll to, if the route names one. The section is used
/// verbatim as the id.
pub fn scroll_target(section: &str) -> Option<&str> {
    (!section.is_empty()).then_some(section)
}

/// Remembers the last section scrolled to, so a target scrolls once until
/// the route names a different one.
///
/// An empty section clears the memory: `sdk`, then none, then `sdk` again
/// scrolls twice.
#[derive(Debug, Default)]
pub struct ScrollTracker {
    last: Option<String>,
}

impl ScrollTracker {
    /// The id to scroll to for `section`, or `None` when there is nothing new.
    pub fn next_target<'a>(&mut self, section: &'a str) -> Option<&'a str> {
        let Some(target) = scroll_target(section) else {
            self.last = None;
            return None;
        };
        if self.last.as_deref() == Some(target) {
            return None;
        }
        self.last = Some(target.to_string());
        Some(target)
    }
}

/// Scroll the element with `id` into view. Unknown ids are ignored.
///
/// Returns whether an element was found; the animation itself is left to the
/// browser.
pub fn scroll_to_section(id: &str) -> bool {
    let Some(element) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
    else {
        tracing::debug!(section = id, "no element to scroll to");
        return false;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_section_has_no_target() {
        assert_eq!(scroll_target(""), None);
    }

    #[test]
    fn named_section_is_the_target() {
        assert_eq!(scroll_target("quickstart"), Some("quickstart"));
    }

    #[test]
    fn target_is_not_trimmed() {
        assert_eq!(scroll_target(" quickstart "), Some(" quickstart "));
        assert_eq!(scroll_target("  "), Some("  "));
    }

    #[test]
    fn initial_section_scrolls() {
        let mut tracker = ScrollTracker::default();
        assert_eq!(tracker.next_target("quickstart"), Some("quickstart"));
    }

    #[test]
    fn same_section_scrolls_once() {
        let mut tracker = ScrollTracker::default();
        let scrolls: Vec<_> = ["sdk", "sdk", "sdk"]
            .into_iter()
            .filter_map(|section| tracker.next_target(section))
            .collect();
        assert_eq!(scrolls, vec!["sdk"]);
    }

    #[test]
    fn new_section_scrolls_again() {
        let mut tracker = ScrollTracker::default();
        let scrolls: Vec<_> = ["sdk", "sdk", "nodes", "sdk"]
            .into_iter()
            .filter_map(|section| tracker.next_target(section))
            .collect();
        assert_eq!(scrolls, vec!["sdk", "nodes", "sdk"]);
    }

    #[test]
    fn clearing_the_section_rearms_the_same_target() {
        let mut tracker = ScrollTracker::default();
        assert_eq!(tracker.next_target("docker"), Some("docker"));
        assert_eq!(tracker.next_target(""), None);
        assert_eq!(tracker.next_target("docker"), Some("docker"));
    }
}
