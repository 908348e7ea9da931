//! Hash/path route parsing.
//!
//! The site is served as static files, so navigation lives in the URL
//! fragment (`#/docs?section=quickstart`). When the fragment is empty the
//! pathname is used instead, which keeps `/docs` working behind a server that
//! does rewrite URLs.

use std::borrow::Cow;
use std::fmt;

const DOCS_PREFIX: &str = "/docs";
const DOCS_ALIAS: &str = "/documentation";

/// Primary and fallback query keys naming the docs section to scroll to.
const SECTION_KEYS: [&str; 2] = ["section", "s"];

/// Top-level view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Page {
    #[default]
    Home,
    Docs,
}

impl Page {
    pub fn as_str(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Docs => "docs",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parsed location: which page is active and which docs anchor to show.
///
/// `section` is kept even on [`Page::Home`]; it simply has no effect there.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Route {
    pub page: Page,
    pub section: String,
}

impl Route {
    pub fn new(page: Page, section: impl Into<String>) -> Self {
        Self {
            page,
            section: section.into(),
        }
    }

    /// Build a route from `location.hash` and `location.pathname`.
    ///
    /// The fragment wins whenever it is non-empty.
    pub fn from_location(hash: &str, pathname: &str) -> Self {
        let fragment = hash.strip_prefix('#').unwrap_or(hash);
        let raw = if fragment.is_empty() { pathname } else { fragment };
        Self::parse(raw)
    }

    /// Parse a raw `path[?query]` string. Never fails: anything unrecognised
    /// lands on the home page with no section.
    pub fn parse(raw: &str) -> Self {
        let (path_part, query) = raw.split_once('?').unwrap_or((raw, ""));
        let path = normalize_path(path_part);

        let page = if path.starts_with(DOCS_PREFIX) {
            Page::Docs
        } else {
            Page::Home
        };

        Self {
            page,
            section: section_from_query(query),
        }
    }

    /// Fragment link that parses back to this route.
    pub fn href(&self) -> String {
        match (self.page, self.section.is_empty()) {
            (Page::Home, _) => "#/".to_string(),
            (Page::Docs, true) => format!("#{DOCS_PREFIX}"),
            (Page::Docs, false) => format!(
                "#{DOCS_PREFIX}?section={}",
                urlencoding::encode(&self.section)
            ),
        }
    }
}

fn normalize_path(part: &str) -> Cow<'_, str> {
    let path = if part.is_empty() {
        Cow::Borrowed("/")
    } else if part.starts_with('/') {
        Cow::Borrowed(part)
    } else {
        Cow::Owned(format!("/{part}"))
    };

    if path == DOCS_ALIAS {
        Cow::Borrowed(DOCS_PREFIX)
    } else {
        path
    }
}

fn section_from_query(query: &str) -> String {
    SECTION_KEYS
        .iter()
        .filter_map(|key| query_value(query, key))
        .find(|value| !value.is_empty())
        .unwrap_or_default()
}

/// First value for `key` in an `application/x-www-form-urlencoded` string.
fn query_value(query: &str, key: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(name, _)| decode_component(name) == key)
        .map(|(_, value)| decode_component(value))
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    let bytes = urlencoding::decode_binary(spaced.as_bytes());
    String::from_utf8_lossy(&bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn docs(section: &str) -> Route {
        Route::new(Page::Docs, section)
    }

    fn home() -> Route {
        Route::default()
    }

    #[test]
    fn addressing_table() {
        let cases = [
            ("", home()),
            ("/", home()),
            ("/docs", docs("")),
            ("/documentation", docs("")),
            ("/docs?section=quickstart", docs("quickstart")),
            ("/docs?s=commands", docs("commands")),
            ("/docs/anything?section=nodes", docs("nodes")),
            ("/anything-else", home()),
        ];

        for (raw, expected) in cases {
            assert_eq!(Route::parse(raw), expected, "input {raw:?}");
        }
    }

    #[test]
    fn parsing_is_deterministic() {
        let raw = "/docs?section=sdk&s=ignored";
        assert_eq!(Route::parse(raw), Route::parse(raw));
    }

    #[test]
    fn odd_inputs_still_produce_a_route() {
        let inputs = [
            "docs",
            "?",
            "??",
            "?section=x",
            "/docs??section=x",
            "/docs?a?b?c",
            "/docs?unknown=1&other",
            "&&&",
            "%",
            "/docs?section=%ZZ",
            "/docs?section=%FF%FE",
            "   ",
        ];

        for raw in inputs {
            let route = Route::parse(raw);
            assert!(matches!(route.page, Page::Home | Page::Docs), "{raw:?}");
        }
    }

    #[test]
    fn missing_leading_slash_is_added() {
        assert_eq!(Route::parse("docs?s=nodes"), docs("nodes"));
        assert_eq!(Route::parse("documentation"), docs(""));
    }

    #[test]
    fn query_without_path_lands_home_but_keeps_section() {
        assert_eq!(Route::parse("?section=sdk"), Route::new(Page::Home, "sdk"));
    }

    #[test]
    fn documentation_alias_matches_docs() {
        for suffix in ["", "?section=quickstart", "?s=commands", "?x=1"] {
            let alias = Route::parse(&format!("/documentation{suffix}"));
            let canonical = Route::parse(&format!("/docs{suffix}"));
            assert_eq!(alias, canonical, "suffix {suffix:?}");
        }
    }

    #[test]
    fn alias_is_exact_match_only() {
        assert_eq!(Route::parse("/documentation/intro"), home());
    }

    #[test]
    fn section_key_wins_over_short_key() {
        assert_eq!(Route::parse("/docs?section=A&s=B").section, "A");
        assert_eq!(Route::parse("/docs?s=B&section=A").section, "A");
    }

    #[test]
    fn empty_section_falls_back_to_short_key() {
        assert_eq!(Route::parse("/docs?section=&s=nodes").section, "nodes");
    }

    #[test]
    fn first_occurrence_of_a_key_wins() {
        assert_eq!(Route::parse("/docs?section=one&section=two").section, "one");
    }

    #[test]
    fn docs_is_a_prefix_match() {
        assert_eq!(Route::parse("/docs/x/y").page, Page::Docs);
        assert_eq!(Route::parse("/docsearch").page, Page::Docs);
        assert_eq!(Route::parse("/pricing"), home());
    }

    #[test]
    fn query_values_are_decoded() {
        assert_eq!(Route::parse("/docs?section=best%2Dpractices").section, "best-practices");
        assert_eq!(Route::parse("/docs?section=a+b").section, "a b");
        assert_eq!(Route::parse("/docs?%73ection=sdk").section, "sdk");
    }

    #[test]
    fn everything_after_the_first_question_mark_is_query() {
        // A split on every `?` would keep only the text between the first two
        // and give "" for the second case.
        assert_eq!(Route::parse("/docs?x=1?&section=sdk").section, "sdk");
        assert_eq!(Route::parse("/docs??section=sdk").section, "sdk");
    }

    #[test]
    fn fragment_takes_priority_over_pathname() {
        let route = Route::from_location("#/docs?section=quickstart", "/");
        assert_eq!(route, docs("quickstart"));

        let route = Route::from_location("#/", "/docs");
        assert_eq!(route, home());
    }

    #[test]
    fn empty_fragment_falls_back_to_pathname() {
        assert_eq!(Route::from_location("", "/docs"), docs(""));
        assert_eq!(Route::from_location("#", "/documentation"), docs(""));
        assert_eq!(Route::from_location("", ""), home());
    }

    #[test]
    fn href_parses_back_to_the_same_route() {
        for route in [home(), docs(""), docs("quickstart"), docs("best practices")] {
            assert_eq!(Route::from_location(&route.href(), "/"), route);
        }
    }

    #[test]
    fn page_names() {
        assert_eq!(Page::Home.to_string(), "home");
        assert_eq!(Page::Docs.as_str(), "docs");
    }
}
