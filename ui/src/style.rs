//! Request-scoped style capture.
//!
//! Components register their CSS through [`use_style`]; on the server every
//! rule lands in the [`StyleCache`] the document shell created for the
//! current request, and only the rules actually referenced by the produced
//! markup are inlined into the response head. The cache is passed through
//! Leptos context on purpose: one shared process-wide cache would leak
//! styles between unrelated responses.

use std::sync::{Arc, RwLock};

use leptos::prelude::use_context;

/// Cache key emitted in the `data-styled` attribute, so the client runtime
/// can recognise server-produced tags after hydration.
pub const CACHE_KEY: &str = "dnc";

/// One extracted rule, ready to be serialized as an inline style tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleChunk {
    pub key: &'static str,
    pub ids: Vec<String>,
    pub css: String,
}

#[derive(Clone)]
struct Rule {
    id: String,
    css: String,
}

/// Registry of style rules for a single server-rendered request.
///
/// Create one per request, provide it via context, render, then call
/// [`StyleCache::extract_critical`] on the markup. Never reuse across
/// requests.
#[derive(Clone, Default)]
pub struct StyleCache {
    rules: Arc<RwLock<Vec<Rule>>>,
}

impl StyleCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a rule under `id` and returns the class name to put on the
    /// element. Every `&` in `body` expands to the class selector, so nested
    /// selectors and `@media` blocks work. Registering an id twice keeps the
    /// first definition.
    pub fn rule(&self, id: &str, body: &str) -> String {
        let class = class_name(id);
        let mut rules = self.rules.write().expect("style cache poisoned");
        if !rules.iter().any(|r| r.id == id) {
            rules.push(Rule {
                id: id.to_owned(),
                css: expand(body, &class),
            });
        }
        class
    }

    /// Rules whose class name occurs in `html` as a whole class token, in
    /// registration order. Unused rules are dropped: this is the
    /// critical-only half of the contract.
    pub fn extract_critical(&self, html: &str) -> Vec<StyleChunk> {
        self.rules
            .read()
            .expect("style cache poisoned")
            .iter()
            .filter(|r| markup_uses(html, &class_name(&r.id)))
            .map(|r| StyleChunk {
                key: CACHE_KEY,
                ids: vec![r.id.clone()],
                css: r.css.clone(),
            })
            .collect()
    }
}

/// Class name generated for a rule id.
pub fn class_name(id: &str) -> String {
    format!("{CACHE_KEY}-{id}")
}

fn expand(body: &str, class: &str) -> String {
    body.replace('&', &format!(".{class}"))
}

/// Whole-token occurrence check, guarded on both edges: the rule `nav`
/// does not match markup that only uses `dnc-navbar`, and `dnc-nav` does
/// not match a token like `xdnc-nav`.
fn markup_uses(html: &str, class: &str) -> bool {
    let ident = |c: char| c.is_ascii_alphanumeric() || c == '-' || c == '_';
    let mut from = 0;
    while let Some(at) = html[from..].find(class) {
        let start = from + at;
        let end = start + class.len();
        let leading = html[..start].chars().next_back().is_none_or(|c| !ident(c));
        let trailing = html[end..].chars().next().is_none_or(|c| !ident(c));
        if leading && trailing {
            return true;
        }
        from = start + 1;
    }
    false
}

/// Component-side hook. Server renders go through the request's cache;
/// hydrated clients fall back to DOM injection with dedup against the tags
/// the server already emitted.
pub fn use_style(id: &str, body: &str) -> String {
    match use_context::<StyleCache>() {
        Some(cache) => cache.rule(id, body),
        None => {
            #[cfg(feature = "hydrate")]
            client::ensure_rule(id, body);
            class_name(id)
        }
    }
}

#[cfg(feature = "hydrate")]
mod client {
    use super::{CACHE_KEY, class_name, expand};

    /// Inserts a style tag for `id` unless one already exists, either from
    /// the server payload or from an earlier client render.
    pub fn ensure_rule(id: &str, body: &str) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let selector = format!("style[data-styled~=\"{id}\"]");
        if matches!(document.query_selector(&selector), Ok(Some(_))) {
            return;
        }
        let Some(head) = document.head() else { return };
        if let Ok(el) = document.create_element("style") {
            let _ = el.set_attribute("data-styled", &format!("{CACHE_KEY} {id}"));
            el.set_text_content(Some(&expand(body, &class_name(id))));
            let _ = head.append_child(&el);
        }
    }
}
