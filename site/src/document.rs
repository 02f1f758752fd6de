//! Document shell: wraps every server render in the full HTML document.
//!
//! One fresh [`StyleCache`] per request, handed to the component tree
//! through context; after rendering, only the style rules actually used by
//! the produced markup are inlined into the head, so the first paint is
//! styled without shipping unused CSS. The cache is request-scoped by
//! construction; sharing it across requests would leak styles between
//! unrelated responses.

use leptos::prelude::RenderHtml;
use leptos::prelude::provide_context;
use leptos::reactive::owner::Owner;
use leptos::view;
use leptos_router::location::RequestUrl;

use ui::App;
use ui::style::{StyleCache, StyleChunk};
use ui::theme;

use crate::config::SiteConfig;

const SITE_URL: &str = "https://www.designandcode.us/";
const DESCRIPTION: &str = "Design and Code a global community where anyone can \
learn and network with fellow developers and designers.";
const OG_IMAGE: &str = "/assets/branding-transparent-logo.svg";

/// Renders the page at `path` into a complete HTML document.
pub fn render_page(path: &str, cfg: &SiteConfig) -> String {
    let cache = StyleCache::new();
    let body = {
        let cache = cache.clone();
        let url = path.to_owned();
        let owner = Owner::new();
        owner.with(move || {
            provide_context(cache);
            provide_context(RequestUrl::new(&url));
            view! { <App/> }.to_html()
        })
    };

    let styles = cache.extract_critical(&body);
    let html = shell(&body, &styles);
    if cfg.minify_html { minify(&html) } else { html }
}

fn shell(body: &str, styles: &[StyleChunk]) -> String {
    let mut out = String::with_capacity(body.len() + 4096);
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str(&head_meta());
    out.push_str(&style_tags(styles));
    out.push_str("</head>\n<body>");
    out.push_str(body);
    out.push_str(
        "\n<script type=\"module\">\
         import init, { hydrate } from \"/pkg/ui.js\";\
         await init();\
         hydrate();\
         </script>\n</body>\n</html>\n",
    );
    out
}

/// Fixed head contract: primary/OG/Twitter/SEO meta, favicons, manifest,
/// fonts. Static except for the injected style tags.
fn head_meta() -> String {
    format!(
        r#"<meta charset="utf-8" />
<title>Design and Code</title>
<meta name="theme-color" content="{primary}" />
<!-- Primary Meta Tags -->
<meta name="viewport" content="width=device-width, initial-scale=1.0" />
<meta name="description" content="{description}" />
<!-- Facebook -->
<meta property="og:type" content="website" />
<meta property="og:url" content="{url}" />
<meta property="og:title" content="Design and Code" />
<meta property="og:description" content="{description}" />
<meta property="og:image" content="{image}" />
<!-- Twitter -->
<meta property="twitter:card" content="summary_large_image" />
<meta property="twitter:url" content="{url}" />
<meta property="twitter:title" content="Design and Code" />
<meta property="twitter:description" content="{description}" />
<meta property="twitter:image" content="{image}" />
<!-- SEO Tags -->
<meta name="language" content="EN" />
<meta property="og:locale" content="en" />
<meta property="og:site_name" content="Design and Code" />
<meta name="url" content="{url}" />
<meta name="coverage" content="Worldwide" />
<meta name="distribution" content="Global" />
<meta name="apple-mobile-web-app-capable" content="yes" />
<meta content="yes" name="apple-touch-fullscreen" />
<meta name="copyright" content="Design and Code" />
<!-- Favicons -->
<link rel="shortcut icon" href="/favicon/favicon.ico" />
<link rel="apple-touch-icon" sizes="180x180" href="/favicon/apple-touch-icon.png" />
<link rel="icon" type="image/png" sizes="32x32" href="/favicon/favicon-32x32.png" />
<link rel="icon" type="image/png" sizes="16x16" href="/favicon/favicon-16x16.png" />
<link rel="manifest" href="/favicon/site.webmanifest" />
<link rel="preconnect" href="https://fonts.googleapis.com" />
<link rel="preconnect" href="https://fonts.gstatic.com" crossorigin />
<link href="https://fonts.googleapis.com/css2?family=Poppins:wght@400;500;700;800&display=swap" rel="stylesheet" />
<link rel="stylesheet" href="/assets/site.css" />
"#,
        primary = theme::PRIMARY,
        description = DESCRIPTION,
        url = SITE_URL,
        image = OG_IMAGE,
    )
}

/// One inline tag per extracted chunk, tagged with the cache key and rule
/// ids so the client runtime can recognise and dedupe them after hydration.
fn style_tags(styles: &[StyleChunk]) -> String {
    styles
        .iter()
        .map(|chunk| {
            format!(
                "<style data-styled=\"{} {}\">{}</style>\n",
                chunk.key,
                chunk.ids.join(" "),
                chunk.css
            )
        })
        .collect()
}

/// Drops whitespace runs that sit strictly between tags. Text with any
/// non-whitespace content is left untouched.
fn minify(html: &str) -> String {
    let bytes = html.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let c = bytes[i];
        out.push(c);
        i += 1;
        if c == b'>' {
            let mut j = i;
            while j < bytes.len() && bytes[j].is_ascii_whitespace() {
                j += 1;
            }
            if j < bytes.len() && bytes[j] == b'<' {
                i = j;
            }
        }
    }
    // only ASCII whitespace was removed, the rest is copied verbatim
    String::from_utf8(out).expect("minify preserved utf-8")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config() -> SiteConfig {
        SiteConfig {
            host: "127.0.0.1".into(),
            port: 3000,
            site_root: PathBuf::from("target/site"),
            image_domains: vec!["avatars.githubusercontent.com".into()],
            minify_html: false,
        }
    }

    #[test]
    fn shell_emits_style_tags_only_for_rules_used_in_markup() {
        let cache = StyleCache::new();
        let used = cache.rule("hero", "&{display:flex;}");
        cache.rule("never", "&{display:none;}");

        let body = format!("<section class=\"{used}\"></section>");
        let html = shell(&body, &cache.extract_critical(&body));

        assert!(html.contains("<style data-styled=\"dnc hero\">.dnc-hero{display:flex;}</style>"));
        assert!(!html.contains("never"));
    }

    #[test]
    fn rendered_document_carries_the_head_contract() {
        let html = render_page("/", &config());
        for needle in [
            "<!DOCTYPE html>",
            "<html lang=\"en\">",
            "property=\"og:title\"",
            "property=\"twitter:card\"",
            "name=\"description\"",
            "rel=\"manifest\"",
            "fonts.googleapis.com/css2?family=Poppins",
            "/pkg/ui.js",
        ] {
            assert!(html.contains(needle), "missing {needle}");
        }
    }

    #[test]
    fn rendered_document_inlines_navbar_styles() {
        let html = render_page("/", &config());
        assert!(html.contains("data-styled=\"dnc navbar\""));
        assert!(html.contains("data-styled=\"dnc drawer\""));
    }

    #[test]
    fn styles_are_scoped_per_request() {
        // two renders never share a cache, so both carry their own styles
        let a = render_page("/", &config());
        let b = render_page("/about", &config());
        assert!(a.contains("data-styled=\"dnc hero\""));
        assert!(!a.contains("data-styled=\"dnc sponsors\""));
        assert!(b.contains("data-styled=\"dnc sponsors\""));
    }

    #[test]
    fn unknown_routes_render_the_fallback_inside_the_shell() {
        let html = render_page("/nowhere", &config());
        assert!(html.contains("404"));
        assert!(html.contains("<!DOCTYPE html>"));
    }

    #[test]
    fn minify_collapses_inter_tag_whitespace_only() {
        assert_eq!(minify("<p>\n  <b>hi</b>\n</p>"), "<p><b>hi</b></p>");
        assert_eq!(minify("<p>a b</p>"), "<p>a b</p>");
        assert_eq!(minify("<p>keep <b>space</b></p>"), "<p>keep <b>space</b></p>");
    }

    #[test]
    fn minify_knob_is_honoured() {
        let mut cfg = config();
        cfg.minify_html = true;
        let html = render_page("/", &cfg);
        assert!(!html.contains(">\n<"));
    }
}
