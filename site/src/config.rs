//! Runtime configuration, loaded from the environment.
//!
//! `dotenvy` fills the environment from a local `.env` in development;
//! every knob has a default so a bare `cargo run` serves something.

use std::env;
use std::path::PathBuf;

use anyhow::Context;

#[derive(Clone, Debug)]
pub struct SiteConfig {
    pub host: String,
    pub port: u16,
    /// Directory holding the built client (`pkg/`) plus static assets.
    pub site_root: PathBuf,
    /// Hostnames the optimized-image proxy may fetch from.
    pub image_domains: Vec<String>,
    /// Strip inter-tag whitespace from server-rendered documents.
    pub minify_html: bool,
}

impl SiteConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = env::var("DNC_HOST").unwrap_or_else(|_| "127.0.0.1".into());
        let port = match env::var("DNC_PORT") {
            Ok(raw) => raw.parse().context("DNC_PORT is not a port number")?,
            Err(_) => 3000,
        };
        let site_root = env::var("DNC_SITE_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("target/site"));
        let image_domains = match env::var("DNC_IMAGE_DOMAINS") {
            Ok(raw) => parse_domains(&raw),
            Err(_) => vec!["avatars.githubusercontent.com".to_owned()],
        };
        let minify_html = env::var("DNC_MINIFY")
            .map(|raw| parse_bool(&raw))
            .unwrap_or(true);

        Ok(Self {
            host,
            port,
            site_root,
            image_domains,
            minify_html,
        })
    }

    pub fn addr(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }

    /// wasm/js bundle directory inside the site root.
    pub fn pkg_dir(&self) -> PathBuf {
        self.site_root.join("pkg")
    }

    /// Static assets directory inside the site root (cargo-leptos copies
    /// the repo's `assets/` here at build time).
    pub fn assets_dir(&self) -> PathBuf {
        self.site_root.join("assets")
    }

    pub fn favicon_dir(&self) -> PathBuf {
        self.assets_dir().join("favicon")
    }

    /// Allowlist check for the optimized-image pipeline. Exact host match,
    /// case-insensitive.
    pub fn allows_image_host(&self, host: &str) -> bool {
        self.image_domains
            .iter()
            .any(|d| d.eq_ignore_ascii_case(host))
    }
}

fn parse_domains(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_owned)
        .collect()
}

fn parse_bool(raw: &str) -> bool {
    matches!(raw.trim(), "1" | "true" | "yes" | "on")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(domains: &[&str]) -> SiteConfig {
        SiteConfig {
            host: "127.0.0.1".into(),
            port: 3000,
            site_root: PathBuf::from("target/site"),
            image_domains: domains.iter().map(|d| d.to_string()).collect(),
            minify_html: true,
        }
    }

    #[test]
    fn domain_list_parsing_trims_and_skips_empties() {
        assert_eq!(
            parse_domains(" a.example ,b.example,,"),
            ["a.example", "b.example"]
        );
        assert!(parse_domains("").is_empty());
    }

    #[test]
    fn boolean_knobs_accept_the_usual_spellings() {
        assert!(parse_bool("1"));
        assert!(parse_bool("true"));
        assert!(parse_bool(" yes "));
        assert!(!parse_bool("0"));
        assert!(!parse_bool("nope"));
    }

    #[test]
    fn every_static_dir_resolves_through_the_site_root() {
        let mut cfg = config_with(&[]);
        cfg.site_root = PathBuf::from("/srv/designandcode");
        assert_eq!(cfg.pkg_dir(), PathBuf::from("/srv/designandcode/pkg"));
        assert_eq!(cfg.assets_dir(), PathBuf::from("/srv/designandcode/assets"));
        assert_eq!(
            cfg.favicon_dir(),
            PathBuf::from("/srv/designandcode/assets/favicon")
        );
    }

    #[test]
    fn allowlist_is_exact_and_case_insensitive() {
        let cfg = config_with(&["avatars.githubusercontent.com"]);
        assert!(cfg.allows_image_host("avatars.githubusercontent.com"));
        assert!(cfg.allows_image_host("AVATARS.githubusercontent.COM"));
        assert!(!cfg.allows_image_host("evil.example"));
        assert!(!cfg.allows_image_host("githubusercontent.com"));
    }
}
