//! Optimized-image proxy.
//!
//! `GET /_image?url=…` fetches a remote image and serves it with long-lived
//! cache headers, but only when the source host is on the configured
//! allowlist. Responses are kept in a TTL cache so repeated page loads do
//! not refetch sponsor logos.

use std::time::Duration;

use actix_web::{HttpResponse, get, web};
use moka::future::Cache;
use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::config::SiteConfig;

#[derive(Deserialize)]
struct ImageQuery {
    url: String,
}

#[derive(Clone)]
struct CachedImage {
    content_type: String,
    bytes: web::Bytes,
}

static HTTP: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

/// 1-hour cache keyed by source url
static IMAGE_CACHE: Lazy<Cache<String, CachedImage>> = Lazy::new(|| {
    Cache::builder()
        .time_to_live(Duration::from_secs(3600))
        .max_capacity(128) // safety cap
        .build()
});

#[get("/_image")]
pub async fn optimized(
    query: web::Query<ImageQuery>,
    cfg: web::Data<SiteConfig>,
) -> actix_web::Result<HttpResponse> {
    let url = reqwest::Url::parse(&query.url).map_err(actix_web::error::ErrorBadRequest)?;
    let host = url
        .host_str()
        .ok_or_else(|| actix_web::error::ErrorBadRequest("image url has no host"))?;
    if !cfg.allows_image_host(host) {
        log::warn!("refused image fetch from {host}");
        return Err(actix_web::error::ErrorForbidden("image host not allowed"));
    }

    let key = url.to_string();
    if let Some(hit) = IMAGE_CACHE.get(&key).await {
        return Ok(respond(hit));
    }

    let upstream = HTTP
        .get(url)
        .send()
        .await
        .map_err(actix_web::error::ErrorBadGateway)?;
    let status = upstream.status();
    if !upstream_ok(status) {
        // never cache a failure; the next request retries the fetch
        log::warn!("upstream returned {status} for {key}");
        return Err(actix_web::error::ErrorBadGateway(format!(
            "upstream returned {status}"
        )));
    }
    let content_type = upstream
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("application/octet-stream")
        .to_owned();
    let bytes = upstream
        .bytes()
        .await
        .map_err(actix_web::error::ErrorBadGateway)?;

    let image = CachedImage {
        content_type,
        bytes: web::Bytes::from(bytes),
    };
    IMAGE_CACHE.insert(key, image.clone()).await;
    Ok(respond(image))
}

/// Only successful upstream responses may be served (and cached) as images.
fn upstream_ok(status: reqwest::StatusCode) -> bool {
    status.is_success()
}

fn respond(image: CachedImage) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(image.content_type)
        .append_header(("cache-control", "public, max-age=3600"))
        .body(image.bytes)
}
