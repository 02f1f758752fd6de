mod config;
mod document;
mod image;

use actix_files::Files;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, middleware::Logger, web};

use crate::config::SiteConfig;

async fn page(req: HttpRequest, cfg: web::Data<SiteConfig>) -> HttpResponse {
    let html = document::render_page(req.path(), &cfg);
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let cfg = SiteConfig::from_env()?;
    log::info!("listening on http://{}:{}", cfg.host, cfg.port);

    let bind = cfg.addr();
    HttpServer::new(move || {
        let cfg = cfg.clone();
        App::new()
            .wrap(Logger::default())
            // ① wasm/js bundle built by cargo-leptos
            .service(Files::new("/pkg", cfg.pkg_dir()))
            // ② top-level static assets (branding, base stylesheet, favicons)
            .service(Files::new("/assets", cfg.assets_dir()))
            .service(Files::new("/favicon", cfg.favicon_dir()))
            // ③ optimized-image proxy, gated by the domain allowlist
            .service(image::optimized)
            // ④ everything else renders through the document shell
            .default_service(web::get().to(page))
            .app_data(web::Data::new(cfg))
    })
    .bind(bind)?
    .run()
    .await?;
    Ok(())
}
