//! Trail API Server
//!
//! Exposes bulk loading and paginated search over HTTP with actix-web.
//!
//! ## Routes
//!
//! - `POST /load` — Replace every trail with the rows of a CSV file
//! - `GET /trails` — One page of trails matching amenity filters
//! - `GET /health` — Whether the store answers
mod handlers;

pub use handlers::*;

use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::error::InternalError;
use actix_web::middleware::Logger;
use actix_web::web;
use std::sync::Arc;
use trails_database::Finder;
use trails_database::Loader;
use trails_database::Store;
use trails_records::Layout;

/// Registers shared state, extractor configuration and routes.
///
/// The returned closure is cloned into every worker's `App`.
pub fn service<S>(
    store: Arc<S>,
    layout: Layout,
) -> impl Fn(&mut web::ServiceConfig) + Clone + Send + 'static
where
    S: Store + 'static,
{
    let loader = web::Data::new(Loader::new(store.clone(), layout));
    let finder = web::Data::new(Finder::new(store.clone()));
    let store = web::Data::from(store);
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(loader.clone())
            .app_data(finder.clone())
            .app_data(store.clone())
            .app_data(json())
            .app_data(query())
            .service(web::resource("/health").route(web::get().to(health::<S>)))
            .service(web::resource("/load").route(web::post().to(load::<S>)))
            .service(web::resource("/trails").route(web::get().to(trails::<S>)));
    }
}

/// Serves the API on `bind` until the process receives SIGINT or SIGTERM.
#[rustfmt::skip]
pub async fn run<S>(store: Arc<S>, layout: Layout, bind: &str) -> Result<(), std::io::Error>
where
    S: Store + 'static,
{
    let service = service(store, layout);
    log::info!("starting trail server on {}", bind);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::new("%r %s %Ts"))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .configure(service.clone())
    })
    .bind(bind)?
    .run()
    .await
}

/// Malformed bodies are a client error; the body need not be labelled JSON.
fn json() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(|err, _| {
            log::warn!("invalid request body: {}", err);
            let body = format!("invalid request body: {}", err);
            let response = HttpResponse::BadRequest().body(body);
            InternalError::from_response(err, response).into()
        })
}

fn query() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _| {
        log::warn!("invalid query string: {}", err);
        let response = HttpResponse::BadRequest().body(format!("invalid query string: {}", err));
        InternalError::from_response(err, response).into()
    })
}
