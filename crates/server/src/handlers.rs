use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;
use std::path::Path;
use trails_database::Check;
use trails_database::Finder;
use trails_database::Loader;
use trails_database::Search;
use trails_database::Store;
use trails_dto::LoadRequest;
use trails_dto::TrailsQuery;

pub async fn load<S: Store + 'static>(
    loader: web::Data<Loader<S>>,
    req: web::Json<LoadRequest>,
) -> impl Responder {
    let Some(path) = req.path().map(Path::new) else {
        log::warn!("load request without file_path");
        return HttpResponse::BadRequest().body("file_path is required");
    };
    match loader.load(path).await {
        Err(e) => {
            HttpResponse::InternalServerError().body(format!("failed to load trails: {}", e))
        }
        Ok(_) => {
            let body = format!("Trails loaded successfully from: {}", path.display());
            HttpResponse::Ok().body(body)
        }
    }
}

pub async fn trails<S: Store + 'static>(
    finder: web::Data<Finder<S>>,
    query: web::Query<TrailsQuery>,
) -> impl Responder {
    match finder.find(&Search::from(&*query)).await {
        Err(e) => {
            HttpResponse::InternalServerError().body(format!("failed to query trails: {}", e))
        }
        Ok(page) => HttpResponse::Ok().json(page),
    }
}

pub async fn health<S: Check + 'static>(store: web::Data<S>) -> impl Responder {
    match store
        .count()
        .await
        .inspect_err(|e| log::error!("health check failed: {}", e))
    {
        Ok(_) => HttpResponse::Ok().body("ok"),
        Err(_) => HttpResponse::ServiceUnavailable().body("database unavailable"),
    }
}
