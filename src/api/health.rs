use actix_web::http::header::{CACHE_CONTROL, EXPIRES, PRAGMA};
use actix_web::{web, HttpResponse, Responder};

use crate::state::AppState;

pub const NO_CACHE: &str = "no-cache, no-store, must-revalidate";

/// `GET <health path>`
///
/// 200 with uptime, memory and environment when metrics can be collected,
/// otherwise 503 with the failure reason. Responses are never cacheable.
pub async fn health_get(data: web::Data<AppState>) -> impl Responder {
    let report = data.check();
    if report.is_healthy() {
        HttpResponse::Ok()
            .insert_header((CACHE_CONTROL, NO_CACHE))
            .insert_header((PRAGMA, "no-cache"))
            .insert_header((EXPIRES, "0"))
            .json(report.into_status())
    } else {
        HttpResponse::ServiceUnavailable()
            .insert_header((CACHE_CONTROL, NO_CACHE))
            .json(report.into_status())
    }
}

/// `HEAD <health path>`
///
/// 轻量探针: 不采集任何指标, 总是返回 200
pub async fn health_head() -> impl Responder {
    HttpResponse::Ok()
        .insert_header((CACHE_CONTROL, NO_CACHE))
        .finish()
}

/// Mounts both health routes on `path`.
pub fn configure(cfg: &mut web::ServiceConfig, path: &str) {
    cfg.service(
        web::resource(path)
            .route(web::get().to(health_get))
            .route(web::head().to(health_head)),
    );
}
