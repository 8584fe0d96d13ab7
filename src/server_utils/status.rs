use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use serde_json::json;

use super::{control::run_blocking, network::local_ip};
use crate::config::CONFIG;
use crate::error::ServerError;
use crate::input::InputInjector;

pub const FEATURES: &[&str] = &["mouse", "keyboard"];

#[derive(Debug, Serialize)]
struct MousePosition {
    x: i32,
    y: i32,
}

#[derive(Debug, Serialize)]
struct StatusResponse {
    status: &'static str,
    mouse_position: MousePosition,
    server_ip: String,
    features: &'static [&'static str],
}

// GET /ping
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "message": "Server is running",
    }))
}

// GET /status
pub async fn server_status(
    injector: web::Data<dyn InputInjector>,
) -> Result<HttpResponse, ServerError> {
    let ((x, y), server_ip) = run_blocking(injector, |injector| {
        let position = injector.cursor_position()?;
        Ok((position, local_ip(&CONFIG.probe_address)))
    })
    .await?;
    Ok(HttpResponse::Ok().json(StatusResponse {
        status: "running",
        mouse_position: MousePosition { x, y },
        server_ip: server_ip.to_string(),
        features: FEATURES,
    }))
}
