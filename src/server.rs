use crate::{
    config::CONFIG,
    error::ServerError,
    input::InputInjector,
    server_utils::{
        control::{handle_keyboard_command, handle_mouse_command},
        network::local_ip,
        status::{health_check, server_status, FEATURES},
    },
};
use actix_web::{dev::Server, error::JsonPayloadError, web, App, HttpRequest, HttpServer};
use std::sync::Arc;
use tracing::info;

fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ServerError::InvalidParameter(format!("No JSON data provided: {err}")).into()
}

/// Route table, shared by the real server and the route tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error))
        .route("/ping", web::get().to(health_check))
        .route("/status", web::get().to(server_status))
        .route("/mouse", web::post().to(handle_mouse_command))
        .route("/keyboard", web::post().to(handle_keyboard_command));
}

pub fn print_server_info() {
    let local_ip = local_ip(&CONFIG.probe_address);
    let port = CONFIG.port();
    info!("mouse & keyboard control server starting");
    info!(address = %CONFIG.server_address, server_ip = %local_ip, "binding");
    info!("mobile app connection URL: http://{local_ip}:{port}");
    info!(features = ?FEATURES, "mouse: move, click, scroll, drag; keyboard: type, key press, combinations");
    info!("endpoints: POST /mouse, POST /keyboard, GET /status, GET /ping");
    info!("put the phone on the same network and enter {local_ip} in the app, then tap Connect");
    info!("press Ctrl+C to stop the server");
}

/// Binds `addr` without starting to serve. Bad or busy addresses fail here.
pub fn bind_server(addr: &str, injector: Arc<dyn InputInjector>) -> Result<Server, ServerError> {
    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::from(injector.clone()))
            .configure(configure)
    })
    .bind(addr)?
    .run();
    Ok(server)
}

pub async fn start_server(injector: Arc<dyn InputInjector>) -> Result<(), ServerError> {
    bind_server(&CONFIG.server_address, injector)?.await?;
    Ok(())
}
