use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::info;

use crate::error::ServerError;
use crate::input::{
    keyboard::KeyboardCommand, mouse::MouseCommand, CommandEnvelope, InjectResult, InputInjector,
};

/// Runs injection work on actix's blocking pool so OS calls never stall a worker.
pub async fn run_blocking<T, F>(
    injector: web::Data<dyn InputInjector>,
    job: F,
) -> Result<T, ServerError>
where
    T: Send + 'static,
    F: FnOnce(&dyn InputInjector) -> InjectResult<T> + Send + 'static,
{
    let outcome = web::block(move || job(injector.get_ref()))
        .await
        .map_err(|e| ServerError::Other(e.to_string()))?;
    Ok(outcome?)
}

fn executed(device: &str, action: &str) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "success",
        "message": format!("{device} {action} executed"),
    }))
}

// POST /mouse
pub async fn handle_mouse_command(
    injector: web::Data<dyn InputInjector>,
    payload: web::Json<CommandEnvelope>,
) -> Result<HttpResponse, ServerError> {
    let envelope = payload.into_inner();
    let action = envelope.action()?.to_owned();
    info!(action = %action, data = ?envelope.data, "received mouse command");

    let command = MouseCommand::parse(&action, &envelope.params())?;
    run_blocking(injector, move |injector| command.execute(injector)).await?;

    Ok(executed("Mouse", &action))
}

// POST /keyboard
pub async fn handle_keyboard_command(
    injector: web::Data<dyn InputInjector>,
    payload: web::Json<CommandEnvelope>,
) -> Result<HttpResponse, ServerError> {
    let envelope = payload.into_inner();
    let action = envelope.action()?.to_owned();
    info!(action = %action, data = ?envelope.data, "received keyboard command");

    let command = KeyboardCommand::parse(&action, &envelope.params())?;
    run_blocking(injector, move |injector| command.execute(injector)).await?;

    Ok(executed("Keyboard", &action))
}
