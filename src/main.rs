mod config;
mod error;
mod input;
mod server;
mod server_utils;

use std::sync::Arc;

use config::CONFIG;
use error::ServerError;
use input::{system::EnigoInjector, InputInjector};
use tracing::{error, info};

fn setup_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("mouser_server=debug,info")
        } else {
            EnvFilter::new("mouser_server=info,warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[actix_web::main]
async fn main() -> Result<(), ServerError> {
    setup_tracing(CONFIG.verbose);

    // One injector for the whole process, handed to every worker.
    let injector: Arc<dyn InputInjector> = match EnigoInjector::new() {
        Ok(injector) => Arc::new(injector),
        Err(e) => {
            error!(error = %e, "cannot start without input injection");
            return Err(e.into());
        }
    };

    server::print_server_info();
    match server::start_server(injector).await {
        Ok(()) => {
            info!("server stopped");
            Ok(())
        }
        Err(e) => {
            error!(error = %e, address = %CONFIG.server_address, "server failed");
            Err(e)
        }
    }
}
