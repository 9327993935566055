//! Eyegic JSON API Server

use std::process::ExitCode;

use salvo::{
    affix_state::inject,
    oapi::{OpenApi, swagger_ui::SwaggerUi},
    prelude::*,
    trailing_slash::remove_slash,
};
use tracing::{error, info};

use eyegic_app::context::AppContext;

use crate::{config::ServerConfig, observability::Observability, state::State};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod config;
mod enquiries;
mod errors;
mod extensions;
mod healthcheck;
mod observability;
mod router;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;

/// Eyegic JSON API Server entry point
#[tokio::main]
pub async fn main() -> ExitCode {
    let config = match ServerConfig::load() {
        Ok(config) => config,
        Err(error) => {
            _ = error.print();

            return if error.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let observability = match Observability::init(&config) {
        Ok(observability) => observability,
        Err(error) => {
            #[expect(
                clippy::print_stderr,
                reason = "logging failed to initialise, must use eprintln"
            )]
            {
                eprintln!("Observability error: {error}");
            }

            return ExitCode::FAILURE;
        }
    };

    let app = match AppContext::connect(&config.database).await {
        Ok(app) => app,
        Err(init_error) => {
            error!("failed to initialize app context: {init_error}");
            observability.shutdown();

            return ExitCode::FAILURE;
        }
    };

    let addr = config.socket_addr();

    let acceptor = match TcpListener::new(addr.clone()).try_bind().await {
        Ok(acceptor) => acceptor,
        Err(bind_error) => {
            error!("failed to bind {addr}: {bind_error}");
            app.close().await;
            observability.shutdown();

            return ExitCode::FAILURE;
        }
    };

    info!("Listening on {addr}");

    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(observability::request_logging)
        .hoop(remove_slash())
        .hoop(inject(State::from_app_context(app.clone())))
        .push(router::app_router());

    let doc = OpenApi::new("Eyegic Enquiries API", env!("CARGO_PKG_VERSION")).merge_router(&router);

    let router = router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"));

    let server = Server::new(acceptor);

    let handle = server.handle();

    // Listen for shutdown signal
    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    // Start serving requests
    server
        .serve(router::service(router))
        .await;

    app.close().await;

    info!("server stopped");

    observability.shutdown();

    ExitCode::SUCCESS
}
