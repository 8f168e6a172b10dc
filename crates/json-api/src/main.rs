//! Comp Harbor JSON API Server

use std::process;

use salvo::{
    affix_state::inject,
    cors::Cors,
    oapi::{OpenApi, swagger_ui::SwaggerUi},
    prelude::*,
    trailing_slash::remove_slash,
};
use tracing::{error, info};

use comp_harbor_app::context::AppContext;

use crate::{config::ServerConfig, state::State};

mod brands;
mod carts;
mod config;
mod documents;
mod errors;
mod extensions;
mod liveness;
mod observability;
mod products;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;

/// Comp Harbor JSON API Server entry point
#[tokio::main]
pub async fn main() {
    // Load configuration from .env and CLI arguments
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    if let Err(source) = observability::init_logging(&config) {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialize, must use eprintln"
        )]
        {
            eprintln!("Logging error: {source}");
        }

        process::exit(1);
    }

    let options = match config.database.connect_options() {
        Ok(options) => options,
        Err(source) => {
            error!("invalid database configuration: {source}");

            process::exit(1);
        }
    };

    let catalog = config.catalog.client_config(config.server.port);

    info!(catalog = %catalog.base_url, "enriching carts from catalog");

    let (app, db) = match AppContext::connect(options, catalog).await {
        Ok(connected) => connected,
        Err(init_error) => {
            error!("failed to initialize app context: {init_error}");

            process::exit(1);
        }
    };

    let addr = config.socket_addr();

    info!("Starting server on {addr}");

    let listener = TcpListener::new(addr).bind().await;

    let router = app_router();

    let doc = OpenApi::new("Comp Harbor API", env!("CARGO_PKG_VERSION")).merge_router(&router);

    let router = Router::new()
        .hoop(observability::request_logging)
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(inject(State::from_app_context(app)))
        .push(router)
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"));

    let service = Service::new(router).hoop(Cors::permissive().into_handler());

    let server = Server::new(listener);

    let handle = server.handle();

    // Listen for shutdown signal
    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    server.serve(service).await;

    db.close().await;

    info!("server stopped");
}

fn app_router() -> Router {
    Router::new()
        .get(liveness::handler)
        .push(Router::with_path("brands").get(brands::index::handler))
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .post(products::create::handler)
                .push(Router::with_path("{brand}").get(products::by_brand::handler)),
        )
        .push(
            Router::with_path("product/{id}")
                .get(products::get::handler)
                .put(products::update::handler),
        )
        .push(
            Router::with_path("carts")
                .get(carts::index::handler)
                .post(carts::create::handler)
                .push(Router::with_path("{user_id}").get(carts::by_user::handler))
                .push(Router::with_path("{id}").delete(carts::delete::handler)),
        )
}
