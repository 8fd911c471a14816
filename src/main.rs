use crate::app::App;
use crate::config::AppConfig;
use crate::responses::html_error_response;
use crate::router::handle;
use astra::Server;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod app;
mod auth;
mod catalog;
mod config;
mod db;
mod domain;
mod errors;
mod responses;
mod router;
mod session;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dormspace=info")),
        )
        .init();

    let cfg = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let app = match App::new(&cfg) {
        Ok(app) => Arc::new(app),
        Err(e) => {
            tracing::error!(error = %e, "start-up failed");
            std::process::exit(1);
        }
    };

    tracing::info!(addr = %cfg.addr, workers = cfg.max_workers, "starting server");

    let server = Server::bind(&cfg.addr).max_workers(cfg.max_workers);

    let shared = Arc::clone(&app);
    let result = server.serve(move |req, _info| match handle(req, &shared) {
        Ok(resp) => resp,
        Err(err) => {
            tracing::error!(error = %err, "could not finish response");
            html_error_response(err)
        }
    });

    if let Err(e) = result {
        tracing::error!(error = %e, "server ended with error");
    }

    app.shutdown();
    tracing::info!("server shut down");
}
