// src/app.rs
//
// Everything a request handler needs, built once at start-up and shared by
// reference across astra's worker threads.

use std::future::Future;

use tokio::runtime::Runtime;
use tokio_util::sync::CancellationToken;

use crate::auth::{AuthConfig, SimulatedAuth};
use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::db::{init_db, Database};
use crate::errors::ServerError;

/// Shown on the owner dashboard; views are not tracked.
pub const SAMPLE_TOTAL_VIEWS: u32 = 142;

pub struct App {
    pub db: Database,
    pub catalog: Catalog,
    pub auth: SimulatedAuth,
    runtime: Runtime,
    shutdown: CancellationToken,
}

impl App {
    /// Open the store, apply the schema and load the catalog.
    pub fn new(cfg: &AppConfig) -> Result<Self, ServerError> {
        let db = Database::new(cfg.db_path.clone());
        init_db(&db)?;

        let catalog = match &cfg.seed_file {
            Some(path) => Catalog::from_file(path),
            None => Catalog::seeded(),
        }
        .map_err(|e| {
            tracing::error!(error = %e, "failed to load catalog");
            ServerError::InternalError
        })?;
        tracing::info!(listings = catalog.len()?, "catalog loaded");

        let auth = SimulatedAuth::new(AuthConfig {
            delay: cfg.auth_delay,
        });
        Self::with_parts(db, catalog, auth)
    }

    pub fn with_parts(
        db: Database,
        catalog: Catalog,
        auth: SimulatedAuth,
    ) -> Result<Self, ServerError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("dormspace-auth")
            .enable_time()
            .build()
            .map_err(|e| {
                tracing::error!(error = %e, "failed to start auth runtime");
                ServerError::InternalError
            })?;

        Ok(Self {
            db,
            catalog,
            auth,
            runtime,
            shutdown: CancellationToken::new(),
        })
    }

    /// Drive an async operation to completion from a blocking worker thread.
    pub fn block_on<F: Future>(&self, fut: F) -> F::Output {
        self.runtime.block_on(fut)
    }

    /// Token for one auth operation; fires when the server shuts down.
    pub fn auth_token(&self) -> CancellationToken {
        self.shutdown.child_token()
    }

    /// Abort every pending sign-in.
    pub fn shutdown(&self) {
        tracing::info!("cancelling pending auth operations");
        self.shutdown.cancel();
    }
}
