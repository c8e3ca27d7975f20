//! # Quill API Server
//!
//! Actix-web HTTP server exposing CRUD endpoints for blog posts.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod state;
pub mod telemetry;

use std::net::TcpListener;

use actix_web::dev::{Server, ServerHandle};
use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

use crate::config::AppConfig;
use crate::state::AppState;

/// A built HTTP server, bound to its listener but not yet running.
pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    /// Connect to storage, bind the listener, and prepare the server. The
    /// listener accepts connections as soon as the application is awaited.
    pub async fn build(config: &AppConfig) -> anyhow::Result<Self> {
        let state = AppState::new(&config.database).await?;

        let listener = TcpListener::bind((config.host.as_str(), config.port))?;
        let port = listener.local_addr()?.port();

        let server = HttpServer::new(move || {
            App::new()
                .wrap(TracingLogger::default())
                .app_data(web::Data::new(state.clone()))
                .configure(handlers::configure_routes)
        })
        .listen(listener)?
        .run();

        Ok(Self { port, server })
    }

    /// The port the listener is bound to (resolves `PORT=0` to the
    /// OS-assigned port).
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Handle for stopping the running server from another task.
    pub fn handle(&self) -> ServerHandle {
        self.server.handle()
    }

    /// Run the server until it is stopped or the process exits.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}
