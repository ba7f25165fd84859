#![doc = include_str!("../README.md")]

pub mod config;
pub mod error;
pub mod handlers;

pub use config::Config;
pub use handlers::AppState;

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{Json, Router, routing::get};
use navigator_core::{CommandGateway, Context, Host};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::handlers::{
    MessageResponse, app_routes, daily_notes_routes, editor_routes, workspace_routes,
};

/// Initialize a tracing subscriber for processes that embed the gateway and
/// do not bring their own. `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "navigator_gateway=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Build the full route tree over a shared state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/app", app_routes(state.clone()))
        .nest("/workspace", workspace_routes(state.clone()))
        .nest("/daily-notes", daily_notes_routes(state.clone()))
        .nest("/editor", editor_routes(state))
        .layer(TraceLayer::new_for_http())
}

/// GET /health
async fn health() -> Json<MessageResponse> {
    Json(MessageResponse::ok())
}

/// A running gateway: the listening socket's lifecycle, from bind to
/// graceful shutdown.
///
/// Mirrors a plugin's load/unload pair: the embedding host calls
/// [`start`](Gateway::start) once at load and [`shutdown`](Gateway::shutdown)
/// at unload.
pub struct Gateway {
    addr: SocketAddr,
    shutdown_tx: oneshot::Sender<()>,
    task: JoinHandle<()>,
}

impl Gateway {
    /// Bind the configured address and start serving requests against
    /// `host`.
    ///
    /// Binds eagerly: a failure here means the gateway is not running, and
    /// the embedding process should treat it as fatal rather than continue
    /// silently.
    pub async fn start(config: &Config, host: Arc<dyn Host>) -> io::Result<Gateway> {
        let context = Arc::new(Context::new(host.clone()));
        let commands = CommandGateway::new(host);
        let state = AppState {
            context,
            commands,
            settle_timeout: config.settle_timeout,
        };
        let app = build_router(state);

        let listener = TcpListener::bind(config.server_addr()).await?;
        let addr = listener.local_addr()?;

        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let task = tokio::spawn(async move {
            let serve = axum::serve(listener, app).with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            });
            if let Err(e) = serve.await {
                error!("gateway server error: {}", e);
            }
        });

        info!("gateway listening on http://{}", addr);

        Ok(Gateway {
            addr,
            shutdown_tx,
            task,
        })
    }

    /// The address actually bound (useful when the configured port is 0).
    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Stop accepting requests and wait for the server task to finish.
    pub async fn shutdown(self) {
        info!("shutting down gateway on {}", self.addr);
        let _ = self.shutdown_tx.send(());
        let _ = self.task.await;
    }
}
