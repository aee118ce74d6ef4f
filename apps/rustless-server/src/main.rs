//! Rustless Server - local API Gateway routing emulator.
//!
//! Loads a flattened function definition list (JSON, as produced by the
//! config-loading collaborator from a serverless deployment descriptor),
//! builds the route table once at startup, and serves HTTP traffic. Each
//! request is resolved to the handler that API Gateway would invoke; the
//! bundled echo handler reports the match result as JSON, turning the
//! server into a routing inspector.
//!
//! # Usage
//!
//! ```text
//! rustless-server functions.json
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `RUSTLESS_LISTEN` | `127.0.0.1:3000` | Bind address |
//! | `LOG_LEVEL` | `info` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

use std::net::SocketAddr;

use anyhow::{Context, Result};
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto::Builder as HttpConnBuilder;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use rustless_gateway_core::RouteTable;
use rustless_gateway_http::{EchoRouteHandler, GatewayHttpService};
use rustless_gateway_model::FunctionDefinition;

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to the `LOG_LEVEL` value.
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    Ok(())
}

/// Load the flattened function definition list from a JSON file.
fn load_functions(path: &str) -> Result<Vec<FunctionDefinition>> {
    let data = std::fs::read(path).with_context(|| format!("cannot read {path}"))?;
    serde_json::from_slice(&data).with_context(|| format!("invalid function definitions in {path}"))
}

/// Read the listen address from the environment.
fn listen_addr() -> String {
    std::env::var("RUSTLESS_LISTEN").unwrap_or_else(|_| "127.0.0.1:3000".to_string())
}

/// Read the log level from the environment.
fn log_level() -> String {
    std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string())
}

/// Run the accept loop, serving connections until a shutdown signal is received.
async fn serve(listener: TcpListener, service: GatewayHttpService<EchoRouteHandler>) -> Result<()> {
    let graceful = hyper_util::server::graceful::GracefulShutdown::new();
    let http = HttpConnBuilder::new(TokioExecutor::new());

    let shutdown = async {
        tokio::signal::ctrl_c().await.ok();
        info!("received shutdown signal, draining connections");
    };

    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            result = listener.accept() => {
                let (stream, peer_addr) = match result {
                    Ok(conn) => conn,
                    Err(e) => {
                        warn!(error = %e, "failed to accept connection");
                        continue;
                    }
                };

                let svc = service.clone();
                let conn = http.serve_connection(TokioIo::new(stream), svc);
                let conn = graceful.watch(conn.into_owned());

                tokio::spawn(async move {
                    if let Err(e) = conn.await {
                        error!(peer_addr = %peer_addr, error = %e, "connection error");
                    }
                });
            }

            () = &mut shutdown => {
                info!("shutting down gracefully");
                break;
            }
        }
    }

    // Wait for in-flight requests to complete.
    graceful.shutdown().await;
    info!("all connections drained, exiting");

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing(&log_level())?;

    let functions_path = std::env::args()
        .nth(1)
        .context("usage: rustless-server <functions.json>")?;

    let functions = load_functions(&functions_path)?;
    let table = RouteTable::build(&functions).context("failed to build route table")?;

    if table.is_empty() {
        warn!("no HTTP routes registered, every request will get a 404");
    }

    let service = GatewayHttpService::new(table, EchoRouteHandler);

    let listen = listen_addr();
    let addr: SocketAddr = listen
        .parse()
        .with_context(|| format!("invalid bind address: {listen}"))?;

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;

    info!(%addr, functions = %functions_path, "starting Rustless server");

    serve(listener, service).await
}
