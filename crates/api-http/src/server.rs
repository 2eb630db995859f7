//! HTTP Server
//!
//! Serves the queue API over HTTP/1.1 on localhost TCP.

use crate::handler::HttpHandler;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use waitline_core::application::QueueRegistry;
use waitline_core::error::{AppError, Result};

const DEFAULT_HTTP_HOST: &str = "127.0.0.1";
const DEFAULT_HTTP_PORT: u16 = 8080;

/// HTTP server configuration
///
/// Binds localhost only by default; port 0 requests an ephemeral port
/// (the bound address is reported on the handle).
pub struct HttpServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HTTP_HOST.to_string(),
            port: DEFAULT_HTTP_PORT,
        }
    }
}

/// Handle to a running server
pub struct HttpServerHandle {
    local_addr: SocketAddr,
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl HttpServerHandle {
    /// Address the server actually bound
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Stop accepting connections and wait for the accept loop to exit
    pub async fn stop(self) {
        let _ = self.shutdown.send(true);
        let _ = self.task.await;
    }
}

/// HTTP server over the queue registry
pub struct HttpServer {
    config: HttpServerConfig,
    handler: Arc<HttpHandler>,
}

impl HttpServer {
    pub fn new(config: HttpServerConfig, registry: Arc<QueueRegistry>) -> Self {
        Self {
            config,
            handler: Arc::new(HttpHandler::new(registry)),
        }
    }

    /// Bind the listener and start serving. Returns once the socket is
    /// ready to accept connections.
    pub async fn start(self) -> Result<HttpServerHandle> {
        let addr = format!("{}:{}", self.config.host, self.config.port);
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| AppError::Config(format!("Failed to bind {addr}: {e}")))?;
        let local_addr = listener.local_addr().map_err(AppError::Io)?;

        info!(addr = %local_addr, "HTTP server listening");

        let (shutdown, mut shutdown_rx) = watch::channel(false);
        let handler = self.handler;

        let task = tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = shutdown_rx.changed() => {
                        info!("HTTP server shutting down");
                        break;
                    }
                    accepted = listener.accept() => {
                        let (stream, peer) = match accepted {
                            Ok(pair) => pair,
                            Err(err) => {
                                warn!(error = %err, "accept failed");
                                continue;
                            }
                        };
                        debug!(peer = %peer, "connection accepted");

                        let handler = handler.clone();
                        tokio::spawn(async move {
                            let io = TokioIo::new(stream);
                            let service = service_fn(move |req| {
                                let handler = handler.clone();
                                async move { Ok::<_, Infallible>(handler.dispatch(req).await) }
                            });

                            if let Err(err) =
                                http1::Builder::new().serve_connection(io, service).await
                            {
                                debug!(error = %err, "connection closed with error");
                            }
                        });
                    }
                }
            }
        });

        Ok(HttpServerHandle {
            local_addr,
            shutdown,
            task,
        })
    }
}
