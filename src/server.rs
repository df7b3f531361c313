use std::future::Future;
use std::io;
use std::path::Path;

use axum::extract::Request;
use axum::http::header::CONTENT_LENGTH;
use axum::http::{HeaderName, HeaderValue};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::Router;
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::ServeConfig;

#[derive(Debug, Error)]
pub enum ServeError {
    #[error("port {0} is already in use")]
    PortInUse(u16),
    #[error("{0}")]
    Io(#[from] io::Error),
}

/// Router that serves static files from `root`.
///
/// Every response carries permissive CORS headers and disables caching,
/// error responses included. File lookup, MIME types, index documents and
/// traversal protection are all `ServeDir` defaults.
pub fn app(root: impl AsRef<Path>) -> Router {
    let serve_dir = ServeDir::new(root).append_index_html_on_directories(true);

    Router::new()
        .fallback_service(serve_dir)
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("access-control-allow-origin"),
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("access-control-allow-methods"),
            HeaderValue::from_static("GET, POST, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("access-control-allow-headers"),
            HeaderValue::from_static("Content-Type"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("cache-control"),
            HeaderValue::from_static("no-store, no-cache, must-revalidate"),
        ))
        .layer(middleware::from_fn(access_log))
}

// One stdout line per request: [07/Aug/2026 10:15:02] "GET /scene.js HTTP/1.1" 200 4182
async fn access_log(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let version = request.version();

    let response = next.run(request).await;

    let bytes = response
        .headers()
        .get(CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_owned();
    println!(
        "[{}] \"{} {} {:?}\" {} {}",
        chrono::Local::now().format("%d/%b/%Y %H:%M:%S"),
        method,
        path,
        version,
        response.status().as_u16(),
        bytes
    );

    response
}

/// Binds the listening socket, telling a busy port apart from other
/// bind failures.
pub async fn bind(config: &ServeConfig) -> Result<TcpListener, ServeError> {
    TcpListener::bind(config.addr()).await.map_err(|err| {
        if err.kind() == io::ErrorKind::AddrInUse {
            ServeError::PortInUse(config.port)
        } else {
            ServeError::Io(err)
        }
    })
}

/// Serves requests until Ctrl+C.
pub async fn run(listener: TcpListener, router: Router) -> io::Result<()> {
    run_until(listener, router, shutdown_signal()).await
}

/// Serves requests until `shutdown` resolves.
pub async fn run_until<F>(listener: TcpListener, router: Router, shutdown: F) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        // Without a signal handler the server can only be killed, not
        // stopped; keep serving rather than shutting down at once.
        log::warn!("Ctrl+C handler unavailable: {err}");
        std::future::pending::<()>().await;
    }
}
