//! TCP transport for the REST adapter

use axum::Router;
use std::future::Future;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;

/// Bind `addr` and serve the API until `shutdown` resolves
///
/// A bind failure is returned to the caller, which is expected to treat it as fatal.
pub async fn serve_on_tcp<F>(addr: SocketAddr, app: Router, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind(addr).await?;
    serve_on_listener(listener, app, shutdown).await
}

/// Serve the API on an already bound listener until `shutdown` resolves
pub async fn serve_on_listener<F>(
    listener: TcpListener,
    app: Router,
    shutdown: F,
) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    info!("REST API server listening on TCP {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("REST API server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::get;
    use std::net::{Ipv4Addr, TcpListener as StdTcpListener};

    #[tokio::test]
    async fn test_bind_failure_is_reported() {
        let taken = StdTcpListener::bind((Ipv4Addr::LOCALHOST, 0)).unwrap();
        let addr = taken.local_addr().unwrap();

        let app = Router::new().route("/", get(|| async { "ok" }));
        let result = serve_on_tcp(addr, app, std::future::ready(())).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_graceful_shutdown() {
        let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await.unwrap();
        let app = Router::new().route("/", get(|| async { "ok" }));

        let (stop_tx, stop_rx) = tokio::sync::oneshot::channel::<()>();
        let server = tokio::spawn(serve_on_listener(listener, app, async {
            let _ = stop_rx.await;
        }));

        stop_tx.send(()).unwrap();
        server.await.unwrap().unwrap();
    }
}
