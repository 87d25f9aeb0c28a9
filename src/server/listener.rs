use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::{TcpListener, TcpSocket};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::files::StaticHandler;
use crate::http::connection::Connection;

/// Binds a listener on `addr` with address and port reuse enabled.
///
/// Every worker binds its own socket to the same address; the kernel
/// distributes incoming connections between them. No balancing logic
/// exists above that.
fn bind(addr: &str) -> anyhow::Result<TcpListener> {
    let addr: SocketAddr = addr
        .parse()
        .with_context(|| format!("invalid listen address {addr}"))?;

    let socket = match addr {
        SocketAddr::V4(_) => TcpSocket::new_v4()?,
        SocketAddr::V6(_) => TcpSocket::new_v6()?,
    };
    socket.set_reuseaddr(true)?;
    #[cfg(unix)]
    socket.set_reuseport(true)?;
    socket.bind(addr)?;

    Ok(socket.listen(1024)?)
}

/// Accept loop of a single worker.
///
/// Runs until the shutdown channel flips. Accept failures are logged and
/// the loop keeps serving; a broken connection never takes the worker
/// down with it.
pub async fn run(
    worker_id: usize,
    addr: &str,
    handler: Arc<StaticHandler>,
    mut shutdown: watch::Receiver<bool>,
) -> anyhow::Result<()> {
    let listener = bind(addr)?;
    info!(worker = worker_id, "Listening on {}", addr);

    loop {
        tokio::select! {
            accepted = listener.accept() => {
                match accepted {
                    Ok((socket, peer)) => {
                        debug!(worker = worker_id, %peer, "Accepted connection");
                        socket.set_nodelay(true).ok();

                        let handler = handler.clone();
                        tokio::spawn(async move {
                            let mut conn = Connection::new(socket, handler);
                            if let Err(e) = conn.run().await {
                                tracing::error!("Connection error from {}: {}", peer, e);
                            }
                        });
                    }
                    Err(e) => {
                        warn!(worker = worker_id, error = %e, "Accept failed");
                    }
                }
            }

            _ = shutdown.changed() => {
                info!(worker = worker_id, "Worker shutting down");
                break;
            }
        }
    }

    Ok(())
}
