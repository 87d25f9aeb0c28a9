use std::sync::Arc;
use std::thread::JoinHandle;

use anyhow::Context;
use tokio::sync::watch;
use tracing::error;

use crate::config::Config;
use crate::files::{PathResolver, StaticHandler};
use crate::server::listener;

/// Owns the worker threads and the shutdown channel.
///
/// Each worker runs its own single-threaded runtime; every connection a
/// worker accepts lives and dies on that worker's thread. There is no
/// health check and no restart: a crashed worker stops accepting while
/// the others keep serving.
pub struct WorkerPool {
    workers: Vec<JoinHandle<()>>,
    shutdown_tx: watch::Sender<bool>,
}

impl WorkerPool {
    /// Spawns `cfg.workers` workers listening on `cfg.listen_addr`.
    pub fn spawn(cfg: Config) -> anyhow::Result<Self> {
        let resolver = PathResolver::new(&cfg.document_root, cfg.index_file.clone())?;
        let handler = Arc::new(StaticHandler::new(resolver));
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let mut workers = Vec::with_capacity(cfg.workers);
        for worker_id in 0..cfg.workers {
            let addr = cfg.listen_addr.clone();
            let handler = handler.clone();
            let shutdown = shutdown_rx.clone();

            let handle = std::thread::Builder::new()
                .name(format!("worker-{worker_id}"))
                .spawn(move || worker_main(worker_id, &addr, handler, shutdown))
                .context("spawning worker thread")?;
            workers.push(handle);
        }

        Ok(Self {
            workers,
            shutdown_tx,
        })
    }

    /// Signals every worker to stop and waits for each to exit.
    pub fn shutdown(self) {
        let _ = self.shutdown_tx.send(true);
        for handle in self.workers {
            let _ = handle.join();
        }
    }
}

fn worker_main(
    worker_id: usize,
    addr: &str,
    handler: Arc<StaticHandler>,
    shutdown: watch::Receiver<bool>,
) {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            error!(worker = worker_id, error = %e, "Failed to build worker runtime");
            return;
        }
    };

    if let Err(e) = runtime.block_on(listener::run(worker_id, addr, handler, shutdown)) {
        error!(worker = worker_id, error = %e, "Worker exited with error");
    }
}
