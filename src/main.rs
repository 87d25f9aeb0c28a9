use staticd::config::Config;
use staticd::server::workers::WorkerPool;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = Config::load()?;

    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_max_level(if cfg.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    tracing::info!("Starting server at {}", cfg.listen_addr);
    let pool = WorkerPool::spawn(cfg)?;

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutdown signal received");
    pool.shutdown();

    Ok(())
}
