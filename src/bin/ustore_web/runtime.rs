use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use super::*;

#[derive(Parser)]
#[command(name = "ustore-web")]
#[command(about = "Web front-end for a remote ustore server", long_about = None)]
pub(super) struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8000")]
    pub(super) addr: SocketAddr,

    /// Write bound address to this file (dev/test convenience)
    #[arg(long)]
    pub(super) addr_file: Option<PathBuf>,

    /// Seconds a browser session may stay idle before it has to log in again
    #[arg(long, default_value_t = 43_200)]
    pub(super) session_ttl_secs: u64,
}

pub(super) async fn run() -> Result<()> {
    let args = Args::parse();
    let state = build_state(&args)?;
    let app = build_app_router(state);

    let listener = bind_listener(args.addr).await?;
    let local_addr = listener.local_addr().context("read listener local addr")?;
    log::info!("ustore-web listening on {}", local_addr);
    maybe_write_addr_file(args.addr_file.as_ref(), local_addr)?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

pub(super) fn build_state(args: &Args) -> Result<Arc<AppState>> {
    let secs = i64::try_from(args.session_ttl_secs).context("session ttl out of range")?;
    if secs == 0 {
        anyhow::bail!("--session-ttl-secs must be positive");
    }
    Ok(Arc::new(AppState::new(time::Duration::seconds(secs))))
}

async fn bind_listener(addr: SocketAddr) -> Result<tokio::net::TcpListener> {
    tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("bind {}", addr))
}

fn maybe_write_addr_file(addr_file: Option<&PathBuf>, local_addr: SocketAddr) -> Result<()> {
    if let Some(addr_file) = addr_file {
        std::fs::write(addr_file, local_addr.to_string())
            .with_context(|| format!("write addr file {}", addr_file.display()))?;
    }
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    log::info!("shutting down");
}

#[cfg(test)]
#[path = "../../tests/bin/ustore_web/runtime_tests.rs"]
mod tests;
