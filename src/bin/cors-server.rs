use anyhow::{Context, Result};
use clap::Parser;
use stacfix::cors::{run_server, DEFAULT_PORT};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use tokio::net::TcpListener;

#[derive(Parser)]
#[command(name = "cors-server")]
#[command(version, about = "Serve a directory over HTTP with CORS enabled, for testing STAC Browser locally")]
struct Cli {
    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Address to bind (default: all interfaces)
    #[arg(short, long, default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    bind: IpAddr,

    /// Directory to serve
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let root = cli
        .dir
        .canonicalize()
        .with_context(|| format!("Failed to open directory: {}", cli.dir.display()))?;

    let addr = SocketAddr::new(cli.bind, cli.port);
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    let port = cli.port;
    println!("🌐 CORS-enabled server running at http://localhost:{port}/");
    println!("📂 Serving: {}", root.display());
    println!("🗺️  Test with STAC Browser:");
    println!("   https://radiantearth.github.io/stac-browser/#/external/localhost:{port}/catalog.json");
    println!("\n✋ Press Ctrl+C to stop");

    run_server(listener, root, shutdown_signal())
        .await
        .context("Server error")?;

    println!("\n👋 Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    // If the handler cannot be installed, run until the process is killed
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}
