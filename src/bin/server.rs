//! Hotels MCP Server
//!
//! Run with: RAPIDAPI_KEY=... hotels-mcp-server

use std::net::{IpAddr, SocketAddr};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use hotels_mcp::error::Result;
use hotels_mcp::mcp::{HotelsHandler, McpServer};
use hotels_mcp::transport::HttpServer;
use hotels_mcp::{HotelSearch, RapidApiClient, RapidApiConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Transport {
    /// Streamable HTTP at /mcp
    Http,
    /// Newline-delimited JSON-RPC on stdin/stdout
    Stdio,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Pretty,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "hotels-mcp-server")]
#[command(about = "Hotels MCP server for Booking.com destination and hotel search")]
struct Args {
    /// RapidAPI key for the Booking.com API
    #[arg(long, env = "RAPIDAPI_KEY", hide_env_values = true)]
    rapidapi_key: Option<String>,

    /// Transport to serve MCP over
    #[arg(long, env = "HOTELS_MCP_TRANSPORT", value_enum, default_value = "http")]
    transport: Transport,

    /// Address to bind the HTTP transport to
    #[arg(long, env = "HOTELS_MCP_HOST", default_value = "0.0.0.0")]
    host: IpAddr,

    /// Port for the HTTP transport
    #[arg(long, env = "HOTELS_MCP_PORT", default_value = "8000")]
    port: u16,

    /// Upstream request timeout in seconds
    #[arg(long, env = "HOTELS_MCP_TIMEOUT_SECS", default_value = "30")]
    timeout_secs: u64,

    /// Log output format
    #[arg(long, env = "HOTELS_MCP_LOG_FORMAT", value_enum, default_value = "pretty")]
    log_format: LogFormat,
}

fn init_logging(format: LogFormat) {
    // Logs go to stderr; stdout belongs to the stdio transport
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Pretty => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

/// Resolves on SIGINT or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    tracing::info!("Received shutdown signal, shutting down gracefully...");
}

async fn run(args: Args) -> Result<()> {
    let config = RapidApiConfig::new(args.rapidapi_key.unwrap_or_default())
        .with_timeout(Duration::from_secs(args.timeout_secs));
    config.validate()?;

    let client = RapidApiClient::new(config)?;
    let handler = HotelsHandler::new(HotelSearch::new(Arc::new(client)));

    match args.transport {
        Transport::Http => {
            let addr = SocketAddr::new(args.host, args.port);
            tracing::info!("Hotels MCP server starting (http, {})...", addr);
            HttpServer::new(Arc::new(handler), addr)
                .start(shutdown_signal())
                .await?;
        }
        Transport::Stdio => {
            tracing::info!("Hotels MCP server starting (stdio)...");
            let server = McpServer::new(handler);
            tokio::select! {
                result = server.run() => result?,
                _ = shutdown_signal() => {}
            }
        }
    }

    tracing::info!("Hotels MCP server stopped");
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // .env values fill in for unset variables before clap reads them
    let dotenv = dotenvy::dotenv();
    let args = Args::parse();
    init_logging(args.log_format);
    if let Ok(path) = dotenv {
        tracing::debug!("Loaded environment from {}", path.display());
    }

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
