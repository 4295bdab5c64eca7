//! Nefesh MCP Server - Main entry point
//!
//! This is the main executable for the Nefesh directory server, which
//! provides a Model Context Protocol (MCP) interface to the therapist
//! directory.

use anyhow::Result;
use nefesh_mcp_server::repositories::{JsonFileRepository, TherapistRepository};
use nefesh_mcp_server::{Config, Gazetteer, NefeshMcpServer};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize logging (stderr only to avoid polluting stdout/MCP communication)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Starting Nefesh MCP Server with data file: {}",
        config.data_file.display()
    );

    // Load the gazetteer once; a server without it cannot search
    let gazetteer = match Gazetteer::load(&config.gazetteer_file) {
        Ok(g) => Arc::new(g),
        Err(e) => {
            error!(
                "Failed to load gazetteer from {}: {}",
                config.gazetteer_file.display(),
                e
            );
            return Err(e.into());
        }
    };
    info!("Gazetteer loaded: {} cities", gazetteer.len());

    // Initialize the record store
    let repository =
        Arc::new(JsonFileRepository::new(&config.data_file)) as Arc<dyn TherapistRepository>;

    // Create the MCP server (service and search pipeline are constructed internally)
    let server = NefeshMcpServer::new(
        repository,
        gazetteer,
        config.resolve_confidence_floor,
        config.match_accept_threshold,
    );

    info!("Nefesh MCP Server initialized");
    info!(
        "Match thresholds: resolve floor {}, accept bar {}",
        config.resolve_confidence_floor, config.match_accept_threshold
    );

    // Run the server (this will block until the server exits)
    info!("Starting MCP server with stdio transport");
    nefesh_mcp_server::server::run_server(server).await?;

    info!("Nefesh MCP Server shutdown complete");
    Ok(())
}
