//! Serve command: MCP server on stdio.

use anyhow::Context;
use chapter_length_core::config::Config;
use clap::Args;
use rmcp::ServiceExt;
use rmcp::transport::stdio;
use tracing::{info, instrument};

use crate::server::ChapterServer;

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {}

/// Run the MCP server until the client disconnects.
#[instrument(name = "cmd_serve", skip_all)]
pub async fn cmd_serve(
    _args: ServeArgs,
    max_input_bytes: Option<usize>,
    config: Config,
) -> anyhow::Result<()> {
    let server = ChapterServer::new()
        .with_default_category(config.category())
        .with_max_input_bytes(max_input_bytes);
    info!(
        default_category = %config.category(),
        max_input_bytes = ?max_input_bytes,
        "starting MCP server on stdio"
    );

    let service = server
        .serve(stdio())
        .await
        .context("failed to start MCP server")?;
    service.waiting().await.context("MCP server failed")?;

    info!("MCP server stopped");
    Ok(())
}
