//! Serve command handler.

use anyhow::Result;
use marquee_axum::{ServerConfig, start_server};

use crate::bootstrap::CliConfig;

/// Build the web server configuration from CLI input.
pub fn server_config(
    config: &CliConfig,
    host: String,
    port: u16,
    allow_origin: Vec<String>,
) -> ServerConfig {
    let mut server = ServerConfig {
        host,
        port,
        ..ServerConfig::with_defaults()
    };
    if let Some(path) = &config.data_file {
        server = server.with_data_file(path);
    }
    if let Some(path) = &config.reviews_file {
        server = server.with_reviews_file(path);
    }
    if !allow_origin.is_empty() {
        server = server.with_allowed_origins(allow_origin);
    }
    server
}

/// Execute the serve command.
///
/// Runs until Ctrl+C.
pub async fn execute(
    config: &CliConfig,
    host: String,
    port: u16,
    allow_origin: Vec<String>,
) -> Result<()> {
    let server = server_config(config, host, port, allow_origin);
    println!("Serving the movie catalog at http://{}/movies", server.bind_addr());
    start_server(server).await
}
