//! llm-echo HTTP server
//!
//! Starts an Axum web server that mocks an LLM chat API by echoing the last
//! message of each submitted conversation.

use clap::Parser;
use llm_echo::{
    cli::{Cli, Command},
    config::Config,
    handlers::{self, AppState},
    telemetry,
};
use std::net::SocketAddr;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Some(Command::Config { output }) = cli.command {
        let template = llm_echo::cli::generate_config_template();
        match output {
            Some(path) => {
                std::fs::write(&path, template)?;
                println!("Wrote configuration template to {path}");
            }
            None => print!("{template}"),
        }
        return Ok(());
    }

    // Load configuration (defaults if the file is absent)
    let config = Config::from_file_or_default(&cli.config)?;

    // Initialize telemetry
    telemetry::init(&config.observability.log_level);

    tracing::info!(
        "Starting llm-echo server on {}:{}",
        config.server.host,
        config.server.port
    );

    // Create socket address
    let addr = SocketAddr::from((
        config
            .server
            .host
            .parse::<std::net::IpAddr>()
            .unwrap_or_else(|_| std::net::IpAddr::from([0, 0, 0, 0])),
        config.server.port,
    ));

    // Build router
    let app = handlers::app(AppState::new(config))?;

    tracing::info!("Listening on {}", addr);
    tracing::info!("Liveness check available at http://{}/", addr);
    tracing::info!("Chat endpoint available at http://{}/chat", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
