use anyhow::Result;
use clap::Parser;
use pubsearch_client::{BioRxivClient, LlmClient, PubMedClient, Searcher};
use pubsearch_server::{AppState, Cli, build_router};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let pubmed = PubMedClient::with_config(cli.client_config())?;
    let llm = LlmClient::new(cli.llm_config())?;
    if !llm.is_configured() {
        warn!("OPENAI_API_KEY is not set; /generate-query and /classify will fail");
    }

    let state = AppState::new(Searcher::new(pubmed, BioRxivClient::new()), llm);
    let router = build_router(state, &cli.cors_origins);

    let address = cli.bind_address();
    let listener = TcpListener::bind(&address).await?;
    info!(address = %address, "Publication search API listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!(error = %e, "Failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
