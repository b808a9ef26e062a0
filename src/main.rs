mod config;
mod demo;
mod page;
mod routes;
mod state;

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "server failed");
            ExitCode::FAILURE
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error("page template: {0}")]
    Template(#[from] askama::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

async fn run() -> Result<(), StartupError> {
    config::load_env_file()?;

    let config = config::ServerConfig::from_env()?;
    if config.share {
        tracing::warn!("SHARE requested but public share links are not supported; serving locally only");
    }

    let addr = config.bind_addr();
    let state = state::AppState::new(config)?;
    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(%addr, "rag-anything demo listening");
    axum::serve(listener, app).await?;
    Ok(())
}
