use clap::Parser;
use config::Config;
use image_classifier::select::load_classifier;
use library::logger::{impl_console::LoggerConsole, interface::Logger};
use server::router::build_router;
use server::state::AppState;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

mod config;
mod image_classifier;
mod image_preprocessor;
mod library;
mod scoring;
mod server;
mod waste_category;

/// Waste classification service
#[derive(Parser, Debug)]
#[command(name = "waste-classifier")]
#[command(version)]
#[command(about = "HTTP service that labels photos of waste by recycling category")]
struct Cli {
    /// Host to bind to
    #[arg(long, env = "WASTE_CLASSIFIER_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "WASTE_CLASSIFIER_PORT")]
    port: Option<u16>,

    /// ONNX model file; classification is simulated when it is missing
    #[arg(long, env = "WASTE_CLASSIFIER_MODEL")]
    model_path: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();

    let mut config = Config::default();

    if let Some(host) = cli.host {
        config.host = host;
    }

    if let Some(port) = cli.port {
        config.port = port;
    }

    if let Some(model_path) = cli.model_path {
        config.model_path = model_path;
    }

    let logger: Arc<dyn Logger + Send + Sync> =
        Arc::new(LoggerConsole::new(config.logger_timezone));

    let classifier = load_classifier(&config, logger.clone());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    let state = Arc::new(AppState::new(config, classifier, logger.clone()));

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    logger.info("Waste classifier running at:")?;
    logger.info(&format!("Local: http://localhost:{}", addr.port()))?;
    logger.info(&format!("Network: http://{}", addr))?;

    axum::serve(listener, app).await?;

    Ok(())
}
