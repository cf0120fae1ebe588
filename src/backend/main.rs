/**
 * Comment Server Entry Point
 *
 * Loads `.env`, parses the command line, reads the configuration and serves
 * the HTTP API until interrupted.
 */

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use some_comments::backend::server::init::create_app;
use some_comments::shared::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "some-comments-server", version, about = "Self-hosted comment server")]
struct Args {
    /// Path to a TOML configuration file
    #[arg(env = "SOME_COMMENTS_CONFIG")]
    config: Option<PathBuf>,

    /// Port to listen on, overrides the configuration
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let args = Args::parse();

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut config = AppConfig::load(args.config.as_deref())?;
    if let Some(port) = args.port {
        config.port = port;
    }

    let addr = format!("{}:{}", config.host, config.port);
    let port = config.port;
    let environment = config.environment.clone();

    let app = create_app(config).await?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on port {} in {} mode", port, environment);
    axum::serve(listener, app).await?;

    Ok(())
}
