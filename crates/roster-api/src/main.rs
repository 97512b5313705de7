//! CLI entry point for the roster GraphQL server.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use roster_api::config::ServerConfig;
use roster_api::{build_schema, server};
use roster_store::EntityStore;

#[derive(Parser)]
#[command(name = "roster-api")]
#[command(about = "GraphQL API over in-memory courses, students and grades")]
struct Cli {
    /// Config file prefix (default: roster).
    #[arg(short, long, default_value = "roster")]
    config: String,

    /// Override the listening port.
    #[arg(short, long)]
    port: Option<u16>,

    /// Load fixtures from this directory instead of the built-in set.
    #[arg(long)]
    fixtures: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).json().init();

    let cli = Cli::parse();
    let mut config = ServerConfig::load(&cli.config)?;
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(dir) = cli.fixtures {
        config.fixtures_dir = Some(dir);
    }

    let store = EntityStore::from_fixtures(config.fixtures()?).into_shared();
    let schema = build_schema(store);

    server::serve(&config, schema).await?;
    Ok(())
}
