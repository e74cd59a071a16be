use clap::Parser;
use colored::*;
use gitfolio::app::Portfolio;
use gitfolio::cli::{Cli, Commands};
use gitfolio::config::PortfolioConfig;
use gitfolio::error::{PortfolioError, Result};
use gitfolio::github::GitHubClient;
use gitfolio::share::SystemClipboard;
use gitfolio::storage::JsonStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let config = PortfolioConfig::load(&cli.config)?;

    let username = cli
        .username
        .or_else(|| config.username.clone())
        .ok_or_else(|| {
            PortfolioError::ConfigError(
                "no username given; pass --username or set it in the config file".to_string(),
            )
        })?;

    let portfolio = Portfolio {
        username,
        config,
        store: JsonStore::new(cli.data_dir),
        source: Box::new(GitHubClient::new()?),
    };

    match cli.command {
        Commands::List { query, mode, refresh } => {
            println!("{}", format!("{}'s projects", portfolio.username).bold().green());
            println!("{}\n", "=".repeat(40).dimmed());
            portfolio.list(&query, mode, refresh).await?;
        }
        Commands::Like { repo } => {
            portfolio.like(&repo)?;
        }
        Commands::Share { repo } => {
            portfolio.share(&SystemClipboard, repo.as_deref()).await?;
        }
    }

    Ok(())
}
