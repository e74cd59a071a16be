use crate::rank::ViewMode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gitfolio")]
#[command(about = "Renders a GitHub user's public repositories as portfolio cards")]
#[command(version)]
pub struct Cli {
    /// GitHub username whose portfolio to render
    #[arg(long, env = "GITFOLIO_USERNAME")]
    pub username: Option<String>,

    /// Directory holding the cache and like store
    #[arg(long, env = "GITFOLIO_DATA_DIR", default_value = ".gitfolio")]
    pub data_dir: PathBuf,

    /// Path to the portfolio config file
    #[arg(long, env = "GITFOLIO_CONFIG", default_value = "portfolio.json")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the portfolio cards
    List {
        /// Search text matched against name, language, and topics
        #[arg(long, short, default_value = "")]
        query: String,

        /// View mode
        #[arg(long, short, value_enum, default_value = "all")]
        mode: ViewMode,

        /// Bypass the cache and refetch from GitHub
        #[arg(long)]
        refresh: bool,
    },
    /// Like a repository
    Like {
        /// Repository name
        repo: String,
    },
    /// Copy a share link to the clipboard
    Share {
        /// Repository name; omit to share the whole portfolio
        repo: Option<String>,
    },
}
