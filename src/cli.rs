use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub subcommand: Option<Subcommands>,

    #[clap(long = "space-id", env = "CONTENTFUL_SPACE_ID")]
    #[arg(help = "Contentful space to search")]
    pub space_id: Option<String>,

    #[clap(long = "token", env = "CONTENTFUL_MANAGEMENT_TOKEN", hide_env_values = true)]
    #[arg(help = "Content Management API access token")]
    pub token: Option<String>,

    #[clap(long = "branch", env = "BRANCH_NAME")]
    #[arg(help = "Branch name of the merged pull request")]
    pub branch: Option<String>,

    #[clap(long = "github-event", env = "GITHUB_EVENT_PATH")]
    #[arg(help = "GitHub event payload used when no branch name is given")]
    pub github_event: Option<PathBuf>,

    #[clap(long = "config", default_value = ".config/envmatch.toml")]
    #[arg(help = "Path to the optional configuration file")]
    pub config: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Subcommands {
    /// Find environments matching the branch (default)
    Find,
    /// Generate default configuration content
    Defaultconfig,
    /// Print configuration content to json
    Config,
}
