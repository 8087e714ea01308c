use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "portfolio")]
#[command(about = "Render a personal portfolio page from GitHub, YouTube and Medium")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch all platforms and render the portfolio page as HTML
    Render {
        /// Output file path (prints to stdout if not specified)
        #[arg(short, long)]
        output: Option<String>,

        /// JSON file overriding the static profile content
        #[arg(long)]
        profile: Option<String>,

        /// Ignore cached responses and fetch everything again
        #[arg(long)]
        no_cache: bool,
    },

    /// Print previews of the latest Medium articles
    Articles {
        /// Ignore cached responses and fetch everything again
        #[arg(long)]
        no_cache: bool,
    },

    /// Print GitHub and YouTube platform stats
    Stats {
        /// Ignore cached responses and fetch everything again
        #[arg(long)]
        no_cache: bool,
    },

    /// Inspect or clear the response cache
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },
}

#[derive(Subcommand)]
pub enum CacheAction {
    /// List cached responses with their age
    List,

    /// Delete all cached responses
    Clear,
}
