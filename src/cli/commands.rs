//! CLI commands and argument parsing

use crate::fetch::DEFAULT_BASE_URL;
use clap::{Parser, Subcommand};

/// Paginated to-do browser CLI
#[derive(Parser, Debug)]
#[command(name = "todo-pager")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the to-do API
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value = "30")]
    pub timeout_secs: u64,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse pages interactively
    Browse,

    /// Print a single page and exit
    Fetch {
        /// 1-indexed page to fetch
        #[arg(long, default_value = "1")]
        page: u32,
    },
}
