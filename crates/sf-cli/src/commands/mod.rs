//! Command-line surface.
//!
//! Every command creates its own root span so use-case and HTTP spans nest
//! under it.

pub mod login;
pub mod register;
pub mod strength;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

pub use register::{RegisterArgs, RegisterOutcome};

#[derive(Parser, Debug)]
#[command(name = "storefront-signup")]
#[command(about = "Create a storefront account from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML configuration file ([api] and [routes] sections)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Backend origin, overrides the config file
    #[arg(long, env = "STOREFRONT_API_BASE_URL", global = true)]
    pub api_base_url: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    /// Disable ANSI colours
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fill in the registration form and submit it
    Register(RegisterArgs),

    /// Show the strength meter and checklist for a password
    Strength {
        /// Password to assess
        password: String,
    },

    /// Follow the "Already have an account? Login" link
    Login,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
