pub mod area;
pub mod kinds;
pub mod onboard;
pub mod roles;

use clap::{ArgAction, Parser, Subcommand};
use solid_common::config::Config;

#[derive(Parser)]
#[command(name = "solid")]
#[command(about = "Extensible shape areas and dependency-inverted services.")]
#[command(version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Do not print the version banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Reduce output (-q hides headers, -qq hides per-item details)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Sum areas on the parallel pool
    #[arg(long, global = true)]
    pub parallel: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the total area of the given shapes, e.g. `rect:10,20 circle:5`
    #[command(alias = "a")]
    Area {
        #[arg(value_name = "SHAPE")]
        shapes: Vec<String>,
    },
    /// List the shape kinds the area command understands
    #[command(alias = "k")]
    Kinds,
    /// Register a user and send the welcome notification
    #[command(alias = "o")]
    Onboard { name: String, email: String },
    /// Show the worker roles and bird routines
    #[command(alias = "r")]
    Roles,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            no_banner: self.no_banner,
            quiet: self.quiet,
            parallel: self.parallel,
        }
    }
}
