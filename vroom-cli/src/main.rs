use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

/// VROOM solver command-line tool
#[derive(Parser)]
#[command(name = "vroom")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the VROOM solver executable
    #[arg(short, long, env = "VROOM_BINARY", global = true)]
    binary: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a route through a list of locations
    Route {
        /// Location strings as "longitude,latitude", in visit order
        #[arg(required = true)]
        locations: Vec<String>,

        /// Do not force the route to start at the first location
        #[arg(long)]
        no_start: bool,

        /// End the route at the last location
        #[arg(short, long)]
        end_at_last: bool,

        /// Include route geometry in the solver output
        #[arg(short = 'g', long)]
        include_geometry: bool,

        /// Pretty-print the solver's JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Verify the solver binary exists and is executable
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Route {
            locations,
            no_start,
            end_at_last,
            include_geometry,
            pretty,
        } => {
            commands::route::run(
                cli.binary,
                locations,
                no_start,
                end_at_last,
                include_geometry,
                pretty,
            )
            .await
        }
        Commands::Check => commands::check::run(cli.binary),
    }
}
