//! CLI application for searching text across a folder of PDF files.

mod commands;
mod output;
mod progress;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{config, find, interactive, search};

/// folio - search text in a folder of PDF documents
#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search every PDF in a folder
    Search(search::SearchArgs),

    /// Search a single PDF file
    Find(find::FindArgs),

    /// Prompt for search terms and browse results
    Interactive(interactive::InteractiveArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    // Execute command
    match cli.command {
        Commands::Search(args) => search::run(args, &config::load_config(cli.config.as_deref())?),
        Commands::Find(args) => find::run(args, &config::load_config(cli.config.as_deref())?),
        Commands::Interactive(args) => {
            interactive::run(args, &config::load_config(cli.config.as_deref())?)
        }
        Commands::Config(args) => config::run(args, cli.config.as_deref()),
    }
}
