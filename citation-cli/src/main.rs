use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod commands;

#[derive(Parser)]
#[command(
    name = "citation-cli",
    about = "Format article records as GOST, APA or Vancouver citations",
    long_about = "A CLI tool that renders JSON article records as numbered reference lists"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Format articles from a JSON file (or stdin) as a numbered bibliography
    Format(commands::format::Format),
    /// List supported citation styles
    Styles(commands::styles::Styles),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();

    match &cli.command {
        Commands::Format(cmd) => cmd.execute(),
        Commands::Styles(cmd) => cmd.execute(),
    }
}
