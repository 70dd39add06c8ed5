use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod errors;
pub mod inventory;
pub mod keygen;
pub mod sign;
pub mod spin;

use errors::CliErrors;
use inventory::Inventory;
use keygen::Keygen;
use sign::Sign;
use spin::Spin;

#[derive(Debug, Parser)]
#[clap(about, version)]
struct Cli {
    #[clap(subcommand)]
    command: Subcommands,
}

#[derive(Debug, Subcommand)]
enum Subcommands {
    #[clap(about = "Spin the roulette and optionally mint the drawn card")]
    Spin(Spin),
    #[clap(about = "Sign a message with the relay's account")]
    Sign(Sign),
    #[clap(about = "Show the cards held by an account")]
    Inventory(Inventory),
    #[clap(about = "Generate a ledger family seed")]
    Keygen(Keygen),
}

#[tokio::main]
pub async fn main() -> Result<(), CliErrors> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Subcommands::Spin(spin) => spin.run().await,
        Subcommands::Sign(sign) => sign.run().await,
        Subcommands::Inventory(inventory) => inventory.run().await,
        Subcommands::Keygen(keygen) => keygen.run(),
    }
}
