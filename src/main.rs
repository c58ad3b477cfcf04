use clap::{Parser, Subcommand};
use tracing::Level;

use cashflow_adventure::api::{AppConfig, run_http_server};
use cashflow_adventure::core::{DEFAULT_MONTHS, DEFAULT_SEED, STARTING_BALANCE};

#[derive(Parser, Debug)]
#[command(
    name = "cashflow-adventure",
    about = "Kid-friendly cash flow dashboard: sample history, what-if forecasts, and a money quiz"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the dashboard and its JSON API.
    Serve {
        #[arg(long, default_value_t = 8080)]
        port: u16,
        #[arg(
            long,
            default_value_t = DEFAULT_SEED,
            help = "Seed for the sample history; the default keeps every session identical"
        )]
        seed: u64,
        #[arg(long, default_value_t = DEFAULT_MONTHS, help = "Months of sample history to generate")]
        months: u32,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Serve { port, seed, months } => {
            let config = AppConfig {
                seed,
                months,
                starting_balance: STARTING_BALANCE,
            };
            if let Err(e) = run_http_server(port, config).await {
                tracing::error!("server error: {e}");
                std::process::exit(1);
            }
        }
    }
}
