//! Binary entrypoint, grounded on `node-runtime/src/main.rs`'s
//! `tracing_subscriber::FmtSubscriber` setup.

use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use ledger_cli::{Cli, CliConfig, LedgerClient};

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("setting default tracing subscriber failed");

    let mut config = CliConfig::from_env();
    if let Some(url) = cli.url {
        config.url = url;
    }
    let wait_secs = cli.wait.unwrap_or(config.wait_secs);

    let signer = cli.signer.clone();
    let payload = match cli.command.into_payload() {
        Ok(payload) => payload,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    let client = LedgerClient::new(&config);
    match client.submit_and_wait(&signer, payload, wait_secs) {
        Ok(batch_id) => println!("Response: committed ({batch_id})"),
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}
