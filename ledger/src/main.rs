//! Main entry point for the ledger binary
//!
//! Wires the real file store and clock into the record manager, then runs a
//! single command against it.

use clap::Parser;

use ledger::{
    LedgerResult, RecordManager,
    cli::{self, Args},
    services::{RealClock, RealFileStore},
};
use shared::{Component, ledger_info, logging};

#[tokio::main]
async fn main() -> LedgerResult<()> {
    // Environment file first so clap sees its variables
    let _ = dotenv::dotenv();

    let args = Args::parse();
    logging::init_tracing_with_level(Some(&args.log_level));
    logging::log_startup(Component::Cli, &format!("ledger on slot '{}'", args.slot));

    let store = RealFileStore::with_base_dir(args.store_dir.clone()).with_slot(&args.slot)?;
    let mut manager = RecordManager::open(store, RealClock::new()).await?;
    ledger_info!(Component::Cli, "📋 {} orders in slot", manager.orders().len());

    match cli::run(&mut manager, args.command).await {
        Ok(output) => {
            print!("{output}");
            if !output.ends_with('\n') {
                println!();
            }
            logging::log_success(Component::Cli, "Command completed");
            Ok(())
        }
        Err(e) => {
            logging::log_error(Component::Cli, "Command", &e);
            Err(e)
        }
    }
}
