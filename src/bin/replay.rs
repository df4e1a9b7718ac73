//! Replay ledger commands from stdin
//!
//! Reads one JSON command per line and prints one result per line (see
//! [`collab_ledger::replay`]). With a snapshot path, the ledger is loaded from
//! it (if it exists) and written back after the last command.
//!
//! Run with: `cargo run --bin collab-ledger-replay -- ledger.json < commands.jsonl`

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let snapshot_path = std::env::args_os().nth(1).map(PathBuf::from);
    collab_ledger::replay::run(
        snapshot_path.as_deref(),
        io::stdin().lock(),
        io::stdout().lock(),
    )?;

    Ok(())
}
