//! JSON-lines command replay
//!
//! Each input line is one command:
//!
//! ```text
//! {"method": "share-dataset", "args": [1, "Results", "Plasma test", "0x12"], "sender": "user1"}
//! ```
//!
//! and each produces one [`CallResult`] line. Blank lines are skipped; a line
//! that is not a command yields a 400 failure and replay carries on.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::command::{CallResult, ErrorCode};
use crate::error::CODE_INVALID_ARGUMENTS;
use crate::snapshot::LedgerSnapshot;
use crate::Ledger;

#[derive(Debug, Deserialize)]
struct Command {
    method: String,
    #[serde(default)]
    args: Vec<Value>,
    sender: String,
}

/// Run every command in `input` against `ledger`, writing one result line per
/// command to `output`.
///
/// Returns the number of results written.
///
/// # Errors
///
/// Returns an error if reading `input` or writing `output` fails.
pub fn replay(ledger: &Ledger, input: impl BufRead, mut output: impl Write) -> Result<usize> {
    let mut replayed = 0usize;

    for (index, line) in input.lines().enumerate() {
        let line = line.context("reading commands")?;
        if line.trim().is_empty() {
            continue;
        }

        let result = match serde_json::from_str::<Command>(&line) {
            Ok(command) => ledger.call(&command.method, command.args, &command.sender),
            Err(err) => {
                warn!(line = index + 1, error = %err, "malformed command");
                CallResult::failure(ErrorCode::Code(CODE_INVALID_ARGUMENTS))
            }
        };

        serde_json::to_writer(&mut output, &result)?;
        writeln!(output)?;
        replayed += 1;
    }

    output.flush()?;
    info!(commands = replayed, "replay finished");
    Ok(replayed)
}

/// Replay `input` against the ledger stored at `snapshot_path`, then save it
/// back.
///
/// A path that does not exist yet starts an empty ledger. Without a path the
/// ledger lives only for this call.
///
/// # Errors
///
/// Returns an error if the snapshot cannot be loaded, restored or saved, or if
/// [`replay`] fails.
pub fn run(
    snapshot_path: Option<&Path>,
    input: impl BufRead,
    output: impl Write,
) -> Result<usize> {
    let ledger = match snapshot_path {
        Some(path) if path.exists() => {
            let snapshot = LedgerSnapshot::load(path)
                .with_context(|| format!("loading snapshot {}", path.display()))?;
            Ledger::from_snapshot(snapshot)?
        }
        _ => Ledger::new(),
    };

    let replayed = replay(&ledger, input, output)?;

    if let Some(path) = snapshot_path {
        ledger
            .snapshot()
            .save(path)
            .with_context(|| format!("saving snapshot {}", path.display()))?;
    }

    Ok(replayed)
}
