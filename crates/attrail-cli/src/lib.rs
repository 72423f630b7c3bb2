// NOTE: attrail Architecture Rationale
//
// Why one process per event (not a daemon)?
// - Hook dispatch is how agents deliver edit events: spawn, stdin, exit
// - A crashed invocation loses exactly one record, never the ledger
// - Cross-process safety reduces to POSIX append semantics on one file
//
// Why a write-only ledger (not a database)?
// - Provenance consumers stream JSONL; no query surface to maintain here
// - Appends stay atomic at line granularity without locks or transactions
// - Trade-off: no compaction or dedup, by design (consumers own that)
//
// Why never fail on degraded input?
// - A hook that errors breaks the agent's edit loop for the user
// - Unreadable files, partial transcripts, unknown tools all have
//   documented fallbacks; only a failed ledger append is fatal

mod args;
mod handlers;

pub use args::{Cli, Commands};

use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Hook => handlers::hook::handle(cli.project_root.as_deref()),
        Commands::Show { path, raw } => {
            handlers::show::handle(cli.project_root.as_deref(), path, raw)
        }
        Commands::Path => handlers::path::handle(cli.project_root.as_deref()),
    }
}
