use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "attrail")]
#[command(about = "Append-only attribution ledger for AI agent edit events", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Workspace root (defaults to ATTRAIL_PROJECT_ROOT, then git toplevel, then cwd)
    #[arg(long, global = true)]
    pub project_root: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Read one hook payload from stdin and append its attribution record
    Hook,

    /// Stream records from the trace ledger
    Show {
        /// Explicit ledger path (defaults to the workspace ledger)
        #[arg(long)]
        path: Option<PathBuf>,

        /// Print raw JSONL lines instead of summaries
        #[arg(long)]
        raw: bool,
    },

    /// Print the resolved ledger path
    Path,
}
