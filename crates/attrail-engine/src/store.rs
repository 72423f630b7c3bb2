use crate::Result;
use attrail_types::TraceRecord;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Directory under the workspace root holding attrail state
pub const TRACE_LOG_DIR: &str = ".attrail";

/// Ledger file name within [`TRACE_LOG_DIR`]
pub const TRACE_LOG_FILE: &str = "trace.jsonl";

/// Append-only JSONL ledger of trace records.
///
/// The store owns the file exclusively: it never reads existing content,
/// never rewrites and never deletes. Each record is one JSON line written
/// with a single `write_all` on an append-mode handle, so concurrent
/// short-lived invocations interleave at line granularity under POSIX
/// append semantics without explicit locking.
#[derive(Debug, Clone)]
pub struct TraceLog {
    path: PathBuf,
}

impl TraceLog {
    /// Ledger at the default location under a workspace root
    pub fn in_workspace(root: &Path) -> Self {
        Self {
            path: root.join(TRACE_LOG_DIR).join(TRACE_LOG_FILE),
        }
    }

    /// Ledger at an explicit path (tests, `ATTRAIL_LOG_PATH` override)
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize `record` to one JSON line and append it.
    ///
    /// Missing ancestor directories are created. Failure to create them or
    /// to open/write the file is fatal for the invocation: there is no
    /// fallback location, and the record is lost (at-most-once delivery).
    pub fn append(&self, record: &TraceRecord) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut line = serde_json::to_string(record)?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;

        Ok(())
    }
}
