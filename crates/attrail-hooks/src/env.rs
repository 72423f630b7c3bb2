use attrail_engine::TraceLog;
use attrail_types::{ToolInfo, VcsInfo};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Agent name recorded in the `tool` field of every record
pub const TOOL_NAME: &str = "claude-code";

/// Discover the workspace root based on priority:
/// 1. explicit root (--project-root flag)
/// 2. ATTRAIL_PROJECT_ROOT environment variable
/// 3. `git rev-parse --show-toplevel` from `cwd`
/// 4. `cwd` itself
pub fn detect_workspace_root(explicit_root: Option<&str>, cwd: &Path) -> PathBuf {
    if let Some(root) = explicit_root {
        return PathBuf::from(root);
    }

    if let Ok(env_root) = std::env::var("ATTRAIL_PROJECT_ROOT") {
        return PathBuf::from(env_root);
    }

    if let Some(toplevel) = git_output(cwd, &["rev-parse", "--show-toplevel"]) {
        return PathBuf::from(toplevel);
    }

    cwd.to_path_buf()
}

/// Detect the current revision of the repository containing `root`.
/// Returns None outside a git repository (not an error; the record simply
/// omits its `vcs` field).
pub fn detect_vcs(root: &Path) -> Option<VcsInfo> {
    let revision = git_output(root, &["rev-parse", "HEAD"])?;
    Some(VcsInfo {
        vcs_type: "git".to_string(),
        revision,
    })
}

/// Identity of the originating agent. Hook payloads do not carry a version,
/// so it comes from the environment when the agent exports one.
pub fn detect_tool() -> ToolInfo {
    ToolInfo {
        name: TOOL_NAME.to_string(),
        version: std::env::var("CLAUDE_CODE_VERSION").ok(),
    }
}

/// Resolve the ledger location: `ATTRAIL_LOG_PATH` override, else the
/// default path under the workspace root.
pub fn resolve_trace_log(root: &Path) -> TraceLog {
    match std::env::var("ATTRAIL_LOG_PATH") {
        Ok(path) => TraceLog::at_path(path),
        Err(_) => TraceLog::in_workspace(root),
    }
}

fn git_output(dir: &Path, args: &[&str]) -> Option<String> {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if text.is_empty() { None } else { Some(text) }
}
