use anyhow::{Context, Result};
use attrail_engine::WorkspaceContext;
use attrail_hooks::{
    HookPayload, detect_tool, detect_vcs, detect_workspace_root, process_payload,
    resolve_trace_log,
};
use std::io::Read;
use std::path::PathBuf;

/// Handle one hook invocation: payload on stdin, at most one ledger append.
///
/// Anything short of a failed append exits quietly: a hook that errors on
/// unparsable input or unsupported tools would break the agent's edit loop.
pub fn handle(project_root: Option<&str>) -> Result<()> {
    let mut input = String::new();
    if std::io::stdin().read_to_string(&mut input).is_err() {
        return Ok(());
    }

    let payload: HookPayload = match serde_json::from_str(&input) {
        Ok(payload) => payload,
        Err(_) => return Ok(()),
    };

    let cwd = payload
        .cwd
        .as_ref()
        .map(PathBuf::from)
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."));

    let root = detect_workspace_root(project_root, &cwd);
    let context = WorkspaceContext {
        vcs: detect_vcs(&root),
        tool: detect_tool(),
        root: root.clone(),
    };

    if let Some(record) = process_payload(&payload, &context) {
        let log = resolve_trace_log(&root);
        log.append(&record)
            .with_context(|| format!("failed to append to {}", log.path().display()))?;
    }

    Ok(())
}
