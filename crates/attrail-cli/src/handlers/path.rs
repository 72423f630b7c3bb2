use anyhow::Result;
use attrail_hooks::{detect_workspace_root, resolve_trace_log};
use std::path::PathBuf;

pub fn handle(project_root: Option<&str>) -> Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let root = detect_workspace_root(project_root, &cwd);
    println!("{}", resolve_trace_log(&root).path().display());
    Ok(())
}
