// Hook payload wire format
pub mod schema;

// Per-tool event dispatch
pub mod dispatch;

// Workspace/VCS/tool environment detection
pub mod env;

// Best-effort file reading
pub mod io;

pub use dispatch::{ToolEvent, process_payload};
pub use env::{detect_tool, detect_vcs, detect_workspace_root, resolve_trace_log};
pub use io::read_file_if_present;
pub use schema::{EditArgs, EditOp, HookPayload, MultiEditArgs, WriteArgs};
