use serde::Deserialize;
use serde_json::Value;

/// One hook invocation as delivered on stdin by the agent.
///
/// Fields beyond `tool_name`/`tool_input` vary across agent versions, so
/// everything else is tolerant: absent fields deserialize to defaults
/// instead of rejecting the event.
#[derive(Debug, Deserialize)]
pub struct HookPayload {
    #[serde(default)]
    pub session_id: Option<String>,

    /// Path to the agent's JSONL transcript for this session
    #[serde(default)]
    pub transcript_path: Option<String>,

    /// Working directory the agent ran the tool from
    #[serde(default)]
    pub cwd: Option<String>,

    /// e.g. "PostToolUse"
    #[serde(default)]
    pub hook_event_name: Option<String>,

    pub tool_name: String,

    /// Tool arguments, shape depends on `tool_name`
    #[serde(default)]
    pub tool_input: Value,

    /// Tool output; unused today but kept for metadata passthrough
    #[serde(default)]
    pub tool_response: Value,
}

/// `Edit` tool arguments: replace one occurrence of `old_string`
#[derive(Debug, Clone, Deserialize)]
pub struct EditArgs {
    pub file_path: String,
    #[serde(default)]
    pub old_string: String,
    #[serde(default)]
    pub new_string: String,
    #[serde(default)]
    pub replace_all: bool,
}

/// `MultiEdit` tool arguments: several replacements applied in order
#[derive(Debug, Clone, Deserialize)]
pub struct MultiEditArgs {
    pub file_path: String,
    #[serde(default)]
    pub edits: Vec<EditOp>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EditOp {
    #[serde(default)]
    pub old_string: String,
    #[serde(default)]
    pub new_string: String,
}

/// `Write` tool arguments: full-file replacement
#[derive(Debug, Clone, Deserialize)]
pub struct WriteArgs {
    pub file_path: String,
    #[serde(default)]
    pub content: String,
}
