use crate::io::read_file_if_present;
use crate::schema::{EditArgs, HookPayload, MultiEditArgs, WriteArgs};
use attrail_engine::{RecordOptions, TextEdit, WorkspaceContext, build_record, compute_ranges};
use attrail_types::{ContributorKind, TraceRecord};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// A file-modifying tool invocation, one variant per supported tool.
///
/// Construction parses `tool_input` against the schema that `tool_name`
/// implies; tools that do not modify files (Read, Bash, ...) and payloads
/// whose arguments fail to parse both map to `None` rather than an error,
/// so the hook stays silent on anything it does not understand.
#[derive(Debug, Clone)]
pub enum ToolEvent {
    Edit(EditArgs),
    MultiEdit(MultiEditArgs),
    Write(WriteArgs),
}

impl ToolEvent {
    pub fn from_payload(payload: &HookPayload) -> Option<Self> {
        let input = payload.tool_input.clone();
        match payload.tool_name.as_str() {
            "Edit" => serde_json::from_value(input).ok().map(ToolEvent::Edit),
            "MultiEdit" => serde_json::from_value(input).ok().map(ToolEvent::MultiEdit),
            "Write" => serde_json::from_value(input).ok().map(ToolEvent::Write),
            _ => None,
        }
    }

    /// Path of the file the tool modified
    pub fn file_path(&self) -> &Path {
        match self {
            ToolEvent::Edit(args) => Path::new(&args.file_path),
            ToolEvent::MultiEdit(args) => Path::new(&args.file_path),
            ToolEvent::Write(args) => Path::new(&args.file_path),
        }
    }

    /// The event's edits in diff-engine form.
    ///
    /// A Write carries no pre-image (the hook fires after the file was
    /// replaced), so it becomes a single insertion of the full content and
    /// takes the diff engine's whole-text fallback.
    pub fn edits(&self) -> Vec<TextEdit> {
        match self {
            ToolEvent::Edit(args) => {
                vec![TextEdit::replace(&args.old_string, &args.new_string)]
            }
            ToolEvent::MultiEdit(args) => args
                .edits
                .iter()
                .map(|op| TextEdit::replace(&op.old_string, &op.new_string))
                .collect(),
            ToolEvent::Write(args) => vec![TextEdit::insert(&args.content)],
        }
    }
}

/// Turn one hook payload into one trace record.
///
/// Degraded inputs fall through the documented fallbacks: an unreadable
/// target file reduces the diff engine to whole-text attribution, a
/// transcript with no model yields a record without a model id. Only the
/// ledger append (done by the caller) can fail.
pub fn process_payload(payload: &HookPayload, context: &WorkspaceContext) -> Option<TraceRecord> {
    let event = ToolEvent::from_payload(payload)?;

    let file_content = read_file_if_present(event.file_path());
    let ranges = compute_ranges(&event.edits(), file_content.as_deref());

    let transcript_path = payload.transcript_path.as_ref().map(PathBuf::from);
    let model = transcript_path
        .as_deref()
        .and_then(attrail_engine::extract_latest_model);

    let mut metadata = BTreeMap::new();
    metadata.insert("tool_name".to_string(), payload.tool_name.clone().into());
    if let Some(session_id) = &payload.session_id {
        metadata.insert("session_id".to_string(), session_id.clone().into());
    }
    if let Some(event_name) = &payload.hook_event_name {
        metadata.insert("hook_event_name".to_string(), event_name.clone().into());
    }

    Some(build_record(
        ContributorKind::Ai,
        event.file_path(),
        RecordOptions {
            model,
            ranges,
            transcript_path,
            metadata,
        },
        context,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use attrail_types::{Range, ToolInfo};
    use serde_json::json;

    fn payload(tool_name: &str, tool_input: serde_json::Value) -> HookPayload {
        HookPayload {
            session_id: Some("session-1".to_string()),
            transcript_path: None,
            cwd: None,
            hook_event_name: Some("PostToolUse".to_string()),
            tool_name: tool_name.to_string(),
            tool_input,
            tool_response: serde_json::Value::Null,
        }
    }

    fn context() -> WorkspaceContext {
        WorkspaceContext {
            root: PathBuf::from("/workspace"),
            vcs: None,
            tool: ToolInfo {
                name: "claude-code".to_string(),
                version: None,
            },
        }
    }

    #[test]
    fn test_edit_event_dispatch() {
        let payload = payload(
            "Edit",
            json!({"file_path": "/workspace/src/main.rs", "old_string": "a", "new_string": "b"}),
        );

        match ToolEvent::from_payload(&payload) {
            Some(ToolEvent::Edit(args)) => assert_eq!(args.new_string, "b"),
            other => panic!("Expected Edit event, got {:?}", other),
        }
    }

    #[test]
    fn test_multi_edit_flattens_to_edits() {
        let payload = payload(
            "MultiEdit",
            json!({
                "file_path": "/workspace/src/main.rs",
                "edits": [
                    {"old_string": "a", "new_string": "b"},
                    {"old_string": "c", "new_string": "d"}
                ]
            }),
        );

        let event = ToolEvent::from_payload(&payload).unwrap();
        let edits = event.edits();
        assert_eq!(edits.len(), 2);
        assert_eq!(edits[1].old_text, "c");
        assert_eq!(edits[1].new_text, "d");
    }

    #[test]
    fn test_write_becomes_insertion() {
        let payload = payload(
            "Write",
            json!({"file_path": "/workspace/new.txt", "content": "one\ntwo"}),
        );

        let event = ToolEvent::from_payload(&payload).unwrap();
        let edits = event.edits();
        assert_eq!(edits.len(), 1);
        assert!(edits[0].old_text.is_empty());
        assert_eq!(edits[0].new_text, "one\ntwo");
    }

    #[test]
    fn test_non_edit_tools_ignored() {
        for tool in ["Read", "Bash", "Glob", "WebSearch"] {
            let payload = payload(tool, json!({"file_path": "/x"}));
            assert!(ToolEvent::from_payload(&payload).is_none());
            assert!(process_payload(&payload, &context()).is_none());
        }
    }

    #[test]
    fn test_malformed_input_ignored() {
        let payload = payload("Edit", json!({"no_file_path": true}));
        assert!(ToolEvent::from_payload(&payload).is_none());
    }

    #[test]
    fn test_process_payload_with_unreadable_file() {
        // Target file does not exist; the record still lands, attributed
        // via the degraded whole-text path.
        let payload = payload(
            "Edit",
            json!({
                "file_path": "/workspace/missing.rs",
                "old_string": "old",
                "new_string": "line a\nline b\nline c"
            }),
        );

        let record = process_payload(&payload, &context()).unwrap();
        assert_eq!(record.files[0].path, "missing.rs");
        assert_eq!(
            record.files[0].conversations[0].ranges,
            vec![Range::new(1, 3)]
        );
        assert_eq!(
            record.metadata.get("session_id"),
            Some(&serde_json::Value::String("session-1".to_string()))
        );
    }
}
