use attrail_types::{
    Contributor, ContributorKind, Conversation, FileEntry, Range, TRACE_FORMAT_VERSION,
    ToolInfo, TraceRecord, VcsInfo, relativize,
};
use chrono::Utc;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Everything the builder needs to know about its surroundings, resolved
/// once by the caller and passed in explicitly. Keeping this out of
/// process-wide state makes record construction deterministic under test.
#[derive(Debug, Clone)]
pub struct WorkspaceContext {
    /// Workspace root used to relativize file paths
    pub root: PathBuf,

    /// Detected revision-control state, if any
    pub vcs: Option<VcsInfo>,

    /// Identity of the originating editor/agent
    pub tool: ToolInfo,
}

/// Per-event inputs to [`build_record`]
#[derive(Debug, Clone, Default)]
pub struct RecordOptions {
    /// Raw model id as reported by the event source; normalized here
    pub model: Option<String>,

    /// Ranges from the diff engine; empty falls back to `[{1,1}]`
    pub ranges: Vec<Range>,

    /// Transcript the edit originated from, recorded as a `file://` locator
    pub transcript_path: Option<PathBuf>,

    /// Tool-specific context carried through verbatim
    pub metadata: BTreeMap<String, Value>,
}

/// Assemble a complete [`TraceRecord`] for one edit event.
///
/// Defaults are filled here, once, rather than by callers: missing ranges
/// become a single `{1,1}` range so no record ever carries an empty ranges
/// sequence, and the contributor's model id is the normalized form of the
/// raw model. One event maps to exactly one file entry holding exactly one
/// conversation.
pub fn build_record(
    contributor: ContributorKind,
    file_path: &Path,
    options: RecordOptions,
    context: &WorkspaceContext,
) -> TraceRecord {
    let ranges = if options.ranges.is_empty() {
        vec![Range::new(1, 1)]
    } else {
        options.ranges
    };

    let conversation = Conversation {
        url: options
            .transcript_path
            .map(|p| format!("file://{}", p.display())),
        contributor: Contributor {
            kind: contributor,
            model_id: crate::model::normalize_model(options.model.as_deref()),
        },
        ranges,
        related: None,
    };

    TraceRecord {
        version: TRACE_FORMAT_VERSION.to_string(),
        id: Uuid::new_v4(),
        timestamp: Utc::now(),
        vcs: context.vcs.clone(),
        tool: context.tool.clone(),
        files: vec![FileEntry {
            path: relativize(file_path, &context.root),
            conversations: vec![conversation],
        }],
        metadata: options.metadata,
    }
}
