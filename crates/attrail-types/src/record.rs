use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use uuid::Uuid;

/// Format version embedded in every record
pub const TRACE_FORMAT_VERSION: &str = "1.0";

// NOTE: Schema Design Goals
//
// 1. Write-once ledger: a record is built, serialized to one JSONL line and
//    never mutated or read back by the writer. Consumers stream the file.
// 2. Generality over current usage: the schema allows several files per
//    record, several conversations per file and a per-range contributor
//    override. The builder in attrail-engine emits exactly one file with
//    exactly one conversation; the wider shape is reserved for tools that
//    batch or merge attribution data downstream.
// 3. Tolerant reads: everything optional is `Option` + `skip_serializing_if`
//    so older and newer readers agree on the common subset.

/// One attribution record, one JSONL line in the trace ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceRecord {
    /// Record format version (see [`TRACE_FORMAT_VERSION`])
    pub version: String,

    /// Unique record ID, generated per event
    pub id: Uuid,

    /// Record generation time (UTC, RFC 3339)
    pub timestamp: DateTime<Utc>,

    /// Revision-control state at generation time, if detected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vcs: Option<VcsInfo>,

    /// The editor/agent that produced the edit
    pub tool: ToolInfo,

    /// Files touched by the event, in event order
    pub files: Vec<FileEntry>,

    /// Open key-value map for tool-specific context (session ids, event names)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, Value>,
}

/// Revision-control snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VcsInfo {
    /// VCS kind, e.g. "git"
    #[serde(rename = "type")]
    pub vcs_type: String,

    /// Current revision identifier (commit hash for git)
    pub revision: String,
}

/// Identity of the originating editor/agent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Attribution data for one file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileEntry {
    /// Workspace-relative path; paths outside the workspace root stay absolute
    pub path: String,

    /// Conversations that contributed to this file, in order
    pub conversations: Vec<Conversation>,
}

/// One contributing conversation: who wrote which ranges
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    /// Locator for the originating transcript, e.g. `file:///...session.jsonl`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    pub contributor: Contributor,

    /// Attributed line ranges, never empty
    pub ranges: Vec<Range>,

    /// Cross-references to related conversations/records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related: Option<Vec<String>>,
}

/// Inclusive, 1-indexed line range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    pub start_line: u32,
    pub end_line: u32,

    /// Hash of the range content, for drift detection by consumers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_hash: Option<String>,

    /// Per-range contributor override (rare; conversation-level wins otherwise)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contributor: Option<Contributor>,
}

impl Range {
    pub fn new(start_line: u32, end_line: u32) -> Self {
        Self {
            start_line,
            end_line,
            content_hash: None,
            contributor: None,
        }
    }
}

/// Who is credited for a range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    #[serde(rename = "type")]
    pub kind: ContributorKind,

    /// Normalized `provider/model` identifier for AI contributors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContributorKind {
    Human,
    Ai,
    Mixed,
    Unknown,
}
