use anyhow::{Context, Result};
use attrail_hooks::{detect_workspace_root, resolve_trace_log};
use attrail_types::TraceRecord;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

/// Stream the ledger line by line. Summaries by default, `--raw` for the
/// JSONL passthrough. Lines that no longer parse as records are shown
/// raw too (the ledger is append-only; older format versions stay in it).
pub fn handle(project_root: Option<&str>, path: Option<PathBuf>, raw: bool) -> Result<()> {
    let path = path.unwrap_or_else(|| {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let root = detect_workspace_root(project_root, &cwd);
        resolve_trace_log(&root).path().to_path_buf()
    });

    let file = File::open(&path)
        .with_context(|| format!("failed to open trace ledger at {}", path.display()))?;
    let reader = BufReader::new(file);

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        if raw {
            println!("{}", line);
            continue;
        }

        match serde_json::from_str::<TraceRecord>(&line) {
            Ok(record) => println!("{}", summarize(&record)),
            Err(_) => println!("{}", line),
        }
    }

    Ok(())
}

fn summarize(record: &TraceRecord) -> String {
    let mut parts = vec![record.timestamp.to_rfc3339()];

    for file in &record.files {
        for conversation in &file.conversations {
            let who = conversation
                .contributor
                .model_id
                .as_deref()
                .unwrap_or("unknown");
            let ranges = conversation
                .ranges
                .iter()
                .map(|r| {
                    if r.start_line == r.end_line {
                        format!("L{}", r.start_line)
                    } else {
                        format!("L{}-{}", r.start_line, r.end_line)
                    }
                })
                .collect::<Vec<_>>()
                .join(",");

            parts.push(format!("{} {} {}", file.path, who, ranges));
        }
    }

    parts.join("  ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use attrail_types::*;
    use chrono::Utc;
    use std::collections::BTreeMap;
    use uuid::Uuid;

    #[test]
    fn test_summarize_single_and_multi_line_ranges() {
        let record = TraceRecord {
            version: TRACE_FORMAT_VERSION.to_string(),
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            vcs: None,
            tool: ToolInfo {
                name: "claude-code".to_string(),
                version: None,
            },
            files: vec![FileEntry {
                path: "src/lib.rs".to_string(),
                conversations: vec![Conversation {
                    url: None,
                    contributor: Contributor {
                        kind: ContributorKind::Ai,
                        model_id: Some("anthropic/claude-3-opus".to_string()),
                    },
                    ranges: vec![Range::new(4, 4), Range::new(10, 12)],
                    related: None,
                }],
            }],
            metadata: BTreeMap::new(),
        };

        let summary = summarize(&record);
        assert!(summary.contains("src/lib.rs"));
        assert!(summary.contains("anthropic/claude-3-opus"));
        assert!(summary.contains("L4,L10-12"));
    }
}
