use serde::Deserialize;
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

/// Initial backward window for tail reads. Model ids live near the end of a
/// transcript in the common case, so most files never need a second read.
const INITIAL_TAIL_WINDOW: u64 = 8 * 1024;

/// The only transcript shape the resolver inspects: a nested
/// `message.model` field on an otherwise arbitrary JSONL entry.
#[derive(Debug, Deserialize)]
struct TranscriptLine {
    #[serde(default)]
    message: Option<TranscriptMessage>,
}

#[derive(Debug, Deserialize)]
struct TranscriptMessage {
    #[serde(default)]
    model: Option<String>,
}

/// Extract the most recently recorded model id from a JSONL transcript.
///
/// Reads backward from the end of the file with an expanding window:
/// start at [`INITIAL_TAIL_WINDOW`], scan window lines last-to-first, and
/// return the first `message.model` found. Lines that fail to parse are
/// skipped; the window's first line is usually a partial record because the
/// boundary fell mid-line. No hit doubles the window, capped at the full
/// file, so a model anywhere in the file is eventually found without
/// paying a full read on multi-megabyte logs up front.
///
/// Open/read failures and model-free transcripts both yield `None`.
pub fn extract_latest_model(path: &Path) -> Option<String> {
    let mut file = File::open(path).ok()?;
    let file_len = file.metadata().ok()?.len();
    if file_len == 0 {
        return None;
    }

    let mut window = INITIAL_TAIL_WINDOW.min(file_len);

    loop {
        let start = file_len - window;
        file.seek(SeekFrom::Start(start)).ok()?;

        let mut buf = vec![0u8; window as usize];
        file.read_exact(&mut buf).ok()?;

        // Window boundaries can split a UTF-8 sequence; lossy decoding only
        // corrupts the partial first line, which fails to parse anyway.
        let text = String::from_utf8_lossy(&buf);

        for line in text.lines().rev() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            // A complete window starts at a record boundary; otherwise the
            // oldest line is a fragment and parsing it simply fails.
            if let Ok(entry) = serde_json::from_str::<TranscriptLine>(line)
                && let Some(model) = entry.message.and_then(|m| m.model)
            {
                return Some(model);
            }
        }

        if window >= file_len {
            return None;
        }
        window = (window * 2).min(file_len);
    }
}
