use attrail_types::Range;

/// One tool-reported edit: the text that was replaced, the text that
/// replaced it, and (for tools that know it) an explicit line range.
#[derive(Debug, Clone, Default)]
pub struct TextEdit {
    pub old_text: String,
    pub new_text: String,

    /// Explicit 1-indexed inclusive range asserted by the editing tool.
    /// Trusted verbatim when present; no diffing is performed.
    pub range: Option<(u32, u32)>,
}

impl TextEdit {
    pub fn replace(old_text: impl Into<String>, new_text: impl Into<String>) -> Self {
        Self {
            old_text: old_text.into(),
            new_text: new_text.into(),
            range: None,
        }
    }

    pub fn insert(new_text: impl Into<String>) -> Self {
        Self::replace("", new_text)
    }
}

/// Compute the line ranges of the post-edit file that hold genuinely new
/// or modified content.
///
/// Editing tools commonly resend unchanged surrounding lines as part of an
/// edit; attributing those to the current contributor would steal credit
/// from whoever actually wrote them. Per edit, in priority order:
///
/// 1. Empty `new_text` (pure deletion) contributes no range.
/// 2. An explicit tool-supplied range is emitted verbatim.
/// 3. With `old_text` present and `new_text` found verbatim in
///    `file_content`, a greedy line alignment marks lines of `new_text`
///    that also appear (in order) in `old_text` as context; the rest are
///    attributed. A no-op edit yields nothing.
/// 4. Otherwise the whole `new_text` becomes one range, anchored at its
///    first occurrence in `file_content` when findable, else at line 1.
///
/// The alignment is greedy and can misattribute pathological inputs with
/// many repeated identical lines; that is an accepted trade-off over a
/// full edit-script diff. This function never fails: every input maps to
/// zero or more ranges, each with `start_line <= end_line`.
pub fn compute_ranges(edits: &[TextEdit], file_content: Option<&str>) -> Vec<Range> {
    let mut ranges = Vec::new();

    for edit in edits {
        if edit.new_text.is_empty() {
            continue;
        }

        if let Some((start, end)) = edit.range {
            ranges.push(Range::new(start, end));
            continue;
        }

        if !edit.old_text.is_empty()
            && let Some(content) = file_content
            && let Some(offset) = content.find(&edit.new_text)
        {
            let anchor = line_at_offset(content, offset);
            let changed = align_changed_lines(&edit.old_text, &edit.new_text);
            ranges.extend(merge_offsets(&changed, anchor));
            continue;
        }

        // Degraded path: no usable alignment, attribute all of new_text.
        let anchor = match file_content.and_then(|c| c.find(&edit.new_text).map(|o| (c, o))) {
            Some((content, offset)) => line_at_offset(content, offset),
            None => 1,
        };
        let line_count = edit.new_text.lines().count().max(1) as u32;
        ranges.push(Range::new(anchor, anchor + line_count - 1));
    }

    ranges
}

/// 1-indexed line number of the byte at `offset`
fn line_at_offset(content: &str, offset: usize) -> u32 {
    content[..offset].bytes().filter(|b| *b == b'\n').count() as u32 + 1
}

/// Greedy forward alignment of `new` against `old`.
///
/// Returns the 0-indexed offsets of `new` lines with no matching line in
/// the unconsumed remainder of `old`. A match found further ahead in `old`
/// is treated as a realignment point: the skipped old lines are considered
/// deleted and the matching new line stays context.
fn align_changed_lines(old: &str, new: &str) -> Vec<usize> {
    let old_lines: Vec<&str> = old.lines().collect();
    let mut old_idx = 0;
    let mut changed = Vec::new();

    for (new_idx, new_line) in new.lines().enumerate() {
        if old_idx < old_lines.len() && old_lines[old_idx] == new_line {
            old_idx += 1;
            continue;
        }

        match (old_idx..old_lines.len()).find(|&i| old_lines[i] == new_line) {
            Some(found) => {
                // Realignment: lines old_idx..found were deleted.
                old_idx = found + 1;
            }
            None => changed.push(new_idx),
        }
    }

    changed
}

/// Merge adjacent 0-indexed line offsets into inclusive 1-indexed ranges,
/// shifted so that offset 0 lands on `anchor`.
fn merge_offsets(offsets: &[usize], anchor: u32) -> Vec<Range> {
    let mut ranges: Vec<Range> = Vec::new();

    for &offset in offsets {
        let line = anchor + offset as u32;
        match ranges.last_mut() {
            Some(last) if last.end_line + 1 == line => last.end_line = line,
            _ => ranges.push(Range::new(line, line)),
        }
    }

    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_changed_line() {
        let edits = vec![TextEdit::replace("line1\nline2\nline3", "line1\nNEW\nline3")];
        let content = "line1\nNEW\nline3";

        let ranges = compute_ranges(&edits, Some(content));
        assert_eq!(ranges, vec![Range::new(2, 2)]);
    }

    #[test]
    fn test_noop_edit_yields_nothing() {
        let edits = vec![TextEdit::replace("same\ntext", "same\ntext")];
        let ranges = compute_ranges(&edits, Some("same\ntext"));
        assert!(ranges.is_empty());
    }

    #[test]
    fn test_empty_new_text_dropped() {
        let edits = vec![TextEdit::replace("delete me", "")];
        let ranges = compute_ranges(&edits, Some("other content"));
        assert!(ranges.is_empty());
    }

    #[test]
    fn test_explicit_range_trusted_verbatim() {
        let edits = vec![TextEdit {
            old_text: "a".to_string(),
            new_text: "a".to_string(),
            range: Some((10, 20)),
        }];

        let ranges = compute_ranges(&edits, None);
        assert_eq!(ranges, vec![Range::new(10, 20)]);
    }

    #[test]
    fn test_insertion_anchored_in_file() {
        let content = "line 1\nmulti\nline\ncontent\nline 5";
        let edits = vec![TextEdit::insert("multi\nline\ncontent")];

        let ranges = compute_ranges(&edits, Some(content));
        assert_eq!(ranges, vec![Range::new(2, 4)]);
    }

    #[test]
    fn test_fallback_without_file_content() {
        let edits = vec![TextEdit::replace("old", "one\ntwo\nthree")];
        let ranges = compute_ranges(&edits, None);
        assert_eq!(ranges, vec![Range::new(1, 3)]);
    }

    #[test]
    fn test_fallback_new_text_not_in_file() {
        // new_text no longer matches the file (e.g. the file changed again
        // before the hook ran); attribute best-effort at line 1.
        let edits = vec![TextEdit::replace("old", "replacement\nlines")];
        let ranges = compute_ranges(&edits, Some("completely different"));
        assert_eq!(ranges, vec![Range::new(1, 2)]);
    }

    #[test]
    fn test_non_adjacent_changes_split_ranges() {
        let old = "a\nb\nc\nd\ne";
        let new = "X\nb\nc\nY\ne";
        let content = "X\nb\nc\nY\ne";

        let ranges = compute_ranges(&[TextEdit::replace(old, new)], Some(content));
        assert_eq!(ranges, vec![Range::new(1, 1), Range::new(4, 4)]);
    }

    #[test]
    fn test_adjacent_changes_merge() {
        let old = "keep\na\nb\nkeep2";
        let new = "keep\nX\nY\nkeep2";
        let content = "prefix\nkeep\nX\nY\nkeep2\nsuffix";

        let ranges = compute_ranges(&[TextEdit::replace(old, new)], Some(content));
        assert_eq!(ranges, vec![Range::new(3, 4)]);
    }

    #[test]
    fn test_deleted_lines_realign_context() {
        // "gone" was deleted; the surviving lines must stay unattributed.
        let old = "first\ngone\nlast";
        let new = "first\nlast";
        let content = "first\nlast";

        let ranges = compute_ranges(&[TextEdit::replace(old, new)], Some(content));
        assert!(ranges.is_empty());
    }

    #[test]
    fn test_appended_lines_attributed() {
        let old = "first\nsecond";
        let new = "first\nsecond\nthird\nfourth";
        let content = "first\nsecond\nthird\nfourth";

        let ranges = compute_ranges(&[TextEdit::replace(old, new)], Some(content));
        assert_eq!(ranges, vec![Range::new(3, 4)]);
    }

    #[test]
    fn test_anchor_deeper_in_file() {
        let content = "fn main() {\n    let a = 1;\n    let b = 42;\n    println!();\n}\n";
        let old = "    let a = 1;\n    let b = 2;";
        let new = "    let a = 1;\n    let b = 42;";

        let ranges = compute_ranges(&[TextEdit::replace(old, new)], Some(content));
        assert_eq!(ranges, vec![Range::new(3, 3)]);
    }

    #[test]
    fn test_multiple_edits_in_order() {
        let content = "one\nTWO\nthree\nFOUR\nfive";
        let edits = vec![
            TextEdit::replace("one\ntwo\nthree", "one\nTWO\nthree"),
            TextEdit::replace("three\nfour\nfive", "three\nFOUR\nfive"),
        ];

        let ranges = compute_ranges(&edits, Some(content));
        assert_eq!(ranges, vec![Range::new(2, 2), Range::new(4, 4)]);
    }

    #[test]
    fn test_ranges_well_formed() {
        let edits = vec![
            TextEdit::replace("a\nb", "a\nB\nc"),
            TextEdit::insert("tail"),
            TextEdit {
                old_text: String::new(),
                new_text: "x".to_string(),
                range: Some((7, 9)),
            },
        ];

        for range in compute_ranges(&edits, Some("a\nB\nc\ntail")) {
            assert!(range.start_line <= range.end_line);
            assert!(range.start_line >= 1);
        }
    }
}
