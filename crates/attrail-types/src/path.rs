use std::path::Path;

/// Convert a path to workspace-relative form when it falls under `root`.
///
/// Paths outside the workspace root (or unrelated relative paths) are kept
/// as supplied, so the caller never loses information.
pub fn relativize(path: &Path, root: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(relative) => relative.to_string_lossy().into_owned(),
        Err(_) => path.to_string_lossy().into_owned(),
    }
}
