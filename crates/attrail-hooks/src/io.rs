use std::path::Path;

/// Read a file's content if it exists and is readable.
///
/// A missing or unreadable target is not an error at this layer; it only
/// drops the diff engine down to its whole-text fallback.
pub fn read_file_if_present(path: &Path) -> Option<String> {
    std::fs::read_to_string(path).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.txt");
        std::fs::write(&path, "content").unwrap();

        assert_eq!(read_file_if_present(&path), Some("content".to_string()));
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        assert_eq!(read_file_if_present(&dir.path().join("absent.txt")), None);
    }
}
