use std::fs;
use std::path::Path;

/// Read a document file wholesale into memory as UTF-8 text.
pub fn read_document(path: &Path) -> Result<String, String> {
    fs::read_to_string(path).map_err(|e| format!("Unable to open {}: {}", path.display(), e))
}

/// Write the full document text to `path`, replacing any existing content.
pub fn write_document(path: &Path, text: &str) -> Result<(), String> {
    fs::write(path, text).map_err(|e| format!("Unable to save {}: {}", path.display(), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_then_open_round_trips_exactly() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("greeting.txt");
        write_document(&path, "hello").unwrap();
        assert_eq!(read_document(&path).unwrap(), "hello");
    }

    #[test]
    fn read_missing_file_reports_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-file.txt");
        let err = read_document(&path).unwrap_err();
        assert!(err.contains("no-such-file.txt"));
    }

    #[test]
    fn write_overwrites_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.txt");
        write_document(&path, "first version").unwrap();
        write_document(&path, "second").unwrap();
        assert_eq!(read_document(&path).unwrap(), "second");
    }

    #[test]
    fn empty_document_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        write_document(&path, "").unwrap();
        assert_eq!(read_document(&path).unwrap(), "");
    }
}
