use std::path::{Path, PathBuf};

use crate::fonts::FontSpec;
use crate::storage;
use crate::undo::{Edit, History};

pub const UNTITLED: &str = "Untitled";

/// One open document: the edited text, where it lives on disk (if anywhere),
/// the font it is displayed in, and its undo history. The frontend keeps the
/// widget buffer and this text in lockstep by mirroring every mutation
/// through `apply_insert`/`apply_delete`.
#[derive(Debug, Default)]
pub struct Document {
    text: String,
    path: Option<PathBuf>,
    font: FontSpec,
    modified: bool,
    history: History,
}

impl Document {
    pub fn new(font: FontSpec) -> Document {
        Document {
            font,
            ..Document::default()
        }
    }

    /// Load a document from disk. The whole file is read into memory.
    pub fn from_file(path: &Path, font: FontSpec) -> Result<Document, String> {
        let text = storage::read_document(path)?;
        Ok(Document {
            text,
            path: Some(path.to_path_buf()),
            font,
            modified: false,
            history: History::new(),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Window title: the file name if the document has one, `"Untitled"`
    /// otherwise.
    pub fn title(&self) -> String {
        self.path
            .as_deref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| UNTITLED.to_string())
    }

    pub fn font(&self) -> &FontSpec {
        &self.font
    }

    pub fn set_font(&mut self, font: FontSpec) {
        self.font = font;
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Mirror an insertion the widget already performed at char offset `pos`.
    pub fn apply_insert(&mut self, pos: usize, inserted: &str) {
        let edit = Edit::insertion(pos, inserted);
        edit.apply(&mut self.text);
        self.history.record(edit);
        self.modified = true;
    }

    /// Mirror a deletion the widget already performed at char offset `pos`.
    /// `deleted` is the text that was removed.
    pub fn apply_delete(&mut self, pos: usize, deleted: &str) {
        let edit = Edit::deletion(pos, deleted);
        edit.apply(&mut self.text);
        self.history.record(edit);
        self.modified = true;
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Step the history backward. Returns the reverted edit so the caller
    /// can mirror it into the widget buffer.
    pub fn undo(&mut self) -> Option<Edit> {
        let edit = self.history.undo(&mut self.text)?;
        self.modified = true;
        Some(edit)
    }

    /// Step the history forward again.
    pub fn redo(&mut self) -> Option<Edit> {
        let edit = self.history.redo(&mut self.text)?;
        self.modified = true;
        Some(edit)
    }

    /// Write the full text to `path`. On success the document adopts the
    /// path (the title follows) and is no longer considered modified.
    pub fn save_to(&mut self, path: &Path) -> Result<(), String> {
        storage::write_document(path, &self.text)?;
        self.path = Some(path.to_path_buf());
        self.modified = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untitled_until_saved() {
        let mut doc = Document::new(FontSpec::default());
        assert_eq!(doc.title(), UNTITLED);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        doc.apply_insert(0, "hello");
        doc.save_to(&path).unwrap();
        assert_eq!(doc.title(), "notes.txt");
        assert!(!doc.is_modified());
    }

    #[test]
    fn failed_save_keeps_state_unchanged() {
        let mut doc = Document::new(FontSpec::default());
        doc.apply_insert(0, "hello");
        let err = doc.save_to(Path::new("/definitely/missing/dir/doc.txt"));
        assert!(err.is_err());
        assert_eq!(doc.title(), UNTITLED);
        assert!(doc.is_modified());
    }

    #[test]
    fn save_then_reload_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.txt");

        let mut doc = Document::new(FontSpec::default());
        doc.apply_insert(0, "hello");
        doc.save_to(&path).unwrap();

        let reloaded = Document::from_file(&path, FontSpec::default()).unwrap();
        assert_eq!(reloaded.text(), "hello");
        assert_eq!(reloaded.title(), "doc.txt");
        assert!(!reloaded.is_modified());
    }

    #[test]
    fn undo_and_redo_mirror_through_the_document() {
        let mut doc = Document::new(FontSpec::default());
        doc.apply_insert(0, "hello");
        doc.apply_insert(5, " world");
        assert_eq!(doc.text(), "hello world");

        let edit = doc.undo().unwrap();
        assert_eq!(edit.inserted, " world");
        assert_eq!(doc.text(), "hello");

        doc.redo().unwrap();
        assert_eq!(doc.text(), "hello world");
    }

    #[test]
    fn edit_after_undo_truncates_redo() {
        let mut doc = Document::new(FontSpec::default());
        doc.apply_insert(0, "ab");
        doc.apply_insert(2, "cd");
        doc.undo().unwrap();
        assert!(doc.can_redo());
        doc.apply_insert(2, "XY");
        assert!(!doc.can_redo());
        assert_eq!(doc.text(), "abXY");
    }

    #[test]
    fn rejected_font_size_leaves_font_unchanged() {
        use crate::fonts;

        let mut doc = Document::new(FontSpec::default());
        let before = doc.font().clone();
        // The toolbar only applies a parsed size; a parse failure never
        // reaches set_font.
        if let Ok(size) = fonts::parse_size("not a number") {
            let mut font = doc.font().clone();
            font.size = size;
            doc.set_font(font);
        }
        assert_eq!(doc.font(), &before);
    }
}
