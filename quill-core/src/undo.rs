/// A single reversible buffer mutation. Offsets are in characters, matching
/// the text widget's notion of position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    /// Character offset where the mutation happened.
    pub pos: usize,
    /// Text that was removed at `pos` (empty for a pure insertion).
    pub deleted: String,
    /// Text that was inserted at `pos` (empty for a pure deletion).
    pub inserted: String,
}

impl Edit {
    pub fn insertion(pos: usize, text: &str) -> Edit {
        Edit {
            pos,
            deleted: String::new(),
            inserted: text.to_string(),
        }
    }

    pub fn deletion(pos: usize, text: &str) -> Edit {
        Edit {
            pos,
            deleted: text.to_string(),
            inserted: String::new(),
        }
    }

    /// Re-apply this edit to `text` (redo direction).
    pub fn apply(&self, text: &mut String) {
        let start = byte_index(text, self.pos);
        let end = start + self.deleted.len();
        text.replace_range(start..end, &self.inserted);
    }

    /// Undo this edit on `text`.
    pub fn revert(&self, text: &mut String) {
        let start = byte_index(text, self.pos);
        let end = start + self.inserted.len();
        text.replace_range(start..end, &self.deleted);
    }
}

fn byte_index(text: &str, char_pos: usize) -> usize {
    text.char_indices()
        .nth(char_pos)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

/// Linear undo history: an unbounded sequence of edits with a cursor.
/// Everything before the cursor can be undone, everything after it redone.
/// Recording a new edit truncates the redo branch.
#[derive(Debug, Default)]
pub struct History {
    edits: Vec<Edit>,
    applied: usize,
}

impl History {
    pub fn new() -> History {
        History::default()
    }

    /// Record an edit that has already been applied to the buffer.
    pub fn record(&mut self, edit: Edit) {
        self.edits.truncate(self.applied);
        self.edits.push(edit);
        self.applied += 1;
    }

    pub fn can_undo(&self) -> bool {
        self.applied > 0
    }

    pub fn can_redo(&self) -> bool {
        self.applied < self.edits.len()
    }

    /// Revert the most recent applied edit on `text`. Returns the edit so a
    /// caller can mirror the change into its widget.
    pub fn undo(&mut self, text: &mut String) -> Option<Edit> {
        if !self.can_undo() {
            return None;
        }
        self.applied -= 1;
        let edit = self.edits[self.applied].clone();
        edit.revert(text);
        Some(edit)
    }

    /// Re-apply the most recently undone edit on `text`.
    pub fn redo(&mut self, text: &mut String) -> Option<Edit> {
        if !self.can_redo() {
            return None;
        }
        let edit = self.edits[self.applied].clone();
        edit.apply(text);
        self.applied += 1;
        Some(edit)
    }

    pub fn clear(&mut self) {
        self.edits.clear();
        self.applied = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(history: &mut History, text: &mut String, pos: usize, s: &str) {
        let edit = Edit::insertion(pos, s);
        edit.apply(text);
        history.record(edit);
    }

    #[test]
    fn undo_then_redo_restores_exact_text() {
        let mut history = History::new();
        let mut text = String::new();
        type_text(&mut history, &mut text, 0, "hello");
        type_text(&mut history, &mut text, 5, " world");
        assert_eq!(text, "hello world");

        history.undo(&mut text);
        assert_eq!(text, "hello");
        history.redo(&mut text);
        assert_eq!(text, "hello world");
    }

    #[test]
    fn new_edit_after_undo_discards_redo() {
        let mut history = History::new();
        let mut text = String::new();
        type_text(&mut history, &mut text, 0, "abc");
        type_text(&mut history, &mut text, 3, "def");

        history.undo(&mut text);
        assert_eq!(text, "abc");
        assert!(history.can_redo());

        type_text(&mut history, &mut text, 3, "xyz");
        assert!(!history.can_redo());
        assert_eq!(text, "abcxyz");

        // The truncated branch never comes back.
        history.undo(&mut text);
        assert_eq!(text, "abc");
        history.redo(&mut text);
        assert_eq!(text, "abcxyz");
    }

    #[test]
    fn undo_deletion_restores_removed_text() {
        let mut history = History::new();
        let mut text = String::from("hello world");
        let edit = Edit::deletion(5, " world");
        edit.apply(&mut text);
        history.record(edit);
        assert_eq!(text, "hello");

        history.undo(&mut text);
        assert_eq!(text, "hello world");
    }

    #[test]
    fn undo_on_empty_history_is_a_no_op() {
        let mut history = History::new();
        let mut text = String::from("unchanged");
        assert!(history.undo(&mut text).is_none());
        assert!(history.redo(&mut text).is_none());
        assert_eq!(text, "unchanged");
    }

    #[test]
    fn char_offsets_handle_multibyte_text() {
        let mut history = History::new();
        let mut text = String::from("héllo");
        let edit = Edit::insertion(5, "!");
        edit.apply(&mut text);
        history.record(edit);
        assert_eq!(text, "héllo!");

        history.undo(&mut text);
        assert_eq!(text, "héllo");
    }

    #[test]
    fn clear_drops_both_branches() {
        let mut history = History::new();
        let mut text = String::new();
        type_text(&mut history, &mut text, 0, "abc");
        history.undo(&mut text);
        history.clear();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }
}
