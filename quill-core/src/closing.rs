use crate::wintree::WindowId;

/// The user's pick in the close-confirmation dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseChoice {
    /// Save the document, then close if the save went through.
    Save,
    /// Close without saving.
    Discard,
    /// Abort the close; the window stays open and unchanged.
    Cancel,
}

/// What the window does once the dialog (and any save attempt) resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    Close,
    KeepOpen,
}

/// Resolve a close request. `attempt_save` is invoked only on the Save
/// branch; it reports whether the document actually reached disk (a
/// cancelled save dialog counts as failure).
pub fn resolve<F>(choice: CloseChoice, attempt_save: F) -> CloseOutcome
where
    F: FnOnce() -> bool,
{
    match choice {
        CloseChoice::Save => {
            if attempt_save() {
                CloseOutcome::Close
            } else {
                CloseOutcome::KeepOpen
            }
        }
        CloseChoice::Discard => CloseOutcome::Close,
        CloseChoice::Cancel => CloseOutcome::KeepOpen,
    }
}

/// Try to close every window in `order`, stopping at the first refusal.
/// Returns `Err` with the refusing window; windows after it are not
/// visited.
pub fn attempt_all<F>(order: &[WindowId], mut try_close: F) -> Result<(), WindowId>
where
    F: FnMut(WindowId) -> bool,
{
    for &id in order {
        if !try_close(id) {
            return Err(id);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wintree::WindowTree;
    use std::cell::Cell;

    #[test]
    fn save_choice_closes_only_when_save_succeeds() {
        assert_eq!(resolve(CloseChoice::Save, || true), CloseOutcome::Close);
        assert_eq!(resolve(CloseChoice::Save, || false), CloseOutcome::KeepOpen);
    }

    #[test]
    fn discard_closes_without_attempting_a_save() {
        let saved = Cell::new(false);
        let outcome = resolve(CloseChoice::Discard, || {
            saved.set(true);
            true
        });
        assert_eq!(outcome, CloseOutcome::Close);
        assert!(!saved.get());
    }

    #[test]
    fn cancel_keeps_the_window_open_and_untouched() {
        let saved = Cell::new(false);
        let outcome = resolve(CloseChoice::Cancel, || {
            saved.set(true);
            true
        });
        assert_eq!(outcome, CloseOutcome::KeepOpen);
        assert!(!saved.get());
    }

    #[test]
    fn quit_aborts_at_the_first_refusal() {
        let mut tree = WindowTree::new();
        let root = tree.insert(None);
        let child = tree.insert(Some(root));

        // The child (asked first) cancels its close: the quit aborts and
        // both windows survive.
        let mut closed = Vec::new();
        let result = attempt_all(&tree.quit_order(), |id| {
            if id == child {
                false
            } else {
                closed.push(id);
                true
            }
        });
        assert_eq!(result, Err(child));
        assert!(closed.is_empty());
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn quit_closes_everything_when_nobody_refuses() {
        let mut tree = WindowTree::new();
        let root = tree.insert(None);
        let a = tree.insert(Some(root));
        let b = tree.insert(Some(root));

        let mut closed = Vec::new();
        let result = attempt_all(&tree.quit_order(), |id| {
            closed.push(id);
            true
        });
        assert_eq!(result, Ok(()));
        assert_eq!(closed, vec![a, b, root]);
    }
}
