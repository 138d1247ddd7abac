//! The declarative menu-command table. The frontend builds its menu bar,
//! actions, and accelerators from these records; nothing dispatches on
//! label strings.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandId {
    New,
    Open,
    Save,
    Close,
    Print,
    Undo,
    Redo,
    ToggleBold,
    ToggleItalic,
    DecreaseFontSize,
    IncreaseFontSize,
    Minimize,
    Zoom,
    Help,
}

/// Whether a command needs an open document window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Always available, handled by the application (New, Open, Help).
    App,
    /// Requires a focused document window.
    Document,
}

pub struct CommandSpec {
    pub id: CommandId,
    pub label: &'static str,
    /// Detailed GTK action name (`app.` or `win.` prefixed to match scope).
    pub action: &'static str,
    /// GTK accelerator string; empty when the command has no shortcut.
    pub accel: &'static str,
    pub scope: Scope,
}

pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        id: CommandId::New,
        label: "New",
        action: "app.new",
        accel: "<Ctrl>n",
        scope: Scope::App,
    },
    CommandSpec {
        id: CommandId::Open,
        label: "Open",
        action: "app.open",
        accel: "<Ctrl>o",
        scope: Scope::App,
    },
    CommandSpec {
        id: CommandId::Save,
        label: "Save",
        action: "win.save",
        accel: "<Ctrl>s",
        scope: Scope::Document,
    },
    CommandSpec {
        id: CommandId::Close,
        label: "Close",
        action: "win.close",
        accel: "<Ctrl>w",
        scope: Scope::Document,
    },
    CommandSpec {
        id: CommandId::Print,
        label: "Print",
        action: "win.print",
        accel: "<Ctrl>p",
        scope: Scope::Document,
    },
    CommandSpec {
        id: CommandId::Undo,
        label: "Undo",
        action: "win.undo",
        accel: "<Ctrl>z",
        scope: Scope::Document,
    },
    CommandSpec {
        id: CommandId::Redo,
        label: "Redo",
        action: "win.redo",
        accel: "<Ctrl>y",
        scope: Scope::Document,
    },
    CommandSpec {
        id: CommandId::ToggleBold,
        label: "Toggle Bold",
        action: "win.toggle-bold",
        accel: "<Ctrl>b",
        scope: Scope::Document,
    },
    CommandSpec {
        id: CommandId::ToggleItalic,
        label: "Toggle Italic",
        action: "win.toggle-italic",
        accel: "<Ctrl>i",
        scope: Scope::Document,
    },
    CommandSpec {
        id: CommandId::DecreaseFontSize,
        label: "Decrease Font Size",
        action: "win.decrease-font-size",
        accel: "<Ctrl>bracketleft",
        scope: Scope::Document,
    },
    CommandSpec {
        id: CommandId::IncreaseFontSize,
        label: "Increase Font Size",
        action: "win.increase-font-size",
        accel: "<Ctrl>bracketright",
        scope: Scope::Document,
    },
    CommandSpec {
        id: CommandId::Minimize,
        label: "Minimize",
        action: "win.minimize",
        accel: "<Ctrl>m",
        scope: Scope::Document,
    },
    CommandSpec {
        id: CommandId::Zoom,
        label: "Zoom",
        action: "win.zoom",
        accel: "",
        scope: Scope::Document,
    },
    CommandSpec {
        id: CommandId::Help,
        label: "Help",
        action: "app.help",
        accel: "",
        scope: Scope::App,
    },
];

/// One top-level menu: a title and sections of commands (sections are
/// rendered with separators between them).
pub struct MenuSpec {
    pub title: &'static str,
    pub sections: &'static [&'static [CommandId]],
}

pub const MENU_BAR: &[MenuSpec] = &[
    MenuSpec {
        title: "File",
        sections: &[
            &[CommandId::New, CommandId::Open, CommandId::Save],
            &[CommandId::Close, CommandId::Print],
        ],
    },
    MenuSpec {
        title: "Edit",
        sections: &[
            &[CommandId::Undo, CommandId::Redo],
            &[
                CommandId::ToggleBold,
                CommandId::ToggleItalic,
                CommandId::DecreaseFontSize,
                CommandId::IncreaseFontSize,
            ],
        ],
    },
    MenuSpec {
        title: "Window",
        sections: &[&[CommandId::Minimize, CommandId::Zoom]],
    },
    MenuSpec {
        title: "Help",
        sections: &[&[CommandId::Help]],
    },
];

/// Look up the record for a command. Every `CommandId` has exactly one.
pub fn spec(id: CommandId) -> &'static CommandSpec {
    COMMANDS
        .iter()
        .find(|c| c.id == id)
        .expect("every CommandId has a table entry")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_menu_entry_has_a_command_record() {
        for menu in MENU_BAR {
            for section in menu.sections {
                for id in *section {
                    // spec() panics on a missing record.
                    let _ = spec(*id);
                }
            }
        }
    }

    #[test]
    fn accelerators_are_unique() {
        let mut seen = HashSet::new();
        for cmd in COMMANDS {
            if !cmd.accel.is_empty() {
                assert!(seen.insert(cmd.accel), "duplicate accel {}", cmd.accel);
            }
        }
    }

    #[test]
    fn action_names_are_unique_and_match_scope() {
        let mut seen = HashSet::new();
        for cmd in COMMANDS {
            assert!(seen.insert(cmd.action), "duplicate action {}", cmd.action);
            match cmd.scope {
                Scope::App => assert!(cmd.action.starts_with("app.")),
                Scope::Document => assert!(cmd.action.starts_with("win.")),
            }
        }
    }

    #[test]
    fn documentless_commands_are_exactly_new_open_help() {
        let app_scoped: Vec<CommandId> = COMMANDS
            .iter()
            .filter(|c| c.scope == Scope::App)
            .map(|c| c.id)
            .collect();
        assert_eq!(
            app_scoped,
            vec![CommandId::New, CommandId::Open, CommandId::Help]
        );
    }
}
