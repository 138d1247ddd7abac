use gtk4::prelude::*;
use libadwaita as adw;
use libadwaita::prelude::*;

use std::cell::Cell;
use std::rc::Rc;

use quill_core::closing::CloseChoice;
use quill_core::help;

/// A single-button informational dialog, also used for error surfaces.
pub(crate) fn message_dialog(parent: Option<&gtk4::Window>, heading: &str, body: &str) {
    let dialog = adw::AlertDialog::builder().heading(heading).body(body).build();
    dialog.add_response("ok", "OK");
    dialog.set_default_response(Some("ok"));
    dialog.set_close_response("ok");
    present_on(&dialog, parent);
}

/// Three-way close confirmation. `on_choice` runs exactly once, with
/// Cancel for a dismissed dialog.
pub(crate) fn confirm_close<F>(window: &adw::ApplicationWindow, title: &str, on_choice: F)
where
    F: FnOnce(CloseChoice) + 'static,
{
    let dialog = adw::AlertDialog::builder()
        .heading("Unsaved Changes")
        .body(format!("Do you want to save \"{}\" before closing?", title))
        .build();
    dialog.add_response("cancel", "Cancel");
    dialog.add_response("discard", "Don't Save");
    dialog.add_response("save", "Save");
    dialog.set_response_appearance("discard", adw::ResponseAppearance::Destructive);
    dialog.set_response_appearance("save", adw::ResponseAppearance::Suggested);
    dialog.set_default_response(Some("save"));
    dialog.set_close_response("cancel");

    let boxed: Box<dyn FnOnce(CloseChoice)> = Box::new(on_choice);
    let callback = Rc::new(Cell::new(Some(boxed)));
    dialog.connect_response(None, move |_dialog, response| {
        let choice = match response {
            "save" => CloseChoice::Save,
            "discard" => CloseChoice::Discard,
            _ => CloseChoice::Cancel,
        };
        if let Some(cb) = callback.take() {
            cb(choice);
        }
    });
    dialog.present(Some(window));
}

/// The trivia-gated help prompt.
pub(crate) fn show_help(parent: Option<gtk4::Window>) {
    let entry = gtk4::Entry::new();
    entry.set_placeholder_text(Some("Answer"));

    let dialog = adw::AlertDialog::builder()
        .heading("Help")
        .body(help::QUESTION)
        .build();
    dialog.set_extra_child(Some(&entry));
    dialog.add_response("cancel", "Cancel");
    dialog.add_response("answer", "Answer");
    dialog.set_default_response(Some("answer"));
    dialog.set_close_response("cancel");

    let verdict_parent = parent.clone();
    dialog.connect_response(None, move |_dialog, response| {
        if response == "answer" {
            let verdict = help::evaluate_answer(&entry.text());
            message_dialog(verdict_parent.as_ref(), "Help", verdict);
        }
    });
    present_on(&dialog, parent.as_ref());
}

pub(crate) fn show_about(parent: Option<gtk4::Window>) {
    let dialog = adw::AboutDialog::builder()
        .application_name("Quill")
        .application_icon("accessories-text-editor")
        .version(env!("CARGO_PKG_VERSION"))
        .developer_name("The Quill Contributors")
        .comments("A small word processor: fonts, undo, printing, and not much else.")
        .build();
    match parent.as_ref() {
        Some(window) => dialog.present(Some(window)),
        None => dialog.present(None::<&gtk4::Widget>),
    }
}

fn present_on(dialog: &adw::AlertDialog, parent: Option<&gtk4::Window>) {
    match parent {
        Some(window) => dialog.present(Some(window)),
        None => dialog.present(None::<&gtk4::Widget>),
    }
}
