use gtk4::gio;
use gtk4::prelude::*;
use libadwaita as adw;

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use quill_core::document::Document;
use quill_core::settings::Settings;

use crate::registry::SharedRegistry;

use super::{dialogs, WindowState};

/// Open flow: file dialog → read the whole file → new window. A failed
/// read surfaces a dialog and changes nothing.
pub(crate) fn open_document(
    app: &adw::Application,
    registry: &SharedRegistry,
    settings: &Rc<RefCell<Settings>>,
) {
    let dialog = gtk4::FileDialog::builder().title("Open Document").build();
    seed_initial_folder(&dialog, settings);

    let parent = app.active_window();
    let app = app.clone();
    let registry = registry.clone();
    let settings = settings.clone();
    dialog.open(parent.as_ref(), gio::Cancellable::NONE, move |result| {
        let file = match result {
            Ok(file) => file,
            Err(e) => {
                log::debug!("Open dialog dismissed: {}", e);
                return;
            }
        };
        let Some(path) = file.path() else {
            return;
        };
        remember_directory(&settings, &path);

        let font = super::default_font(&settings);
        match Document::from_file(&path, font) {
            Ok(document) => {
                let parent_id = app
                    .active_window()
                    .and_then(|w| registry.borrow().id_for_window(&w));
                super::open_window(&app, &registry, &settings, parent_id, document);
            }
            Err(e) => {
                log::warn!("{}", e);
                dialogs::message_dialog(
                    app.active_window().as_ref(),
                    "Open",
                    "Unable to open file.",
                );
            }
        }
    });
}

/// Save flow: always asks for the destination (seeded with the document's
/// current path or title), then writes the whole buffer. `on_done` receives
/// whether the text reached disk — a dismissed dialog counts as `false`.
pub(crate) fn save_document(state: &Rc<WindowState>, on_done: Box<dyn FnOnce(bool)>) {
    let dialog = gtk4::FileDialog::builder().title("Save Document").build();
    {
        let doc = state.document.borrow();
        match doc.path() {
            Some(path) => {
                if let Some(parent) = path.parent() {
                    dialog.set_initial_folder(Some(&gio::File::for_path(parent)));
                }
                if let Some(name) = path.file_name() {
                    dialog.set_initial_name(Some(&name.to_string_lossy()));
                }
            }
            None => {
                seed_initial_folder(&dialog, &state.settings);
                dialog.set_initial_name(Some(&doc.title()));
            }
        }
    }

    let parent = state.window.clone();
    let state = state.clone();
    dialog.save(
        Some(&parent),
        gio::Cancellable::NONE,
        move |result| {
            let saved = match result {
                Ok(file) => match file.path() {
                    Some(path) => match state.document.borrow_mut().save_to(&path) {
                        Ok(()) => {
                            remember_directory(&state.settings, &path);
                            true
                        }
                        Err(e) => {
                            log::warn!("{}", e);
                            dialogs::message_dialog(
                                Some(state.window.upcast_ref()),
                                "Save",
                                "Unable to save file.",
                            );
                            false
                        }
                    },
                    None => false,
                },
                Err(e) => {
                    log::debug!("Save dialog dismissed: {}", e);
                    false
                }
            };
            if saved {
                state.refresh_title();
            }
            on_done(saved);
        },
    );
}

fn seed_initial_folder(dialog: &gtk4::FileDialog, settings: &Rc<RefCell<Settings>>) {
    let dir = settings.borrow().last_directory.clone();
    if !dir.is_empty() && Path::new(&dir).is_dir() {
        dialog.set_initial_folder(Some(&gio::File::for_path(&dir)));
    }
}

fn remember_directory(settings: &Rc<RefCell<Settings>>, path: &Path) {
    if let Some(dir) = path.parent() {
        let mut s = settings.borrow_mut();
        s.last_directory = dir.to_string_lossy().to_string();
        quill_core::settings::save(&s);
    }
}
