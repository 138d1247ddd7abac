mod print;
mod quit;
mod registry;
mod window;

use gtk4::gio;
use gtk4::prelude::*;
use libadwaita as adw;

use std::cell::RefCell;
use std::rc::Rc;

use quill_core::commands;
use quill_core::document::Document;
use quill_core::settings::{self, Settings};

use registry::SharedRegistry;

const APP_ID: &str = "dev.quill.Quill";

fn main() {
    env_logger::init();

    let app = adw::Application::builder().application_id(APP_ID).build();
    let registry = registry::Registry::new_shared();
    let settings = Rc::new(RefCell::new(settings::load()));

    register_app_actions(&app, &registry, &settings);
    register_accelerators(&app);

    {
        let registry = registry.clone();
        let settings = settings.clone();
        app.connect_activate(move |app| {
            if registry.borrow().is_empty() {
                let font = window::default_font(&settings);
                window::open_window(app, &registry, &settings, None, Document::new(font));
            }
        });
    }

    app.run();
}

/// Document-less commands (New, Open, Help) plus the app-lifecycle pair
/// (About, Quit). Everything else is a per-window action.
fn register_app_actions(
    app: &adw::Application,
    registry: &SharedRegistry,
    settings: &Rc<RefCell<Settings>>,
) {
    let new_action = gio::SimpleAction::new("new", None);
    {
        let app = app.clone();
        let registry = registry.clone();
        let settings = settings.clone();
        new_action.connect_activate(move |_, _| {
            // A new document belongs to the window that spawned it.
            let parent = app
                .active_window()
                .and_then(|w| registry.borrow().id_for_window(&w));
            let font = window::default_font(&settings);
            window::open_window(&app, &registry, &settings, parent, Document::new(font));
        });
    }
    app.add_action(&new_action);

    let open_action = gio::SimpleAction::new("open", None);
    {
        let app = app.clone();
        let registry = registry.clone();
        let settings = settings.clone();
        open_action.connect_activate(move |_, _| {
            window::file_ops::open_document(&app, &registry, &settings);
        });
    }
    app.add_action(&open_action);

    let help_action = gio::SimpleAction::new("help", None);
    {
        let app = app.clone();
        help_action.connect_activate(move |_, _| {
            window::dialogs::show_help(app.active_window());
        });
    }
    app.add_action(&help_action);

    let about_action = gio::SimpleAction::new("about", None);
    {
        let app = app.clone();
        about_action.connect_activate(move |_, _| {
            window::dialogs::show_about(app.active_window());
        });
    }
    app.add_action(&about_action);

    let quit_action = gio::SimpleAction::new("quit", None);
    {
        let app = app.clone();
        let registry = registry.clone();
        quit_action.connect_activate(move |_, _| {
            quit::request_quit(&app, &registry);
        });
    }
    app.add_action(&quit_action);
}

fn register_accelerators(app: &adw::Application) {
    for cmd in commands::COMMANDS {
        if !cmd.accel.is_empty() {
            app.set_accels_for_action(cmd.action, &[cmd.accel]);
        }
    }
    app.set_accels_for_action("app.quit", &["<Ctrl>q"]);
}
