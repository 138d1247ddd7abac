pub mod dialogs;
pub mod file_ops;
mod menu;
mod toolbar;

use gtk4::gio;
use gtk4::prelude::*;
use libadwaita as adw;
use libadwaita::prelude::*;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use quill_core::closing::{self, CloseChoice, CloseOutcome};
use quill_core::document::Document;
use quill_core::fonts::FontSpec;
use quill_core::settings::Settings;
use quill_core::wintree::WindowId;

use crate::registry::SharedRegistry;

/// Everything one document window owns. Shared into signal handlers as
/// `Rc<WindowState>`; all access happens on the GTK main thread.
pub struct WindowState {
    pub id: WindowId,
    pub window: adw::ApplicationWindow,
    pub text_view: gtk4::TextView,
    pub buffer: gtk4::TextBuffer,
    pub document: RefCell<Document>,
    /// Set while the frontend itself mutates the buffer (undo/redo, initial
    /// load) so the mirror signals don't record those mutations as edits.
    pub suppress_record: Cell<bool>,
    /// Set while font controls are being synced from the document so their
    /// change signals don't loop back into another font application.
    pub syncing_controls: Cell<bool>,
    pub css_class: String,
    pub font_provider: gtk4::CssProvider,
    pub families: Vec<String>,
    pub family_dropdown: gtk4::DropDown,
    pub size_entry: gtk4::Entry,
    pub bold_button: gtk4::ToggleButton,
    pub italic_button: gtk4::ToggleButton,
    pub undo_action: gio::SimpleAction,
    pub redo_action: gio::SimpleAction,
    pub registry: SharedRegistry,
    pub settings: Rc<RefCell<Settings>>,
}

impl WindowState {
    /// Apply a new font to the document, the text view, and the toolbar.
    pub fn set_font(&self, font: FontSpec) {
        self.document.borrow_mut().set_font(font.clone());
        self.apply_font_css(&font);
        self.sync_font_controls(&font);
    }

    fn apply_font_css(&self, font: &FontSpec) {
        let css = format!(
            "textview.{} {{ font-family: \"{}\"; font-size: {}pt; font-weight: {}; font-style: {}; }}",
            self.css_class,
            font.family,
            font.size,
            if font.bold { "bold" } else { "normal" },
            if font.italic { "italic" } else { "normal" },
        );
        self.font_provider.load_from_string(&css);
    }

    /// Push the document's font back into the toolbar widgets without
    /// retriggering their handlers.
    pub fn sync_font_controls(&self, font: &FontSpec) {
        self.syncing_controls.set(true);
        self.size_entry.set_text(&font.size.to_string());
        if let Some(pos) = self.families.iter().position(|f| f == &font.family) {
            self.family_dropdown.set_selected(pos as u32);
        }
        self.bold_button.set_active(font.bold);
        self.italic_button.set_active(font.italic);
        self.syncing_controls.set(false);
    }

    pub fn update_edit_actions(&self) {
        let doc = self.document.borrow();
        self.undo_action.set_enabled(doc.can_undo());
        self.redo_action.set_enabled(doc.can_redo());
    }

    pub fn refresh_title(&self) {
        self.window.set_title(Some(&self.document.borrow().title()));
    }
}

/// Default font for a fresh document, seeded from settings.
pub fn default_font(settings: &Rc<RefCell<Settings>>) -> FontSpec {
    let s = settings.borrow();
    FontSpec {
        family: s.font_family.clone(),
        size: s.font_size,
        bold: false,
        italic: false,
    }
}

/// Build and present a document window. `parent` is the window that spawned
/// this one (ownership tree); `None` makes it a root.
pub fn open_window(
    app: &adw::Application,
    registry: &SharedRegistry,
    settings: &Rc<RefCell<Settings>>,
    parent: Option<WindowId>,
    document: Document,
) -> Rc<WindowState> {
    let id = registry.borrow_mut().allocate(parent);

    let (width, height) = {
        let s = settings.borrow();
        (s.window_width, s.window_height)
    };
    let window = adw::ApplicationWindow::builder()
        .application(app)
        .title(document.title())
        .default_width(width)
        .default_height(height)
        .build();
    window.set_icon_name(Some("accessories-text-editor"));

    let text_view = gtk4::TextView::new();
    text_view.set_wrap_mode(gtk4::WrapMode::WordChar);
    text_view.set_left_margin(8);
    text_view.set_right_margin(8);
    text_view.set_top_margin(8);
    let buffer = text_view.buffer();

    let css_class = format!("document-{}", id.raw());
    text_view.add_css_class(&css_class);
    let font_provider = gtk4::CssProvider::new();
    gtk4::style_context_add_provider_for_display(
        &text_view.display(),
        &font_provider,
        gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
    );

    let controls = toolbar::build_controls(&window, &document);

    let scroll = gtk4::ScrolledWindow::new();
    scroll.set_vexpand(true);
    scroll.set_child(Some(&text_view));

    let vbox = gtk4::Box::new(gtk4::Orientation::Vertical, 0);
    vbox.append(&adw::HeaderBar::new());
    vbox.append(&menu::build_menu_bar());
    vbox.append(&controls.container);
    vbox.append(&scroll);
    window.set_content(Some(&vbox));

    let state = Rc::new(WindowState {
        id,
        window: window.clone(),
        text_view: text_view.clone(),
        buffer: buffer.clone(),
        document: RefCell::new(document),
        suppress_record: Cell::new(false),
        syncing_controls: Cell::new(false),
        css_class,
        font_provider,
        families: controls.families,
        family_dropdown: controls.family_dropdown,
        size_entry: controls.size_entry,
        bold_button: controls.bold_button,
        italic_button: controls.italic_button,
        undo_action: gio::SimpleAction::new("undo", None),
        redo_action: gio::SimpleAction::new("redo", None),
        registry: registry.clone(),
        settings: settings.clone(),
    });
    registry.borrow_mut().register(state.clone());

    // Seed the buffer without recording history for the loaded text.
    {
        state.suppress_record.set(true);
        state.buffer.set_text(state.document.borrow().text());
        state.suppress_record.set(false);
    }

    connect_buffer_signals(&state);
    toolbar::connect_controls(&state);
    register_window_actions(&state);

    {
        let state = state.clone();
        window.connect_close_request(move |_| {
            attempt_close(&state, Box::new(|_| {}));
            gtk4::glib::Propagation::Stop
        });
    }

    let font = state.document.borrow().font().clone();
    state.apply_font_css(&font);
    state.sync_font_controls(&font);
    state.update_edit_actions();

    window.present();
    text_view.grab_focus();
    log::debug!("Opened window {:?} (parent {:?})", id, parent);
    state
}

fn connect_buffer_signals(state: &Rc<WindowState>) {
    {
        let state = state.clone();
        state.buffer.clone().connect_insert_text(move |_buf, iter, text| {
            if state.suppress_record.get() {
                return;
            }
            state
                .document
                .borrow_mut()
                .apply_insert(iter.offset() as usize, text);
        });
    }
    {
        let state = state.clone();
        state.buffer.clone().connect_delete_range(move |buf, start, end| {
            if state.suppress_record.get() {
                return;
            }
            let deleted = buf.text(start, end, true);
            state
                .document
                .borrow_mut()
                .apply_delete(start.offset() as usize, &deleted);
        });
    }
    {
        let state = state.clone();
        state.buffer.clone().connect_changed(move |_| {
            state.update_edit_actions();
        });
    }
}

fn register_window_actions(state: &Rc<WindowState>) {
    let window = &state.window;

    let save = gio::SimpleAction::new("save", None);
    {
        let state = state.clone();
        save.connect_activate(move |_, _| {
            file_ops::save_document(&state, Box::new(|_| {}));
        });
    }
    window.add_action(&save);

    let close = gio::SimpleAction::new("close", None);
    {
        let state = state.clone();
        close.connect_activate(move |_, _| {
            attempt_close(&state, Box::new(|_| {}));
        });
    }
    window.add_action(&close);

    let print = gio::SimpleAction::new("print", None);
    {
        let state = state.clone();
        print.connect_activate(move |_, _| {
            crate::print::print_document(&state);
        });
    }
    window.add_action(&print);

    {
        let state_undo = state.clone();
        state.undo_action.connect_activate(move |_, _| {
            perform_undo(&state_undo);
        });
        window.add_action(&state.undo_action);

        let state_redo = state.clone();
        state.redo_action.connect_activate(move |_, _| {
            perform_redo(&state_redo);
        });
        window.add_action(&state.redo_action);
    }

    let toggle_bold = gio::SimpleAction::new("toggle-bold", None);
    {
        let state = state.clone();
        toggle_bold.connect_activate(move |_, _| {
            state.bold_button.set_active(!state.bold_button.is_active());
        });
    }
    window.add_action(&toggle_bold);

    let toggle_italic = gio::SimpleAction::new("toggle-italic", None);
    {
        let state = state.clone();
        toggle_italic.connect_activate(move |_, _| {
            state
                .italic_button
                .set_active(!state.italic_button.is_active());
        });
    }
    window.add_action(&toggle_italic);

    let decrease = gio::SimpleAction::new("decrease-font-size", None);
    {
        let state = state.clone();
        decrease.connect_activate(move |_, _| adjust_font_size(&state, -1));
    }
    window.add_action(&decrease);

    let increase = gio::SimpleAction::new("increase-font-size", None);
    {
        let state = state.clone();
        increase.connect_activate(move |_, _| adjust_font_size(&state, 1));
    }
    window.add_action(&increase);

    let set_size = gio::SimpleAction::new("set-font-size", Some(gtk4::glib::VariantTy::INT32));
    {
        let state = state.clone();
        set_size.connect_activate(move |_, param| {
            if let Some(size) = param.and_then(|v| v.get::<i32>()) {
                let mut font = state.document.borrow().font().clone();
                font.size = size;
                state.set_font(font);
            }
        });
    }
    window.add_action(&set_size);

    let minimize = gio::SimpleAction::new("minimize", None);
    {
        let window = window.clone();
        minimize.connect_activate(move |_, _| window.minimize());
    }
    window.add_action(&minimize);

    let zoom = gio::SimpleAction::new("zoom", None);
    {
        let window = window.clone();
        zoom.connect_activate(move |_, _| {
            if window.is_maximized() {
                window.unmaximize();
            } else {
                window.maximize();
            }
        });
    }
    window.add_action(&zoom);
}

pub(crate) fn adjust_font_size(state: &Rc<WindowState>, delta: i32) {
    let mut font = state.document.borrow().font().clone();
    font.step_size(delta);
    state.set_font(font);
}

fn perform_undo(state: &Rc<WindowState>) {
    let edit = state.document.borrow_mut().undo();
    if let Some(edit) = edit {
        state.suppress_record.set(true);
        let pos = edit.pos as i32;
        if !edit.inserted.is_empty() {
            let mut start = state.buffer.iter_at_offset(pos);
            let mut end = state
                .buffer
                .iter_at_offset(pos + edit.inserted.chars().count() as i32);
            state.buffer.delete(&mut start, &mut end);
        }
        if !edit.deleted.is_empty() {
            let mut at = state.buffer.iter_at_offset(pos);
            state.buffer.insert(&mut at, &edit.deleted);
        }
        state.suppress_record.set(false);
    }
    state.update_edit_actions();
}

fn perform_redo(state: &Rc<WindowState>) {
    let edit = state.document.borrow_mut().redo();
    if let Some(edit) = edit {
        state.suppress_record.set(true);
        let pos = edit.pos as i32;
        if !edit.deleted.is_empty() {
            let mut start = state.buffer.iter_at_offset(pos);
            let mut end = state
                .buffer
                .iter_at_offset(pos + edit.deleted.chars().count() as i32);
            state.buffer.delete(&mut start, &mut end);
        }
        if !edit.inserted.is_empty() {
            let mut at = state.buffer.iter_at_offset(pos);
            state.buffer.insert(&mut at, &edit.inserted);
        }
        state.suppress_record.set(false);
    }
    state.update_edit_actions();
}

/// Try to close one window, prompting if it has unsaved changes. `on_done`
/// reports whether the window actually closed — quit sequencing keys off it.
pub fn attempt_close(state: &Rc<WindowState>, on_done: Box<dyn FnOnce(bool)>) {
    if !state.document.borrow().is_modified() {
        force_close(state);
        on_done(true);
        return;
    }

    let title = state.document.borrow().title();
    let state = state.clone();
    dialogs::confirm_close(&state.window.clone(), &title, move |choice| match choice {
        CloseChoice::Save => {
            let state_after = state.clone();
            file_ops::save_document(
                &state,
                Box::new(move |saved| {
                    match closing::resolve(CloseChoice::Save, || saved) {
                        CloseOutcome::Close => {
                            force_close(&state_after);
                            on_done(true);
                        }
                        CloseOutcome::KeepOpen => on_done(false),
                    }
                }),
            );
        }
        choice => match closing::resolve(choice, || false) {
            CloseOutcome::Close => {
                force_close(&state);
                on_done(true);
            }
            CloseOutcome::KeepOpen => on_done(false),
        },
    });
}

/// Tear a window down unconditionally: remember its geometry and font as
/// the new defaults, drop it from the registry, destroy the widget.
pub fn force_close(state: &Rc<WindowState>) {
    {
        let mut s = state.settings.borrow_mut();
        s.window_width = state.window.width();
        s.window_height = state.window.height();
        let font = state.document.borrow().font().clone();
        s.font_family = font.family;
        s.font_size = font.size;
        quill_core::settings::save(&s);
    }
    state.registry.borrow_mut().remove(state.id);
    state.window.destroy();
    log::debug!("Closed window {:?}", state.id);
}
