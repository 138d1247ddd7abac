use gtk4::gio;
use gtk4::prelude::*;
use libadwaita as adw;

use std::rc::Rc;

use quill_core::document::Document;
use quill_core::fonts;

use super::{dialogs, WindowState};

pub(super) struct Controls {
    pub container: gtk4::Box,
    pub families: Vec<String>,
    pub family_dropdown: gtk4::DropDown,
    pub size_entry: gtk4::Entry,
    pub bold_button: gtk4::ToggleButton,
    pub italic_button: gtk4::ToggleButton,
}

/// Build the font toolbar: family dropdown, size entry with a preset menu,
/// and bold/italic toggles.
pub(super) fn build_controls(window: &adw::ApplicationWindow, document: &Document) -> Controls {
    let container = gtk4::Box::new(gtk4::Orientation::Horizontal, 6);
    container.add_css_class("toolbar");
    container.set_margin_start(8);
    container.set_margin_end(8);
    container.set_margin_top(4);
    container.set_margin_bottom(4);

    let mut families: Vec<String> = window
        .pango_context()
        .list_families()
        .iter()
        .map(|f| f.name().to_string())
        .collect();
    families.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()));

    let family_refs: Vec<&str> = families.iter().map(|f| f.as_str()).collect();
    let family_dropdown = gtk4::DropDown::from_strings(&family_refs);
    if let Some(pos) = families.iter().position(|f| f == &document.font().family) {
        family_dropdown.set_selected(pos as u32);
    }
    container.append(&family_dropdown);

    let size_entry = gtk4::Entry::builder()
        .max_width_chars(4)
        .width_chars(4)
        .tooltip_text("Font size")
        .build();
    size_entry.set_text(&document.font().size.to_string());
    container.append(&size_entry);

    // Preset sizes behind a menu button; each entry fires the window's
    // set-font-size action with the size as parameter.
    let preset_menu = gio::Menu::new();
    for size in fonts::PRESET_SIZES {
        let item = gio::MenuItem::new(Some(&size.to_string()), None);
        item.set_action_and_target_value(Some("win.set-font-size"), Some(&size.to_variant()));
        preset_menu.append_item(&item);
    }
    let preset_button = gtk4::MenuButton::builder()
        .icon_name("pan-down-symbolic")
        .tooltip_text("Preset sizes")
        .build();
    preset_button.set_menu_model(Some(&preset_menu));
    container.append(&preset_button);

    let bold_button = gtk4::ToggleButton::builder()
        .icon_name("format-text-bold-symbolic")
        .tooltip_text("Bold")
        .build();
    container.append(&bold_button);

    let italic_button = gtk4::ToggleButton::builder()
        .icon_name("format-text-italic-symbolic")
        .tooltip_text("Italic")
        .build();
    container.append(&italic_button);

    Controls {
        container,
        families,
        family_dropdown,
        size_entry,
        bold_button,
        italic_button,
    }
}

/// Wire the toolbar widgets to the document font. Every handler bails out
/// while `syncing_controls` is set so programmatic syncs don't loop.
pub(super) fn connect_controls(state: &Rc<WindowState>) {
    {
        let state = state.clone();
        state
            .family_dropdown
            .clone()
            .connect_selected_item_notify(move |dropdown| {
                if state.syncing_controls.get() {
                    return;
                }
                let Some(item) = dropdown.selected_item() else {
                    return;
                };
                let Ok(name) = item.downcast::<gtk4::StringObject>() else {
                    return;
                };
                let mut font = state.document.borrow().font().clone();
                font.family = name.string().to_string();
                state.set_font(font);
            });
    }

    {
        let state = state.clone();
        state.size_entry.clone().connect_activate(move |entry| {
            if state.syncing_controls.get() {
                return;
            }
            match fonts::parse_size(&entry.text()) {
                Ok(size) => {
                    let mut font = state.document.borrow().font().clone();
                    font.size = size;
                    state.set_font(font);
                }
                Err(message) => {
                    dialogs::message_dialog(
                        Some(state.window.upcast_ref()),
                        "Font Size",
                        &message,
                    );
                    // Put the document's real size back in the entry.
                    let font = state.document.borrow().font().clone();
                    state.sync_font_controls(&font);
                }
            }
        });
    }

    {
        let state = state.clone();
        state.bold_button.clone().connect_toggled(move |button| {
            if state.syncing_controls.get() {
                return;
            }
            let mut font = state.document.borrow().font().clone();
            font.bold = button.is_active();
            state.set_font(font);
        });
    }

    {
        let state = state.clone();
        state.italic_button.clone().connect_toggled(move |button| {
            if state.syncing_controls.get() {
                return;
            }
            let mut font = state.document.borrow().font().clone();
            font.italic = button.is_active();
            state.set_font(font);
        });
    }
}
