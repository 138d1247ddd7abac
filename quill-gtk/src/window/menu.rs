use gtk4::gio;

use quill_core::commands;

/// Build the menu bar from the declarative command table. Sections within a
/// menu become separator-delimited groups; the File and Help menus also get
/// the app-lifecycle entries (Quit, About) that live outside the table.
pub(super) fn build_menu_bar() -> gtk4::PopoverMenuBar {
    let bar = gio::Menu::new();

    for menu_spec in commands::MENU_BAR {
        let submenu = gio::Menu::new();
        for section_ids in menu_spec.sections {
            let section = gio::Menu::new();
            for id in *section_ids {
                let cmd = commands::spec(*id);
                section.append(Some(cmd.label), Some(cmd.action));
            }
            submenu.append_section(None, &section);
        }

        if menu_spec.title == "File" {
            let section = gio::Menu::new();
            section.append(Some("Quit"), Some("app.quit"));
            submenu.append_section(None, &section);
        }
        if menu_spec.title == "Help" {
            let section = gio::Menu::new();
            section.append(Some("About Quill"), Some("app.about"));
            submenu.append_section(None, &section);
        }

        bar.append_submenu(Some(menu_spec.title), &submenu);
    }

    gtk4::PopoverMenuBar::from_model(Some(&bar))
}
