use libadwaita as adw;
use libadwaita::prelude::*;

use std::collections::VecDeque;

use quill_core::wintree::WindowId;

use crate::registry::SharedRegistry;
use crate::window;

/// Quit the application by attempting to close every window, children
/// before parents. The first refusal (Cancel, or a failed save) aborts the
/// quit; every remaining window stays open and unchanged.
pub(crate) fn request_quit(app: &adw::Application, registry: &SharedRegistry) {
    let order: VecDeque<WindowId> = registry.borrow().quit_order().into();
    close_next(app.clone(), registry.clone(), order);
}

fn close_next(app: adw::Application, registry: SharedRegistry, mut remaining: VecDeque<WindowId>) {
    let Some(id) = remaining.pop_front() else {
        app.quit();
        return;
    };

    let state = registry.borrow().get(id);
    match state {
        Some(state) => {
            window::attempt_close(
                &state,
                Box::new(move |closed| {
                    if closed {
                        close_next(app, registry, remaining);
                    } else {
                        log::info!("Quit aborted by window {:?}", id);
                    }
                }),
            );
        }
        // Window already gone (closed directly while quitting); skip it.
        None => close_next(app, registry, remaining),
    }
}
