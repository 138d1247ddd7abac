use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gtk4::prelude::*;

use quill_core::wintree::{WindowId, WindowTree};

use crate::window::WindowState;

pub type SharedRegistry = Rc<RefCell<Registry>>;

/// All live document windows: the ownership tree plus the id → state map.
/// Lives for the whole application run on the GTK main thread.
#[derive(Default)]
pub struct Registry {
    tree: WindowTree,
    windows: HashMap<WindowId, Rc<WindowState>>,
}

impl Registry {
    pub fn new_shared() -> SharedRegistry {
        Rc::new(RefCell::new(Registry::default()))
    }

    /// Reserve an id in the ownership tree before the window is built.
    pub fn allocate(&mut self, parent: Option<WindowId>) -> WindowId {
        self.tree.insert(parent)
    }

    pub fn register(&mut self, state: Rc<WindowState>) {
        self.windows.insert(state.id, state);
    }

    /// Forget a closed window. Children are reparented inside the tree.
    pub fn remove(&mut self, id: WindowId) {
        self.tree.remove(id);
        self.windows.remove(&id);
    }

    pub fn get(&self, id: WindowId) -> Option<Rc<WindowState>> {
        self.windows.get(&id).cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Children-first close order across every window.
    pub fn quit_order(&self) -> Vec<WindowId> {
        self.tree.quit_order()
    }

    /// Map a toolkit window back to its id (used to parent new documents
    /// under the window that spawned them).
    pub fn id_for_window(&self, window: &gtk4::Window) -> Option<WindowId> {
        self.windows
            .iter()
            .find(|(_, state)| state.window.upcast_ref::<gtk4::Window>() == window)
            .map(|(id, _)| *id)
    }
}
