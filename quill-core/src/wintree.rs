/// Identifier for one document window. Ids are never reused within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(u64);

impl WindowId {
    /// The numeric id, for labelling window-scoped resources (CSS classes,
    /// log lines).
    pub fn raw(self) -> u64 {
        self.0
    }
}

#[derive(Debug)]
struct Node {
    id: WindowId,
    parent: Option<WindowId>,
    children: Vec<WindowId>,
}

/// Explicit ownership tree of document windows. A window created via "New"
/// becomes a child of the window that created it; closing the whole
/// application walks children before parents so every subtree gets its
/// chance to refuse.
#[derive(Debug, Default)]
pub struct WindowTree {
    next_id: u64,
    nodes: Vec<Node>,
}

impl WindowTree {
    pub fn new() -> WindowTree {
        WindowTree::default()
    }

    /// Add a window under `parent`, or as a root when `parent` is `None`
    /// (or no longer in the tree).
    pub fn insert(&mut self, parent: Option<WindowId>) -> WindowId {
        let id = WindowId(self.next_id);
        self.next_id += 1;
        let parent = parent.filter(|p| self.contains(*p));
        if let Some(p) = parent {
            if let Some(node) = self.node_mut(p) {
                node.children.push(id);
            }
        }
        self.nodes.push(Node {
            id,
            parent,
            children: Vec::new(),
        });
        id
    }

    /// Remove a closed window. Its children are handed to its parent (or
    /// become roots), so a directly-closed parent never strands a subtree.
    pub fn remove(&mut self, id: WindowId) -> bool {
        let Some(idx) = self.nodes.iter().position(|n| n.id == id) else {
            return false;
        };
        let node = self.nodes.remove(idx);
        if let Some(parent) = node.parent {
            if let Some(parent_node) = self.node_mut(parent) {
                parent_node.children.retain(|c| *c != id);
                parent_node.children.extend(node.children.iter().copied());
            }
        }
        for child in node.children {
            if let Some(child_node) = self.node_mut(child) {
                child_node.parent = node.parent;
            }
        }
        true
    }

    pub fn contains(&self, id: WindowId) -> bool {
        self.nodes.iter().any(|n| n.id == id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn parent(&self, id: WindowId) -> Option<WindowId> {
        self.node(id).and_then(|n| n.parent)
    }

    pub fn children(&self, id: WindowId) -> &[WindowId] {
        self.node(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Close order for one window: its descendants first (post-order),
    /// the window itself last.
    pub fn close_order(&self, id: WindowId) -> Vec<WindowId> {
        let mut order = Vec::new();
        self.collect_post_order(id, &mut order);
        order
    }

    /// Close order for the entire application: every root subtree,
    /// children before parents, in creation order.
    pub fn quit_order(&self) -> Vec<WindowId> {
        let mut order = Vec::new();
        let roots: Vec<WindowId> = self
            .nodes
            .iter()
            .filter(|n| n.parent.is_none())
            .map(|n| n.id)
            .collect();
        for root in roots {
            self.collect_post_order(root, &mut order);
        }
        order
    }

    fn collect_post_order(&self, id: WindowId, order: &mut Vec<WindowId>) {
        if let Some(node) = self.node(id) {
            for child in node.children.clone() {
                self.collect_post_order(child, order);
            }
            order.push(id);
        }
    }

    fn node(&self, id: WindowId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    fn node_mut(&mut self, id: WindowId) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quit_order_visits_children_before_parents() {
        let mut tree = WindowTree::new();
        let root = tree.insert(None);
        let child = tree.insert(Some(root));
        let grandchild = tree.insert(Some(child));

        assert_eq!(tree.quit_order(), vec![grandchild, child, root]);
    }

    #[test]
    fn close_order_covers_only_the_subtree() {
        let mut tree = WindowTree::new();
        let root = tree.insert(None);
        let a = tree.insert(Some(root));
        let b = tree.insert(Some(root));
        let a_child = tree.insert(Some(a));

        assert_eq!(tree.close_order(a), vec![a_child, a]);
        assert_eq!(tree.close_order(root), vec![a_child, a, b, root]);
    }

    #[test]
    fn removing_a_parent_reparents_its_children() {
        let mut tree = WindowTree::new();
        let root = tree.insert(None);
        let mid = tree.insert(Some(root));
        let leaf = tree.insert(Some(mid));

        assert!(tree.remove(mid));
        assert_eq!(tree.parent(leaf), Some(root));
        assert_eq!(tree.children(root), &[leaf]);
        assert_eq!(tree.quit_order(), vec![leaf, root]);
    }

    #[test]
    fn removing_a_root_promotes_children_to_roots() {
        let mut tree = WindowTree::new();
        let root = tree.insert(None);
        let child = tree.insert(Some(root));

        assert!(tree.remove(root));
        assert_eq!(tree.parent(child), None);
        assert_eq!(tree.quit_order(), vec![child]);
    }

    #[test]
    fn insert_under_missing_parent_becomes_root() {
        let mut tree = WindowTree::new();
        let root = tree.insert(None);
        tree.remove(root);
        let orphan = tree.insert(Some(root));
        assert_eq!(tree.parent(orphan), None);
        assert!(tree.contains(orphan));
    }

    #[test]
    fn ids_are_never_reused() {
        let mut tree = WindowTree::new();
        let a = tree.insert(None);
        tree.remove(a);
        let b = tree.insert(None);
        assert_ne!(a, b);
    }
}
