//! In-memory [`MenuTree`] for headless use.
//!
//! Nodes live in a flat `Vec` and refer to each other by index, so a menu
//! can be built, toggled and inspected without a browser. The node kinds
//! mirror the markup the DOM binding expects: lists containing menu items,
//! menu items containing a link, an optional toggle, and nested lists.

#[cfg(test)]
#[path = "arena_test.rs"]
mod arena_test;

use crate::menu::MenuTree;

/// Index of a node in a [`MenuArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone, PartialEq, Eq)]
enum NodeKind {
    /// Any non-item element; lists and the root.
    Container,
    Item,
    Toggle,
    Link { href: Option<String> },
}

#[derive(Debug, Clone)]
struct Node {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    expanded: bool,
    aria_expanded: Option<bool>,
}

/// A flat tree of menu nodes with a container at the root.
#[derive(Debug, Clone)]
pub struct MenuArena {
    nodes: Vec<Node>,
}

impl Default for MenuArena {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuArena {
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: vec![Node::new(NodeKind::Container, None)] }
    }

    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    // --- Building ---

    /// Add a list (or any other plain container) under `parent`.
    pub fn add_list(&mut self, parent: NodeId) -> NodeId {
        self.push(NodeKind::Container, parent)
    }

    pub fn add_item(&mut self, parent: NodeId) -> NodeId {
        self.push(NodeKind::Item, parent)
    }

    /// Add a submenu toggle; starts with `aria-expanded="false"` like server-rendered markup.
    pub fn add_toggle(&mut self, item: NodeId) -> NodeId {
        let id = self.push(NodeKind::Toggle, item);
        self.nodes[id.0].aria_expanded = Some(false);
        id
    }

    pub fn add_link(&mut self, item: NodeId, href: Option<&str>) -> NodeId {
        self.push(NodeKind::Link { href: href.map(str::to_owned) }, item)
    }

    // --- Inspection ---

    /// Whether `id` is an expanded menu item. Unknown ids are not expanded.
    #[must_use]
    pub fn expanded(&self, id: NodeId) -> bool {
        self.node(id).is_some_and(|n| n.expanded)
    }

    /// Current `aria-expanded` of a toggle; `None` if never set or unknown.
    #[must_use]
    pub fn aria_expanded(&self, id: NodeId) -> Option<bool> {
        self.node(id).and_then(|n| n.aria_expanded)
    }

    #[must_use]
    pub fn href(&self, id: NodeId) -> Option<&str> {
        match &self.node(id)?.kind {
            NodeKind::Link { href } => href.as_deref(),
            _ => None,
        }
    }

    /// Every expanded menu item, in insertion order.
    #[must_use]
    pub fn expanded_items(&self) -> Vec<NodeId> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.kind == NodeKind::Item && n.expanded)
            .map(|(i, _)| NodeId(i))
            .collect()
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    fn push(&mut self, kind: NodeKind, parent: NodeId) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(kind, Some(parent)));
        if let Some(p) = self.node_mut(parent) {
            p.children.push(id);
        }
        id
    }
}

impl Node {
    fn new(kind: NodeKind, parent: Option<NodeId>) -> Self {
        Self { kind, parent, children: Vec::new(), expanded: false, aria_expanded: None }
    }
}

impl MenuTree for MenuArena {
    type Node = NodeId;

    fn enclosing_item(&self, node: &NodeId) -> Option<NodeId> {
        let mut current = Some(*node);
        while let Some(id) = current {
            let n = self.node(id)?;
            if n.kind == NodeKind::Item {
                return Some(id);
            }
            current = n.parent;
        }
        None
    }

    fn parent(&self, node: &NodeId) -> Option<NodeId> {
        self.node(*node)?.parent
    }

    fn children(&self, node: &NodeId) -> Vec<NodeId> {
        self.node(*node).map(|n| n.children.clone()).unwrap_or_default()
    }

    fn is_menu_item(&self, node: &NodeId) -> bool {
        self.node(*node).is_some_and(|n| n.kind == NodeKind::Item)
    }

    fn is_expanded(&self, item: &NodeId) -> bool {
        self.expanded(*item)
    }

    fn set_expanded(&mut self, item: &NodeId, expanded: bool) {
        if let Some(n) = self.node_mut(*item) {
            n.expanded = expanded;
        }
    }

    fn toggle_of(&self, item: &NodeId) -> Option<NodeId> {
        self.node(*item)?
            .children
            .iter()
            .copied()
            .find(|c| self.node(*c).is_some_and(|n| n.kind == NodeKind::Toggle))
    }

    fn set_aria_expanded(&mut self, toggle: &NodeId, expanded: bool) {
        if let Some(n) = self.node_mut(*toggle) {
            n.aria_expanded = Some(expanded);
        }
    }
}
