//! Submenu accordion logic over an abstract menu tree.
//!
//! The DOM binding implements [`MenuTree`] over real elements; tests and
//! headless callers use [`MenuArena`](crate::arena::MenuArena). The
//! traversal rule is the same for both: the siblings of a menu item are the
//! menu-item children of its parent node.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

/// Read/write access to a tree of menu items, toggles and links.
pub trait MenuTree {
    /// Handle to a node. Cheap to clone; equality means "same node".
    type Node: Clone + PartialEq;

    /// The nearest menu item containing `node`, starting with `node` itself.
    fn enclosing_item(&self, node: &Self::Node) -> Option<Self::Node>;

    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;

    /// Immediate children of `node`, in document order.
    fn children(&self, node: &Self::Node) -> Vec<Self::Node>;

    fn is_menu_item(&self, node: &Self::Node) -> bool;

    fn is_expanded(&self, item: &Self::Node) -> bool;

    fn set_expanded(&mut self, item: &Self::Node, expanded: bool);

    /// The item's own submenu toggle (a direct child), if it has one.
    fn toggle_of(&self, item: &Self::Node) -> Option<Self::Node>;

    fn set_aria_expanded(&mut self, toggle: &Self::Node, expanded: bool);
}

/// `aria-expanded` attribute value for a boolean state.
#[must_use]
pub fn aria_value(expanded: bool) -> &'static str {
    if expanded { "true" } else { "false" }
}

/// Expanded menu items at the same level as `item`, including `item` itself if expanded.
///
/// A node without a parent has no siblings.
pub fn expanded_siblings<T: MenuTree>(tree: &T, item: &T::Node) -> Vec<T::Node> {
    let Some(parent) = tree.parent(item) else {
        return Vec::new();
    };
    tree.children(&parent)
        .into_iter()
        .filter(|n| tree.is_menu_item(n) && tree.is_expanded(n))
        .collect()
}

/// Handle a click on a submenu toggle.
///
/// Collapses every other expanded sibling of the toggle's menu item, then
/// flips the item itself and mirrors the result into the toggle's
/// `aria-expanded`. Returns the item's new state, or `None` when the toggle
/// is not inside a menu item (nothing is mutated).
pub fn toggle_submenu<T: MenuTree>(tree: &mut T, toggle: &T::Node) -> Option<bool> {
    let item = tree.enclosing_item(toggle)?;

    for sibling in expanded_siblings(tree, &item) {
        if sibling == item {
            continue;
        }
        tree.set_expanded(&sibling, false);
        if let Some(sibling_toggle) = tree.toggle_of(&sibling) {
            tree.set_aria_expanded(&sibling_toggle, false);
        }
    }

    let expanded = !tree.is_expanded(&item);
    tree.set_expanded(&item, expanded);
    tree.set_aria_expanded(toggle, expanded);
    Some(expanded)
}

/// The submenu toggle sharing a menu item with `link`.
pub fn sibling_toggle<T: MenuTree>(tree: &T, link: &T::Node) -> Option<T::Node> {
    let item = tree.enclosing_item(link)?;
    tree.toggle_of(&item)
}

/// Activate a placeholder parent link: behaves exactly like clicking its sibling toggle.
///
/// Returns `None` when the link has no sibling toggle, or when the link is
/// itself the item's toggle (its own toggle handler already ran for this click).
pub fn activate_parent_link<T: MenuTree>(tree: &mut T, link: &T::Node) -> Option<bool> {
    let toggle = sibling_toggle(tree, link)?;
    if toggle == *link {
        return None;
    }
    toggle_submenu(tree, &toggle)
}

/// Whether `href` is a non-navigating placeholder.
///
/// Comparison ignores surrounding whitespace. A missing href is not a
/// placeholder: the link was never meant to be a submenu hook.
#[must_use]
pub fn is_placeholder_href(href: Option<&str>, placeholders: &[String]) -> bool {
    href.is_some_and(|h| {
        let h = h.trim();
        placeholders.iter().any(|p| p.trim() == h)
    })
}
