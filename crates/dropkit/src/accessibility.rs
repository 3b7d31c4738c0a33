//! AccessKit tree fragments for the select menu.
//!
//! The widget exposes three kinds of nodes: the trigger button, the listbox
//! panel, and one option node per entry. The trigger always advertises that
//! it pops up a listbox; while the panel is open the trigger additionally
//! reports expanded state and `controls` the panel node, and the panel
//! reports the keyboard-focused option as its active descendant. Assistive
//! technology can discover the whole relationship from the trigger alone.
//!
//! The host assigns each widget a contiguous block of node ids via
//! [`MenuNodeIds`] and splices the returned fragment into its own tree
//! update.

use accesskit::{HasPopup, Node, NodeId, Role};

use crate::option::OptionLabel;
use crate::select_menu::SelectMenu;

/// Accessible roles used by the select menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessibleRole {
    /// The trigger button.
    Button,
    /// The options panel.
    ListBox,
    /// One option in the panel.
    ListBoxOption,
}

impl AccessibleRole {
    /// Convert to the AccessKit role.
    pub fn to_accesskit_role(self) -> Role {
        match self {
            Self::Button => Role::Button,
            Self::ListBox => Role::ListBox,
            Self::ListBoxOption => Role::ListBoxOption,
        }
    }
}

/// Node id block for one select menu.
///
/// Ids are `base`, `base + 1`, and `base + 2 + i` for the trigger, panel,
/// and option `i` respectively. The host must reserve `2 + option count`
/// consecutive ids per widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuNodeIds {
    base: u64,
}

impl MenuNodeIds {
    /// Create an id block starting at `base`.
    pub fn new(base: u64) -> Self {
        Self { base }
    }

    /// The trigger button's node id.
    pub fn trigger(&self) -> NodeId {
        NodeId(self.base)
    }

    /// The panel's node id.
    pub fn panel(&self) -> NodeId {
        NodeId(self.base + 1)
    }

    /// The node id of the option at the given full-list index.
    pub fn option(&self, index: usize) -> NodeId {
        NodeId(self.base + 2 + index as u64)
    }
}

/// Build the accessibility tree fragment for a select menu.
///
/// Returns `(id, node)` pairs ready to splice into a `TreeUpdate`. A closed
/// menu contributes only its trigger node; an open menu adds the panel and
/// every option.
pub fn build_menu_nodes(menu: &SelectMenu, ids: MenuNodeIds) -> Vec<(NodeId, Node)> {
    let mut nodes = Vec::with_capacity(if menu.is_open() {
        2 + menu.options().len()
    } else {
        1
    });

    nodes.push((ids.trigger(), build_trigger_node(menu, ids)));

    if menu.is_open() {
        nodes.push((ids.panel(), build_panel_node(menu, ids)));
        let selected = menu.selected_index();
        for (index, _) in menu.options().iter().enumerate() {
            nodes.push((
                ids.option(index),
                build_option_node(menu, index, selected == Some(index)),
            ));
        }
    }

    nodes
}

fn build_trigger_node(menu: &SelectMenu, ids: MenuNodeIds) -> Node {
    let mut node = Node::new(AccessibleRole::Button.to_accesskit_role());
    node.set_label(menu.trigger_label());
    node.set_has_popup(HasPopup::Listbox);
    node.set_expanded(menu.is_open());
    if menu.is_disabled() {
        node.set_disabled();
    }
    if menu.is_open() {
        node.set_controls(vec![ids.panel()]);
    }
    node
}

fn build_panel_node(menu: &SelectMenu, ids: MenuNodeIds) -> Node {
    let mut node = Node::new(AccessibleRole::ListBox.to_accesskit_role());
    let children: Vec<NodeId> = (0..menu.options().len()).map(|i| ids.option(i)).collect();
    node.set_children(children);
    if let Ok(focused) = usize::try_from(menu.focused_index()) {
        node.set_active_descendant(ids.option(focused));
    }
    node
}

fn build_option_node(menu: &SelectMenu, index: usize, selected: bool) -> Node {
    let mut node = Node::new(AccessibleRole::ListBoxOption.to_accesskit_role());
    if let Some(option) = menu.options().get(index) {
        match option.label() {
            OptionLabel::Text(text) => node.set_label(text.as_str()),
            // Custom labels are opaque to the core; the value is the best
            // available accessible name.
            OptionLabel::Custom(_) => node.set_label(option.value()),
        }
        node.set_selected(selected);
        if option.is_disabled() {
            node.set_disabled();
        }
    }
    node
}
