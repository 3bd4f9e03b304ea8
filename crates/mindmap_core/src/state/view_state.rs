//! View-state store for one UI session.
//!
//! # Responsibility
//! - Hold the loaded root, current selection, expanded domain and sidebar flag.
//! - Derive selected domain, domain subtopics and breadcrumbs on demand.
//!
//! # Invariants
//! - `set_root` always selects the root.
//! - At most one domain is expanded at a time.
//! - Derived views are recomputed from current fields on every read, so they
//!   can never be stale.

use crate::layout::animation::NodeAnimationState;
use crate::model::node::{MindMapNode, NodeId, NodeKind};
use log::debug;
use std::collections::BTreeSet;

/// Mutable navigation state behind the map, sidebar and breadcrumb views.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    root: Option<MindMapNode>,
    selected: Option<MindMapNode>,
    expanded_domains: BTreeSet<NodeId>,
    sidebar_visible: bool,
}

impl ViewState {
    /// Creates an empty store: no root, no selection, nothing expanded.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self) -> Option<&MindMapNode> {
        self.root.as_ref()
    }

    pub fn selected(&self) -> Option<&MindMapNode> {
        self.selected.as_ref()
    }

    pub fn expanded_domains(&self) -> &BTreeSet<NodeId> {
        &self.expanded_domains
    }

    pub fn sidebar_visible(&self) -> bool {
        self.sidebar_visible
    }

    /// Installs a loaded tree and makes its root the initial selection.
    pub fn set_root(&mut self, root: MindMapNode) {
        debug!(
            "event=set_root module=state nodes={} domains={}",
            root.node_count(),
            root.domains().len()
        );
        self.selected = Some(root.clone());
        self.root = Some(root);
    }

    /// Selects `node` and applies the kind-specific side effects.
    ///
    /// - root: hides the sidebar and collapses every domain.
    /// - domain: toggles its expansion and shows the sidebar.
    /// - subtopic: shows the sidebar; expansion is left alone.
    pub fn select(&mut self, node: &MindMapNode) {
        debug!(
            "event=node_select module=state kind={} id={}",
            node.kind, node.id
        );
        self.selected = Some(node.clone());

        match node.kind {
            NodeKind::Root => {
                self.sidebar_visible = false;
                self.expanded_domains.clear();
            }
            NodeKind::Domain => {
                self.toggle_domain_expansion(&node.id);
                self.sidebar_visible = true;
            }
            NodeKind::Subtopic => {
                self.sidebar_visible = true;
            }
        }
    }

    /// Selects the node with `id` in the current tree.
    ///
    /// Returns `false` without touching state when there is no root or no such node.
    pub fn select_by_id(&mut self, id: &str) -> bool {
        let Some(node) = self.root.as_ref().and_then(|root| root.find(id)).cloned() else {
            debug!("event=node_select module=state status=not_found id={id}");
            return false;
        };
        self.select(&node);
        true
    }

    /// Re-selects the breadcrumb entry at `index`; out-of-range indices are ignored.
    pub fn select_breadcrumb(&mut self, index: usize) -> bool {
        let Some(node) = self.breadcrumbs().get(index).map(|node| (*node).clone()) else {
            return false;
        };
        self.select(&node);
        true
    }

    /// Collapses `domain_id` if it is the expanded domain, otherwise expands it alone.
    pub fn toggle_domain_expansion(&mut self, domain_id: &str) {
        if self.expanded_domains.contains(domain_id) {
            self.expanded_domains.remove(domain_id);
        } else {
            self.expanded_domains.clear();
            self.expanded_domains.insert(domain_id.to_string());
        }
    }

    pub fn is_domain_expanded(&self, domain_id: &str) -> bool {
        self.expanded_domains.contains(domain_id)
    }

    /// Hides the side panel; selection and expansion are kept.
    pub fn close_sidebar(&mut self) {
        self.sidebar_visible = false;
    }

    /// Returns whether `node_id` is the current selection.
    pub fn is_node_active(&self, node_id: &str) -> bool {
        self.selected
            .as_ref()
            .is_some_and(|selected| selected.id == node_id)
    }

    pub fn animation_state(&self, node_id: &str) -> NodeAnimationState {
        NodeAnimationState::from_active(self.is_node_active(node_id))
    }

    /// Domain owning the current selection.
    ///
    /// A selected domain is its own owner; a selected subtopic is matched by id
    /// against the children of every domain under the root.
    pub fn selected_domain(&self) -> Option<&MindMapNode> {
        let selected = self.selected.as_ref()?;
        match selected.kind {
            NodeKind::Domain => Some(selected),
            NodeKind::Subtopic => self
                .root
                .as_ref()?
                .children
                .iter()
                .find(|domain| domain.has_child(&selected.id)),
            NodeKind::Root => None,
        }
    }

    /// Subtopics listed in the sidebar for the selected domain.
    pub fn domain_subtopics(&self) -> &[MindMapNode] {
        self.selected_domain()
            .map(|domain| domain.children.as_slice())
            .unwrap_or(&[])
    }

    /// Trail from the root down to the current selection.
    ///
    /// `[root]`, `[root, domain]` or `[root, domain, subtopic]`; empty without
    /// a root or a selection.
    pub fn breadcrumbs(&self) -> Vec<&MindMapNode> {
        let (Some(root), Some(selected)) = (self.root.as_ref(), self.selected.as_ref()) else {
            return Vec::new();
        };

        let mut crumbs = vec![root];
        if let Some(domain) = self.selected_domain() {
            crumbs.push(domain);
        }
        if selected.is_subtopic() {
            crumbs.push(selected);
        }
        crumbs
    }
}
