//! Mind-map node domain model.
//!
//! # Responsibility
//! - Define the canonical tree shape shared by state, search and layout.
//! - Validate hierarchy invariants for loaded documents.
//!
//! # Invariants
//! - A tree has exactly one root, and the root is the top node.
//! - Domains live directly under the root; subtopics live directly under a domain.
//! - `id` is unique across the whole tree and is the only equality key.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier for every node in a mind-map document.
pub type NodeId = String;

/// Hierarchy level of one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// Single top node of the map.
    Root,
    /// First-level grouping under the root.
    Domain,
    /// Leaf entry under a domain.
    Subtopic,
}

impl NodeKind {
    /// Stable lowercase label, identical to the wire value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Root => "root",
            Self::Domain => "domain",
            Self::Subtopic => "subtopic",
        }
    }
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured text shown in the content panel and indexed by search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeContent {
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub key_features: Vec<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_cases: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technologies: Option<Vec<String>>,
}

impl NodeContent {
    /// Joins every text field with single spaces in display order.
    ///
    /// Order: overview, key features, benefits, use cases, technologies.
    pub fn search_text(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        if !self.overview.is_empty() {
            parts.push(self.overview.as_str());
        }
        parts.extend(self.key_features.iter().map(String::as_str));
        parts.extend(self.benefits.iter().map(String::as_str));
        if let Some(use_cases) = &self.use_cases {
            parts.extend(use_cases.iter().map(String::as_str));
        }
        if let Some(technologies) = &self.technologies {
            parts.extend(technologies.iter().map(String::as_str));
        }
        parts.join(" ")
    }
}

/// One node of the mind-map tree.
///
/// The JSON document and this struct share field names; `type` is exposed as
/// `kind` on the Rust side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MindMapNode {
    pub id: NodeId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MindMapNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<NodeContent>,
    /// Display hint only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Display hint only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl MindMapNode {
    /// Creates a childless node without content or display hints.
    pub fn new(
        id: impl Into<NodeId>,
        kind: NodeKind,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            kind,
            children: Vec::new(),
            content: None,
            icon: None,
            color: None,
        }
    }

    /// Appends `child` and returns `self`, for building fixtures and trees inline.
    pub fn with_child(mut self, child: MindMapNode) -> Self {
        self.children.push(child);
        self
    }

    /// Attaches a content block and returns `self`.
    pub fn with_content(mut self, content: NodeContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn is_root(&self) -> bool {
        self.kind == NodeKind::Root
    }

    pub fn is_domain(&self) -> bool {
        self.kind == NodeKind::Domain
    }

    pub fn is_subtopic(&self) -> bool {
        self.kind == NodeKind::Subtopic
    }

    /// Returns the domain children of a root node, empty for other kinds.
    pub fn domains(&self) -> &[MindMapNode] {
        if self.is_root() {
            &self.children
        } else {
            &[]
        }
    }

    /// Returns whether a direct child carries `id`.
    pub fn has_child(&self, id: &str) -> bool {
        self.children.iter().any(|child| child.id == id)
    }

    /// Finds a node by id in this subtree, including `self`.
    ///
    /// Lookup is pre-order, so the first match wins if ids were duplicated.
    pub fn find(&self, id: &str) -> Option<&MindMapNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    /// Returns searchable content text, or an empty string without content.
    pub fn content_text(&self) -> String {
        self.content
            .as_ref()
            .map(NodeContent::search_text)
            .unwrap_or_default()
    }

    /// Counts this node and all descendants.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(MindMapNode::node_count).sum::<usize>()
    }
}

/// Hierarchy violations detected by [`validate_tree`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeValidationError {
    /// The top node is not of kind `root`.
    RootKindMismatch(NodeKind),
    /// A node id is empty after trim.
    BlankId { title: String },
    /// Two nodes share the same id.
    DuplicateId(NodeId),
    /// A node sits under a parent of the wrong kind.
    MisplacedNode {
        id: NodeId,
        kind: NodeKind,
        parent_kind: NodeKind,
    },
}

impl Display for TreeValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RootKindMismatch(kind) => {
                write!(f, "top node must be of type `root`, got `{kind}`")
            }
            Self::BlankId { title } => write!(f, "node `{title}` has a blank id"),
            Self::DuplicateId(id) => write!(f, "duplicate node id: {id}"),
            Self::MisplacedNode {
                id,
                kind,
                parent_kind,
            } => write!(
                f,
                "node `{id}` of type `{kind}` cannot be a child of a `{parent_kind}` node"
            ),
        }
    }
}

impl Error for TreeValidationError {}

/// Validates hierarchy and id invariants of a whole tree.
///
/// Returns the first violation in pre-order.
pub fn validate_tree(root: &MindMapNode) -> Result<(), TreeValidationError> {
    if !root.is_root() {
        return Err(TreeValidationError::RootKindMismatch(root.kind));
    }

    let mut seen = HashSet::new();
    validate_subtree(root, &mut seen)
}

fn validate_subtree<'a>(
    node: &'a MindMapNode,
    seen: &mut HashSet<&'a str>,
) -> Result<(), TreeValidationError> {
    if node.id.trim().is_empty() {
        return Err(TreeValidationError::BlankId {
            title: node.title.clone(),
        });
    }
    if !seen.insert(node.id.as_str()) {
        return Err(TreeValidationError::DuplicateId(node.id.clone()));
    }

    let expected_child = match node.kind {
        NodeKind::Root => Some(NodeKind::Domain),
        NodeKind::Domain => Some(NodeKind::Subtopic),
        NodeKind::Subtopic => None,
    };

    for child in &node.children {
        if Some(child.kind) != expected_child {
            return Err(TreeValidationError::MisplacedNode {
                id: child.id.clone(),
                kind: child.kind,
                parent_kind: node.kind,
            });
        }
        validate_subtree(child, seen)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{validate_tree, MindMapNode, NodeContent, NodeKind, TreeValidationError};

    fn sample_tree() -> MindMapNode {
        MindMapNode::new("root", NodeKind::Root, "AI Hub", "center").with_child(
            MindMapNode::new("d1", NodeKind::Domain, "Vision", "").with_child(MindMapNode::new(
                "s1",
                NodeKind::Subtopic,
                "OCR",
                "",
            )),
        )
    }

    #[test]
    fn content_text_joins_fields_in_order() {
        let content = NodeContent {
            overview: "intro".to_string(),
            key_features: vec!["fast".to_string()],
            benefits: vec!["cheap".to_string()],
            use_cases: Some(vec!["retail".to_string()]),
            technologies: Some(vec!["rust".to_string(), "wasm".to_string()]),
        };
        let node = MindMapNode::new("n", NodeKind::Subtopic, "t", "").with_content(content);
        assert_eq!(node.content_text(), "intro fast cheap retail rust wasm");
    }

    #[test]
    fn content_text_is_empty_without_content() {
        let node = MindMapNode::new("n", NodeKind::Subtopic, "t", "");
        assert!(node.content_text().is_empty());
    }

    #[test]
    fn find_returns_nested_nodes() {
        let tree = sample_tree();
        assert_eq!(tree.find("s1").map(|n| n.title.as_str()), Some("OCR"));
        assert_eq!(tree.find("root").map(|n| n.kind), Some(NodeKind::Root));
        assert!(tree.find("missing").is_none());
        assert_eq!(tree.node_count(), 3);
    }

    #[test]
    fn validate_accepts_well_formed_tree() {
        validate_tree(&sample_tree()).expect("sample tree should be valid");
    }

    #[test]
    fn validate_rejects_subtopic_under_root() {
        let tree = MindMapNode::new("root", NodeKind::Root, "r", "").with_child(
            MindMapNode::new("s", NodeKind::Subtopic, "stray", ""),
        );
        let err = validate_tree(&tree).expect_err("subtopic under root must fail");
        assert_eq!(
            err,
            TreeValidationError::MisplacedNode {
                id: "s".to_string(),
                kind: NodeKind::Subtopic,
                parent_kind: NodeKind::Root,
            }
        );
    }

    #[test]
    fn validate_rejects_duplicate_ids() {
        let tree = MindMapNode::new("root", NodeKind::Root, "r", "")
            .with_child(MindMapNode::new("d", NodeKind::Domain, "a", ""))
            .with_child(MindMapNode::new("d", NodeKind::Domain, "b", ""));
        let err = validate_tree(&tree).expect_err("duplicate ids must fail");
        assert_eq!(err, TreeValidationError::DuplicateId("d".to_string()));
    }

    #[test]
    fn validate_rejects_non_root_top_node() {
        let tree = MindMapNode::new("d", NodeKind::Domain, "a", "");
        let err = validate_tree(&tree).expect_err("domain top node must fail");
        assert_eq!(err, TreeValidationError::RootKindMismatch(NodeKind::Domain));
    }
}
