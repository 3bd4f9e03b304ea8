//! Circular placement of domain nodes around the root.
//!
//! Coordinates live in a normalized 100x100 space with the root at the
//! center. The first domain sits at 12 o'clock and the rest follow clockwise
//! in child order.

use crate::model::node::MindMapNode;
use std::f64::consts::{FRAC_PI_2, TAU};

/// Center of the normalized layout space on both axes.
pub const LAYOUT_CENTER: f64 = 50.0;
/// Distance from the center to every domain node.
pub const LAYOUT_RADIUS: f64 = 30.0;

/// Render position of one domain node.
#[derive(Debug, Clone, PartialEq)]
pub struct DomainPosition<'a> {
    pub node: &'a MindMapNode,
    pub x: f64,
    pub y: f64,
    /// Radians; the first domain is at `-PI/2`.
    pub angle: f64,
}

impl DomainPosition<'_> {
    /// SVG transform attribute placing the node at its position.
    pub fn transform(&self) -> String {
        format!("translate({} {})", self.x, self.y)
    }
}

/// Places the root's domains evenly on a circle.
///
/// Returns an empty layout when `root` has no children.
pub fn domain_positions(root: &MindMapNode) -> Vec<DomainPosition<'_>> {
    let domains = &root.children;
    if domains.is_empty() {
        return Vec::new();
    }

    let step = TAU / domains.len() as f64;
    domains
        .iter()
        .enumerate()
        .map(|(index, node)| {
            let angle = index as f64 * step - FRAC_PI_2;
            DomainPosition {
                node,
                x: LAYOUT_CENTER + LAYOUT_RADIUS * angle.cos(),
                y: LAYOUT_CENTER + LAYOUT_RADIUS * angle.sin(),
                angle,
            }
        })
        .collect()
}
