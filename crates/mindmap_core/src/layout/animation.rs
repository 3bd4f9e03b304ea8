//! Node animation-state labels.

use std::fmt::{Display, Formatter};

/// Animation state bound to one rendered node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeAnimationState {
    /// The node is the current selection.
    Active,
    Inactive,
}

impl NodeAnimationState {
    pub fn from_active(is_active: bool) -> Self {
        if is_active {
            Self::Active
        } else {
            Self::Inactive
        }
    }

    /// Stable label consumed by the host's transition declarations.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl Display for NodeAnimationState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
