//! `NodeId`: a strong, zero-cost handle for mesh nodes referenced by a ring
//!
//! Surface meshers identify nodes by small non-negative integers (indices
//! into a node table owned elsewhere). `NodeId` wraps that `u32` so node
//! handles cannot be confused with record indices or counts.
//!
//! Unlike cell handles, node `0` is a valid node; there is no sentinel.

use std::fmt;

/// Identifier of a mesh node.
///
/// # Memory layout
/// This type is `repr(transparent)` over `u32` and has the same size and
/// alignment.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[repr(transparent)]
#[serde(transparent)]
pub struct NodeId(u32);

impl NodeId {
    /// Creates a `NodeId` from a raw node index.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use planc_ring::topology::node::NodeId;
    /// let n = NodeId::new(4);
    /// assert_eq!(n.get(), 4);
    /// ```
    #[inline]
    pub const fn new(raw: u32) -> Self {
        NodeId(raw)
    }

    /// Returns the raw node index.
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for NodeId {
    #[inline]
    fn from(raw: u32) -> Self {
        NodeId(raw)
    }
}

impl From<NodeId> for u32 {
    #[inline]
    fn from(node: NodeId) -> Self {
        node.0
    }
}

/// Debug output reads `NodeId(raw)`.
impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NodeId").field(&self.0).finish()
    }
}

/// Display output is just the raw index, as used in error messages.
impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod layout_tests {
    use super::*;
    use static_assertions::{assert_eq_align, assert_eq_size};

    assert_eq_size!(NodeId, u32);
    assert_eq_align!(NodeId, u32);
}
