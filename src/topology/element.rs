//! Element kinds stored by a ring.

use std::fmt;

/// The two record kinds a [`Ring`](crate::ring::Ring) accumulates.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum ElementKind {
    /// 1D boundary segment between two nodes.
    Segment,
    /// 2D fill triangle over three nodes.
    Triangle,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::Segment => f.write_str("segment"),
            ElementKind::Triangle => f.write_str("triangle"),
        }
    }
}
