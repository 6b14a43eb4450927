//! RingError: Unified error type for planc-ring public APIs
//!
//! Every fallible operation on a [`Ring`](crate::ring::Ring) reports through
//! this enum so callers never have to deal with panics from library code.

use thiserror::Error;

use crate::topology::element::ElementKind;
use crate::topology::node::NodeId;

/// Unified error type for ring operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RingError {
    /// A segment was given the same node at both ends.
    #[error("degenerate segment: both endpoints are node {0}")]
    DegenerateSegment(NodeId),
    /// A triangle repeats one of its nodes.
    #[error("degenerate triangle: nodes ({0}, {1}, {2}) are not distinct")]
    DegenerateTriangle(NodeId, NodeId, NodeId),
    /// A coordinate pair carried NaN or infinity.
    #[error("non-finite uv {uv:?} for node {node}")]
    NonFiniteCoordinate { node: NodeId, uv: [f64; 2] },
    /// A segment with the same (unordered) node pair is already stored.
    #[error("duplicate segment ({0}, {1})")]
    DuplicateSegment(NodeId, NodeId),
    /// A triangle over the same node set is already stored.
    #[error("duplicate triangle ({0}, {1}, {2})")]
    DuplicateTriangle(NodeId, NodeId, NodeId),
    /// Indexed access past the end of a record list.
    #[error("{kind} index {index} out of range (len = {len})")]
    IndexOutOfRange {
        kind: ElementKind,
        index: usize,
        len: usize,
    },
    /// No record of the ring carries coordinates for this node.
    #[error("node {0} has no recorded uv in this ring")]
    MissingNode(NodeId),
    /// Geometry check failed (degenerate or inverted element).
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),
    /// A [`RingConfig`](crate::ring::config::RingConfig) field is out of range.
    #[error("invalid ring configuration: {0}")]
    InvalidConfig(String),
    /// Internal bookkeeping disagrees with the stored records.
    #[error("ring invariant violated: {0}")]
    InvariantViolation(String),
}
