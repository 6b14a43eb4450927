#![cfg_attr(docsrs, feature(doc_cfg))]
//! # planc-ring
//!
//! planc-ring provides the `Ring` used while filling a surface face in its
//! `uv` parameter space: an accumulating collection of boundary segments and
//! fill triangles with counts, node lookups and planar checks.
//!
//! ## Features
//! - Fluent, append-only mutation (`add_segment`, `add_triangle`) that
//!   returns the ring for chaining
//! - Validated variants (`try_add_*`) reporting [`RingError`](ring_error::RingError)
//! - Node `uv` lookup, segment intersection and triangle quality queries
//! - serde support for snapshotting a ring
//!
//! ## Invariant checking
//! Debug builds (or the `strict-invariants` / `check-invariants` features)
//! re-validate the ring's node index after each validated add; see
//! [`DebugInvariants`].
//!
//! ## Usage
//! ```rust
//! use planc_ring::prelude::*;
//!
//! let mut ring = Ring::new();
//! assert_eq!((ring.segments(), ring.triangles()), (0, 0));
//! ring.add_segment(NodeId::new(2), NodeId::new(4), [2.1, 2.2], [4.1, 4.2]);
//! assert_eq!(ring.segments(), 1);
//! ```

pub mod debug_invariants;
pub mod geometry;
pub mod ring;
pub mod ring_error;
pub mod topology;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::geometry::uv::Uv;
    pub use crate::ring::{DuplicateHandling, Ring, RingConfig, Segment, Triangle};
    pub use crate::ring_error::RingError;
    pub use crate::topology::element::ElementKind;
    pub use crate::topology::node::NodeId;
}
