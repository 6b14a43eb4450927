//! Identifiers and element kinds for ring topology.
//!
//! A ring only references nodes by id; the node table itself lives with the
//! caller. This module keeps those handles strongly typed.

pub mod element;
pub mod node;

pub use element::ElementKind;
pub use node::NodeId;
