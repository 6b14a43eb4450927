//! Geometry utilities for rings.
//!
//! `uv` holds the coordinate pair type and planar predicates; `quality`
//! evaluates triangles built from those pairs.

pub mod quality;
pub mod uv;

pub use uv::Uv;
