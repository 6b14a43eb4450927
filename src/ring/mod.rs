//! Ring: an accumulating front of boundary segments and fill triangles.
//!
//! A surface mesher fills a face in its `uv` parameter space. The face
//! boundary enters the ring as **segments** (two nodes plus their `uv`
//! pairs), and each generated **triangle** is recorded over two existing
//! nodes plus a third node whose `uv` travels with the triangle.
//!
//! The ring is a flat accumulator: counts start at zero, grow by exactly one
//! per add, and never shrink. Mutators return `&mut Ring` so calls chain.
//!
//! ```rust
//! use planc_ring::ring::Ring;
//! use planc_ring::topology::node::NodeId;
//!
//! let n = NodeId::new;
//! let mut ring = Ring::new();
//! ring.add_segment(n(2), n(4), [2.1, 2.2], [4.1, 4.2])
//!     .add_triangle(n(2), n(4), n(5), [5.1, 5.2]);
//! assert_eq!(ring.segments(), 1);
//! assert_eq!(ring.triangles(), 1);
//! ```

pub mod config;

use hashbrown::{HashMap, HashSet};
use itertools::Itertools;
use serde::{Deserialize, Serialize, Serializer};

use crate::debug_invariants::DebugInvariants;
use crate::geometry::quality::{self, TriangleQuality};
use crate::geometry::uv::{self, Uv};
use crate::ring_error::RingError;
use crate::topology::element::ElementKind;
use crate::topology::node::NodeId;

pub use config::{DuplicateHandling, RingConfig};

/// A boundary segment `n0 -> n1` with the `uv` of each endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub nodes: [NodeId; 2],
    pub uv: [Uv; 2],
}

impl Segment {
    /// `true` if `node` is one of the endpoints.
    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains(&node)
    }

    /// `true` if this segment joins `n0` and `n1`, in either direction.
    #[inline]
    pub fn same_nodes(&self, n0: NodeId, n1: NodeId) -> bool {
        self.key() == segment_key(n0, n1)
    }

    /// Endpoints in ascending order, for direction-free comparison.
    #[inline]
    pub fn key(&self) -> [NodeId; 2] {
        segment_key(self.nodes[0], self.nodes[1])
    }

    /// Euclidean length in `uv`.
    pub fn length(&self) -> f64 {
        uv::distance(self.uv[0], self.uv[1])
    }
}

/// A fill triangle over `n0, n1, n2`; `uv2` locates the third node.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub nodes: [NodeId; 3],
    pub uv2: Uv,
}

impl Triangle {
    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains(&node)
    }

    /// Nodes in ascending order, for orientation-free comparison.
    pub fn sorted_nodes(&self) -> [NodeId; 3] {
        triangle_key(self.nodes[0], self.nodes[1], self.nodes[2])
    }
}

#[inline]
fn segment_key(n0: NodeId, n1: NodeId) -> [NodeId; 2] {
    if n0 <= n1 { [n0, n1] } else { [n1, n0] }
}

#[inline]
fn triangle_key(n0: NodeId, n1: NodeId, n2: NodeId) -> [NodeId; 3] {
    let mut key = [n0, n1, n2];
    key.sort_unstable();
    key
}

/// Accumulating container of segments and triangles.
///
/// Besides the records the ring keeps derived indexes: the first `uv` seen
/// for each node (from segment endpoints and from triangle apexes
/// separately) and the direction-free node keys of all records. Later
/// records never overwrite an indexed `uv`.
///
/// Equality compares configuration and records, with coordinates compared
/// bitwise so a ring holding NaN still equals its clone.
///
/// Snapshots (serde) carry only configuration and records and require
/// finite coordinates in both directions; a non-finite value is reported as
/// [`RingError::NonFiniteCoordinate`].
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(try_from = "RingRecords")]
pub struct Ring {
    config: RingConfig,
    segments: Vec<Segment>,
    triangles: Vec<Triangle>,
    segment_uv: HashMap<NodeId, Uv>,
    apex_uv: HashMap<NodeId, Uv>,
    segment_keys: HashSet<[NodeId; 2]>,
    triangle_keys: HashSet<[NodeId; 3]>,
}

/// Serialized form of a [`Ring`]; indexes are rebuilt on load.
#[derive(Deserialize)]
struct RingRecords {
    #[serde(default)]
    config: RingConfig,
    segments: Vec<Segment>,
    triangles: Vec<Triangle>,
}

#[derive(Serialize)]
struct RingRecordsRef<'a> {
    config: &'a RingConfig,
    segments: &'a [Segment],
    triangles: &'a [Triangle],
}

impl Serialize for Ring {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.check_snapshot_coordinates()
            .map_err(<S::Error as serde::ser::Error>::custom)?;
        RingRecordsRef {
            config: &self.config,
            segments: &self.segments,
            triangles: &self.triangles,
        }
        .serialize(serializer)
    }
}

impl TryFrom<RingRecords> for Ring {
    type Error = RingError;

    fn try_from(records: RingRecords) -> Result<Self, Self::Error> {
        let mut ring = Ring::with_config(records.config)?;
        ring.segments.reserve(records.segments.len());
        ring.triangles.reserve(records.triangles.len());
        for s in records.segments {
            ring.add_segment(s.nodes[0], s.nodes[1], s.uv[0], s.uv[1]);
        }
        for t in records.triangles {
            ring.add_triangle(t.nodes[0], t.nodes[1], t.nodes[2], t.uv2);
        }
        ring.check_snapshot_coordinates()?;
        ring.debug_assert_invariants();
        Ok(ring)
    }
}

impl PartialEq for Ring {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
            && self.segments.len() == other.segments.len()
            && self.triangles.len() == other.triangles.len()
            && self.segments.iter().zip(&other.segments).all(|(a, b)| {
                a.nodes == b.nodes && same_uv(a.uv[0], b.uv[0]) && same_uv(a.uv[1], b.uv[1])
            })
            && self
                .triangles
                .iter()
                .zip(&other.triangles)
                .all(|(a, b)| a.nodes == b.nodes && same_uv(a.uv2, b.uv2))
    }
}

impl Ring {
    /// An empty ring with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty ring with a caller-supplied configuration.
    pub fn with_config(config: RingConfig) -> Result<Self, RingError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    /// An empty ring with room for the given number of records.
    pub fn with_capacity(segments: usize, triangles: usize) -> Self {
        Self {
            segments: Vec::with_capacity(segments),
            triangles: Vec::with_capacity(triangles),
            segment_uv: HashMap::with_capacity(segments),
            segment_keys: HashSet::with_capacity(segments),
            triangle_keys: HashSet::with_capacity(triangles),
            ..Self::default()
        }
    }

    #[inline]
    pub fn config(&self) -> &RingConfig {
        &self.config
    }

    /// Number of stored segments.
    #[inline]
    pub fn segments(&self) -> usize {
        self.segments.len()
    }

    /// Number of stored triangles.
    #[inline]
    pub fn triangles(&self) -> usize {
        self.triangles.len()
    }

    /// `true` if neither segments nor triangles have been added.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty() && self.triangles.is_empty()
    }

    /// Append a segment `n0 -> n1`. No validation is performed.
    pub fn add_segment(&mut self, n0: NodeId, n1: NodeId, uv0: Uv, uv1: Uv) -> &mut Self {
        self.segments.push(Segment {
            nodes: [n0, n1],
            uv: [uv0, uv1],
        });
        self.segment_uv.entry(n0).or_insert(uv0);
        self.segment_uv.entry(n1).or_insert(uv1);
        self.segment_keys.insert(segment_key(n0, n1));
        log::trace!(
            "ring: added segment {n0}-{n1} (segments = {})",
            self.segments.len()
        );
        self
    }

    /// Append a triangle over `n0, n1, n2` with `uv2` at `n2`. No validation
    /// is performed.
    pub fn add_triangle(&mut self, n0: NodeId, n1: NodeId, n2: NodeId, uv2: Uv) -> &mut Self {
        self.triangles.push(Triangle {
            nodes: [n0, n1, n2],
            uv2,
        });
        self.apex_uv.entry(n2).or_insert(uv2);
        self.triangle_keys.insert(triangle_key(n0, n1, n2));
        log::trace!(
            "ring: added triangle {n0}-{n1}-{n2} (triangles = {})",
            self.triangles.len()
        );
        self
    }

    /// Validated [`add_segment`](Self::add_segment).
    ///
    /// Rejects identical endpoints and non-finite coordinates; duplicates
    /// follow [`RingConfig::duplicates`]. On error the ring is unchanged.
    pub fn try_add_segment(
        &mut self,
        n0: NodeId,
        n1: NodeId,
        uv0: Uv,
        uv1: Uv,
    ) -> Result<&mut Self, RingError> {
        if n0 == n1 {
            return Err(RingError::DegenerateSegment(n0));
        }
        check_finite(n0, uv0)?;
        check_finite(n1, uv1)?;
        if self.has_segment(n0, n1) {
            self.on_duplicate(RingError::DuplicateSegment(n0, n1))?;
        }
        self.add_segment(n0, n1, uv0, uv1);
        crate::debug_invariants!(self.check_last_segment(), "try_add_segment");
        Ok(self)
    }

    /// Validated [`add_triangle`](Self::add_triangle).
    ///
    /// Rejects repeated nodes and a non-finite `uv2`; duplicates follow
    /// [`RingConfig::duplicates`]. On error the ring is unchanged.
    pub fn try_add_triangle(
        &mut self,
        n0: NodeId,
        n1: NodeId,
        n2: NodeId,
        uv2: Uv,
    ) -> Result<&mut Self, RingError> {
        if ![n0, n1, n2].iter().all_unique() {
            return Err(RingError::DegenerateTriangle(n0, n1, n2));
        }
        check_finite(n2, uv2)?;
        if self.has_triangle(n0, n1, n2) {
            self.on_duplicate(RingError::DuplicateTriangle(n0, n1, n2))?;
        }
        self.add_triangle(n0, n1, n2, uv2);
        crate::debug_invariants!(self.check_last_triangle(), "try_add_triangle");
        Ok(self)
    }

    fn on_duplicate(&self, err: RingError) -> Result<(), RingError> {
        match self.config.duplicates {
            DuplicateHandling::Ignore => Ok(()),
            DuplicateHandling::Warn => {
                log::warn!("{err}; storing it anyway");
                Ok(())
            }
            DuplicateHandling::Error => Err(err),
        }
    }

    /// Segment at insertion index `index`.
    pub fn segment(&self, index: usize) -> Result<&Segment, RingError> {
        self.segments
            .get(index)
            .ok_or(RingError::IndexOutOfRange {
                kind: ElementKind::Segment,
                index,
                len: self.segments.len(),
            })
    }

    /// Triangle at insertion index `index`.
    pub fn triangle(&self, index: usize) -> Result<&Triangle, RingError> {
        self.triangles
            .get(index)
            .ok_or(RingError::IndexOutOfRange {
                kind: ElementKind::Triangle,
                index,
                len: self.triangles.len(),
            })
    }

    /// Segments in insertion order.
    pub fn segment_iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    /// Triangles in insertion order.
    pub fn triangle_iter(&self) -> std::slice::Iter<'_, Triangle> {
        self.triangles.iter()
    }

    /// `true` if a segment joins `n0` and `n1` in either direction.
    pub fn has_segment(&self, n0: NodeId, n1: NodeId) -> bool {
        self.segment_keys.contains(&segment_key(n0, n1))
    }

    /// `true` if a triangle spans the same three nodes, in any order.
    pub fn has_triangle(&self, n0: NodeId, n1: NodeId, n2: NodeId) -> bool {
        self.triangle_keys.contains(&triangle_key(n0, n1, n2))
    }

    /// `uv` of `node` as first recorded by a segment endpoint.
    pub fn segments_contain_node(&self, node: NodeId) -> Option<Uv> {
        self.segment_uv.get(&node).copied()
    }

    /// `uv` of `node` from segments, falling back to triangle apexes.
    pub fn node_uv(&self, node: NodeId) -> Option<Uv> {
        self.segments_contain_node(node)
            .or_else(|| self.apex_uv.get(&node).copied())
    }

    /// Whether the candidate segment `n0-n1` properly crosses any stored
    /// segment that does not share one of its nodes.
    ///
    /// Touching, T-junctions and collinear overlap are not crossings; see
    /// [`uv::segments_cross`].
    pub fn intersects_segment(&self, n0: NodeId, n1: NodeId, uv0: Uv, uv1: Uv) -> bool {
        let tol = self.config.tolerance;
        self.segments
            .iter()
            .filter(|s| !s.contains(n0) && !s.contains(n1))
            .any(|s| uv::segments_cross(uv0, uv1, s.uv[0], s.uv[1], tol))
    }

    /// `uv` of all three corners of triangle `index`.
    ///
    /// The first two corners are looked up through the node index; the third
    /// is the triangle's own `uv2`.
    pub fn triangle_uvs(&self, index: usize) -> Result<[Uv; 3], RingError> {
        let t = self.triangle(index)?;
        let [n0, n1, _] = t.nodes;
        let uv0 = self.node_uv(n0).ok_or(RingError::MissingNode(n0))?;
        let uv1 = self.node_uv(n1).ok_or(RingError::MissingNode(n1))?;
        Ok([uv0, uv1, t.uv2])
    }

    /// Signed `uv` area of triangle `index`; counter-clockwise is positive.
    pub fn triangle_signed_area(&self, index: usize) -> Result<f64, RingError> {
        let [a, b, c] = self.triangle_uvs(index)?;
        Ok(quality::signed_area(a, b, c))
    }

    /// Quality metrics of triangle `index`.
    pub fn triangle_quality(&self, index: usize) -> Result<TriangleQuality, RingError> {
        quality::triangle_quality(&self.triangle_uvs(index)?, self.config.tolerance)
    }

    /// Error if triangle `index` is degenerate or inverted.
    pub fn validate_triangle(&self, index: usize) -> Result<TriangleQuality, RingError> {
        quality::validate_triangle(&self.triangle_uvs(index)?, self.config.tolerance)
    }
}

impl Ring {
    fn check_snapshot_coordinates(&self) -> Result<(), RingError> {
        for s in &self.segments {
            check_finite(s.nodes[0], s.uv[0])?;
            check_finite(s.nodes[1], s.uv[1])?;
        }
        for t in &self.triangles {
            check_finite(t.nodes[2], t.uv2)?;
        }
        Ok(())
    }

    /// Index entries for the most recent segment, in constant time.
    #[cfg_attr(
        not(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants")),
        allow(dead_code)
    )]
    fn check_last_segment(&self) -> Result<(), RingError> {
        let s = self.segments.last().ok_or_else(|| {
            RingError::InvariantViolation("no segment after add".into())
        })?;
        let indexed = s.nodes.iter().all(|n| self.segment_uv.contains_key(n))
            && self.segment_keys.contains(&s.key());
        if !indexed || self.segment_keys.len() > self.segments.len() {
            return Err(RingError::InvariantViolation(format!(
                "segment {}-{} missing from the ring index",
                s.nodes[0], s.nodes[1]
            )));
        }
        Ok(())
    }

    /// Index entries for the most recent triangle, in constant time.
    #[cfg_attr(
        not(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants")),
        allow(dead_code)
    )]
    fn check_last_triangle(&self) -> Result<(), RingError> {
        let t = self.triangles.last().ok_or_else(|| {
            RingError::InvariantViolation("no triangle after add".into())
        })?;
        let indexed = self.apex_uv.contains_key(&t.nodes[2])
            && self.triangle_keys.contains(&t.sorted_nodes());
        if !indexed || self.triangle_keys.len() > self.triangles.len() {
            return Err(RingError::InvariantViolation(format!(
                "triangle {}-{}-{} missing from the ring index",
                t.nodes[0], t.nodes[1], t.nodes[2]
            )));
        }
        Ok(())
    }
}

fn check_finite(node: NodeId, uv: Uv) -> Result<(), RingError> {
    if uv::is_finite(uv) {
        Ok(())
    } else {
        Err(RingError::NonFiniteCoordinate { node, uv })
    }
}

impl DebugInvariants for Ring {
    fn validate_invariants(&self) -> Result<(), RingError> {
        self.config.validate()?;

        let mut segment_uv: HashMap<NodeId, Uv> = HashMap::new();
        for s in &self.segments {
            segment_uv.entry(s.nodes[0]).or_insert(s.uv[0]);
            segment_uv.entry(s.nodes[1]).or_insert(s.uv[1]);
        }
        if !same_index(&segment_uv, &self.segment_uv) {
            return Err(RingError::InvariantViolation(format!(
                "segment node index has {} entries, records imply {}",
                self.segment_uv.len(),
                segment_uv.len()
            )));
        }

        let mut apex_uv: HashMap<NodeId, Uv> = HashMap::new();
        for t in &self.triangles {
            apex_uv.entry(t.nodes[2]).or_insert(t.uv2);
        }
        if !same_index(&apex_uv, &self.apex_uv) {
            return Err(RingError::InvariantViolation(format!(
                "apex node index has {} entries, records imply {}",
                self.apex_uv.len(),
                apex_uv.len()
            )));
        }

        let segment_keys: HashSet<[NodeId; 2]> = self.segments.iter().map(Segment::key).collect();
        if segment_keys != self.segment_keys {
            return Err(RingError::InvariantViolation(format!(
                "segment key set has {} entries, records imply {}",
                self.segment_keys.len(),
                segment_keys.len()
            )));
        }
        let triangle_keys: HashSet<[NodeId; 3]> =
            self.triangles.iter().map(Triangle::sorted_nodes).collect();
        if triangle_keys != self.triangle_keys {
            return Err(RingError::InvariantViolation(format!(
                "triangle key set has {} entries, records imply {}",
                self.triangle_keys.len(),
                triangle_keys.len()
            )));
        }
        Ok(())
    }
}

/// Bitwise `uv` equality, so NaN coordinates stored by the unchecked adds
/// still compare equal to themselves.
#[inline]
fn same_uv(a: Uv, b: Uv) -> bool {
    a[0].to_bits() == b[0].to_bits() && a[1].to_bits() == b[1].to_bits()
}

fn same_index(a: &HashMap<NodeId, Uv>, b: &HashMap<NodeId, Uv>) -> bool {
    a.len() == b.len()
        && a.iter()
            .all(|(node, uv)| b.get(node).is_some_and(|other| same_uv(*uv, *other)))
}
