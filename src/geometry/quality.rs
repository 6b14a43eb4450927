//! Quality checks for ring triangles in `uv` space.
//!
//! # Vertex ordering
//! A ring triangle `[v0, v1, v2]` is expected counter-clockwise in `uv`; a
//! negative signed area means the triangle is inverted relative to the ring.
//!
//! # Examples
//! ```rust
//! use planc_ring::geometry::quality::{triangle_quality, validate_triangle};
//!
//! let tri = [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]];
//! let quality = triangle_quality(&tri, 1e-12)?;
//! assert!((quality.signed_area - 0.5).abs() < 1e-12);
//! validate_triangle(&tri, 1e-12)?;
//! # Ok::<(), planc_ring::ring_error::RingError>(())
//! ```

use std::f64::consts::PI;

use crate::geometry::uv::{self, Uv};
use crate::ring_error::RingError;

const TRI_EDGES: [(usize, usize); 3] = [(0, 1), (1, 2), (2, 0)];

/// Basic quality metrics for a single triangle.
#[derive(Clone, Copy, Debug)]
pub struct TriangleQuality {
    /// Ratio of the longest edge length to the shortest edge length.
    pub aspect_ratio: f64,
    /// Minimum corner angle in degrees.
    pub min_angle_deg: f64,
    /// Signed area; negative values indicate inverted orientation.
    pub signed_area: f64,
    /// Height over the longest edge, i.e. the smallest altitude.
    pub min_height: f64,
}

/// Signed area of `(a, b, c)`, positive for counter-clockwise order.
#[inline]
pub fn signed_area(a: Uv, b: Uv, c: Uv) -> f64 {
    0.5 * uv::orient2d(a, b, c)
}

/// Compute quality metrics from explicit `uv` vertices.
///
/// Fails on edges no longer than `tol`, where angles are undefined.
pub fn triangle_quality(vertices: &[Uv; 3], tol: f64) -> Result<TriangleQuality, RingError> {
    let mut min_len = f64::INFINITY;
    let mut max_len = 0.0f64;
    for (a, b) in TRI_EDGES {
        let len = uv::distance(vertices[a], vertices[b]);
        if len <= tol {
            return Err(RingError::InvalidGeometry(
                "zero-length edge detected".into(),
            ));
        }
        min_len = min_len.min(len);
        max_len = max_len.max(len);
    }

    let mut min_angle_deg = f64::INFINITY;
    for i in 0..3 {
        let prev = vertices[(i + 2) % 3];
        let curr = vertices[i];
        let next = vertices[(i + 1) % 3];
        let angle = angle_deg(uv::sub(prev, curr), uv::sub(next, curr), tol)?;
        min_angle_deg = min_angle_deg.min(angle);
    }

    let area = signed_area(vertices[0], vertices[1], vertices[2]);
    Ok(TriangleQuality {
        aspect_ratio: max_len / min_len,
        min_angle_deg,
        signed_area: area,
        min_height: 2.0 * area.abs() / max_len,
    })
}

/// Validate that a triangle is neither degenerate nor inverted.
///
/// `tol` is a length: a triangle whose smallest altitude is at most `tol`
/// counts as degenerate. Returns the computed metrics on success.
pub fn validate_triangle(vertices: &[Uv; 3], tol: f64) -> Result<TriangleQuality, RingError> {
    let quality = triangle_quality(vertices, tol)?;
    if !quality.min_height.is_finite() || quality.min_height <= tol {
        return Err(RingError::InvalidGeometry(format!(
            "degenerate triangle: min height = {}",
            quality.min_height
        )));
    }
    if quality.signed_area < 0.0 {
        return Err(RingError::InvalidGeometry(format!(
            "inverted triangle: signed area = {}",
            quality.signed_area
        )));
    }
    if !quality.min_angle_deg.is_finite() || quality.min_angle_deg <= 0.0 {
        return Err(RingError::InvalidGeometry(format!(
            "invalid triangle: min angle = {}",
            quality.min_angle_deg
        )));
    }
    Ok(quality)
}

fn angle_deg(a: Uv, b: Uv, tol: f64) -> Result<f64, RingError> {
    let na = uv::dot(a, a).sqrt();
    let nb = uv::dot(b, b).sqrt();
    if na <= tol || nb <= tol {
        return Err(RingError::InvalidGeometry(
            "zero-length edge detected".into(),
        ));
    }
    let cos = (uv::dot(a, b) / (na * nb)).clamp(-1.0, 1.0);
    Ok(cos.acos() * 180.0 / PI)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    #[test]
    fn right_triangle_metrics() {
        let q = triangle_quality(&[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]], TOL).unwrap();
        assert!((q.signed_area - 0.5).abs() < 1e-12);
        assert!((q.min_angle_deg - 45.0).abs() < 1e-9);
        assert!((q.aspect_ratio - 2f64.sqrt()).abs() < 1e-12);
        assert!((q.min_height - 1.0 / 2f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn inverted_triangle_is_rejected() {
        let err = validate_triangle(&[[0.0, 0.0], [0.0, 1.0], [1.0, 0.0]], TOL).unwrap_err();
        assert!(matches!(err, RingError::InvalidGeometry(msg) if msg.starts_with("inverted")));
    }

    #[test]
    fn collinear_triangle_is_degenerate() {
        let err = validate_triangle(&[[0.0, 0.0], [1.0, 0.0], [2.0, 0.0]], TOL).unwrap_err();
        assert!(matches!(err, RingError::InvalidGeometry(msg) if msg.starts_with("degenerate")));
    }

    #[test]
    fn coincident_vertices_fail_quality() {
        assert!(triangle_quality(&[[0.0, 0.0], [0.0, 0.0], [1.0, 1.0]], TOL).is_err());
    }

    #[test]
    fn tolerance_bounds_edge_length_and_height() {
        // a 1e-3 wide sliver: fine at the default scale, degenerate at 1e-2
        let sliver = [[0.0, 0.0], [1.0, 0.0], [0.5, 1e-3]];
        assert!(validate_triangle(&sliver, TOL).is_ok());
        let err = validate_triangle(&sliver, 1e-2).unwrap_err();
        assert!(matches!(err, RingError::InvalidGeometry(msg) if msg.starts_with("degenerate")));

        // micro-scale triangle is valid under a length tolerance
        let tiny = [[0.0, 0.0], [1e-6, 0.0], [0.0, 1e-6]];
        assert!(validate_triangle(&tiny, TOL).is_ok());
        // but its edges vanish under a coarse one
        assert!(triangle_quality(&tiny, 1e-5).is_err());
    }
}
