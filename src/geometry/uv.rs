//! Parameter-space (`uv`) coordinates and planar predicates.
//!
//! Ring records carry `uv` pairs: the 2D parameterisation of a surface
//! patch. All predicates here work on those pairs directly and take an
//! explicit tolerance; a value within `tol` of zero counts as zero.

/// A `(u, v)` coordinate pair.
pub type Uv = [f64; 2];

/// `true` when both components are finite.
#[inline]
pub fn is_finite(uv: Uv) -> bool {
    uv[0].is_finite() && uv[1].is_finite()
}

#[inline]
pub fn sub(a: Uv, b: Uv) -> Uv {
    [a[0] - b[0], a[1] - b[1]]
}

#[inline]
pub fn dot(a: Uv, b: Uv) -> f64 {
    a[0] * b[0] + a[1] * b[1]
}

/// z-component of the 2D cross product.
#[inline]
pub fn cross(a: Uv, b: Uv) -> f64 {
    a[0] * b[1] - a[1] * b[0]
}

#[inline]
pub fn distance(a: Uv, b: Uv) -> f64 {
    let d = sub(a, b);
    dot(d, d).sqrt()
}

/// Twice the signed area of `(a, b, c)`; positive when counter-clockwise.
#[inline]
pub fn orient2d(a: Uv, b: Uv, c: Uv) -> f64 {
    cross(sub(b, a), sub(c, a))
}

/// Orientation of a point relative to a directed line.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Side {
    Left,
    Right,
    On,
}

/// Classify `c` against the directed line `a -> b`.
///
/// `tol` is a length: `c` is `On` the line when its distance to it is at
/// most `tol`. A line shorter than `tol` has no direction, so every point
/// is `On` it.
pub fn side(a: Uv, b: Uv, c: Uv, tol: f64) -> Side {
    let len = distance(a, b);
    if len <= tol {
        return Side::On;
    }
    let offset = orient2d(a, b, c) / len;
    if offset > tol {
        Side::Left
    } else if offset < -tol {
        Side::Right
    } else {
        Side::On
    }
}

/// Whether the segments `a0-a1` and `b0-b1` properly cross.
///
/// Each segment must have its endpoints strictly on opposite sides of the
/// other's line. Touching at an endpoint, T-junctions and collinear overlap
/// are not crossings; neither is any endpoint within `tol` of the other line.
pub fn segments_cross(a0: Uv, a1: Uv, b0: Uv, b1: Uv, tol: f64) -> bool {
    let straddles = |p: Side, q: Side| {
        matches!((p, q), (Side::Left, Side::Right) | (Side::Right, Side::Left))
    };
    straddles(side(b0, b1, a0, tol), side(b0, b1, a1, tol))
        && straddles(side(a0, a1, b0, tol), side(a0, a1, b1, tol))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    #[test]
    fn orientation_sign() {
        assert!(orient2d([0.0, 0.0], [1.0, 0.0], [0.0, 1.0]) > 0.0);
        assert!(orient2d([0.0, 0.0], [0.0, 1.0], [1.0, 0.0]) < 0.0);
        assert_eq!(side([0.0, 0.0], [2.0, 2.0], [1.0, 1.0], TOL), Side::On);
    }

    #[test]
    fn crossing_segments_cross() {
        assert!(segments_cross(
            [0.0, 0.0],
            [1.0, 1.0],
            [0.0, 1.0],
            [1.0, 0.0],
            TOL
        ));
    }

    #[test]
    fn parallel_segments_do_not_cross() {
        assert!(!segments_cross(
            [0.0, 0.0],
            [1.0, 0.0],
            [0.0, 1.0],
            [1.0, 1.0],
            TOL
        ));
    }

    #[test]
    fn touching_and_collinear_overlap_are_not_crossings() {
        // T-junction: endpoint of b lies on a
        assert!(!segments_cross(
            [0.0, 0.0],
            [2.0, 0.0],
            [1.0, 0.0],
            [1.0, 1.0],
            TOL
        ));
        // shared endpoint
        assert!(!segments_cross(
            [0.0, 0.0],
            [1.0, 0.0],
            [1.0, 0.0],
            [1.0, 1.0],
            TOL
        ));
        // collinear overlap
        assert!(!segments_cross(
            [0.0, 0.0],
            [2.0, 0.0],
            [1.0, 0.0],
            [3.0, 0.0],
            TOL
        ));
    }

    #[test]
    fn tolerance_is_a_distance_at_any_scale() {
        let s = 1e-6;
        // about 7e-7 away from the line y = x and moving further away
        assert_eq!(side([0.0, 0.0], [s, s], [s, 0.0], TOL), Side::Right);
        assert!(!segments_cross(
            [0.0, 0.0],
            [s, s],
            [s, 0.0],
            [2.0 * s, -s],
            TOL
        ));
        // the same X as crossing_segments_cross, shrunk to micro scale
        assert!(segments_cross([0.0, 0.0], [s, s], [0.0, s], [s, 0.0], TOL));
    }

    #[test]
    fn short_line_has_no_side() {
        assert_eq!(side([0.0, 0.0], [0.0, 0.0], [1.0, 1.0], TOL), Side::On);
    }

    #[test]
    fn finiteness() {
        assert!(is_finite([1.0, -2.0]));
        assert!(!is_finite([f64::NAN, 0.0]));
        assert!(!is_finite([0.0, f64::INFINITY]));
    }
}
