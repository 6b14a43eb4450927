#![allow(dead_code)]
use planc_ring::prelude::*;

pub fn nid(u: u32) -> NodeId {
    NodeId::new(u)
}

/// Build a closed polygonal ring from `uv` corners; node ids start at 1.
pub fn polygon_ring(corners: &[Uv]) -> Ring {
    let mut ring = Ring::with_capacity(corners.len(), 0);
    let n = corners.len() as u32;
    for (i, &uv) in corners.iter().enumerate() {
        let a = i as u32;
        let b = (a + 1) % n;
        ring.add_segment(nid(a + 1), nid(b + 1), uv, corners[b as usize]);
    }
    ring
}
