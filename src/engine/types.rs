use glam::IVec2;

use crate::world::Tag;

/// Constants that depend on the *frame-buffer*, not on the map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Screen {
    pub w: usize,
    pub h: usize,
}

impl Screen {
    pub fn new(w: usize, h: usize) -> Self {
        Self { w, h }
    }
}

/// Grid axis whose line a ray crossed last.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    X,
    Y,
}

/// What one column's ray ran into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    pub tag: Tag,
    pub side: Side,
    /// Distance along the camera's forward axis, not along the ray.
    pub perp_dist: f32,
    pub cell: IVec2,
    /// DDA steps taken before the hit.
    pub steps: u32,
}
