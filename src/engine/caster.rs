//! Per-column ray construction and grid traversal (DDA).
//!
//! The walk starts in the camera's cell and repeatedly crosses whichever grid
//! line is nearer along the ray, until it enters a wall cell. Ties between the
//! two axes step Y.

use glam::{IVec2, Vec2};
use thiserror::Error;

use crate::{
    engine::types::{RayHit, Side},
    world::{Camera, EMPTY, GridMap},
};

/// Fatal traversal failures.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum CastError {
    /// The ray walked off the grid: the map border is not solid.
    #[error("ray left the map at cell ({}, {}) after {steps} steps; map border is not solid", .cell.x, .cell.y)]
    OutOfBounds { cell: IVec2, steps: u32 },
}

/// Camera-space offset of screen column `column`: -1 at the left edge, just
/// under +1 at the right.
#[inline]
pub fn camera_x(column: usize, width: usize) -> f32 {
    2.0 * column as f32 / width as f32 - 1.0
}

/// Cast the ray belonging to screen column `column` of a `width`-wide view.
pub fn cast_column(
    map: &GridMap,
    camera: &Camera,
    column: usize,
    width: usize,
) -> Result<RayHit, CastError> {
    cast_ray(map, camera.pos, camera.ray_dir(camera_x(column, width)))
}

/// Walk `map` from `origin` along `ray_dir` until a wall cell is entered.
///
/// The starting cell itself is never tested; only cells entered by a step.
pub fn cast_ray(map: &GridMap, origin: Vec2, ray_dir: Vec2) -> Result<RayHit, CastError> {
    let mut cell = origin.floor().as_ivec2();
    if !map.contains(cell) {
        return Err(CastError::OutOfBounds { cell, steps: 0 });
    }

    let (step_x, delta_x, mut side_x) = axis_setup(ray_dir.x, origin.x, cell.x);
    let (step_y, delta_y, mut side_y) = axis_setup(ray_dir.y, origin.y, cell.y);

    let mut steps = 0u32;
    let (tag, side) = loop {
        let side = if side_x < side_y {
            side_x += delta_x;
            cell.x += step_x;
            Side::X
        } else {
            side_y += delta_y;
            cell.y += step_y;
            Side::Y
        };
        steps += 1;

        match map.get(cell) {
            None => return Err(CastError::OutOfBounds { cell, steps }),
            Some(EMPTY) => {}
            Some(tag) => break (tag, side),
        }
    };

    let perp_dist = match side {
        Side::X => side_x - delta_x,
        Side::Y => side_y - delta_y,
    };

    Ok(RayHit {
        tag,
        side,
        perp_dist,
        cell,
        steps,
    })
}

/// Step sign, per-cell ray distance and distance to the first grid line for
/// one axis. A zero component never crosses a line on that axis.
#[inline]
fn axis_setup(dir: f32, origin: f32, cell: i32) -> (i32, f32, f32) {
    if dir == 0.0 {
        return (1, f32::INFINITY, f32::INFINITY);
    }
    let delta = (1.0 / dir).abs();
    if dir < 0.0 {
        (-1, delta, (origin - cell as f32) * delta)
    } else {
        (1, delta, (cell as f32 + 1.0 - origin) * delta)
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
