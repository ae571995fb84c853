use glam::{IVec2, Vec2};

/// Viewer on the grid.
///
/// * `pos` is in map units (one unit = one cell).
/// * `dir` is the unit facing vector.
/// * `plane` is perpendicular to `dir`; `|plane| / |dir|` sets the half-FoV.
///
/// Rotations are applied to `dir` and `plane` together and are never
/// renormalised, so they must stay length-preserving.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub pos: Vec2,
    pub dir: Vec2,
    pub plane: Vec2,
}

impl Camera {
    /// Plane magnitude giving a ~66° horizontal FoV with a unit `dir`.
    pub const DEFAULT_PLANE: f32 = 0.66;

    pub fn new(pos: Vec2, dir: Vec2, plane: Vec2) -> Self {
        Self { pos, dir, plane }
    }

    /// Camera at `pos` looking along `dir` (normalised, +X if degenerate) with a
    /// view-plane of magnitude `plane_len` to its right.
    pub fn facing(pos: Vec2, dir: Vec2, plane_len: f32) -> Self {
        let dir = dir.normalize_or(Vec2::X);
        Self {
            pos,
            dir,
            plane: dir.perp() * plane_len,
        }
    }

    /*──────────────────────── movement helpers ──────────────────────*/

    /// Rotate facing and view-plane by `angle` radians.
    ///
    /// Map Y grows downwards, so a positive angle turns clockwise on the
    /// overhead map (to the right).
    pub fn rotate(&mut self, angle: f32) {
        let r = Vec2::from_angle(angle);
        self.dir = r.rotate(self.dir);
        self.plane = r.rotate(self.plane);
    }

    /// Step `distance` units along the facing vector. No collision.
    #[inline]
    pub fn advance(&mut self, distance: f32) {
        self.pos += self.dir * distance;
    }

    /// Step `distance` units against the facing vector. No collision.
    #[inline]
    pub fn retreat(&mut self, distance: f32) {
        self.pos -= self.dir * distance;
    }

    /*──────────────────────── derived values ────────────────────────*/

    /// Grid cell containing the camera.
    #[inline]
    pub fn cell(&self) -> IVec2 {
        self.pos.floor().as_ivec2()
    }

    /// Ray direction for camera-space offset `camera_x` in `[-1, 1)`.
    #[inline]
    pub fn ray_dir(&self, camera_x: f32) -> Vec2 {
        self.dir + self.plane * camera_x
    }

    /// Horizontal field of view in radians.
    pub fn fov(&self) -> f32 {
        2.0 * (self.plane.length() / self.dir.length()).atan()
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn start() -> Camera {
        Camera::facing(Vec2::new(2.5, 2.5), Vec2::X, Camera::DEFAULT_PLANE)
    }

    #[test]
    fn plane_is_perpendicular_to_dir() {
        let cam = Camera::facing(Vec2::ZERO, Vec2::new(3.0, 4.0), 0.66);
        assert!((cam.dir.length() - 1.0).abs() < 1e-6);
        assert!(cam.dir.dot(cam.plane).abs() < 1e-6);
        assert!((cam.plane.length() - 0.66).abs() < 1e-6);
    }

    #[test]
    fn degenerate_dir_falls_back_to_east() {
        let cam = Camera::facing(Vec2::ZERO, Vec2::ZERO, 0.66);
        assert_eq!(cam.dir, Vec2::X);
    }

    #[test]
    fn default_fov_is_about_66_degrees() {
        let fov = start().fov().to_degrees();
        assert!((fov - 66.8).abs() < 0.2, "fov = {fov}");
    }

    #[test]
    fn rotation_round_trip() {
        let orig = start();
        let mut cam = orig;
        for theta in [0.01, 0.5, FRAC_PI_2, 2.0, -1.3] {
            cam.rotate(theta);
            cam.rotate(-theta);
            assert!((cam.dir - orig.dir).length() < 1e-6);
            assert!((cam.plane - orig.plane).length() < 1e-6);
        }
    }

    #[test]
    fn quarter_turn_faces_south() {
        let mut cam = start();
        cam.rotate(FRAC_PI_2);
        assert!((cam.dir - Vec2::Y).length() < 1e-6);
        assert!((cam.plane - Vec2::new(-0.66, 0.0)).length() < 1e-6);
    }

    #[test]
    fn many_rotations_do_not_drift() {
        let mut cam = start();
        for _ in 0..2_000 {
            cam.rotate(PI / 97.0);
        }
        assert!((cam.dir.length() - 1.0).abs() < 1e-3);
        assert!((cam.plane.length() - 0.66).abs() < 1e-3);
        assert!(cam.dir.dot(cam.plane).abs() < 1e-3);
    }

    #[test]
    fn advance_and_retreat() {
        let mut cam = start();
        cam.advance(1.25);
        assert_eq!(cam.pos, Vec2::new(3.75, 2.5));
        assert_eq!(cam.cell(), IVec2::new(3, 2));
        cam.retreat(1.25);
        assert_eq!(cam.pos, Vec2::new(2.5, 2.5));
    }

    #[test]
    fn ray_dir_spans_frustum() {
        let cam = start();
        assert_eq!(cam.ray_dir(0.0), Vec2::X);
        assert!((cam.ray_dir(-1.0) - Vec2::new(1.0, -0.66)).length() < 1e-6);
        assert!((cam.ray_dir(1.0) - Vec2::new(1.0, 0.66)).length() < 1e-6);
    }
}
