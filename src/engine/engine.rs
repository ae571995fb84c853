use thiserror::Error;

use crate::{
    engine::{
        caster::{CastError, cast_column},
        projection::project,
        types::{RayHit, Screen},
    },
    renderer::{Palette, Renderer, Rgba},
    sim::InputCmd,
    world::{Camera, GridMap, MapError},
};

#[derive(Error, Debug)]
pub enum EngineError {
    #[error(transparent)]
    Map(#[from] MapError),

    #[error("column {column}: {source}")]
    Cast {
        column: usize,
        #[source]
        source: CastError,
    },

    #[error("screen must be at least 1×1, got {w}×{h}")]
    EmptyScreen { w: usize, h: usize },
}

/// Motion rates applied per second of frame time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    pub move_speed: f32, // cells / s
    pub turn_speed: f32, // rad / s
}

impl Default for Motion {
    fn default() -> Self {
        Self {
            move_speed: 3.0,
            turn_speed: 2.0,
        }
    }
}

/// Everything one frame needs, owned by the frame driver and lent to the
/// caster and projector. No globals.
pub struct RenderState {
    pub map: GridMap,
    pub camera: Camera,
    pub palette: Palette,
    pub screen: Screen,
    pub motion: Motion,
}

impl RenderState {
    /// Validate the screen and the camera's start cell.
    pub fn new(
        map: GridMap,
        camera: Camera,
        palette: Palette,
        screen: Screen,
        motion: Motion,
    ) -> Result<Self, EngineError> {
        if screen.w == 0 || screen.h == 0 {
            return Err(EngineError::EmptyScreen {
                w: screen.w,
                h: screen.h,
            });
        }
        map.check_start(camera.pos)?;

        log::debug!(
            "render state: {}×{} screen, {n}×{n} map, camera at {:?} fov {:.1}°",
            screen.w,
            screen.h,
            camera.pos,
            camera.fov().to_degrees(),
            n = map.size(),
        );

        Ok(Self {
            map,
            camera,
            palette,
            screen,
            motion,
        })
    }

    /// Apply one frame of input scaled by `dt` seconds. Turning happens
    /// before moving; there is no collision.
    pub fn update(&mut self, cmd: InputCmd, dt: f32) {
        if cmd.turn != 0.0 {
            self.camera.rotate(cmd.turn * self.motion.turn_speed * dt);
        }
        if cmd.forward > 0.0 {
            self.camera.advance(cmd.forward * self.motion.move_speed * dt);
        } else if cmd.forward < 0.0 {
            self.camera.retreat(-cmd.forward * self.motion.move_speed * dt);
        }
    }

    /// Cast the ray for one screen column.
    pub fn cast(&self, column: usize) -> Result<RayHit, EngineError> {
        cast_column(&self.map, &self.camera, column, self.screen.w)
            .map_err(|source| EngineError::Cast { column, source })
    }

    /// Clear, cast and draw every column, then loan the frame to `submit`.
    ///
    /// A ray leaving the map aborts the frame before anything is submitted.
    pub fn render_frame<R, F>(&self, renderer: &mut R, submit: F) -> Result<(), EngineError>
    where
        R: Renderer,
        F: FnOnce(&[Rgba], usize, usize),
    {
        let Screen { w, h } = self.screen;
        renderer.begin_frame(w, h);

        for x in 0..w {
            let hit = self.cast(x)?;
            let span = project(hit.perp_dist, h);
            renderer.draw_column(x, span, self.palette.wall_colour(&hit));
        }

        renderer.end_frame(submit);
        Ok(())
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
