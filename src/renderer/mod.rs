//! Rendering abstraction layer.
//!
//! *The rest of the engine never touches a pixel buffer directly.*
//! Per frame it hands one [`ColumnSpan`] and colour per screen column to a
//! type that implements [`Renderer`], then loans the finished buffer to the
//! host through `end_frame`.

use crate::engine::{ColumnSpan, RayHit, Side};
use crate::world::Tag;

/// Pixel format of the software frame-buffer (0x00RRGGBB).
pub type Rgba = u32;

/// Reference clear colour.
pub const BACKGROUND: Rgba = 0x00_AAAAAA;

/// A renderer that owns an internal scratch buffer for the whole frame.
pub trait Renderer {
    /// (Re)allocate internal scratch for the requested resolution and clear it.
    fn begin_frame(&mut self, width: usize, height: usize);

    /// Fill rows `span.y_start ..= span.y_end` of column `x` with `colour`.
    fn draw_column(&mut self, x: usize, span: ColumnSpan, colour: Rgba);

    /// Finish the frame and **loan** the finished buffer to `submit`.
    ///
    /// * `submit(&[Rgba], w, h)` is run exactly once per frame.
    /// * Software caller passes `|fb, w, h| window.update_with_buffer(fb, w, h)`.
    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize);
}

/// Wall colour by cell tag, with a fallback for tags past the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    /// `walls[tag - 1]`
    walls: Vec<Rgba>,
    fallback: Rgba,
    /// Draw Y-side hits at half brightness.
    pub shade_sides: bool,
}

impl Default for Palette {
    /// Reference palette: 1 red, 2 green, 3 blue, 4 magenta, anything else grey.
    fn default() -> Self {
        Self {
            walls: vec![0x00_FF0000, 0x00_00FF00, 0x00_0000FF, 0x00_FF00FF],
            fallback: 0x00_C0C0C0,
            shade_sides: true,
        }
    }
}

impl Palette {
    pub fn new(walls: Vec<Rgba>, fallback: Rgba, shade_sides: bool) -> Self {
        Self {
            walls,
            fallback,
            shade_sides,
        }
    }

    /// Base colour for `tag`; `0` and unlisted tags get the fallback.
    pub fn colour(&self, tag: Tag) -> Rgba {
        (tag as usize)
            .checked_sub(1)
            .and_then(|i| self.walls.get(i))
            .copied()
            .unwrap_or(self.fallback)
    }

    /// Final colour for a hit, after side shading.
    pub fn wall_colour(&self, hit: &RayHit) -> Rgba {
        let base = self.colour(hit.tag);
        match hit.side {
            Side::Y if self.shade_sides => halve(base),
            _ => base,
        }
    }
}

/// Halve every channel.
#[inline]
fn halve(c: Rgba) -> Rgba {
    (c >> 1) & 0x00_7F7F7F
}

pub mod software;
pub use software::Software;

/*──────────────────────────────── Tests ───────────────────────────────*/
