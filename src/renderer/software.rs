//! ---------------------------------------------------------------------------
//! Software (CPU) column renderer
//!
//! * Fills a `Vec<u32>` frame-buffer in **0x00RRGGBB** format, row-major.
//! * Every frame starts from a full clear, so pixels outside the drawn spans
//!   keep the background colour.
//! ---------------------------------------------------------------------------

use crate::{
    engine::ColumnSpan,
    renderer::{BACKGROUND, Renderer, Rgba},
};

/// Solid-colour column renderer.
pub struct Software {
    scratch: Vec<Rgba>,
    clear: Rgba,
    width: usize,
    height: usize,
}

impl Default for Software {
    fn default() -> Self {
        Self::with_clear(BACKGROUND)
    }
}

impl Software {
    pub fn with_clear(clear: Rgba) -> Self {
        Self {
            scratch: Vec::new(),
            clear,
            width: 0,
            height: 0,
        }
    }

    /// The frame drawn so far.
    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.scratch
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Rgba {
        self.scratch[y * self.width + x]
    }
}

/*──────────────────────── Renderer trait impl ────────────────────────*/
impl Renderer for Software {
    fn begin_frame(&mut self, w: usize, h: usize) {
        // (re)allocate if resolution changed
        if w != self.width || h != self.height {
            self.width = w;
            self.height = h;
            self.scratch.resize(w * h, 0);
        }
        self.scratch.fill(self.clear);
    }

    fn draw_column(&mut self, x: usize, span: ColumnSpan, colour: Rgba) {
        if x >= self.width || self.height == 0 || span.is_empty() {
            return;
        }
        let y0 = span.y_start.max(0) as usize;
        let y1 = (span.y_end.max(0) as usize).min(self.height.saturating_sub(1));

        let mut idx = y0 * self.width + x;
        for _ in y0..=y1 {
            self.scratch[idx] = colour;
            idx += self.width;
        }
    }

    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize),
    {
        submit(&self.scratch, self.width, self.height);
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
