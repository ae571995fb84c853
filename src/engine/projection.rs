/// Smallest perpendicular distance used for projection. Anything at or below
/// it (including NaN) is clamped here.
pub const MIN_PERP_DIST: f32 = 1e-4;

/// Vertical run of wall pixels for one screen column, inclusive on both ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnSpan {
    pub line_height: i32,
    pub y_start: i32,
    pub y_end: i32,
}

impl ColumnSpan {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.y_start > self.y_end
    }
}

/// Project a perpendicular wall distance onto a screen `screen_h` pixels tall.
///
/// ```text
/// line_height = floor(H / dist)
/// y_start     = max(0,   H/2 - line_height/2)
/// y_end       = min(H-1, H/2 + line_height/2)
/// ```
pub fn project(perp_dist: f32, screen_h: usize) -> ColumnSpan {
    let h = screen_h as i32;
    let dist = if perp_dist > MIN_PERP_DIST {
        perp_dist
    } else {
        MIN_PERP_DIST
    };

    // `as` saturates, so a huge quotient lands on i32::MAX rather than wrapping
    let line_height = (screen_h as f32 / dist).floor() as i32;
    let half = line_height / 2;

    ColumnSpan {
        line_height,
        y_start: (h / 2 - half).max(0),
        y_end: (h / 2 + half).min(h - 1),
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
