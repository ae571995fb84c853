//! Command-line configuration for the viewer.
//!
//! ```bash
//! cargo run --release -- --map level.txt --start 1.5,1.5 --measured
//! ```

use std::path::PathBuf;

use clap::Parser;
use glam::Vec2;
use log::LevelFilter;
use thiserror::Error;

use crate::{
    engine::{Motion, Screen},
    renderer::Palette,
    sim::{DEFAULT_TICK, FrameClock},
};

/// CLI options handled via `clap` derive.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Opts {
    /// Frame-buffer width in pixels
    #[arg(long, default_value_t = 1600)]
    pub width: usize,

    /// Frame-buffer height in pixels
    #[arg(long, default_value_t = 900)]
    pub height: usize,

    /// Text map to load instead of the built-in 8×8 level
    #[arg(long, value_name = "FILE")]
    pub map: Option<PathBuf>,

    /// Start position `X,Y` in map units (default: centre of the first empty cell)
    #[arg(long, value_name = "X,Y", value_parser = parse_vec2)]
    pub start: Option<Vec2>,

    /// View-plane magnitude; 0.66 gives roughly a 66° field of view
    #[arg(long, default_value_t = 0.66)]
    pub plane: f32,

    /// Movement speed in cells per second
    #[arg(long, default_value_t = 3.0)]
    pub move_speed: f32,

    /// Turn speed in radians per second
    #[arg(long, default_value_t = 2.0)]
    pub turn_speed: f32,

    /// Fixed time step in seconds per frame
    #[arg(long, value_name = "SECONDS", default_value_t = DEFAULT_TICK, conflicts_with = "measured")]
    pub tick: f32,

    /// Scale motion by measured wall-clock time instead of a fixed tick
    #[arg(long)]
    pub measured: bool,

    /// Draw both wall sides at full brightness
    #[arg(long)]
    pub flat: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,
}

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("screen size must be non-zero, got {0}×{1}")]
    ZeroScreen(usize, usize),

    #[error("`--{0}` must be a positive number, got {1}")]
    NotPositive(&'static str, f32),
}

impl Opts {
    /// Reject values the engine cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroScreen(self.width, self.height));
        }
        for (name, value) in [
            ("plane", self.plane),
            ("tick", self.tick),
            ("move-speed", self.move_speed),
            ("turn-speed", self.turn_speed),
        ] {
            if !(value > 0.0 && value.is_finite()) {
                return Err(ConfigError::NotPositive(name, value));
            }
        }
        Ok(())
    }

    pub fn screen(&self) -> Screen {
        Screen::new(self.width, self.height)
    }

    pub fn motion(&self) -> Motion {
        Motion {
            move_speed: self.move_speed,
            turn_speed: self.turn_speed,
        }
    }

    pub fn palette(&self) -> Palette {
        let mut palette = Palette::default();
        palette.shade_sides = !self.flat;
        palette
    }

    pub fn clock(&self) -> FrameClock {
        if self.measured {
            FrameClock::measured()
        } else {
            FrameClock::fixed(self.tick)
        }
    }
}

/// `"x,y"` → `Vec2`
fn parse_vec2(s: &str) -> Result<Vec2, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `X,Y`, got `{s}`"))?;
    let num = |t: &str| {
        t.trim()
            .parse::<f32>()
            .map_err(|e| format!("bad coordinate `{t}`: {e}"))
    };
    Ok(Vec2::new(num(x)?, num(y)?))
}
