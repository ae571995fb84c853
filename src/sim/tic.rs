use std::time::{Duration, Instant};

/// Default fixed step, one display refresh at 60 Hz.
pub const DEFAULT_TICK: f32 = 1.0 / 60.0;

/// Largest measured step handed out, so a stalled window doesn't teleport
/// the camera.
const MAX_DT: Duration = Duration::from_millis(100);

/// Source of the per-frame time step used to scale motion.
///
/// `Fixed` ties perceived speed to the host's frame rate; `Measured` follows
/// the wall clock.
#[derive(Clone, Copy, Debug)]
pub enum FrameClock {
    Fixed(f32),
    Measured { last: Instant },
}

impl Default for FrameClock {
    fn default() -> Self {
        FrameClock::Fixed(DEFAULT_TICK)
    }
}

impl FrameClock {
    pub fn fixed(dt: f32) -> Self {
        FrameClock::Fixed(dt)
    }

    pub fn measured() -> Self {
        FrameClock::Measured {
            last: Instant::now(),
        }
    }

    /// Seconds to advance this frame.
    pub fn tick(&mut self) -> f32 {
        match self {
            FrameClock::Fixed(dt) => *dt,
            FrameClock::Measured { last } => {
                let now = Instant::now();
                let dt = now.duration_since(*last).min(MAX_DT);
                *last = now;
                dt.as_secs_f32()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_tick_is_constant() {
        let mut clock = FrameClock::default();
        assert_eq!(clock.tick(), DEFAULT_TICK);
        assert_eq!(clock.tick(), DEFAULT_TICK);
        assert_eq!(FrameClock::fixed(0.5).tick(), 0.5);
    }

    #[test]
    fn measured_tick_is_capped() {
        let mut clock = FrameClock::Measured {
            last: Instant::now() - Duration::from_secs(1),
        };
        let dt = clock.tick();
        assert!((dt - MAX_DT.as_secs_f32()).abs() < 1e-6, "dt = {dt}");
        assert!(clock.tick() < MAX_DT.as_secs_f32());
    }
}
