mod input;
mod tic;

pub use input::{InputCmd, KeyState};
pub use tic::{DEFAULT_TICK, FrameClock};
