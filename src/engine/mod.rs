mod caster;
mod engine;
mod projection;
mod types;

pub use caster::{CastError, camera_x, cast_column, cast_ray};
pub use engine::{EngineError, Motion, RenderState};
pub use projection::{ColumnSpan, MIN_PERP_DIST, project};
pub use types::{RayHit, Screen, Side};
