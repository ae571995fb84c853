mod camera;
mod map;

pub use camera::Camera;

pub use map::{EMPTY, GridMap, MapError, Tag};
