//! Grid ray caster.
//!
//! For each screen column a ray is cast from the [`world::Camera`] through a
//! [`world::GridMap`] with a DDA walk; the perpendicular distance to the first
//! wall cell becomes a vertical span drawn by a [`renderer::Renderer`].
//! Window, input sampling and presentation belong to the host (`src/main.rs`).

pub mod config;
pub mod engine;
pub mod renderer;
pub mod sim;
pub mod world;
