//! Canvas 2D painting and frame scheduling for the particle background.

pub mod animation_loop;
pub mod particle_painter;

pub use animation_loop::AnimationLoop;
pub use particle_painter::ParticlePainter;
