//! Decorative particle background: pure state and projection maths.
//! Scheduling and painting live in `infrastructure::rendering`.

pub mod camera;
pub mod particles;
pub mod state;

pub use camera::*;
pub use particles::*;
pub use state::*;
