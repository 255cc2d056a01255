//! Chart aggregate: everything needed to turn the two loaded sequences into
//! screen geometry, without touching the DOM.

pub mod curve;
pub mod entities;
pub mod scales;
pub mod services;
pub mod value_objects;

pub use curve::*;
pub use entities::*;
pub use scales::*;
pub use services::*;
pub use value_objects::*;
