//! Market data aggregate: the price series, the event list and the wire
//! records they are decoded from, plus the filters applied before display.

pub mod dto;
pub mod entities;
pub mod filters;
pub mod repositories;
pub mod value_objects;

pub use dto::*;
pub use entities::*;
pub use filters::*;
pub use repositories::*;
pub use value_objects::*;
