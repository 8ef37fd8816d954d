//! Core data structures shared by every pipeline stage.

mod representation;
mod window;

pub use representation::{Representation, RepresentationKind};
pub use window::Window;
