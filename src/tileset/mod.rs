//! Structs defined here are a mostly 1:1 mapping of the tsx spec.
mod tileset;
mod tile;
mod object;
mod wang;

pub use tileset::*;
pub use tile::*;
pub use object::*;
pub use wang::*;
