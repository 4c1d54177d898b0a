mod color;
mod config;
mod error;
mod properties;
mod tileset;
mod util;
mod validate;
mod write;
pub mod fixture;

pub use color::*;
pub use config::*;
pub use error::*;
pub use properties::*;
pub use tileset::*;
pub use util::HashSet;
pub use validate::*;
pub use write::*;
