use std::io;
use derive_more::*;
use crate::ValidationErrors;

/// Anything that can go wrong while building, checking or writing a tileset.
#[derive(Error, Display, From, Debug)]
pub enum TilesetError {
    #[display(fmt="I/O error: {_0}")]
    Io(io::Error),
    #[display(fmt="XML write error: {_0}")]
    Xml(quick_xml::Error),
    #[display(fmt="Invalid writer config: {_0}")]
    Config(serde_yaml::Error),
    #[display(fmt="Failed to read image: {_0}")]
    Image(image::ImageError),
    #[display(fmt="Tileset failed validation:\n{_0}")]
    Validation(ValidationErrors),
    #[display(fmt="Invalid color '{value}'")]
    #[from(ignore)]
    InvalidColor { value: String },
    #[display(fmt="Tileset has no image to check")]
    #[from(ignore)]
    MissingImage,
}
