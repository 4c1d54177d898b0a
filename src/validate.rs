use std::fmt;
use std::path::Path;
use derive_more::*;
use glam::UVec2;
use crate::{Color, HashSet, Object, ObjectShape, Tileset, TilesetError, WangSet, MAX_WANG_COLORS};

/// A single broken invariant of a [`Tileset`].
#[derive(Clone, PartialEq, Debug, Display, Error)]
pub enum ValidationError {
    #[display(fmt="Tile size must be non-zero, got {width}x{height}")]
    ZeroTileSize { width: u32, height: u32 },
    #[display(fmt="Tileset must have at least one column")]
    ZeroColumns,
    #[display(fmt="Tileset must have at least one tile")]
    ZeroTileCount,
    #[display(fmt="Image fits {implied} columns but tileset declares {declared}")]
    ImageColumnsMismatch { declared: u32, implied: u32 },
    #[display(fmt="Image fits {capacity} tiles but tileset declares {declared}")]
    ImageTooSmall { declared: u32, capacity: u32 },
    #[display(fmt="Image is {width}x{height} but tileset declares {declared_width}x{declared_height}")]
    ImageSizeMismatch { declared_width: u32, declared_height: u32, width: u32, height: u32 },
    #[display(fmt="Tile {tile_id} is defined more than once")]
    DuplicateTile { tile_id: u32 },
    #[display(fmt="Tile {tile_id} is out of range, tileset has {tile_count} tiles")]
    TileOutOfRange { tile_id: u32, tile_count: u32 },
    #[display(fmt="Tile {tile_id} has invalid probability {probability}")]
    InvalidTileProbability { tile_id: u32, probability: f32 },
    #[display(fmt="Tile {tile_id} has object {object_id} more than once")]
    DuplicateObject { tile_id: u32, object_id: u32 },
    #[display(fmt="Object {object_id} of tile {tile_id} has a non-finite position, size or rotation")]
    NonFiniteObject { tile_id: u32, object_id: u32 },
    #[display(fmt="Object {object_id} of tile {tile_id} has a negative size")]
    NegativeSize { tile_id: u32, object_id: u32 },
    #[display(fmt="Object {object_id} of tile {tile_id} needs a width and height")]
    MissingSize { tile_id: u32, object_id: u32 },
    #[display(fmt="Object {object_id} of tile {tile_id} needs at least {required} points, has {found}")]
    TooFewPoints { tile_id: u32, object_id: u32, required: usize, found: usize },
    #[display(fmt="Point {index} of object {object_id} on tile {tile_id} is not a finite number pair")]
    NonFinitePoint { tile_id: u32, object_id: u32, index: usize },
    #[display(fmt="Wang set {set_index} has no name")]
    UnnamedWangSet { set_index: usize },
    #[display(fmt="Wang set '{set}' has {count} colors, at most 254 are allowed")]
    TooManyWangColors { set: String, count: usize },
    #[display(fmt="Wang set '{set}' repeats color '{name}' {color}")]
    DuplicateWangColor { set: String, name: String, color: Color },
    #[display(fmt="Wang set '{set}' color {color_index} has invalid probability {probability}")]
    InvalidWangProbability { set: String, color_index: usize, probability: f32 },
    #[display(fmt="Wang set '{set}' references tile {tile_id}, tileset has {tile_count} tiles")]
    WangTileOutOfRange { set: String, tile_id: u32, tile_count: u32 },
    #[display(fmt="Wang set '{set}' assigns color {value} to tile {tile_id}, set has {color_count} colors")]
    WangIdOutOfRange { set: String, tile_id: u32, value: u8, color_count: usize },
    #[display(fmt="Wang set '{set}' assigns colors to tile {tile_id} more than once")]
    DuplicateWangTile { set: String, tile_id: u32 },
}

/// Every violation found in a tileset, in discovery order.
#[derive(Clone, PartialEq, Default, Debug, Deref, IntoIterator)]
pub struct ValidationErrors(Vec<ValidationError>);

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i != 0 {
                writeln!(f)?;
            }
            write!(f, "  - {error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Checks every invariant the TSX format implies and reports all violations at once.
pub fn validate(tileset: &Tileset) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();
    validate_dimensions(tileset, &mut errors);
    validate_tiles(tileset, &mut errors);
    for (set_index, wang_set) in tileset.wang_sets.iter().enumerate() {
        validate_wang_set(set_index, wang_set, tileset.tile_count, &mut errors);
    }
    if errors.is_empty() {
        Ok(())
    }
    else {
        Err(ValidationErrors(errors))
    }
}

/// Checks that the referenced image exists and matches its declared size.
/// Relative sources resolve against `base_dir`, the directory the tsx lives in.
pub fn validate_image_file(tileset: &Tileset, base_dir: impl AsRef<Path>) -> Result<(), TilesetError> {
    let Some(sheet) = &tileset.image else {
        return Err(TilesetError::MissingImage);
    };
    let path = base_dir.as_ref().join(&sheet.source);
    let (width, height) = image::image_dimensions(&path)?;
    log::debug!("Image {} is {width}x{height}", path.display());

    let mut errors = Vec::new();
    let declared = UVec2::new(sheet.width.unwrap_or(width), sheet.height.unwrap_or(height));
    let actual = UVec2::new(width, height);
    if declared != actual {
        errors.push(ValidationError::ImageSizeMismatch {
            declared_width: declared.x,
            declared_height: declared.y,
            width,
            height,
        });
    }
    validate_image_grid(tileset, actual, &mut errors);
    if errors.is_empty() {
        Ok(())
    }
    else {
        Err(ValidationErrors(errors).into())
    }
}

/// Number of whole tiles that fit along one axis of the image.
fn grid_cells(image_len: u32, tile_len: u32, spacing: u32, margin: u32) -> u32 {
    let (image_len, tile_len, spacing, margin) = (image_len as u64, tile_len as u64, spacing as u64, margin as u64);
    let usable = image_len.saturating_sub(2 * margin) + spacing;
    let cells = usable / (tile_len + spacing).max(1);
    u32::try_from(cells).unwrap_or(u32::MAX)
}

fn validate_dimensions(tileset: &Tileset, errors: &mut Vec<ValidationError>) {
    if tileset.tile_width == 0 || tileset.tile_height == 0 {
        errors.push(ValidationError::ZeroTileSize {
            width: tileset.tile_width,
            height: tileset.tile_height,
        });
    }
    if tileset.columns == 0 {
        errors.push(ValidationError::ZeroColumns);
    }
    if tileset.tile_count == 0 {
        errors.push(ValidationError::ZeroTileCount);
    }
    if let Some(size) = tileset.image.as_ref().and_then(|image| image.size()) {
        validate_image_grid(tileset, size, errors);
    }
}

/// Image of `size` must be able to hold the declared grid.
fn validate_image_grid(tileset: &Tileset, size: UVec2, errors: &mut Vec<ValidationError>) {
    if tileset.tile_width == 0 || tileset.tile_height == 0 {
        return;
    }
    let columns = grid_cells(size.x, tileset.tile_width, tileset.spacing, tileset.margin);
    let rows = grid_cells(size.y, tileset.tile_height, tileset.spacing, tileset.margin);
    if columns != tileset.columns {
        errors.push(ValidationError::ImageColumnsMismatch { declared: tileset.columns, implied: columns });
    }
    // A capacity below tile_count always fits in u32
    let capacity = columns as u64 * rows as u64;
    if capacity < tileset.tile_count as u64 {
        errors.push(ValidationError::ImageTooSmall { declared: tileset.tile_count, capacity: capacity as u32 });
    }
}

fn validate_tiles(tileset: &Tileset, errors: &mut Vec<ValidationError>) {
    let mut seen = HashSet::default();
    for tile in &tileset.tiles {
        if !seen.insert(tile.id) {
            errors.push(ValidationError::DuplicateTile { tile_id: tile.id });
        }
        if tile.id >= tileset.tile_count {
            errors.push(ValidationError::TileOutOfRange { tile_id: tile.id, tile_count: tileset.tile_count });
        }
        if let Some(probability) = tile.probability {
            if !probability.is_finite() || probability < 0.0 {
                errors.push(ValidationError::InvalidTileProbability { tile_id: tile.id, probability });
            }
        }

        let mut seen_objects = HashSet::default();
        for object in tile.objects() {
            if !seen_objects.insert(object.id) {
                errors.push(ValidationError::DuplicateObject { tile_id: tile.id, object_id: object.id });
            }
            validate_object(tile.id, object, errors);
        }
    }
}

fn validate_object(tile_id: u32, object: &Object, errors: &mut Vec<ValidationError>) {
    let object_id = object.id;
    if !object.position.is_finite() || !object.size.is_finite() || !object.rotation.is_finite() {
        errors.push(ValidationError::NonFiniteObject { tile_id, object_id });
    }
    if object.size.x < 0.0 || object.size.y < 0.0 {
        errors.push(ValidationError::NegativeSize { tile_id, object_id });
    }
    if object.shape.is_boxed() && (object.size.x == 0.0 || object.size.y == 0.0) {
        errors.push(ValidationError::MissingSize { tile_id, object_id });
    }

    let (points, required) = match &object.shape {
        ObjectShape::Polygon(points) => (points, 3),
        ObjectShape::Polyline(points) => (points, 2),
        _ => return,
    };
    if points.len() < required {
        errors.push(ValidationError::TooFewPoints { tile_id, object_id, required, found: points.len() });
    }
    for (index, point) in points.iter().enumerate() {
        if !point.is_finite() {
            errors.push(ValidationError::NonFinitePoint { tile_id, object_id, index });
        }
    }
}

fn validate_wang_set(set_index: usize, wang_set: &WangSet, tile_count: u32, errors: &mut Vec<ValidationError>) {
    let set = || wang_set.name.clone();
    if wang_set.name.is_empty() {
        errors.push(ValidationError::UnnamedWangSet { set_index });
    }
    if wang_set.colors.len() > MAX_WANG_COLORS {
        errors.push(ValidationError::TooManyWangColors { set: set(), count: wang_set.colors.len() });
    }
    if let Some(tile_id) = wang_set.tile {
        if tile_id >= tile_count {
            errors.push(ValidationError::WangTileOutOfRange { set: set(), tile_id, tile_count });
        }
    }

    let mut seen_colors = HashSet::default();
    for (color_index, wang_color) in wang_set.colors.iter().enumerate() {
        if !seen_colors.insert((wang_color.name.as_str(), wang_color.color)) {
            errors.push(ValidationError::DuplicateWangColor {
                set: set(),
                name: wang_color.name.clone(),
                color: wang_color.color,
            });
        }
        let probability = wang_color.probability;
        if !probability.is_finite() || probability < 0.0 {
            errors.push(ValidationError::InvalidWangProbability { set: set(), color_index, probability });
        }
        if let Some(tile_id) = wang_color.tile {
            if tile_id >= tile_count {
                errors.push(ValidationError::WangTileOutOfRange { set: set(), tile_id, tile_count });
            }
        }
    }

    let color_count = wang_set.colors.len();
    let mut seen_tiles = HashSet::default();
    for wang_tile in &wang_set.tiles {
        let tile_id = wang_tile.tile_id;
        if !seen_tiles.insert(tile_id) {
            errors.push(ValidationError::DuplicateWangTile { set: set(), tile_id });
        }
        if tile_id >= tile_count {
            errors.push(ValidationError::WangTileOutOfRange { set: set(), tile_id, tile_count });
        }
        for &value in &wang_tile.wang_id {
            if value as usize > color_count {
                errors.push(ValidationError::WangIdOutOfRange { set: set(), tile_id, value, color_count });
            }
        }
    }
}
