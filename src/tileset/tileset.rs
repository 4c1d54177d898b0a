use glam::{IVec2, UVec2};
use crate::{Color, Properties, Tile, WangSet};

/// A mostly 1:1 mapping of the TSX <tileset> element.
#[derive(Clone, Default, Debug)]
pub struct Tileset {
    pub name: String,
    pub class: String,
    pub tile_width: u32,
    pub tile_height: u32,
    pub spacing: u32,
    pub margin: u32,
    pub tile_count: u32,
    pub columns: u32,
    pub tile_offset: Option<TileOffset>,
    pub grid: Option<Grid>,
    pub properties: Properties,
    pub image: Option<Image>,
    /// Tiles carrying extra data. Tiles without any are implicit.
    pub tiles: Vec<Tile>,
    pub wang_sets: Vec<WangSet>,
}

impl Tileset {

    pub fn new(name: impl Into<String>, tile_size: UVec2, tile_count: u32, columns: u32) -> Self {
        Self {
            name: name.into(),
            tile_width: tile_size.x,
            tile_height: tile_size.y,
            tile_count,
            columns,
            ..Default::default()
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn with_spacing(mut self, spacing: u32, margin: u32) -> Self {
        self.spacing = spacing;
        self.margin = margin;
        self
    }

    pub fn with_tile_offset(mut self, x: i32, y: i32) -> Self {
        self.tile_offset = Some(TileOffset { x, y });
        self
    }

    pub fn with_grid(mut self, grid: Grid) -> Self {
        self.grid = Some(grid);
        self
    }

    pub fn with_image(mut self, image: Image) -> Self {
        self.image = Some(image);
        self
    }

    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = properties;
        self
    }

    pub fn with_tile(mut self, tile: Tile) -> Self {
        self.tiles.push(tile);
        self
    }

    pub fn with_wang_set(mut self, wang_set: WangSet) -> Self {
        self.wang_sets.push(wang_set);
        self
    }

    pub fn tile_size(&self) -> UVec2 {
        UVec2::new(self.tile_width, self.tile_height)
    }

    /// Number of tile rows, rounding a partial last row up.
    pub fn rows(&self) -> u32 {
        if self.columns == 0 {
            return 0;
        }
        self.tile_count.div_ceil(self.columns)
    }

    pub fn tile(&self, id: u32) -> Option<&Tile> {
        self.tiles.iter().find(|tile| tile.id == id)
    }

    /// Tile entry for `id`, creating an empty one if the tile was implicit.
    pub fn tile_mut_or_insert(&mut self, id: u32) -> &mut Tile {
        let index = match self.tiles.iter().position(|tile| tile.id == id) {
            Some(index) => index,
            None => {
                self.tiles.push(Tile::new(id));
                self.tiles.len() - 1
            }
        };
        &mut self.tiles[index]
    }

    /// Tiles in ascending id order, the order they are written in.
    pub fn sorted_tiles(&self) -> Vec<&Tile> {
        let mut tiles: Vec<&Tile> = self.tiles.iter().collect();
        tiles.sort_by_key(|tile| tile.id);
        tiles
    }
}

/// Reference to the atlas image. Dimensions are optional in TSX.
#[derive(Clone, Eq, PartialEq, Default, Debug)]
pub struct Image {
    pub source: String,
    pub trans: Option<Color>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl Image {
    pub fn new(source: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            source: source.into(),
            trans: None,
            width: Some(width),
            height: Some(height),
        }
    }

    pub fn size(&self) -> Option<UVec2> {
        Some(UVec2::new(self.width?, self.height?))
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Default, Debug)]
pub struct TileOffset { pub x: i32, pub y: i32 }

impl TileOffset {
    pub fn as_ivec2(self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }
}

/// Grid used when rendering tile overlays such as collision shapes.
#[derive(Copy, Clone, Eq, PartialEq, Default, Debug)]
pub struct Grid {
    pub orientation: Orientation,
    pub width: u32,
    pub height: u32,
}

impl Grid {
    pub fn new(orientation: Orientation, width: u32, height: u32) -> Self {
        Self { orientation, width, height }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Default, Debug)]
pub enum Orientation {
    #[default]
    Orthogonal,
    Isometric,
}

impl Orientation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Orthogonal => "orthogonal",
            Self::Isometric => "isometric",
        }
    }
}
