use crate::{Color, Properties};

/// Tiled caps the number of colors in a single wang set.
pub const MAX_WANG_COLORS: usize = 254;

/// A named set of color tags used for edge/corner matching.
#[derive(Clone, Debug)]
pub struct WangSet {
    pub name: String,
    pub class: String,
    pub kind: WangSetKind,
    /// Representative tile. None is written as -1.
    pub tile: Option<u32>,
    pub properties: Properties,
    pub colors: Vec<WangColor>,
    pub tiles: Vec<WangTile>,
}

impl WangSet {

    pub fn new(name: impl Into<String>, kind: WangSetKind) -> Self {
        Self {
            name: name.into(),
            class: String::new(),
            kind,
            tile: None,
            properties: Properties::default(),
            colors: Vec::new(),
            tiles: Vec::new(),
        }
    }

    pub fn with_tile(mut self, tile: u32) -> Self {
        self.tile = Some(tile);
        self
    }

    pub fn with_color(mut self, color: WangColor) -> Self {
        self.colors.push(color);
        self
    }

    pub fn with_wang_tile(mut self, wang_tile: WangTile) -> Self {
        self.tiles.push(wang_tile);
        self
    }

    /// Copies colors and assignments under a new name, like Tiled's "Duplicate Terrain Set".
    pub fn duplicate(&self, name: impl Into<String>) -> Self {
        Self { name: name.into(), ..self.clone() }
    }

    /// Looks up a color by its 1-based wang index. 0 is "no color".
    pub fn color(&self, index: u8) -> Option<&WangColor> {
        let index = (index as usize).checked_sub(1)?;
        self.colors.get(index)
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Default, Debug)]
pub enum WangSetKind {
    Corner,
    Edge,
    #[default]
    Mixed,
}

impl WangSetKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Corner => "corner",
            Self::Edge => "edge",
            Self::Mixed => "mixed",
        }
    }
}

#[derive(Clone, Debug)]
pub struct WangColor {
    /// May be empty.
    pub name: String,
    pub class: String,
    pub color: Color,
    /// Representative tile. None is written as -1.
    pub tile: Option<u32>,
    pub probability: f32,
    pub properties: Properties,
}

impl WangColor {

    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            class: String::new(),
            color,
            tile: None,
            probability: 1.0,
            properties: Properties::default(),
        }
    }

    pub fn with_tile(mut self, tile: u32) -> Self {
        self.tile = Some(tile);
        self
    }

    pub fn with_probability(mut self, probability: f32) -> Self {
        self.probability = probability;
        self
    }
}

/// Color assignment of a single tile.
/// `wang_id` lists color indices clockwise from the top edge:
/// top, top-right, right, bottom-right, bottom, bottom-left, left, top-left.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct WangTile {
    pub tile_id: u32,
    pub wang_id: [u8; 8],
}

impl WangTile {
    pub fn new(tile_id: u32, wang_id: [u8; 8]) -> Self {
        Self { tile_id, wang_id }
    }

    pub fn wang_id_attribute(&self) -> String {
        self.wang_id
            .iter()
            .map(|index| index.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[cfg(test)]
mod test {
    use super::{WangColor, WangSet, WangSetKind, WangTile};
    use crate::Color;

    #[test]
    fn color_indices_are_one_based() {
        let set = WangSet::new("terrain", WangSetKind::Corner)
            .with_color(WangColor::new("grass", Color::GREEN))
            .with_color(WangColor::new("water", Color::BLUE));
        assert!(set.color(0).is_none());
        assert_eq!("grass", set.color(1).map(|c| c.name.as_str()).unwrap_or_default());
        assert_eq!("water", set.color(2).map(|c| c.name.as_str()).unwrap_or_default());
        assert!(set.color(3).is_none());
    }

    #[test]
    fn duplicate_keeps_colors() {
        let set = WangSet::new("test set", WangSetKind::Mixed)
            .with_color(WangColor::new("", Color::rgb(0x20, 0xff, 0x54)));
        let copy = set.duplicate("Copy of test set");
        assert_eq!("Copy of test set", copy.name);
        assert_eq!(set.colors.len(), copy.colors.len());
        assert_eq!(set.colors[0].color, copy.colors[0].color);
        assert_eq!(None, copy.tile);
    }

    #[test]
    fn wang_id_attribute() {
        let tile = WangTile::new(3, [1, 0, 2, 0, 1, 0, 2, 0]);
        assert_eq!("1,0,2,0,1,0,2,0", tile.wang_id_attribute());
        assert_eq!("mixed", WangSetKind::default().as_str());
    }
}
