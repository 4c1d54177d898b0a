use crate::{Object, Properties};

#[derive(Clone, Default, Debug)]
pub struct Tile {
    /// ID of tile local to its tileset
    pub id: u32,
    pub class: String,
    /// Relative chance of being picked by terrain tools. None leaves Tiled's default of 1.
    pub probability: Option<f32>,
    pub properties: Properties,
    pub object_group: Option<ObjectGroup>,
}

impl Tile {

    pub fn new(id: u32) -> Self {
        Self { id, ..Default::default() }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn with_probability(mut self, probability: f32) -> Self {
        self.probability = Some(probability);
        self
    }

    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = properties;
        self
    }

    pub fn with_objects(mut self, group: ObjectGroup) -> Self {
        self.object_group = Some(group);
        self
    }

    /// Collision objects of this tile, empty if it has no object group.
    pub fn objects(&self) -> &[Object] {
        match &self.object_group {
            Some(group) => &group.objects,
            None => &[],
        }
    }

    /// True if writing this tile would produce an empty element.
    pub fn is_bare(&self) -> bool {
        self.properties.is_empty() && self.object_group.is_none()
    }
}

/// Per-tile collection of collision shapes.
#[derive(Clone, Default, Debug)]
pub struct ObjectGroup {
    pub id: u32,
    pub draw_order: DrawOrder,
    pub objects: Vec<Object>,
}

impl ObjectGroup {

    pub fn new(id: u32) -> Self {
        Self { id, draw_order: DrawOrder::Index, objects: Vec::new() }
    }

    pub fn with_draw_order(mut self, draw_order: DrawOrder) -> Self {
        self.draw_order = draw_order;
        self
    }

    pub fn with(mut self, object: Object) -> Self {
        self.objects.push(object);
        self
    }

    pub fn object(&self, id: u32) -> Option<&Object> {
        self.objects.iter().find(|object| object.id == id)
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Default, Debug)]
pub enum DrawOrder {
    #[default]
    Index,
    TopDown,
}

impl DrawOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Index => "index",
            Self::TopDown => "topdown",
        }
    }
}

#[cfg(test)]
mod test {
    use super::{DrawOrder, ObjectGroup, Tile};
    use crate::Object;

    #[test]
    fn objects_of_tile() {
        let tile = Tile::new(2).with_objects(ObjectGroup::new(2)
            .with(Object::polygon(1, 23.4545, 6.54545, [(0.0, 0.0), (-17.8182, 21.0909), (0.363636, 21.4545)]))
            .with(Object::rect(2, 7.0, 6.0, 17.0, 24.0))
        );
        assert_eq!(2, tile.objects().len());
        assert_eq!(Some(2), tile.object_group.as_ref().and_then(|g| g.object(2)).map(|o| o.id));
        assert!(!tile.is_bare());
        assert!(Tile::new(3).objects().is_empty());
        assert!(Tile::new(3).is_bare());
    }

    #[test]
    fn draw_order_names() {
        assert_eq!("index", DrawOrder::default().as_str());
        assert_eq!("topdown", DrawOrder::TopDown.as_str());
    }
}
