use glam::Vec2;
use crate::Properties;

/// A collision or interaction shape attached to a tile.
/// Position is the object's anchor, relative to the tile's top-left corner.
#[derive(Clone, Debug)]
pub struct Object {
    pub id: u32,
    pub name: String,
    pub class: String,
    pub position: Vec2,
    /// Zero on either axis means "not written".
    pub size: Vec2,
    /// Clockwise, in degrees, around the anchor.
    pub rotation: f32,
    pub visible: bool,
    pub properties: Properties,
    pub shape: ObjectShape,
}

#[derive(Clone, PartialEq, Debug)]
pub enum ObjectShape {
    /// Axis-aligned box spanning `size` from the anchor.
    Rectangle,
    /// Ellipse inscribed in the box spanning `size` from the anchor.
    Ellipse,
    Point,
    /// Closed outline. Points are relative to the anchor.
    Polygon(Vec<Vec2>),
    /// Open path. Points are relative to the anchor.
    Polyline(Vec<Vec2>),
}

impl ObjectShape {

    /// Whether the shape is described by the object's width and height.
    pub fn is_boxed(&self) -> bool {
        matches!(self, Self::Rectangle | Self::Ellipse)
    }

    pub fn points(&self) -> Option<&[Vec2]> {
        match self {
            Self::Polygon(points) | Self::Polyline(points) => Some(points),
            _ => None,
        }
    }
}

impl Object {

    fn new(id: u32, x: f32, y: f32, shape: ObjectShape) -> Self {
        Self {
            id,
            name: String::new(),
            class: String::new(),
            position: Vec2::new(x, y),
            size: Vec2::ZERO,
            rotation: 0.0,
            visible: true,
            properties: Properties::default(),
            shape,
        }
    }

    pub fn rect(id: u32, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(id, x, y, ObjectShape::Rectangle).with_size(width, height)
    }

    pub fn ellipse(id: u32, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(id, x, y, ObjectShape::Ellipse).with_size(width, height)
    }

    pub fn point(id: u32, x: f32, y: f32) -> Self {
        Self::new(id, x, y, ObjectShape::Point)
    }

    pub fn polygon(id: u32, x: f32, y: f32, points: impl IntoIterator<Item = (f32, f32)>) -> Self {
        let points = points.into_iter().map(|(x, y)| Vec2::new(x, y)).collect();
        Self::new(id, x, y, ObjectShape::Polygon(points))
    }

    pub fn polyline(id: u32, x: f32, y: f32, points: impl IntoIterator<Item = (f32, f32)>) -> Self {
        let points = points.into_iter().map(|(x, y)| Vec2::new(x, y)).collect();
        Self::new(id, x, y, ObjectShape::Polyline(points))
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.size = Vec2::new(width, height);
        self
    }

    pub fn with_rotation(mut self, degrees: f32) -> Self {
        self.rotation = degrees;
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = properties;
        self
    }

    /// True when width or height will be written out.
    pub fn has_size(&self) -> bool {
        self.size.x != 0.0 || self.size.y != 0.0
    }
}

#[cfg(test)]
mod test {
    use glam::Vec2;
    use super::{Object, ObjectShape};

    #[test]
    fn constructors() {
        let aabb = Object::rect(28, 7.0, 6.0, 17.0, 24.0).with_name("AABB");
        assert_eq!(ObjectShape::Rectangle, aabb.shape);
        assert_eq!(Vec2::new(17.0, 24.0), aabb.size);
        assert!(aabb.has_size());
        assert_eq!("AABB", aabb.name);

        let poly = Object::polygon(29, 1.81818, 6.36364, [(0.0, 0.0), (26.3636, -4.0), (14.9091, 24.7273)]);
        assert!(!poly.has_size());
        assert!(!poly.shape.is_boxed());
        assert_eq!(3, poly.shape.points().map(|p| p.len()).unwrap_or(0));

        let point = Object::point(1, 4.0, 4.0);
        assert_eq!(None, point.shape.points());
        assert!(point.visible);
    }
}
