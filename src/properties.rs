use vecmap::VecMap;
use derive_more::*;
use crate::Color;
use crate::util::fmt_num;

/// Custom properties attached to a tileset, tile, object or wang entry.
/// Keeps insertion order, which is the order Tiled writes them in.
#[derive(Clone, Default, Debug, Deref)]
pub struct Properties(VecMap<String, PropertyValue>);

impl Properties {

    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a property, replacing one of the same name in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<PropertyValue>) -> Option<PropertyValue> {
        self.0.insert(name.into(), value.into())
    }

    /// Builder variant of [`Properties::insert`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        match self.0.get(name)? {
            PropertyValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn get_int(&self, name: &str) -> Option<i64> {
        match self.0.get(name)? {
            PropertyValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Ints widen to floats, mirroring how Tiled treats numeric properties.
    pub fn get_float(&self, name: &str) -> Option<f64> {
        match self.0.get(name)? {
            PropertyValue::Float(value) => Some(*value),
            PropertyValue::Int(value) => Some(*value as f64),
            _ => None,
        }
    }

    pub fn get_string(&self, name: &str) -> Option<&str> {
        match self.0.get(name)? {
            PropertyValue::String(value) | PropertyValue::File(value) => Some(value),
            _ => None,
        }
    }

    pub fn get_color(&self, name: &str) -> Option<Color> {
        match self.0.get(name)? {
            PropertyValue::Color(value) => Some(*value),
            _ => None,
        }
    }
}

#[derive(Clone, PartialEq, Debug, From)]
pub enum PropertyValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Color(Color),
    #[from(ignore)]
    File(String),
}

impl PropertyValue {

    /// Value of the "type" attribute. None for strings, which Tiled leaves untyped.
    pub fn type_name(&self) -> Option<&'static str> {
        match self {
            Self::Bool(_) => Some("bool"),
            Self::Int(_) => Some("int"),
            Self::Float(_) => Some("float"),
            Self::String(_) => None,
            Self::Color(_) => Some("color"),
            Self::File(_) => Some("file"),
        }
    }

    /// Value of the "value" attribute.
    pub fn to_attribute(&self) -> String {
        match self {
            Self::Bool(value) => value.to_string(),
            Self::Int(value) => value.to_string(),
            Self::Float(value) => fmt_num(*value),
            Self::String(value) | Self::File(value) => value.clone(),
            Self::Color(value) => value.to_string(),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::String(String::from(value))
    }
}

impl From<i32> for PropertyValue {
    fn from(value: i32) -> Self {
        Self::Int(value as i64)
    }
}

#[cfg(test)]
mod test {
    use super::{Properties, PropertyValue};
    use crate::Color;

    #[test]
    fn typed_getters() {
        let props = Properties::new()
            .with("CollisionLayers", 3)
            .with("solid", true)
            .with("friction", 0.5)
            .with("material", "stone")
            .with("tint", Color::RED);
        assert_eq!(Some(3), props.get_int("CollisionLayers"));
        assert_eq!(Some(true), props.get_bool("solid"));
        assert_eq!(Some(0.5), props.get_float("friction"));
        assert_eq!(Some(3.0), props.get_float("CollisionLayers"));
        assert_eq!(Some("stone"), props.get_string("material"));
        assert_eq!(Some(Color::RED), props.get_color("tint"));
        assert_eq!(None, props.get_bool("material"));
        assert_eq!(None, props.get_int("missing"));
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut props = Properties::new().with("a", 1).with("b", 2);
        let old = props.insert("a", 10);
        assert_eq!(Some(PropertyValue::Int(1)), old);
        let names: Vec<&str> = props.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(vec!["a", "b"], names);
        assert_eq!(Some(10), props.get_int("a"));
    }

    #[test]
    fn attribute_forms() {
        assert_eq!(None, PropertyValue::from("x").type_name());
        assert_eq!(Some("file"), PropertyValue::File(String::from("a.png")).type_name());
        assert_eq!("false", PropertyValue::Bool(false).to_attribute());
        assert_eq!("#ff0000", PropertyValue::Color(Color::RED).to_attribute());
        assert_eq!("0", PropertyValue::Float(-0.0).to_attribute());
        assert_eq!("2.5", PropertyValue::Float(2.5).to_attribute());
        assert_eq!("3", PropertyValue::Float(3.0).to_attribute());
    }
}
