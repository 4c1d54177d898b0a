use std::fmt;
use std::str::FromStr;
use crate::TilesetError;

/// 8-bit RGBA color, as Tiled stores it in wang colors and color properties.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl Color {

    pub const WHITE: Color      = Color::rgb(255, 255, 255);
    pub const BLACK: Color      = Color::rgb(0, 0, 0);
    pub const RED: Color        = Color::rgb(255, 0, 0);
    pub const GREEN: Color      = Color::rgb(0, 255, 0);
    pub const BLUE: Color       = Color::rgb(0, 0, 255);
    pub const YELLOW: Color     = Color::rgb(255, 255, 0);
    pub const TEAL: Color       = Color::rgb(0, 255, 255);
    pub const PINK: Color       = Color::rgb(255, 0, 255);
    pub const GRAY: Color       = Color::rgb(128, 128, 128);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parses "#rrggbb" or "#aarrggbb". The leading '#' is optional.
    pub fn parse(str: &str) -> Result<Self, TilesetError> {
        let invalid = || TilesetError::InvalidColor { value: String::from(str) };
        let hex = str.strip_prefix('#').unwrap_or(str);
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i+2], 16).map_err(|_| invalid());
        match hex.len() {
            6 => Ok(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Self::new(byte(2)?, byte(4)?, byte(6)?, byte(0)?)),
            _ => Err(invalid()),
        }
    }
}

impl FromStr for Color {
    type Err = TilesetError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        }
        else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.a, self.r, self.g, self.b)
        }
    }
}

#[cfg(test)]
mod test {
    use super::Color;
    use crate::TilesetError;

    #[test]
    fn parse_rgb() {
        assert_eq!(Color::rgb(0x20, 0xff, 0x54), Color::parse("#20ff54").unwrap());
        assert_eq!(Color::rgb(0xff, 0x77, 0x00), "ff7700".parse::<Color>().unwrap());
    }

    #[test]
    fn parse_argb() {
        let color = Color::parse("#80ff00d8").unwrap();
        assert_eq!(Color::new(0xff, 0x00, 0xd8, 0x80), color);
        assert_eq!("#80ff00d8", color.to_string());
    }

    #[test]
    fn opaque_prints_without_alpha() {
        assert_eq!("#00e9ff", Color::rgb(0x00, 0xe9, 0xff).to_string());
    }

    #[test]
    fn rejects_garbage() {
        for bad in ["", "#", "#12345", "#gg0000", "#ff00ff0", "#ééé", "#+f+f+f"] {
            let err = Color::parse(bad).unwrap_err();
            assert!(matches!(err, TilesetError::InvalidColor { .. }), "{bad}");
        }
    }
}
