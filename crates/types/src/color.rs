use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("color must start with '#', got: {0:?}")]
    MissingHash(String),
    #[error("invalid hex color length: expected 3 or 6 digits, got {0}")]
    BadLength(usize),
    #[error("color {0:?} contains a non-hexadecimal digit")]
    NotHex(String),
}

/// An opaque RGB color, as used for cell fills and rounded boxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255 };

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn gray(value: u8) -> Self {
        Self { r: value, g: value, b: value }
    }

    /// Parse a hex color string (#RGB or #RRGGBB format).
    pub fn from_hex(s: &str) -> Result<Color, ColorError> {
        let trimmed = s.trim();
        let hex = trimmed
            .strip_prefix('#')
            .ok_or_else(|| ColorError::MissingHash(trimmed.to_string()))?;

        // from_str_radix tolerates a leading '+', so check the digits up front
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::NotHex(trimmed.to_string()));
        }

        let channel = |digits: String| {
            u8::from_str_radix(&digits, 16).map_err(|_| ColorError::NotHex(trimmed.to_string()))
        };

        match hex.len() {
            3 => {
                // #RGB format - expand each digit
                let r = channel(hex[0..1].repeat(2))?;
                let g = channel(hex[1..2].repeat(2))?;
                let b = channel(hex[2..3].repeat(2))?;
                Ok(Color { r, g, b })
            }
            6 => {
                let r = channel(hex[0..2].to_string())?;
                let g = channel(hex[2..4].to_string())?;
                let b = channel(hex[4..6].to_string())?;
                Ok(Color { r, g, b })
            }
            n => Err(ColorError::BadLength(n)),
        }
    }

    /// Channel values scaled to the 0.0..=1.0 range PDF color operators expect.
    pub fn to_unit_rgb(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum ColorDef {
            Str(String),
            Map { r: u8, g: u8, b: u8 },
        }

        match ColorDef::deserialize(deserializer)? {
            ColorDef::Str(s) => Self::from_hex(&s).map_err(de::Error::custom),
            ColorDef::Map { r, g, b } => Ok(Color { r, g, b }),
        }
    }
}
