//! Cell-level attributes shared by the layout engine and the renderers.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CellAttrError {
    #[error("unknown alignment {0:?}: expected L, R or C")]
    Alignment(String),
    #[error("unknown border side {side:?} in {input:?}: expected any of L, T, R, B (or 0/1)")]
    Border { side: char, input: String },
}

/// Horizontal placement of text inside a cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Alignment {
    #[default]
    Left,
    Right,
    Center,
}

impl Alignment {
    pub fn as_letter(self) -> &'static str {
        match self {
            Alignment::Left => "L",
            Alignment::Right => "R",
            Alignment::Center => "C",
        }
    }
}

impl FromStr for Alignment {
    type Err = CellAttrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "l" | "left" => Ok(Alignment::Left),
            "r" | "right" => Ok(Alignment::Right),
            "c" | "center" | "centre" => Ok(Alignment::Center),
            _ => Err(CellAttrError::Alignment(s.to_string())),
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_letter())
    }
}

impl Serialize for Alignment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_letter())
    }
}

impl<'de> Deserialize<'de> for Alignment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Which edges of a cell get a stroked border.
///
/// Parses and prints the usual letter form: `"LR"`, `"LRB"`, `"T"`, with
/// `"1"` meaning all four sides and `"0"` (or the empty string) none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BorderSides {
    pub left: bool,
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
}

impl BorderSides {
    pub const NONE: BorderSides = BorderSides {
        left: false,
        top: false,
        right: false,
        bottom: false,
    };
    pub const ALL: BorderSides = BorderSides {
        left: true,
        top: true,
        right: true,
        bottom: true,
    };
    /// Left and right only: an open row that the next row visually continues.
    pub const SIDES: BorderSides = BorderSides {
        left: true,
        top: false,
        right: true,
        bottom: false,
    };
    /// Left, right and bottom: a row that closes the table box.
    pub const SIDES_AND_BOTTOM: BorderSides = BorderSides {
        left: true,
        top: false,
        right: true,
        bottom: true,
    };
    pub const TOP: BorderSides = BorderSides {
        left: false,
        top: true,
        right: false,
        bottom: false,
    };

    pub fn is_none(self) -> bool {
        self == Self::NONE
    }

    pub fn is_all(self) -> bool {
        self == Self::ALL
    }
}

impl FromStr for BorderSides {
    type Err = CellAttrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "0" => return Ok(Self::NONE),
            "1" => return Ok(Self::ALL),
            _ => {}
        }
        let mut sides = Self::NONE;
        for c in s.trim().chars() {
            match c.to_ascii_uppercase() {
                'L' => sides.left = true,
                'T' => sides.top = true,
                'R' => sides.right = true,
                'B' => sides.bottom = true,
                _ => {
                    return Err(CellAttrError::Border {
                        side: c,
                        input: s.to_string(),
                    });
                }
            }
        }
        Ok(sides)
    }
}

impl fmt::Display for BorderSides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            return f.write_str("0");
        }
        for (on, letter) in [
            (self.left, "L"),
            (self.top, "T"),
            (self.right, "R"),
            (self.bottom, "B"),
        ] {
            if on {
                f.write_str(letter)?;
            }
        }
        Ok(())
    }
}

impl Serialize for BorderSides {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BorderSides {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum BorderDef {
            Flag(bool),
            Letters(String),
        }

        match BorderDef::deserialize(deserializer)? {
            BorderDef::Flag(true) => Ok(BorderSides::ALL),
            BorderDef::Flag(false) => Ok(BorderSides::NONE),
            BorderDef::Letters(s) => s.parse().map_err(de::Error::custom),
        }
    }
}
