use serde::{Deserialize, Serialize};

const POINTS_PER_INCH: f32 = 72.0;
const MM_PER_INCH: f32 = 25.4;

/// The user unit that layout coordinates are expressed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Pt,
    #[default]
    Mm,
    Cm,
    In,
}

impl Unit {
    /// Points per user unit.
    pub fn scale(self) -> f32 {
        match self {
            Unit::Pt => 1.0,
            Unit::Mm => POINTS_PER_INCH / MM_PER_INCH,
            Unit::Cm => POINTS_PER_INCH / MM_PER_INCH * 10.0,
            Unit::In => POINTS_PER_INCH,
        }
    }

    pub fn to_points(self, value: f32) -> f32 {
        value * self.scale()
    }

    pub fn from_points(self, points: f32) -> f32 {
        points / self.scale()
    }
}
