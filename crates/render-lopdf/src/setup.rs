use docket_render_core::{RenderError, Unit};
use docket_types::Margins;
use serde::{Deserialize, Serialize};

/// Page geometry and default text settings, in `unit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageSetup {
    pub width: f32,
    pub height: f32,
    pub unit: Unit,
    pub margins: Margins,
    /// Distance from the page bottom at which content must stop.
    pub bottom_margin: f32,
    pub line_width: f32,
    pub font_family: String,
    /// In points, whatever the unit.
    pub font_size: f32,
}

impl Default for PageSetup {
    fn default() -> Self {
        Self::a4()
    }
}

impl PageSetup {
    pub fn a4() -> Self {
        Self {
            width: 210.0,
            height: 297.0,
            unit: Unit::Mm,
            margins: Margins::uniform(10.0),
            bottom_margin: 20.0,
            line_width: 0.35,
            font_family: "Helvetica".to_string(),
            font_size: 10.0,
        }
    }

    pub fn letter() -> Self {
        Self {
            width: 215.9,
            height: 279.4,
            ..Self::a4()
        }
    }

    pub fn page_break_trigger(&self) -> f32 {
        self.height - self.bottom_margin
    }

    pub(crate) fn validate(&self) -> Result<(), RenderError> {
        let dims = [self.width, self.height, self.line_width, self.font_size];
        if dims.iter().any(|v| !v.is_finite() || *v <= 0.0) {
            return Err(RenderError::InvalidSetup(format!(
                "page {}x{}, line width {} and font size {} must all be positive",
                self.width, self.height, self.line_width, self.font_size
            )));
        }
        let Margins { top, right, bottom: _, left } = self.margins;
        if left + right >= self.width || top + self.bottom_margin >= self.height {
            return Err(RenderError::InvalidSetup(format!(
                "margins leave no room on a {}x{} page",
                self.width, self.height
            )));
        }
        Ok(())
    }
}
