use crate::ConfigurationError;
use docket_types::Alignment;
use serde::{Deserialize, Serialize};

/// Width and text alignment of one table column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub width: f32,
    #[serde(default)]
    pub align: Alignment,
}

impl ColumnSpec {
    pub fn new(width: f32, align: Alignment) -> Self {
        Self { width, align }
    }
}

/// Header, data rows and column layout of a paginated table.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TableSpec {
    pub headers: Vec<String>,
    pub columns: Vec<ColumnSpec>,
    #[serde(default)]
    pub rows: Vec<Vec<String>>,
}

impl TableSpec {
    pub fn new(headers: Vec<String>, columns: Vec<ColumnSpec>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, columns, rows }
    }

    /// Builds a table from separate width and alignment lists.
    pub fn from_parallel(
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
        widths: &[f32],
        aligns: &[Alignment],
    ) -> Result<Self, ConfigurationError> {
        if widths.len() != aligns.len() {
            return Err(ConfigurationError::ColumnMismatch {
                what: "column alignment list".to_string(),
                expected: widths.len(),
                found: aligns.len(),
            });
        }
        let columns = widths
            .iter()
            .zip(aligns)
            .map(|(&width, &align)| ColumnSpec { width, align })
            .collect();
        Ok(Self { headers, columns, rows })
    }

    pub fn view(&self) -> TableView<'_> {
        TableView {
            headers: &self.headers,
            rows: &self.rows,
            columns: &self.columns,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        self.view().validate()
    }

    pub fn total_width(&self) -> f32 {
        self.view().total_width()
    }
}

/// A borrowed table, as consumed by the layout engine.
#[derive(Debug, Clone, Copy)]
pub struct TableView<'a> {
    pub headers: &'a [String],
    pub rows: &'a [Vec<String>],
    pub columns: &'a [ColumnSpec],
}

impl<'a> TableView<'a> {
    /// Checks that the header, every row and the column list agree in length and
    /// that every column width is usable.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let expected = self.columns.len();
        if self.headers.len() != expected {
            return Err(ConfigurationError::ColumnMismatch {
                what: "header row".to_string(),
                expected,
                found: self.headers.len(),
            });
        }
        if let Some((index, row)) = self
            .rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != expected)
        {
            return Err(ConfigurationError::ColumnMismatch {
                what: format!("row {index}"),
                expected,
                found: row.len(),
            });
        }
        if let Some((index, column)) = self
            .columns
            .iter()
            .enumerate()
            .find(|(_, c)| !c.width.is_finite() || c.width < 0.0)
        {
            return Err(ConfigurationError::InvalidGeometry(format!(
                "column {index} has unusable width {}",
                column.width
            )));
        }
        Ok(())
    }

    pub fn total_width(&self) -> f32 {
        self.columns.iter().map(|c| c.width).sum()
    }
}
