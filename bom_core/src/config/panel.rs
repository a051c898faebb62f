//! Panel grid geometry.
//!
//! A [`PanelConfig`] describes one rectangular grid of identical panels.
//! Dimensions are the panel's own height and width; the orientation decides
//! which of the two runs along the mounting rails.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::Millimeters;

/// How panels are laid on the rails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Panel width runs along the rail
    #[default]
    Landscape,
    /// Panel height runs along the rail
    Portrait,
}

impl Orientation {
    /// All orientations for UI selection
    pub const ALL: [Orientation; 2] = [Orientation::Landscape, Orientation::Portrait];

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Orientation::Landscape => "Landscape",
            Orientation::Portrait => "Portrait",
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One rectangular grid of identical panels.
///
/// ## JSON Example
///
/// ```json
/// {
///   "height": 1722,
///   "width": 1134,
///   "thickness": 35,
///   "orientation": "landscape",
///   "rows": 5,
///   "columns": 7
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Panel height (long side) in mm
    pub height: Millimeters,

    /// Panel width (short side) in mm
    pub width: Millimeters,

    /// Frame thickness in mm, selects the clamp size
    pub thickness: Millimeters,

    /// Panel orientation on the rails
    pub orientation: Orientation,

    /// Number of panel rows
    pub rows: u32,

    /// Number of panels per row
    pub columns: u32,
}

impl PanelConfig {
    /// Total number of panels in the grid.
    ///
    /// Fails when `rows × columns` does not fit a `u32`.
    pub fn total_panels(&self) -> CalcResult<u32> {
        self.rows.checked_mul(self.columns).ok_or_else(|| self.grid_too_large())
    }

    /// Panel dimension that lies along the rail
    pub fn span_along_rail(&self) -> Millimeters {
        match self.orientation {
            Orientation::Landscape => self.width,
            Orientation::Portrait => self.height,
        }
    }

    /// Length of one row of panels including the gaps between them.
    ///
    /// Fails when the row is longer than `u32::MAX` mm.
    pub fn row_length(&self, gap: Millimeters) -> CalcResult<Millimeters> {
        let span = self.span_along_rail();
        span.checked_mul(self.columns)
            .and_then(|panels| panels.checked_add(gap.checked_mul(self.columns.saturating_sub(1))?))
            .ok_or_else(|| {
                let field = match self.orientation {
                    Orientation::Landscape => "width",
                    Orientation::Portrait => "height",
                };
                CalcError::invalid_input(
                    field,
                    span.0.to_string(),
                    format!("A row of {} panels exceeds the longest supported rail length", self.columns),
                )
            })
    }

    /// Error for a grid whose part quantities exceed the supported range
    pub fn grid_too_large(&self) -> CalcError {
        CalcError::invalid_input(
            "rows x columns",
            format!("{} x {}", self.rows, self.columns),
            "Grid too large: part quantities exceed the supported range",
        )
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        PanelConfig {
            height: Millimeters(1722),
            width: Millimeters(1134),
            thickness: Millimeters(35),
            orientation: Orientation::Landscape,
            rows: 2,
            columns: 4,
        }
    }
}
