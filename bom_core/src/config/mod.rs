//! # Installation Configuration
//!
//! The two documents a BOM is computed from: the panel grid ([`PanelConfig`])
//! and the mounting system ([`RoofConfig`]). Both are plain serde types so
//! they can come straight from a form, a file, or another service.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "panel": {
//!     "height": 1722, "width": 1134, "thickness": 35,
//!     "orientation": "landscape", "rows": 5, "columns": 7
//!   },
//!   "roof": {
//!     "roof_type": "slanted_roof",
//!     "roofing_type": "tiled",
//!     "hook_type": "normal",
//!     "profile_type": "feather",
//!     "profile_color": "black",
//!     "clamp_color": "black"
//!   }
//! }
//! ```

pub mod panel;
pub mod roof;

pub use panel::{Orientation, PanelConfig};
pub use roof::{
    GroundMountOptions, GroundScrewLength, HookType, MountingFamily, ProfileType, RoofConfig,
    RoofType, RoofingType, SlantedRoofOptions, SteeldeckOptions, SteeldeckPlate, TiltOptions,
    ANGLE_OPTIONS,
};

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Finish color for profiles, clamps, connectors and end caps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// Bare anodised aluminium
    #[default]
    #[serde(alias = "alu")]
    Aluminium,
    /// Black coated
    Black,
}

impl Color {
    /// All colors for UI selection
    pub const ALL: [Color; 2] = [Color::Aluminium, Color::Black];

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Color::Aluminium => "Aluminium",
            Color::Black => "Black",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A complete calculation request: one panel grid on one mounting system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Installation {
    pub panel: PanelConfig,
    pub roof: RoofConfig,
}

impl Installation {
    /// Parse an installation document.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        serde_json::from_str(json).map_err(|e| CalcError::SerializationError {
            reason: format!("Invalid installation document: {}", e),
        })
    }

    /// Pretty-printed installation document
    pub fn to_json(&self) -> CalcResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| CalcError::SerializationError {
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_aliases() {
        let c: Color = serde_json::from_str("\"alu\"").unwrap();
        assert_eq!(c, Color::Aluminium);
        let c: Color = serde_json::from_str("\"aluminium\"").unwrap();
        assert_eq!(c, Color::Aluminium);
        assert_eq!(serde_json::to_string(&Color::Black).unwrap(), "\"black\"");
    }

    #[test]
    fn test_installation_document() {
        let json = r#"{
            "panel": {
                "height": 1722, "width": 1134, "thickness": 35,
                "orientation": "landscape", "rows": 5, "columns": 7
            },
            "roof": {
                "roof_type": "slanted_roof",
                "roofing_type": "tiled",
                "hook_type": "normal",
                "profile_type": "feather",
                "profile_color": "black",
                "clamp_color": "black"
            }
        }"#;
        let installation: Installation = serde_json::from_str(json).unwrap();
        assert_eq!(installation.panel.total_panels().unwrap(), 35);
        assert_eq!(installation.roof.roof_type(), RoofType::SlantedRoof);
        assert_eq!(installation.roof.clamp_color, Color::Black);

        let again = Installation::from_json(&installation.to_json().unwrap()).unwrap();
        assert_eq!(again, installation);
    }

    #[test]
    fn test_malformed_document() {
        let err = Installation::from_json("{ \"panel\": {} }").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");

        let err = Installation::from_json(r#"{"panel": {"height": 1, "width": 1, "thickness": 35, "rows": 1, "columns": 1}, "roof": {"roof_type": "flat"}}"#).unwrap_err();
        assert!(err.to_string().contains("Invalid installation document"));
    }
}
