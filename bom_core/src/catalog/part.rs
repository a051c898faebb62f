//! Part records and structured part keys.
//!
//! A [`PartKey`] names a part by what it is (a black feather profile of
//! 6000 mm, a 30 mm click end clamp in aluminium) rather than by a string
//! assembled from its attributes. The catalog maps keys to [`Part`] records.

use serde::{Deserialize, Serialize};

use crate::config::{Color, GroundScrewLength, HookType, ProfileType, SteeldeckPlate};
use crate::errors::{CalcError, CalcResult};
use crate::units::{Degrees, Millimeters};

/// Catalog section a part is listed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartCategory {
    GroundMount,
    SlantedRoof,
    Clamps,
    Profiles,
    Connectors,
    Steeldeck,
    Solarspeed,
    Allfield,
    Hardware,
    CableManagement,
}

impl PartCategory {
    /// All categories in catalog order
    pub const ALL: [PartCategory; 10] = [
        PartCategory::GroundMount,
        PartCategory::SlantedRoof,
        PartCategory::Clamps,
        PartCategory::Profiles,
        PartCategory::Connectors,
        PartCategory::Steeldeck,
        PartCategory::Solarspeed,
        PartCategory::Allfield,
        PartCategory::Hardware,
        PartCategory::CableManagement,
    ];

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.to_lowercase().replace([' ', '-'], "_").as_str() {
            "ground_mount" | "ground" => Ok(PartCategory::GroundMount),
            "slanted_roof" | "slanted" => Ok(PartCategory::SlantedRoof),
            "clamps" | "clamp" => Ok(PartCategory::Clamps),
            "profiles" | "profile" => Ok(PartCategory::Profiles),
            "connectors" | "connector" => Ok(PartCategory::Connectors),
            "steeldeck" => Ok(PartCategory::Steeldeck),
            "solarspeed" => Ok(PartCategory::Solarspeed),
            "allfield" => Ok(PartCategory::Allfield),
            "hardware" => Ok(PartCategory::Hardware),
            "cable_management" | "cables" => Ok(PartCategory::CableManagement),
            _ => Err(CalcError::invalid_input("category", s, "Unknown part category")),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            PartCategory::GroundMount => "Ground Mount",
            PartCategory::SlantedRoof => "Slanted Roof",
            PartCategory::Clamps => "Clamps",
            PartCategory::Profiles => "Profiles",
            PartCategory::Connectors => "Connectors",
            PartCategory::Steeldeck => "Steeldeck",
            PartCategory::Solarspeed => "Solarspeed",
            PartCategory::Allfield => "Allfield",
            PartCategory::Hardware => "Hardware",
            PartCategory::CableManagement => "Cable Management",
        }
    }
}

impl std::fmt::Display for PartCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A purchasable part.
///
/// ## JSON Example
///
/// ```json
/// {
///   "code": "1HPR04DD002",
///   "description": "Feather Profiel 6000mm - Zwart",
///   "packaging_unit": 1,
///   "category": "profiles"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    /// Unique product code
    pub code: String,

    /// Product description as printed on order forms
    pub description: String,

    /// Number of pieces per package, at least 1
    pub packaging_unit: u32,

    /// Catalog section
    pub category: PartCategory,
}

impl Part {
    pub fn new(code: impl Into<String>, description: impl Into<String>, packaging_unit: u32, category: PartCategory) -> Self {
        Part {
            code: code.into(),
            description: description.into(),
            packaging_unit,
            category,
        }
    }
}

// ============================================================================
// Size buckets used in part keys
// ============================================================================

/// Panel thickness range of a rail-kit clamp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClampRange {
    /// 30-40 mm frames
    Range30To40,
    /// 35-50 mm frames
    Range35To50,
}

impl ClampRange {
    /// Thickest frame taking the narrow clamp
    pub const NARROW_MAX: Millimeters = Millimeters(40);

    /// Clamp range for a panel frame thickness
    pub fn for_thickness(thickness: Millimeters) -> Self {
        if thickness <= Self::NARROW_MAX {
            ClampRange::Range30To40
        } else {
            ClampRange::Range35To50
        }
    }
}

/// Click end clamp size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClickClampSize {
    Mm30,
    Mm40,
}

impl ClickClampSize {
    /// Thickest frame taking the 30 mm click end clamp
    pub const NARROW_MAX: Millimeters = Millimeters(35);

    /// Click end clamp size for a panel frame thickness
    pub fn for_thickness(thickness: Millimeters) -> Self {
        if thickness <= Self::NARROW_MAX {
            ClickClampSize::Mm30
        } else {
            ClickClampSize::Mm40
        }
    }
}

/// Rail profile stock length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileLength {
    Mm4200,
    Mm6000,
}

impl ProfileLength {
    pub fn length(&self) -> Millimeters {
        match self {
            ProfileLength::Mm4200 => Millimeters(4200),
            ProfileLength::Mm6000 => Millimeters(6000),
        }
    }

    /// Shortest stock length that spans `row_length` in one piece, else 6000 mm
    pub fn for_row(row_length: Millimeters) -> Self {
        if row_length <= ProfileLength::Mm4200.length() {
            ProfileLength::Mm4200
        } else {
            ProfileLength::Mm6000
        }
    }
}

/// Tilt of a prefabricated triangle unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriangleAngle {
    Deg10,
    Deg15,
}

impl TriangleAngle {
    /// Steepest requested tilt still built with the 10° triangle
    pub const LOW_MAX: Degrees = Degrees(12.0);

    pub fn for_angle(angle: Degrees) -> Self {
        if angle <= Self::LOW_MAX {
            TriangleAngle::Deg10
        } else {
            TriangleAngle::Deg15
        }
    }
}

/// Loose fasteners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fastener {
    BoltM8x20,
    BoltM8x25,
    BoltM8x30,
    BoltM10x25,
    BoltM10x30,
    NutM8,
    NutM10,
    WasherM8,
    WasherM10,
    TBoltM8x40,
    /// Hammer-head bolt fixing rail-kit clamps into the profile channel
    HammerHeadBoltM8x25,
    /// Fixes roof hooks to the rafters
    WoodScrew8x80,
    /// Fixes profiles to roof hooks
    HexBoltM10x30,
    SerratedNutM10,
}

// ============================================================================
// Part keys
// ============================================================================

/// Structured catalog key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartKey {
    // Ground mount
    GroundScrew(GroundScrewLength),
    GroundPostConnector,
    GroundProfileSupport,
    GroundCrossBar,

    // Slanted roof
    RoofHook(HookType),
    ClickMiddleClamp(Color),
    ClickEndClamp(ClickClampSize, Color),

    // Rail kit
    MiddleClamp(ClampRange, Color),
    EndClamp(ClampRange, Color),
    Profile(ProfileType, ProfileLength, Color),
    ProfileConnector(Color),
    EndCap(Color),

    // Steeldeck
    SteeldeckPlate(SteeldeckPlate),
    SteeldeckConnectingPlate,
    SteeldeckBolt,

    // Solarspeed
    SolarspeedTriangle(TriangleAngle),
    SolarspeedBaseRail,
    SolarspeedBallastTray,
    SolarspeedWindDeflector,

    // Allfield
    AllfieldTriangle(TriangleAngle),
    AllfieldBaseSupport,
    AllfieldCrossConnector,
    AllfieldBallastBlock,

    Fastener(Fastener),

    CableTray,
    CableClip,
}

impl std::fmt::Display for PartKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
