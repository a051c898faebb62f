//! Mounting system configuration.
//!
//! Each mounting family carries only the options it uses. The family is
//! selected by the `roof_type` tag and the two color choices apply to every
//! family:
//!
//! ```json
//! { "roof_type": "ground_mount", "ground_screw_length": "1500",
//!   "profile_color": "aluminium", "clamp_color": "aluminium" }
//! ```
//!
//! Optional family fields fall back to the family's standard choice when
//! absent; see the accessor methods on each options struct.

use serde::{Deserialize, Serialize};

use super::Color;
use crate::units::{Degrees, Millimeters};

/// Tilt angles offered for the triangle-based systems
pub const ANGLE_OPTIONS: [f64; 6] = [10.0, 12.5, 15.0, 20.0, 25.0, 30.0];

// ============================================================================
// Roof type
// ============================================================================

/// Mounting family identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoofType {
    /// Hooks under the roof covering, rails over the hooks
    SlantedRoof,
    /// Plates screwed onto trapezoidal steel sheet
    Steeldeck,
    /// Elevated rail system, east-west
    #[serde(rename = "solarspeed_ew")]
    SolarspeedEastWest,
    /// Elevated rail system, south facing
    SolarspeedSouth,
    /// Ballasted triangles on a flat field, landscape panels
    AllfieldLandscape,
    /// Ballasted triangles on a flat field, portrait panels
    AllfieldPortrait,
    /// Ground screws and cross bars
    GroundMount,
}

impl RoofType {
    /// All mounting families for UI selection
    pub const ALL: [RoofType; 7] = [
        RoofType::AllfieldLandscape,
        RoofType::AllfieldPortrait,
        RoofType::SlantedRoof,
        RoofType::Steeldeck,
        RoofType::SolarspeedEastWest,
        RoofType::SolarspeedSouth,
        RoofType::GroundMount,
    ];

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            RoofType::AllfieldLandscape => "Allfield/Triangle - Landscape",
            RoofType::AllfieldPortrait => "Allfield/Triangle - Portrait",
            RoofType::SlantedRoof => "Slanted Roof",
            RoofType::Steeldeck => "Steeldeck",
            RoofType::SolarspeedEastWest => "Solarspeed - East/West",
            RoofType::SolarspeedSouth => "Solarspeed - South",
            RoofType::GroundMount => "Ground Mount",
        }
    }

    /// Whether this family's configuration carries a tilt angle
    pub fn uses_angle(&self) -> bool {
        matches!(
            self,
            RoofType::AllfieldLandscape
                | RoofType::AllfieldPortrait
                | RoofType::SolarspeedEastWest
                | RoofType::SolarspeedSouth
        )
    }
}

impl std::fmt::Display for RoofType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// Slanted roof options
// ============================================================================

/// Roof covering the hooks are fitted under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RoofingType {
    /// Clay or concrete roof tiles
    #[default]
    Tiled,
    /// Natural or fibre-cement slates
    Slate,
    /// Standing seam zinc
    Zinc,
}

impl RoofingType {
    /// All roofing types for UI selection
    pub const ALL: [RoofingType; 3] = [RoofingType::Tiled, RoofingType::Slate, RoofingType::Zinc];

    /// Hook types that can be fitted on this roofing, standard choice first
    pub fn hook_types(&self) -> &'static [HookType] {
        match self {
            RoofingType::Tiled => &[HookType::Normal, HookType::Long, HookType::Hybrid, HookType::Optimum],
            RoofingType::Slate => &[HookType::Slate],
            RoofingType::Zinc => &[HookType::Zinc],
        }
    }

    /// Standard hook for this roofing
    pub fn default_hook(&self) -> HookType {
        self.hook_types()[0]
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            RoofingType::Tiled => "Tiled",
            RoofingType::Slate => "Slate",
            RoofingType::Zinc => "Zinc",
        }
    }
}

impl std::fmt::Display for RoofingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Roof hook model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HookType {
    Normal,
    Long,
    Hybrid,
    Optimum,
    Slate,
    Zinc,
}

impl HookType {
    /// All hook types for UI selection
    pub const ALL: [HookType; 6] = [
        HookType::Normal,
        HookType::Long,
        HookType::Hybrid,
        HookType::Optimum,
        HookType::Slate,
        HookType::Zinc,
    ];

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            HookType::Normal => "Roof Hook Normal",
            HookType::Long => "Roof Hook Long",
            HookType::Hybrid => "Roof Hook Hybrid",
            HookType::Optimum => "Roof Hook Optimum",
            HookType::Slate => "Slate Hook",
            HookType::Zinc => "Zinc Hook",
        }
    }
}

impl std::fmt::Display for HookType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Rail profile section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProfileType {
    #[default]
    House,
    Feather,
}

impl ProfileType {
    /// All profile types for UI selection
    pub const ALL: [ProfileType; 2] = [ProfileType::House, ProfileType::Feather];

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            ProfileType::House => "House",
            ProfileType::Feather => "Feather",
        }
    }
}

impl std::fmt::Display for ProfileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Options for the slanted roof family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SlantedRoofOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roofing_type: Option<RoofingType>,

    /// Must be one of `roofing_type.hook_types()`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hook_type: Option<HookType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_type: Option<ProfileType>,
}

impl SlantedRoofOptions {
    /// Roofing type, tiled when absent
    pub fn roofing(&self) -> RoofingType {
        self.roofing_type.unwrap_or_default()
    }

    /// Hook type, the roofing's standard hook when absent
    pub fn hook(&self) -> HookType {
        self.hook_type.unwrap_or_else(|| self.roofing().default_hook())
    }

    /// Profile type, house when absent
    pub fn profile(&self) -> ProfileType {
        self.profile_type.unwrap_or_default()
    }
}

// ============================================================================
// Steeldeck options
// ============================================================================

/// Steeldeck mounting plate length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SteeldeckPlate {
    #[serde(rename = "plate_15cm")]
    Plate15,
    #[default]
    #[serde(rename = "plate_40cm")]
    Plate40,
}

impl SteeldeckPlate {
    /// All plate types for UI selection
    pub const ALL: [SteeldeckPlate; 2] = [SteeldeckPlate::Plate15, SteeldeckPlate::Plate40];

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            SteeldeckPlate::Plate15 => "Plate 15 cm",
            SteeldeckPlate::Plate40 => "Plate 40 cm",
        }
    }
}

impl std::fmt::Display for SteeldeckPlate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Options for the steeldeck family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SteeldeckOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plate_type: Option<SteeldeckPlate>,
}

impl SteeldeckOptions {
    /// Plate type, 40 cm when absent
    pub fn plate(&self) -> SteeldeckPlate {
        self.plate_type.unwrap_or_default()
    }
}

// ============================================================================
// Triangle system options
// ============================================================================

/// Options for the tilted triangle families (Solarspeed, Allfield)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TiltOptions {
    /// Panel tilt, one of [`ANGLE_OPTIONS`] in practice
    pub angle: Degrees,
}

impl Default for TiltOptions {
    fn default() -> Self {
        TiltOptions { angle: Degrees(15.0) }
    }
}

// ============================================================================
// Ground mount options
// ============================================================================

/// Ground screw length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum GroundScrewLength {
    #[serde(rename = "750")]
    Mm750,
    #[default]
    #[serde(rename = "1000")]
    Mm1000,
    #[serde(rename = "1500")]
    Mm1500,
}

impl GroundScrewLength {
    /// All screw lengths for UI selection
    pub const ALL: [GroundScrewLength; 3] = [
        GroundScrewLength::Mm750,
        GroundScrewLength::Mm1000,
        GroundScrewLength::Mm1500,
    ];

    /// Screw length
    pub fn length(&self) -> Millimeters {
        match self {
            GroundScrewLength::Mm750 => Millimeters(750),
            GroundScrewLength::Mm1000 => Millimeters(1000),
            GroundScrewLength::Mm1500 => Millimeters(1500),
        }
    }
}

impl std::fmt::Display for GroundScrewLength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.length())
    }
}

/// Options for the ground mount family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GroundMountOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ground_screw_length: Option<GroundScrewLength>,
}

impl GroundMountOptions {
    /// Screw length, 1000 mm when absent
    pub fn screw_length(&self) -> GroundScrewLength {
        self.ground_screw_length.unwrap_or_default()
    }
}

// ============================================================================
// Roof configuration
// ============================================================================

/// Mounting family with its family-specific options
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "roof_type", rename_all = "snake_case")]
pub enum MountingFamily {
    SlantedRoof(SlantedRoofOptions),
    Steeldeck(SteeldeckOptions),
    #[serde(rename = "solarspeed_ew")]
    SolarspeedEastWest(TiltOptions),
    SolarspeedSouth(TiltOptions),
    AllfieldLandscape(TiltOptions),
    AllfieldPortrait(TiltOptions),
    GroundMount(GroundMountOptions),
}

impl MountingFamily {
    /// Family identifier
    pub fn roof_type(&self) -> RoofType {
        match self {
            MountingFamily::SlantedRoof(_) => RoofType::SlantedRoof,
            MountingFamily::Steeldeck(_) => RoofType::Steeldeck,
            MountingFamily::SolarspeedEastWest(_) => RoofType::SolarspeedEastWest,
            MountingFamily::SolarspeedSouth(_) => RoofType::SolarspeedSouth,
            MountingFamily::AllfieldLandscape(_) => RoofType::AllfieldLandscape,
            MountingFamily::AllfieldPortrait(_) => RoofType::AllfieldPortrait,
            MountingFamily::GroundMount(_) => RoofType::GroundMount,
        }
    }
}

/// Mounting system configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoofConfig {
    #[serde(flatten)]
    pub family: MountingFamily,

    /// Color of profiles, connectors and end caps
    #[serde(default)]
    pub profile_color: Color,

    /// Color of panel clamps
    #[serde(default)]
    pub clamp_color: Color,
}

impl RoofConfig {
    /// Create a configuration with explicit colors
    pub fn new(family: MountingFamily, profile_color: Color, clamp_color: Color) -> Self {
        RoofConfig {
            family,
            profile_color,
            clamp_color,
        }
    }

    /// Family identifier
    pub fn roof_type(&self) -> RoofType {
        self.family.roof_type()
    }

    /// Tilt angle, for the families that carry one
    pub fn angle(&self) -> Option<Degrees> {
        match &self.family {
            MountingFamily::SolarspeedEastWest(opts)
            | MountingFamily::SolarspeedSouth(opts)
            | MountingFamily::AllfieldLandscape(opts)
            | MountingFamily::AllfieldPortrait(opts) => Some(opts.angle),
            _ => None,
        }
    }
}

impl Default for RoofConfig {
    fn default() -> Self {
        RoofConfig {
            family: MountingFamily::SlantedRoof(SlantedRoofOptions::default()),
            profile_color: Color::Aluminium,
            clamp_color: Color::Aluminium,
        }
    }
}
