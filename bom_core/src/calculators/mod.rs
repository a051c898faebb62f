//! # Roof-Type Calculators
//!
//! One calculator per mounting family. Each follows the same shape:
//!
//! - derive the family's counts from the panel grid (rows, columns, panel
//!   dimensions with orientation applied, the fixed panel gap)
//! - resolve the part for each count via [`crate::resolvers`]
//! - add one line per part to a [`LineItems`] accumulator
//!
//! The family constants are calibrated against the Axxiom engineering
//! spreadsheet. They are business figures, not geometry derived from first
//! principles, and are reproduced exactly.
//!
//! ## Available Calculators
//!
//! - [`slanted_roof`] - hooks, feather/house profiles, click clamps
//! - [`steeldeck`] - plates and bolts on trapezoidal sheet, rail kit
//! - [`solarspeed`] - elevated east-west and south rail systems, rail kit
//! - [`allfield`] - ballasted flat-field triangles, rail kit
//! - [`ground_mount`] - ground screws and cross bars, rail kit
//! - [`rail_kit`] - clamps, house profiles and connectors shared by the
//!   non-slanted families

pub mod allfield;
pub mod ground_mount;
pub mod rail_kit;
pub mod slanted_roof;
pub mod solarspeed;
pub mod steeldeck;

use crate::bom::LineItems;
use crate::catalog::Catalog;
use crate::config::{Color, MountingFamily, PanelConfig, RoofConfig};
use crate::errors::CalcResult;
use crate::units::Millimeters;

/// Gap between neighbouring panels in a row
pub const PANEL_GAP: Millimeters = Millimeters(20);

/// Color choices shared by every family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Finish {
    /// Profiles, connectors, end caps
    pub profile: Color,
    /// Panel clamps
    pub clamp: Color,
}

impl From<&RoofConfig> for Finish {
    fn from(roof: &RoofConfig) -> Self {
        Finish {
            profile: roof.profile_color,
            clamp: roof.clamp_color,
        }
    }
}

/// Parts a family calculator produced.
#[derive(Debug)]
pub struct FamilyTakeoff<'c> {
    /// Family parts in emission order
    pub items: LineItems<'c>,

    /// Clamps fixed with hammer-head bolts; the aggregator supplies the bolts
    pub bolted_clamps: u32,

    /// Parts listed after the common hardware (profile connectors)
    pub trailing: LineItems<'c>,
}

/// Narrow a quantity computed in `u64` back to a line-item count.
///
/// Grid counts are widened before multiplying so that only the final value
/// needs a range check.
pub fn quantity(panel: &PanelConfig, value: u64) -> CalcResult<u32> {
    u32::try_from(value).map_err(|_| panel.grid_too_large())
}

/// Run the calculator for the configured family.
///
/// The grid must hold at least one panel.
pub fn calculate<'c>(catalog: &'c Catalog, panel: &PanelConfig, roof: &RoofConfig) -> CalcResult<FamilyTakeoff<'c>> {
    let finish = Finish::from(roof);
    match &roof.family {
        MountingFamily::SlantedRoof(opts) => slanted_roof::calculate(catalog, panel, opts, finish),
        MountingFamily::Steeldeck(opts) => steeldeck::calculate(catalog, panel, opts, finish),
        MountingFamily::SolarspeedEastWest(opts) | MountingFamily::SolarspeedSouth(opts) => {
            solarspeed::calculate(catalog, roof.roof_type(), panel, opts, finish)
        }
        MountingFamily::AllfieldLandscape(opts) | MountingFamily::AllfieldPortrait(opts) => {
            allfield::calculate(catalog, roof.roof_type(), panel, opts, finish)
        }
        MountingFamily::GroundMount(opts) => ground_mount::calculate(catalog, panel, opts, finish),
    }
}
