//! # Slanted Roof
//!
//! Roof hooks fitted under the roof covering carry two rails per panel row;
//! panels are held by click clamps and the rail ends closed with end caps.
//!
//! ## Derivation
//!
//! - rail length per row: `span × columns + 20 × (columns − 1)` mm, where
//!   span is the panel width in landscape and the height in portrait
//! - profiles: `ceil(row length / 6000) × 2 rails × rows`
//! - profile connectors: `2 × rows`
//! - roof hooks: `ceil(panels × 3.6)`
//! - wood screws: 2 per hook
//! - hex bolts M10x30 and serrated nuts M10: `hooks + 2 × connectors` each
//! - middle click clamps: `(columns − 1) × rows + (columns − 1) × (rows − 1) + 2`
//! - end click clamps and end caps: `4 × columns` each
//!
//! The hook density (3.6 per panel) and the three-term middle clamp count
//! are fitted to the reference spreadsheet, not derived from hook spacing or
//! clamp positions. Keep them as they are until the spreadsheet source says
//! otherwise.
//!
//! ## Example
//!
//! ```rust
//! use bom_core::calculators::slanted_roof::SlantedRoofQuantities;
//! use bom_core::config::{Orientation, PanelConfig};
//! use bom_core::units::Millimeters;
//!
//! let panel = PanelConfig {
//!     height: Millimeters(1722),
//!     width: Millimeters(1134),
//!     thickness: Millimeters(35),
//!     orientation: Orientation::Landscape,
//!     rows: 5,
//!     columns: 7,
//! };
//! let q = SlantedRoofQuantities::for_panel(&panel).unwrap();
//! assert_eq!(q.roof_hooks, 126);
//! assert_eq!(q.middle_clamps, 56);
//! ```

use serde::{Deserialize, Serialize};

use super::{quantity, Finish, FamilyTakeoff, PANEL_GAP};
use crate::bom::LineItems;
use crate::catalog::{Catalog, Fastener, PartKey, ProfileLength};
use crate::config::{PanelConfig, RoofType, SlantedRoofOptions};
use crate::errors::CalcResult;
use crate::resolvers;
use crate::units::Millimeters;

/// Profile stock length used on slanted roofs
pub const PROFILE_STOCK: ProfileLength = ProfileLength::Mm6000;

pub const RAILS_PER_ROW: u64 = 2;

pub const CONNECTORS_PER_ROW: u64 = 2;

/// Calibrated hook density, in tenths of a hook per panel (3.6)
pub const HOOKS_PER_PANEL_TENTHS: u64 = 36;

pub const WOOD_SCREWS_PER_HOOK: u64 = 2;

/// Bolts joining each connector to its two profiles
pub const BOLTS_PER_CONNECTOR: u64 = 2;

pub const END_CLAMPS_PER_COLUMN: u64 = 4;

pub const END_CAPS_PER_COLUMN: u64 = 4;

/// Required quantities of a slanted roof installation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlantedRoofQuantities {
    /// Length of one panel row along the rail
    pub row_length: Millimeters,
    pub profiles_per_rail: u32,
    pub profiles: u32,
    pub connectors: u32,
    pub roof_hooks: u32,
    pub wood_screws: u32,
    /// Hex bolts M10x30, matched 1:1 by serrated nuts
    pub bolts: u32,
    pub middle_clamps: u32,
    pub end_clamps: u32,
    pub end_caps: u32,
}

impl SlantedRoofQuantities {
    /// Derive all counts from the panel grid.
    ///
    /// Counts are computed in `u64` and fail with
    /// [`CalcError::InvalidInput`](crate::errors::CalcError::InvalidInput) when
    /// one does not fit a line item.
    pub fn for_panel(panel: &PanelConfig) -> CalcResult<Self> {
        let total = u64::from(panel.total_panels()?);
        let rows = u64::from(panel.rows);
        let columns = u64::from(panel.columns);

        let row_length = panel.row_length(PANEL_GAP)?;
        let profiles_per_rail = row_length.stock_lengths(PROFILE_STOCK.length());
        let profiles = u64::from(profiles_per_rail) * RAILS_PER_ROW * rows;
        let connectors = CONNECTORS_PER_ROW * rows;

        let roof_hooks = (total * HOOKS_PER_PANEL_TENTHS).div_ceil(10);
        let wood_screws = roof_hooks * WOOD_SCREWS_PER_HOOK;
        let bolts = roof_hooks + BOLTS_PER_CONNECTOR * connectors;

        let gaps = columns.saturating_sub(1);
        let middle_clamps = gaps * rows + gaps * rows.saturating_sub(1) + 2;

        let q = |value| quantity(panel, value);
        Ok(SlantedRoofQuantities {
            row_length,
            profiles_per_rail,
            profiles: q(profiles)?,
            connectors: q(connectors)?,
            roof_hooks: q(roof_hooks)?,
            wood_screws: q(wood_screws)?,
            bolts: q(bolts)?,
            middle_clamps: q(middle_clamps)?,
            end_clamps: q(END_CLAMPS_PER_COLUMN * columns)?,
            end_caps: q(END_CAPS_PER_COLUMN * columns)?,
        })
    }
}

/// Slanted roof takeoff.
///
/// Click clamps need no hammer-head bolts, so nothing is left for the
/// aggregator to add.
pub fn calculate<'c>(
    catalog: &'c Catalog,
    panel: &PanelConfig,
    options: &SlantedRoofOptions,
    finish: Finish,
) -> CalcResult<FamilyTakeoff<'c>> {
    let family = RoofType::SlantedRoof;
    let q = SlantedRoofQuantities::for_panel(panel)?;

    // Resolve every variant before emitting anything.
    let profile = resolvers::profile(catalog, family, options.profile(), PROFILE_STOCK, finish.profile)?;
    let connector = resolvers::profile_connector(catalog, family, finish.profile)?;
    let hook = resolvers::roof_hook(catalog, options.roofing(), options.hook())?;
    let middle_clamp = resolvers::click_middle_clamp(catalog, finish.clamp)?;
    let end_clamp = resolvers::click_end_clamp(catalog, panel.thickness, finish.clamp)?;
    let end_cap = resolvers::end_cap(catalog, family, finish.profile)?;

    tracing::debug!(
        rows = panel.rows,
        columns = panel.columns,
        row_length_mm = q.row_length.0,
        hooks = q.roof_hooks,
        "slanted roof quantities"
    );

    let mut items = LineItems::new(catalog);
    items.add(profile, q.profiles)?;
    items.add_nonzero(connector, q.connectors)?;
    items.add(hook, q.roof_hooks)?;
    items.add(PartKey::Fastener(Fastener::WoodScrew8x80), q.wood_screws)?;
    items.add(PartKey::Fastener(Fastener::HexBoltM10x30), q.bolts)?;
    items.add(PartKey::Fastener(Fastener::SerratedNutM10), q.bolts)?;
    items.add(middle_clamp, q.middle_clamps)?;
    items.add(end_clamp, q.end_clamps)?;
    items.add(end_cap, q.end_caps)?;

    Ok(FamilyTakeoff {
        items,
        bolted_clamps: 0,
        trailing: LineItems::new(catalog),
    })
}
