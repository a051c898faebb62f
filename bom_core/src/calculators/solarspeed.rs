//! # Solarspeed
//!
//! Elevated rail system on flat roofs, in an east-west and a south-facing
//! layout. Both layouts use the same counts; the triangle tilt follows the
//! configured angle (10° up to 12°, else 15°).
//!
//! - triangles: one per panel
//! - base rails: one per row
//! - ballast trays: one per two panels, rounded up
//! - wind deflectors: `2 × columns + 2 × rows`

use super::rail_kit::RailKit;
use super::{quantity, Finish, FamilyTakeoff};
use crate::bom::LineItems;
use crate::catalog::{Catalog, PartKey};
use crate::config::{PanelConfig, RoofType, TiltOptions};
use crate::errors::CalcResult;
use crate::resolvers;

pub const PANELS_PER_BALLAST_TRAY: u32 = 2;
pub const WIND_DEFLECTORS_PER_EDGE_PANEL: u64 = 2;

/// `family` is [`RoofType::SolarspeedEastWest`] or [`RoofType::SolarspeedSouth`].
pub fn calculate<'c>(
    catalog: &'c Catalog,
    family: RoofType,
    panel: &PanelConfig,
    options: &TiltOptions,
    finish: Finish,
) -> CalcResult<FamilyTakeoff<'c>> {
    let kit = RailKit::resolve(catalog, family, panel, finish)?;
    let triangle = resolvers::triangle(catalog, family, options.angle)?;

    let total = panel.total_panels()?;
    let ballast_trays = total.div_ceil(PANELS_PER_BALLAST_TRAY);
    let edges = u64::from(panel.columns) + u64::from(panel.rows);
    let wind_deflectors = quantity(panel, WIND_DEFLECTORS_PER_EDGE_PANEL * edges)?;

    tracing::debug!(
        family = %family,
        angle = options.angle.0,
        ballast_trays,
        wind_deflectors,
        "solarspeed quantities"
    );

    let mut items = LineItems::new(catalog);
    kit.add_clamps_and_profiles(&mut items)?;
    items.add(triangle, total)?;
    items.add(PartKey::SolarspeedBaseRail, panel.rows)?;
    items.add(PartKey::SolarspeedBallastTray, ballast_trays)?;
    items.add(PartKey::SolarspeedWindDeflector, wind_deflectors)?;

    let mut trailing = LineItems::new(catalog);
    kit.add_connectors(&mut trailing)?;

    Ok(FamilyTakeoff {
        items,
        bolted_clamps: kit.bolted_clamps(),
        trailing,
    })
}
