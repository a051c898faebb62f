//! # Allfield
//!
//! Ballasted triangle system for open fields and flat roofs, landscape or
//! portrait.
//!
//! - triangles: one per panel, tilt by angle
//! - base supports: two per panel
//! - cross connectors: `(columns − 1) × rows`, left out when zero
//! - ballast block holders: one per panel

use super::rail_kit::RailKit;
use super::{quantity, Finish, FamilyTakeoff};
use crate::bom::LineItems;
use crate::catalog::{Catalog, PartKey};
use crate::config::{PanelConfig, RoofType, TiltOptions};
use crate::errors::CalcResult;
use crate::resolvers;

pub const BASE_SUPPORTS_PER_PANEL: u64 = 2;

/// `family` is [`RoofType::AllfieldLandscape`] or [`RoofType::AllfieldPortrait`].
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
    let base_supports = quantity(panel, u64::from(total) * BASE_SUPPORTS_PER_PANEL)?;
    let cross_connectors = panel.columns.saturating_sub(1) * panel.rows;

    tracing::debug!(family = %family, angle = options.angle.0, cross_connectors, "allfield quantities");

    let mut items = LineItems::new(catalog);
    kit.add_clamps_and_profiles(&mut items)?;
    items.add(triangle, total)?;
    items.add(PartKey::AllfieldBaseSupport, base_supports)?;
    items.add_nonzero(PartKey::AllfieldCrossConnector, cross_connectors)?;
    items.add(PartKey::AllfieldBallastBlock, total)?;

    let mut trailing = LineItems::new(catalog);
    kit.add_connectors(&mut trailing)?;

    Ok(FamilyTakeoff {
        items,
        bolted_clamps: kit.bolted_clamps(),
        trailing,
    })
}
