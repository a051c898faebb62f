//! # Steeldeck
//!
//! Mounting plates screwed onto the ribs of a trapezoidal steel sheet carry
//! the rail kit.
//!
//! - plates: `ceil(columns / 2) × rows × 2`
//! - connecting plates: `(rows − 1) × 2`, left out when zero
//! - bolts M8x30: 4 per plate

use super::rail_kit::RailKit;
use super::{quantity, Finish, FamilyTakeoff};
use crate::bom::LineItems;
use crate::catalog::{Catalog, PartKey};
use crate::config::{PanelConfig, RoofType, SteeldeckOptions};
use crate::errors::CalcResult;
use crate::resolvers;

pub const PLATES_PER_COLUMN_PAIR: u64 = 2;
pub const CONNECTING_PLATES_PER_JOINT: u64 = 2;
pub const BOLTS_PER_PLATE: u64 = 4;

pub fn calculate<'c>(
    catalog: &'c Catalog,
    panel: &PanelConfig,
    options: &SteeldeckOptions,
    finish: Finish,
) -> CalcResult<FamilyTakeoff<'c>> {
    let kit = RailKit::resolve(catalog, RoofType::Steeldeck, panel, finish)?;
    let plate = resolvers::steeldeck_plate(catalog, options.plate())?;

    let rows = u64::from(panel.rows);
    let plates = u64::from(panel.columns).div_ceil(2) * rows * PLATES_PER_COLUMN_PAIR;
    let connecting_plates = quantity(panel, rows.saturating_sub(1) * CONNECTING_PLATES_PER_JOINT)?;
    let bolts = quantity(panel, plates * BOLTS_PER_PLATE)?;
    let plates = quantity(panel, plates)?;

    tracing::debug!(plates, connecting_plates, bolts, "steeldeck quantities");

    let mut items = LineItems::new(catalog);
    kit.add_clamps_and_profiles(&mut items)?;
    items.add(plate, plates)?;
    items.add_nonzero(PartKey::SteeldeckConnectingPlate, connecting_plates)?;
    items.add(PartKey::SteeldeckBolt, bolts)?;

    let mut trailing = LineItems::new(catalog);
    kit.add_connectors(&mut trailing)?;

    Ok(FamilyTakeoff {
        items,
        bolted_clamps: kit.bolted_clamps(),
        trailing,
    })
}
