//! # Rail Kit
//!
//! Clamps, house profiles and profile connectors used by every family except
//! the slanted roof. The family calculator emits the kit around its own parts:
//! clamps and profiles first, connectors after the common hardware.
//!
//! ## Derivation
//!
//! - middle clamps: `(columns − 1) × rows × 2`, left out when zero
//! - end clamps: `rows × 4`
//! - house profiles: `2 × rows`, cut from 4200 mm stock when one row fits in
//!   it, else 6000 mm stock
//! - profile connectors: `(rows − 1) × 2`, left out when zero
//!
//! Rail-kit clamps are bolted; middle and end clamps together give the number
//! of hammer-head bolts the aggregator adds.

use super::{quantity, Finish, PANEL_GAP};
use crate::bom::LineItems;
use crate::catalog::{Catalog, PartKey, ProfileLength};
use crate::config::{PanelConfig, ProfileType, RoofType};
use crate::errors::CalcResult;
use crate::resolvers;

pub const MIDDLE_CLAMPS_PER_GAP: u64 = 2;
pub const END_CLAMPS_PER_ROW: u64 = 4;
pub const PROFILES_PER_ROW: u64 = 2;
pub const CONNECTORS_PER_JOINT: u64 = 2;

/// Required quantities of the rail kit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RailKitQuantities {
    pub middle_clamps: u32,
    pub end_clamps: u32,
    pub profile_length: ProfileLength,
    pub profiles: u32,
    pub connectors: u32,
    /// Clamps fixed with a hammer-head bolt
    pub bolted_clamps: u32,
}

impl RailKitQuantities {
    pub fn for_panel(panel: &PanelConfig) -> CalcResult<Self> {
        panel.total_panels()?;
        let rows = u64::from(panel.rows);
        let columns = u64::from(panel.columns);

        let middle_clamps = columns.saturating_sub(1) * rows * MIDDLE_CLAMPS_PER_GAP;
        let end_clamps = rows * END_CLAMPS_PER_ROW;

        let q = |value| quantity(panel, value);
        Ok(RailKitQuantities {
            middle_clamps: q(middle_clamps)?,
            end_clamps: q(end_clamps)?,
            profile_length: ProfileLength::for_row(panel.row_length(PANEL_GAP)?),
            profiles: q(PROFILES_PER_ROW * rows)?,
            connectors: q(rows.saturating_sub(1) * CONNECTORS_PER_JOINT)?,
            bolted_clamps: q(middle_clamps + end_clamps)?,
        })
    }
}

/// Resolved rail kit of one installation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RailKit {
    pub quantities: RailKitQuantities,
    middle_clamp: PartKey,
    end_clamp: PartKey,
    profile: PartKey,
    connector: PartKey,
}

impl RailKit {
    /// Size the kit and resolve its parts for `family`.
    pub fn resolve(catalog: &Catalog, family: RoofType, panel: &PanelConfig, finish: Finish) -> CalcResult<Self> {
        let quantities = RailKitQuantities::for_panel(panel)?;
        Ok(RailKit {
            quantities,
            middle_clamp: resolvers::middle_clamp(catalog, family, panel.thickness, finish.clamp)?,
            end_clamp: resolvers::end_clamp(catalog, family, panel.thickness, finish.clamp)?,
            profile: resolvers::profile(
                catalog,
                family,
                ProfileType::House,
                quantities.profile_length,
                finish.profile,
            )?,
            connector: resolvers::profile_connector(catalog, family, finish.profile)?,
        })
    }

    /// Emit the clamps and profiles.
    pub fn add_clamps_and_profiles(&self, items: &mut LineItems<'_>) -> CalcResult<()> {
        items.add_nonzero(self.middle_clamp, self.quantities.middle_clamps)?;
        items.add(self.end_clamp, self.quantities.end_clamps)?;
        items.add(self.profile, self.quantities.profiles)
    }

    /// Emit the profile connectors into the family's trailing lines.
    pub fn add_connectors(&self, trailing: &mut LineItems<'_>) -> CalcResult<()> {
        trailing.add_nonzero(self.connector, self.quantities.connectors)
    }

    pub fn bolted_clamps(&self) -> u32 {
        self.quantities.bolted_clamps
    }
}
