//! # Ground Mount
//!
//! Ground screws driven into the soil with a post connector and profile
//! support each; cross bars tie every row together.
//!
//! - ground screws: `ceil(columns / 2 + 1) × rows`
//! - post connectors and profile supports: one per ground screw
//! - cross bars: one per row

use super::rail_kit::RailKit;
use super::{quantity, Finish, FamilyTakeoff};
use crate::bom::LineItems;
use crate::catalog::{Catalog, PartKey};
use crate::config::{GroundMountOptions, PanelConfig, RoofType};
use crate::errors::CalcResult;
use crate::resolvers;

/// Ground screws under one row: `ceil(columns / 2 + 1)`
pub fn screws_per_row(columns: u32) -> u64 {
    (u64::from(columns) + 2).div_ceil(2)
}

pub fn calculate<'c>(
    catalog: &'c Catalog,
    panel: &PanelConfig,
    options: &GroundMountOptions,
    finish: Finish,
) -> CalcResult<FamilyTakeoff<'c>> {
    let kit = RailKit::resolve(catalog, RoofType::GroundMount, panel, finish)?;
    let screw = resolvers::ground_screw(catalog, options.screw_length())?;

    let screws = quantity(panel, screws_per_row(panel.columns) * u64::from(panel.rows))?;

    tracing::debug!(screws, length = %options.screw_length(), "ground mount quantities");

    let mut items = LineItems::new(catalog);
    kit.add_clamps_and_profiles(&mut items)?;
    items.add(screw, screws)?;
    items.add(PartKey::GroundPostConnector, screws)?;
    items.add(PartKey::GroundProfileSupport, screws)?;
    items.add(PartKey::GroundCrossBar, panel.rows)?;

    let mut trailing = LineItems::new(catalog);
    kit.add_connectors(&mut trailing)?;

    Ok(FamilyTakeoff {
        items,
        bolted_clamps: kit.bolted_clamps(),
        trailing,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::standard_catalog;
    use crate::config::{Color, GroundScrewLength, Orientation};
    use crate::units::Millimeters;

    #[test]
    fn test_screws_per_row() {
        assert_eq!(screws_per_row(1), 2); // ceil(1.5)
        assert_eq!(screws_per_row(2), 2);
        assert_eq!(screws_per_row(4), 3);
        assert_eq!(screws_per_row(7), 5); // ceil(4.5)
        assert_eq!(screws_per_row(u32::MAX), 2_147_483_649);
    }

    #[test]
    fn test_five_by_seven_long_screws() {
        let panel = PanelConfig {
            height: Millimeters(1722),
            width: Millimeters(1134),
            thickness: Millimeters(40),
            orientation: Orientation::Landscape,
            rows: 5,
            columns: 7,
        };
        let options = GroundMountOptions {
            ground_screw_length: Some(GroundScrewLength::Mm1500),
        };
        let finish = Finish {
            profile: Color::Aluminium,
            clamp: Color::Black,
        };

        let takeoff = calculate(standard_catalog(), &panel, &options, finish).unwrap();
        let items = &takeoff.items;
        assert_eq!(items.required(PartKey::GroundScrew(GroundScrewLength::Mm1500)), 25);
        assert_eq!(items.required(PartKey::GroundPostConnector), 25);
        assert_eq!(items.required(PartKey::GroundProfileSupport), 25);
        assert_eq!(items.required(PartKey::GroundCrossBar), 5);
        assert!(!items.contains(PartKey::GroundScrew(GroundScrewLength::Mm1000)));
    }

    #[test]
    fn test_default_screw_length() {
        let takeoff = calculate(
            standard_catalog(),
            &PanelConfig::default(),
            &GroundMountOptions::default(),
            Finish {
                profile: Color::Aluminium,
                clamp: Color::Aluminium,
            },
        )
        .unwrap();
        assert!(takeoff.items.contains(PartKey::GroundScrew(GroundScrewLength::Mm1000)));
    }
}
