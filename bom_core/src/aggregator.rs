//! # BOM Aggregator
//!
//! Entry point of a calculation: dispatches on the mounting family, appends
//! the common hardware and applies packaging.
//!
//! ## Example
//!
//! ```rust
//! use bom_core::aggregator::compute_bom;
//! use bom_core::config::{PanelConfig, RoofConfig};
//!
//! let result = compute_bom(&PanelConfig::default(), &RoofConfig::default()).unwrap();
//! assert_eq!(result.total_panels, 8);
//! assert!(result.items.iter().all(|item| item.to_order >= item.required));
//! ```

use crate::bom::{BomResult, ConfigEcho, LineItems};
use crate::calculators;
use crate::catalog::{standard_catalog, Catalog, Fastener, PartKey};
use crate::config::{PanelConfig, RoofConfig};
use crate::errors::CalcResult;

/// Hardware shared by the bolted-clamp families
pub const HAMMER_HEAD_BOLT: PartKey = PartKey::Fastener(Fastener::HammerHeadBoltM8x25);

/// Computes bills of materials against one catalog.
#[derive(Debug, Clone, Copy)]
pub struct BomEngine<'c> {
    catalog: &'c Catalog,
}

impl<'c> BomEngine<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        BomEngine { catalog }
    }

    /// Compute the bill of materials of an installation.
    ///
    /// A grid without panels and a family the catalog has not released both
    /// give a result with no items. An unresolvable variant fails the whole
    /// calculation; no partial list is returned. A grid whose quantities do
    /// not fit a `u32` fails with `InvalidInput` naming rows and columns.
    pub fn compute(&self, panel: &PanelConfig, roof: &RoofConfig) -> CalcResult<BomResult> {
        let total_panels = panel.total_panels()?;
        if total_panels == 0 {
            tracing::debug!(rows = panel.rows, columns = panel.columns, "no panels, empty bill of materials");
            return Ok(BomResult::empty(panel, roof));
        }

        let family = roof.roof_type();
        let config = ConfigEcho {
            panel: *panel,
            roof: *roof,
        };

        if !self.catalog.is_released(family) {
            tracing::warn!(family = %family, "mounting family not released in this catalog");
            return Ok(BomResult {
                items: Vec::new(),
                total_panels,
                config,
            });
        }

        tracing::debug!(family = %family, total_panels, "computing bill of materials");

        let takeoff = calculators::calculate(self.catalog, panel, roof)?;
        let mut items = takeoff.items;
        append_common_hardware(&mut items, takeoff.bolted_clamps)?;
        items.append(takeoff.trailing)?;

        Ok(BomResult {
            items: items.into_items()?,
            total_panels,
            config,
        })
    }
}

/// Add one hammer-head bolt per bolted clamp, unless there are none or the
/// family already listed them.
fn append_common_hardware(items: &mut LineItems<'_>, bolted_clamps: u32) -> CalcResult<()> {
    if bolted_clamps == 0 || items.contains(HAMMER_HEAD_BOLT) {
        return Ok(());
    }
    items.add(HAMMER_HEAD_BOLT, bolted_clamps)
}

/// Compute against the shared standard catalog.
pub fn compute_bom(panel: &PanelConfig, roof: &RoofConfig) -> CalcResult<BomResult> {
    BomEngine::new(standard_catalog()).compute(panel, roof)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        Color, HookType, MountingFamily, Orientation, ProfileType, RoofType, RoofingType,
        SlantedRoofOptions, SteeldeckOptions, TiltOptions,
    };
    use crate::errors::CalcError;
    use crate::units::{Degrees, Millimeters};
    use std::collections::HashSet;

    fn reference_panel() -> PanelConfig {
        PanelConfig {
            height: Millimeters(1722),
            width: Millimeters(1134),
            thickness: Millimeters(35),
            orientation: Orientation::Landscape,
            rows: 5,
            columns: 7,
        }
    }

    fn reference_roof() -> RoofConfig {
        RoofConfig::new(
            MountingFamily::SlantedRoof(SlantedRoofOptions {
                roofing_type: Some(RoofingType::Tiled),
                hook_type: Some(HookType::Normal),
                profile_type: Some(ProfileType::Feather),
            }),
            Color::Black,
            Color::Black,
        )
    }

    fn every_family() -> Vec<RoofConfig> {
        let tilt = TiltOptions { angle: Degrees(15.0) };
        vec![
            reference_roof(),
            RoofConfig::new(MountingFamily::Steeldeck(SteeldeckOptions::default()), Color::Black, Color::Aluminium),
            RoofConfig::new(MountingFamily::SolarspeedEastWest(tilt), Color::Aluminium, Color::Aluminium),
            RoofConfig::new(MountingFamily::SolarspeedSouth(tilt), Color::Aluminium, Color::Black),
            RoofConfig::new(MountingFamily::AllfieldLandscape(tilt), Color::Black, Color::Black),
            RoofConfig::new(MountingFamily::AllfieldPortrait(tilt), Color::Aluminium, Color::Aluminium),
            RoofConfig::new(MountingFamily::GroundMount(Default::default()), Color::Aluminium, Color::Aluminium),
        ]
    }

    #[test]
    fn test_slanted_reference_result() {
        let result = compute_bom(&reference_panel(), &reference_roof()).unwrap();
        assert_eq!(result.total_panels, 35);
        assert_eq!(result.items.len(), 9);

        let hooks = result.item("1HSR11DD001").unwrap();
        assert_eq!((hooks.required, hooks.packaged, hooks.to_order), (126, 30, 150));
        let screws = result.item("1HHW07DD001").unwrap();
        assert_eq!((screws.required, screws.to_order), (252, 300));
        let middle = result.item("1HME21DD002").unwrap();
        assert_eq!((middle.required, middle.to_order), (56, 60));
        let end = result.item("1HME22DD002").unwrap();
        assert_eq!((end.required, end.to_order), (28, 40));
        let caps = result.item("1HPR05DD002").unwrap();
        assert_eq!((caps.required, caps.to_order), (28, 50));

        // slanted roofs use click clamps
        assert!(result.item("1HHW06DD001").is_none());
        assert_eq!(result.config.roof, reference_roof());
    }

    #[test]
    fn test_zero_panels_short_circuit() {
        for (rows, columns) in [(0, 7), (5, 0), (0, 0)] {
            let panel = PanelConfig {
                rows,
                columns,
                ..reference_panel()
            };
            let result = compute_bom(&panel, &reference_roof()).unwrap();
            assert!(!result.has_items());
            assert_eq!(result.total_panels, 0);
        }
    }

    #[test]
    fn test_zero_panels_skip_variant_resolution() {
        let panel = PanelConfig {
            rows: 0,
            ..reference_panel()
        };
        let roof = RoofConfig::new(
            MountingFamily::SlantedRoof(SlantedRoofOptions {
                roofing_type: Some(RoofingType::Zinc),
                ..Default::default()
            }),
            Color::Aluminium,
            Color::Aluminium,
        );
        assert!(compute_bom(&panel, &roof).is_ok());
    }

    #[test]
    fn test_deterministic() {
        for roof in every_family() {
            let first = compute_bom(&reference_panel(), &roof).unwrap();
            let second = compute_bom(&reference_panel(), &roof).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_packaging_and_unique_codes_for_every_family() {
        for roof in every_family() {
            let result = compute_bom(&reference_panel(), &roof).unwrap();
            assert!(result.has_items(), "{}", roof.roof_type());

            let mut seen = HashSet::new();
            for item in &result.items {
                assert!(seen.insert(item.product_code.clone()), "duplicate {}", item.product_code);
                assert!(item.to_order >= item.required);
                assert_eq!(item.to_order % item.packaged, 0);
                assert!(item.to_order < item.required + item.packaged || item.required == 0);
            }
        }
    }

    #[test]
    fn test_hammer_head_bolts_appended_once() {
        let roof = RoofConfig::new(
            MountingFamily::Steeldeck(SteeldeckOptions::default()),
            Color::Aluminium,
            Color::Aluminium,
        );
        let result = compute_bom(&reference_panel(), &roof).unwrap();

        let bolts: Vec<_> = result.items.iter().filter(|i| i.product_code == "1HHW06DD001").collect();
        assert_eq!(bolts.len(), 1);
        // 60 middle + 20 end clamps
        assert_eq!((bolts[0].required, bolts[0].to_order), (80, 100));

        // family parts, then the bolts, then the profile connectors
        let codes: Vec<&str> = result.items.iter().map(|i| i.product_code.as_str()).collect();
        let n = codes.len();
        assert_eq!(&codes[n - 3..], &["1HSD03DD001", "1HHW06DD001", "1HPC01DD001"]);
    }

    #[test]
    fn test_common_hardware_skipped_when_already_listed() {
        let catalog = standard_catalog();
        let mut items = LineItems::new(catalog);
        items.add(HAMMER_HEAD_BOLT, 12).unwrap();
        append_common_hardware(&mut items, 80).unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items.required(HAMMER_HEAD_BOLT), 12);
    }

    #[test]
    fn test_common_hardware_skipped_without_bolted_clamps() {
        let mut items = LineItems::new(standard_catalog());
        append_common_hardware(&mut items, 0).unwrap();
        assert!(items.is_empty());

        append_common_hardware(&mut items, 4).unwrap();
        assert_eq!(items.required(HAMMER_HEAD_BOLT), 4);
    }

    #[test]
    fn test_oversized_grid_is_invalid_input() {
        let panel = PanelConfig {
            rows: 70_000,
            columns: 70_000,
            ..reference_panel()
        };
        for roof in every_family() {
            match compute_bom(&panel, &roof).unwrap_err() {
                CalcError::InvalidInput { field, value, .. } => {
                    assert_eq!(field, "rows x columns");
                    assert_eq!(value, "70000 x 70000");
                }
                other => panic!("unexpected error {:?}", other),
            }
        }
    }

    #[test]
    fn test_large_slanted_grid_with_default_roof() {
        let panel = PanelConfig {
            rows: 20_000,
            columns: 10_000,
            ..PanelConfig::default()
        };
        let result = compute_bom(&panel, &RoofConfig::default()).unwrap();
        assert_eq!(result.total_panels, 200_000_000);

        let hooks = result.item("1HSR11DD001").unwrap();
        assert_eq!((hooks.required, hooks.to_order), (720_000_000, 720_000_000));
        let screws = result.item("1HHW07DD001").unwrap();
        assert_eq!(screws.required, 1_440_000_000);
    }

    #[test]
    fn test_withdrawn_family_yields_no_items() {
        let mut catalog = Catalog::standard();
        catalog.withdraw(RoofType::GroundMount);
        let engine = BomEngine::new(&catalog);

        let roof = RoofConfig::new(MountingFamily::GroundMount(Default::default()), Color::Aluminium, Color::Aluminium);
        let result = engine.compute(&reference_panel(), &roof).unwrap();
        assert!(!result.has_items());
        assert_eq!(result.total_panels, 35);

        assert!(engine.compute(&reference_panel(), &reference_roof()).unwrap().has_items());
    }

    #[test]
    fn test_unresolvable_hook_fails() {
        let roof = RoofConfig::new(
            MountingFamily::SlantedRoof(SlantedRoofOptions {
                roofing_type: Some(RoofingType::Slate),
                hook_type: Some(HookType::Hybrid),
                profile_type: None,
            }),
            Color::Aluminium,
            Color::Aluminium,
        );
        let err = compute_bom(&reference_panel(), &roof).unwrap_err();
        match err {
            CalcError::UnresolvableVariant { roof_type, component, .. } => {
                assert_eq!(roof_type, "Slanted Roof");
                assert_eq!(component, "roof hook");
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_released_catalog_missing_part() {
        let mut catalog = Catalog::new();
        catalog.release(RoofType::SlantedRoof);
        let err = BomEngine::new(&catalog)
            .compute(&reference_panel(), &reference_roof())
            .unwrap_err();
        assert_eq!(err.error_code(), "UNRESOLVABLE_VARIANT");
    }
}
