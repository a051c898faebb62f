//! # Bill of Materials
//!
//! Output types of a calculation and the [`LineItems`] accumulator the
//! calculators write into.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "items": [
//!     {
//!       "product_code": "1HSR11DD001",
//!       "description": "Dakhaak Normaal",
//!       "required": 126,
//!       "packaged": 30,
//!       "to_order": 150
//!     }
//!   ],
//!   "total_panels": 35,
//!   "config": { "panel": { "...": "..." }, "roof": { "...": "..." } }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, PartKey};
use crate::config::{PanelConfig, RoofConfig};
use crate::errors::{CalcError, CalcResult};
use crate::packaging::round_to_packaging;

/// One part on the bill of materials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BomLineItem {
    /// Catalog product code
    pub product_code: String,

    /// Catalog description
    pub description: String,

    /// Exact quantity the installation consumes
    pub required: u32,

    /// Packaging unit of the part
    pub packaged: u32,

    /// Quantity to purchase: `required` rounded up to whole packages
    pub to_order: u32,
}

/// The two configuration documents a result was computed from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigEcho {
    pub panel: PanelConfig,
    pub roof: RoofConfig,
}

/// Result of a BOM calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BomResult {
    /// Line items in the order the calculator emitted them
    pub items: Vec<BomLineItem>,

    /// rows × columns
    pub total_panels: u32,

    /// Echo of the inputs, for report headers
    pub config: ConfigEcho,
}

impl BomResult {
    /// Result for a grid without panels
    pub fn empty(panel: &PanelConfig, roof: &RoofConfig) -> Self {
        BomResult {
            items: Vec::new(),
            total_panels: 0,
            config: ConfigEcho {
                panel: *panel,
                roof: *roof,
            },
        }
    }

    pub fn has_items(&self) -> bool {
        !self.items.is_empty()
    }

    /// Find a line by product code
    pub fn item(&self, product_code: &str) -> Option<&BomLineItem> {
        self.items.iter().find(|item| item.product_code == product_code)
    }

    /// Total pieces to purchase across all lines
    pub fn total_to_order(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.to_order)).sum()
    }

    /// Pretty-printed JSON of the result
    pub fn to_json(&self) -> CalcResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| CalcError::SerializationError {
            reason: e.to_string(),
        })
    }
}

/// Ordered, de-duplicating accumulator of part quantities.
///
/// Adding a part that is already present increases its required quantity in
/// place; a part never occupies two lines.
#[derive(Debug)]
pub struct LineItems<'c> {
    catalog: &'c Catalog,
    lines: Vec<(PartKey, u32)>,
}

impl<'c> LineItems<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        LineItems {
            catalog,
            lines: Vec::new(),
        }
    }

    /// Add `required` pieces of `key`.
    ///
    /// Fails if the catalog does not list the part, or if the accumulated
    /// quantity no longer fits a `u32`.
    pub fn add(&mut self, key: PartKey, required: u32) -> CalcResult<()> {
        self.catalog.part(key)?;
        match self.lines.iter_mut().find(|(k, _)| *k == key) {
            Some((_, quantity)) => {
                *quantity = quantity.checked_add(required).ok_or_else(|| {
                    CalcError::invalid_input(
                        "required",
                        format!("{} + {}", quantity, required),
                        format!("Accumulated quantity of {} exceeds the supported range", key),
                    )
                })?;
            }
            None => self.lines.push((key, required)),
        }
        Ok(())
    }

    /// Add `required` pieces of `key` unless `required` is zero.
    pub fn add_nonzero(&mut self, key: PartKey, required: u32) -> CalcResult<()> {
        if required > 0 {
            self.add(key, required)?;
        }
        Ok(())
    }

    /// Move every line of `other` to the end of this list, merging parts
    /// already present.
    pub fn append(&mut self, other: LineItems<'_>) -> CalcResult<()> {
        for (key, required) in other.lines {
            self.add(key, required)?;
        }
        Ok(())
    }

    pub fn contains(&self, key: PartKey) -> bool {
        self.lines.iter().any(|(k, _)| *k == key)
    }

    /// Required quantity accumulated for `key` so far
    pub fn required(&self, key: PartKey) -> u32 {
        self.lines
            .iter()
            .find(|(k, _)| *k == key)
            .map_or(0, |(_, quantity)| *quantity)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Resolve every line against the catalog and apply packaging.
    pub fn into_items(self) -> CalcResult<Vec<BomLineItem>> {
        let catalog = self.catalog;
        self.lines
            .into_iter()
            .map(|(key, required)| {
                let part = catalog.part(key)?;
                Ok(BomLineItem {
                    product_code: part.code.clone(),
                    description: part.description.clone(),
                    required,
                    packaged: part.packaging_unit,
                    to_order: round_to_packaging(required, part.packaging_unit)?,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{standard_catalog, Fastener};
    use crate::config::Color;

    #[test]
    fn test_accumulates_same_part() {
        let mut items = LineItems::new(standard_catalog());
        items.add(PartKey::ProfileConnector(Color::Black), 6).unwrap();
        items.add(PartKey::Fastener(Fastener::HexBoltM10x30), 10).unwrap();
        items.add(PartKey::ProfileConnector(Color::Black), 8).unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items.required(PartKey::ProfileConnector(Color::Black)), 14);

        let lines = items.into_items().unwrap();
        assert_eq!(lines[0].product_code, "1HPC01DD002");
        assert_eq!(lines[0].required, 14);
        assert_eq!(lines[0].to_order, 20);
        assert_eq!(lines[1].description, "Zeskant bout M10x30");
    }

    #[test]
    fn test_add_nonzero_skips_zero() {
        let mut items = LineItems::new(standard_catalog());
        items.add_nonzero(PartKey::AllfieldCrossConnector, 0).unwrap();
        assert!(items.is_empty());
        items.add(PartKey::AllfieldCrossConnector, 0).unwrap();
        let lines = items.into_items().unwrap();
        assert_eq!(lines[0].required, 0);
        assert_eq!(lines[0].to_order, 0);
    }

    #[test]
    fn test_unknown_part_rejected() {
        let catalog = Catalog::new();
        let mut items = LineItems::new(&catalog);
        let err = items.add(PartKey::CableClip, 3).unwrap_err();
        assert_eq!(err.error_code(), "PART_NOT_FOUND");
    }

    #[test]
    fn test_append_keeps_order_and_merges() {
        let mut items = LineItems::new(standard_catalog());
        items.add(PartKey::GroundCrossBar, 5).unwrap();
        items.add(PartKey::CableClip, 3).unwrap();

        let mut trailing = LineItems::new(standard_catalog());
        trailing.add(PartKey::ProfileConnector(Color::Aluminium), 8).unwrap();
        trailing.add(PartKey::CableClip, 2).unwrap();

        items.append(trailing).unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items.required(PartKey::CableClip), 5);

        let lines = items.into_items().unwrap();
        assert_eq!(lines[2].product_code, "1HPC01DD001");
    }

    #[test]
    fn test_accumulation_overflow_is_an_error() {
        let mut items = LineItems::new(standard_catalog());
        items.add(PartKey::GroundCrossBar, u32::MAX).unwrap();
        let err = items.add(PartKey::GroundCrossBar, 1).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert_eq!(items.required(PartKey::GroundCrossBar), u32::MAX);
    }

    #[test]
    fn test_packaging_overflow_is_an_error() {
        let mut items = LineItems::new(standard_catalog());
        // packaged per 100
        items.add(PartKey::CableClip, u32::MAX - 5).unwrap();
        assert_eq!(items.into_items().unwrap_err().error_code(), "INVALID_INPUT");
    }
}
