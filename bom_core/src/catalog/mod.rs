//! # Product Catalog
//!
//! The catalog maps structured [`PartKey`]s to [`Part`] records and records
//! which mounting families have been released, i.e. have their full part set
//! modelled. It is built once and never mutated while calculations run.
//!
//! A calculation is handed the catalog it should use. [`Catalog::try_standard`]
//! builds the full Axxiom range; [`standard_catalog`] returns a shared,
//! lazily built instance of it for callers that need no customisation, and
//! [`Catalog::standard`] a copy of that instance to customise.
//!
//! ## Example
//!
//! ```rust
//! use bom_core::catalog::{standard_catalog, PartKey};
//! use bom_core::config::{Color, HookType};
//!
//! let catalog = standard_catalog();
//! let hook = catalog.part(PartKey::RoofHook(HookType::Normal)).unwrap();
//! assert_eq!(hook.packaging_unit, 30);
//!
//! let cap = catalog.part(PartKey::EndCap(Color::Black)).unwrap();
//! assert_eq!(cap.description, "Sluitstop - Zwart");
//! ```

pub mod part;
mod standard;

pub use part::{
    ClampRange, ClickClampSize, Fastener, Part, PartCategory, PartKey, ProfileLength, TriangleAngle,
};

use std::collections::{BTreeSet, HashMap, HashSet};

use once_cell::sync::Lazy;

use crate::config::RoofType;
use crate::errors::{CalcError, CalcResult};

static STANDARD_CATALOG: Lazy<Catalog> = Lazy::new(|| {
    Catalog::try_standard().expect("standard product table has unique keys and codes and non-zero packaging units")
});

/// Shared instance of the standard catalog.
pub fn standard_catalog() -> &'static Catalog {
    &STANDARD_CATALOG
}

/// Immutable part registry.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Parts in listing order
    entries: Vec<(PartKey, Part)>,
    index: HashMap<PartKey, usize>,
    codes: HashSet<String>,
    released: BTreeSet<RoofType>,
}

impl Catalog {
    /// Empty catalog with no released families.
    pub fn new() -> Self {
        Catalog::default()
    }

    /// Build the full Axxiom range with every mounting family released.
    ///
    /// Fails on the first entry [`Catalog::insert`] rejects.
    pub fn try_standard() -> CalcResult<Self> {
        let mut catalog = Catalog::new();
        for (key, part) in standard::standard_parts() {
            catalog.insert(key, part)?;
        }
        for family in RoofType::ALL {
            catalog.release(family);
        }
        Ok(catalog)
    }

    /// Copy of the shared standard catalog.
    pub fn standard() -> Self {
        standard_catalog().clone()
    }

    /// Add a part.
    ///
    /// Rejects a zero packaging unit and duplicate keys or product codes.
    pub fn insert(&mut self, key: PartKey, part: Part) -> CalcResult<()> {
        if part.packaging_unit == 0 {
            return Err(CalcError::invalid_input(
                "packaging_unit",
                "0",
                format!("Part {} must be sold in packages of at least 1", part.code),
            ));
        }
        if self.index.contains_key(&key) {
            return Err(CalcError::duplicate_part(key.to_string()));
        }
        if self.codes.contains(&part.code) {
            return Err(CalcError::duplicate_part(part.code));
        }
        self.codes.insert(part.code.clone());
        self.index.insert(key, self.entries.len());
        self.entries.push((key, part));
        Ok(())
    }

    /// Mark a mounting family as released.
    pub fn release(&mut self, family: RoofType) {
        self.released.insert(family);
    }

    /// Withdraw a mounting family; its calculations yield no items.
    pub fn withdraw(&mut self, family: RoofType) {
        self.released.remove(&family);
    }

    /// Whether a family's parts are available for calculation
    pub fn is_released(&self, family: RoofType) -> bool {
        self.released.contains(&family)
    }

    /// Look up a part, if present.
    pub fn get(&self, key: PartKey) -> Option<&Part> {
        self.index.get(&key).map(|&i| &self.entries[i].1)
    }

    /// Look up a part that a calculation requires.
    pub fn part(&self, key: PartKey) -> CalcResult<&Part> {
        self.get(key).ok_or_else(|| CalcError::part_not_found(key.to_string()))
    }

    pub fn contains(&self, key: PartKey) -> bool {
        self.index.contains_key(&key)
    }

    /// All parts in listing order
    pub fn iter(&self) -> impl Iterator<Item = (PartKey, &Part)> {
        self.entries.iter().map(|(key, part)| (*key, part))
    }

    /// Parts of one category in listing order
    pub fn in_category(&self, category: PartCategory) -> impl Iterator<Item = (PartKey, &Part)> {
        self.iter().filter(move |(_, part)| part.category == category)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Color, GroundScrewLength, HookType, ProfileType};

    #[test]
    fn test_standard_catalog_is_complete() {
        let catalog = Catalog::try_standard().unwrap();
        assert_eq!(catalog.len(), standard::standard_parts().len());
        assert_eq!(catalog.len(), standard_catalog().len());
        for family in RoofType::ALL {
            assert!(catalog.is_released(family));
        }
    }

    #[test]
    fn test_rejected_entry_fails_the_build() {
        // the same insert path try_standard uses, fed a repeated code
        let mut catalog = Catalog::new();
        let parts = standard::standard_parts();
        let (key, part) = parts[0].clone();
        catalog.insert(key, part.clone()).unwrap();
        let err = catalog.insert(PartKey::GroundCrossBar, part).unwrap_err();
        assert_eq!(err.error_code(), "DUPLICATE_PART");
    }

    #[test]
    fn test_standard_parts_have_unique_codes_and_keys() {
        let parts = standard::standard_parts();
        let codes: HashSet<_> = parts.iter().map(|(_, p)| p.code.as_str()).collect();
        let keys: HashSet<_> = parts.iter().map(|(k, _)| *k).collect();
        assert_eq!(codes.len(), parts.len());
        assert_eq!(keys.len(), parts.len());
    }

    #[test]
    fn test_packaging_units_positive() {
        for (key, part) in standard_catalog().iter() {
            assert!(part.packaging_unit >= 1, "{} has a zero packaging unit", key);
        }
    }

    #[test]
    fn test_colored_variants() {
        let catalog = standard_catalog();
        let alu = catalog.part(PartKey::Profile(ProfileType::Feather, ProfileLength::Mm6000, Color::Aluminium)).unwrap();
        let black = catalog.part(PartKey::Profile(ProfileType::Feather, ProfileLength::Mm6000, Color::Black)).unwrap();
        assert_eq!(alu.code, "1HPR04DD001");
        assert_eq!(black.code, "1HPR04DD002");
        assert_eq!(black.description, "Feather Profiel 6000mm - Zwart");
    }

    #[test]
    fn test_zinc_hook_not_modelled() {
        assert!(standard_catalog().get(PartKey::RoofHook(HookType::Zinc)).is_none());
        let err = standard_catalog().part(PartKey::RoofHook(HookType::Zinc)).unwrap_err();
        assert_eq!(err.error_code(), "PART_NOT_FOUND");
    }

    #[test]
    fn test_insert_rejects_duplicates_and_zero_units() {
        let mut catalog = Catalog::new();
        let key = PartKey::GroundScrew(GroundScrewLength::Mm750);
        catalog.insert(key, Part::new("X1", "Screw", 1, PartCategory::GroundMount)).unwrap();

        let dup_key = catalog.insert(key, Part::new("X2", "Screw", 1, PartCategory::GroundMount));
        assert!(matches!(dup_key, Err(CalcError::DuplicatePart { .. })));

        let dup_code = catalog.insert(PartKey::GroundCrossBar, Part::new("X1", "Bar", 1, PartCategory::GroundMount));
        assert!(matches!(dup_code, Err(CalcError::DuplicatePart { .. })));

        let zero = catalog.insert(PartKey::GroundCrossBar, Part::new("X3", "Bar", 0, PartCategory::GroundMount));
        assert!(matches!(zero, Err(CalcError::InvalidInput { .. })));

        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_lookup_by_key_and_category() {
        let catalog = standard_catalog();
        let part = catalog.part(PartKey::Fastener(Fastener::HammerHeadBoltM8x25)).unwrap();
        assert_eq!(part.code, "1HHW06DD001");
        assert_eq!(part.packaging_unit, 50);

        assert_eq!(catalog.in_category(PartCategory::GroundMount).count(), 6);
        assert!(catalog.in_category(PartCategory::Clamps).all(|(_, p)| p.packaging_unit == 20));
    }

    #[test]
    fn test_withdraw_family() {
        let mut catalog = Catalog::standard();
        catalog.withdraw(RoofType::GroundMount);
        assert!(!catalog.is_released(RoofType::GroundMount));
        assert!(catalog.is_released(RoofType::Steeldeck));
        assert!(standard_catalog().is_released(RoofType::GroundMount));
    }
}
