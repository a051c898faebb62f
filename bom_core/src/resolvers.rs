//! # Variant Resolvers
//!
//! Resolvers turn a configuration choice (hook type on a roofing, profile
//! type and color, frame thickness and clamp color) into the one catalog
//! part that realises it. They never compute quantities.
//!
//! Every resolver checks the key against the catalog in use. A choice with no
//! part is reported as [`CalcError::UnresolvableVariant`] naming the family,
//! the component and the offending values; no substitute part is picked.

use crate::catalog::{
    Catalog, ClampRange, ClickClampSize, PartKey, ProfileLength, TriangleAngle,
};
use crate::config::{
    Color, GroundScrewLength, HookType, ProfileType, RoofType, RoofingType, SteeldeckPlate,
};
use crate::errors::{CalcError, CalcResult};
use crate::units::{Degrees, Millimeters};

/// Modelled roof hooks per roofing material. A hook type allowed on a
/// roofing but missing here has no part in the range yet.
const ROOF_HOOKS: [(RoofingType, HookType, PartKey); 5] = [
    (RoofingType::Tiled, HookType::Normal, PartKey::RoofHook(HookType::Normal)),
    (RoofingType::Tiled, HookType::Long, PartKey::RoofHook(HookType::Long)),
    (RoofingType::Tiled, HookType::Hybrid, PartKey::RoofHook(HookType::Hybrid)),
    (RoofingType::Tiled, HookType::Optimum, PartKey::RoofHook(HookType::Optimum)),
    (RoofingType::Slate, HookType::Slate, PartKey::RoofHook(HookType::Slate)),
];

fn variant_name<T: std::fmt::Debug>(value: T) -> String {
    format!("{:?}", value).to_lowercase()
}

/// Accept `key` if the catalog lists it.
fn listed(
    catalog: &Catalog,
    family: RoofType,
    component: &str,
    key: PartKey,
    variant: impl FnOnce() -> String,
) -> CalcResult<PartKey> {
    if catalog.contains(key) {
        Ok(key)
    } else {
        Err(CalcError::unresolvable(
            family.display_name(),
            component,
            variant(),
            "no part in the catalog",
        ))
    }
}

/// Roof hook for a roofing material.
///
/// Fails when the hook type is not fitted on that roofing, and when the
/// combination is valid but not modelled yet (zinc).
pub fn roof_hook(catalog: &Catalog, roofing: RoofingType, hook: HookType) -> CalcResult<PartKey> {
    let variant = || format!("roofing={}, hook={}", variant_name(roofing), variant_name(hook));

    if !roofing.hook_types().contains(&hook) {
        return Err(CalcError::unresolvable(
            RoofType::SlantedRoof.display_name(),
            "roof hook",
            variant(),
            format!("{} is not fitted on {} roofing", hook.display_name(), variant_name(roofing)),
        ));
    }

    let key = ROOF_HOOKS
        .iter()
        .find(|(r, h, _)| *r == roofing && *h == hook)
        .map(|(_, _, key)| *key)
        .ok_or_else(|| {
            CalcError::unresolvable(
                RoofType::SlantedRoof.display_name(),
                "roof hook",
                variant(),
                "hook not yet modelled for this roofing",
            )
        })?;

    listed(catalog, RoofType::SlantedRoof, "roof hook", key, variant)
}

/// Rail profile by section, stock length and color
pub fn profile(
    catalog: &Catalog,
    family: RoofType,
    profile_type: ProfileType,
    length: ProfileLength,
    color: Color,
) -> CalcResult<PartKey> {
    listed(catalog, family, "profile", PartKey::Profile(profile_type, length, color), || {
        format!(
            "profile={}, length={}, color={}",
            variant_name(profile_type),
            length.length(),
            variant_name(color)
        )
    })
}

/// Profile connector by color
pub fn profile_connector(catalog: &Catalog, family: RoofType, color: Color) -> CalcResult<PartKey> {
    listed(catalog, family, "profile connector", PartKey::ProfileConnector(color), || {
        format!("color={}", variant_name(color))
    })
}

/// Profile end cap by color
pub fn end_cap(catalog: &Catalog, family: RoofType, color: Color) -> CalcResult<PartKey> {
    listed(catalog, family, "end cap", PartKey::EndCap(color), || format!("color={}", variant_name(color)))
}

/// Click middle clamp (slanted roof) by color
pub fn click_middle_clamp(catalog: &Catalog, color: Color) -> CalcResult<PartKey> {
    listed(catalog, RoofType::SlantedRoof, "middle clamp", PartKey::ClickMiddleClamp(color), || {
        format!("color={}", variant_name(color))
    })
}

/// Click end clamp (slanted roof) by frame thickness and color
pub fn click_end_clamp(catalog: &Catalog, thickness: Millimeters, color: Color) -> CalcResult<PartKey> {
    let size = ClickClampSize::for_thickness(thickness);
    listed(catalog, RoofType::SlantedRoof, "end clamp", PartKey::ClickEndClamp(size, color), || {
        format!("thickness={}, color={}", thickness, variant_name(color))
    })
}

/// Rail-kit middle clamp by frame thickness and color
pub fn middle_clamp(catalog: &Catalog, family: RoofType, thickness: Millimeters, color: Color) -> CalcResult<PartKey> {
    let range = ClampRange::for_thickness(thickness);
    listed(catalog, family, "middle clamp", PartKey::MiddleClamp(range, color), || {
        format!("thickness={}, color={}", thickness, variant_name(color))
    })
}

/// Rail-kit end clamp by frame thickness and color
pub fn end_clamp(catalog: &Catalog, family: RoofType, thickness: Millimeters, color: Color) -> CalcResult<PartKey> {
    let range = ClampRange::for_thickness(thickness);
    listed(catalog, family, "end clamp", PartKey::EndClamp(range, color), || {
        format!("thickness={}, color={}", thickness, variant_name(color))
    })
}

/// Triangle unit for a tilted family and requested angle
pub fn triangle(catalog: &Catalog, family: RoofType, angle: Degrees) -> CalcResult<PartKey> {
    let tilt = TriangleAngle::for_angle(angle);
    let key = match family {
        RoofType::SolarspeedEastWest | RoofType::SolarspeedSouth => PartKey::SolarspeedTriangle(tilt),
        RoofType::AllfieldLandscape | RoofType::AllfieldPortrait => PartKey::AllfieldTriangle(tilt),
        other => {
            return Err(CalcError::unresolvable(
                other.display_name(),
                "triangle",
                format!("angle={}", angle),
                "family has no triangle units",
            ))
        }
    };
    listed(catalog, family, "triangle", key, || format!("angle={}", angle))
}

/// Steeldeck mounting plate by plate type
pub fn steeldeck_plate(catalog: &Catalog, plate: SteeldeckPlate) -> CalcResult<PartKey> {
    listed(catalog, RoofType::Steeldeck, "plate", PartKey::SteeldeckPlate(plate), || {
        format!("plate={}", variant_name(plate))
    })
}

/// Ground screw by length
pub fn ground_screw(catalog: &Catalog, length: GroundScrewLength) -> CalcResult<PartKey> {
    listed(catalog, RoofType::GroundMount, "ground screw", PartKey::GroundScrew(length), || {
        format!("length={}", length)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{standard_catalog, Part, PartCategory};

    #[test]
    fn test_roof_hook_tiled() {
        let key = roof_hook(standard_catalog(), RoofingType::Tiled, HookType::Normal).unwrap();
        assert_eq!(key, PartKey::RoofHook(HookType::Normal));
        assert!(roof_hook(standard_catalog(), RoofingType::Tiled, HookType::Optimum).is_ok());
        assert!(roof_hook(standard_catalog(), RoofingType::Slate, HookType::Slate).is_ok());
    }

    #[test]
    fn test_roof_hook_not_in_roofing_set() {
        let err = roof_hook(standard_catalog(), RoofingType::Slate, HookType::Normal).unwrap_err();
        match err {
            CalcError::UnresolvableVariant { component, variant, .. } => {
                assert_eq!(component, "roof hook");
                assert_eq!(variant, "roofing=slate, hook=normal");
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_roof_hook_not_yet_modelled() {
        let err = roof_hook(standard_catalog(), RoofingType::Zinc, HookType::Zinc).unwrap_err();
        assert_eq!(err.error_code(), "UNRESOLVABLE_VARIANT");
        assert!(err.to_string().contains("not yet modelled"));
    }

    #[test]
    fn test_profile_resolution() {
        let key = profile(standard_catalog(), RoofType::SlantedRoof, ProfileType::Feather, ProfileLength::Mm6000, Color::Black).unwrap();
        assert_eq!(key, PartKey::Profile(ProfileType::Feather, ProfileLength::Mm6000, Color::Black));
    }

    #[test]
    fn test_clamps_bucket_by_thickness() {
        let cat = standard_catalog();
        assert_eq!(
            click_end_clamp(cat, Millimeters(35), Color::Black).unwrap(),
            PartKey::ClickEndClamp(ClickClampSize::Mm30, Color::Black)
        );
        assert_eq!(
            click_end_clamp(cat, Millimeters(40), Color::Aluminium).unwrap(),
            PartKey::ClickEndClamp(ClickClampSize::Mm40, Color::Aluminium)
        );
        assert_eq!(
            middle_clamp(cat, RoofType::Steeldeck, Millimeters(45), Color::Aluminium).unwrap(),
            PartKey::MiddleClamp(ClampRange::Range35To50, Color::Aluminium)
        );
        assert_eq!(
            end_clamp(cat, RoofType::Steeldeck, Millimeters(30), Color::Black).unwrap(),
            PartKey::EndClamp(ClampRange::Range30To40, Color::Black)
        );
    }

    #[test]
    fn test_triangle_per_family() {
        let cat = standard_catalog();
        assert_eq!(
            triangle(cat, RoofType::SolarspeedSouth, Degrees(10.0)).unwrap(),
            PartKey::SolarspeedTriangle(TriangleAngle::Deg10)
        );
        assert_eq!(
            triangle(cat, RoofType::AllfieldPortrait, Degrees(20.0)).unwrap(),
            PartKey::AllfieldTriangle(TriangleAngle::Deg15)
        );
        assert!(triangle(cat, RoofType::GroundMount, Degrees(15.0)).is_err());
    }

    #[test]
    fn test_missing_catalog_entry_is_unresolvable() {
        let mut catalog = Catalog::new();
        catalog
            .insert(PartKey::EndCap(Color::Aluminium), Part::new("C1", "Cap", 50, PartCategory::Profiles))
            .unwrap();

        assert!(end_cap(&catalog, RoofType::SlantedRoof, Color::Aluminium).is_ok());
        let err = end_cap(&catalog, RoofType::SlantedRoof, Color::Black).unwrap_err();
        assert_eq!(
            err,
            CalcError::unresolvable("Slanted Roof", "end cap", "color=black", "no part in the catalog")
        );
    }

    #[test]
    fn test_fixed_choice_resolvers() {
        let cat = standard_catalog();
        assert!(steeldeck_plate(cat, SteeldeckPlate::Plate15).is_ok());
        assert!(ground_screw(cat, GroundScrewLength::Mm1500).is_ok());
        assert!(profile_connector(cat, RoofType::Steeldeck, Color::Black).is_ok());
        assert!(click_middle_clamp(cat, Color::Aluminium).is_ok());
    }
}
