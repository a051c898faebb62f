//! Standard Axxiom product table.
//!
//! Colored parts come in pairs: the aluminium variant's code ends in `001`
//! and the black variant's in `002`, with "- ALU" / "- Zwart" appended to the
//! description.

use super::part::{
    ClampRange, ClickClampSize, Fastener, Part, PartCategory, PartKey, ProfileLength, TriangleAngle,
};
use crate::config::{Color, GroundScrewLength, HookType, ProfileType, SteeldeckPlate};

use super::part::PartCategory as Cat;

/// All parts of the standard catalog in listing order.
pub fn standard_parts() -> Vec<(PartKey, Part)> {
    let mut parts = Vec::with_capacity(80);

    // Ground mount
    parts.push((PartKey::GroundScrew(GroundScrewLength::Mm750), Part::new("1HGM01DD001", "Schroefpaal 750mm", 1, Cat::GroundMount)));
    parts.push((PartKey::GroundScrew(GroundScrewLength::Mm1000), Part::new("1HGM01DD002", "Schroefpaal 1000mm", 1, Cat::GroundMount)));
    parts.push((PartKey::GroundScrew(GroundScrewLength::Mm1500), Part::new("1HGM01DD003", "Schroefpaal 1500mm", 1, Cat::GroundMount)));
    parts.push((PartKey::GroundPostConnector, Part::new("1HGM02DD001", "Grondmontage Paal Connector", 1, Cat::GroundMount)));
    parts.push((PartKey::GroundProfileSupport, Part::new("1HGM03DD001", "Grondmontage Profiel Support", 1, Cat::GroundMount)));
    parts.push((PartKey::GroundCrossBar, Part::new("1HGM04DD001", "Grondmontage Cross Bar", 1, Cat::GroundMount)));

    // Roof hooks. Zinc roofing has no hook in the range yet.
    parts.push((PartKey::RoofHook(HookType::Normal), Part::new("1HSR11DD001", "Dakhaak Normaal", 30, Cat::SlantedRoof)));
    parts.push((PartKey::RoofHook(HookType::Long), Part::new("1HSR11DD002", "Dakhaak Lang", 30, Cat::SlantedRoof)));
    parts.push((PartKey::RoofHook(HookType::Hybrid), Part::new("1HSR11DD003", "Dakhaak Hybrid", 30, Cat::SlantedRoof)));
    parts.push((PartKey::RoofHook(HookType::Optimum), Part::new("1HSR11DD004", "Dakhaak Optimum", 30, Cat::SlantedRoof)));
    parts.push((PartKey::RoofHook(HookType::Slate), Part::new("1HSR12DD001", "Leisteen Haak", 25, Cat::SlantedRoof)));

    // Rail-kit clamps
    colored(&mut parts, "1HME15DD", "Middenklem 30-40mm", 20, Cat::Clamps, |c| PartKey::MiddleClamp(ClampRange::Range30To40, c));
    colored(&mut parts, "1HME16DD", "Eindklem 30-40mm", 20, Cat::Clamps, |c| PartKey::EndClamp(ClampRange::Range30To40, c));
    colored(&mut parts, "1HME17DD", "Middenklem 35-50mm", 20, Cat::Clamps, |c| PartKey::MiddleClamp(ClampRange::Range35To50, c));
    colored(&mut parts, "1HME18DD", "Eindklem 35-50mm", 20, Cat::Clamps, |c| PartKey::EndClamp(ClampRange::Range35To50, c));

    // Click clamps for the slanted roof system
    colored(&mut parts, "1HME21DD", "Klikmiddenklem 30-40mm", 20, Cat::Clamps, PartKey::ClickMiddleClamp);
    colored(&mut parts, "1HME22DD", "Klikeindklem 30mm", 20, Cat::Clamps, |c| PartKey::ClickEndClamp(ClickClampSize::Mm30, c));
    colored(&mut parts, "1HME23DD", "Klikeindklem 40mm", 20, Cat::Clamps, |c| PartKey::ClickEndClamp(ClickClampSize::Mm40, c));

    // Profiles
    colored(&mut parts, "1HPR01DD", "House Profiel 4200mm", 1, Cat::Profiles, |c| PartKey::Profile(ProfileType::House, ProfileLength::Mm4200, c));
    colored(&mut parts, "1HPR02DD", "House Profiel 6000mm", 1, Cat::Profiles, |c| PartKey::Profile(ProfileType::House, ProfileLength::Mm6000, c));
    colored(&mut parts, "1HPR03DD", "Feather Profiel 4200mm", 1, Cat::Profiles, |c| PartKey::Profile(ProfileType::Feather, ProfileLength::Mm4200, c));
    colored(&mut parts, "1HPR04DD", "Feather Profiel 6000mm", 1, Cat::Profiles, |c| PartKey::Profile(ProfileType::Feather, ProfileLength::Mm6000, c));
    colored(&mut parts, "1HPR05DD", "Sluitstop", 50, Cat::Profiles, PartKey::EndCap);

    colored(&mut parts, "1HPC01DD", "Profiel Connector", 10, Cat::Connectors, PartKey::ProfileConnector);

    // Steeldeck
    parts.push((PartKey::SteeldeckPlate(SteeldeckPlate::Plate15), Part::new("1HSD01DD001", "Steeldeck Plaatje 15cm", 10, Cat::Steeldeck)));
    parts.push((PartKey::SteeldeckPlate(SteeldeckPlate::Plate40), Part::new("1HSD01DD002", "Steeldeck Plaatje 40cm", 10, Cat::Steeldeck)));
    parts.push((PartKey::SteeldeckConnectingPlate, Part::new("1HSD02DD001", "Steeldeck Connecting Plate", 10, Cat::Steeldeck)));
    parts.push((PartKey::SteeldeckBolt, Part::new("1HSD03DD001", "Bout M8x30 RVS", 100, Cat::Steeldeck)));

    // Solarspeed
    parts.push((PartKey::SolarspeedTriangle(TriangleAngle::Deg10), Part::new("1HSS01DD001", "Solarspeed Triangle 10°", 1, Cat::Solarspeed)));
    parts.push((PartKey::SolarspeedTriangle(TriangleAngle::Deg15), Part::new("1HSS01DD002", "Solarspeed Triangle 15°", 1, Cat::Solarspeed)));
    parts.push((PartKey::SolarspeedBaseRail, Part::new("1HSS02DD001", "Solarspeed Base Rail 2400mm", 1, Cat::Solarspeed)));
    parts.push((PartKey::SolarspeedBallastTray, Part::new("1HSS03DD001", "Solarspeed Ballast Tray", 1, Cat::Solarspeed)));
    parts.push((PartKey::SolarspeedWindDeflector, Part::new("1HSS04DD001", "Solarspeed Wind Deflector", 1, Cat::Solarspeed)));

    // Allfield
    parts.push((PartKey::AllfieldTriangle(TriangleAngle::Deg10), Part::new("1HAF01DD001", "Allfield Triangle 10°", 1, Cat::Allfield)));
    parts.push((PartKey::AllfieldTriangle(TriangleAngle::Deg15), Part::new("1HAF01DD002", "Allfield Triangle 15°", 1, Cat::Allfield)));
    parts.push((PartKey::AllfieldBaseSupport, Part::new("1HAF02DD001", "Allfield Base Support", 1, Cat::Allfield)));
    parts.push((PartKey::AllfieldCrossConnector, Part::new("1HAF03DD001", "Allfield Cross Connector", 10, Cat::Allfield)));
    parts.push((PartKey::AllfieldBallastBlock, Part::new("1HAF04DD001", "Allfield Ballast Block Holder", 4, Cat::Allfield)));

    // Fasteners
    let fasteners = [
        (Fastener::BoltM8x20, "1HHW01DD001", "Bout M8x20 RVS A2", 100),
        (Fastener::BoltM8x25, "1HHW01DD002", "Bout M8x25 RVS A2", 100),
        (Fastener::BoltM8x30, "1HHW01DD003", "Bout M8x30 RVS A2", 100),
        (Fastener::BoltM10x25, "1HHW02DD001", "Bout M10x25 RVS A2", 100),
        (Fastener::BoltM10x30, "1HHW02DD002", "Bout M10x30 RVS A2", 100),
        (Fastener::NutM8, "1HHW03DD001", "Moer M8 RVS A2", 100),
        (Fastener::NutM10, "1HHW03DD002", "Moer M10 RVS A2", 100),
        (Fastener::WasherM8, "1HHW04DD001", "Rondel M8 RVS A2", 100),
        (Fastener::WasherM10, "1HHW04DD002", "Rondel M10 RVS A2", 100),
        (Fastener::TBoltM8x40, "1HHW05DD001", "T-Bout M8x40", 50),
        (Fastener::HammerHeadBoltM8x25, "1HHW06DD001", "Hamerkop Bout M8x25", 50),
        (Fastener::WoodScrew8x80, "1HHW07DD001", "Houtschroef 8X80", 100),
        (Fastener::HexBoltM10x30, "1HHW08DD001", "Zeskant bout M10x30", 100),
        (Fastener::SerratedNutM10, "1HHW09DD001", "Kartelmoer M10", 100),
    ];
    for (fastener, code, description, unit) in fasteners {
        parts.push((PartKey::Fastener(fastener), Part::new(code, description, unit, Cat::Hardware)));
    }

    // Cable management
    parts.push((PartKey::CableTray, Part::new("1HCM01DD001", "Kabelgoot 2000mm", 1, Cat::CableManagement)));
    parts.push((PartKey::CableClip, Part::new("1HCM02DD001", "Kabelclip voor Profiel", 100, Cat::CableManagement)));

    parts
}

/// Push the aluminium and black variants of a colored part.
fn colored(
    parts: &mut Vec<(PartKey, Part)>,
    code_prefix: &str,
    description: &str,
    packaging_unit: u32,
    category: PartCategory,
    key: impl Fn(Color) -> PartKey,
) {
    for color in Color::ALL {
        let (suffix, label) = match color {
            Color::Aluminium => ("001", "ALU"),
            Color::Black => ("002", "Zwart"),
        };
        parts.push((
            key(color),
            Part::new(
                format!("{code_prefix}{suffix}"),
                format!("{description} - {label}"),
                packaging_unit,
                category,
            ),
        ));
    }
}
