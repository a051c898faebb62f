//! # bom_core - Solar Mounting Bill of Materials Engine
//!
//! `bom_core` turns a solar panel layout and a mounting system choice into the
//! list of catalog parts to order: every line carries the exact quantity the
//! installation consumes and the quantity to purchase after rounding up to
//! whole packages.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: a calculation is a pure function of its inputs and the catalog
//! - **JSON-First**: configurations and results implement Serialize/Deserialize
//! - **Rich Errors**: an unsupported option names the family, component and values
//! - **Injected Catalog**: products live in an explicit registry, not in formulas
//!
//! ## Quick Start
//!
//! ```rust
//! use bom_core::{compute_bom, PanelConfig, RoofConfig};
//!
//! let panel = PanelConfig { rows: 5, columns: 7, ..PanelConfig::default() };
//! let result = compute_bom(&panel, &RoofConfig::default()).unwrap();
//!
//! for item in &result.items {
//!     println!("{} {} x{}", item.product_code, item.description, item.to_order);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`config`] - panel grid and mounting system configuration
//! - [`catalog`] - part registry and the standard Axxiom range
//! - [`resolvers`] - configuration choice to catalog part
//! - [`calculators`] - quantity takeoff per mounting family
//! - [`aggregator`] - calculation entry point
//! - [`bom`] - result types
//! - [`packaging`] - rounding to packaging units
//! - [`units`] - type-safe unit wrappers
//! - [`errors`] - structured error types

pub mod aggregator;
pub mod bom;
pub mod calculators;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod packaging;
pub mod resolvers;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use aggregator::{compute_bom, BomEngine};
pub use bom::{BomLineItem, BomResult};
pub use catalog::{standard_catalog, Catalog, Part, PartCategory, PartKey};
pub use config::{Color, Installation, MountingFamily, PanelConfig, RoofConfig, RoofType};
pub use errors::{CalcError, CalcResult};
pub use packaging::round_to_packaging;
