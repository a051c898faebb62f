//! # Unit Types
//!
//! Newtype wrappers for the two physical quantities a mounting configuration
//! carries: panel/rail lengths in millimeters and tilt angles in degrees.
//! Both serialize as bare numbers so configuration documents stay plain JSON.
//!
//! ## Example
//!
//! ```rust
//! use bom_core::units::{Degrees, Millimeters};
//!
//! let row = Millimeters(1134)
//!     .checked_mul(7)
//!     .and_then(|panels| panels.checked_add(Millimeters(20).checked_mul(6)?))
//!     .unwrap();
//! assert_eq!(row, Millimeters(8058));
//! assert_eq!(row.stock_lengths(Millimeters(6000)), 2);
//!
//! assert!(Degrees(12.5) > Degrees(12.0));
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Length
// ============================================================================

/// Length in whole millimeters
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub u32);

impl Millimeters {
    /// Number of stock pieces of `stock` length needed to cover this length
    /// end to end (no cut reuse).
    pub fn stock_lengths(self, stock: Millimeters) -> u32 {
        self.0.div_ceil(stock.0)
    }

    /// `self + rhs`, `None` past `u32::MAX` mm
    pub fn checked_add(self, rhs: Millimeters) -> Option<Millimeters> {
        self.0.checked_add(rhs.0).map(Millimeters)
    }

    /// `self × n`, `None` past `u32::MAX` mm
    pub fn checked_mul(self, n: u32) -> Option<Millimeters> {
        self.0.checked_mul(n).map(Millimeters)
    }
}

impl std::fmt::Display for Millimeters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} mm", self.0)
    }
}

// ============================================================================
// Angle
// ============================================================================

/// Tilt angle in degrees
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f64);

impl std::fmt::Display for Degrees {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°", self.0)
    }
}
