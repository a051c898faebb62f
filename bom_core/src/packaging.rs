//! # Packaging Rule
//!
//! Parts are sold in fixed packaging units (a box of 20 clamps, a bag of 100
//! bolts). The quantity to order is the required quantity rounded up to the
//! next whole package.

use crate::errors::{CalcError, CalcResult};

/// Round `required` up to the nearest multiple of `unit`.
///
/// A zero requirement orders nothing. `unit` must be at least 1; every
/// catalog part guarantees this, so a zero unit is a programming error and
/// panics. Fails when the rounded quantity does not fit a `u32`.
///
/// ```rust
/// use bom_core::packaging::round_to_packaging;
///
/// assert_eq!(round_to_packaging(126, 30).unwrap(), 150);
/// assert_eq!(round_to_packaging(20, 20).unwrap(), 20);
/// assert_eq!(round_to_packaging(0, 50).unwrap(), 0);
/// ```
pub fn round_to_packaging(required: u32, unit: u32) -> CalcResult<u32> {
    assert!(unit > 0, "packaging unit must be at least 1");
    required.div_ceil(unit).checked_mul(unit).ok_or_else(|| {
        CalcError::invalid_input(
            "required",
            required.to_string(),
            format!("Rounding up to packages of {} exceeds the largest orderable quantity", unit),
        )
    })
}
