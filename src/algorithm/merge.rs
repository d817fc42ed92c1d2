//! Concatenating strips

use crate::algorithm::orientation::Orientation;
use crate::io::error::{ReassemblyError, Result};
use crate::model::strip::Strip;
use ndarray::{Axis, concatenate};

/// Columns of `left` followed by columns of `right`
///
/// Neither input is modified and no column is resampled.
///
/// # Errors
///
/// Returns [`ReassemblyError::MismatchedHeight`] if the strips differ in height
pub fn merge(left: &Strip, right: &Strip) -> Result<Strip> {
    if left.height() != right.height() {
        return Err(ReassemblyError::MismatchedHeight {
            left_height: left.height(),
            right_height: right.height(),
        });
    }

    let pixels = concatenate(Axis(0), &[left.pixels(), right.pixels()]).map_err(|e| {
        ReassemblyError::InvalidSourceData {
            reason: format!("cannot concatenate strips: {e}"),
        }
    })?;
    Strip::from_pixels(pixels)
}

/// Merge `current` and `partner` in the order given by `orientation`
///
/// # Errors
///
/// Returns [`ReassemblyError::MismatchedHeight`] if the strips differ in height
pub fn merge_oriented(current: &Strip, partner: &Strip, orientation: Orientation) -> Result<Strip> {
    match orientation {
        Orientation::CurrentLeft => merge(current, partner),
        Orientation::PartnerLeft => merge(partner, current),
    }
}
