//! Edge similarity between two columns

use crate::io::error::{ReassemblyError, Result};
use crate::model::strip::Column;

/// Cost of placing column `left` directly beside column `right`
///
/// Sums, over corresponding pixels, the squared difference of each of the four
/// channels. Zero means the columns are identical; the cost is symmetric in
/// its arguments.
///
/// # Errors
///
/// Returns [`ReassemblyError::MismatchedHeight`] if the columns differ in
/// length. Neither column is truncated or padded.
pub fn edge_similarity(left: Column<'_>, right: Column<'_>) -> Result<u64> {
    if left.len() != right.len() {
        return Err(ReassemblyError::MismatchedHeight {
            left_height: left.len(),
            right_height: right.len(),
        });
    }

    Ok(left
        .iter()
        .zip(right.iter())
        .map(|(a, b)| a.squared_distance(*b))
        .sum())
}
