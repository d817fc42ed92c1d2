//! Cutting an image into shuffled vertical strips

use crate::io::error::{Result, invalid_parameter};
use crate::model::strip::Strip;
use ndarray::{Axis, Slice};
use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

/// Cut `image` into consecutive strips of `strip_width` columns
///
/// The last strip is narrower when the width does not divide evenly.
///
/// # Errors
///
/// Returns an error if `strip_width` is zero
pub fn cut(image: &Strip, strip_width: usize) -> Result<Vec<Strip>> {
    if strip_width == 0 {
        return Err(invalid_parameter(
            "strip_width",
            &strip_width,
            &"must be at least one column",
        ));
    }

    let pixels = image.pixels();
    let width = pixels.len_of(Axis(0));

    (0..width)
        .step_by(strip_width)
        .map(|start| {
            let end = (start + strip_width).min(width);
            let columns = pixels.slice_axis(Axis(0), Slice::from(start..end));
            Strip::from_pixels(columns.to_owned())
        })
        .collect()
}

/// Cut `image` into strips and shuffle them with a seeded generator
///
/// # Errors
///
/// Returns an error if `strip_width` is zero
pub fn shred(image: &Strip, strip_width: usize, seed: u64) -> Result<Vec<Strip>> {
    let mut strips = cut(image, strip_width)?;
    let mut rng = StdRng::seed_from_u64(seed);
    strips.shuffle(&mut rng);
    Ok(strips)
}
