//! Column-major strip storage
//!
//! A strip is stored as an `Array2<Pixel>` of shape `(width, height)`, so each
//! outer lane is one top-to-bottom column and the left and right edges are
//! contiguous in memory.

use crate::io::error::{Result, invalid_source};
use crate::model::pixel::Pixel;
use image::RgbaImage;
use ndarray::{Array2, ArrayView1, ArrayView2, Axis};

/// One top-to-bottom column of pixels borrowed from a strip
pub type Column<'a> = ArrayView1<'a, Pixel>;

/// A full-height vertical slice of an image, as an ordered run of columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strip {
    pixels: Array2<Pixel>,
}

impl Strip {
    /// Wrap a `(width, height)` pixel array
    ///
    /// # Errors
    ///
    /// Returns an error if the array has no columns
    pub fn from_pixels(pixels: Array2<Pixel>) -> Result<Self> {
        if pixels.len_of(Axis(0)) == 0 {
            return Err(invalid_source(&"a strip needs at least one column"));
        }
        Ok(Self { pixels })
    }

    /// Build a strip from left-to-right columns
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No columns are given
    /// - The columns do not all have the same height
    pub fn from_columns(columns: Vec<Vec<Pixel>>) -> Result<Self> {
        let width = columns.len();
        let height = columns.first().map_or(0, Vec::len);

        if let Some((index, ragged)) = columns
            .iter()
            .enumerate()
            .find(|(_, column)| column.len() != height)
        {
            return Err(invalid_source(&format!(
                "column {index} has height {} but column 0 has height {height}",
                ragged.len()
            )));
        }

        let flat: Vec<Pixel> = columns.into_iter().flatten().collect();
        let pixels = Array2::from_shape_vec((width, height), flat)
            .map_err(|e| invalid_source(&format!("cannot shape columns: {e}")))?;
        Self::from_pixels(pixels)
    }

    /// Convert a row-major RGBA image into a column-major strip
    ///
    /// # Errors
    ///
    /// Returns an error if the image has zero width
    pub fn from_rgba_image(image: &RgbaImage) -> Result<Self> {
        let (width, height) = (image.width() as usize, image.height() as usize);
        let pixels = Array2::from_shape_fn((width, height), |(x, y)| {
            Pixel::from(*image.get_pixel(x as u32, y as u32))
        });
        Self::from_pixels(pixels)
    }

    /// Render the strip as a row-major RGBA image
    pub fn to_rgba_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width() as u32, self.height() as u32, |x, y| {
            self.pixels
                .get((x as usize, y as usize))
                .copied()
                .unwrap_or_default()
                .into()
        })
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.pixels.len_of(Axis(0))
    }

    /// Number of pixels in every column
    pub fn height(&self) -> usize {
        self.pixels.len_of(Axis(1))
    }

    /// Column at `index`, counted from the left
    pub fn column(&self, index: usize) -> Option<Column<'_>> {
        (index < self.width()).then(|| self.pixels.index_axis(Axis(0), index))
    }

    /// Left edge
    pub fn leftmost_column(&self) -> Column<'_> {
        // Non-empty by construction
        self.pixels.index_axis(Axis(0), 0)
    }

    /// Right edge
    pub fn rightmost_column(&self) -> Column<'_> {
        self.pixels.index_axis(Axis(0), self.width() - 1)
    }

    /// Columns from left to right
    pub fn columns(&self) -> impl ExactSizeIterator<Item = Column<'_>> + '_ {
        self.pixels.outer_iter()
    }

    /// Borrow the underlying `(width, height)` array
    pub fn pixels(&self) -> ArrayView2<'_, Pixel> {
        self.pixels.view()
    }

    /// Pixel at column `x`, row `y`
    pub fn pixel(&self, x: usize, y: usize) -> Option<Pixel> {
        self.pixels.get((x, y)).copied()
    }

    /// Split into the first `width` columns and the rest
    ///
    /// Returns `None` unless both halves would be non-empty.
    pub fn split_at(&self, width: usize) -> Option<(Self, Self)> {
        if width == 0 || width >= self.width() {
            return None;
        }
        let (left, right) = self.pixels.view().split_at(Axis(0), width);
        Some((
            Self {
                pixels: left.to_owned(),
            },
            Self {
                pixels: right.to_owned(),
            },
        ))
    }
}
