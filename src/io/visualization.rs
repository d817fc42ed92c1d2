//! Contact sheets and GIF recording of the assembly process

use crate::algorithm::working_set::WorkingSet;
use crate::io::configuration::{FINAL_FRAME_HOLD, VIEWER_MIN_FRAME_DELAY_MS};
use crate::io::error::{ReassemblyError, Result, invalid_source};
use crate::model::pixel::Pixel;
use crate::model::strip::Strip;
use image::{Delay, Frame, RgbaImage, imageops};
use ndarray::{Array2, Axis, Slice};
use std::path::Path;

/// Lay strips side by side, separated by `buffer_width` transparent columns
///
/// Shorter strips are padded at the bottom so strips of different heights can
/// still be inspected together.
///
/// # Errors
///
/// Returns an error if no strips are given
pub fn contact_sheet<'a, I>(strips: I, buffer_width: usize) -> Result<Strip>
where
    I: IntoIterator<Item = &'a Strip>,
{
    let strips: Vec<&Strip> = strips.into_iter().collect();
    if strips.is_empty() {
        return Err(invalid_source(&"no strips to lay out"));
    }

    let height = strips.iter().map(|strip| strip.height()).max().unwrap_or(0);
    let width = strips.iter().map(|strip| strip.width()).sum::<usize>()
        + buffer_width * (strips.len() - 1);

    let mut sheet = Array2::from_elem((width, height), Pixel::TRANSPARENT);
    let mut x = 0;
    for strip in strips {
        let mut region = sheet.slice_axis_mut(Axis(0), Slice::from(x..x + strip.width()));
        region
            .slice_axis_mut(Axis(1), Slice::from(0..strip.height()))
            .assign(&strip.pixels());
        x += strip.width() + buffer_width;
    }

    Strip::from_pixels(sheet)
}

/// Captures the working set after every round for later animation
pub struct AssemblyCapture {
    frames: Vec<RgbaImage>,
    buffer_width: usize,
}

impl AssemblyCapture {
    /// Start an empty capture drawing `buffer_width` separators between strips
    pub const fn new(buffer_width: usize) -> Self {
        Self {
            frames: Vec::new(),
            buffer_width,
        }
    }

    /// Render the live pieces of `working_set` in canonical order as a frame
    ///
    /// # Errors
    ///
    /// Returns an error if the working set is empty
    pub fn record(&mut self, working_set: &WorkingSet) -> Result<()> {
        let sheet = contact_sheet(
            working_set.iter().map(|(_, piece)| &piece.strip),
            self.buffer_width,
        )?;
        self.frames.push(sheet.to_rgba_image());
        Ok(())
    }

    /// Number of captured frames
    pub const fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Export the captured frames as an animated GIF
    ///
    /// Every frame is drawn onto a canvas large enough for the widest frame.
    /// The final frame is held longer so the result stays visible. The file is
    /// only created once encoding has succeeded.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No frames were captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32) -> Result<()> {
        if self.frames.is_empty() {
            return Err(invalid_source(&"no frames captured for visualization"));
        }

        let delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let canvas_width = self.frames.iter().map(RgbaImage::width).max().unwrap_or(1);
        let canvas_height = self.frames.iter().map(RgbaImage::height).max().unwrap_or(1);

        let last = self.frames.len() - 1;
        let frames: Vec<Frame> = self
            .frames
            .iter()
            .enumerate()
            .map(|(index, frame)| {
                let mut canvas = RgbaImage::new(canvas_width, canvas_height);
                imageops::replace(&mut canvas, frame, 0, 0);
                let hold = if index == last { FINAL_FRAME_HOLD } else { 1 };
                Frame::from_parts(
                    canvas,
                    0,
                    0,
                    Delay::from_numer_denom_ms(delay_ms * hold, 1),
                )
            })
            .collect();

        // The encoder writes the trailer on drop, so it must go out of scope
        // before the bytes are complete
        let mut encoded = Vec::new();
        {
            let mut encoder = image::codecs::gif::GifEncoder::new(&mut encoded);
            encoder
                .encode_frames(frames)
                .map_err(|e| ReassemblyError::ImageExport {
                    path: output_path.to_path_buf(),
                    source: e,
                })?;
        }

        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ReassemblyError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        std::fs::write(output_path, encoded).map_err(|e| ReassemblyError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "write animation",
            source: e,
        })
    }
}
