//! RGBA pixel value

use image::Rgba;

/// A single RGBA pixel with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pixel {
    /// Red channel
    pub red: u8,
    /// Green channel
    pub green: u8,
    /// Blue channel
    pub blue: u8,
    /// Alpha channel
    pub alpha: u8,
}

impl Pixel {
    /// Fully transparent black, used for separators in previews
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Create a pixel from its four channels
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Channels in RGBA order
    pub const fn channels(self) -> [u8; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }

    /// Sum over the four channels of the squared channel difference
    pub fn squared_distance(self, other: Self) -> u64 {
        self.channels()
            .iter()
            .zip(other.channels().iter())
            .map(|(&a, &b)| {
                let diff = u64::from(a.abs_diff(b));
                diff * diff
            })
            .sum()
    }
}

impl From<Rgba<u8>> for Pixel {
    fn from(rgba: Rgba<u8>) -> Self {
        let [red, green, blue, alpha] = rgba.0;
        Self::new(red, green, blue, alpha)
    }
}

impl From<Pixel> for Rgba<u8> {
    fn from(pixel: Pixel) -> Self {
        Self(pixel.channels())
    }
}

impl From<[u8; 4]> for Pixel {
    fn from([red, green, blue, alpha]: [u8; 4]) -> Self {
        Self::new(red, green, blue, alpha)
    }
}
