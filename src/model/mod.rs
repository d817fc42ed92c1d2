//! Passive pixel and strip data
//!
//! This module contains:
//! - The RGBA pixel value
//! - Column-major strips and their edge columns
//! - Cutting whole images into shuffled strips

/// RGBA pixel value type
pub mod pixel;
/// Image cutting and shuffling
pub mod shred;
/// Column-major strip storage
pub mod strip;

pub use pixel::Pixel;
pub use strip::{Column, Strip};
