//! Greedy reassembly of images cut into vertical strips
//!
//! Strips are compared at their edges by summed squared channel difference.
//! Starting from the first strip, each round joins it to its cheapest partner
//! in the cheaper left/right orientation, until a single image remains.

#![forbid(unsafe_code)]

/// Edge scoring, merging and the greedy assembly loop
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Pixel and strip data model
pub mod model;

pub use io::error::{ReassemblyError, Result};
