/// Greedy merge loop over the working set
pub mod assembler;
/// Strip concatenation
pub mod merge;
/// Orientation scoring of strip pairs
pub mod orientation;
/// Column edge cost
pub mod similarity;
/// Arena of strips awaiting a merge
pub mod working_set;

pub use assembler::{Assembly, AssemblyConfig, GreedyAssembler, MergeRecord, assemble};
pub use orientation::{Orientation, ScoreResult};
pub use working_set::{Piece, StripId, WorkingSet};
