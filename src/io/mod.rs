/// Command-line interface and run orchestration
pub mod cli;
/// Output naming and display defaults
pub mod configuration;
/// Error types and context propagation
pub mod error;
/// Stderr logger for the binary
pub mod logger;
/// Progress bars for load and merge phases
pub mod progress;
/// Image store trait and file system implementation
pub mod store;
/// Contact sheets and assembly animation
pub mod visualization;
