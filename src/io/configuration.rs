//! Output naming, preview and display defaults

/// File name of the reassembled image when no output is given
pub const DEFAULT_OUTPUT: &str = "reassembled.png";

/// Suffix added to the output stem for the assembly animation
pub const VISUALIZATION_SUFFIX: &str = "_visualization";

/// File name of the preview image written by `show`
pub const PREVIEW_FILE_NAME: &str = "unshred_preview.png";

// Separators keep adjacent strips distinguishable in previews
/// Width in pixels of the buffer drawn between strips in a contact sheet
pub const CONTACT_SHEET_BUFFER_WIDTH: usize = 1;

/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 400;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;
/// The final frame is held this many times longer than the others
pub const FINAL_FRAME_HOLD: u32 = 5;

/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
