pub mod constants;
pub mod filename;
pub mod format;
pub mod progress;

pub use constants::*;
pub use filename::generate_default_output_filename;
pub use format::{escape_xml, format_coord};
pub use progress::ProgressReporter;
