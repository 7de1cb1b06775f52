// Interactive menu loops
pub mod gradebook;  // Score entry, analysis and export
pub mod library;    // Catalog add / issue / return / search

pub use gradebook::run_gradebook;
pub use library::{open_inventory, run_library};
