pub mod error;
pub mod format;
pub mod interactive;
pub mod output;
pub mod stats;

pub use error::{AppError, AppResult};
pub use output::OutputStyle;
