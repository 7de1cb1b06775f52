//! Classdesk - a gradebook analyzer and a library inventory manager
//!
//! Two independent terminal programs share this crate: `gradebook` turns a
//! sheet of student marks into statistics and letter grades, `library` keeps a
//! JSON-backed book catalog.

pub mod cli;
pub mod config;
pub mod core;
pub mod manager;
pub mod storage;
pub mod utils;

// Re-export core types and traits for easier use
pub use self::core::{
    data::{Book, BookStatus, Catalog, Grade, GradeReport, ScoreSheet, ScoreSummary},
    grading::assign_grade,
    operations::LibraryInventory,
    traits::{CatalogSearch, CatalogStorage, LoadOutcome},
};
