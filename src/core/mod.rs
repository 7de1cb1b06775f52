//! Core business logic layer
//!
//! Data structures, catalog traits, the library inventory and the grading
//! rules shared by both programs.

pub mod data;
pub mod grading;
pub mod operations;
pub mod traits;
