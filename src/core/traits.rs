//! Catalog trait definitions
//!
//! These traits split the inventory into its persistence side and its lookup
//! side so handlers only depend on what they use.

use crate::core::data::Book;
use crate::utils::error::AppResult;

/// How a catalog came to be in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// No file existed; an empty catalog was written
    Created,
    /// The file was read successfully
    Loaded(usize),
    /// The file could not be parsed and was reset to an empty catalog
    Recovered(String),
}

/// Persistence operations for a catalog
pub trait CatalogStorage {
    /// Load the catalog, creating or resetting the backing file when needed
    fn load(&mut self) -> AppResult<LoadOutcome>;

    /// Overwrite the backing file with the full catalog
    fn save(&self) -> AppResult<()>;

    /// Discard the in-memory catalog and persist an empty one
    fn recover(&mut self) -> AppResult<()>;
}

/// Lookup operations for a catalog
pub trait CatalogSearch {
    /// Exact ISBN match
    fn search_by_isbn(&self, isbn: &str) -> Option<&Book>;

    /// Case-insensitive title substring match, in catalog order
    fn search_by_title(&self, keyword: &str) -> Vec<&Book>;

    /// Every book in stored order
    fn list_all(&self) -> &[Book];
}
