//! Library inventory: a catalog bound to its JSON file

use crate::core::data::{Book, Catalog};
use crate::core::traits::{CatalogSearch, CatalogStorage, LoadOutcome};
use crate::storage;
use crate::utils::error::{AppError, AppResult};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Owns the books and the file they are persisted to.
/// Every successful mutation rewrites the whole file.
#[derive(Debug)]
pub struct LibraryInventory {
    file_path: PathBuf,
    catalog: Catalog,
}

impl LibraryInventory {
    /// Bind to `file_path` without touching the disk
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
            catalog: Catalog::new(),
        }
    }

    /// Bind to `file_path` and load it
    pub fn open(file_path: impl Into<PathBuf>) -> AppResult<(Self, LoadOutcome)> {
        let mut inventory = Self::new(file_path);
        let outcome = inventory.load()?;
        Ok((inventory, outcome))
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    /// Append and persist. Returns false, without writing, if the ISBN is taken.
    pub fn add_book(&mut self, book: Book) -> AppResult<bool> {
        if !self.catalog.add_book(book) {
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    /// Issue the book with `isbn`. Returns false for unknown ISBNs and books already out.
    pub fn issue_book(&mut self, isbn: &str) -> AppResult<bool> {
        self.transition(isbn, Book::issue)
    }

    /// Return the book with `isbn`. Returns false for unknown ISBNs and books already in.
    pub fn return_book(&mut self, isbn: &str) -> AppResult<bool> {
        self.transition(isbn, Book::return_book)
    }

    fn transition(&mut self, isbn: &str, apply: fn(&mut Book) -> bool) -> AppResult<bool> {
        let changed = match self.catalog.find_by_isbn_mut(isbn.trim()) {
            Some(book) => apply(book),
            None => false,
        };
        if changed {
            self.save()?;
        }
        Ok(changed)
    }
}

impl CatalogStorage for LibraryInventory {
    fn load(&mut self) -> AppResult<LoadOutcome> {
        let Some(content) = storage::read_catalog_file(&self.file_path)? else {
            self.catalog = Catalog::new();
            self.save()?;
            info!(path = %self.file_path.display(), "catalog created");
            return Ok(LoadOutcome::Created);
        };

        match storage::decode_catalog(&content) {
            Ok(catalog) => {
                self.catalog = catalog;
                info!(path = %self.file_path.display(), books = self.catalog.len(), "catalog loaded");
                Ok(LoadOutcome::Loaded(self.catalog.len()))
            }
            Err(AppError::Parse(reason)) => {
                warn!(path = %self.file_path.display(), %reason, "catalog unreadable, resetting");
                self.recover()?;
                Ok(LoadOutcome::Recovered(reason))
            }
            Err(e) => Err(e),
        }
    }

    fn save(&self) -> AppResult<()> {
        storage::write_catalog_file(&self.file_path, &self.catalog)
    }

    fn recover(&mut self) -> AppResult<()> {
        self.catalog = Catalog::new();
        self.save()
    }
}

impl CatalogSearch for LibraryInventory {
    fn search_by_isbn(&self, isbn: &str) -> Option<&Book> {
        self.catalog.find_by_isbn(isbn.trim())
    }

    fn search_by_title(&self, keyword: &str) -> Vec<&Book> {
        self.catalog.search_by_title(keyword)
    }

    fn list_all(&self) -> &[Book] {
        &self.catalog.books
    }
}
