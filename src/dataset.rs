use std::num::NonZeroUsize;
use std::path::Path;

use anyhow::Context as _;

use crate::formats::{Book, DatasetFile, LookupTable};

pub const BOOKS_PER_PAGE: NonZeroUsize = match NonZeroUsize::new(36) {
    Some(n) => n,
    None => unreachable!(),
};

/// Label shown when a book references an author id missing from the table.
pub const UNKNOWN_AUTHOR: &str = "Unknown author";

static EMBEDDED_CATALOG: &str = include_str!("../data/catalog.json");

/// Read-only catalog the browser works over: books in display order, the
/// author and genre tables, and the page size.
#[derive(Debug, Clone)]
pub struct Dataset {
    books: Vec<Book>,
    authors: LookupTable,
    genres: LookupTable,
    page_size: NonZeroUsize,
}

impl Dataset {
    pub fn new(books: Vec<Book>, authors: LookupTable, genres: LookupTable) -> Self {
        Self {
            books,
            authors,
            genres,
            page_size: BOOKS_PER_PAGE,
        }
    }

    pub fn embedded() -> anyhow::Result<Self> {
        Self::from_json(EMBEDDED_CATALOG).context("parse embedded catalog")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read dataset: {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("parse dataset: {}", path.display()))
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let file: DatasetFile = serde_json::from_str(json).context("deserialize dataset json")?;
        tracing::debug!(
            books = file.books.len(),
            authors = file.authors.len(),
            genres = file.genres.len(),
            "loaded dataset"
        );
        Ok(Self::new(file.books, file.authors, file.genres))
    }

    #[must_use]
    pub fn with_page_size(mut self, page_size: NonZeroUsize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn authors(&self) -> &LookupTable {
        &self.authors
    }

    pub fn genres(&self) -> &LookupTable {
        &self.genres
    }

    pub fn page_size(&self) -> usize {
        self.page_size.get()
    }

    pub fn find_book(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    /// Display name for `author_id`. A missing id degrades to
    /// [`UNKNOWN_AUTHOR`] instead of failing.
    pub fn author_name(&self, author_id: &str) -> &str {
        match self.authors.get(author_id).map(String::as_str) {
            Some(name) => name,
            None => {
                tracing::warn!(author_id, "author id missing from author table");
                UNKNOWN_AUTHOR
            }
        }
    }
}
