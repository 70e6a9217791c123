use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub image: String,
    pub description: String,
    pub published: DateTime<Utc>,
    pub genres: Vec<String>,
}

impl Book {
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }
}

/// Id to display-name table. Entries keep the order they were declared in,
/// which is the order the dropdowns list them.
pub type LookupTable = IndexMap<String, String>;

/// On-disk dataset file: `{ "books": [...], "authors": {...}, "genres": {...} }`.
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetFile {
    pub books: Vec<Book>,
    pub authors: LookupTable,
    pub genres: LookupTable,
}
