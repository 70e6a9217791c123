use crate::formats::Book;

/// Select value meaning "no restriction".
pub const ANY: &str = "any";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Choice {
    #[default]
    Any,
    Id(String),
}

impl Choice {
    pub fn parse(raw: &str) -> Self {
        if raw == ANY {
            Self::Any
        } else {
            Self::Id(raw.to_owned())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub title: String,
    pub author: Choice,
    pub genre: Choice,
}

impl FilterCriteria {
    pub fn matches(&self, book: &Book) -> bool {
        self.title_matches(book) && self.author_matches(book) && self.genre_matches(book)
    }

    fn title_matches(&self, book: &Book) -> bool {
        let needle = self.title.trim();
        if needle.is_empty() {
            return true;
        }
        book.title
            .to_lowercase()
            .contains(&self.title.to_lowercase())
    }

    fn author_matches(&self, book: &Book) -> bool {
        match &self.author {
            Choice::Any => true,
            Choice::Id(id) => book.author == *id,
        }
    }

    fn genre_matches(&self, book: &Book) -> bool {
        match &self.genre {
            Choice::Any => true,
            Choice::Id(id) => book.has_genre(id),
        }
    }
}

/// Books satisfying every criterion, in source order.
pub fn apply_filters<'a>(books: &'a [Book], criteria: &FilterCriteria) -> Vec<&'a Book> {
    books.iter().filter(|book| criteria.matches(book)).collect()
}
