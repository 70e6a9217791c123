use crate::formats::Book;

/// The active result set and how many pages of it have been rendered.
///
/// `page` starts at 1 and only moves forward through [`PageCursor::advance`];
/// replacing the matches means building a new cursor.
#[derive(Debug, Clone)]
pub struct PageCursor<'a> {
    matches: Vec<&'a Book>,
    page: usize,
    page_size: usize,
}

impl<'a> PageCursor<'a> {
    pub fn new(matches: Vec<&'a Book>, page_size: usize) -> Self {
        Self {
            matches,
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn matches(&self) -> &[&'a Book] {
        &self.matches
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Slice shown right after the matches are (re)seeded.
    pub fn first_slice(&self) -> &[&'a Book] {
        self.slice(0)
    }

    /// Slice a "show more" step appends: `matches[page*P .. (page+1)*P)`.
    pub fn next_slice(&self) -> &[&'a Book] {
        self.slice(self.page)
    }

    /// Every book on pages `1..=page`.
    pub fn visible(&self) -> &[&'a Book] {
        let end = self.page.saturating_mul(self.page_size).min(self.matches.len());
        &self.matches[..end]
    }

    pub fn remaining(&self) -> usize {
        self.matches
            .len()
            .saturating_sub(self.page.saturating_mul(self.page_size))
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    pub fn advance(&mut self) {
        self.page += 1;
    }

    fn slice(&self, page_index: usize) -> &[&'a Book] {
        let start = page_index
            .saturating_mul(self.page_size)
            .min(self.matches.len());
        let end = start.saturating_add(self.page_size).min(self.matches.len());
        &self.matches[start..end]
    }
}
