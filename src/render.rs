//! Render reconciliation: turning books into preview nodes and pushing them,
//! together with the list chrome, onto a [`Surface`].

use chrono::Datelike as _;

use crate::dataset::Dataset;
use crate::formats::Book;
use crate::pagination::PageCursor;
use crate::theme::Theme;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewNode {
    /// Stable identifier used to find the book again on click.
    pub preview_id: String,
    pub image: String,
    pub title: String,
    pub author: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDetail {
    pub image: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowMoreState {
    pub remaining: usize,
    pub disabled: bool,
}

impl Default for ShowMoreState {
    fn default() -> Self {
        Self {
            remaining: 0,
            disabled: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SelectList {
    Genres,
    Authors,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Overlay {
    Search,
    Settings,
    Detail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Replace,
    Append,
}

/// What the browser core needs from a presentation technology.
pub trait Surface {
    /// Drop every preview in the list container and insert `nodes`.
    fn replace_previews(&mut self, nodes: Vec<PreviewNode>);
    /// Insert `nodes` after the existing previews.
    fn append_previews(&mut self, nodes: Vec<PreviewNode>);
    fn set_empty_message_visible(&mut self, visible: bool);
    fn set_show_more(&mut self, state: ShowMoreState);
    fn set_overlay_open(&mut self, overlay: Overlay, open: bool);
    fn focus_search_title(&mut self);
    fn apply_theme(&mut self, theme: Theme);
    fn show_detail(&mut self, detail: BookDetail);
    fn scroll_to_top(&mut self);
    fn set_options(&mut self, list: SelectList, options: Vec<SelectOption>);
}

pub fn preview_node(dataset: &Dataset, book: &Book) -> PreviewNode {
    PreviewNode {
        preview_id: book.id.clone(),
        image: book.image.clone(),
        title: book.title.clone(),
        author: dataset.author_name(&book.author).to_owned(),
    }
}

/// Builds every node first and hands them to the surface in one call.
pub fn render_previews<S: Surface + ?Sized>(
    dataset: &Dataset,
    books: &[&Book],
    surface: &mut S,
    mode: RenderMode,
) {
    let fragment: Vec<PreviewNode> = books
        .iter()
        .map(|book| preview_node(dataset, book))
        .collect();
    tracing::debug!(count = fragment.len(), ?mode, "render previews");
    match mode {
        RenderMode::Replace => surface.replace_previews(fragment),
        RenderMode::Append => surface.append_previews(fragment),
    }
}

/// Full re-render after the matches were replaced.
pub fn render_matches<S: Surface + ?Sized>(
    dataset: &Dataset,
    cursor: &PageCursor<'_>,
    surface: &mut S,
) {
    surface.set_empty_message_visible(cursor.matches().is_empty());
    render_previews(dataset, cursor.first_slice(), surface, RenderMode::Replace);
    render_show_more(cursor, surface);
}

pub fn render_show_more<S: Surface + ?Sized>(cursor: &PageCursor<'_>, surface: &mut S) {
    let remaining = cursor.remaining();
    surface.set_show_more(ShowMoreState {
        remaining,
        disabled: remaining == 0,
    });
}

pub fn book_detail(dataset: &Dataset, book: &Book) -> BookDetail {
    BookDetail {
        image: book.image.clone(),
        title: book.title.clone(),
        subtitle: format!(
            "{} ({})",
            dataset.author_name(&book.author),
            book.published.year()
        ),
        description: book.description.clone(),
    }
}
