//! Interaction controller: the only owner and mutator of the browsing state.
//!
//! Every gesture handler runs to completion and updates `matches`/`page`
//! before it asks the reconciler to render.

use std::collections::BTreeSet;

use crate::click::{ElementNode, preview_click_path};
use crate::dataset::Dataset;
use crate::filter::apply_filters;
use crate::form::{FormData, requested_theme, search_criteria};
use crate::options::{ALL_AUTHORS, ALL_GENRES, select_options};
use crate::pagination::PageCursor;
use crate::render::{
    Overlay, RenderMode, SelectList, Surface, book_detail, render_matches, render_previews,
    render_show_more,
};
use crate::theme::Theme;

pub struct Browser<'a, S: Surface> {
    dataset: &'a Dataset,
    cursor: PageCursor<'a>,
    theme: Theme,
    open_overlays: BTreeSet<Overlay>,
    surface: S,
}

impl<'a, S: Surface> Browser<'a, S> {
    /// Populates the search dropdowns, applies the host's preferred theme and
    /// renders the first page of the unfiltered catalog.
    pub fn start(dataset: &'a Dataset, mut surface: S, prefers_dark: bool) -> Self {
        surface.set_options(
            SelectList::Genres,
            select_options(dataset.genres(), ALL_GENRES),
        );
        surface.set_options(
            SelectList::Authors,
            select_options(dataset.authors(), ALL_AUTHORS),
        );

        let theme = Theme::preferred(prefers_dark);
        surface.apply_theme(theme);

        let cursor = PageCursor::new(dataset.books().iter().collect(), dataset.page_size());
        render_matches(dataset, &cursor, &mut surface);

        tracing::debug!(
            books = dataset.books().len(),
            page_size = dataset.page_size(),
            theme = theme.as_str(),
            "browser started"
        );

        Self {
            dataset,
            cursor,
            theme,
            open_overlays: BTreeSet::new(),
            surface,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn cursor(&self) -> &PageCursor<'a> {
        &self.cursor
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_open(&self, overlay: Overlay) -> bool {
        self.open_overlays.contains(&overlay)
    }

    pub fn open_search(&mut self) {
        self.set_open(Overlay::Search, true);
        self.surface.focus_search_title();
    }

    pub fn cancel_search(&mut self) {
        self.set_open(Overlay::Search, false);
    }

    pub fn submit_search(&mut self, form: &FormData) {
        let criteria = search_criteria(form);
        let matches = apply_filters(self.dataset.books(), &criteria);
        tracing::debug!(?criteria, matches = matches.len(), "search submitted");

        self.cursor = PageCursor::new(matches, self.dataset.page_size());
        render_matches(self.dataset, &self.cursor, &mut self.surface);
        self.surface.scroll_to_top();
        self.set_open(Overlay::Search, false);
    }

    pub fn open_settings(&mut self) {
        self.set_open(Overlay::Settings, true);
    }

    pub fn cancel_settings(&mut self) {
        self.set_open(Overlay::Settings, false);
    }

    pub fn submit_settings(&mut self, form: &FormData) {
        self.theme = requested_theme(form);
        tracing::debug!(theme = self.theme.as_str(), "settings submitted");
        self.surface.apply_theme(self.theme);
        self.set_open(Overlay::Settings, false);
    }

    /// Appends the next page. A disabled button delivers no click, so this is
    /// a no-op once nothing remains.
    pub fn show_more(&mut self) {
        if self.cursor.is_exhausted() {
            tracing::debug!(
                page = self.cursor.page(),
                "show more ignored; nothing remaining"
            );
            return;
        }
        render_previews(
            self.dataset,
            self.cursor.next_slice(),
            &mut self.surface,
            RenderMode::Append,
        );
        self.cursor.advance();
        render_show_more(&self.cursor, &mut self.surface);
    }

    /// Delivery path of a click on the cover of `preview_id`. Only previews on
    /// the rendered pages can be hit; anything else lands on the bare list.
    pub fn click_target(&self, preview_id: &str) -> ElementNode {
        let rendered = self
            .cursor
            .visible()
            .iter()
            .any(|book| book.id == preview_id);
        preview_click_path(rendered.then_some(preview_id))
    }

    /// Handles a click delivered to `target` inside the preview list.
    /// Returns whether the detail overlay was opened.
    pub fn click_preview(&mut self, target: &ElementNode) -> bool {
        match target.resolve_preview_id() {
            Some(preview_id) => self.open_detail(preview_id),
            None => {
                tracing::debug!(tag = target.tag(), "click outside any preview");
                false
            }
        }
    }

    pub fn open_detail(&mut self, preview_id: &str) -> bool {
        let Some(book) = self.dataset.find_book(preview_id) else {
            tracing::debug!(preview_id, "no book for preview id");
            return false;
        };
        self.set_open(Overlay::Detail, true);
        self.surface.show_detail(book_detail(self.dataset, book));
        true
    }

    pub fn close_detail(&mut self) {
        self.set_open(Overlay::Detail, false);
    }

    fn set_open(&mut self, overlay: Overlay, open: bool) {
        if open {
            self.open_overlays.insert(overlay);
        } else {
            self.open_overlays.remove(&overlay);
        }
        self.surface.set_overlay_open(overlay, open);
    }
}
