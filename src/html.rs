use std::collections::{BTreeMap, HashSet};

use crate::render::{
    BookDetail, Overlay, PreviewNode, SelectList, SelectOption, ShowMoreState, Surface,
};
use crate::theme::Theme;

/// In-memory page model that renders to a standalone HTML document.
#[derive(Debug, Clone, Default)]
pub struct HtmlSurface {
    previews: Vec<PreviewNode>,
    bulk_inserts: usize,
    empty_message_visible: bool,
    show_more: ShowMoreState,
    open_overlays: HashSet<Overlay>,
    search_title_focused: bool,
    theme: Theme,
    detail: Option<BookDetail>,
    scroll_to_top_requests: usize,
    options: BTreeMap<SelectList, Vec<SelectOption>>,
}

impl HtmlSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn previews(&self) -> &[PreviewNode] {
        &self.previews
    }

    pub fn preview_ids(&self) -> Vec<&str> {
        self.previews.iter().map(|p| p.preview_id.as_str()).collect()
    }

    /// Number of batched insertions into the list container so far.
    pub fn bulk_inserts(&self) -> usize {
        self.bulk_inserts
    }

    pub fn empty_message_visible(&self) -> bool {
        self.empty_message_visible
    }

    pub fn show_more(&self) -> ShowMoreState {
        self.show_more
    }

    pub fn is_open(&self, overlay: Overlay) -> bool {
        self.open_overlays.contains(&overlay)
    }

    pub fn search_title_focused(&self) -> bool {
        self.search_title_focused
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn detail(&self) -> Option<&BookDetail> {
        self.detail.as_ref()
    }

    pub fn scroll_to_top_requests(&self) -> usize {
        self.scroll_to_top_requests
    }

    pub fn options(&self, list: SelectList) -> &[SelectOption] {
        self.options.get(&list).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn to_html(&self) -> String {
        let style = self
            .theme
            .variables()
            .iter()
            .map(|(name, value)| format!("{name}: {value};"))
            .collect::<Vec<_>>()
            .join(" ");

        let mut out = String::new();
        out.push_str("<!doctype html>\n");
        out.push_str(&format!("<html style=\"{}\">\n", escape(&style)));
        out.push_str("<body>\n");

        self.write_search_overlay(&mut out);
        self.write_settings_overlay(&mut out);

        out.push_str("<main class=\"list\">\n");
        out.push_str("<div class=\"list__items\" data-list-items>\n");
        for preview in &self.previews {
            write_preview(&mut out, preview);
        }
        out.push_str("</div>\n");
        let message_class = if self.empty_message_visible {
            "list__message list__message_show"
        } else {
            "list__message"
        };
        out.push_str(&format!(
            "<div class=\"{message_class}\" data-list-message>No results found. Your filters might be too narrow.</div>\n"
        ));
        let disabled = if self.show_more.disabled { " disabled" } else { "" };
        out.push_str(&format!(
            "<button class=\"list__button\" data-list-button{disabled}><span>Show more</span> <span class=\"list__remaining\">({})</span></button>\n",
            self.show_more.remaining
        ));
        out.push_str("</main>\n");

        self.write_detail_overlay(&mut out);

        out.push_str("</body>\n");
        out.push_str("</html>\n");
        out
    }

    fn write_search_overlay(&self, out: &mut String) {
        out.push_str(&format!(
            "<dialog class=\"overlay\" data-search-overlay{}>\n",
            open_attr(self.is_open(Overlay::Search))
        ));
        out.push_str("<form data-search-form>\n");
        let autofocus = if self.search_title_focused { " autofocus" } else { "" };
        out.push_str(&format!(
            "<input name=\"title\" data-search-title{autofocus} />\n"
        ));
        write_select(out, "genre", "data-search-genres", self.options(SelectList::Genres));
        write_select(out, "author", "data-search-authors", self.options(SelectList::Authors));
        out.push_str("</form>\n");
        out.push_str("</dialog>\n");
    }

    fn write_settings_overlay(&self, out: &mut String) {
        out.push_str(&format!(
            "<dialog class=\"overlay\" data-settings-overlay{}>\n",
            open_attr(self.is_open(Overlay::Settings))
        ));
        out.push_str("<form data-settings-form>\n");
        out.push_str("<select name=\"theme\" data-settings-theme>\n");
        for theme in [Theme::Day, Theme::Night] {
            let selected = if theme == self.theme { " selected" } else { "" };
            out.push_str(&format!(
                "<option value=\"{}\"{selected}>{}</option>\n",
                theme.as_str(),
                theme.as_str()
            ));
        }
        out.push_str("</select>\n");
        out.push_str("</form>\n");
        out.push_str("</dialog>\n");
    }

    fn write_detail_overlay(&self, out: &mut String) {
        out.push_str(&format!(
            "<dialog class=\"overlay\" data-list-active{}>\n",
            open_attr(self.is_open(Overlay::Detail))
        ));
        if let Some(detail) = &self.detail {
            let image = escape(&detail.image);
            out.push_str(&format!(
                "<img class=\"overlay__blur\" data-list-blur src=\"{image}\" />\n"
            ));
            out.push_str(&format!(
                "<img class=\"overlay__image\" data-list-image src=\"{image}\" />\n"
            ));
            out.push_str(&format!(
                "<h3 class=\"overlay__title\" data-list-title>{}</h3>\n",
                escape(&detail.title)
            ));
            out.push_str(&format!(
                "<div class=\"overlay__data\" data-list-subtitle>{}</div>\n",
                escape(&detail.subtitle)
            ));
            out.push_str(&format!(
                "<p class=\"overlay__data\" data-list-description>{}</p>\n",
                escape(&detail.description)
            ));
        }
        out.push_str("</dialog>\n");
    }
}

impl Surface for HtmlSurface {
    fn replace_previews(&mut self, nodes: Vec<PreviewNode>) {
        self.previews.clear();
        self.append_previews(nodes);
    }

    fn append_previews(&mut self, nodes: Vec<PreviewNode>) {
        self.previews.extend(nodes);
        self.bulk_inserts += 1;
    }

    fn set_empty_message_visible(&mut self, visible: bool) {
        self.empty_message_visible = visible;
    }

    fn set_show_more(&mut self, state: ShowMoreState) {
        self.show_more = state;
    }

    fn set_overlay_open(&mut self, overlay: Overlay, open: bool) {
        if open {
            self.open_overlays.insert(overlay);
        } else {
            self.open_overlays.remove(&overlay);
            if overlay == Overlay::Search {
                self.search_title_focused = false;
            }
        }
    }

    fn focus_search_title(&mut self) {
        self.search_title_focused = true;
    }

    fn apply_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    fn show_detail(&mut self, detail: BookDetail) {
        self.detail = Some(detail);
    }

    fn scroll_to_top(&mut self) {
        self.scroll_to_top_requests += 1;
    }

    fn set_options(&mut self, list: SelectList, options: Vec<SelectOption>) {
        self.options.insert(list, options);
    }
}

fn write_preview(out: &mut String, preview: &PreviewNode) {
    out.push_str(&format!(
        "<button class=\"preview\" data-preview=\"{}\">\n",
        escape(&preview.preview_id)
    ));
    out.push_str(&format!(
        "<img class=\"preview__image\" src=\"{}\" />\n",
        escape(&preview.image)
    ));
    out.push_str("<div class=\"preview__info\">\n");
    out.push_str(&format!(
        "<h3 class=\"preview__title\">{}</h3>\n",
        escape(&preview.title)
    ));
    out.push_str(&format!(
        "<div class=\"preview__author\">{}</div>\n",
        escape(&preview.author)
    ));
    out.push_str("</div>\n");
    out.push_str("</button>\n");
}

fn write_select(out: &mut String, name: &str, marker: &str, options: &[SelectOption]) {
    out.push_str(&format!("<select name=\"{name}\" {marker}>\n"));
    for option in options {
        out.push_str(&format!(
            "<option value=\"{}\">{}</option>\n",
            escape(&option.value),
            escape(&option.label)
        ));
    }
    out.push_str("</select>\n");
}

fn open_attr(open: bool) -> &'static str {
    if open { " open" } else { "" }
}

fn escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str, title: &str) -> PreviewNode {
        PreviewNode {
            preview_id: id.to_owned(),
            image: format!("https://covers.test/{id}.jpg"),
            title: title.to_owned(),
            author: "Someone".to_owned(),
        }
    }

    #[test]
    fn markup_escapes_text() {
        let mut surface = HtmlSurface::new();
        surface.replace_previews(vec![node("b1", "Cats & <Dogs>")]);
        let html = surface.to_html();
        assert!(html.contains("Cats &amp; &lt;Dogs&gt;"));
        assert!(html.contains("data-preview=\"b1\""));
    }

    #[test]
    fn markup_reflects_button_and_message_state() {
        let mut surface = HtmlSurface::new();
        surface.set_show_more(ShowMoreState {
            remaining: 4,
            disabled: false,
        });
        surface.set_empty_message_visible(true);
        let html = surface.to_html();
        assert!(html.contains(
            "<button class=\"list__button\" data-list-button><span>Show more</span>"
        ));
        assert!(html.contains("(4)"));
        assert!(html.contains("list__message_show"));
    }

    #[test]
    fn closing_search_drops_focus() {
        let mut surface = HtmlSurface::new();
        surface.set_overlay_open(Overlay::Search, true);
        surface.focus_search_title();
        assert!(surface.to_html().contains("data-search-title autofocus"));
        surface.set_overlay_open(Overlay::Search, false);
        assert!(!surface.search_title_focused());
        assert!(!surface.is_open(Overlay::Search));
    }

    #[test]
    fn night_theme_is_written_to_root_style() {
        let mut surface = HtmlSurface::new();
        surface.apply_theme(Theme::Night);
        let html = surface.to_html();
        assert!(html.contains("--color-dark: 255, 255, 255;"));
        assert!(html.contains("<option value=\"night\" selected>"));
    }
}
