//! Resolving a click inside the preview list back to the book it came from.

/// Data attribute carried by every preview element.
pub const PREVIEW_ATTR: &str = "preview";

pub trait DataNode {
    fn data_attribute(&self, name: &str) -> Option<&str>;
}

/// Walks from `target` through its ancestors and returns the first
/// non-empty preview identifier.
pub fn resolve_preview_id<'n, N, F>(target: &'n N, mut parent: F) -> Option<&'n str>
where
    N: DataNode + ?Sized,
    F: FnMut(&'n N) -> Option<&'n N>,
{
    let mut node = Some(target);
    while let Some(current) = node {
        if let Some(id) = current
            .data_attribute(PREVIEW_ATTR)
            .filter(|id| !id.is_empty())
        {
            return Some(id);
        }
        node = parent(current);
    }
    None
}

/// An element on the delivery path of a click, owning its ancestor chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementNode {
    tag: String,
    data: Vec<(String, String)>,
    parent: Option<Box<ElementNode>>,
}

impl ElementNode {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            data: Vec::new(),
            parent: None,
        }
    }

    #[must_use]
    pub fn with_data(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.push((name.into(), value.into()));
        self
    }

    /// Places `ancestor` above the current outermost ancestor.
    #[must_use]
    pub fn inside(mut self, ancestor: ElementNode) -> Self {
        self.parent = Some(Box::new(match self.parent.take() {
            Some(parent) => parent.inside(ancestor),
            None => ancestor,
        }));
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn parent(&self) -> Option<&ElementNode> {
        self.parent.as_deref()
    }

    pub fn resolve_preview_id(&self) -> Option<&str> {
        resolve_preview_id(self, ElementNode::parent)
    }
}

impl DataNode for ElementNode {
    fn data_attribute(&self, name: &str) -> Option<&str> {
        self.data
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

fn list_container() -> ElementNode {
    ElementNode::new("div")
        .with_data("list-items", "")
        .inside(ElementNode::new("main"))
        .inside(ElementNode::new("body"))
}

/// Delivery path of a click inside the preview list: on the cover image of
/// the preview for `preview_id`, or on the bare list container when `None`.
pub fn preview_click_path(preview_id: Option<&str>) -> ElementNode {
    match preview_id {
        Some(id) => ElementNode::new("img")
            .inside(ElementNode::new("button").with_data(PREVIEW_ATTR, id))
            .inside(list_container()),
        None => list_container(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list() -> ElementNode {
        ElementNode::new("div")
            .with_data("list-items", "")
            .inside(ElementNode::new("body"))
    }

    #[test]
    fn finds_preview_on_ancestor() {
        let target = ElementNode::new("h3")
            .inside(ElementNode::new("div"))
            .inside(ElementNode::new("button").with_data(PREVIEW_ATTR, "b7"))
            .inside(list());
        assert_eq!(target.tag(), "h3");
        assert_eq!(target.resolve_preview_id(), Some("b7"));
    }

    #[test]
    fn target_itself_may_carry_the_id() {
        let target = ElementNode::new("button")
            .with_data(PREVIEW_ATTR, "b1")
            .inside(list());
        assert_eq!(target.resolve_preview_id(), Some("b1"));
    }

    #[test]
    fn click_outside_previews_resolves_nothing() {
        assert_eq!(list().resolve_preview_id(), None);
        assert_eq!(preview_click_path(None).resolve_preview_id(), None);
    }

    #[test]
    fn click_path_starts_at_the_cover_image() {
        let path = preview_click_path(Some("b3"));
        assert_eq!(path.tag(), "img");
        assert_eq!(path.parent().map(ElementNode::tag), Some("button"));
        assert_eq!(path.resolve_preview_id(), Some("b3"));
    }

    #[test]
    fn empty_identifier_is_skipped() {
        let target = ElementNode::new("span")
            .with_data(PREVIEW_ATTR, "")
            .inside(ElementNode::new("button").with_data(PREVIEW_ATTR, "outer"));
        assert_eq!(target.resolve_preview_id(), Some("outer"));
    }

    #[test]
    fn nearest_identifier_wins() {
        let target = ElementNode::new("button")
            .with_data(PREVIEW_ATTR, "inner")
            .inside(ElementNode::new("section").with_data(PREVIEW_ATTR, "outer"));
        assert_eq!(target.resolve_preview_id(), Some("inner"));
    }
}
