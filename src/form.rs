use crate::filter::{ANY, Choice, FilterCriteria};
use crate::theme::Theme;

/// Submitted form fields in document order. A repeated name resolves to its
/// last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    fields: Vec<(String, String)>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .rev()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

impl<K, V> FromIterator<(K, V)> for FormData
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Self::new(), |form, (name, value)| form.with(name, value))
    }
}

/// Missing fields fall back to the permissive values.
pub fn search_criteria(form: &FormData) -> FilterCriteria {
    FilterCriteria {
        title: form.get("title").unwrap_or_default().to_owned(),
        author: Choice::parse(form.get("author").unwrap_or(ANY)),
        genre: Choice::parse(form.get("genre").unwrap_or(ANY)),
    }
}

pub fn requested_theme(form: &FormData) -> Theme {
    Theme::from_form_value(form.get("theme").unwrap_or_default())
}
