use std::path::Path;

use anyhow::Context as _;
use serde::Deserialize;

use crate::controller::Browser;
use crate::form::FormData;
use crate::render::Surface;

/// One user gesture in a replay script.
///
/// ```yaml
/// - gesture: submit_search
///   title: dune
/// - gesture: show_more
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "gesture", rename_all = "snake_case")]
pub enum Gesture {
    OpenSearch,
    SubmitSearch {
        title: Option<String>,
        author: Option<String>,
        genre: Option<String>,
    },
    CancelSearch,
    OpenSettings,
    SubmitSettings {
        theme: Option<String>,
    },
    CancelSettings,
    ShowMore,
    Click {
        preview: String,
    },
    CloseDetail,
}

impl Gesture {
    /// Form fields this gesture submits; absent fields are left out.
    fn form(&self) -> FormData {
        let fields: Vec<(&str, &Option<String>)> = match self {
            Self::SubmitSearch {
                title,
                author,
                genre,
            } => vec![("title", title), ("author", author), ("genre", genre)],
            Self::SubmitSettings { theme } => vec![("theme", theme)],
            _ => Vec::new(),
        };
        fields
            .into_iter()
            .filter_map(|(name, value)| value.as_deref().map(|value| (name, value)))
            .collect()
    }
}

pub fn parse(yaml: &str) -> anyhow::Result<Vec<Gesture>> {
    serde_yaml::from_str(yaml).context("deserialize gesture script")
}

pub fn load(path: &Path) -> anyhow::Result<Vec<Gesture>> {
    let yaml = std::fs::read_to_string(path)
        .with_context(|| format!("read gesture script: {}", path.display()))?;
    parse(&yaml).with_context(|| format!("parse gesture script: {}", path.display()))
}

pub fn dispatch<S: Surface>(browser: &mut Browser<'_, S>, gesture: &Gesture) {
    tracing::debug!(?gesture, "dispatch gesture");
    match gesture {
        Gesture::OpenSearch => browser.open_search(),
        Gesture::SubmitSearch { .. } => browser.submit_search(&gesture.form()),
        Gesture::CancelSearch => browser.cancel_search(),
        Gesture::OpenSettings => browser.open_settings(),
        Gesture::SubmitSettings { .. } => browser.submit_settings(&gesture.form()),
        Gesture::CancelSettings => browser.cancel_settings(),
        Gesture::ShowMore => browser.show_more(),
        Gesture::Click { preview } => {
            let target = browser.click_target(preview);
            browser.click_preview(&target);
        }
        Gesture::CloseDetail => browser.close_detail(),
    }
}

pub fn replay<S: Surface>(browser: &mut Browser<'_, S>, gestures: &[Gesture]) {
    for gesture in gestures {
        dispatch(browser, gesture);
    }
}
