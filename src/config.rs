use std::num::NonZeroUsize;
use std::path::PathBuf;

use anyhow::Context as _;

use crate::cli::Cli;
use crate::dataset::{BOOKS_PER_PAGE, Dataset};
use crate::theme::Theme;

const DATASET_VAR: &str = "BOOKBROWSE_DATASET";
const PAGE_SIZE_VAR: &str = "BOOKBROWSE_PAGE_SIZE";
const THEME_VAR: &str = "BOOKBROWSE_THEME";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Dataset JSON file; the embedded catalog when `None`.
    pub dataset: Option<PathBuf>,
    pub page_size: NonZeroUsize,
    /// Host colour-scheme preference consulted at startup.
    pub preferred_theme: Theme,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset: None,
            page_size: BOOKS_PER_PAGE,
            preferred_theme: Theme::Day,
        }
    }
}

impl Config {
    pub fn resolve(cli: &Cli) -> anyhow::Result<Self> {
        Self::resolve_with(cli, |key| std::env::var(key).ok())
    }

    /// Command-line flags win. An environment variable shadowed by a flag is
    /// never read, so a bad value there cannot fail the run.
    pub fn resolve_with(
        cli: &Cli,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> anyhow::Result<Self> {
        let mut config = Self::from_lookup(|key| match key {
            DATASET_VAR if cli.dataset.is_some() => None,
            PAGE_SIZE_VAR if cli.page_size.is_some() => None,
            _ => lookup(key),
        })?;
        if let Some(path) = &cli.dataset {
            config.dataset = Some(PathBuf::from(path));
        }
        if let Some(page_size) = cli.page_size {
            config.page_size = NonZeroUsize::new(page_size)
                .ok_or_else(|| anyhow::anyhow!("--page-size must be at least 1"))?;
        }
        Ok(config)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Some(path) = lookup(DATASET_VAR).filter(|p| !p.trim().is_empty()) {
            config.dataset = Some(PathBuf::from(path));
        }
        if let Some(raw) = lookup(PAGE_SIZE_VAR) {
            config.page_size = parse_page_size(&raw)
                .with_context(|| format!("invalid {PAGE_SIZE_VAR}={raw:?}"))?;
        }
        if let Some(raw) = lookup(THEME_VAR) {
            config.preferred_theme = Theme::parse(&raw).with_context(|| {
                format!("invalid {THEME_VAR}={raw:?}. expected one of: day, night")
            })?;
        }

        Ok(config)
    }

    pub fn load_dataset(&self) -> anyhow::Result<Dataset> {
        let dataset = match &self.dataset {
            Some(path) => Dataset::load(path)?,
            None => Dataset::embedded()?,
        };
        Ok(dataset.with_page_size(self.page_size))
    }

    pub fn prefers_dark(&self) -> bool {
        self.preferred_theme == Theme::Night
    }
}

pub fn parse_page_size(raw: &str) -> anyhow::Result<NonZeroUsize> {
    let n: usize = raw.trim().parse().context("page size must be a number")?;
    NonZeroUsize::new(n).ok_or_else(|| anyhow::anyhow!("page size must be at least 1"))
}
