use std::io::Write as _;
use std::path::PathBuf;

use anyhow::Context as _;

use crate::cli::{RenderArgs, ReplayArgs, ShowArgs};
use crate::config::Config;
use crate::controller::Browser;
use crate::form::FormData;
use crate::html::HtmlSurface;
use crate::options::{ALL_AUTHORS, ALL_GENRES, select_options};
use crate::script;
use crate::theme::Theme;

pub fn render(config: &Config, args: RenderArgs) -> anyhow::Result<()> {
    let dataset = config.load_dataset()?;
    let mut browser = Browser::start(&dataset, HtmlSurface::new(), config.prefers_dark());

    let criteria = [
        ("title", args.title),
        ("author", args.author),
        ("genre", args.genre),
    ];
    if criteria.iter().any(|(_, value)| value.is_some()) {
        let form: FormData = criteria
            .into_iter()
            .filter_map(|(name, value)| value.map(|value| (name, value)))
            .collect();
        browser.open_search();
        browser.submit_search(&form);
    }

    for _ in 0..args.more {
        browser.show_more();
    }

    if let Some(theme) = &args.theme {
        let theme = Theme::parse(theme).context("parse --theme")?;
        browser.open_settings();
        browser.submit_settings(&FormData::new().with("theme", theme.as_str()));
    }

    tracing::info!(
        matches = browser.cursor().matches().len(),
        rendered = browser.surface().previews().len(),
        remaining = browser.cursor().remaining(),
        "rendered catalog"
    );

    write_output(args.out.as_deref(), &browser.surface().to_html())
}

pub fn show(config: &Config, args: ShowArgs) -> anyhow::Result<()> {
    let dataset = config.load_dataset()?;
    let mut browser = Browser::start(&dataset, HtmlSurface::new(), config.prefers_dark());
    for _ in 0..args.more {
        browser.show_more();
    }

    let target = browser.click_target(&args.id);
    if !browser.click_preview(&target) {
        tracing::debug!(id = %args.id, "no rendered preview with this id");
    }

    if let Some(out) = args.out.as_deref() {
        return write_output(Some(out), &browser.surface().to_html());
    }

    if let Some(detail) = browser.surface().detail() {
        let text = format!(
            "{}\n{}\n\n{}\n",
            detail.title, detail.subtitle, detail.description
        );
        write_output(None, &text)?;
    }
    Ok(())
}

pub fn options(config: &Config) -> anyhow::Result<()> {
    let dataset = config.load_dataset()?;
    let mut text = String::new();
    for (heading, table, any_label) in [
        ("authors", dataset.authors(), ALL_AUTHORS),
        ("genres", dataset.genres(), ALL_GENRES),
    ] {
        text.push_str(&format!("# {heading}\n"));
        for option in select_options(table, any_label) {
            text.push_str(&format!("{}\t{}\n", option.value, option.label));
        }
    }
    write_output(None, &text)
}

pub fn replay(config: &Config, args: ReplayArgs) -> anyhow::Result<()> {
    let gestures = script::load(&PathBuf::from(&args.script))?;
    let dataset = config.load_dataset()?;
    let mut browser = Browser::start(&dataset, HtmlSurface::new(), config.prefers_dark());

    script::replay(&mut browser, &gestures);
    tracing::info!(
        gestures = gestures.len(),
        page = browser.cursor().page(),
        matches = browser.cursor().matches().len(),
        "replayed script"
    );

    write_output(args.out.as_deref(), &browser.surface().to_html())
}

fn write_output(out: Option<&str>, contents: &str) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            let path = PathBuf::from(path);
            std::fs::write(&path, contents)
                .with_context(|| format!("write output: {}", path.display()))?;
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(contents.as_bytes())
                .context("write stdout")?;
            stdout.flush().context("flush stdout")?;
        }
    }
    Ok(())
}
