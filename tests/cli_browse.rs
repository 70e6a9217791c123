use std::fs;

use predicates::prelude::*;

const DUNE_ID: &str = "760b3450-9c41-4f8e-9b35-1a6c1d1f0001";

fn bookbrowse() -> assert_cmd::Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("bookbrowse");
    cmd.env_remove("BOOKBROWSE_DATASET")
        .env_remove("BOOKBROWSE_PAGE_SIZE")
        .env_remove("BOOKBROWSE_THEME")
        .env_remove("RUST_LOG");
    cmd
}

fn stdout_of(cmd: &mut assert_cmd::Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).expect("utf-8 stdout")
}

#[test]
fn render_first_page_reports_remaining() {
    let html = stdout_of(bookbrowse().args(["--page-size", "4", "render"]));
    assert_eq!(html.matches("class=\"preview\"").count(), 4);
    assert!(html.contains("<span class=\"list__remaining\">(11)</span>"));
    assert!(!html.contains("data-list-button disabled"));
    assert!(html.contains("<option value=\"any\">All Genres</option>"));
}

#[test]
fn render_show_more_until_exhausted() {
    let html = stdout_of(bookbrowse().args(["render", "--page-size", "4", "--more", "3"]));
    assert_eq!(html.matches("class=\"preview\"").count(), 15);
    assert!(html.contains("data-list-button disabled"));
    assert!(html.contains("(0)"));
}

#[test]
fn render_search_for_title() {
    let html = stdout_of(bookbrowse().args(["render", "--title", "dUnE"]));
    assert_eq!(html.matches("class=\"preview\"").count(), 1);
    assert!(html.contains(&format!("data-preview=\"{DUNE_ID}\"")));
    assert!(!html.contains("list__message_show"));
}

#[test]
fn render_search_without_matches_shows_message() {
    let html = stdout_of(bookbrowse().args(["render", "--title", "no such title"]));
    assert_eq!(html.matches("class=\"preview\"").count(), 0);
    assert!(html.contains("list__message_show"));
    assert!(html.contains("data-list-button disabled"));
}

#[test]
fn render_night_theme_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("page.html");
    bookbrowse()
        .args(["render", "--theme", "night", "--out"])
        .arg(&out)
        .assert()
        .success()
        .stdout("");
    let html = fs::read_to_string(&out).unwrap();
    assert!(html.contains("--color-dark: 255, 255, 255;"));
}

#[test]
fn render_rejects_unknown_theme() {
    bookbrowse()
        .args(["render", "--theme", "sepia"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported theme"));
}

#[test]
fn show_prints_detail_with_publication_year() {
    bookbrowse()
        .args(["show", "--id", DUNE_ID])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Dune\nFrank Herbert (1965)\n"));
}

#[test]
fn show_unknown_id_prints_nothing() {
    bookbrowse()
        .args(["show", "--id", "not-a-book"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn options_list_any_first() {
    let text = stdout_of(bookbrowse().arg("options"));
    assert!(text.starts_with("# authors\nany\tAll Authors\n"));
    assert!(text.contains("# genres\nany\tAll Genres\n"));
    assert!(text.contains("\tFrank Herbert\n"));
}

#[test]
fn replay_script_writes_final_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("gestures.yaml");
    fs::write(
        &script,
        format!(
            "- gesture: open_search\n\
             - gesture: submit_search\n  title: dune\n\
             - gesture: click\n  preview: {DUNE_ID}\n"
        ),
    )
    .unwrap();

    let html = stdout_of(bookbrowse().args(["replay", "--script"]).arg(&script));
    assert!(html.contains("<dialog class=\"overlay\" data-list-active open>"));
    assert!(html.contains("Frank Herbert (1965)"));
    assert!(html.contains("<dialog class=\"overlay\" data-search-overlay>"));
}

#[test]
fn custom_dataset_with_unknown_author_degrades() {
    let dir = tempfile::tempdir().unwrap();
    let dataset = dir.path().join("books.json");
    fs::write(
        &dataset,
        r#"{
            "authors": {"a1": "Known"},
            "genres": {"g1": "Mystery"},
            "books": [{
                "id": "x1",
                "title": "Lost Manuscript",
                "author": "a404",
                "image": "https://covers.test/x1.jpg",
                "description": "Nobody knows who wrote it.",
                "published": "1999-01-01T00:00:00Z",
                "genres": ["g1"]
            }]
        }"#,
    )
    .unwrap();

    let html = stdout_of(bookbrowse().arg("--dataset").arg(&dataset).arg("render"));
    assert!(html.contains("<div class=\"preview__author\">Unknown author</div>"));
}

#[test]
fn zero_page_size_from_env_fails() {
    bookbrowse()
        .env("BOOKBROWSE_PAGE_SIZE", "0")
        .arg("render")
        .assert()
        .failure()
        .stderr(predicate::str::contains("BOOKBROWSE_PAGE_SIZE"));
}

#[test]
fn page_size_flag_overrides_bad_env_value() {
    let html = stdout_of(
        bookbrowse()
            .env("BOOKBROWSE_PAGE_SIZE", "0")
            .args(["--page-size", "5", "render"]),
    );
    assert_eq!(html.matches("class=\"preview\"").count(), 5);
    assert!(html.contains("<span class=\"list__remaining\">(10)</span>"));
}

#[test]
fn missing_dataset_file_fails() {
    bookbrowse()
        .args(["--dataset", "/no/such/catalog.json", "options"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("read dataset"));
}

#[test]
fn rust_log_debug_emits_debug_line_to_stderr() {
    bookbrowse()
        .env("RUST_LOG", "debug")
        .arg("options")
        .assert()
        .success()
        .stderr(predicate::str::contains("parsed cli"));
}
