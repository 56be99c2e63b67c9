use reqwest::StatusCode;

use crate::outcome::{StatusFailure, NOT_FOUND_MESSAGE};
use crate::res::PageInfo;
use crate::{FetchOutcome, PageOutcome};

fn render(o: &FetchOutcome) -> String {
    let mut out = Vec::new();
    o.write_to(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn found_prints_extract_only() {
    let o = FetchOutcome::Pages(vec![PageOutcome::Found("X".into())]);
    assert_eq!("X\n", render(&o));
}

#[test]
fn missing_extract() {
    let o = FetchOutcome::Pages(vec![PageOutcome::NotFound]);
    assert_eq!("Article content not found.\n", render(&o));
}

#[test]
fn one_line_per_page() {
    let o = FetchOutcome::Pages(vec![
        PageOutcome::Found("first".into()),
        PageOutcome::NotFound,
        PageOutcome::Found("third".into()),
    ]);
    assert_eq!(
        format!("first\n{NOT_FOUND_MESSAGE}\nthird\n"),
        render(&o)
    );
}

#[test]
fn failed_status() {
    assert_eq!(
        "Failed to fetch data. Status code: 404\n",
        render(&FetchOutcome::Failed(StatusCode::NOT_FOUND))
    );
    assert_eq!(
        "Failed to fetch data. Status code: 503",
        StatusFailure(StatusCode::SERVICE_UNAVAILABLE).to_string()
    );
}

#[test]
fn page_info_without_extract_is_not_found() {
    assert_eq!(PageOutcome::NotFound, PageOutcome::from(PageInfo::default()));
    let info = PageInfo {
        extract: Some(String::new()),
        ..Default::default()
    };
    assert_eq!(PageOutcome::Found(String::new()), PageOutcome::from(info));
}
