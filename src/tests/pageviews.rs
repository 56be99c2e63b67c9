use chrono::NaiveDate;

use crate::api::decode_body;
use crate::pageviews::{DateRange, PerArticle, Top, TopArticle};
use crate::Error;

#[test]
fn week_is_seven_days_inclusive() {
    let end = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
    let week = DateRange::week_ending(end).unwrap();
    assert_eq!(NaiveDate::from_ymd_opt(2024, 2, 25).unwrap(), week.start);
    assert_eq!(end, week.end);
    assert_eq!(None, DateRange::week_ending(NaiveDate::MIN));
}

#[test]
fn per_article_without_items_has_no_views() -> crate::Result<()> {
    let p: PerArticle = decode_body(br#"{}"#)?;
    assert!(p.items.is_empty());
    let p: PerArticle = decode_body(
        br#"{"items":[{"project":"en.wikipedia","article":"Paris","granularity":"daily",
            "timestamp":"2024030100","access":"all-access","agent":"all-agents","views":7}]}"#,
    )?;
    assert_eq!(7, p.items[0].views);
    Ok(())
}

#[test]
fn top_articles_decode() -> crate::Result<()> {
    let t: Top = decode_body(
        br#"{"items":[{"articles":[{"article":"Main_Page","views":5,"rank":1}]}]}"#,
    )?;
    assert_eq!(
        vec![TopArticle {
            article: "Main_Page".into(),
            views: 5,
            rank: 1,
        }],
        t.items[0].articles
    );
    Ok(())
}

#[test]
fn rest_bodies_report_decode_and_schema_apart() {
    let err = decode_body::<Top>(b"<html>").unwrap_err();
    assert!(matches!(err, Error::Decode(_)), "{err:?}");
    let err = decode_body::<Top>(br#"{"items":[{"nope":1}]}"#).unwrap_err();
    assert!(matches!(err, Error::Schema(_)), "{err:?}");
}
