use crate::api::decode_query;
use crate::res::{PageInfo, Pages, Random, RandomPage, Search, SearchHit};
use crate::Error;

#[test]
fn pages_keep_document_order() -> crate::Result<()> {
    let body = br#"{"batchcomplete":"","query":{"pages":{
        "30":{"pageid":30,"ns":0,"title":"C","extract":"<p>c</p>"},
        "10":{"pageid":10,"ns":0,"title":"A"},
        "-1":{"ns":0,"title":"Nope","missing":""}
    }}}"#;
    let Pages { pages } = decode_query::<Pages<PageInfo>>(body)?;
    let ids: Vec<_> = pages.iter().map(|(id, _)| id.as_str()).collect();
    assert_eq!(vec!["30", "10", "-1"], ids);
    assert_eq!(
        PageInfo {
            page_id: Some(30),
            ns: Some(0),
            title: Some("C".into()),
            extract: Some("<p>c</p>".into()),
        },
        pages[0].1
    );
    assert_eq!(None, pages[2].1.page_id);
    Ok(())
}

#[test]
fn page_info_fields_are_optional() -> crate::Result<()> {
    let Pages { pages } =
        decode_query::<Pages<PageInfo>>(br#"{"query":{"pages":{"1":{}}}}"#)?;
    assert_eq!(vec![("1".to_owned(), PageInfo::default())], pages);
    Ok(())
}

#[test]
fn invalid_json_is_a_decode_error() {
    let err = decode_query::<Pages<PageInfo>>(b"<html>oops</html>").unwrap_err();
    assert!(matches!(err, Error::Decode(_)), "{err:?}");
}

#[test]
fn missing_query_is_a_schema_error() {
    let err = decode_query::<Pages<PageInfo>>(br#"{"batchcomplete":""}"#).unwrap_err();
    assert!(matches!(err, Error::Schema(_)), "{err:?}");
}

#[test]
fn missing_pages_is_a_schema_error() {
    let err = decode_query::<Pages<PageInfo>>(br#"{"query":{}}"#).unwrap_err();
    assert!(matches!(err, Error::Schema(_)), "{err:?}");
}

#[test]
fn api_error_is_reported() {
    let err = decode_query::<Pages<PageInfo>>(
        br#"{"error":{"code":"badvalue","info":"Unrecognized value"}}"#,
    )
    .unwrap_err();
    match err {
        Error::MediaWiki(v) => assert_eq!("badvalue", v["code"]),
        e => panic!("unexpected error: {e:?}"),
    }
}

#[test]
fn random_list() -> crate::Result<()> {
    let r = decode_query::<Random<RandomPage>>(
        br#"{"batchcomplete":"","continue":{"rncontinue":"0.1|0.2|0|0","continue":"-||"},
        "query":{"random":[{"id":7052,"ns":0,"title":"Oolong"}]}}"#,
    )?;
    assert_eq!(
        vec![RandomPage {
            id: 7052,
            ns: 0,
            title: "Oolong".into()
        }],
        r.random
    );
    Ok(())
}

#[test]
fn search_hits() -> crate::Result<()> {
    let Search { search } = decode_query::<Search<SearchHit>>(
        br#"{"batchcomplete":"","continue":{"sroffset":10,"continue":"-||"},
        "query":{"searchinfo":{"totalhits":2},"search":[
            {"ns":0,"title":"Rust","pageid":26477,"size":1,"wordcount":2,"snippet":"","timestamp":"2024-01-01T00:00:00Z"},
            {"ns":0,"title":"Rusty","pageid":9,"size":1,"wordcount":2,"snippet":"","timestamp":"2024-01-01T00:00:00Z"}
        ]}}"#,
    )?;
    assert_eq!(
        SearchHit {
            ns: 0,
            title: "Rust".into(),
            page_id: 26477,
        },
        search[0]
    );
    assert_eq!(2, search.len());
    Ok(())
}
