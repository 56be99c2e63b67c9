use serde::Deserialize;
use serde_json::Value;

/// Top level of every `action=query` reply.
#[derive(Deserialize, Debug)]
pub struct ApiResponse<Q> {
    pub error: Option<Value>,
    pub query: Option<Q>,
}

/// `query.pages`, keyed by page id. Missing pages get negative ids.
#[derive(Deserialize, Debug)]
#[serde(bound(deserialize = "P: Deserialize<'de>"))]
pub struct Pages<P> {
    #[serde(deserialize_with = "crate::util::in_order")]
    pub pages: Vec<(String, P)>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct PageInfo {
    #[serde(rename = "pageid")]
    pub page_id: Option<u64>,
    pub ns: Option<i64>,
    pub title: Option<String>,
    pub extract: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct Random<R> {
    pub random: Vec<R>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RandomPage {
    pub id: u64,
    pub ns: i64,
    pub title: String,
}

/// `query.search` of a `list=search` reply.
#[derive(Deserialize, Debug)]
pub struct Search<H> {
    pub search: Vec<H>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub ns: i64,
    pub title: String,
    #[serde(rename = "pageid")]
    pub page_id: u64,
}
