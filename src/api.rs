use std::num::NonZeroU16;

use reqwest::{RequestBuilder, StatusCode};
use serde::de::{DeserializeOwned, IgnoredAny};
use tracing::{debug, trace};

use crate::outcome::FetchOutcome;
use crate::req::{Action, Query};
use crate::res::{ApiResponse, PageInfo, Pages, Random, RandomPage, Search, SearchHit};
use crate::{Error, Result, Site};

/// Articles live in namespace 0.
pub const MAIN_NAMESPACE: i32 = 0;

/// The decoded `query` object, or the status of a reply that was not 200.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiReply<Q> {
    Success(Q),
    Failed(StatusCode),
}

impl<Q> ApiReply<Q> {
    pub fn map<R>(self, f: impl FnOnce(Q) -> R) -> ApiReply<R> {
        match self {
            Self::Success(q) => ApiReply::Success(f(q)),
            Self::Failed(status) => ApiReply::Failed(status),
        }
    }
}

/// Decodes the body of a 200 reply and returns its `query` object.
pub fn decode_query<Q: DeserializeOwned>(body: &[u8]) -> Result<Q> {
    // syntax first, then shape, so the two are reported apart.
    serde_json::from_slice::<IgnoredAny>(body).map_err(Error::Decode)?;
    let res: ApiResponse<Q> = serde_json::from_slice(body).map_err(Error::Schema)?;
    if let Some(e) = res.error {
        debug!("MediaWiki API returned error: {e}");
        return Err(Error::MediaWiki(e));
    }
    res.query.ok_or_else(|| {
        Error::Schema(<serde_json::Error as serde::de::Error>::missing_field(
            "query",
        ))
    })
}

/// Decodes a REST API body that has no `query` envelope.
pub fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice::<IgnoredAny>(body).map_err(Error::Decode)?;
    serde_json::from_slice(body).map_err(Error::Schema)
}

impl Site {
    /// Sends `req` and decodes the body with `decode`. The body is only read
    /// when the status is 200.
    pub async fn send<T>(
        &self,
        req: RequestBuilder,
        decode: impl FnOnce(&[u8]) -> Result<T>,
    ) -> Result<ApiReply<T>> {
        let req = req.build()?;
        debug!(url = %req.url(), "sending request");
        let res = self.client.execute(req).await?;
        let status = res.status();
        debug!(%status, "received response");
        if status != StatusCode::OK {
            return Ok(ApiReply::Failed(status));
        }
        let body = res.bytes().await?;
        decode(&body).map(ApiReply::Success)
    }

    /// Sends a request built by [`Site::get`] and returns its `query` object.
    pub async fn send_query<Q: DeserializeOwned>(&self, req: RequestBuilder) -> Result<ApiReply<Q>> {
        self.send(req, decode_query::<Q>).await
    }

    /// Fetches the introductory extract of `title`, one outcome per page
    /// in the reply.
    pub async fn fetch_extract(&self, title: &str) -> Result<FetchOutcome> {
        let reply: ApiReply<Pages<PageInfo>> = self
            .send_query(self.get(Action::Query(Query::extract(title))))
            .await?;
        Ok(match reply {
            ApiReply::Success(Pages { pages }) => FetchOutcome::Pages(
                pages
                    .into_iter()
                    .map(|(id, info)| {
                        trace!(id = %id, has_extract = info.extract.is_some(), "page");
                        info.into()
                    })
                    .collect(),
            ),
            ApiReply::Failed(status) => FetchOutcome::Failed(status),
        })
    }

    /// The id of the first page returned for `title`. Missing pages have none.
    pub async fn page_id(&self, title: &str) -> Result<ApiReply<Option<u64>>> {
        let reply: ApiReply<Pages<PageInfo>> = self
            .send_query(self.get(Action::Query(Query::page_info(title))))
            .await?;
        Ok(reply.map(|Pages { pages }| {
            pages
                .into_iter()
                .next()
                .and_then(|(_, info)| info.page_id)
        }))
    }

    /// One random article from the main namespace.
    pub async fn random_article(&self) -> Result<ApiReply<Option<RandomPage>>> {
        let q = Query::random(MAIN_NAMESPACE, NonZeroU16::MIN);
        let reply: ApiReply<Random<RandomPage>> =
            self.send_query(self.get(Action::Query(q))).await?;
        Ok(reply.map(|r| r.random.into_iter().next()))
    }

    /// Full text search for `text`. Hits come back in the server's order.
    pub async fn search(
        &self,
        text: &str,
        limit: Option<NonZeroU16>,
    ) -> Result<ApiReply<Vec<SearchHit>>> {
        let reply: ApiReply<Search<SearchHit>> = self
            .send_query(self.get(Action::Query(Query::search(text, limit))))
            .await?;
        Ok(reply.map(|s| s.search))
    }
}
