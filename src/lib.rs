use std::borrow::Cow;
use std::fmt;

use reqwest::header::InvalidHeaderValue;
use reqwest::{RequestBuilder, Url};

use crate::req::{Action, Main};
use crate::url::AsPairs;

pub mod api;
pub mod builder;
pub mod outcome;
pub mod pageviews;
pub mod req;
pub mod res;
pub mod suggest;
pub mod url;
pub mod util;

pub use builder::SiteBuilder;
pub use outcome::{FetchOutcome, PageOutcome};

pub const ENWIKI_API: &str = "https://en.wikipedia.org/w/api.php";
pub const WIKIMEDIA_REST_API: &str = "https://wikimedia.org/api/rest_v1";
pub const ENWIKI_PROJECT: &str = "en.wikipedia";

/// A MediaWiki action API endpoint and the client used to talk to it.
#[derive(Clone)]
pub struct Site {
    pub client: reqwest::Client,
    url: Url,
    rest: Url,
    project: Cow<'static, str>,
}

impl fmt::Debug for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Site")
            .field("client", &self.client)
            .field("url", &self.url)
            .field("rest", &self.rest)
            .field("project", &self.project)
            .finish()
    }
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    InvalidUrl(#[from] ::url::ParseError),
    #[error("API url must not have a query string: {0}")]
    UrlWithQuery(Url),
    #[error("cannot append paths to {0}")]
    NotABase(Url),
    #[error(transparent)]
    InvalidHeaderValue(#[from] InvalidHeaderValue),
    #[error(transparent)]
    Request(#[from] reqwest::Error),
    #[error("response body is not valid JSON: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("unexpected response structure: {0}")]
    Schema(#[source] serde_json::Error),
    #[error("MediaWiki API returned error: {0}")]
    MediaWiki(serde_json::Value),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

const UA: &str = concat!(
    "wikiextract",
    "/",
    env!("CARGO_PKG_VERSION"),
    " (https://github.com/fee1-dead/wiki)"
);

impl Site {
    pub fn new(api_url: &str) -> Result<Self> {
        SiteBuilder::new(api_url).build()
    }

    pub fn enwiki() -> Result<Self> {
        SiteBuilder::enwiki().build()
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    /// A GET request carrying `action`, with `format=json`.
    pub fn get(&self, action: Action) -> RequestBuilder {
        self.client
            .get(self.url.clone())
            .query(&AsPairs(Main::new(action)))
    }

    /// A GET request for `segments` below the REST API root. Each segment
    /// is percent-encoded on its own, so a `/` inside one stays literal.
    pub fn rest_get<I>(&self, segments: I) -> Result<RequestBuilder>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut url = self.rest.clone();
        url.path_segments_mut()
            .map_err(|()| Error::NotABase(self.rest.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(self.client.get(url))
    }
}

#[cfg(test)]
mod tests;
