use std::borrow::Cow;

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{ClientBuilder, Url};
use tracing::debug;

use crate::{Error, Result, Site, ENWIKI_API, ENWIKI_PROJECT, UA, WIKIMEDIA_REST_API};

pub struct SiteBuilder {
    url: String,
    rest_url: String,
    project: Cow<'static, str>,
    client: ClientBuilder,
    user_agent: Option<Cow<'static, str>>,
}

impl SiteBuilder {
    pub fn new(api_url: &str) -> Self {
        Self {
            url: api_url.to_owned(),
            rest_url: WIKIMEDIA_REST_API.to_owned(),
            project: Cow::Borrowed(ENWIKI_PROJECT),
            client: reqwest::Client::builder(),
            user_agent: None,
        }
    }

    pub fn enwiki() -> Self {
        Self::new(ENWIKI_API)
    }

    /// Wikimedia asks for a descriptive agent with contact info.
    /// Defaults to this crate's name and version.
    pub fn user_agent(mut self, ua: impl Into<Cow<'static, str>>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Root of the Wikimedia REST API, used for pageview metrics.
    pub fn rest_api(mut self, url: &str) -> Self {
        self.rest_url = url.to_owned();
        self
    }

    /// The project the pageview metrics are read for, e.g. `de.wikipedia`.
    pub fn project(mut self, project: impl Into<Cow<'static, str>>) -> Self {
        self.project = project.into();
        self
    }

    pub fn build(self) -> Result<Site> {
        let url: Url = self.url.parse()?;
        if url.query().is_some() {
            return Err(Error::UrlWithQuery(url));
        }
        let rest: Url = self.rest_url.parse()?;
        if rest.cannot_be_a_base() {
            return Err(Error::NotABase(rest));
        }
        let ua = self.user_agent.as_deref().unwrap_or(UA);

        let mut headers = HeaderMap::new();
        headers.insert("Api-User-Agent", HeaderValue::from_str(ua)?);

        let client = self
            .client
            .user_agent(ua)
            .default_headers(headers)
            .build()?;
        debug!(%url, %rest, project = %self.project, ua, "built site");

        Ok(Site {
            client,
            url,
            rest,
            project: self.project,
        })
    }
}
