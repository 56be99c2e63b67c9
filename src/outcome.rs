//! What a lookup produced, and how it is shown to the user.

use std::fmt;
use std::io;

use reqwest::StatusCode;

use crate::res::PageInfo;

pub const NOT_FOUND_MESSAGE: &str = "Article content not found.";
pub const NO_RESULTS_MESSAGE: &str = "No results found.";
pub const NO_TRENDING_MESSAGE: &str = "No trending articles found.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    Found(String),
    NotFound,
}

impl From<PageInfo> for PageOutcome {
    fn from(info: PageInfo) -> Self {
        match info.extract {
            Some(extract) => Self::Found(extract),
            None => Self::NotFound,
        }
    }
}

impl fmt::Display for PageOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found(extract) => f.write_str(extract),
            Self::NotFound => f.write_str(NOT_FOUND_MESSAGE),
        }
    }
}

/// The server answered with something other than 200.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusFailure(pub StatusCode);

impl fmt::Display for StatusFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Failed to fetch data. Status code: {}", self.0.as_u16())
    }
}

/// Result of [`Site::fetch_extract`](crate::Site::fetch_extract).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// One entry per page in the response, in response order.
    Pages(Vec<PageOutcome>),
    Failed(StatusCode),
}

impl FetchOutcome {
    /// Writes one line per page, or the failure line.
    pub fn write_to<W: io::Write>(&self, mut w: W) -> io::Result<()> {
        match self {
            Self::Pages(pages) => {
                for page in pages {
                    writeln!(w, "{page}")?;
                }
                Ok(())
            }
            Self::Failed(status) => writeln!(w, "{}", StatusFailure(*status)),
        }
    }
}
