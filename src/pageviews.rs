//! Pageview metrics from the Wikimedia REST API.

use chrono::{Datelike, Days, NaiveDate};
use serde::Deserialize;

use crate::api::{decode_body, ApiReply};
use crate::{Result, Site};

/// An inclusive range of days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// The seven days ending with `end`.
    pub fn week_ending(end: NaiveDate) -> Option<Self> {
        let start = end.checked_sub_days(Days::new(6))?;
        Some(Self { start, end })
    }
}

/// `per-article` reply. No `items` means no views were recorded.
#[derive(Deserialize, Debug)]
pub struct PerArticle {
    #[serde(default)]
    pub items: Vec<DailyViews>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DailyViews {
    pub views: u64,
}

/// `top` reply, one item per requested day.
#[derive(Deserialize, Debug)]
pub struct Top {
    #[serde(default)]
    pub items: Vec<TopDay>,
}

#[derive(Deserialize, Debug)]
pub struct TopDay {
    pub articles: Vec<TopArticle>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TopArticle {
    /// Title with underscores for spaces.
    pub article: String,
    pub views: u64,
    pub rank: u32,
}

fn yyyymmdd(day: NaiveDate) -> String {
    day.format("%Y%m%d").to_string()
}

impl Site {
    /// Views of `title` summed over `days`, across all access methods and agents.
    pub async fn pageviews(&self, title: &str, days: DateRange) -> Result<ApiReply<u64>> {
        let article = title.replace(' ', "_");
        let (start, end) = (yyyymmdd(days.start), yyyymmdd(days.end));
        let req = self.rest_get([
            "metrics",
            "pageviews",
            "per-article",
            self.project(),
            "all-access",
            "all-agents",
            article.as_str(),
            "daily",
            start.as_str(),
            end.as_str(),
        ])?;
        let reply: ApiReply<PerArticle> = self.send(req, decode_body::<PerArticle>).await?;
        Ok(reply.map(|p| p.items.iter().map(|d| d.views).sum()))
    }

    /// The most viewed articles of `day`, in rank order.
    pub async fn top_articles(&self, day: NaiveDate) -> Result<ApiReply<Vec<TopArticle>>> {
        let year = format!("{:04}", day.year());
        let month = format!("{:02}", day.month());
        let dom = format!("{:02}", day.day());
        let req = self.rest_get([
            "metrics",
            "pageviews",
            "top",
            self.project(),
            "all-access",
            year.as_str(),
            month.as_str(),
            dom.as_str(),
        ])?;
        let reply: ApiReply<Top> = self.send(req, decode_body::<Top>).await?;
        Ok(reply.map(|t| {
            t.items
                .into_iter()
                .next()
                .map(|d| d.articles)
                .unwrap_or_default()
        }))
    }
}
