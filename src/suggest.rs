//! Picking which search hits and trending articles are worth showing.

use crate::pageviews::TopArticle;
use crate::res::SearchHit;

/// How many trending articles are listed.
pub const TRENDING_LIMIT: usize = 10;

// compared against lowercased titles
const HIDDEN_PREFIXES: [&str; 6] = [
    "help:",
    "special:",
    "user:",
    "wikipedia:",
    "category:",
    "template:",
];

/// False for project and maintenance pages. Case is ignored.
pub fn is_suggestible(title: &str) -> bool {
    let lower = title.to_lowercase();
    !lower.contains("citation needed") && !HIDDEN_PREFIXES.iter().any(|p| lower.starts_with(p))
}

/// Puts hits whose title starts with `query` first and drops the ones that
/// are not suggestible. Otherwise the server's order is kept.
pub fn rank_search(query: &str, mut hits: Vec<SearchHit>) -> Vec<SearchHit> {
    let query = query.to_lowercase();
    hits.sort_by_key(|h| !h.title.to_lowercase().starts_with(&query));
    hits.retain(|h| is_suggestible(&h.title));
    hits
}

/// Display titles of the first `limit` suggestible trending articles,
/// skipping the main page.
pub fn trending_titles(articles: &[TopArticle], limit: usize) -> Vec<String> {
    articles
        .iter()
        .map(|a| a.article.trim())
        .filter(|a| {
            let lower = a.to_lowercase();
            lower != "main_page" && lower != "main page" && is_suggestible(a)
        })
        .take(limit)
        .map(|a| a.replace('_', " "))
        .collect()
}
