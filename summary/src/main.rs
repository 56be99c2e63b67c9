use std::env::{self, VarError};
use std::io::{self, Write};
use std::num::NonZeroU16;

use chrono::{NaiveDate, Utc};
use clap::{Args as ClapArgs, Parser, Subcommand};
use color_eyre::eyre::{eyre, WrapErr};
use tracing::info;
use tracing::metadata::LevelFilter;
use tracing_subscriber::EnvFilter;
use wikiextract::api::ApiReply;
use wikiextract::outcome::{
    StatusFailure, NOT_FOUND_MESSAGE, NO_RESULTS_MESSAGE, NO_TRENDING_MESSAGE,
};
use wikiextract::pageviews::DateRange;
use wikiextract::suggest::{rank_search, trending_titles, TRENDING_LIMIT};
use wikiextract::{Site, SiteBuilder, ENWIKI_API, WIKIMEDIA_REST_API};

const DEFAULT_TITLE: &str = "Travis Scott";

/// Print the introduction of a Wikipedia article.
#[derive(Parser, Debug)]
#[command(author, version, long_about = None)]
struct Args {
    /// MediaWiki action API endpoint
    #[arg(long, env = "WIKI_API_URL", default_value = ENWIKI_API, global = true)]
    api_url: String,

    /// Wikimedia REST API root, used for pageviews
    #[arg(long, env = "WIKI_REST_URL", default_value = WIKIMEDIA_REST_API, global = true)]
    rest_url: String,

    /// User agent to identify as, defaults to this library's
    #[arg(long, env = "WIKI_USER_AGENT", global = true)]
    user_agent: Option<String>,

    /// What to look up. Without one, prints the extract of `ARTICLE_TITLE`
    /// or of the default article.
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// Print the introductory extract of an article
    Extract(ExtractArgs),
    /// Pick a random article and print its extract
    Random,
    /// Print the page id of an article
    PageId {
        title: String,
    },
    /// Search article titles. An empty query lists trending articles
    Search {
        query: String,
        /// At most this many hits, before filtering
        #[arg(long)]
        limit: Option<NonZeroU16>,
    },
    /// List yesterday's most viewed articles
    Trending,
    /// Print how often an article was viewed in the week up to yesterday
    Views {
        title: String,
    },
}

#[derive(ClapArgs, Debug, PartialEq, Eq)]
struct ExtractArgs {
    #[arg(env = "ARTICLE_TITLE", default_value = DEFAULT_TITLE)]
    title: String,
}

impl Args {
    fn site(&self) -> wikiextract::Result<Site> {
        let mut builder = SiteBuilder::new(&self.api_url).rest_api(&self.rest_url);
        if let Some(ua) = &self.user_agent {
            builder = builder.user_agent(ua.clone());
        }
        builder.build()
    }
}

/// What to do without a subcommand, given the value of `ARTICLE_TITLE`.
fn default_command(article_title: Result<String, VarError>) -> color_eyre::Result<Command> {
    let title = match article_title {
        Ok(title) => title,
        Err(VarError::NotPresent) => DEFAULT_TITLE.to_owned(),
        Err(VarError::NotUnicode(raw)) => {
            return Err(eyre!("ARTICLE_TITLE is not valid unicode: {raw:?}"))
        }
    };
    Ok(Command::Extract(ExtractArgs { title }))
}

async fn trending<W: Write>(
    site: &Site,
    yesterday: NaiveDate,
    out: &mut W,
) -> color_eyre::Result<()> {
    let reply = site
        .top_articles(yesterday)
        .await
        .wrap_err_with(|| format!("failed to fetch the top articles of {yesterday}"))?;
    match reply {
        ApiReply::Success(articles) => {
            let titles = trending_titles(&articles, TRENDING_LIMIT);
            if titles.is_empty() {
                writeln!(out, "{NO_TRENDING_MESSAGE}")?;
            }
            for title in titles {
                writeln!(out, "{title}")?;
            }
        }
        ApiReply::Failed(status) => writeln!(out, "{}", StatusFailure(status))?,
    }
    Ok(())
}

async fn run<W: Write>(
    site: &Site,
    command: Command,
    yesterday: NaiveDate,
    out: &mut W,
) -> color_eyre::Result<()> {
    match command {
        Command::Extract(ExtractArgs { title }) => {
            info!(%title, "fetching extract");
            site.fetch_extract(&title)
                .await
                .wrap_err_with(|| format!("failed to fetch the extract of {title:?}"))?
                .write_to(&mut *out)?;
        }
        Command::Random => {
            let reply = site
                .random_article()
                .await
                .wrap_err("failed to pick a random article")?;
            match reply {
                ApiReply::Success(Some(page)) => {
                    writeln!(out, "# {}", page.title)?;
                    site.fetch_extract(&page.title)
                        .await
                        .wrap_err_with(|| format!("failed to fetch the extract of {:?}", page.title))?
                        .write_to(&mut *out)?;
                }
                ApiReply::Success(None) => writeln!(out, "{NOT_FOUND_MESSAGE}")?,
                ApiReply::Failed(status) => writeln!(out, "{}", StatusFailure(status))?,
            }
        }
        Command::PageId { title } => {
            let reply = site
                .page_id(&title)
                .await
                .wrap_err_with(|| format!("failed to look up {title:?}"))?;
            match reply {
                ApiReply::Success(Some(id)) => writeln!(out, "{id}")?,
                ApiReply::Success(None) => writeln!(out, "{NOT_FOUND_MESSAGE}")?,
                ApiReply::Failed(status) => writeln!(out, "{}", StatusFailure(status))?,
            }
        }
        Command::Search { query, limit } => {
            let query = query.trim();
            if query.is_empty() {
                return trending(site, yesterday, out).await;
            }
            info!(%query, "searching");
            let reply = site
                .search(query, limit)
                .await
                .wrap_err_with(|| format!("failed to search for {query:?}"))?;
            match reply {
                ApiReply::Success(hits) if hits.is_empty() => {
                    writeln!(out, "{NO_RESULTS_MESSAGE}")?
                }
                ApiReply::Success(hits) => {
                    for hit in rank_search(query, hits) {
                        writeln!(out, "{}", hit.title)?;
                    }
                }
                ApiReply::Failed(status) => writeln!(out, "{}", StatusFailure(status))?,
            }
        }
        Command::Trending => trending(site, yesterday, out).await?,
        Command::Views { title } => {
            let week = DateRange::week_ending(yesterday)
                .ok_or_else(|| eyre!("no week ends on {yesterday}"))?;
            let reply = site
                .pageviews(&title, week)
                .await
                .wrap_err_with(|| format!("failed to fetch the pageviews of {title:?}"))?;
            match reply {
                ApiReply::Success(views) => writeln!(out, "{views}")?,
                ApiReply::Failed(status) => writeln!(out, "{}", StatusFailure(status))?,
            }
        }
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .init();

    let args = Args::parse();
    let site = args.site()?;
    let command = match args.command {
        Some(command) => command,
        None => default_command(env::var("ARTICLE_TITLE"))?,
    };
    let yesterday = Utc::now()
        .date_naive()
        .pred_opt()
        .ok_or_else(|| eyre!("today has no yesterday"))?;
    let stdout = io::stdout();
    run(&site, command, yesterday, &mut stdout.lock()).await
}
