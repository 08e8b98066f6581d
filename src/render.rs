//! HTML rendering.
//!
//! Each level (article, feed, category, document) has its own template.
//! Inner fragments are rendered first and embedded into the outer template
//! as already-rendered markup.
//!
//! Titles and links are escaped by askama. Descriptions are embedded as-is so
//! that markup supplied by the feed keeps working, which means a hostile feed
//! can inject markup into the page.

use askama::Template;
use chrono::NaiveDate;

use crate::model::{Article, Category, Feed};

const PAGE_TITLE: &str = "RSS";

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate<'a> {
    page_title: &'a str,
    categories: String,
}

#[derive(Template)]
#[template(path = "category.html")]
struct CategoryTemplate<'a> {
    title: &'a str,
    feeds: String,
}

#[derive(Template)]
#[template(path = "feed.html")]
struct FeedTemplate<'a> {
    title: &'a str,
    link: &'a str,
    articles: String,
}

#[derive(Template)]
#[template(path = "article.html")]
struct ArticleTemplate<'a> {
    date: Option<String>,
    title: &'a str,
    link: &'a str,
    description: &'a str,
}

/// Short date rendering used in front of each article, e.g. `10/04/23`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%x").to_string()
}

pub fn render_article(article: &Article) -> askama::Result<String> {
    ArticleTemplate {
        date: article.date.map(format_date),
        title: &article.title,
        link: &article.link,
        description: article.description.as_deref().unwrap_or_default(),
    }
    .render()
}

pub fn render_feed(feed: &Feed) -> askama::Result<String> {
    let articles = feed
        .articles
        .iter()
        .map(render_article)
        .collect::<askama::Result<Vec<_>>>()?;

    FeedTemplate {
        title: &feed.title,
        link: &feed.link,
        articles: articles.join("<br/>"),
    }
    .render()
}

pub fn render_category(category: &Category) -> askama::Result<String> {
    let feeds = category
        .feeds
        .iter()
        .map(render_feed)
        .collect::<askama::Result<Vec<_>>>()?;

    CategoryTemplate {
        title: &category.name,
        feeds: feeds.join("\n"),
    }
    .render()
}

/// Render the complete page for all categories, in the given order.
pub fn render_document(categories: &[Category]) -> askama::Result<String> {
    let categories = categories
        .iter()
        .map(render_category)
        .collect::<askama::Result<Vec<_>>>()?;

    IndexTemplate {
        page_title: PAGE_TITLE,
        categories: categories.join("\n"),
    }
    .render()
}
