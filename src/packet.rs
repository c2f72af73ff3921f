//! Book packets: scraped page fields cleaned up and mapped onto the
//! properties of a reading-list database page.
//!
//! Fetching the book page and sending the update are the caller's business.
//! This module covers the pure part in between:
//!
//! ```text
//! ScrapedBook ──▶ BookPacket ──▶ PageUpdate ──▶ JSON body
//!  (raw text)      (cleaned)      (properties)
//! ```

use crate::dates::{iso_date, parse_publication_date};
use crate::error::SummaryError;
use crate::names::sort_name;
use crate::normalize::SummaryNormalizer;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tracing::{debug, warn};

const MORE_GENRES_LABEL: &str = "...more";
const SERIES_ORDER_SUFFIX: &str = " (Publication Order)";

/// Text fields as extracted from a book page, before any cleanup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapedBook {
    pub goodreads_id: String,
    pub title: String,
    pub author: String,
    /// e.g. `First published January 1, 2024`
    pub publication_info: String,
    /// e.g. `4.21`
    pub rating: String,
    /// e.g. `1,234,567ratings`
    pub ratings_count: String,
    /// e.g. `412 pages, Paperback`
    pub pages_format: String,
    pub summary: String,
    /// Genre button labels, usually ending with `...more`.
    pub genres: Vec<String>,
    pub series: Option<String>,
    pub cover_url: Option<String>,
}

/// Cleaned book fields, ready to be mapped onto page properties.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookPacket {
    pub pid: String,
    pub title: String,
    pub author: String,
    pub sort_author: String,
    pub publication_date: String,
    pub rating: String,
    pub num_ratings: String,
    pub pages: String,
    pub summary: String,
    pub genres: Vec<String>,
    pub series: Option<String>,
    pub cover: Option<String>,
}

impl BookPacket {
    /// Clean every scraped field; the summary goes through `normalizer`.
    pub fn from_scraped(raw: ScrapedBook, normalizer: &SummaryNormalizer) -> Self {
        let author = raw.author.trim_matches('\n').to_string();
        let mut genres = raw.genres;
        if genres.last().map(|g| g.trim()) == Some(MORE_GENRES_LABEL) {
            genres.pop();
        }

        Self {
            pid: raw.goodreads_id,
            title: raw.title.replace('\u{200B}', ""),
            sort_author: sort_name(&author),
            author,
            publication_date: raw.publication_info.replace("First published ", ""),
            rating: raw.rating.trim().to_string(),
            num_ratings: raw
                .ratings_count
                .trim_matches(|c: char| "ratings".contains(c))
                .to_string(),
            pages: raw
                .pages_format
                .split(' ')
                .next()
                .unwrap_or_default()
                .to_string(),
            summary: normalizer.process(&raw.summary),
            genres,
            series: raw.series.map(|s| s.replace(SERIES_ORDER_SUFFIX, "")),
            cover: raw.cover_url,
        }
    }

    /// Every property of the page, plus its cover.
    ///
    /// When `allowed_genres` is given, genres that are not existing options of
    /// the multi-select property are dropped.
    pub fn page_update(
        &self,
        allowed_genres: Option<&[String]>,
    ) -> Result<PageUpdate, SummaryError> {
        let mut update = PageUpdate::default();

        if let Some(series) = &self.series {
            update.set("Series", rich_text(series));
        }
        update.set("ID", rich_text(&self.pid));
        update.set("Goodreads Rating", number(parse_rating(&self.rating)?));
        update.set("Number of Ratings", number(parse_count("num_ratings", &self.num_ratings)?));
        update.set("Page Count", number(parse_count("pages", &self.pages)?));

        let genres = self.filtered_genres(allowed_genres);
        update.set(
            "Genres",
            json!({
                "type": "multi_select",
                "multi_select": genres.iter().map(|g| json!({ "name": g })).collect::<Vec<_>>(),
            }),
        );

        let date = parse_publication_date(&self.publication_date)?;
        update.set("Publication Date", json!({ "date": { "start": iso_date(date) } }));
        update.set("Summary", rich_text(&self.summary));
        update.set("Author", rich_text(&self.author));
        update.set("Sort Author", rich_text(&self.sort_author));

        update.cover = self.cover.as_ref().map(|url| Cover::external(url));
        Ok(update)
    }

    /// Only the rating properties, for periodic refreshes of known books.
    pub fn refresh_update(&self) -> Result<PageUpdate, SummaryError> {
        let mut update = PageUpdate::default();
        update.set("Goodreads Rating", number(parse_rating(&self.rating)?));
        update.set("Number of Ratings", number(parse_count("num_ratings", &self.num_ratings)?));
        Ok(update)
    }

    fn filtered_genres(&self, allowed: Option<&[String]>) -> Vec<String> {
        let mut kept: Vec<String> = Vec::with_capacity(self.genres.len());
        for genre in &self.genres {
            if kept.contains(genre) {
                continue;
            }
            match allowed {
                Some(options) if !options.contains(genre) => {
                    debug!("Dropping genre '{}': not a database option", genre);
                }
                _ => kept.push(genre.clone()),
            }
        }
        if kept.is_empty() && !self.genres.is_empty() {
            warn!("No genre of '{}' matches a database option", self.title);
        }
        kept
    }
}

// ── Page update payload ──────────────────────────────────────────────────

/// Body of a page update: `{"properties": {...}, "cover": {...}}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PageUpdate {
    pub properties: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<Cover>,
}

impl PageUpdate {
    fn set(&mut self, name: &str, value: Value) {
        self.properties.insert(name.to_string(), value);
    }
}

/// An externally hosted page cover image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cover {
    #[serde(rename = "type")]
    pub kind: String,
    pub external: ExternalUrl,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExternalUrl {
    pub url: String,
}

impl Cover {
    pub fn external(url: impl Into<String>) -> Self {
        Self {
            kind: "external".to_string(),
            external: ExternalUrl { url: url.into() },
        }
    }
}

fn rich_text(content: &str) -> Value {
    json!({
        "type": "rich_text",
        "rich_text": [{ "text": { "content": content } }],
    })
}

fn number(value: impl Into<Value>) -> Value {
    json!({ "type": "number", "number": value.into() })
}

fn parse_rating(value: &str) -> Result<f64, SummaryError> {
    value.trim().parse().map_err(|_| SummaryError::InvalidNumber {
        field: "rating",
        value: value.to_string(),
    })
}

/// Integers as displayed on the page: `1,234,567`.
fn parse_count(field: &'static str, value: &str) -> Result<u64, SummaryError> {
    value
        .trim()
        .replace(',', "")
        .parse()
        .map_err(|_| SummaryError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}

// ── Tests ────────────────────────────────────────────────────────────────
