//! Remote listings: GitHub repositories, feed articles and the photo collection.
//!
//! Each loader issues exactly one request and folds every failure into a
//! [`ListingState`] so callers never see an error.

use crate::config::SiteConfig;
use crate::http::{get_json, HttpClient};
use crate::types::{Article, FeedResponse, Photo, Repo};
use rand::seq::SliceRandom;
use rand::Rng;

pub const REPOS_FAILED: &str = "Unable to load repositories. Please try again later.";
pub const ARTICLES_FAILED: &str = "Unable to load articles. Please try again later.";
pub const PHOTOS_FAILED: &str = "Unable to load images. Please try again later.";
pub const PHOTOS_EMPTY: &str = "No data to display now.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingState<T> {
    Loading,
    /// Placeholder shown instead of any cards.
    Failed(String),
    /// Successful fetch with nothing to show, rendered as a placeholder.
    Empty(String),
    Loaded(Vec<T>),
}

impl<T> ListingState<T> {
    pub fn items(&self) -> &[T] {
        match self {
            ListingState::Loaded(items) => items,
            _ => &[],
        }
    }

    pub fn placeholder(&self) -> Option<&str> {
        match self {
            ListingState::Failed(msg) | ListingState::Empty(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ListingState::Loading)
    }

    pub fn outcome(&self) -> ListingOutcome {
        match self {
            ListingState::Loading => ListingOutcome::Pending,
            ListingState::Failed(_) => ListingOutcome::Failed,
            ListingState::Empty(_) => ListingOutcome::Empty,
            ListingState::Loaded(items) => ListingOutcome::Loaded(items.len()),
        }
    }
}

/// Summary of a listing without its items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingOutcome {
    Pending,
    Failed,
    Empty,
    Loaded(usize),
}

/// Uniformly pick up to `n` items in random order.
pub fn sample<T, R: Rng + ?Sized>(mut items: Vec<T>, n: usize, rng: &mut R) -> Vec<T> {
    items.shuffle(rng);
    items.truncate(n);
    items
}

/// Up to `sample_size` randomly chosen repositories.
///
/// An empty account yields `Loaded(vec![])`, not a placeholder; photos
/// behave differently and this is kept as-is.
pub async fn load_repos<R: Rng + ?Sized>(
    http: &dyn HttpClient,
    config: &SiteConfig,
    rng: &mut R,
) -> ListingState<Repo> {
    match get_json::<Vec<Repo>>(http, &config.repos_url()).await {
        Ok(repos) => ListingState::Loaded(sample(repos, config.sample_size, rng)),
        Err(e) => {
            tracing::error!("Error fetching GitHub repositories: {e}");
            ListingState::Failed(REPOS_FAILED.to_string())
        }
    }
}

/// Every article in the feed, in feed order.
pub async fn load_articles(http: &dyn HttpClient, config: &SiteConfig) -> ListingState<Article> {
    match get_json::<FeedResponse>(http, &config.articles_url()).await {
        Ok(feed) => ListingState::Loaded(feed.items),
        Err(e) => {
            tracing::error!("Error fetching articles: {e}");
            ListingState::Failed(ARTICLES_FAILED.to_string())
        }
    }
}

pub async fn load_photos<R: Rng + ?Sized>(
    http: &dyn HttpClient,
    config: &SiteConfig,
    rng: &mut R,
) -> ListingState<Photo> {
    match get_json::<Vec<Photo>>(http, &config.photos_url).await {
        Ok(photos) if photos.is_empty() => ListingState::Empty(PHOTOS_EMPTY.to_string()),
        Ok(photos) => ListingState::Loaded(sample(photos, config.sample_size, rng)),
        Err(e) => {
            tracing::error!("Error loading images: {e}");
            ListingState::Failed(PHOTOS_FAILED.to_string())
        }
    }
}
