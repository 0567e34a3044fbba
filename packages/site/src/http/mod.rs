use crate::error::FetchError;
use async_trait::async_trait;
use serde::de::DeserializeOwned;

pub mod reqwest_client;

pub use reqwest_client::ReqwestClient;

/// Trait for the GET-only transport the site needs.
///
/// `?Send` because browser fetch futures are not `Send`.
#[async_trait(?Send)]
pub trait HttpClient {
    /// Body of a successful response; non-2xx becomes [`FetchError::Status`].
    async fn get_text(&self, url: &str) -> Result<String, FetchError>;
}

/// Confirms an image asset can be loaded before it is displayed.
#[async_trait(?Send)]
pub trait AssetProbe {
    async fn probe(&self, src: &str) -> bool;
}

pub async fn get_json<T: DeserializeOwned>(
    client: &dyn HttpClient,
    url: &str,
) -> Result<T, FetchError> {
    tracing::debug!("GET {url}");
    let body = client.get_text(url).await?;
    Ok(serde_json::from_str(&body)?)
}
