use super::HttpClient;
use crate::error::FetchError;
use async_trait::async_trait;
use reqwest::Url;

/// `reqwest`-backed client; uses the Fetch API when compiled to wasm.
///
/// `reqwest` only accepts absolute URLs, so relative asset paths such as
/// `en.json` are joined onto `base` (the page URL in the browser).
#[derive(Debug, Clone, Default)]
pub struct ReqwestClient {
    client: reqwest::Client,
    base: Option<Url>,
}

impl ReqwestClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base(base: &str) -> Self {
        let parsed = Url::parse(base).ok();
        if parsed.is_none() {
            tracing::warn!("http: ignoring unparseable base url {base}");
        }
        Self {
            client: reqwest::Client::new(),
            base: parsed,
        }
    }

    pub fn resolve(&self, url: &str) -> Result<Url, FetchError> {
        match Url::parse(url) {
            Ok(abs) => Ok(abs),
            Err(_) => {
                let base = self
                    .base
                    .as_ref()
                    .ok_or_else(|| FetchError::Transport(format!("relative url without base: {url}")))?;
                base.join(url)
                    .map_err(|e| FetchError::Transport(e.to_string()))
            }
        }
    }
}

#[async_trait(?Send)]
impl HttpClient for ReqwestClient {
    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let url = self.resolve(url)?;
        let resp = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        resp.text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))
    }
}
