use crate::types::{Section, Theme};

pub const DEFAULT_SAMPLE_SIZE: usize = 9;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub github_user: String,
    pub feed_url: String,
    pub photos_url: String,
    /// Prefix for `<language>.json`; empty means relative to the page.
    pub translations_base: String,
    pub logo_dark: String,
    pub logo_light: String,
    pub sample_size: usize,
    pub sections: Vec<Section>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            github_user: "Ruivalim".to_string(),
            feed_url: "https://dev.to/feed/ruivalim".to_string(),
            photos_url: "/photography.json".to_string(),
            translations_base: String::new(),
            logo_dark: "/logo-dark.svg".to_string(),
            logo_light: "/logo-light.svg".to_string(),
            sample_size: DEFAULT_SAMPLE_SIZE,
            sections: vec![Section::Repos, Section::Articles, Section::Photos],
        }
    }
}

impl SiteConfig {
    /// Defaults overridden by whatever `lookup` returns for the `PORTFOLIO_*` keys.
    /// Values that fail to parse keep the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = SiteConfig::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = non_empty("PORTFOLIO_GITHUB_USER") {
            cfg.github_user = v.trim().to_string();
        }
        if let Some(v) = non_empty("PORTFOLIO_FEED_URL") {
            cfg.feed_url = v.trim().to_string();
        }
        if let Some(v) = non_empty("PORTFOLIO_PHOTOS_URL") {
            cfg.photos_url = v.trim().to_string();
        }
        if let Some(v) = lookup("PORTFOLIO_TRANSLATIONS_BASE") {
            cfg.translations_base = v.trim().to_string();
        }
        if let Some(n) = non_empty("PORTFOLIO_SAMPLE_SIZE").and_then(|v| v.trim().parse::<usize>().ok()) {
            if n > 0 {
                cfg.sample_size = n;
            }
        }
        if let Some(v) = non_empty("PORTFOLIO_SECTIONS") {
            let sections: Option<Vec<Section>> = v.split(',').map(Section::parse).collect();
            if let Some(sections) = sections {
                cfg.sections = sections;
            }
        }
        cfg
    }

    /// Values baked in at compile time; wasm builds have no runtime environment.
    pub fn from_build_env() -> Self {
        Self::from_lookup(|key| {
            let value = match key {
                "PORTFOLIO_GITHUB_USER" => option_env!("PORTFOLIO_GITHUB_USER"),
                "PORTFOLIO_FEED_URL" => option_env!("PORTFOLIO_FEED_URL"),
                "PORTFOLIO_PHOTOS_URL" => option_env!("PORTFOLIO_PHOTOS_URL"),
                "PORTFOLIO_TRANSLATIONS_BASE" => option_env!("PORTFOLIO_TRANSLATIONS_BASE"),
                "PORTFOLIO_SAMPLE_SIZE" => option_env!("PORTFOLIO_SAMPLE_SIZE"),
                "PORTFOLIO_SECTIONS" => option_env!("PORTFOLIO_SECTIONS"),
                _ => None,
            };
            value.map(str::to_string)
        })
    }

    pub fn repos_url(&self) -> String {
        format!(
            "https://api.github.com/users/{}/repos?sort=updated",
            self.github_user
        )
    }

    pub fn articles_url(&self) -> String {
        format!(
            "https://api.rss2json.com/v1/api.json?rss_url={}",
            urlencoding::encode(&self.feed_url)
        )
    }

    pub fn translations_url(&self, language: &str) -> String {
        if self.translations_base.is_empty() {
            format!("{language}.json")
        } else {
            format!("{}/{language}.json", self.translations_base.trim_end_matches('/'))
        }
    }

    pub fn logo_for(&self, theme: Theme) -> &str {
        match theme {
            Theme::Dark => &self.logo_dark,
            Theme::Light => &self.logo_light,
        }
    }
}
