use serde::{Deserialize, Serialize};

/// Visual mode of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn from_system(prefers_dark: bool) -> Self {
        if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn body_class(&self) -> &'static str {
        match self {
            Theme::Light => "light-mode",
            Theme::Dark => "dark-mode",
        }
    }

    pub fn navbar_class(&self) -> &'static str {
        match self {
            Theme::Light => "navbar-light",
            Theme::Dark => "navbar-dark",
        }
    }
}

/// A lowercase language code such as `en` or `pt`.
///
/// Codes outside [`Language::SUPPORTED`] are accepted when read back from
/// storage; only detection from the browser is restricted to the known set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Language(String);

impl Language {
    pub const SUPPORTED: [&'static str; 3] = ["en", "pt", "de"];

    pub fn new(code: &str) -> Option<Self> {
        let code = code.trim().to_ascii_lowercase();
        if code.is_empty() || !code.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return None;
        }
        Some(Language(code))
    }

    pub fn english() -> Self {
        Language("en".to_string())
    }

    pub fn portuguese() -> Self {
        Language("pt".to_string())
    }

    /// Map a `navigator.language` value onto a supported code.
    pub fn detect(browser_language: &str) -> Self {
        let lower = browser_language.trim().to_ascii_lowercase();
        if lower.starts_with("pt") {
            Language("pt".to_string())
        } else if lower.starts_with("de") {
            Language("de".to_string())
        } else {
            Language::english()
        }
    }

    pub fn code(&self) -> &str {
        &self.0
    }

    /// The two-state toggle only moves between English and Portuguese.
    pub fn toggled(&self) -> Self {
        if self.0 == "en" {
            Language::portuguese()
        } else {
            Language::english()
        }
    }

    /// Text shown on the language toggle button.
    pub fn toggle_label(&self) -> &'static str {
        if self.0 == "pt" {
            "EN / PT"
        } else {
            "PT / EN"
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preference {
    pub theme: Theme,
    pub language: Language,
}

/// Signals the environment offers when nothing is stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemSignals {
    pub prefers_dark: bool,
    pub browser_language: String,
}

impl Default for SystemSignals {
    fn default() -> Self {
        Self {
            prefers_dark: false,
            browser_language: "en".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repo {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub html_url: String,
}

impl Repo {
    pub fn description_or_default(&self) -> &str {
        match self.description.as_deref() {
            Some(d) if !d.trim().is_empty() => d,
            _ => "No description available.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub link: String,
}

impl Article {
    pub const EXCERPT_CHARS: usize = 200;

    /// First 200 characters of the description as plain text, followed by an
    /// ellipsis. Feed descriptions are HTML, so markup is removed before the cut.
    pub fn excerpt(&self) -> String {
        let text = plain_text(&self.description);
        let cut: String = text.chars().take(Self::EXCERPT_CHARS).collect();
        format!("{cut}...")
    }
}

const BLOCK_TAGS: [&str; 14] = [
    "p", "br", "div", "li", "ul", "ol", "h1", "h2", "h3", "h4", "h5", "h6", "blockquote", "pre",
];

/// Strip tags, decode entities and collapse whitespace.
pub fn plain_text(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut tag: Option<String> = None;

    for c in html.chars() {
        if let Some(name) = tag.as_mut() {
            if c == '>' {
                if is_block_tag(name) {
                    text.push(' ');
                }
                tag = None;
            } else {
                name.push(c);
            }
        } else if c == '<' {
            tag = Some(String::new());
        } else {
            text.push(c);
        }
    }

    decode_entities(&text)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_block_tag(raw: &str) -> bool {
    let name = raw
        .trim_start_matches('/')
        .split(|ch: char| ch.is_whitespace() || ch == '/')
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();
    BLOCK_TAGS.contains(&name.as_str())
}

fn decode_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find('&') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let decoded = after
            .find(';')
            .filter(|&end| end <= 10)
            .and_then(|end| entity(&after[..end]).map(|c| (c, end)));
        match decoded {
            Some((c, end)) => {
                out.push(c);
                rest = &after[end + 1..];
            }
            None => {
                out.push('&');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

fn entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some(' '),
        _ => {
            let code = name.strip_prefix('#')?;
            let value = match code.strip_prefix(|c: char| c == 'x' || c == 'X') {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => code.parse::<u32>().ok()?,
            };
            char::from_u32(value)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedResponse {
    pub items: Vec<Article>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub src: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A remote listing rendered on the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Repos,
    Articles,
    Photos,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Repos => "repos",
            Section::Articles => "articles",
            Section::Photos => "photos",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "repos" => Some(Section::Repos),
            "articles" => Some(Section::Articles),
            "photos" => Some(Section::Photos),
            _ => None,
        }
    }
}
