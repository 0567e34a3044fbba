#![cfg(test)]

use crate::types::{plain_text, Article, Language, Photo, Repo, Section, Theme};

#[test]
fn theme_as_str_and_parse() {
    assert_eq!(Theme::Light.as_str(), "light");
    assert_eq!(Theme::Dark.as_str(), "dark");
    assert_eq!(Theme::parse("DARK"), Some(Theme::Dark));
    assert_eq!(Theme::parse(" light "), Some(Theme::Light));
    assert_eq!(Theme::parse("sepia"), None);
}

#[test]
fn theme_classes_are_mutually_exclusive() {
    assert_eq!(Theme::Dark.body_class(), "dark-mode");
    assert_eq!(Theme::Light.body_class(), "light-mode");
    assert_eq!(Theme::Dark.navbar_class(), "navbar-dark");
    assert_eq!(Theme::Light.navbar_class(), "navbar-light");
    assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
}

#[test]
fn language_detection_from_browser() {
    assert_eq!(Language::detect("pt-BR").code(), "pt");
    assert_eq!(Language::detect("de-AT").code(), "de");
    assert_eq!(Language::detect("fr-FR").code(), "en");
    assert_eq!(Language::detect("").code(), "en");
}

#[test]
fn language_rejects_garbage_codes() {
    assert!(Language::new("").is_none());
    assert!(Language::new("en us").is_none());
    assert_eq!(Language::new("PT").map(|l| l.code().to_string()), Some("pt".to_string()));
}

#[test]
fn language_toggle_and_label() {
    let en = Language::english();
    let pt = en.toggled();
    assert_eq!(pt.code(), "pt");
    assert_eq!(pt.toggle_label(), "EN / PT");
    assert_eq!(en.toggle_label(), "PT / EN");
    // German is not part of the two-state toggle.
    assert_eq!(Language::detect("de").toggled().code(), "en");
}

#[test]
fn repo_deserializes_github_payload() {
    let raw = r#"{"id": 1, "name": "dotfiles", "description": null,
                  "html_url": "https://github.com/u/dotfiles", "fork": false}"#;
    let repo: Repo = serde_json::from_str(raw).expect("repo");
    assert_eq!(repo.name, "dotfiles");
    assert_eq!(repo.description_or_default(), "No description available.");
}

#[test]
fn article_excerpt_cuts_on_char_boundary() {
    let article = Article {
        title: "t".into(),
        description: "é".repeat(250),
        link: "l".into(),
    };
    let excerpt = article.excerpt();
    assert!(excerpt.ends_with("..."));
    assert_eq!(excerpt.chars().count(), 203);

    let short = Article {
        title: "t".into(),
        description: "short".into(),
        link: "l".into(),
    };
    assert_eq!(short.excerpt(), "short...");
}

#[test]
fn article_excerpt_drops_markup() {
    let article = Article {
        title: "t".into(),
        description: r#"<p>Intro to <a href="x">Rust</a></p><p>Part&nbsp;2 &amp; more</p>"#.into(),
        link: "l".into(),
    };
    assert_eq!(article.excerpt(), "Intro to Rust Part 2 & more...");
}

#[test]
fn article_excerpt_never_cuts_inside_a_tag() {
    let description = format!("{}<a href=\"https://example.com/long\">link</a>", "x".repeat(195));
    let article = Article {
        title: "t".into(),
        description,
        link: "l".into(),
    };
    let excerpt = article.excerpt();
    assert!(!excerpt.contains('<'));
    assert_eq!(excerpt, format!("{}link...", "x".repeat(195)));
}

#[test]
fn plain_text_decodes_entities() {
    assert_eq!(plain_text("a &lt;b&gt; &quot;c&quot; &#39;d&#39; &#x41;"), "a <b> \"c\" 'd' A");
    assert_eq!(plain_text("fish &chips; & more"), "fish &chips; & more");
    assert_eq!(plain_text("line<br/>break"), "line break");
    assert_eq!(plain_text("in<b>line</b>"), "inline");
}

#[test]
fn photo_description_is_optional() {
    let photo: Photo = serde_json::from_str(r#"{"src": "a.jpg"}"#).expect("photo");
    assert_eq!(photo.description, None);
}

#[test]
fn section_parse() {
    assert_eq!(Section::parse("Articles"), Some(Section::Articles));
    assert_eq!(Section::Photos.as_str(), "photos");
    assert_eq!(Section::parse("blog"), None);
}
