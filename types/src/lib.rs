use serde::{Deserialize, Serialize};

// ── Names ────────────────────────────────────────────────────────────────

/// A title in one language, as written in an article document.
///
/// `translit` and `sortkey` are optional overrides; empty strings are
/// treated the same as missing ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameSpec {
    /// ISO 639-1 code; the article's Chinese title defaults to "zh".
    #[serde(default)]
    pub lang: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sortkey: Option<String>,
    /// Literal translation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lit: Option<String>,
}

// ── Release ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseStatus {
    #[default]
    Unspecified,
    Released,
    Future,
    Cancelled,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
    #[serde(default)]
    pub status: ReleaseStatus,
}

// ── Companies ────────────────────────────────────────────────────────────

/// Who published the game.
///
/// In JSON: `"same"` (the developer also published it), a string or a
/// list of strings, or absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PublisherSpec {
    #[default]
    Unknown,
    Same(SameMarker),
    One(String),
    Many(Vec<String>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SameMarker {
    Same,
}

// ── Citations ────────────────────────────────────────────────────────────

/// Page metadata already extracted by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitationSpec {
    pub url: String,
    /// `<ref name="...">`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub meta: PageMeta,
    /// Fixed access date (`YYYY-MM-DD`); today's date when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_date: Option<String>,
}

// ── Article document ─────────────────────────────────────────────────────

/// A whole video-game stub, as read from a JSON file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSpec {
    /// Chinese title, used verbatim as the main title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chinese: Option<NameSpec>,
    /// Original-language title, annotated with a footnote.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreign: Option<NameSpec>,
    #[serde(default)]
    pub release: ReleaseSpec,
    #[serde(default)]
    pub developer: Vec<String>,
    #[serde(default)]
    pub publisher: PublisherSpec,
    /// Genre keys from the built-in registry, e.g. "rpg".
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub references: Vec<CitationSpec>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publisher_same_marker() {
        let spec: ArticleSpec =
            serde_json::from_str(r#"{"developer": ["Square"], "publisher": "same"}"#).unwrap();
        assert_eq!(spec.publisher, PublisherSpec::Same(SameMarker::Same));
    }

    #[test]
    fn test_publisher_one_and_many() {
        let one: ArticleSpec = serde_json::from_str(r#"{"publisher": "Enix"}"#).unwrap();
        assert_eq!(one.publisher, PublisherSpec::One("Enix".into()));

        let many: ArticleSpec = serde_json::from_str(r#"{"publisher": ["Enix", "Nintendo"]}"#).unwrap();
        assert_eq!(
            many.publisher,
            PublisherSpec::Many(vec!["Enix".into(), "Nintendo".into()])
        );
    }

    #[test]
    fn test_defaults() {
        let spec: ArticleSpec = serde_json::from_str("{}").unwrap();
        assert_eq!(spec.publisher, PublisherSpec::Unknown);
        assert_eq!(spec.release.status, ReleaseStatus::Unspecified);
        assert!(spec.genres.is_empty());
    }

    #[test]
    fn test_release_status_lowercase() {
        let spec: ReleaseSpec = serde_json::from_str(r#"{"year": 1995, "status": "future"}"#).unwrap();
        assert_eq!(spec.year, Some(1995));
        assert_eq!(spec.status, ReleaseStatus::Future);
    }
}
