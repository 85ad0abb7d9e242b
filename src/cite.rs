//! `{{Cite web}}` templates from a URL and already-extracted page metadata.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use time::format_description::well_known::Rfc2822;
use time::macros::format_description;
use time::{Date, OffsetDateTime};
use vg_stub_types::{CitationSpec, PageMeta};

use crate::wikitext::{Template, ref_tag};

static HOST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[A-Za-z][A-Za-z0-9+.\-]*:)?//(?:[^/?#@]*@)?([^/?#:]+)")
        .expect("host regex compiles")
});

const ISO_DATE: &[time::format_description::BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

/// Host part of `url` without a leading "www.".
///
/// E.g. "https://www.example.com/a" → "example.com".
pub fn domain(url: &str) -> String {
    let host = match HOST.captures(url).and_then(|c| c.get(1)) {
        Some(m) => m.as_str(),
        None => url.split(['/', '?', '#']).next().unwrap_or(url),
    };
    host.strip_prefix("www.").unwrap_or(host).to_string()
}

/// `YYYY-MM-DD` from a date string that starts with an ISO date
/// ("2024-03-05T10:00:00Z" → "2024-03-05") or is an RFC 2822 timestamp
/// ("Tue, 05 Mar 2024 10:00:00 +0000"). Anything else is dropped.
pub fn normalize_date(raw: &str) -> Option<String> {
    let raw = raw.trim();
    let iso = raw.get(..10).and_then(|head| Date::parse(head, ISO_DATE).ok());
    let date = match iso {
        Some(date) => date,
        None => OffsetDateTime::parse(raw, &Rfc2822).ok()?.date(),
    };
    date.format(ISO_DATE).ok()
}

/// Today's UTC date as `YYYY-MM-DD`.
pub fn today() -> String {
    OffsetDateTime::now_utc()
        .date()
        .format(ISO_DATE)
        .unwrap_or_else(|e| {
            log::warn!("cannot format access date: {e}");
            String::new()
        })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CiteWeb {
    pub title: String,
    pub url: String,
    pub website: String,
    pub author: Option<String>,
    pub date: Option<String>,
    pub language: Option<String>,
    pub access_date: String,
}

impl CiteWeb {
    /// Citation for a page whose metadata could not be read: the URL
    /// doubles as the title and the domain as the website.
    pub fn fallback(url: &str) -> Self {
        Self::from_meta(url, &PageMeta::default())
    }

    pub fn from_meta(url: &str, meta: &PageMeta) -> Self {
        let filled = |v: &Option<String>| {
            v.as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        let date = match filled(&meta.date) {
            Some(raw) => {
                let date = normalize_date(&raw);
                if date.is_none() {
                    log::warn!("dropping unrecognised date {raw:?} for {url}");
                }
                date
            }
            None => None,
        };

        Self {
            title: filled(&meta.title).unwrap_or_else(|| url.to_string()),
            url: url.to_string(),
            website: filled(&meta.website).unwrap_or_else(|| domain(url)),
            author: filled(&meta.author),
            date,
            language: filled(&meta.language),
            access_date: today(),
        }
    }

    pub fn from_spec(spec: &CitationSpec) -> Self {
        let cite = Self::from_meta(&spec.url, &spec.meta);
        match spec.access_date.as_deref() {
            Some(d) if !d.is_empty() => cite.with_access_date(d),
            _ => cite,
        }
    }

    pub fn with_access_date(mut self, date: &str) -> Self {
        self.access_date = date.to_string();
        self
    }

    pub fn template(&self) -> Template {
        Template::new("Cite web")
            .param_opt("title", Some(self.title.as_str()))
            .param_opt("url", Some(self.url.as_str()))
            .param_opt("website", Some(self.website.as_str()))
            .param_opt("author", self.author.as_deref())
            .param_opt("date", self.date.as_deref())
            .param_opt("language", self.language.as_deref())
            .param_opt("access-date", Some(self.access_date.as_str()))
    }

    /// The citation inside `<ref>` tags.
    pub fn ref_tag(&self, name: Option<&str>) -> String {
        ref_tag(&self.to_string(), name)
    }
}

impl fmt::Display for CiteWeb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.template())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain() {
        assert_eq!(domain("https://www.example.com/a/b?c"), "example.com");
        assert_eq!(domain("http://user@news.example.jp:8080/x"), "news.example.jp");
        assert_eq!(domain("example.org/path"), "example.org");
    }

    #[test]
    fn test_normalize_date() {
        assert_eq!(normalize_date("2024-03-05T10:00:00Z").as_deref(), Some("2024-03-05"));
        assert_eq!(normalize_date(" 1995-03-11 ").as_deref(), Some("1995-03-11"));
        assert_eq!(
            normalize_date("Tue, 05 Mar 2024 10:00:00 +0000").as_deref(),
            Some("2024-03-05")
        );
        assert_eq!(
            normalize_date("Fri, 15 Dec 1995 00:00:00 +0900").as_deref(),
            Some("1995-12-15")
        );
        assert_eq!(normalize_date("March 5, 2024"), None);
        assert_eq!(normalize_date("2024"), None);
    }

    #[test]
    fn test_today_shape() {
        let d = today();
        assert_eq!(d.len(), 10);
        assert!(normalize_date(&d).is_some());
    }

    #[test]
    fn test_fallback_citation() {
        let cite = CiteWeb::fallback("https://www.example.com/game").with_access_date("2025-01-02");
        assert_eq!(
            cite.to_string(),
            "{{Cite web|title=https://www.example.com/game|url=https://www.example.com/game\
             |website=example.com|access-date=2025-01-02}}"
        );
    }

    #[test]
    fn test_full_citation_ref() {
        let meta = PageMeta {
            title: Some("Tales of Phantasia".into()),
            website: Some("Namco".into()),
            author: Some("  ".into()),
            date: Some("1995-12-15T00:00:00+09:00".into()),
            language: Some("ja".into()),
        };
        let cite = CiteWeb::from_meta("https://example.com/top", &meta).with_access_date("2025-01-02");
        assert_eq!(
            cite.ref_tag(Some("top")),
            "<ref name=\"top\">{{Cite web|title=Tales of Phantasia|url=https://example.com/top\
             |website=Namco|date=1995-12-15|language=ja|access-date=2025-01-02}}</ref>"
        );
    }

    #[test]
    fn test_from_spec_fixed_access_date() {
        let spec = CitationSpec {
            url: "https://example.com".into(),
            access_date: Some("2020-02-02".into()),
            ..CitationSpec::default()
        };
        assert_eq!(CiteWeb::from_spec(&spec).access_date, "2020-02-02");
    }
}
