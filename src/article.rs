//! Assembly of a complete video-game stub.
//!
//! The lead sentence names the game, its companies and genres; the
//! second sentence says when it came out. Genre and year terms are
//! linked on first use only, then reused for categories and stub tags.

use vg_stub_types::{
    ArticleSpec, CitationSpec, NameSpec, PublisherSpec, ReleaseSpec, ReleaseStatus,
};

use crate::cite::CiteWeb;
use crate::error::Result;
use crate::name::{Annotate, Name};
use crate::term::Term;
use crate::terms;
use crate::translit::title_case;
use crate::wikitext::{bold, book_title, comma_join, semi_comma_join};

const PAGENAME: &str = "{{subst:PAGENAME}}";
const FALLBACK_STUB: &str = "{{videogame-stub}}";

// ── Title and foreign annotation ─────────────────────────────────────

/// The bolded title in book marks, followed by a footnote for the
/// foreign title when it adds anything.
///
/// The main title is the Chinese one, else the foreign transliteration,
/// else `{{subst:PAGENAME}}`. Comparisons are case-insensitive in the
/// title-case sense: a foreign name equal to the main title gets no
/// footnote, and a transliteration equal to it is left out of the
/// footnote.
pub fn build_names(chinese: Option<&str>, foreign: Option<&Name>) -> String {
    let main_name = match (chinese, foreign) {
        (Some(zh), _) if !zh.is_empty() => zh,
        (_, Some(f)) => f.translit(),
        _ => PAGENAME,
    };

    let main_cmp = title_case(main_name);
    let efn = match foreign {
        None => None,
        Some(f) if title_case(f.name()) == main_cmp => None,
        Some(f) if title_case(f.translit()) == main_cmp => Some(f.efn(Annotate::without_translit())),
        Some(f) => Some(f.efn(Annotate::default())),
    };

    let title = book_title(&bold(main_name));
    match efn {
        Some(efn) => format!("{title}（{efn}）"),
        None => title,
    }
}

// ── Release ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Release {
    pub year: Option<u16>,
    pub status: ReleaseStatus,
}

impl Release {
    pub fn from_spec(spec: &ReleaseSpec) -> Self {
        Self {
            year: spec.year,
            status: spec.status,
        }
    }

    /// Short description of the release, e.g. "1983年", "尚未發行".
    pub fn prose(&self) -> Option<String> {
        match (self.status, self.year) {
            (ReleaseStatus::Unspecified, None) => None,
            (ReleaseStatus::Unspecified | ReleaseStatus::Released, Some(y)) => Some(format!("{y}年")),
            (ReleaseStatus::Released, None) => Some("已面世".to_string()),
            (ReleaseStatus::Future, Some(y)) => Some(format!("預定於{y}年")),
            (ReleaseStatus::Future, None) => Some("尚未發行".to_string()),
            (ReleaseStatus::Cancelled, _) => Some("取消發行".to_string()),
        }
    }

    /// A full sentence about the release. `year_term` supplies the link
    /// for a known release year.
    fn sentence(&self, year_term: Option<&mut Term>) -> Option<String> {
        let sentence = match (self.status, self.year, year_term) {
            (ReleaseStatus::Unspecified | ReleaseStatus::Released, Some(_), Some(term)) => {
                format!("本作於{}發行。", term.text(false, true))
            }
            (ReleaseStatus::Future, Some(_), _) => format!("本作{}發行。", self.prose()?),
            (ReleaseStatus::Cancelled, _, _) => "本作已取消發行。".to_string(),
            _ => format!("本作{}。", self.prose()?),
        };
        Some(sentence)
    }
}

// ── Companies ────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Publisher {
    Unknown,
    /// The developer published the game itself.
    Same,
    Listed(Vec<String>),
}

impl Publisher {
    pub fn from_spec(spec: &PublisherSpec) -> Self {
        match spec {
            PublisherSpec::Unknown => Self::Unknown,
            PublisherSpec::Same(_) => Self::Same,
            PublisherSpec::One(p) => Self::Listed(vec![p.clone()]),
            PublisherSpec::Many(ps) => Self::Listed(ps.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Companies {
    pub developer: Vec<String>,
    pub publisher: Publisher,
}

impl Companies {
    /// "由A、B開發及發行" or "由A開發，C發行"; `None` if no company is
    /// known.
    pub fn prose(&self) -> Option<String> {
        let developer: Vec<&str> = nonblank(&self.developer);

        if self.publisher == Publisher::Same && !developer.is_empty() {
            return Some(semi_comma_join(&developer, "由", "開發及發行"));
        }

        let developer_prose = (!developer.is_empty()).then(|| semi_comma_join(&developer, "", "開發"));
        let publisher_prose = match &self.publisher {
            Publisher::Listed(ps) if !nonblank(ps).is_empty() => {
                Some(semi_comma_join(nonblank(ps), "", "發行"))
            }
            _ => None,
        };

        if developer_prose.is_none() && publisher_prose.is_none() {
            return None;
        }
        Some(comma_join(
            developer_prose.into_iter().chain(publisher_prose),
            "由",
            "",
        ))
    }
}

/// A name with a blank title counts as no name at all.
fn titled(spec: &Option<NameSpec>) -> Option<&NameSpec> {
    spec.as_ref().filter(|n| !n.name.trim().is_empty())
}

fn nonblank(items: &[String]) -> Vec<&str> {
    items
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect()
}

// ── Article ──────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct Article {
    chinese: Option<Name>,
    foreign: Option<Name>,
    release: Release,
    companies: Companies,
    genres: Vec<Term>,
    year: Option<Term>,
    references: Vec<CitationSpec>,
}

impl Article {
    pub fn from_spec(spec: &ArticleSpec) -> Result<Self> {
        let chinese = titled(&spec.chinese)
            .map(|zh| {
                if zh.lang.is_empty() {
                    let mut zh = zh.clone();
                    zh.lang = "zh".to_string();
                    Name::from_spec(&zh)
                } else {
                    Name::from_spec(zh)
                }
            })
            .transpose()?;
        let foreign = titled(&spec.foreign).map(Name::from_spec).transpose()?;

        // Repeated keys collapse to their first occurrence.
        let mut keys: Vec<&str> = Vec::new();
        for key in &spec.genres {
            if keys.contains(&key.as_str()) {
                log::debug!("ignoring repeated genre {key:?}");
            } else {
                keys.push(key);
            }
        }
        let genres = keys
            .into_iter()
            .map(terms::genre)
            .collect::<Result<Vec<_>>>()?;
        let release = Release::from_spec(&spec.release);

        Ok(Self {
            chinese,
            foreign,
            year: terms::year(release.year, release.status),
            release,
            companies: Companies {
                developer: spec.developer.clone(),
                publisher: Publisher::from_spec(&spec.publisher),
            },
            genres,
            references: spec.references.clone(),
        })
    }

    /// Sort key for categories: the Chinese title's, else the foreign
    /// title's.
    pub fn sortkey(&self) -> Option<&str> {
        self.chinese
            .as_ref()
            .or(self.foreign.as_ref())
            .map(Name::sortkey)
    }

    /// The complete wikitext. Consumes the article: link state belongs to
    /// one rendering.
    pub fn render(mut self) -> String {
        let mut lead = build_names(
            self.chinese.as_ref().map(Name::name),
            self.foreign.as_ref(),
        );
        lead.push_str("是一款");
        if let Some(companies) = self.companies.prose() {
            lead.push_str(&companies);
            lead.push('的');
        }
        lead.push_str(&self.genre_text());
        lead.push('。');
        for reference in &self.references {
            let cite = CiteWeb::from_spec(reference);
            lead.push_str(&cite.ref_tag(reference.name.as_deref()));
        }
        if let Some(sentence) = self.release.sentence(self.year.as_mut()) {
            lead.push_str(&sentence);
        }

        let has_notes = lead.contains("{{efn");
        let mut sections = vec![lead];
        if has_notes {
            sections.push("== 注釋 ==\n{{notelist}}".to_string());
        }
        if !self.references.is_empty() {
            sections.push("== 參考資料 ==\n{{reflist}}".to_string());
        }

        let mut stubs: Vec<String> = Vec::new();
        for tag in self.genres.iter().filter_map(Term::stub_tag) {
            if !stubs.contains(&tag) {
                stubs.push(tag);
            }
        }
        if stubs.is_empty() {
            stubs.push(FALLBACK_STUB.to_string());
        }
        sections.push(stubs.join("\n"));

        let sortkey = self.sortkey();
        let categories: Vec<String> = self
            .year
            .iter()
            .chain(&self.genres)
            .filter_map(|t| t.cat_link(sortkey))
            .collect();
        if !categories.is_empty() {
            sections.push(categories.join("\n"));
        }

        log::debug!(
            "rendered article with {} genre(s), {} reference(s)",
            self.genres.len(),
            self.references.len()
        );
        let mut out = sections.join("\n\n");
        out.push('\n');
        out
    }

    /// Genres joined with 、; all but the last show only the modifier.
    fn genre_text(&mut self) -> String {
        if self.genres.is_empty() {
            return "電子遊戲".to_string();
        }
        let last = self.genres.len() - 1;
        let parts: Vec<String> = self
            .genres
            .iter_mut()
            .enumerate()
            .map(|(i, term)| term.text(i == last, true))
            .collect();
        semi_comma_join(parts, "", "")
    }
}
