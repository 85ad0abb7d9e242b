//! Linkable terms (genres, years) that avoid overlinking.
//!
//! A term is linked at most once per document: the first `text` call that
//! asks for a link and has a target gets `[[article|name]]`, every later
//! call gets plain text.

use std::fmt;

use crate::translit::to_traditional;
use crate::wikitext::wikilink;

/// Head noun shared by genre and year terms: 遊戲 ("game").
pub const GAME_HEAD: &str = "遊戲";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LinkState {
    #[default]
    Unlinked,
    /// Terminal: a link has been emitted.
    Linked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermKind {
    Plain,
    /// e.g. 角色扮演 + 遊戲
    Genre,
    /// e.g. 1983年 + 遊戲, 尚未發行的 + 遊戲
    Year,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    modifier: String,
    head: String,
    kind: TermKind,
    article: Option<String>,
    cat: Option<String>,
    stub: Option<String>,
    state: LinkState,
}

impl Term {
    pub fn new(modifier: &str, head: &str) -> Self {
        Self {
            modifier: modifier.to_string(),
            head: head.to_string(),
            kind: TermKind::Plain,
            article: None,
            cat: None,
            stub: None,
            state: LinkState::Unlinked,
        }
    }

    /// A genre term; `genre` may be Simplified or Traditional Chinese.
    pub fn genre(genre: &str) -> Self {
        Self {
            kind: TermKind::Genre,
            ..Self::new(&to_traditional(genre), GAME_HEAD)
        }
    }

    /// A year term; `year` carries its own suffix ("1983年", "1980年代")
    /// or is a status phrase such as "尚未發行的".
    pub fn year(year: &str) -> Self {
        Self {
            kind: TermKind::Year,
            ..Self::new(&to_traditional(year), GAME_HEAD)
        }
    }

    /// Link target article.
    pub fn article(mut self, article: &str) -> Self {
        self.article = Some(article.to_string());
        self
    }

    pub fn category(mut self, cat: &str) -> Self {
        self.cat = Some(cat.to_string());
        self
    }

    /// Stub template name, e.g. "rpg-videogame-stub".
    pub fn stub(mut self, stub: &str) -> Self {
        self.stub = Some(stub.to_string());
        self
    }

    pub fn modifier(&self) -> &str {
        &self.modifier
    }

    pub fn kind(&self) -> TermKind {
        self.kind
    }

    pub fn state(&self) -> LinkState {
        self.state
    }

    pub fn is_linked(&self) -> bool {
        self.state == LinkState::Linked
    }

    /// Modifier and head, concatenated without a separator.
    pub fn name(&self) -> String {
        format!("{}{}", self.modifier, self.head)
    }

    /// The full name (`full`) or just the modifier, linked on the first
    /// call that asks for it when an article is set.
    pub fn text(&mut self, full: bool, link: bool) -> String {
        let display = if full {
            self.name()
        } else {
            self.modifier.clone()
        };
        match (&self.article, self.state) {
            (Some(article), LinkState::Unlinked) if link => {
                self.state = LinkState::Linked;
                wikilink(article, Some(&display))
            }
            _ => display,
        }
    }

    /// `[[Category:cat]]` or `[[Category:cat|sort]]`; `None` without a
    /// category.
    pub fn cat_link(&self, sort: Option<&str>) -> Option<String> {
        let cat = self.cat.as_ref()?;
        Some(wikilink(&format!("Category:{cat}"), sort))
    }

    /// `{{stub}}`; `None` without a stub template.
    pub fn stub_tag(&self) -> Option<String> {
        self.stub.as_ref().map(|stub| format!("{{{{{stub}}}}}"))
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.modifier, self.head)
    }
}
