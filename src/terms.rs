//! Built-in genre and year terms, named after their Chinese Wikipedia
//! pages. Every lookup returns a fresh [`Term`], so each document keeps
//! its own link state.

use vg_stub_types::ReleaseStatus;

use crate::error::{Error, Result};
use crate::term::Term;

/// One row of the genre table.
pub struct GenreEntry {
    pub key: &'static str,
    /// Genre without the 遊戲 head
    pub genre: &'static str,
    pub article: &'static str,
    pub cat: &'static str,
    pub stub: Option<&'static str>,
}

pub const GENRES: &[GenreEntry] = &[
    GenreEntry {
        key: "rpg",
        genre: "角色扮演",
        article: "電子角色扮演遊戲",
        cat: "電子角色扮演遊戲",
        stub: Some("rpg-videogame-stub"),
    },
    GenreEntry {
        key: "action",
        genre: "動作",
        article: "動作遊戲",
        cat: "動作遊戲",
        stub: Some("action-videogame-stub"),
    },
    GenreEntry {
        key: "adventure",
        genre: "冒險",
        article: "冒險遊戲",
        cat: "冒險遊戲",
        stub: Some("adventure-videogame-stub"),
    },
    GenreEntry {
        key: "strategy",
        genre: "策略",
        article: "策略遊戲",
        cat: "策略遊戲",
        stub: Some("strategy-videogame-stub"),
    },
    GenreEntry {
        key: "puzzle",
        genre: "益智",
        article: "益智遊戲",
        cat: "益智遊戲",
        stub: Some("puzzle-videogame-stub"),
    },
    GenreEntry {
        key: "shooter",
        genre: "射擊",
        article: "射擊遊戲",
        cat: "射擊遊戲",
        stub: Some("shooter-videogame-stub"),
    },
    GenreEntry {
        key: "fighting",
        genre: "格鬥",
        article: "格鬥遊戲",
        cat: "格鬥遊戲",
        stub: Some("fighting-videogame-stub"),
    },
    GenreEntry {
        key: "racing",
        genre: "競速",
        article: "競速遊戲",
        cat: "競速遊戲",
        stub: Some("racing-videogame-stub"),
    },
    GenreEntry {
        key: "sports",
        genre: "體育",
        article: "體育遊戲",
        cat: "體育遊戲",
        stub: Some("sports-videogame-stub"),
    },
    GenreEntry {
        key: "platform",
        genre: "平台",
        article: "平台遊戲",
        cat: "平台遊戲",
        stub: Some("platform-videogame-stub"),
    },
    GenreEntry {
        key: "simulation",
        genre: "模擬",
        article: "模擬遊戲",
        cat: "模擬遊戲",
        stub: Some("sim-videogame-stub"),
    },
    GenreEntry {
        key: "rhythm",
        genre: "音樂",
        article: "音樂遊戲",
        cat: "音樂遊戲",
        stub: None,
    },
];

/// The genre term registered under `key`.
pub fn genre(key: &str) -> Result<Term> {
    let entry = GENRES
        .iter()
        .find(|g| g.key == key)
        .ok_or_else(|| Error::UnknownGenre(key.to_string()))?;

    let term = Term::genre(entry.genre)
        .article(entry.article)
        .category(entry.cat);
    Ok(match entry.stub {
        Some(stub) => term.stub(stub),
        None => term,
    })
}

/// The year term for a release, if the release says anything about time.
///
/// Released (or unspecified) games with a year get "NNNN年"; unreleased
/// and cancelled games get status terms without a link target.
pub fn year(year: Option<u16>, status: ReleaseStatus) -> Option<Term> {
    match (status, year) {
        (ReleaseStatus::Cancelled, _) => {
            Some(Term::year("製作中止的").category("製作中止的電子遊戲"))
        }
        (ReleaseStatus::Future, _) => Some(Term::year("尚未發行的").category("未来电子游戏")),
        (ReleaseStatus::Released | ReleaseStatus::Unspecified, Some(y)) => Some(
            Term::year(&format!("{y}年"))
                .article(&format!("{y}年電子遊戲界"))
                .category(&format!("{y}年电子游戏")),
        ),
        (ReleaseStatus::Released | ReleaseStatus::Unspecified, None) => None,
    }
}
