//! Wikitext fragments for Chinese Wikipedia video-game stubs: titles with
//! romanized annotations, genre and year links that are only linked once,
//! citations, categories and stub tags.

pub mod article;
pub mod cite;
pub mod error;
pub mod name;
pub mod term;
pub mod terms;
pub mod translit;
pub mod wikitext;

pub use error::{Error, Result};
