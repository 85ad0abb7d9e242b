//! Small wikitext builders: templates, links and Chinese punctuation joins.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

// ── Templates ────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
enum Param {
    Positional(String),
    Named(String, String),
}

/// A `{{name|...}}` template.
///
/// Positional parameters are numbered in insertion order. A positional
/// value containing a top-level `=` is written as `N=value` so the wiki
/// parser does not read it as a named parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    name: String,
    params: Vec<Param>,
}

impl Template {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
        }
    }

    pub fn arg(mut self, value: impl Into<String>) -> Self {
        self.params.push(Param::Positional(value.into()));
        self
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push(Param::Named(key.into(), value.into()));
        self
    }

    /// Add `key=value` only when `value` is present and non-empty.
    pub fn param_opt(self, key: &str, value: Option<&str>) -> Self {
        match value {
            Some(v) if !v.is_empty() => self.param(key, v),
            _ => self,
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{{{}", self.name)?;
        let mut index = 0;
        for param in &self.params {
            match param {
                Param::Positional(value) => {
                    index += 1;
                    if has_top_level_equals(value) {
                        write!(f, "|{index}={value}")?;
                    } else {
                        write!(f, "|{value}")?;
                    }
                }
                Param::Named(key, value) => write!(f, "|{key}={value}")?,
            }
        }
        f.write_str("}}")
    }
}

/// Whether `value` has an `=` outside nested `{{…}}` and `[[…]]`.
fn has_top_level_equals(value: &str) -> bool {
    let mut depth = 0usize;
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '{' | '[' if chars.peek() == Some(&c) => {
                chars.next();
                depth += 1;
            }
            '}' | ']' if chars.peek() == Some(&c) => {
                chars.next();
                depth = depth.saturating_sub(1);
            }
            '=' if depth == 0 => return true,
            _ => {}
        }
    }
    false
}

// ── Links and inline markup ──────────────────────────────────────────

/// `[[target]]` or `[[target|text]]`.
pub fn wikilink(target: &str, text: Option<&str>) -> String {
    match text {
        Some(text) => format!("[[{target}|{text}]]"),
        None => format!("[[{target}]]"),
    }
}

pub fn bold(text: &str) -> String {
    format!("'''{text}'''")
}

/// Chinese book-title marks: `《…》`.
pub fn book_title(text: &str) -> String {
    format!("《{text}》")
}

/// `<ref>body</ref>`, or `<ref name="...">` when named.
pub fn ref_tag(body: &str, name: Option<&str>) -> String {
    match name {
        Some(name) if !name.is_empty() => format!("<ref name=\"{name}\">{body}</ref>"),
        _ => format!("<ref>{body}</ref>"),
    }
}

// ── Chinese punctuation joins ────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Punct {
    /// 句號 。
    Period,
    /// 分號 ；
    Semicolon,
    /// 逗號 ，
    Comma,
    /// 頓號 、
    SemiComma,
}

impl Punct {
    pub fn as_char(&self) -> char {
        match self {
            Self::Period => '。',
            Self::Semicolon => '；',
            Self::Comma => '，',
            Self::SemiComma => '、',
        }
    }
}

impl FromStr for Punct {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "period" => Ok(Self::Period),
            "semicolon" => Ok(Self::Semicolon),
            "comma" => Ok(Self::Comma),
            "semi-comma" => Ok(Self::SemiComma),
            other => Err(Error::UnknownPunct(other.to_string())),
        }
    }
}

/// Join the non-empty `items` with `punct`, wrapped in `start` and `end`.
///
/// `start` and `end` are emitted even when nothing is left to join.
pub fn punct_join<I, S>(items: I, punct: Punct, start: &str, end: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::from(start);
    let mut first = true;
    for item in items {
        let item = item.as_ref();
        if item.is_empty() {
            continue;
        }
        if !first {
            out.push(punct.as_char());
        }
        first = false;
        out.push_str(item);
    }
    out.push_str(end);
    out
}

/// Join with the enumeration comma (頓號), e.g. "天空、海洋、大地".
pub fn semi_comma_join<I, S>(items: I, start: &str, end: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    punct_join(items, Punct::SemiComma, start, end)
}

/// Join with the full-width comma (逗號).
pub fn comma_join<I, S>(items: I, start: &str, end: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    punct_join(items, Punct::Comma, start, end)
}
