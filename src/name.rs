//! Game titles in one language, with transliteration and sort key.

use vg_stub_types::NameSpec;

use crate::error::{Error, Result};
use crate::translit::{title_case, to_pinyin, to_romaji};
use crate::wikitext::Template;

/// Languages whose work titles are set in italics.
pub const ITALIC_LANGS: &[&str] = &["en"];

/// What to include when rendering a `{{langx}}` annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Annotate {
    pub translit: bool,
    pub lit: bool,
    pub italic: bool,
}

impl Default for Annotate {
    fn default() -> Self {
        Self {
            translit: true,
            lit: true,
            italic: true,
        }
    }
}

impl Annotate {
    pub fn without_translit() -> Self {
        Self {
            translit: false,
            ..Self::default()
        }
    }
}

/// A title in a specific language.
///
/// `translit` and `sortkey` are fixed at construction, either from the
/// caller or derived from `lang` and `name`:
///
/// | lang  | translit            | sortkey                 |
/// |-------|---------------------|-------------------------|
/// | zh    | toned Pinyin        | toneless Pinyin         |
/// | ja    | Hepburn romaji      | title-cased romaji      |
/// | other | the name itself     | title-cased translit    |
///
/// A blank name is rejected. When a derivation comes out empty (a title
/// made only of separators), the trimmed native text is used instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name {
    lang: String,
    name: String,
    translit: String,
    sortkey: String,
    lit: Option<String>,
}

impl Name {
    pub fn new(lang: &str, name: &str) -> Result<Self> {
        Self::from_spec(&NameSpec {
            lang: lang.to_string(),
            name: name.to_string(),
            ..NameSpec::default()
        })
    }

    pub fn from_spec(spec: &NameSpec) -> Result<Self> {
        let lang = spec.lang.as_str();
        let name = spec.name.as_str();
        if name.trim().is_empty() {
            return Err(Error::EmptyName(spec.lang.clone()));
        }
        let or_native = |derived: String| {
            if derived.trim().is_empty() {
                name.trim().to_string()
            } else {
                derived
            }
        };

        let translit = match non_empty(&spec.translit) {
            Some(t) => t.to_string(),
            None => or_native(match lang {
                "zh" => to_pinyin(name, true),
                "ja" => to_romaji(name),
                _ => name.to_string(),
            }),
        };

        let sortkey = match non_empty(&spec.sortkey) {
            Some(s) => s.to_string(),
            None => or_native(match lang {
                "zh" => to_pinyin(name, false),
                "ja" => title_case(&to_romaji(name)),
                _ => title_case(&translit),
            }),
        };

        log::debug!("name {name:?} ({lang}): translit {translit:?}, sortkey {sortkey:?}");

        Ok(Self {
            lang: spec.lang.clone(),
            name: spec.name.clone(),
            translit,
            sortkey,
            lit: non_empty(&spec.lit).map(str::to_string),
        })
    }

    pub fn lang(&self) -> &str {
        &self.lang
    }

    /// The title in its native script.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn translit(&self) -> &str {
        &self.translit
    }

    pub fn sortkey(&self) -> &str {
        &self.sortkey
    }

    /// Literal translation.
    pub fn lit(&self) -> Option<&str> {
        self.lit.as_deref()
    }

    pub fn italic(&self) -> bool {
        ITALIC_LANGS.contains(&self.lang.as_str())
    }

    /// The `{{langx}}` annotation for this name.
    ///
    /// The transliteration only appears when it differs from the name.
    pub fn langx(&self, opts: Annotate) -> String {
        let mut tl = Template::new("langx").arg(&self.lang).arg(&self.name);
        if opts.translit && self.translit != self.name {
            tl = tl.param("translit", &self.translit);
        }
        if opts.lit {
            tl = tl.param_opt("lit", self.lit());
        }
        if opts.italic && self.italic() {
            tl = tl.param("italic", "yes");
        }
        tl.to_string()
    }

    /// [`Name::langx`] wrapped in an `{{efn}}` footnote.
    ///
    /// Rendered for every language, Chinese included.
    pub fn efn(&self, opts: Annotate) -> String {
        Template::new("efn").arg(self.langx(opts)).to_string()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
