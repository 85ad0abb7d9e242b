//! Romanization of Chinese and Japanese titles.
//!
//! Chinese goes through the `pinyin` crate one ideograph at a time.
//! Japanese is first cut into words by a [`Segmenter`], then every kana
//! word is romanized (Hepburn) with `wana_kana`. Neither path can fail:
//! characters without a known reading are kept as they are.

use pinyin::ToPinyin;
use wana_kana::ConvertJapanese;

// ── Particle spellings ───────────────────────────────────────────────

/// Words kept lower-case in romanized titles, keyed by their plain
/// Hepburn spelling. The value is the spelling used in the title.
pub const PARTICLES: &[(&str, &str)] = &[
    ("obu", "obu"),
    ("he", "e"),
    ("ga", "ga"),
    ("no", "no"),
    ("wo", "o"),
    ("to", "to"),
    ("ha", "wa"),
];

/// Katakana digraphs for sounds outside the traditional syllabary, with
/// their Hepburn spelling. `wana_kana` reads the small vowel as a syllable
/// of its own (ファ → "fua"), so these are romanized here instead.
const EXTENDED_KATAKANA: &[(&str, &str)] = &[
    ("ファ", "fa"),
    ("フィ", "fi"),
    ("フェ", "fe"),
    ("フォ", "fo"),
    ("フュ", "fyu"),
    ("ティ", "ti"),
    ("ディ", "di"),
    ("トゥ", "tu"),
    ("ドゥ", "du"),
    ("テュ", "tyu"),
    ("デュ", "dyu"),
    ("ウィ", "wi"),
    ("ウェ", "we"),
    ("ウォ", "wo"),
    ("ヴァ", "va"),
    ("ヴィ", "vi"),
    ("ヴェ", "ve"),
    ("ヴォ", "vo"),
    ("ヴュ", "vyu"),
    ("シェ", "she"),
    ("ジェ", "je"),
    ("チェ", "che"),
    ("ツァ", "tsa"),
    ("ツィ", "tsi"),
    ("ツェ", "tse"),
    ("ツォ", "tso"),
    ("クァ", "kwa"),
    ("グァ", "gwa"),
    ("イェ", "ye"),
    ("ヴ", "vu"),
];

/// Single-kana particles split off the front of a hiragana run when it
/// follows a katakana or kanji word, e.g. キミ|の|いる.
const PARTICLE_KANA: &[char] = &['の', 'へ', 'は', 'が', 'を', 'と'];

fn particle(word: &str) -> Option<&'static str> {
    PARTICLES
        .iter()
        .find(|(plain, _)| *plain == word)
        .map(|(_, spelling)| *spelling)
}

// ── Case helpers ─────────────────────────────────────────────────────

/// Upper-case the first character, leave the rest alone.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Title-case every whitespace-delimited word: first character upper-case,
/// the remainder lower-case. Whitespace is copied through unchanged.
///
/// Characters without case (CJK, kana) are unaffected.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut word_start = true;
    for c in text.chars() {
        if c.is_whitespace() {
            word_start = true;
            out.push(c);
        } else if word_start {
            word_start = false;
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

// ── Chinese ──────────────────────────────────────────────────────────

/// Hanyu Pinyin for `text`, one capitalized syllable per ideograph.
///
/// With `tone` the syllables keep their diacritics ("Shí Kōng"),
/// otherwise they are plain ASCII ("Shi Kong"). Runs of characters
/// without a reading (Latin letters, digits, punctuation) are kept as one
/// token each. Both variants tokenize identically.
pub fn to_pinyin(text: &str, tone: bool) -> String {
    let mut tokens: Vec<String> = Vec::new();
    let mut passthrough = String::new();

    for c in text.chars() {
        if let Some(p) = c.to_pinyin() {
            flush(&mut passthrough, &mut tokens);
            let syllable = if tone { p.with_tone() } else { p.plain() };
            tokens.push(capitalize(syllable));
        } else if c.is_whitespace() {
            flush(&mut passthrough, &mut tokens);
        } else {
            passthrough.push(c);
        }
    }
    flush(&mut passthrough, &mut tokens);

    tokens.join(" ")
}

fn flush(run: &mut String, tokens: &mut Vec<String>) {
    if !run.is_empty() {
        tokens.push(std::mem::take(run));
    }
}

/// Convert Simplified Chinese to Traditional Chinese.
pub fn to_traditional(text: &str) -> String {
    zhconv::zhconv(text, zhconv::Variant::ZhHant)
}

// ── Japanese segmentation ────────────────────────────────────────────

/// One word of a segmented Japanese string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub surface: String,
    /// Kana reading, when the segmenter knows one. Kana surfaces are
    /// their own reading and may leave this empty.
    pub reading: Option<String>,
}

impl Segment {
    pub fn new(surface: impl Into<String>) -> Self {
        Self {
            surface: surface.into(),
            reading: None,
        }
    }

    pub fn with_reading(surface: impl Into<String>, reading: impl Into<String>) -> Self {
        Self {
            surface: surface.into(),
            reading: Some(reading.into()),
        }
    }

    fn kana(&self) -> Option<&str> {
        match &self.reading {
            Some(r) => Some(r.as_str()),
            None if is_kana(&self.surface) => Some(self.surface.as_str()),
            None => None,
        }
    }
}

/// Word boundary detection for Japanese text.
///
/// Implement this over a morphological dictionary to get kanji readings;
/// the built-in [`ScriptSegmenter`] only knows about kana.
pub trait Segmenter {
    fn segment(&self, text: &str) -> Vec<Segment>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Script {
    Hiragana,
    Katakana,
    Kanji,
    /// ー, takes the script of whatever precedes it
    Prolonged,
    Other,
}

impl Script {
    fn of(c: char) -> Self {
        match c {
            'ー' => Self::Prolonged,
            '\u{3041}'..='\u{309F}' => Self::Hiragana,
            '\u{30A0}'..='\u{30FF}' | '\u{31F0}'..='\u{31FF}' => Self::Katakana,
            '\u{3005}'
            | '\u{3400}'..='\u{4DBF}'
            | '\u{4E00}'..='\u{9FFF}'
            | '\u{F900}'..='\u{FAFF}'
            | '\u{20000}'..='\u{2A6DF}' => Self::Kanji,
            _ => Self::Other,
        }
    }
}

fn is_kana(text: &str) -> bool {
    !text.is_empty()
        && text.chars().all(|c| {
            matches!(
                Script::of(c),
                Script::Hiragana | Script::Katakana | Script::Prolonged
            )
        })
}

/// Splits on whitespace, the katakana middle dot and script changes, and
/// detaches a leading particle from a hiragana run that follows another
/// word.
///
/// Known weakness: okurigana and particles are hard to tell apart
/// without a dictionary, so e.g. のいる after a katakana word becomes
/// の + いる but a bare のいる stays one word.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScriptSegmenter;

impl Segmenter for ScriptSegmenter {
    fn segment(&self, text: &str) -> Vec<Segment> {
        let mut segments = Vec::new();

        for word in text.split(|c: char| c.is_whitespace() || c == '・') {
            let mut run = String::new();
            let mut run_script: Option<Script> = None;

            for c in word.chars() {
                let script = match Script::of(c) {
                    Script::Prolonged => run_script.unwrap_or(Script::Katakana),
                    s => s,
                };
                if run_script.is_some_and(|s| s != script) {
                    if !run.is_empty() {
                        segments.push(Segment::new(std::mem::take(&mut run)));
                    }
                    if script == Script::Hiragana && PARTICLE_KANA.contains(&c) {
                        segments.push(Segment::new(c.to_string()));
                        run_script = Some(script);
                        continue;
                    }
                }
                run_script = Some(script);
                run.push(c);
            }
            if !run.is_empty() {
                segments.push(Segment::new(run));
            }
        }

        segments
    }
}

// ── Japanese romanization ────────────────────────────────────────────

/// Modified Hepburn romanization of `text` using [`ScriptSegmenter`].
///
/// E.g. "テイルズ オブ ファンタジア" → "Teiruzu obu Fantajia".
pub fn to_romaji(text: &str) -> String {
    to_romaji_with(text, &ScriptSegmenter)
}

/// Same as [`to_romaji`] with a caller-provided segmenter.
pub fn to_romaji_with(text: &str, segmenter: &dyn Segmenter) -> String {
    let mut words: Vec<String> = Vec::new();

    for segment in segmenter.segment(text) {
        let romanized = match segment.kana() {
            Some(kana) => kana_to_romaji(kana),
            None => {
                log::debug!("no kana reading for {:?}, keeping it", segment.surface);
                segment.surface.clone()
            }
        };
        let romanized = romanized.trim();
        if romanized.is_empty() {
            continue;
        }
        let word = match particle(romanized) {
            Some(spelling) => spelling.to_string(),
            None => capitalize(romanized),
        };
        words.push(word);
    }

    words.join(" ")
}

/// Romanize one kana word: extended katakana from [`EXTENDED_KATAKANA`],
/// everything in between through `wana_kana`.
fn kana_to_romaji(kana: &str) -> String {
    let mut out = String::new();
    let mut pending = String::new();
    let mut rest = kana;

    while let Some(c) = rest.chars().next() {
        let Some((digraph, romaji)) = EXTENDED_KATAKANA
            .iter()
            .find(|(digraph, _)| rest.starts_with(*digraph))
        else {
            pending.push(c);
            rest = &rest[c.len_utf8()..];
            continue;
        };

        // A trailing sokuon belongs to this digraph: ッフィ → "ffi".
        let geminate = pending.ends_with(['ッ', 'っ']);
        if geminate {
            pending.pop();
        }
        if !pending.is_empty() {
            out.push_str(&pending.to_romaji());
            pending.clear();
        }
        if geminate {
            if romaji.starts_with("ch") {
                out.push('t');
            } else {
                out.extend(romaji.chars().next());
            }
        }
        out.push_str(romaji);
        rest = &rest[digraph.len()..];

        while let Some(after) = rest.strip_prefix('ー') {
            if let Some(vowel) = romaji.chars().last() {
                out.push(vowel);
            }
            rest = after;
        }
    }
    if !pending.is_empty() {
        out.push_str(&pending.to_romaji());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surfaces(text: &str) -> Vec<String> {
        ScriptSegmenter
            .segment(text)
            .into_iter()
            .map(|s| s.surface)
            .collect()
    }

    // ── title_case ───────────────────────────────────────────────────

    #[test]
    fn test_title_case_lowers_rest() {
        assert_eq!(title_case("DRAGON QUEST"), "Dragon Quest");
        assert_eq!(title_case("Tales of Phantasia"), "Tales Of Phantasia");
    }

    #[test]
    fn test_title_case_keeps_whitespace_and_cjk() {
        assert_eq!(title_case("kimi  no"), "Kimi  No");
        assert_eq!(title_case("勇者鬥惡龍"), "勇者鬥惡龍");
        assert_eq!(title_case("時空 abc"), "時空 Abc");
    }

    // ── to_pinyin ────────────────────────────────────────────────────

    #[test]
    fn test_pinyin_toneless() {
        assert_eq!(to_pinyin("時空幻境", false), "Shi Kong Huan Jing");
    }

    #[test]
    fn test_pinyin_with_tones() {
        assert_eq!(to_pinyin("時空幻境", true), "Shí Kōng Huàn Jìng");
    }

    #[test]
    fn test_pinyin_passthrough_runs() {
        assert_eq!(to_pinyin("勇者DQ3", false), "Yong Zhe DQ3");
        assert_eq!(to_pinyin("A B", false), "A B");
    }

    #[test]
    fn test_pinyin_tone_variants_same_length() {
        for text in ["時空幻境", "勇者鬥惡龍 III", "仙劍奇俠傳：三", ""] {
            let toned = to_pinyin(text, true);
            let plain = to_pinyin(text, false);
            assert_eq!(
                toned.split(' ').count(),
                plain.split(' ').count(),
                "{text}"
            );
        }
    }

    // ── segmentation ─────────────────────────────────────────────────

    #[test]
    fn test_segment_whitespace_and_dot() {
        assert_eq!(
            surfaces("テイルズ オブ ファンタジア"),
            vec!["テイルズ", "オブ", "ファンタジア"]
        );
        assert_eq!(surfaces("ドラゴン・クエスト"), vec!["ドラゴン", "クエスト"]);
    }

    #[test]
    fn test_segment_script_changes_and_particles() {
        assert_eq!(
            surfaces("キミのいる未来へ"),
            vec!["キミ", "の", "いる", "未来", "へ"]
        );
    }

    #[test]
    fn test_segment_prolonged_mark_stays_in_word() {
        assert_eq!(surfaces("スーパーマリオ"), vec!["スーパーマリオ"]);
    }

    #[test]
    fn test_segment_drops_empty_words() {
        assert_eq!(surfaces("  オブ   "), vec!["オブ"]);
        assert!(surfaces("").is_empty());
    }

    // ── to_romaji ────────────────────────────────────────────────────

    #[test]
    fn test_romaji_tales_of_phantasia() {
        assert_eq!(to_romaji("テイルズ オブ ファンタジア"), "Teiruzu obu Fantajia");
    }

    #[test]
    fn test_romaji_extended_katakana() {
        let cases = [
            ("ファンタジア", "Fantajia"),
            ("フィルム", "Firumu"),
            ("フォント", "Fonto"),
            ("ディスク", "Disuku"),
            ("ウィンド", "Windo"),
            ("ウェブ", "Webu"),
            ("ウォッカ", "Wokka"),
            ("ヴァンパイア", "Vanpaia"),
            ("ヴィラ", "Vira"),
            ("シェフ", "Shefu"),
            ("ジェット", "Jetto"),
            ("チェス", "Chesu"),
            ("バッファ", "Baffa"),
            ("ティー", "Tii"),
        ];
        for (kana, expected) in cases {
            assert_eq!(to_romaji(kana), expected, "{kana}");
        }
    }

    #[test]
    fn test_romaji_particle_spellings() {
        assert_eq!(to_romaji("キミ は"), "Kimi wa");
        assert_eq!(to_romaji("キミ を"), "Kimi o");
        assert_eq!(to_romaji("キミ へ"), "Kimi e");
    }

    #[test]
    fn test_romaji_kanji_passthrough() {
        assert_eq!(to_romaji("キミの未来"), "Kimi no 未来");
    }

    #[test]
    fn test_romaji_words_never_empty() {
        let out = to_romaji(" テイルズ　　オブ ");
        assert!(out.split(' ').all(|w| !w.is_empty()));
    }

    #[test]
    fn test_romaji_with_dictionary_segmenter() {
        struct Fixed;
        impl Segmenter for Fixed {
            fn segment(&self, _text: &str) -> Vec<Segment> {
                vec![
                    Segment::with_reading("未来", "みらい"),
                    Segment::new("へ"),
                ]
            }
        }
        assert_eq!(to_romaji_with("未来へ", &Fixed), "Mirai e");
    }
}
