use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;
use vg_stub::article::Article;
use vg_stub::cite::CiteWeb;
use vg_stub::name::{Annotate, Name};
use vg_stub::terms::{self, GENRES};
use vg_stub::wikitext::{Punct, punct_join};
use vg_stub::{Error, Result};
use vg_stub_types::{ArticleSpec, NameSpec, PageMeta};
use walkdir::WalkDir;

const OUTPUT_DIR: &str = "output";

#[derive(Parser)]
#[command(
    name = "vg_stub",
    version,
    about = "Wikitext generator for Chinese Wikipedia video-game stubs"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transliteration, sort key and {{langx}}/{{efn}} for one title
    Name {
        /// ISO 639-1 code, e.g. "zh", "ja", "en"
        lang: String,
        /// Title in its native script
        text: String,
        #[arg(long)]
        translit: Option<String>,
        #[arg(long)]
        sortkey: Option<String>,
        /// Literal translation
        #[arg(long)]
        lit: Option<String>,
        /// Leave the transliteration out of {{langx}}
        #[arg(long)]
        no_translit: bool,
        #[arg(long)]
        no_lit: bool,
        #[arg(long)]
        no_italic: bool,
    },
    /// Show a built-in genre term, or list them all
    Genre { key: Option<String> },
    /// A <ref>{{Cite web}}</ref> for a URL and known page metadata
    Cite {
        url: String,
        /// <ref name="...">
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        website: Option<String>,
        #[arg(long)]
        author: Option<String>,
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        language: Option<String>,
        /// YYYY-MM-DD, defaults to today (UTC)
        #[arg(long)]
        access_date: Option<String>,
    },
    /// Join items with Chinese punctuation
    Join {
        /// period, semicolon, comma or semi-comma
        #[arg(long, default_value = "semi-comma")]
        punct: String,
        #[arg(long, default_value = "")]
        start: String,
        #[arg(long, default_value = "")]
        end: String,
        items: Vec<String>,
    },
    /// Render article JSON files into wikitext
    Build {
        /// An article JSON file, or a directory of them
        input: PathBuf,
        /// Write <name>.wiki files here instead of printing (directories
        /// always write, to "output" by default)
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Name {
            lang,
            text,
            translit,
            sortkey,
            lit,
            no_translit,
            no_lit,
            no_italic,
        } => {
            let spec = NameSpec {
                lang,
                name: text,
                translit,
                sortkey,
                lit,
            };
            let opts = Annotate {
                translit: !no_translit,
                lit: !no_lit,
                italic: !no_italic,
            };
            run_name(&spec, opts)
        }
        Command::Genre { key } => run_genre(key.as_deref()),
        Command::Cite {
            url,
            name,
            title,
            website,
            author,
            date,
            language,
            access_date,
        } => {
            let meta = PageMeta {
                title,
                website,
                author,
                date,
                language,
            };
            run_cite(&url, &meta, name.as_deref(), access_date.as_deref());
            Ok(())
        }
        Command::Join {
            punct,
            start,
            end,
            items,
        } => run_join(&punct, &start, &end, &items),
        Command::Build { input, out_dir } => run_build(&input, out_dir.as_deref()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn print_json<T: Serialize>(data: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(data).map_err(Error::Output)?;
    println!("{json}");
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════
//  NAME / GENRE / CITE / JOIN: single fragments
// ═══════════════════════════════════════════════════════════════════════

#[derive(Serialize)]
struct NameReport<'a> {
    lang: &'a str,
    name: &'a str,
    translit: &'a str,
    sortkey: &'a str,
    italic: bool,
    langx: String,
    efn: String,
}

fn run_name(spec: &NameSpec, opts: Annotate) -> Result<()> {
    let name = Name::from_spec(spec)?;
    print_json(&NameReport {
        lang: name.lang(),
        name: name.name(),
        translit: name.translit(),
        sortkey: name.sortkey(),
        italic: name.italic(),
        langx: name.langx(opts),
        efn: name.efn(opts),
    })
}

#[derive(Serialize)]
struct GenreReport {
    key: String,
    name: String,
    link: String,
    category: Option<String>,
    stub: Option<String>,
}

fn genre_report(key: &str) -> Result<GenreReport> {
    let mut term = terms::genre(key)?;
    Ok(GenreReport {
        key: key.to_string(),
        name: term.name(),
        link: term.text(true, true),
        category: term.cat_link(None),
        stub: term.stub_tag(),
    })
}

fn run_genre(key: Option<&str>) -> Result<()> {
    match key {
        Some(key) => print_json(&genre_report(key)?),
        None => {
            let all = GENRES
                .iter()
                .map(|g| genre_report(g.key))
                .collect::<Result<Vec<_>>>()?;
            print_json(&all)
        }
    }
}

fn run_cite(url: &str, meta: &PageMeta, name: Option<&str>, access_date: Option<&str>) {
    let mut cite = CiteWeb::from_meta(url, meta);
    if let Some(date) = access_date {
        cite = cite.with_access_date(date);
    }
    println!("{}", cite.ref_tag(name));
}

fn run_join(punct: &str, start: &str, end: &str, items: &[String]) -> Result<()> {
    let punct: Punct = punct.parse()?;
    println!("{}", punct_join(items, punct, start, end));
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════
//  BUILD: article JSON → wikitext
// ═══════════════════════════════════════════════════════════════════════

fn read_article(path: &Path) -> Result<ArticleSpec> {
    let json = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&json).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn render_file(path: &Path) -> Result<String> {
    let spec = read_article(path)?;
    Ok(Article::from_spec(&spec)?.render())
}

fn write_wiki(out_dir: &Path, source: &Path, wikitext: &str) -> Result<()> {
    fs::create_dir_all(out_dir).map_err(|source| Error::Io {
        path: out_dir.to_path_buf(),
        source,
    })?;
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("article");
    let path = out_dir.join(format!("{stem}.wiki"));
    fs::write(&path, wikitext).map_err(|source| Error::Io {
        path: path.clone(),
        source,
    })?;
    log::info!("{} ({} bytes)", path.display(), wikitext.len());
    Ok(())
}

/// Article JSON files directly inside `dir`, sorted by name.
fn scan_articles(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry.into_path()),
            Err(e) => {
                log::warn!("skipping unreadable entry in {}: {e}", dir.display());
                None
            }
        })
        .filter(|p| p.is_file() && p.extension().and_then(|e| e.to_str()) == Some("json"))
        .collect()
}

fn run_build(input: &Path, out_dir: Option<&Path>) -> Result<()> {
    if !input.is_dir() {
        let wikitext = render_file(input)?;
        return match out_dir {
            Some(dir) => write_wiki(dir, input, &wikitext),
            None => {
                print!("{wikitext}");
                Ok(())
            }
        };
    }

    let out_dir = out_dir.unwrap_or(Path::new(OUTPUT_DIR));
    let files = scan_articles(input);
    if files.is_empty() {
        log::warn!("no article JSON files in {}", input.display());
    }
    for file in &files {
        let wikitext = render_file(file)?;
        write_wiki(out_dir, file, &wikitext)?;
    }
    log::info!("built {} article(s) into {}", files.len(), out_dir.display());
    Ok(())
}
