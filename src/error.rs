use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot parse {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("cannot serialize output: {0}")]
    Output(#[source] serde_json::Error),
    #[error("empty title (lang {0:?})")]
    EmptyName(String),
    #[error("unknown genre {0:?}")]
    UnknownGenre(String),
    #[error("unknown punctuation {0:?} (expected period, semicolon, comma or semi-comma)")]
    UnknownPunct(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
