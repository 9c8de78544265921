// src/error.rs

use std::io;
use std::path::{Path, PathBuf};

/// Broad failure classes, independent of which file produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The dictionary path does not name a supported format.
    Configuration,
    /// Opening, creating, reading or writing a file failed.
    Io,
    /// A dictionary or transition table could not be decoded.
    Decode,
    /// The consumer dropped its end of the session.
    Disconnected,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unsupported format for '{}': expected a .json or .yaml extension", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("i/o error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed JSON in '{}': {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed YAML in '{}': {source}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("session consumer disconnected before the end of the stream")]
    Disconnected,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UnsupportedFormat { .. } => ErrorKind::Configuration,
            Error::Io { .. } => ErrorKind::Io,
            Error::Json { .. } | Error::Yaml { .. } => ErrorKind::Decode,
            Error::Disconnected => ErrorKind::Disconnected,
        }
    }

    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        Error::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_taxonomy() {
        let unsupported = Error::UnsupportedFormat {
            path: PathBuf::from("words.txt"),
        };
        assert_eq!(unsupported.kind(), ErrorKind::Configuration);
        assert!(unsupported.to_string().contains("words.txt"));

        let io = Error::io(Path::new("in.txt"), io::Error::from(io::ErrorKind::NotFound));
        assert_eq!(io.kind(), ErrorKind::Io);

        let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let decode = Error::Json {
            path: PathBuf::from("d.json"),
            source: json,
        };
        assert_eq!(decode.kind(), ErrorKind::Decode);
        assert_eq!(Error::Disconnected.kind(), ErrorKind::Disconnected);
    }
}
