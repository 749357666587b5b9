use camino::Utf8PathBuf;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised while resolving the global context.
///
/// None of these are recoverable at the library layer; they propagate to the
/// binary, which reports them and exits non-zero.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Missing path, not a directory, or an unreadable file.
    #[error("cannot load {path}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The override file is not valid YAML or a field has the wrong shape.
    #[error("invalid config file {path}")]
    ConfigParse {
        path: Utf8PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// A file-name glob handed to the directory queries does not compile.
    #[error("invalid file pattern {pattern:?}")]
    Pattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },
}

impl Error {
    pub fn io(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub fn config_parse(path: impl Into<Utf8PathBuf>, source: serde_yaml::Error) -> Self {
        Error::ConfigParse {
            path: path.into(),
            source,
        }
    }

    /// Path of the file or directory the error refers to, if any.
    pub fn path(&self) -> Option<&camino::Utf8Path> {
        match self {
            Error::Io { path, .. } | Error::ConfigParse { path, .. } => Some(path),
            Error::Pattern { .. } => None,
        }
    }
}
