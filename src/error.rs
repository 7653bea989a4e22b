use std::io;
use std::path::Path;

/// Error raised while conjugating or loading configuration.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct Error {
    kind: ErrorKind,
}

impl Error {
    pub(crate) fn new<K>(kind: K) -> Self
    where
        ErrorKind: From<K>,
    {
        Self { kind: kind.into() }
    }

    /// Access the kind of the error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl<K> From<K> for Error
where
    ErrorKind: From<K>,
{
    #[inline]
    fn from(value: K) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ErrorKind {
    #[error("Unsupported part of speech `{0}`")]
    UnsupportedClass(Box<str>),
    #[error("Invalid lemma `{text}` ({reading}): {reason}")]
    InvalidLemma {
        text: Box<str>,
        reading: Box<str>,
        reason: &'static str,
    },
    #[error("Failed to read configuration from {}", path.display())]
    ReadConfig {
        path: Box<Path>,
        #[source]
        error: io::Error,
    },
    #[error("Failed to parse configuration in {}", path.display())]
    ParseConfig {
        path: Box<Path>,
        #[source]
        error: toml::de::Error,
    },
}
