use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, ErrorKind};
use crate::kana::Script;

/// How conjugations are printed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Format {
    /// Indented text with category titles.
    #[default]
    Text,
    /// JSON.
    Json,
}

/// A configuration used for the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Scripts to output.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub scripts: Vec<Script>,
    /// Include voice derivations.
    pub voices: bool,
    /// Output format.
    pub format: Format,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scripts: Script::ALL.to_vec(),
            voices: true,
            format: Format::Text,
        }
    }
}

impl Config {
    /// Load configuration from the given path.
    ///
    /// If no path is specified or the file does not exist, the default
    /// configuration is used.
    pub fn load(path: Option<&Path>) -> Result<Self, Error> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let data = match fs::read_to_string(path) {
            Ok(data) => data,
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "configuration not found, using defaults");
                return Ok(Self::default());
            }
            Err(error) => {
                return Err(Error::new(ErrorKind::ReadConfig {
                    path: path.into(),
                    error,
                }));
            }
        };

        Self::parse(path, &data)
    }

    /// Parse configuration from a string.
    pub fn parse(path: &Path, data: &str) -> Result<Self, Error> {
        match toml::from_str(data) {
            Ok(config) => Ok(config),
            Err(error) => Err(Error::new(ErrorKind::ParseConfig {
                path: path.into(),
                error,
            })),
        }
    }

    /// Test if the given script is enabled.
    pub fn is_enabled(&self, script: Script) -> bool {
        self.scripts.contains(&script)
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::{Config, Format};
    use crate::kana::Script;

    #[test]
    fn defaults() {
        let config = Config::parse(Path::new("config.toml"), "").unwrap();
        assert_eq!(config, Config::default());
        assert!(config.is_enabled(Script::Romaji));
    }

    #[test]
    fn partial() {
        let config = Config::parse(
            Path::new("config.toml"),
            "scripts = [\"kana\"]\nformat = \"json\"\n",
        )
        .unwrap();

        assert_eq!(config.scripts, [Script::Kana]);
        assert_eq!(config.format, Format::Json);
        assert!(config.voices);
    }

    #[test]
    fn invalid() {
        assert!(Config::parse(Path::new("config.toml"), "format = \"yaml\"").is_err());
    }
}
