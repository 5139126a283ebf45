use std::{fmt, path::PathBuf, str::FromStr};

use serde::{de, Deserialize, Deserializer};
use tracing_subscriber::filter::LevelFilter;

use crate::dir::CepexDirectory;

pub const CONFIG_FILE_NAME: &str = "cepex.toml";

fn deserialize_fromstr_opt<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    <T as FromStr>::Err: std::fmt::Display,
{
    let string = Option::<String>::deserialize(deserializer)?;
    string
        .map(|s| {
            T::from_str(&s).map_err(|e| de::Error::custom(format!("Error parsing '{}': {}", s, e)))
        })
        .transpose()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    /// Log each registration for the operator and keep nothing.
    #[default]
    Log,
    /// Append each registration to a JSON-lines file.
    Outbox,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SinkConfig {
    #[serde(default)]
    pub kind: SinkKind,
    /// Outbox file. Relative paths are resolved against the data directory.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default, deserialize_with = "deserialize_fromstr_opt")]
    pub log_level: Option<LevelFilter>,
    #[serde(default)]
    pub sink: SinkConfig,
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub enum ConfigError {
    ReadingFile(String),
    Parsing(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::ReadingFile(e) => write!(f, "Error while reading configuration file: {}", e),
            Self::Parsing(e) => write!(f, "Error while parsing configuration file: {}", e),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::ReadingFile(e.to_string())
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Parsing(e.to_string())
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    pub fn default_path(dir: &CepexDirectory) -> PathBuf {
        dir.path().join(CONFIG_FILE_NAME)
    }

    /// Read the configuration file. The file is optional: if it does not exist the
    /// defaults are used.
    pub fn from_file(path: &std::path::Path) -> Result<Config, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(toml::from_str::<Config>(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Config::default()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_is_default() {
        let config = toml::from_str::<Config>("").expect("Deserializing empty config");
        assert_eq!(config, Config::default());
        assert_eq!(config.sink.kind, SinkKind::Log);
        assert_eq!(config.log_level, None);
    }

    #[test]
    fn outbox_config() {
        let toml_str = r#"
            log_level = "debug"

            [sink]
            kind = "outbox"
            path = "/var/lib/cepex/registrations.jsonl"
            "#;
        let config = toml::from_str::<Config>(toml_str).expect("Deserializing toml_str");
        assert_eq!(config.log_level, Some(LevelFilter::DEBUG));
        assert_eq!(config.sink.kind, SinkKind::Outbox);
        assert_eq!(
            config.sink.path,
            Some(PathBuf::from("/var/lib/cepex/registrations.jsonl"))
        );
    }

    #[test]
    fn invalid_config() {
        let config_res: Result<Config, toml::de::Error> = toml::from_str(
            r#"
            [sink]
            kind = "carrier-pigeon"
            "#,
        );
        config_res.expect_err("Unknown sink kind");

        let config_res: Result<Config, toml::de::Error> =
            toml::from_str(r#"log_level = "loud""#);
        config_res.expect_err("Unknown log level");
    }

    #[test]
    fn missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::from_file(&dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn file_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[sink\nkind=").unwrap();
        assert!(matches!(
            Config::from_file(&path),
            Err(ConfigError::Parsing(_))
        ));
    }
}
