use std::{fs, path::{Path, PathBuf}};
use serde::{Serialize, Deserialize};
use toml;
use anyhow::{self, Context};

pub const DEFAULT_DATA_FILE: &str = "accounts.json";
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where accounts are read from at startup and written to on exit
    pub data_file: PathBuf,
    pub currency_symbol: String
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_owned()
        }
    }
}

impl AppConfig {
    pub fn read(filepath: impl AsRef<Path>) -> anyhow::Result<Self> {
        let filepath = filepath.as_ref();
        let file_content = fs::read_to_string(filepath)
            .with_context(|| format!("failed to read config file {}", filepath.display()))?;
        let config = toml::from_str(&file_content)
            .with_context(|| "failed to parse config file")?;
        return Ok(config);
    }

    /// Starts from the config file if one is given, then applies the data file override.
    pub fn resolve(config_path: Option<&Path>, data_file: Option<PathBuf>) -> anyhow::Result<Self> {
        let mut config = match config_path {
            Some(path) => AppConfig::read(path)?,
            None => AppConfig::default()
        };
        if let Some(data_file) = data_file {
            config.data_file = data_file;
        }
        return Ok(config);
    }
}


#[cfg(test)]
mod tests {
    use super::AppConfig;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn defaults_without_file() {
        let config = AppConfig::resolve(None, None).unwrap();
        assert_eq!(config.data_file, PathBuf::from("accounts.json"));
        assert_eq!(config.currency_symbol, "$");
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bank.toml");
        std::fs::write(&path, "currency_symbol = \"€\"\n").unwrap();

        let config = AppConfig::read(&path).unwrap();
        assert_eq!(config.data_file, PathBuf::from("accounts.json"));
        assert_eq!(config.currency_symbol, "€");
    }

    #[test]
    fn data_file_flag_wins() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bank.toml");
        std::fs::write(&path, "data_file = \"from-config.json\"\n").unwrap();

        let config = AppConfig::resolve(Some(path.as_path()), Some(PathBuf::from("from-flag.json"))).unwrap();
        assert_eq!(config.data_file, PathBuf::from("from-flag.json"));
    }

    #[test]
    fn missing_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        let res = AppConfig::resolve(Some(dir.path().join("absent.toml").as_path()), None);
        assert!(res.is_err());
    }

    #[test]
    fn malformed_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bank.toml");
        std::fs::write(&path, "data_file = [1, 2").unwrap();
        assert!(AppConfig::read(&path).is_err());
    }
}
