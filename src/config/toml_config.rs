use crate::core::ConfigProvider;
use crate::utils::error::{PortfolioError, Result};
use crate::utils::logger::LogFormat;
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const STORE_BACKENDS: [&str; 2] = ["sqlite", "memory"];
pub const LOG_FORMATS: [&str; 2] = ["compact", "json"];
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioConfig {
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub seed: SeedConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub public_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            public_dir: "public".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub backend: String,
    pub path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: "sqlite".to_string(),
            path: "educational_modules.db".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    pub enabled: bool,
    pub file: Option<String>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            file: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: None,
            format: "compact".to_string(),
        }
    }
}

impl PortfolioConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| PortfolioError::ConfigError {
            message: format!("cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PortfolioError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DATABASE_PATH})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PortfolioError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn log_format(&self) -> LogFormat {
        LogFormat::parse(&self.logging.format).unwrap_or(LogFormat::Compact)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.level.as_deref()
    }
}

impl ConfigProvider for PortfolioConfig {
    fn host(&self) -> &str {
        &self.server.host
    }

    fn port(&self) -> u16 {
        self.server.port
    }

    fn store_backend(&self) -> &str {
        &self.store.backend
    }

    fn database_path(&self) -> &str {
        &self.store.path
    }

    fn seed_file(&self) -> Option<&str> {
        self.seed.file.as_deref()
    }

    fn seed_enabled(&self) -> bool {
        self.seed.enabled
    }

    fn public_dir(&self) -> &str {
        &self.server.public_dir
    }
}

impl Validate for PortfolioConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("server.host", &self.server.host)?;
        validation::validate_range("server.port", self.server.port, 1, u16::MAX)?;
        validation::validate_one_of("store.backend", &self.store.backend, &STORE_BACKENDS)?;

        if self.store.backend == "sqlite" {
            validation::validate_path("store.path", &self.store.path)?;
        }

        if let Some(file) = &self.seed.file {
            validation::validate_path("seed.file", file)?;
        }

        validation::validate_one_of("logging.format", &self.logging.format, &LOG_FORMATS)?;

        if let Some(level) = &self.logging.level {
            validation::validate_one_of("logging.level", level, &LOG_LEVELS)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = PortfolioConfig::from_toml_str("").unwrap();

        assert_eq!(config.host(), "127.0.0.1");
        assert_eq!(config.port(), 3000);
        assert_eq!(config.store_backend(), "sqlite");
        assert_eq!(config.database_path(), "educational_modules.db");
        assert!(config.seed_enabled());
        assert!(config.seed_file().is_none());
        assert_eq!(config.log_format(), LogFormat::Compact);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[server]
host = "0.0.0.0"
port = 8080
public_dir = "./static"

[store]
backend = "memory"

[seed]
enabled = false
file = "./catalog.json"

[logging]
level = "debug"
format = "json"
"#;

        let config = PortfolioConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.host(), "0.0.0.0");
        assert_eq!(config.port(), 8080);
        assert_eq!(config.public_dir(), "./static");
        assert_eq!(config.store_backend(), "memory");
        assert!(!config.seed_enabled());
        assert_eq!(config.seed_file(), Some("./catalog.json"));
        assert_eq!(config.log_level(), Some("debug"));
        assert_eq!(config.log_format(), LogFormat::Json);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PORTFOLIO_TEST_DB_PATH", "/tmp/portfolio-test.db");

        let toml_content = r#"
[store]
path = "${PORTFOLIO_TEST_DB_PATH}"
"#;

        let config = PortfolioConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.database_path(), "/tmp/portfolio-test.db");

        std::env::remove_var("PORTFOLIO_TEST_DB_PATH");
    }

    #[test]
    fn test_config_validation() {
        let unknown_backend = PortfolioConfig::from_toml_str("[store]\nbackend = \"mongo\"\n").unwrap();
        assert!(unknown_backend.validate().is_err());

        let zero_port = PortfolioConfig::from_toml_str("[server]\nport = 0\n").unwrap();
        assert!(zero_port.validate().is_err());

        let empty_path = PortfolioConfig::from_toml_str("[store]\npath = \"\"\n").unwrap();
        assert!(empty_path.validate().is_err());

        let memory_without_path =
            PortfolioConfig::from_toml_str("[store]\nbackend = \"memory\"\npath = \"\"\n").unwrap();
        assert!(memory_without_path.validate().is_ok());
    }

    #[test]
    fn test_log_level_validation() {
        let typo = PortfolioConfig::from_toml_str("[logging]\nlevel = \"degub\"\n").unwrap();
        assert!(matches!(
            typo.validate(),
            Err(PortfolioError::InvalidConfigValueError { ref field, .. }) if field == "logging.level"
        ));

        let debug = PortfolioConfig::from_toml_str("[logging]\nlevel = \"debug\"\n").unwrap();
        assert!(debug.validate().is_ok());
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let result = PortfolioConfig::from_toml_str("[server\nport = 1");
        assert!(matches!(
            result,
            Err(PortfolioError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[server]\nport = 4000\n")
            .unwrap();

        let config = PortfolioConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.port(), 4000);
    }
}
