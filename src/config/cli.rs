use super::toml_config::PortfolioConfig;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "modules-portfolio")]
#[command(about = "Serves the educational modules catalog over HTTP")]
pub struct CliConfig {
    #[arg(long, short = 'c', help = "Path to a TOML configuration file")]
    pub config: Option<String>,

    #[arg(long)]
    pub host: Option<String>,

    #[arg(long)]
    pub port: Option<u16>,

    #[arg(long, help = "SQLite database file for the catalog store")]
    pub database_path: Option<String>,

    #[arg(long, value_parser = ["sqlite", "memory"])]
    pub store_backend: Option<String>,

    #[arg(long, help = "JSON file replacing the built-in seed data")]
    pub seed_file: Option<String>,

    #[arg(long)]
    pub public_dir: Option<String>,

    #[arg(long, value_parser = ["compact", "json"])]
    pub log_format: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 命令列參數覆蓋設定檔的值
    pub fn apply_overrides(&self, config: &mut PortfolioConfig) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(path) = &self.database_path {
            config.store.path = path.clone();
        }
        if let Some(backend) = &self.store_backend {
            config.store.backend = backend.clone();
        }
        if let Some(file) = &self.seed_file {
            config.seed.file = Some(file.clone());
        }
        if let Some(dir) = &self.public_dir {
            config.server.public_dir = dir.clone();
        }
        if let Some(format) = &self.log_format {
            config.logging.format = format.clone();
        }
    }

    pub fn load(&self) -> crate::utils::error::Result<PortfolioConfig> {
        let mut config = match &self.config {
            Some(path) => PortfolioConfig::from_file(path)?,
            None => PortfolioConfig::default(),
        };
        self.apply_overrides(&mut config);
        Ok(config)
    }
}
