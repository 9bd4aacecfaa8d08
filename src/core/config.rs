use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub bootstrap: BootstrapConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_num_threads")]
    pub num_threads: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Session lifetime in seconds
    #[serde(default = "default_token_ttl")]
    pub token_ttl_secs: i64,
    /// bcrypt work factor for new password hashes
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_ttl_secs: default_token_ttl(),
            bcrypt_cost: default_bcrypt_cost(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct CatalogConfig {
    /// JSON file holding the card catalog. Missing file is a warning,
    /// not a startup failure; the server then serves an empty catalog.
    pub seed_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct BootstrapConfig {
    /// Seed two demo accounts into an empty user store at startup
    #[serde(default)]
    pub sample_users: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default = "default_console")]
    pub console: bool,
}

// Default value functions
fn default_port() -> u16 {
    8000
}

fn default_num_threads() -> usize {
    num_cpus::get()
}

fn default_token_ttl() -> i64 {
    86_400 // 24 hours
}

fn default_bcrypt_cost() -> u32 {
    12
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

fn default_console() -> bool {
    false
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            bail!("Server port must be greater than 0");
        }

        if self.server.num_threads == 0 {
            bail!("num_threads must be greater than 0");
        }

        if self.auth.token_ttl_secs <= 0 {
            bail!("token_ttl_secs must be greater than 0");
        }

        // Work factors outside this range are rejected by bcrypt itself
        if !(4..=31).contains(&self.auth.bcrypt_cost) {
            bail!("bcrypt_cost must be between 4 and 31");
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            bail!(
                "Invalid log level '{}'. Must be one of: trace, debug, info, warn, error",
                self.logging.level
            );
        }

        let valid_formats = ["json", "console"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            bail!(
                "Invalid log format '{}'. Must be one of: json, console",
                self.logging.format
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn parse(toml: &str) -> Config {
        toml::from_str(toml).expect("Failed to parse config")
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = parse(
            r#"
            [server]

            [logging]
            "#,
        );

        assert_eq!(config.server.port, 8000);
        assert!(config.server.num_threads > 0);
        assert_eq!(config.auth.token_ttl_secs, 86_400);
        assert_eq!(config.auth.bcrypt_cost, 12);
        assert!(config.catalog.seed_file.is_none());
        assert!(!config.bootstrap.sample_users);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "json");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_full_config_overrides() {
        let config = parse(
            r#"
            [server]
            port = 9100
            num_threads = 2

            [auth]
            token_ttl_secs = 3600
            bcrypt_cost = 10

            [catalog]
            seed_file = "cards.json"

            [bootstrap]
            sample_users = true

            [logging]
            level = "debug"
            format = "console"
            console = true
            "#,
        );

        assert_eq!(config.server.port, 9100);
        assert_eq!(config.server.num_threads, 2);
        assert_eq!(config.auth.token_ttl_secs, 3600);
        assert_eq!(config.auth.bcrypt_cost, 10);
        assert_eq!(config.catalog.seed_file, Some(PathBuf::from("cards.json")));
        assert!(config.bootstrap.sample_users);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_port() {
        let config = parse("[server]\nport = 0\n\n[logging]\n");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_ttl() {
        let config = parse("[server]\n\n[auth]\ntoken_ttl_secs = 0\n\n[logging]\n");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_out_of_range_cost() {
        for cost in [0, 3, 32] {
            let toml = format!("[server]\n\n[auth]\nbcrypt_cost = {cost}\n\n[logging]\n");
            let config = parse(&toml);
            assert!(config.validate().is_err(), "cost {cost} should be rejected");
        }
    }

    #[test]
    fn test_validate_rejects_unknown_log_level() {
        let config = parse("[server]\n\n[logging]\nlevel = \"verbose\"\n");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "[server]\nport = 9200\n\n[logging]\nformat = \"console\"\n"
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.server.port, 9200);
        assert_eq!(config.logging.format, "console");
    }

    #[test]
    fn test_from_file_missing() {
        let result = Config::from_file(Path::new("/nonexistent/config.toml"));
        assert!(result.is_err());
    }
}
