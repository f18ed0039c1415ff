use serde::{Deserialize, Serialize};

use crate::common::errors::{Error, Result};
use crate::configs::{LoggingConfig, NodeConfig, ResumeConfig};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    pub node: NodeConfig,
    #[serde(default)]
    pub resume: Option<ResumeConfig>,
    #[serde(default)]
    pub logging: Option<LoggingConfig>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = if std::path::Path::new("config.toml").exists() {
            "config.toml"
        } else if std::path::Path::new("config.default.toml").exists() {
            "config.default.toml"
        } else {
            return Err(Error::ConfigMissing);
        };

        let config_str = std::fs::read_to_string(config_path)?;
        let config: Config = toml::from_str(&config_str)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config: Config = toml::from_str(
            r#"
            [node]
            host = "127.0.0.1"
            port = 2333
            password = "youshallnotpass"
            user_id = 170293147443216384

            [resume]
            key = "defaultresumekey"
            timeout = 60

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.node.host, "127.0.0.1");
        assert_eq!(config.node.port, 2333);
        assert!(!config.node.secure);
        assert_eq!(config.node.num_shards, 1);
        let resume = config.resume.unwrap();
        assert_eq!(resume.key, "defaultresumekey");
        assert_eq!(resume.timeout, 60);
        assert_eq!(config.logging.unwrap().level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_resume_and_logging_are_optional() {
        let config: Config = toml::from_str(
            r#"
            [node]
            host = "lava.example.com"
            port = 443
            password = "hunter2"
            secure = true
            user_id = 1
            num_shards = 4
            "#,
        )
        .unwrap();

        assert!(config.resume.is_none());
        assert!(config.logging.is_none());
        assert!(config.node.secure);
        assert_eq!(config.node.num_shards, 4);
    }

    #[test]
    fn test_missing_node_section_fails() {
        assert!(toml::from_str::<Config>("[resume]\nkey = \"k\"\ntimeout = 1\n").is_err());
    }
}
