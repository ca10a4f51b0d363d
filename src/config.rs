use std::error::Error;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;

// Top-level lockstone.toml
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    // Treat horizontally adjacent containers of one type as a single protection.
    pub connect_containers: bool,
    // env_logger filter used when RUST_LOG is unset
    pub log_level: String,
    pub headers: HeaderConfig,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct HeaderConfig {
    pub private: String,
    pub more_users: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            connect_containers: true,
            log_level: "info".to_string(),
            headers: HeaderConfig::default(),
        }
    }
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            private: "[Private]".to_string(),
            more_users: "[More Users]".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: AppConfig = toml::from_str(toml_str)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reads the config file; `Ok(None)` when it does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Option<Self>, Box<dyn Error>> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(text) => Self::from_toml_str(&text)
                .map(Some)
                .map_err(|e| format!("{}: {}", path.display(), e).into()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(format!("reading {}: {}", path.display(), e).into()),
        }
    }

    fn validate(&self) -> Result<(), Box<dyn Error>> {
        let private = self.headers.private.trim();
        let more_users = self.headers.more_users.trim();
        if private.is_empty() || more_users.is_empty() {
            return Err("headers.private and headers.more_users must not be empty".into());
        }
        if private.eq_ignore_ascii_case(more_users) {
            return Err(format!("headers.private and headers.more_users are both `{}`", private).into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(AppConfig::from_toml_str("").unwrap(), AppConfig::default());
    }

    #[test]
    fn partial_headers_keep_other_default() {
        let cfg = AppConfig::from_toml_str(
            r#"
            connect_containers = false
            [headers]
            private = "[Locked]"
        "#,
        )
        .unwrap();
        assert!(!cfg.connect_containers);
        assert_eq!(cfg.headers.private, "[Locked]");
        assert_eq!(cfg.headers.more_users, "[More Users]");
    }

    #[test]
    fn clashing_headers_are_rejected() {
        let err = AppConfig::from_toml_str(
            r#"
            [headers]
            private = "[Private]"
            more_users = "[private]"
        "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("both"));
    }

    #[test]
    fn missing_file_is_none() {
        let got = AppConfig::load("definitely/not/here/lockstone.toml").unwrap();
        assert!(got.is_none());
    }

    #[test]
    fn shipped_config_parses() {
        let root = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let cfg = AppConfig::load(root.join("lockstone.toml")).unwrap().unwrap();
        assert!(cfg.connect_containers);
    }
}
