use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize)]
pub struct UserConfig {
    pub logging: Option<LoggingCfg>,
    pub registry: Option<RegistryCfg>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoggingCfg {
    pub json: Option<bool>,
    pub compact: Option<bool>,
    pub level: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RegistryCfg {
    pub file: Option<String>, // absolute path preferred
}

pub fn load_user_config(home: &Path) -> anyhow::Result<Option<UserConfig>> {
    let path = home.join("config.toml");
    if !path.exists() {
        return Ok(None);
    }
    let s = std::fs::read_to_string(&path)?;
    let cfg: UserConfig = toml::from_str(&s)?;
    Ok(Some(cfg))
}

pub fn expand_home(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(stripped);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_config_is_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(load_user_config(dir.path()).expect("ok").is_none());
    }

    #[test]
    fn parse_user_config() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(
            dir.path().join("config.toml"),
            "[logging]\nlevel = \"debug\"\n[registry]\nfile = \"/tmp/registry.toml\"\n",
        )
        .expect("write");
        let cfg = load_user_config(dir.path()).expect("ok").expect("some");
        assert_eq!(cfg.logging.unwrap().level.as_deref(), Some("debug"));
        assert_eq!(
            cfg.registry.unwrap().file.as_deref(),
            Some("/tmp/registry.toml")
        );
    }
}
