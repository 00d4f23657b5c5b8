use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "config.json";

/// CLI configuration, stored as JSON under `~/.growmate/`. The token is
/// whatever bearer token the backend accepts; obtaining one is up to the
/// user (`growmate login`).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    pub backend_url: String,
    pub token: String,
}

fn config_path(base_dir: Option<PathBuf>) -> Result<PathBuf> {
    let mut path = match base_dir {
        Some(dir) => dir,
        None => {
            let home_dir =
                dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory"))?;
            home_dir.join(".growmate")
        }
    };
    fs::create_dir_all(&path)?;
    path.push(CONFIG_FILE_NAME);
    Ok(path)
}

impl Config {
    pub fn load(base_dir: Option<PathBuf>) -> Result<Self> {
        let path = config_path(base_dir)?;
        let file = File::open(&path)
            .with_context(|| format!("no config at {} (run `growmate login` first)", path.display()))?;
        let reader = BufReader::new(file);
        let config = serde_json::from_reader(reader)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        Ok(config)
    }

    pub fn save(&self, base_dir: Option<PathBuf>) -> Result<()> {
        let path = config_path(base_dir)?;
        let file = File::create(&path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = std::env::temp_dir().join(format!("growmate-config-test-{}", std::process::id()));
        let config = Config {
            backend_url: "https://backend.example".to_string(),
            token: "tok".to_string(),
        };
        config.save(Some(dir.clone())).unwrap();
        let loaded = Config::load(Some(dir.clone())).unwrap();
        assert_eq!(loaded, config);
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_load_missing_is_error() {
        let dir = std::env::temp_dir().join(format!("growmate-config-missing-{}", std::process::id()));
        assert!(Config::load(Some(dir.clone())).is_err());
        let _ = fs::remove_dir_all(dir);
    }
}
