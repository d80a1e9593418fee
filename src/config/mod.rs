use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Whether submissions should try the remote workbook before disk.
    #[serde(default)]
    pub remote_enabled: bool,
    /// Identifier of the remote workbook holding the collections.
    #[serde(default)]
    pub workbook_id: String,
    /// Directory for the local CSV fallback files, `~` allowed.
    #[serde(default = "default_fallback_dir")]
    pub fallback_dir: String,
}

fn default_fallback_dir() -> String {
    "~/.coffeeconnect/submissions".to_string()
}

/// Keys `check_file` recognizes in the YAML config.
const RECOGNIZED_KEYS: [&str; 3] = ["remote_enabled", "workbook_id", "fallback_dir"];

impl Default for Config {
    fn default() -> Self {
        Self {
            remote_enabled: false,
            workbook_id: String::new(),
            fallback_dir: default_fallback_dir(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("coffeeconnect")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".coffeeconnect")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("coffeeconnect.conf")
    }

    /// Fallback directory with `~` expanded
    pub fn fallback_path(&self) -> PathBuf {
        expand_tilde(&self.fallback_dir)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
            serde_yaml::from_str(&content).map_err(|e| {
                AppError::Config(format!("could not parse {}: {}", path.display(), e))
            })
        } else {
            Ok(Config::default())
        }
    }

    /// Initialize configuration file and fallback directory
    pub fn init_all(custom_fallback: Option<String>, is_test: bool) -> AppResult<Config> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // Fallback dir: user provided or default
        let mut config = Config::default();
        if let Some(dir) = custom_fallback {
            config.fallback_dir = dir;
        }

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file:  {:?}", Self::config_file());
        }

        // Create the fallback directory so the first submission never races it
        let fallback = config.fallback_path();
        fs::create_dir_all(&fallback)?;
        println!("✅ Fallback dir: {:?}", fallback);

        Ok(config)
    }

    /// Inspect the config file on disk: report missing keys (defaults apply)
    /// and keys this version does not recognize.
    pub fn check_file() -> AppResult<()> {
        let path = Self::config_file();

        if !path.exists() {
            warning(format!(
                "No config file at {:?}. Defaults are in use; run `init` to create one.",
                path
            ));
            return Ok(());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        let yaml = serde_yaml::from_str::<Value>(&content)
            .map_err(|e| AppError::Config(format!("could not parse {}: {}", path.display(), e)))?;

        let map = yaml
            .as_mapping()
            .ok_or_else(|| AppError::Config("config file is not a YAML mapping".to_string()))?;

        for key in RECOGNIZED_KEYS {
            if map.contains_key(&Value::String(key.to_string())) {
                success(format!("{key}: present"));
            } else {
                warning(format!("{key}: missing, default will be used"));
            }
        }

        for (key, _) in map.iter() {
            if let Some(name) = key.as_str()
                && !RECOGNIZED_KEYS.contains(&name)
            {
                warning(format!("{name}: not a recognized option"));
            }
        }

        Ok(())
    }
}
