use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Badge-gate event log (CSV).
    pub input_file: String,
    /// Directory the two report files are written into.
    pub output_dir: String,
    /// Target month, "YYYY-MM".
    #[serde(default = "default_period")]
    pub period: String,
    #[serde(default = "default_export_format")]
    pub export_format: String,
}

fn default_period() -> String {
    "2023-02".to_string()
}

fn default_export_format() -> String {
    "csv".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_file: "data/gate_events.csv".to_string(),
            output_dir: "output".to_string(),
            period: default_period(),
            export_format: default_export_format(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = std::env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("gatestats")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".gatestats")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("gatestats.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
            serde_yaml::from_str(&content)
                .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))
        } else {
            Ok(Config::default())
        }
    }

    /// Initialize the configuration file with defaults.
    /// In test mode nothing is written to disk.
    pub fn init_all(is_test: bool) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let config = Config::default();

        if !is_test {
            let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        println!("✅ Input file:  {}", config.input_file);
        println!("✅ Output dir:  {}", config.output_dir);

        Ok(())
    }
}
