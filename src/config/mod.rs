use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// 1-indexed sheet row holding the column headers (row 7 in the stock
    /// exports; everything above is preamble).
    #[serde(default = "default_header_row")]
    pub header_row: usize,
    /// Timestamp formats tried in order for the Inicio/Fin cells.
    #[serde(default = "default_timestamp_formats")]
    pub timestamp_formats: Vec<String>,
    /// Label substituted for missing checkouts/durations in reports.
    #[serde(default = "default_no_record_label")]
    pub no_record_label: String,
    /// Uppercase Nombre/Apellidos in output tables, like the source reports.
    #[serde(default = "default_uppercase_names")]
    pub uppercase_names: bool,
}

fn default_header_row() -> usize {
    7
}

fn default_timestamp_formats() -> Vec<String> {
    vec![
        "%d/%m/%Y %H:%M:%S".to_string(),
        "%d/%m/%Y %H:%M".to_string(),
    ]
}

fn default_no_record_label() -> String {
    "Sin registro".to_string()
}

fn default_uppercase_names() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            header_row: default_header_row(),
            timestamp_formats: default_timestamp_formats(),
            no_record_label: default_no_record_label(),
            uppercase_names: default_uppercase_names(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = std::env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("controlhoras")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".controlhoras")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("controlhoras.conf")
    }

    /// Load configuration from file, or return defaults if not found.
    /// A malformed file falls back to defaults with a warning instead of
    /// aborting the run.
    pub fn load() -> Self {
        let path = Self::config_file();

        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => serde_yaml::from_str(&content).unwrap_or_else(|e| {
                warning(format!(
                    "Ignoring malformed config file {}: {}",
                    path.display(),
                    e
                ));
                Self::default()
            }),
            Err(e) => {
                warning(format!("Cannot read config file {}: {}", path.display(), e));
                Self::default()
            }
        }
    }

    /// Write the default configuration file. With `is_test` the file is not
    /// touched, so test runs never clobber a real configuration.
    pub fn init(is_test: bool) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let config = Config::default();

        if !is_test {
            let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        println!("✅ Config file: {:?}", Self::config_file());

        Ok(())
    }
}
