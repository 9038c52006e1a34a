use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::ui::messages::warning;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Path of the JSON data file holding one record per date.
    pub data_file: String,
    /// Show the weekday name column in list/week tables.
    #[serde(default = "default_show_weekday")]
    pub show_weekday: bool,
}

fn default_show_weekday() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: Self::data_file_path().to_string_lossy().to_string(),
            show_weekday: default_show_weekday(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("workhours")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".workhours")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("workhours.conf")
    }

    /// Return the default path of the JSON data file
    pub fn data_file_path() -> PathBuf {
        Self::config_dir().join("work_hours.json")
    }

    /// Load configuration from file, or return defaults if not found.
    /// A malformed file degrades to defaults with a warning instead of
    /// refusing to start.
    pub fn load() -> Self {
        let path = Self::config_file();

        match fs::read_to_string(&path) {
            Ok(content) => serde_yaml::from_str(&content).unwrap_or_else(|e| {
                warning(format!(
                    "Ignoring malformed config file {} ({})",
                    path.display(),
                    e
                ));
                Config::default()
            }),
            Err(_) => Config::default(),
        }
    }

    /// Initialize configuration and data files
    pub fn init_all(custom_file: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // Data file: user provided or default
        let data_path = if let Some(name) = custom_file {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::data_file_path()
        };

        let config = Config {
            data_file: data_path.to_string_lossy().to_string(),
            show_weekday: default_show_weekday(),
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty data file if not exists
        if !data_path.exists() {
            fs::write(&data_path, "{}\n")?;
        }

        println!("✅ Data file:   {:?}", data_path);

        Ok(())
    }
}
