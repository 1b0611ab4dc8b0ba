use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub log_file: String,
    #[serde(default = "default_cooldown_secs")]
    pub cooldown_secs: u64,
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default = "default_banner")]
    pub banner: String,
}

fn default_cooldown_secs() -> u64 {
    3
}
fn default_locale() -> String {
    "ja".to_string()
}
fn default_banner() -> String {
    "岡山県立美術館".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_file: Self::log_file_path().to_string_lossy().to_string(),
            cooldown_secs: default_cooldown_secs(),
            locale: default_locale(),
            banner: default_banner(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
            appdata.join("surveykiosk")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".surveykiosk")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("surveykiosk.conf")
    }

    /// Return the full path of the response log
    pub fn log_file_path() -> PathBuf {
        Self::config_dir().join("survey_log.csv")
    }

    /// Load configuration from file, or return defaults if not found.
    /// An unreadable or unparsable file degrades to defaults with a
    /// warning; a broken config must never keep the kiosk from running.
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => serde_yaml::from_str(&content).unwrap_or_else(|e| {
                    eprintln!("⚠️  Invalid configuration file ({e}), using defaults");
                    Config::default()
                }),
                Err(e) => {
                    eprintln!("⚠️  Failed to read configuration file ({e}), using defaults");
                    Config::default()
                }
            }
        } else {
            Config::default()
        }
    }

    /// Initialize configuration and log files
    pub fn init_all(custom_log: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // Log file: user provided or default
        let log_path = if let Some(name) = custom_log {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::log_file_path()
        };

        let config = Config {
            log_file: log_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(format!("serialize config: {e}")))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty log file if not exists
        if !log_path.exists() {
            fs::File::create(&log_path)?;
        }

        println!("✅ Response log: {log_path:?}");

        Ok(())
    }
}
