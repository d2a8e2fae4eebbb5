use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// A low-stock rule: any material whose name contains `pattern`
/// raises an alert when its balance drops below `threshold`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockThreshold {
    pub pattern: String,
    pub threshold: f64,
}

impl StockThreshold {
    pub fn new(pattern: &str, threshold: f64) -> Self {
        Self {
            pattern: pattern.to_string(),
            threshold,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_secs: u64,
    #[serde(default = "default_sites")]
    pub fallback_sites: Vec<String>,
    #[serde(default = "default_meter_types")]
    pub fallback_meter_types: Vec<String>,
    #[serde(default = "default_materials")]
    pub fallback_materials: Vec<String>,
    #[serde(default = "default_worker")]
    pub fallback_worker: String,
    #[serde(default = "default_low_stock")]
    pub low_stock: Vec<StockThreshold>,
}

fn default_cache_ttl() -> u64 {
    30
}
fn default_sites() -> Vec<String> {
    vec!["Default Site".to_string()]
}
fn default_meter_types() -> Vec<String> {
    vec!["1 Phase".to_string(), "3 Phase".to_string()]
}
fn default_materials() -> Vec<String> {
    vec!["Cable".to_string(), "Lugs".to_string()]
}
fn default_worker() -> String {
    "General".to_string()
}
fn default_low_stock() -> Vec<StockThreshold> {
    vec![
        StockThreshold::new("Cable", 100.0),
        StockThreshold::new("Lugs", 50.0),
        StockThreshold::new("Box", 10.0),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self::with_database(Self::database_file())
    }
}

impl Config {
    fn with_database(db_path: PathBuf) -> Self {
        Self {
            database: db_path.to_string_lossy().to_string(),
            cache_ttl_secs: default_cache_ttl(),
            fallback_sites: default_sites(),
            fallback_meter_types: default_meter_types(),
            fallback_materials: default_materials(),
            fallback_worker: default_worker(),
            low_stock: default_low_stock(),
        }
    }

    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("sitesupervisor")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".sitesupervisor")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("sitesupervisor.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("sitesupervisor.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = match custom_name {
            Some(name) => {
                let p = std::path::Path::new(&name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => dir.join("sitesupervisor.sqlite"),
        };

        let config = Self::with_database(db_path.clone());

        if !is_test {
            let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }
        if !db_path.exists() {
            fs::File::create(&db_path).map_err(|e| {
                io::Error::new(e.kind(), format!("{}: {}", db_path.display(), e))
            })?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(db_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_take_defaults() {
        let cfg: Config = serde_yaml::from_str("database: /tmp/x.sqlite\n").unwrap();
        assert_eq!(cfg.database, "/tmp/x.sqlite");
        assert_eq!(cfg.cache_ttl_secs, 30);
        assert_eq!(cfg.fallback_meter_types, vec!["1 Phase", "3 Phase"]);
        assert_eq!(cfg.fallback_worker, "General");
        assert_eq!(cfg.low_stock.len(), 3);
    }

    #[test]
    fn custom_thresholds_are_parsed() {
        let yaml = "database: db.sqlite\nlow_stock:\n  - pattern: Meter\n    threshold: 4\n";
        let cfg: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.low_stock, vec![StockThreshold::new("Meter", 4.0)]);
    }
}
