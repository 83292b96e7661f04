use crate::core::classifier::ClassifierConfig;
use crate::errors::{AppError, AppResult};
use crate::utils::date::parse_clock;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// Classification thresholds and the in-office code allowlist, kept in a
/// YAML file so deployments can tune them without a rebuild. Values
/// default to the canonical rule set.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Below this many hours a day with punches is still "AB".
    #[serde(default = "default_low_hours")]
    pub low_hours_threshold: f64,
    /// At or above this many hours a day is a Full Day.
    #[serde(default = "default_full_day")]
    pub full_day_threshold: f64,
    /// Check-ins strictly after this clock time earn a Late Mark.
    #[serde(default = "default_late_cutoff")]
    pub late_cutoff: String,
    /// Location codes counted as in-office/remote; anything else is a
    /// site visit.
    #[serde(default = "default_office_codes")]
    pub office_codes: Vec<String>,
}

fn default_low_hours() -> f64 {
    5.0
}
fn default_full_day() -> f64 {
    8.5
}
fn default_late_cutoff() -> String {
    "10:00:00".to_string()
}
fn default_office_codes() -> Vec<String> {
    ["ro", "mo", "rso", "do", "wfh"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            low_hours_threshold: default_low_hours(),
            full_day_threshold: default_full_day(),
            late_cutoff: default_late_cutoff(),
            office_codes: default_office_codes(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rollcall")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rollcall")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rollcall.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        Self::load_from(&Self::config_file())
    }

    /// Load configuration from an explicit path (CLI `--config` override).
    pub fn load_from(path: &PathBuf) -> Self {
        if path.exists() {
            let content = fs::read_to_string(path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        }
    }

    /// Initialize the configuration file with the default rule set.
    pub fn init_all(is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let config = Config::default();

        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        Ok(())
    }

    /// Check the loaded values are usable; reports every problem found.
    pub fn check(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if self.low_hours_threshold <= 0.0 {
            problems.push("low_hours_threshold must be positive".to_string());
        }
        if self.full_day_threshold < self.low_hours_threshold {
            problems.push("full_day_threshold is below low_hours_threshold".to_string());
        }
        if parse_clock(&self.late_cutoff).is_none() {
            problems.push(format!("late_cutoff '{}' is not a clock time", self.late_cutoff));
        }
        if self.office_codes.is_empty() {
            problems.push("office_codes is empty: every record becomes a site visit".to_string());
        }
        problems
    }

    /// Build the injected classifier configuration from this file.
    pub fn classifier(&self) -> AppResult<ClassifierConfig> {
        let cutoff = parse_clock(&self.late_cutoff)
            .ok_or_else(|| AppError::InvalidTime(self.late_cutoff.clone()))?;

        Ok(ClassifierConfig {
            low_hours_threshold: self.low_hours_threshold,
            full_day_threshold: self.full_day_threshold,
            late_cutoff: cutoff,
            office_codes: self
                .office_codes
                .iter()
                .map(|c| c.to_lowercase())
                .collect(),
        })
    }
}
