// Configuration file loading
//
// The rc file lives at ~/.timestring/rc and holds key=value lines:
//
//   output.unit=h
//   calendar.hours_per_day=7.5
//   calendar.days_per_week=5
//   units.d=tag,tage
//
// Blank lines and lines starting with '#' are ignored.

use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use log::debug;
use crate::models::Unit;
use crate::parser::ParseOptions;

/// Settings read from the rc file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Default output unit when none is given on the command line
    pub output_unit: Option<String>,
    pub options: ParseOptions,
}

impl Config {
    /// Get the home directory, preferring $HOME
    fn home_dir() -> Result<PathBuf> {
        std::env::var_os("HOME")
            .filter(|home| !home.is_empty())
            .map(PathBuf::from)
            .or_else(dirs::home_dir)
            .context("Could not determine home directory")
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::home_dir()?.join(".timestring").join("rc"))
    }

    /// Load the rc file if present, otherwise return defaults
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            debug!("No config file at {}", path.display());
            return Ok(Self::default());
        }
        Self::from_file(&path)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        debug!("Loading config from {}", path.display());
        Self::parse_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    pub fn parse_str(content: &str) -> Result<Self> {
        let mut config = Self::default();

        for (idx, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let line_no = idx + 1;

            let (key, value) = line.split_once('=')
                .with_context(|| format!("line {}: expected key=value, got '{}'", line_no, line))?;
            let key = key.trim();
            let value = value.trim();

            config.apply(key, value)
                .with_context(|| format!("line {}: {}", line_no, line))?;
        }

        Ok(config)
    }

    /// Apply a single key=value setting
    pub fn apply(&mut self, key: &str, value: &str) -> Result<()> {
        if key == "output.unit" {
            if value.is_empty() {
                anyhow::bail!("output.unit cannot be empty");
            }
            self.output_unit = Some(value.to_string());
            return Ok(());
        }

        if let Some(field) = key.strip_prefix("calendar.") {
            let number: f64 = value.parse()
                .with_context(|| format!("Invalid number for {}: '{}'", key, value))?;
            let calendar = &mut self.options.calendar;
            match field {
                "hours_per_day" => calendar.hours_per_day = number,
                "days_per_week" => calendar.days_per_week = number,
                "weeks_per_month" => calendar.weeks_per_month = number,
                "months_per_year" => calendar.months_per_year = number,
                "days_per_year" => calendar.days_per_year = number,
                _ => anyhow::bail!("Unknown calendar setting: {}", key),
            }
            return Ok(());
        }

        if let Some(code) = key.strip_prefix("units.") {
            let unit = Unit::from_code(code)
                .with_context(|| format!("Unknown unit code '{}' (expected one of: ms, s, m, h, d, w, mth, y)", code))?;
            let words = parse_keyword_list(value);
            self.options.custom_units.insert(unit, words);
            return Ok(());
        }

        anyhow::bail!("Unknown setting: {}", key)
    }
}

/// Split a comma-separated keyword list, dropping empty entries
pub fn parse_keyword_list(value: &str) -> Vec<String> {
    value.split(',')
        .map(|w| w.trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}
