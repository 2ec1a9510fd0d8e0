// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Configuration management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the vertex and edge record files
    pub data_dir: PathBuf,
    /// File name of the vertex records inside `data_dir`
    pub vertex_file: String,
    /// File name of the edge records inside `data_dir`
    pub edge_file: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Column layout of the airfare CSV
    pub csv: CsvLayout,
}

/// Where the interesting fields live in the airfare CSV
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvLayout {
    /// Only lines containing this marker are data rows
    pub row_marker: String,
    /// Zero-based column of the departure airport
    pub source_column: usize,
    /// Zero-based column of the arrival airport
    pub destination_column: usize,
    /// Zero-based column of the fare
    pub fare_column: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: directories::ProjectDirs::from("com", "hyperpolymath", "flightgraph")
                .map(|d| d.data_dir().to_path_buf())
                .unwrap_or_else(|| PathBuf::from(".flightgraph")),
            vertex_file: "vertices.txt".to_string(),
            edge_file: "edges.txt".to_string(),
            log_level: "info".to_string(),
            csv: CsvLayout::default(),
        }
    }
}

impl Default for CsvLayout {
    fn default() -> Self {
        Self {
            row_marker: "Table 1a".to_string(),
            source_column: 11,
            destination_column: 12,
            fare_column: 15,
        }
    }
}

impl Config {
    /// Full path of the vertex record file
    #[must_use]
    pub fn vertex_path(&self) -> PathBuf {
        self.data_dir.join(&self.vertex_file)
    }

    /// Full path of the edge record file
    #[must_use]
    pub fn edge_path(&self) -> PathBuf {
        self.data_dir.join(&self.edge_file)
    }

    /// Look up a single setting by its dotted key (e.g. `csv.fare_column`)
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "data_dir" => self.data_dir.display().to_string(),
            "vertex_file" => self.vertex_file.clone(),
            "edge_file" => self.edge_file.clone(),
            "log_level" => self.log_level.clone(),
            "csv.row_marker" => self.csv.row_marker.clone(),
            "csv.source_column" => self.csv.source_column.to_string(),
            "csv.destination_column" => self.csv.destination_column.to_string(),
            "csv.fare_column" => self.csv.fare_column.to_string(),
            _ => return None,
        };
        Some(value)
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}

/// Load configuration from a TOML file, or use defaults when none is given.
///
/// Keys missing from the file keep their default values.
pub fn load(path: Option<&Path>) -> Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("Failed to parse config {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = load(None).unwrap();
        assert_eq!(config.vertex_file, "vertices.txt");
        assert_eq!(config.edge_file, "edges.txt");
        assert_eq!(config.csv.row_marker, "Table 1a");
        assert_eq!(config.csv.fare_column, 15);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("flightgraph.toml");
        fs::write(
            &path,
            "data_dir = \"/srv/fares\"\n\n[csv]\nfare_column = 9\n",
        )
        .unwrap();

        let config = load(Some(&path)).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/srv/fares"));
        assert_eq!(config.csv.fare_column, 9);
        assert_eq!(config.csv.source_column, 11);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.vertex_path(), PathBuf::from("/srv/fares/vertices.txt"));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "csv = [").unwrap();

        assert!(load(Some(&path)).is_err());
    }

    #[test]
    fn test_get_by_key() {
        let config = Config::default();
        assert_eq!(config.get("csv.source_column").as_deref(), Some("11"));
        assert_eq!(config.get("log_level").as_deref(), Some("info"));
        assert_eq!(config.get("nonsense"), None);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = Config::default();
        let text = config.to_toml().unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
