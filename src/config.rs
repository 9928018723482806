use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{NmapError, Result};

/// Switches read by the runner and the report writers.
///
/// Every field has a default, so a partial JSON file is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Print the hosthint section in the console report
    pub show_hosthint: bool,
    /// Print the host and port section in the console report
    pub show_hostport: bool,
    /// Merge a host's columns across its port rows in the spreadsheet
    pub merge_row: bool,
    /// Style the spreadsheet sheets as tables
    pub add_table: bool,
    /// Base name for the raw xml sidecar and exported reports
    pub result_name: String,
    /// Write the captured stdout next to the reports after a run
    pub save_xml_raw: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            show_hosthint: true,
            show_hostport: true,
            merge_row: true,
            add_table: true,
            result_name: "Result".to_string(),
            save_xml_raw: true,
        }
    }
}

impl ExportConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| NmapError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&content).map_err(|e| NmapError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// `<config dir>/nmapwrap/config.json`
    pub fn default_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("nmapwrap");
        path.push("config.json");
        path
    }

    /// Load the user config if one exists, otherwise fall back to defaults.
    pub fn load_or_default() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub(crate) fn raw_output_path(&self, default_format: bool) -> PathBuf {
        if default_format {
            PathBuf::from(format!("{}.xml", self.result_name))
        } else {
            PathBuf::from(&self.result_name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let cfg = ExportConfig::default();
        assert!(cfg.show_hosthint && cfg.show_hostport);
        assert!(cfg.merge_row && cfg.add_table && cfg.save_xml_raw);
        assert_eq!(cfg.result_name, "Result");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"merge_row": false, "result_name": "office"}}"#).unwrap();

        let cfg = ExportConfig::load(file.path()).unwrap();
        assert!(!cfg.merge_row);
        assert_eq!(cfg.result_name, "office");
        assert!(cfg.add_table);
        assert!(cfg.save_xml_raw);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = ExportConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, NmapError::Config { .. }));
    }

    #[test]
    fn test_raw_output_path_suffix() {
        let cfg = ExportConfig::default();
        assert_eq!(cfg.raw_output_path(true), PathBuf::from("Result.xml"));
        assert_eq!(cfg.raw_output_path(false), PathBuf::from("Result"));
    }
}
