use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::reporting::ReportFormat;
use crate::threshold::ThresholdConfig;

/// Inspection ids grouped by the severity they are reported at.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InspectionLists {
    #[serde(default)]
    pub errors: Vec<String>,
    #[serde(default)]
    pub warnings: Vec<String>,
    #[serde(default)]
    pub infos: Vec<String>,
}

impl InspectionLists {
    /// Every configured id: errors, then warnings, then infos.
    #[must_use]
    pub fn all_ids(&self) -> Vec<&str> {
        self.errors
            .iter()
            .chain(&self.warnings)
            .chain(&self.infos)
            .map(String::as_str)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thresholds {
    #[serde(default)]
    pub max_errors: usize,
    /// Omitted means unbounded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_warnings: Option<usize>,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            max_errors: 0,
            max_warnings: None,
        }
    }
}

impl Thresholds {
    #[must_use]
    pub fn budget(&self) -> ThresholdConfig {
        ThresholdConfig {
            max_errors: self.max_errors,
            max_warnings: self.max_warnings.unwrap_or(ThresholdConfig::UNBOUNDED),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<PathBuf>,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            destination: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportsConfig {
    #[serde(default = "default_true")]
    pub show_violations: bool,
    #[serde(default)]
    pub ignore_failures: bool,
    #[serde(default = "default_reports_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_base_name")]
    pub base_name: String,
    #[serde(default)]
    pub text: FormatConfig,
    #[serde(default)]
    pub html: FormatConfig,
    #[serde(default)]
    pub json: FormatConfig,
}

impl Default for ReportsConfig {
    fn default() -> Self {
        Self {
            show_violations: true,
            ignore_failures: false,
            dir: default_reports_dir(),
            base_name: default_base_name(),
            text: FormatConfig::default(),
            html: FormatConfig::default(),
            json: FormatConfig::default(),
        }
    }
}

impl ReportsConfig {
    /// Settings for a file format; `None` for the console.
    #[must_use]
    pub fn format(&self, format: ReportFormat) -> Option<&FormatConfig> {
        match format {
            ReportFormat::Text => Some(&self.text),
            ReportFormat::Html => Some(&self.html),
            ReportFormat::Json => Some(&self.json),
            ReportFormat::Console => None,
        }
    }

    /// Configured destination, or `<dir>/<base_name>.<ext>`.
    #[must_use]
    pub fn destination(&self, format: ReportFormat) -> PathBuf {
        self.format(format)
            .and_then(|f| f.destination.clone())
            .unwrap_or_else(|| {
                self.dir
                    .join(format!("{}.{}", self.base_name, format.ext()))
            })
    }

    /// File formats that are switched on, in a fixed order.
    #[must_use]
    pub fn enabled_formats(&self) -> Vec<ReportFormat> {
        [ReportFormat::Text, ReportFormat::Html, ReportFormat::Json]
            .into_iter()
            .filter(|f| self.format(*f).is_some_and(|c| c.enabled))
            .collect()
    }
}

fn default_true() -> bool {
    true
}
fn default_reports_dir() -> PathBuf {
    PathBuf::from("build/reports/inspections")
}
fn default_base_name() -> String {
    "main".to_string()
}

/// Contents of `inspections.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InspectionsToml {
    #[serde(default)]
    pub inspections: InspectionLists,
    #[serde(default)]
    pub thresholds: Thresholds,
    #[serde(default)]
    pub reports: ReportsConfig,
}
