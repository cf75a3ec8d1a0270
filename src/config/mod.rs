// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::io::CONFIG_FILE;
pub use self::types::{FormatConfig, InspectionLists, InspectionsToml, ReportsConfig, Thresholds};

use std::path::Path;

use crate::classify::SeverityClassifier;
use crate::error::Result;

impl InspectionsToml {
    /// Loads and validates `path`.
    ///
    /// # Errors
    /// Returns a configuration error for malformed or inconsistent files.
    pub fn load(path: &Path) -> Result<Self> {
        io::load(path)
    }

    /// Classifier built from the error and warning lists.
    #[must_use]
    pub fn classifier(&self) -> SeverityClassifier {
        SeverityClassifier::new(
            self.inspections.errors.iter().cloned(),
            self.inspections.warnings.iter().cloned(),
        )
    }
}
