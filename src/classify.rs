use std::collections::HashSet;

use crate::types::Severity;

/// Maps inspection ids to severity levels.
///
/// Lookup is exact set membership. Ids in neither table are informational.
#[derive(Debug, Clone, Default)]
pub struct SeverityClassifier {
    errors: HashSet<String>,
    warnings: HashSet<String>,
}

impl SeverityClassifier {
    pub fn new<E, W>(errors: E, warnings: W) -> Self
    where
        E: IntoIterator,
        E::Item: Into<String>,
        W: IntoIterator,
        W::Item: Into<String>,
    {
        Self {
            errors: errors.into_iter().map(Into::into).collect(),
            warnings: warnings.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn classify(&self, inspection_id: &str) -> Severity {
        if self.errors.contains(inspection_id) {
            Severity::Error
        } else if self.warnings.contains(inspection_id) {
            Severity::Warning
        } else {
            Severity::Information
        }
    }
}
