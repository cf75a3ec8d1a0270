use serde::Serialize;

use crate::threshold::ThresholdConfig;

/// Outcome of a run: pass/fail plus the counts that decided it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub passed: bool,
    pub error_count: usize,
    pub warning_count: usize,
    /// Budgets the counts were checked against.
    pub budget: ThresholdConfig,
}

impl Verdict {
    /// Errors beyond the budget, zero when within it.
    #[must_use]
    pub fn excess_errors(&self) -> usize {
        self.error_count.saturating_sub(self.budget.max_errors)
    }

    #[must_use]
    pub fn excess_warnings(&self) -> usize {
        self.warning_count.saturating_sub(self.budget.max_warnings)
    }

    /// Human-readable failure reason, `None` for a passing verdict.
    #[must_use]
    pub fn failure_message(&self) -> Option<String> {
        if self.passed {
            return None;
        }
        let mut parts = Vec::new();
        if self.excess_errors() > 0 {
            parts.push(format!(
                "{} errors found (max {})",
                self.error_count, self.budget.max_errors
            ));
        }
        if self.excess_warnings() > 0 {
            parts.push(format!(
                "{} warnings found (max {})",
                self.warning_count, self.budget.max_warnings
            ));
        }
        Some(parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdict(errors: usize, warnings: usize, max_errors: usize, max_warnings: usize) -> Verdict {
        let budget = ThresholdConfig {
            max_errors,
            max_warnings,
        };
        Verdict {
            passed: budget.allows(errors, warnings),
            error_count: errors,
            warning_count: warnings,
            budget,
        }
    }

    #[test]
    fn passing_verdict_has_no_failure_message() {
        assert!(verdict(1, 1, 1, 1).failure_message().is_none());
    }

    #[test]
    fn failure_message_names_exceeded_buckets_only() {
        let msg = verdict(0, 3, 0, 2).failure_message().unwrap();
        assert_eq!(msg, "3 warnings found (max 2)");
    }

    #[test]
    fn excess_is_saturating() {
        let v = verdict(0, 0, 5, 5);
        assert_eq!(v.excess_errors(), 0);
        assert_eq!(v.excess_warnings(), 0);
    }
}
