use serde::Serialize;

use crate::types::{Severity, Verdict};

/// Error and warning budgets for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThresholdConfig {
    pub max_errors: usize,
    /// [`ThresholdConfig::UNBOUNDED`] disables the warning budget.
    pub max_warnings: usize,
}

impl ThresholdConfig {
    pub const UNBOUNDED: usize = usize::MAX;

    #[must_use]
    pub fn allows(&self, errors: usize, warnings: usize) -> bool {
        errors <= self.max_errors && warnings <= self.max_warnings
    }
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            max_errors: 0,
            max_warnings: Self::UNBOUNDED,
        }
    }
}

/// Counts classified problems and decides the build verdict.
///
/// `finalize` consumes the evaluator, so a verdict can only be read once the
/// stream is complete.
#[derive(Debug)]
pub struct ThresholdEvaluator {
    budget: ThresholdConfig,
    errors: usize,
    warnings: usize,
}

impl ThresholdEvaluator {
    #[must_use]
    pub fn new(budget: ThresholdConfig) -> Self {
        Self {
            budget,
            errors: 0,
            warnings: 0,
        }
    }

    pub fn record(&mut self, severity: Severity) {
        match severity {
            Severity::Error => self.errors += 1,
            Severity::Warning => self.warnings += 1,
            Severity::WeakWarning | Severity::Information => {}
        }
    }

    #[must_use]
    pub fn finalize(self) -> Verdict {
        Verdict {
            passed: self.budget.allows(self.errors, self.warnings),
            error_count: self.errors,
            warning_count: self.warnings,
            budget: self.budget,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(max_errors: usize, max_warnings: usize, levels: &[Severity]) -> Verdict {
        let mut eval = ThresholdEvaluator::new(ThresholdConfig {
            max_errors,
            max_warnings,
        });
        for level in levels {
            eval.record(*level);
        }
        eval.finalize()
    }

    #[test]
    fn empty_run_passes() {
        let v = run(0, 0, &[]);
        assert!(v.passed);
        assert_eq!(v.error_count, 0);
        assert_eq!(v.warning_count, 0);
    }

    #[test]
    fn counts_equal_to_budget_pass() {
        let v = run(2, 1, &[Severity::Error, Severity::Error, Severity::Warning]);
        assert!(v.passed);
    }

    #[test]
    fn one_error_over_budget_fails() {
        let v = run(1, 10, &[Severity::Error, Severity::Error]);
        assert!(!v.passed);
        assert_eq!(v.error_count, 2);
    }

    #[test]
    fn single_warning_with_zero_budget_fails() {
        let v = run(0, 0, &[Severity::Warning]);
        assert!(!v.passed);
        assert_eq!(v.warning_count, 1);
    }

    #[test]
    fn low_levels_never_count() {
        let v = run(
            0,
            0,
            &[Severity::WeakWarning, Severity::Information, Severity::Information],
        );
        assert!(v.passed);
        assert_eq!(v.error_count + v.warning_count, 0);
    }

    #[test]
    fn default_budget_tolerates_any_warnings() {
        let mut eval = ThresholdEvaluator::new(ThresholdConfig::default());
        for _ in 0..1000 {
            eval.record(Severity::Warning);
        }
        assert!(eval.finalize().passed);
    }

    #[test]
    fn verdict_matches_budget_check_on_a_grid() {
        for e in 0..4 {
            for w in 0..4 {
                let mut levels = vec![Severity::Error; e];
                levels.extend(std::iter::repeat(Severity::Warning).take(w));
                let v = run(2, 2, &levels);
                assert_eq!(v.passed, e <= 2 && w <= 2, "e={e} w={w}");
            }
        }
    }
}
