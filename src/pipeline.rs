//! Routes problems to the classifier, the report generators and the
//! threshold evaluator.
//!
//! `submit` may be called from several threads. Submissions are serialized
//! by an internal lock, so every generator sees problems in the order the
//! lock was acquired (completion order of the producers). Source fragments
//! are rendered before that lock is taken, so a tree held by the engine only
//! stalls submissions for its own file.

use parking_lot::Mutex;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::classify::SeverityClassifier;
use crate::reporting::{Fragments, ReportFormat, ReportGenerator};
use crate::threshold::{ThresholdConfig, ThresholdEvaluator};
use crate::types::{ProblemRecord, Verdict};

/// A report artifact that was written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artifact {
    pub format: ReportFormat,
    pub destination: String,
}

/// A generator whose artifact could not be written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SinkFailure {
    pub format: ReportFormat,
    pub error: String,
}

/// Result of a closed pipeline.
#[derive(Debug, Clone, Serialize)]
pub struct RunOutcome {
    pub verdict: Verdict,
    pub artifacts: Vec<Artifact>,
    /// Non-fatal: the verdict is valid even when reports failed.
    pub failures: Vec<SinkFailure>,
}

struct OpenState {
    generators: Vec<Box<dyn ReportGenerator>>,
    evaluator: ThresholdEvaluator,
    submitted: usize,
}

pub struct ReportPipeline {
    classifier: SeverityClassifier,
    state: Mutex<Option<OpenState>>,
}

impl ReportPipeline {
    #[must_use]
    pub fn new(
        classifier: SeverityClassifier,
        budget: ThresholdConfig,
        generators: Vec<Box<dyn ReportGenerator>>,
    ) -> Self {
        Self {
            classifier,
            state: Mutex::new(Some(OpenState {
                generators,
                evaluator: ThresholdEvaluator::new(budget),
                submitted: 0,
            })),
        }
    }

    /// Classifies the problem and hands it to every generator and the
    /// evaluator. The problem is dropped afterwards.
    ///
    /// # Panics
    /// Panics if called after [`ReportPipeline::finish`].
    pub fn submit(&self, problem: ProblemRecord) {
        let level = self.classifier.classify(problem.inspection_id());
        let fragments = Fragments::render(&problem, level);
        let mut guard = self.state.lock();
        let Some(state) = guard.as_mut() else {
            panic!("problem submitted after the pipeline was finished");
        };

        debug!(
            inspection = problem.inspection_id(),
            %level,
            location = %problem.location(),
            "problem submitted"
        );
        for generator in &mut state.generators {
            generator.report(&problem, level, &fragments);
        }
        state.evaluator.record(level);
        state.submitted += 1;
    }

    /// Closes the pipeline: finalizes every generator and returns the
    /// verdict. A failing generator is logged and recorded; the remaining
    /// generators and the verdict are unaffected.
    ///
    /// # Panics
    /// Panics if called twice.
    pub fn finish(&self) -> RunOutcome {
        let Some(state) = self.state.lock().take() else {
            panic!("pipeline finished twice");
        };

        let mut artifacts = Vec::new();
        let mut failures = Vec::new();
        for mut generator in state.generators {
            let format = generator.format();
            match generator.generate() {
                Ok(Some(destination)) => artifacts.push(Artifact {
                    format,
                    destination,
                }),
                Ok(None) => {}
                Err(e) => {
                    warn!(%format, error = %e, "failed to write report");
                    failures.push(SinkFailure {
                        format,
                        error: e.to_string(),
                    });
                }
            }
        }

        let verdict = state.evaluator.finalize();
        info!(
            problems = state.submitted,
            errors = verdict.error_count,
            warnings = verdict.warning_count,
            passed = verdict.passed,
            "inspection run finished"
        );
        RunOutcome {
            verdict,
            artifacts,
            failures,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{InspectError, Result};
    use crate::reporting::{MemorySink, ReportSink, TextReport};
    use crate::syntax::{share, MemTree, NodeRef, SharedTree, SourceTree};
    use std::sync::{mpsc, Arc};
    use std::thread;
    use std::time::Duration;

    struct FailingSink;

    impl ReportSink for FailingSink {
        fn write_artifact(&mut self, _bytes: &[u8]) -> Result<()> {
            Err(InspectError::io(
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
                "/readonly/report.txt",
            ))
        }

        fn describe(&self) -> String {
            "/readonly/report.txt".into()
        }
    }

    fn classifier() -> SeverityClassifier {
        SeverityClassifier::new(["E"], ["W"])
    }

    #[test]
    fn failing_sink_is_recorded_not_fatal() {
        let ok = MemorySink::new();
        let pipeline = ReportPipeline::new(
            classifier(),
            ThresholdConfig::default(),
            vec![
                Box::new(TextReport::new(Box::new(FailingSink))),
                Box::new(TextReport::new(Box::new(ok.clone()))),
            ],
        );
        pipeline.submit(ProblemRecord::new("W", "a.rs", "m"));
        let outcome = pipeline.finish();

        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.artifacts.len(), 1);
        assert!(outcome.verdict.passed);
        assert!(ok.contents().contains("[W] m"));
    }

    #[test]
    #[should_panic(expected = "after the pipeline was finished")]
    fn submit_after_finish_panics() {
        let pipeline = ReportPipeline::new(classifier(), ThresholdConfig::default(), vec![]);
        let _ = pipeline.finish();
        pipeline.submit(ProblemRecord::new("E", "a.rs", "late"));
    }

    #[test]
    #[should_panic(expected = "finished twice")]
    fn finish_twice_panics() {
        let pipeline = ReportPipeline::new(classifier(), ThresholdConfig::default(), vec![]);
        let _ = pipeline.finish();
        let _ = pipeline.finish();
    }

    fn single_leaf_tree(text: &str) -> (SharedTree, NodeRef) {
        let mut t = MemTree::new(1);
        let root = t.root();
        let stmt = t.add_node(root, 1);
        let leaf = t.add_leaf(stmt, 1, text);
        let tree = share(t);
        let anchor = NodeRef::new(Arc::clone(&tree), leaf);
        (tree, anchor)
    }

    #[test]
    fn write_locked_tree_does_not_stall_other_files() {
        let (a_tree, a_anchor) = single_leaf_tree("a");
        let (_b_tree, b_anchor) = single_leaf_tree("b");
        let text = MemorySink::new();
        let pipeline = Arc::new(ReportPipeline::new(
            classifier(),
            ThresholdConfig::default(),
            vec![Box::new(TextReport::new(Box::new(text.clone())))],
        ));

        let engine_lock = a_tree.write();
        let on_a = {
            let p = Arc::clone(&pipeline);
            thread::spawn(move || {
                p.submit(
                    ProblemRecord::new("E", "a.rs", "on a")
                        .with_line(1)
                        .with_anchor(a_anchor),
                );
            })
        };
        thread::sleep(Duration::from_millis(50));

        let (done, finished) = mpsc::channel();
        {
            let p = Arc::clone(&pipeline);
            thread::spawn(move || {
                p.submit(
                    ProblemRecord::new("W", "b.rs", "on b")
                        .with_line(1)
                        .with_anchor(b_anchor),
                );
                let _ = done.send(());
            });
        }
        let unblocked = finished.recv_timeout(Duration::from_secs(5)).is_ok();
        drop(engine_lock);
        on_a.join().unwrap();
        assert!(unblocked, "submission for b.rs waited on the lock held for a.rs");

        let outcome = pipeline.finish();
        assert_eq!(outcome.verdict.error_count, 1);
        assert_eq!(outcome.verdict.warning_count, 1);
        let report = text.contents();
        let b_at = report.find("on b").unwrap();
        let a_at = report.find("on a").unwrap();
        assert!(b_at < a_at);
    }

    #[test]
    fn concurrent_submissions_are_all_counted() {
        let pipeline = Arc::new(ReportPipeline::new(
            classifier(),
            ThresholdConfig::default(),
            vec![],
        ));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let p = Arc::clone(&pipeline);
                std::thread::spawn(move || {
                    for _ in 0..25 {
                        p.submit(ProblemRecord::new("E", "a.rs", "m"));
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        let outcome = pipeline.finish();
        assert_eq!(outcome.verdict.error_count, 100);
        assert!(!outcome.verdict.passed);
    }
}
