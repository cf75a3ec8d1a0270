//! Problem stream produced by the analysis engine.
//!
//! The engine writes a JSON array of [`ProblemInput`] objects. Each source
//! file they mention is parsed once so problems can be anchored to syntax
//! nodes.

use parking_lot::RwLock;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::error::{InspectError, Result};
use crate::syntax::{NodeRef, SharedTree, TsTree};
use crate::types::{HighlightKind, ProblemRecord, Severity};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemInput {
    pub inspection_id: String,
    #[serde(default)]
    pub severity: Option<Severity>,
    /// Relative to the source root.
    pub file: PathBuf,
    #[serde(default)]
    pub line: Option<usize>,
    #[serde(default)]
    pub column: Option<usize>,
    pub message: String,
    #[serde(default)]
    pub highlight: HighlightKind,
}

/// Reads the problem stream from `path`.
///
/// # Errors
/// Returns error if the file is unreadable or not a JSON array of problems.
pub fn read_problems(path: &Path) -> Result<Vec<ProblemInput>> {
    let content = fs::read_to_string(path).map_err(|e| InspectError::Input {
        path: path.to_path_buf(),
        reason: format!("cannot read file: {e}"),
    })?;
    serde_json::from_str(&content).map_err(|e| InspectError::Input {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Parsed syntax trees for every file referenced by a problem stream.
#[derive(Default)]
pub struct SourceIndex {
    trees: HashMap<PathBuf, Arc<RwLock<TsTree>>>,
}

impl SourceIndex {
    /// Parses every distinct file under `root` in parallel. Files that
    /// cannot be read or parsed are logged and left without a tree.
    #[must_use]
    pub fn build(root: &Path, problems: &[ProblemInput]) -> Self {
        let files: BTreeSet<&PathBuf> = problems.iter().map(|p| &p.file).collect();
        let parsed: Vec<(PathBuf, TsTree)> = files
            .into_par_iter()
            .filter_map(|file| {
                let full = root.join(file);
                match TsTree::from_path(&full) {
                    Ok(Some(tree)) => {
                        if tree.has_syntax_errors() {
                            debug!(file = %file.display(), "source has syntax errors");
                        }
                        Some((file.clone(), tree))
                    }
                    Ok(None) => {
                        debug!(file = %file.display(), "no grammar for file");
                        None
                    }
                    Err(e) => {
                        warn!(file = %file.display(), error = %e, "source not parsed");
                        None
                    }
                }
            })
            .collect();

        Self {
            trees: parsed
                .into_iter()
                .map(|(file, tree)| (file, Arc::new(RwLock::new(tree))))
                .collect(),
        }
    }

    #[must_use]
    pub fn tree(&self, file: &Path) -> Option<SharedTree> {
        let tree = self.trees.get(file)?;
        Some(Arc::clone(tree) as SharedTree)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.trees.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }

    /// Turns an input entry into a record, anchoring it when the file was
    /// parsed and the position resolves to a node.
    #[must_use]
    pub fn resolve(&self, input: ProblemInput) -> ProblemRecord {
        let anchor = input.line.and_then(|line| {
            let tree = self.trees.get(&input.file)?;
            let node = tree.read().locate(line, input.column)?;
            Some(NodeRef::new(Arc::clone(tree) as SharedTree, node))
        });

        let mut record = ProblemRecord::new(input.inspection_id, input.file, input.message)
            .with_highlight(input.highlight);
        if let Some(severity) = input.severity {
            record = record.with_severity(severity);
        }
        if let Some(line) = input.line {
            record = record.with_line(line);
        }
        if let Some(anchor) = anchor {
            record = record.with_anchor(anchor);
        }
        record
    }
}
