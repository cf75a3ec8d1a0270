use parking_lot::Mutex;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use crate::error::{InspectError, Result};

/// Destination of a finished report artifact.
pub trait ReportSink: Send {
    /// # Errors
    /// Returns error if the artifact cannot be written.
    fn write_artifact(&mut self, bytes: &[u8]) -> Result<()>;

    fn describe(&self) -> String;
}

/// Writes the artifact to a file, creating missing parent directories.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ReportSink for FileSink {
    fn write_artifact(&mut self, bytes: &[u8]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| InspectError::io(e, parent))?;
        }
        fs::write(&self.path, bytes).map_err(|e| InspectError::io(e, &self.path))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Keeps the artifact in memory. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buf.lock()).into_owned()
    }
}

impl ReportSink for MemorySink {
    fn write_artifact(&mut self, bytes: &[u8]) -> Result<()> {
        let mut buf = self.buf.lock();
        buf.clear();
        buf.extend_from_slice(bytes);
        Ok(())
    }

    fn describe(&self) -> String {
        "<memory>".to_string()
    }
}
