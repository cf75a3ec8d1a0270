// src/exit.rs
//! Standardized process exit codes for `inspecta`.
//!
//! Provides a stable contract for build scripts: non-zero means the
//! inspection run failed.

use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum InspectExit {
    /// Run completed and the verdict passed (or failures are ignored).
    Success = 0,
    /// Generic error (e.g. IO while reading inputs).
    Error = 1,
    /// Configuration or problem input could not be loaded.
    InvalidInput = 2,
    /// Error or warning budget exceeded.
    ThresholdExceeded = 3,
}

impl InspectExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for InspectExit {
    fn report(self) -> std::process::ExitCode {
        // Codes are small and non-negative by construction.
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}

impl From<anyhow::Result<InspectExit>> for InspectExit {
    fn from(res: anyhow::Result<InspectExit>) -> Self {
        match res {
            Ok(code) => code,
            Err(e) => {
                tracing::error!("{e:#}");
                let invalid = e
                    .downcast_ref::<crate::error::InspectError>()
                    .is_some_and(crate::error::InspectError::is_invalid_input);
                if invalid {
                    Self::InvalidInput
                } else {
                    Self::Error
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InspectError;
    use std::path::PathBuf;

    #[test]
    fn codes_are_stable() {
        assert_eq!(InspectExit::Success.code(), 0);
        assert_eq!(InspectExit::Error.code(), 1);
        assert_eq!(InspectExit::InvalidInput.code(), 2);
        assert_eq!(InspectExit::ThresholdExceeded.code(), 3);
    }

    #[test]
    fn config_error_maps_to_invalid_input() {
        let err = InspectError::Config {
            path: PathBuf::from("inspections.toml"),
            reason: "bad".into(),
        };
        let exit = InspectExit::from(Err::<InspectExit, _>(anyhow::Error::new(err)));
        assert_eq!(exit, InspectExit::InvalidInput);
    }

    #[test]
    fn other_errors_map_to_generic_error() {
        let exit = InspectExit::from(Err::<InspectExit, _>(anyhow::anyhow!("boom")));
        assert_eq!(exit, InspectExit::Error);
    }
}
