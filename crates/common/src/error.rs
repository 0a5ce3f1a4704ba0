use std::time::Duration;

use thiserror::Error;

/// The one failure this layer surfaces to callers: everything else is
/// log-and-continue at the point of occurrence.
#[derive(Error, Debug)]
pub enum Error {
    /// A bounded wait on a session property expired.
    #[error("timed out after {waited:?} waiting for `{path}`")]
    Timeout { path: String, waited: Duration },
}

impl Error {
    #[must_use]
    pub fn timeout(path: impl Into<String>, waited: Duration) -> Self {
        Self::Timeout {
            path: path.into(),
            waited,
        }
    }

    /// Returns `true` for [`Error::Timeout`].
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
