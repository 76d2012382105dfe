//! Error status: which of the two failure tiers an error belongs to.

use std::fmt;

/// How a run reacts to an error.
///
/// - `Recoverable`: one package could not be resolved; log it, drop the node, keep going
/// - `Fatal`: the run cannot produce trustworthy output; abort with a non-zero exit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ErrorStatus {
    /// Affects a single package only.
    ///
    /// Examples: PackageNotFound, ProviderFailed, EmptyImportPath
    Recoverable,

    /// Aborts the whole run.
    ///
    /// Examples: InvalidPattern, SeedListFailed, RasterizeFailed
    #[default]
    Fatal,
}

impl ErrorStatus {
    /// Check if the traversal may continue past this error
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ErrorStatus::Recoverable)
    }

    /// Get status as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorStatus::Recoverable => "recoverable",
            ErrorStatus::Fatal => "fatal",
        }
    }
}

impl fmt::Display for ErrorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
