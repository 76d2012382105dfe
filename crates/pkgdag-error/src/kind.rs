//! Error kinds for pkgdag operations

use strum_macros::{Display, IntoStaticStr};

use crate::ErrorStatus;

/// The kind of error that occurred.
///
/// Callers match on `ErrorKind` (or on its [`ErrorStatus`]) to decide whether a
/// failure drops one package or ends the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display)]
#[non_exhaustive]
pub enum ErrorKind {
    // =========================================================================
    // General errors
    // =========================================================================
    /// Invalid argument passed on the command line or to a function
    InvalidArgument,

    /// The `--match` filter is not a valid regular expression
    InvalidPattern,

    // =========================================================================
    // Package resolution errors (per package)
    // =========================================================================
    /// The metadata provider could not locate the package
    PackageNotFound,

    /// The metadata provider reported an error for the package
    ProviderFailed,

    /// The provider succeeded but returned no canonical import path
    EmptyImportPath,

    /// The provider's output for one package could not be decoded
    DeserializationFailed,

    // =========================================================================
    // Run-level errors
    // =========================================================================
    /// The initial package list could not be obtained
    SeedListFailed,

    /// The external rasterizer failed to turn the graph into an image
    RasterizeFailed,

    /// The external image viewer failed
    ViewerFailed,

    // =========================================================================
    // File/IO errors
    // =========================================================================
    /// File not found
    FileNotFound,

    /// Permission denied
    PermissionDenied,

    /// IO operation failed
    IoFailed,
}

impl ErrorKind {
    /// Returns the error kind as a static string
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// The failure tier this kind belongs to by default
    pub fn status(&self) -> ErrorStatus {
        match self {
            ErrorKind::PackageNotFound
            | ErrorKind::ProviderFailed
            | ErrorKind::EmptyImportPath
            | ErrorKind::DeserializationFailed => ErrorStatus::Recoverable,
            _ => ErrorStatus::Fatal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_display() {
        assert_eq!(ErrorKind::InvalidPattern.to_string(), "InvalidPattern");
        assert_eq!(ErrorKind::PackageNotFound.as_str(), "PackageNotFound");
    }

    #[test]
    fn test_status() {
        assert!(ErrorKind::PackageNotFound.status().is_recoverable());
        assert!(ErrorKind::EmptyImportPath.status().is_recoverable());
        assert!(!ErrorKind::SeedListFailed.status().is_recoverable());
        assert!(!ErrorKind::RasterizeFailed.status().is_recoverable());
        assert!(!ErrorKind::InvalidPattern.status().is_recoverable());
    }
}
