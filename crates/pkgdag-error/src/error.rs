//! The main Error type for pkgdag.

use crate::{ErrorKind, ErrorStatus};
use std::fmt;

/// Unified error type for all pkgdag operations.
pub struct Error {
    kind: ErrorKind,
    message: String,
    status: ErrorStatus,
    operation: &'static str,
    context: Vec<(&'static str, String)>,
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl Error {
    /// Create a new error with the given kind and message.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: kind.status(),
            operation: "",
            context: Vec::new(),
            source: None,
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the error status
    pub fn status(&self) -> ErrorStatus {
        self.status
    }

    /// Get the operation that caused this error
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    /// Get the context key-value pairs
    pub fn context(&self) -> &[(&'static str, String)] {
        &self.context
    }

    /// Get the source error (if any).
    pub fn source_ref(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.source.as_ref().map(|e| e.as_ref())
    }

    /// Override the status derived from the kind.
    pub fn with_status(mut self, status: ErrorStatus) -> Self {
        self.status = status;
        self
    }

    /// Set the operation that caused this error.
    ///
    /// If an operation was already set, the previous one is moved to context
    /// as "called" to preserve the call chain.
    pub fn with_operation(mut self, operation: &'static str) -> Self {
        if !self.operation.is_empty() {
            self.context.push(("called", self.operation.to_string()));
        }
        self.operation = operation;
        self
    }

    /// Add context to the error
    pub fn with_context(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.context.push((key, value.into()));
        self
    }

    /// Set the source error.
    ///
    /// # Panics (debug only)
    /// Panics in debug mode if source was already set.
    pub fn set_source<E>(mut self, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        debug_assert!(self.source.is_none(), "source error already set");
        self.source = Some(Box::new(source));
        self
    }

    /// Check if the traversal may continue past this error
    pub fn is_recoverable(&self) -> bool {
        self.status.is_recoverable()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.kind, self.status)?;

        if !self.operation.is_empty() {
            write!(f, " at {}", self.operation)?;
        }

        if !self.context.is_empty() {
            write!(f, ", context {{ ")?;
            for (i, (key, value)) in self.context.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}: {}", key, value)?;
            }
            write!(f, " }}")?;
        }

        if !self.message.is_empty() {
            write!(f, " => {}", self.message)?;
        }

        Ok(())
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({}) at {}", self.kind, self.status, self.operation)?;

        if !self.message.is_empty() {
            writeln!(f)?;
            writeln!(f, "    Message: {}", self.message)?;
        }

        if !self.context.is_empty() {
            writeln!(f)?;
            writeln!(f, "    Context:")?;
            for (key, value) in &self.context {
                writeln!(f, "        {}: {}", key, value)?;
            }
        }

        if let Some(source) = &self.source {
            writeln!(f)?;
            writeln!(f, "    Source: {:?}", source)?;
        }

        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => ErrorKind::FileNotFound,
            std::io::ErrorKind::PermissionDenied => ErrorKind::PermissionDenied,
            _ => ErrorKind::IoFailed,
        };
        Error::new(kind, err.to_string())
            .with_operation("io")
            .set_source(err)
    }
}

impl Error {
    /// Create an InvalidArgument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, message)
    }

    /// Create an InvalidPattern error
    pub fn invalid_pattern(pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        Self::new(
            ErrorKind::InvalidPattern,
            format!("invalid match pattern '{}'", pattern),
        )
        .with_context("pattern", pattern)
    }

    /// Create a PackageNotFound error
    pub fn package_not_found(package: impl Into<String>) -> Self {
        let package = package.into();
        Self::new(
            ErrorKind::PackageNotFound,
            format!("package '{}' not found", package),
        )
        .with_context("package", package)
    }

    /// Create a ProviderFailed error
    pub fn provider_failed(package: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ProviderFailed, message).with_context("package", package)
    }

    /// Create an EmptyImportPath error
    pub fn empty_import_path(package: impl Into<String>) -> Self {
        let package = package.into();
        Self::new(
            ErrorKind::EmptyImportPath,
            format!("package '{}' has empty import path", package),
        )
        .with_context("package", package)
    }

    /// Create a SeedListFailed error
    pub fn seed_list_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::SeedListFailed, message)
    }

    /// Create a RasterizeFailed error
    pub fn rasterize_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RasterizeFailed, message)
    }

    /// Create a ViewerFailed error
    pub fn viewer_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ViewerFailed, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = Error::new(ErrorKind::ProviderFailed, "import cycle not allowed");
        assert_eq!(err.kind(), ErrorKind::ProviderFailed);
        assert_eq!(err.message(), "import cycle not allowed");
        assert_eq!(err.status(), ErrorStatus::Recoverable);
    }

    #[test]
    fn test_error_with_context() {
        let err = Error::new(ErrorKind::PackageNotFound, "not found")
            .with_operation("golist::import")
            .with_context("package", "example.com/a")
            .with_context("dir", "/src");

        assert_eq!(err.operation(), "golist::import");
        assert_eq!(err.context().len(), 2);
        assert_eq!(err.context()[0], ("package", "example.com/a".to_string()));
    }

    #[test]
    fn test_operation_chaining() {
        let err = Error::new(ErrorKind::ProviderFailed, "failed")
            .with_operation("golist::import")
            .with_operation("classifier::classify");

        assert_eq!(err.operation(), "classifier::classify");
        assert_eq!(err.context().len(), 1);
        assert_eq!(err.context()[0], ("called", "golist::import".to_string()));
    }

    #[test]
    fn test_status_override() {
        let err = Error::package_not_found("example.com/seed").with_status(ErrorStatus::Fatal);
        assert!(!err.is_recoverable());
        assert!(Error::empty_import_path("x").is_recoverable());
        assert!(!Error::seed_list_failed("go list exited 1").is_recoverable());
    }

    #[test]
    fn test_display() {
        let err = Error::new(ErrorKind::RasterizeFailed, "dot exited with status 1")
            .with_operation("graphviz::rasterize")
            .with_context("program", "dot");

        let display = format!("{}", err);
        assert!(display.contains("RasterizeFailed"));
        assert!(display.contains("fatal"));
        assert!(display.contains("graphviz::rasterize"));
        assert!(display.contains("program: dot"));
        assert!(display.ends_with("=> dot exited with status 1"));
    }

    #[test]
    fn test_convenience_constructors() {
        let err = Error::package_not_found("example.com/missing");
        assert_eq!(err.kind(), ErrorKind::PackageNotFound);
        assert!(err.message().contains("example.com/missing"));

        let err = Error::invalid_pattern("(");
        assert_eq!(err.kind(), ErrorKind::InvalidPattern);
        assert_eq!(err.context()[0], ("pattern", "(".to_string()));
    }

    #[test]
    fn test_io_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: Error = io_err.into();

        assert_eq!(err.kind(), ErrorKind::FileNotFound);
        assert!(err.source_ref().is_some());
        assert!(!err.is_recoverable());
    }
}
