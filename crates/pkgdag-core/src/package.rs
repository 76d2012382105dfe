//! Package metadata and the external collaborators that supply it.

use std::path::Path;

use crate::Result;

/// Metadata for one package as reported by a [`PackageProvider`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageInfo {
    /// Fully-qualified import path the identifier resolved to.
    pub import_path: String,
    /// Identifiers of the packages this one imports directly.
    pub imports: Vec<String>,
    /// Whether the package ships with the toolchain's standard library.
    pub standard: bool,
}

impl PackageInfo {
    pub fn new(import_path: impl Into<String>) -> Self {
        Self {
            import_path: import_path.into(),
            ..Self::default()
        }
    }

    pub fn with_imports<I, S>(mut self, imports: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.imports = imports.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_standard(mut self, standard: bool) -> Self {
        self.standard = standard;
        self
    }
}

/// Resolves a package identifier to its metadata.
///
/// Implementations may shell out, read a cache, or serve a fixed table. An
/// `Err` means the package could not be resolved; the graph builder drops it
/// and moves on.
pub trait PackageProvider {
    fn import(&self, package: &str, src_dir: &Path) -> Result<PackageInfo>;
}

/// Lists the packages a traversal starts from.
pub trait SeedLister {
    fn list(&self, root: &Path, patterns: &[String]) -> Result<Vec<String>>;
}
