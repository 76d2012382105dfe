//! Per-package classification on top of a [`PackageProvider`].

use std::path::Path;

use crate::package::{PackageInfo, PackageProvider};
use crate::{Error, Result};

/// Prefix of the golang.org/x packages mirrored inside the Go source tree.
const GOROOT_MIRROR_PREFIX: &str = "golang_org/x/";

/// Identifiers that never name a real source package: the cgo placeholder
/// `import "C"` and the toolchain's internal mirror of golang.org/x.
pub fn is_pseudo_import(package: &str) -> bool {
    package == "C" || package.starts_with(GOROOT_MIRROR_PREFIX)
}

/// Wraps a provider and normalizes what it returns.
///
/// A successful classification always has a non-empty import path and a
/// sorted, deduplicated import list.
#[derive(Clone, Copy)]
pub struct PackageClassifier<'a> {
    provider: &'a dyn PackageProvider,
}

impl<'a> PackageClassifier<'a> {
    pub fn new(provider: &'a dyn PackageProvider) -> Self {
        Self { provider }
    }

    pub fn classify(&self, package: &str, src_dir: &Path) -> Result<PackageInfo> {
        let mut info = self
            .provider
            .import(package, src_dir)
            .map_err(|err| err.with_operation("classifier::classify"))?;

        if info.import_path.is_empty() {
            return Err(Error::empty_import_path(package).with_operation("classifier::classify"));
        }

        info.imports.sort();
        info.imports.dedup();
        Ok(info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    struct Fixed(Result<PackageInfo>);

    impl PackageProvider for Fixed {
        fn import(&self, package: &str, _src_dir: &Path) -> Result<PackageInfo> {
            match &self.0 {
                Ok(info) => Ok(info.clone()),
                Err(err) => Err(Error::new(err.kind(), err.message()).with_context("package", package)),
            }
        }
    }

    #[test]
    fn test_pseudo_imports() {
        assert!(is_pseudo_import("C"));
        assert!(is_pseudo_import("golang_org/x/net/http2/hpack"));
        assert!(!is_pseudo_import("c"));
        assert!(!is_pseudo_import("golang.org/x/net"));
        assert!(!is_pseudo_import("Cgo"));
    }

    #[test]
    fn test_imports_sorted_and_deduplicated() {
        let provider = Fixed(Ok(PackageInfo::new("app").with_imports(["os", "fmt", "os", "app/lib"])));
        let info = PackageClassifier::new(&provider)
            .classify("app", Path::new("."))
            .unwrap();
        assert_eq!(info.imports, vec!["app/lib", "fmt", "os"]);
        assert_eq!(info.import_path, "app");
    }

    #[test]
    fn test_empty_import_path_is_an_error() {
        let provider = Fixed(Ok(PackageInfo::new("").with_imports(["fmt"])));
        let err = PackageClassifier::new(&provider)
            .classify("weird", Path::new("."))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyImportPath);
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_provider_error_is_propagated() {
        let provider = Fixed(Err(Error::package_not_found("missing")));
        let err = PackageClassifier::new(&provider)
            .classify("missing", Path::new("."))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PackageNotFound);
        assert_eq!(err.operation(), "classifier::classify");
    }
}
