//! In-memory package universe for pkgdag testing.
//!
//! Provides a [`SimpleProvider`] that serves package metadata and seed lists
//! from a table built in code. It is a regular crate rather than a `cfg(test)`
//! module so every pkgdag crate can use it from its own tests without spawning
//! `go`.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use pkgdag_core::{Error, PackageInfo, PackageProvider, Result, SeedLister};

#[derive(Debug, Clone)]
enum Entry {
    Package(PackageInfo),
    Broken(String),
}

/// A fixed set of packages plus the seeds a run starts from.
///
/// ```
/// use pkgdag_simple::SimpleProvider;
///
/// let universe = SimpleProvider::new()
///     .package("app", &["libA", "libB"])
///     .package("libA", &["libB"])
///     .package("libB", &[])
///     .seeds(&["app"]);
/// assert_eq!(universe.len(), 3);
/// ```
#[derive(Debug, Default)]
pub struct SimpleProvider {
    entries: BTreeMap<String, Entry>,
    seeds: Vec<String>,
    seed_error: Option<String>,
    calls: RefCell<HashMap<String, usize>>,
}

impl SimpleProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// A project package whose import path equals its identifier.
    pub fn package(self, name: &str, imports: &[&str]) -> Self {
        self.package_at(name, name, imports)
    }

    /// A package whose identifier resolves to a different import path,
    /// e.g. a vendored copy.
    pub fn package_at(mut self, name: &str, import_path: &str, imports: &[&str]) -> Self {
        let info = PackageInfo::new(import_path).with_imports(imports.iter().copied());
        self.entries.insert(name.to_string(), Entry::Package(info));
        self
    }

    /// A standard-library package.
    pub fn std_package(mut self, name: &str, imports: &[&str]) -> Self {
        let info = PackageInfo::new(name)
            .with_imports(imports.iter().copied())
            .with_standard(true);
        self.entries.insert(name.to_string(), Entry::Package(info));
        self
    }

    /// A package the provider fails to resolve with `message`.
    pub fn broken(mut self, name: &str, message: &str) -> Self {
        self.entries
            .insert(name.to_string(), Entry::Broken(message.to_string()));
        self
    }

    pub fn seeds(mut self, seeds: &[&str]) -> Self {
        self.seeds = seeds.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Make seed listing fail with `message`.
    pub fn failing_seeds(mut self, message: &str) -> Self {
        self.seed_error = Some(message.to_string());
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// How many times `package` was looked up.
    pub fn calls(&self, package: &str) -> usize {
        self.calls.borrow().get(package).copied().unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.calls.borrow().values().sum()
    }
}

impl PackageProvider for SimpleProvider {
    fn import(&self, package: &str, _src_dir: &Path) -> Result<PackageInfo> {
        *self
            .calls
            .borrow_mut()
            .entry(package.to_string())
            .or_default() += 1;

        match self.entries.get(package) {
            Some(Entry::Package(info)) => Ok(info.clone()),
            Some(Entry::Broken(message)) => Err(Error::provider_failed(package, message.as_str())
                .with_operation("simple::import")),
            None => Err(Error::package_not_found(package).with_operation("simple::import")),
        }
    }
}

/// Patterns follow `go list` conventions: `...` matches everything,
/// `prefix/...` matches `prefix` and everything below it, anything else is
/// an exact name. No patterns selects every seed.
impl SeedLister for SimpleProvider {
    fn list(&self, _root: &Path, patterns: &[String]) -> Result<Vec<String>> {
        if let Some(message) = &self.seed_error {
            return Err(Error::seed_list_failed(message.as_str()).with_operation("simple::list"));
        }
        if patterns.is_empty() {
            return Ok(self.seeds.clone());
        }
        Ok(self
            .seeds
            .iter()
            .filter(|seed| patterns.iter().any(|p| pattern_matches(p, seed)))
            .cloned()
            .collect())
    }
}

fn pattern_matches(pattern: &str, package: &str) -> bool {
    if pattern == "..." {
        return true;
    }
    match pattern.strip_suffix("/...") {
        Some(prefix) => {
            package == prefix
                || package
                    .strip_prefix(prefix)
                    .is_some_and(|rest| rest.starts_with('/'))
        }
        None => pattern == package,
    }
}
