//! The import graph produced by a traversal.

use std::collections::{HashMap, HashSet};

const VENDOR_SEGMENT: &str = "/vendor/";

/// Directed package import graph.
///
/// Nodes are package identifiers compared by exact string equality. Node
/// order is the order in which the builder visited them, which is also the
/// order every renderer walks them in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportGraph {
    /// Sorted, deduplicated direct imports per node.
    imports: HashMap<String, Vec<String>>,
    /// Resolved import path per node.
    canonical_paths: HashMap<String, String>,
    /// Every identifier classified as standard library, node or not.
    standard: HashSet<String>,
    order: Vec<String>,
    include_std: bool,
}

impl ImportGraph {
    pub fn new(include_std: bool) -> Self {
        Self {
            include_std,
            ..Self::default()
        }
    }

    /// Whether standard-library packages were admitted as nodes.
    pub fn include_std(&self) -> bool {
        self.include_std
    }

    /// Nodes in visitation order.
    pub fn nodes(&self) -> &[String] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, package: &str) -> bool {
        self.imports.contains_key(package)
    }

    /// Direct imports of `package`, or an empty slice for unknown packages.
    pub fn imports(&self, package: &str) -> &[String] {
        self.imports.get(package).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn canonical_path(&self, package: &str) -> Option<&str> {
        self.canonical_paths.get(package).map(String::as_str)
    }

    pub fn is_standard(&self, package: &str) -> bool {
        self.standard.contains(package)
    }

    /// Standard-library identifiers seen during traversal, sorted.
    pub fn standard_packages(&self) -> Vec<&str> {
        let mut packages: Vec<&str> = self.standard.iter().map(String::as_str).collect();
        packages.sort_unstable();
        packages
    }

    /// A node is vendored when its resolved path runs through a vendor directory.
    pub fn is_vendored(&self, package: &str) -> bool {
        self.canonical_path(package)
            .is_some_and(|path| path.contains(VENDOR_SEGMENT))
    }

    /// Map each node to its position in visitation order.
    pub fn node_indexes(&self) -> HashMap<&str, usize> {
        self.order
            .iter()
            .enumerate()
            .map(|(i, package)| (package.as_str(), i))
            .collect()
    }

    pub(crate) fn mark_standard(&mut self, package: &str) {
        self.standard.insert(package.to_string());
    }

    /// Add a node. `imports` must already be sorted and deduplicated.
    pub(crate) fn add_node(&mut self, package: String, canonical_path: String, imports: Vec<String>) {
        debug_assert!(!self.contains(&package), "package '{package}' visited twice");
        debug_assert!(imports.windows(2).all(|w| w[0] < w[1]), "imports not sorted");

        self.canonical_paths.insert(package.clone(), canonical_path);
        self.imports.insert(package.clone(), imports);
        self.order.push(package);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ImportGraph {
        let mut graph = ImportGraph::new(false);
        graph.add_node(
            "app".to_string(),
            "example.com/app".to_string(),
            vec!["fmt".to_string(), "lib".to_string()],
        );
        graph.add_node(
            "lib".to_string(),
            "example.com/app/vendor/lib".to_string(),
            Vec::new(),
        );
        graph.mark_standard("fmt");
        graph.mark_standard("fmt");
        graph
    }

    #[test]
    fn test_nodes_keep_visitation_order() {
        let graph = sample();
        assert_eq!(graph.nodes(), ["app", "lib"]);
        assert_eq!(graph.len(), 2);
        assert_eq!(graph.node_indexes()["lib"], 1);
    }

    #[test]
    fn test_lookups() {
        let graph = sample();
        assert!(graph.contains("app"));
        assert!(!graph.contains("fmt"));
        assert_eq!(graph.imports("app"), ["fmt", "lib"]);
        assert!(graph.imports("missing").is_empty());
        assert_eq!(graph.canonical_path("app"), Some("example.com/app"));
        assert_eq!(graph.canonical_path("fmt"), None);
    }

    #[test]
    fn test_standard_membership_is_independent_of_nodes() {
        let graph = sample();
        assert!(graph.is_standard("fmt"));
        assert!(!graph.is_standard("app"));
        assert_eq!(graph.standard_packages(), ["fmt"]);
    }

    #[test]
    fn test_vendored_nodes() {
        let graph = sample();
        assert!(graph.is_vendored("lib"));
        assert!(!graph.is_vendored("app"));
        assert!(!graph.is_vendored("missing"));
    }
}
