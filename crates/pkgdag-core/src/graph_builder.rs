//! Worklist-driven construction of the import graph.
//!
//! The builder pops one package at a time from the front of its worklist,
//! classifies it, records it as a node and pushes its unvisited imports to
//! the front of the worklist. A package is classified at most once, so the
//! traversal terminates on any finite graph, cycles included. That holds for
//! failed lookups too: a package that could not be resolved is remembered
//! and skipped on every later encounter.
//!
//! Newly discovered imports are inserted ahead of everything already pending,
//! in their sorted order. For `app -> [libA, libB]` and `libA -> [libB]` the
//! visitation order is `app, libA, libB`.

use std::collections::{HashSet, VecDeque};
use std::path::Path;

use tracing::{debug, warn};

use crate::classifier::{PackageClassifier, is_pseudo_import};
use crate::graph::ImportGraph;
use crate::package::PackageProvider;

#[derive(Debug, Clone, Copy, Default)]
pub struct GraphBuildOption {
    /// Admit standard-library packages as graph nodes.
    pub include_std: bool,
}

impl GraphBuildOption {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_include_std(mut self, include_std: bool) -> Self {
        self.include_std = include_std;
        self
    }
}

/// Counters collected while the worklist drains.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Provider calls made.
    pub classified: usize,
    /// Provider calls that failed; those packages were dropped.
    pub failed: usize,
    /// Worklist entries discarded without a provider call.
    pub skipped: usize,
    /// Standard-library packages left out because inclusion is disabled.
    pub standard_dropped: usize,
}

pub struct GraphBuilder<'a> {
    classifier: PackageClassifier<'a>,
    src_dir: &'a Path,
    option: GraphBuildOption,
    graph: ImportGraph,
    worklist: VecDeque<String>,
    /// Packages whose lookup failed; never looked up again.
    failed: HashSet<String>,
    stats: BuildStats,
}

impl<'a> GraphBuilder<'a> {
    pub fn new(provider: &'a dyn PackageProvider, src_dir: &'a Path, option: GraphBuildOption) -> Self {
        Self {
            classifier: PackageClassifier::new(provider),
            src_dir,
            option,
            graph: ImportGraph::new(option.include_std),
            worklist: VecDeque::new(),
            failed: HashSet::new(),
            stats: BuildStats::default(),
        }
    }

    /// Append seed packages to the back of the worklist.
    pub fn seed<I, S>(&mut self, packages: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.worklist.extend(packages.into_iter().map(Into::into));
    }

    pub fn pending(&self) -> usize {
        self.worklist.len()
    }

    pub fn graph(&self) -> &ImportGraph {
        &self.graph
    }

    pub fn stats(&self) -> BuildStats {
        self.stats
    }

    /// Process the front of the worklist. Returns `false` once it is empty.
    pub fn step(&mut self) -> bool {
        let Some(package) = self.worklist.pop_front() else {
            return false;
        };

        if self.should_skip(&package) {
            self.stats.skipped += 1;
            return true;
        }

        self.stats.classified += 1;
        let info = match self.classifier.classify(&package, self.src_dir) {
            Ok(info) => info,
            Err(err) => {
                self.stats.failed += 1;
                warn!(package = %package, error = %err, "dropping unresolved package");
                self.failed.insert(package);
                return true;
            }
        };

        if info.standard {
            self.graph.mark_standard(&package);
            if !self.option.include_std {
                self.stats.standard_dropped += 1;
                debug!(package = %package, "standard library package left out");
                return true;
            }
        }

        let discovered: Vec<String> = info
            .imports
            .iter()
            .filter(|import| !self.should_skip(import))
            .cloned()
            .collect();

        debug!(
            package = %package,
            import_path = %info.import_path,
            imports = info.imports.len(),
            discovered = discovered.len(),
            "visited package"
        );

        self.graph.add_node(package, info.import_path, info.imports);
        for import in discovered.into_iter().rev() {
            self.worklist.push_front(import);
        }
        true
    }

    /// Drain the worklist and hand back the finished graph.
    pub fn build(mut self) -> (ImportGraph, BuildStats) {
        while self.step() {}
        (self.graph, self.stats)
    }

    fn should_skip(&self, package: &str) -> bool {
        if is_pseudo_import(package)
            || self.graph.contains(package)
            || self.failed.contains(package)
        {
            return true;
        }
        !self.option.include_std && self.graph.is_standard(package)
    }
}

/// Build the import graph reachable from `seeds`.
pub fn build_import_graph<I, S>(
    provider: &dyn PackageProvider,
    src_dir: &Path,
    seeds: I,
    option: GraphBuildOption,
) -> ImportGraph
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut builder = GraphBuilder::new(provider, src_dir, option);
    builder.seed(seeds);
    let (graph, stats) = builder.build();
    debug!(?stats, nodes = graph.len(), "import graph complete");
    graph
}
