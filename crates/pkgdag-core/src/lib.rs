pub mod classifier;
pub mod graph;
pub mod graph_builder;
pub mod matcher;
pub mod package;

pub use pkgdag_error::{Error, ErrorKind, ErrorStatus, Result};

pub use classifier::{PackageClassifier, is_pseudo_import};
pub use graph::ImportGraph;
pub use graph_builder::{BuildStats, GraphBuildOption, GraphBuilder, build_import_graph};
pub use matcher::{Matcher, strip_vendor_prefix};
pub use package::{PackageInfo, PackageProvider, SeedLister};
