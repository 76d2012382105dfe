//! Command-line options.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use pkgdag_core::Result;

/// How the finished graph is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Sorted package names, one per line
    #[default]
    Flat,
    /// Adjacency listing: each package followed by its imports
    Text,
    /// Graphviz DOT description
    Dot,
    /// Rasterize the DOT description with Graphviz and open it in a viewer
    Svg,
}

/// The command that opens an image file on this platform.
pub fn default_viewer() -> &'static str {
    if cfg!(target_os = "macos") {
        "open"
    } else if cfg!(target_os = "windows") {
        "explorer"
    } else {
        "xdg-open"
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "pkgdag",
    about = "pkgdag: walk the package import graph of a Go codebase",
    version
)]
pub struct Cli {
    /// Package patterns passed to `go list` (default: the package in the current directory)
    #[arg(value_name = "PATTERNS")]
    pub patterns: Vec<String>,

    /// Include standard library packages
    #[arg(long = "std", default_value_t = false)]
    pub include_std: bool,

    /// Output format ('dot' and 'svg' need Graphviz for viewing)
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Flat)]
    pub format: OutputFormat,

    /// Command used to open the SVG image (may include arguments)
    #[arg(long = "svg-viewer", value_name = "CMD", default_value = default_viewer())]
    pub svg_viewer: String,

    /// Show only packages matching this regular expression
    #[arg(short = 'm', long = "match", value_name = "REGEX")]
    pub filter: Option<String>,

    /// Directory to resolve packages from (default: current directory)
    #[arg(short = 'C', long = "dir", value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Write output to a file instead of stdout (not used with 'svg')
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// The go executable
    #[arg(long = "go", value_name = "PATH", default_value = "go")]
    pub go: String,

    /// The Graphviz executable used for 'svg'
    #[arg(long = "dot", value_name = "PATH", default_value = "dot")]
    pub dot: String,
}

/// Options for one pkgdag run, independent of how they were parsed.
#[derive(Debug, Clone, Default)]
pub struct PkgdagOptions {
    pub dir: PathBuf,
    pub patterns: Vec<String>,
    pub include_std: bool,
    pub format: OutputFormat,
    pub filter: Option<String>,
    pub output: Option<PathBuf>,
}

impl PkgdagOptions {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            ..Self::default()
        }
    }

    pub fn with_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.patterns = patterns.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_include_std(mut self, include_std: bool) -> Self {
        self.include_std = include_std;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_filter(mut self, filter: Option<&str>) -> Self {
        self.filter = filter.map(str::to_string);
        self
    }
}

impl Cli {
    /// Resolve defaults that depend on the environment.
    pub fn to_options(&self) -> Result<PkgdagOptions> {
        let dir = match &self.dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir()?,
        };
        Ok(PkgdagOptions {
            dir,
            patterns: self.patterns.clone(),
            include_std: self.include_std,
            format: self.format,
            filter: self.filter.clone(),
            output: self.output.clone(),
        })
    }
}
