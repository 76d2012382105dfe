//! pkgdag command-line interface.

pub mod exec;
pub mod golist;
pub mod options;
pub mod output;

use std::io::Write;
use std::time::Instant;

use tracing::info;

use pkgdag_core::{
    GraphBuildOption, GraphBuilder, ImportGraph, Matcher, PackageProvider, Result, SeedLister,
};
use pkgdag_render::{ImageViewer, Rasterizer};

pub use exec::{CommandViewer, GraphvizRasterizer};
pub use golist::GoList;
pub use options::{Cli, OutputFormat, PkgdagOptions, default_viewer};
pub use output::{open_sink, write_output};

/// The external tools a run talks to.
#[derive(Clone, Copy)]
pub struct Collaborators<'a> {
    pub seeds: &'a dyn SeedLister,
    pub provider: &'a dyn PackageProvider,
    pub rasterizer: &'a dyn Rasterizer,
    pub viewer: &'a dyn ImageViewer,
}

/// List seeds and build the import graph.
pub fn build_graph(opts: &PkgdagOptions, tools: &Collaborators<'_>) -> Result<ImportGraph> {
    let seed_start = Instant::now();
    let seeds = tools
        .seeds
        .list(&opts.dir, &opts.patterns)
        .map_err(|err| err.with_operation("pkgdag::build_graph"))?;
    info!(
        seeds = seeds.len(),
        "Seed listing: {:.2}s",
        seed_start.elapsed().as_secs_f64()
    );

    let graph_start = Instant::now();
    let option = GraphBuildOption::new().with_include_std(opts.include_std);
    let mut builder = GraphBuilder::new(tools.provider, &opts.dir, option);
    builder.seed(seeds);
    let (graph, stats) = builder.build();
    info!(
        nodes = graph.len(),
        classified = stats.classified,
        failed = stats.failed,
        skipped = stats.skipped,
        standard_dropped = stats.standard_dropped,
        "Graph building: {:.2}s",
        graph_start.elapsed().as_secs_f64()
    );

    Ok(graph)
}

/// Main entry point
///
/// The matcher is compiled before any package is resolved so a bad pattern
/// fails fast.
pub fn run_main(opts: &PkgdagOptions, tools: &Collaborators<'_>, out: &mut dyn Write) -> Result<()> {
    let matcher = Matcher::new(opts.filter.as_deref())?;
    output::check_output_target(opts.format, opts.output.as_deref());

    let graph = build_graph(opts, tools)?;
    write_output(opts.format, &graph, &matcher, tools.rasterizer, tools.viewer, out)
}
