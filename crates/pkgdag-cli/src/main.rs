use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pkgdag::{Cli, Collaborators, CommandViewer, GoList, GraphvizRasterizer, open_sink, run_main};
use pkgdag_core::Result;

pub fn run(args: Cli) -> Result<()> {
    let opts = args.to_options()?;

    let go = GoList::new(&args.go);
    let rasterizer = GraphvizRasterizer::new(&args.dot);
    let viewer = CommandViewer::new(&args.svg_viewer);
    let tools = Collaborators {
        seeds: &go,
        provider: &go,
        rasterizer: &rasterizer,
        viewer: &viewer,
    };

    let mut out = open_sink(opts.output.as_deref())?;
    run_main(&opts, &tools, &mut out)
}

pub fn main() -> ExitCode {
    let args = Cli::parse();

    // Unresolved packages are reported at warn level, so keep warn on by default.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
