//! Output sinks and renderer dispatch.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use tracing::{info, warn};

use pkgdag_core::{Error, ImportGraph, Matcher, Result};
use pkgdag_render::{ImageViewer, Rasterizer, show_graph, write_dot, write_flat, write_text};

use crate::options::OutputFormat;

/// Open the sink text output goes to: `path` if given, stdout otherwise.
pub fn open_sink(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path).map_err(|err| {
                Error::from(err)
                    .with_operation("output::open_sink")
                    .with_context("path", path.display().to_string())
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}

/// Render `graph` in `format`, then flush `out`.
pub fn write_output(
    format: OutputFormat,
    graph: &ImportGraph,
    matcher: &Matcher,
    rasterizer: &dyn Rasterizer,
    viewer: &dyn ImageViewer,
    out: &mut dyn Write,
) -> Result<()> {
    let render_start = Instant::now();
    match format {
        OutputFormat::Flat => write_flat(out, graph, matcher)?,
        OutputFormat::Text => write_text(out, graph, matcher)?,
        OutputFormat::Dot => write_dot(out, graph, matcher)?,
        OutputFormat::Svg => show_graph(graph, matcher, rasterizer, viewer)?,
    }
    out.flush()?;

    info!(
        ?format,
        "Rendering: {:.2}s",
        render_start.elapsed().as_secs_f64()
    );
    Ok(())
}

/// Warn about options that have no effect for `format`.
pub(crate) fn check_output_target(format: OutputFormat, output: Option<&Path>) {
    if format == OutputFormat::Svg
        && let Some(path) = output
    {
        warn!(path = %path.display(), "--output is ignored for svg output");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_sink_creates_parent_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no-such-dir").join("out.txt");
        let err = open_sink(Some(&missing)).err().unwrap();
        assert_eq!(err.operation(), "output::open_sink");
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_file_sink_writes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        {
            let mut sink = open_sink(Some(&path)).unwrap();
            sink.write_all(b"libA\n").unwrap();
            sink.flush().unwrap();
        }
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "libA\n");
    }
}
