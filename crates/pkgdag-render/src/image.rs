//! Image output: DOT description -> rasterizer -> viewer.
//!
//! Process spawning lives behind [`Rasterizer`] and [`ImageViewer`] so the
//! pipeline can be driven with in-memory fakes.

use std::time::Instant;

use tracing::info;

use pkgdag_core::{ImportGraph, Matcher, Result};

use crate::dot::render_dot;

/// Turns a DOT description into image bytes.
pub trait Rasterizer {
    fn rasterize(&self, description: &str) -> Result<Vec<u8>>;
}

/// Presents image bytes to the user.
pub trait ImageViewer {
    fn display(&self, image: &[u8]) -> Result<()>;
}

/// Rasterize the DOT view of `graph` and hand the image to `viewer`.
///
/// Any failure is returned unchanged; there is no partial output to fall
/// back to.
pub fn show_graph(
    graph: &ImportGraph,
    matcher: &Matcher,
    rasterizer: &dyn Rasterizer,
    viewer: &dyn ImageViewer,
) -> Result<()> {
    let description = render_dot(graph, matcher);

    let rasterize_start = Instant::now();
    let image = rasterizer.rasterize(&description)?;
    info!(
        bytes = image.len(),
        "Rasterizing: {:.2}s",
        rasterize_start.elapsed().as_secs_f64()
    );

    viewer.display(&image)
}
