//! Renderers over a finished [`ImportGraph`].
//!
//! Every renderer takes the graph, a [`Matcher`] and an explicit output sink;
//! none of them mutate the graph.
//!
//! # Module Structure
//!
//! - [`collect`]: visible nodes and edges shared by the text and DOT views
//! - [`dot`]: DOT format utilities and the graph-description writer
//! - [`text`]: adjacency listing and flat listing
//! - [`image`]: rasterize the DOT description and show it in a viewer

pub mod collect;
pub mod dot;
pub mod image;
pub mod text;

pub use collect::{RenderNode, collect_nodes, visible_imports};
pub use dot::{DotBuilder, render_dot, write_dot};
pub use image::{ImageViewer, Rasterizer, show_graph};
pub use text::{write_flat, write_text};

pub use pkgdag_core::{ImportGraph, Matcher};
