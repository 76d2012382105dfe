//! DOT format output for import graphs.

use std::collections::HashMap;
use std::fmt::Write as _;
use std::io::Write;

use tracing::debug;

use pkgdag_core::{ImportGraph, Matcher, Result};

use crate::collect::collect_nodes;

/// Name of the emitted digraph.
pub const GRAPH_NAME: &str = "pkgdag";

/// Escape special characters for DOT labels.
pub fn escape_label(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

/// Write indentation to output.
pub fn write_indent(output: &mut String, level: usize) {
    for _ in 0..level {
        output.push_str("    ");
    }
}

/// A DOT graph builder for constructing valid DOT output.
pub struct DotBuilder {
    output: String,
    indent: usize,
}

impl DotBuilder {
    /// Create a new DOT graph with the given name.
    pub fn new(name: &str) -> Self {
        let mut output = String::with_capacity(4096);
        let _ = writeln!(output, "digraph {name} {{");
        Self { output, indent: 1 }
    }

    /// Add a node with a numeric ID and a label, optionally filled.
    pub fn node(&mut self, id: usize, label: &str, filled: bool) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = write!(self.output, "{} [label=\"{}\"", id, escape_label(label));
        if filled {
            self.output.push_str(",style=filled");
        }
        self.output.push_str("];\n");
        self
    }

    /// Add an edge.
    pub fn edge(&mut self, from: usize, to: usize) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = writeln!(self.output, "{from} -> {to};");
        self
    }

    /// Finish building and return the DOT string.
    pub fn build(mut self) -> String {
        self.output.push_str("}\n");
        self.output
    }
}

/// Render the import graph to DOT.
///
/// Node IDs are positions in visitation order, so they are stable across
/// filters. A node is declared when it passes the matcher and has visible
/// imports; nodes whose import path runs through a vendor directory are
/// filled. Edges to imports that never became nodes have no ID and are left
/// out.
pub fn render_dot(graph: &ImportGraph, matcher: &Matcher) -> String {
    let indexes: HashMap<&str, usize> = graph.node_indexes();
    let mut builder = DotBuilder::new(GRAPH_NAME);

    for node in collect_nodes(graph, matcher) {
        builder.node(node.index, node.package, node.vendored);
        for import in node.imports {
            match indexes.get(import) {
                Some(&to) => {
                    builder.edge(node.index, to);
                }
                None => debug!(from = node.package, to = import, "edge target is not a node"),
            }
        }
    }

    builder.build()
}

/// Write the DOT description of the import graph to `out`.
pub fn write_dot(out: &mut dyn Write, graph: &ImportGraph, matcher: &Matcher) -> Result<()> {
    out.write_all(render_dot(graph, matcher).as_bytes())?;
    Ok(())
}
