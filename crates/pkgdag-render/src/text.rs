//! Plain-text views: the adjacency listing and the flat package list.

use std::io::Write;

use pkgdag_core::{ImportGraph, Matcher, Result};

use crate::collect::collect_nodes;

/// Write the adjacency listing.
///
/// ```text
/// app <= example.com/app
///     libA
///     libB
/// ```
///
/// Nodes appear in visitation order; nodes without visible imports are omitted.
pub fn write_text(out: &mut dyn Write, graph: &ImportGraph, matcher: &Matcher) -> Result<()> {
    for node in collect_nodes(graph, matcher) {
        writeln!(out, "{} <= {}", node.package, node.canonical_path)?;
        for import in &node.imports {
            writeln!(out, "    {import}")?;
        }
    }
    Ok(())
}

/// Write every node that passes the matcher, sorted, one per line.
pub fn write_flat(out: &mut dyn Write, graph: &ImportGraph, matcher: &Matcher) -> Result<()> {
    let mut packages: Vec<&str> = graph
        .nodes()
        .iter()
        .map(String::as_str)
        .filter(|package| matcher.is_match(package))
        .collect();
    packages.sort_unstable();

    for package in packages {
        writeln!(out, "{package}")?;
    }
    Ok(())
}
