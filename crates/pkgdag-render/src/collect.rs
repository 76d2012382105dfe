//! Node and edge collection from an ImportGraph.

use pkgdag_core::{ImportGraph, Matcher};

/// A node that survives filtering, with the edges a renderer should draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderNode<'g> {
    /// Position in visitation order.
    pub index: usize,
    pub package: &'g str,
    pub canonical_path: &'g str,
    pub vendored: bool,
    /// Visible imports, in the node's sorted import order.
    pub imports: Vec<&'g str>,
}

/// Imports of `package` that a renderer should show.
///
/// An import is visible when it passes the matcher and, unless the graph was
/// built with standard-library packages included, is not standard library.
/// Imports that never became nodes (unresolved packages) are kept.
pub fn visible_imports<'g>(graph: &'g ImportGraph, package: &str, matcher: &Matcher) -> Vec<&'g str> {
    graph
        .imports(package)
        .iter()
        .map(String::as_str)
        .filter(|import| graph.include_std() || !graph.is_standard(import))
        .filter(|import| matcher.is_match(import))
        .collect()
}

/// Collect nodes for the adjacency and DOT views.
///
/// Includes nodes that pass the matcher and have at least one visible import,
/// in visitation order. Leaves are left out; they show up as edge targets.
pub fn collect_nodes<'g>(graph: &'g ImportGraph, matcher: &Matcher) -> Vec<RenderNode<'g>> {
    graph
        .nodes()
        .iter()
        .enumerate()
        .filter(|(_, package)| matcher.is_match(package))
        .filter_map(|(index, package)| {
            let imports = visible_imports(graph, package, matcher);
            if imports.is_empty() {
                return None;
            }
            Some(RenderNode {
                index,
                package: package.as_str(),
                canonical_path: graph.canonical_path(package).unwrap_or(package.as_str()),
                vendored: graph.is_vendored(package),
                imports,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use pkgdag_core::{GraphBuildOption, build_import_graph};
    use pkgdag_simple::SimpleProvider;

    use super::*;

    fn graph(include_std: bool) -> ImportGraph {
        let universe = SimpleProvider::new()
            .package("app", &["fmt", "lib", "missing"])
            .package_at("lib", "app/vendor/lib", &["fmt"])
            .std_package("fmt", &[]);
        let option = GraphBuildOption::new().with_include_std(include_std);
        build_import_graph(&universe, Path::new("."), ["app"], option)
    }

    #[test]
    fn test_standard_imports_hidden_unless_included() {
        let g = graph(false);
        let m = Matcher::match_all();
        assert_eq!(visible_imports(&g, "app", &m), ["lib", "missing"]);
        assert!(visible_imports(&g, "lib", &m).is_empty());

        let g = graph(true);
        assert_eq!(visible_imports(&g, "app", &m), ["fmt", "lib", "missing"]);
        assert_eq!(visible_imports(&g, "lib", &m), ["fmt"]);
    }

    #[test]
    fn test_collect_skips_nodes_without_visible_edges() {
        let g = graph(false);
        let nodes = collect_nodes(&g, &Matcher::match_all());
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].package, "app");
        assert_eq!(nodes[0].index, 0);
        assert!(!nodes[0].vendored);
    }

    #[test]
    fn test_collect_marks_vendored() {
        let g = graph(true);
        let nodes = collect_nodes(&g, &Matcher::match_all());
        let lib = nodes.iter().find(|n| n.package == "lib").unwrap();
        assert!(lib.vendored);
        assert_eq!(lib.canonical_path, "app/vendor/lib");
        // fmt is a node here, visited before lib.
        assert_eq!(lib.index, 2);
    }

    #[test]
    fn test_matcher_filters_nodes_and_edges() {
        let g = graph(true);
        let m = Matcher::new(Some("^(app|fmt)$")).unwrap();
        let nodes = collect_nodes(&g, &m);
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].imports, ["fmt"]);
    }
}
