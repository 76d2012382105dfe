use std::collections::HashSet;
use std::path::Path;

use pkgdag_core::{GraphBuildOption, GraphBuilder, ImportGraph, build_import_graph};
use pkgdag_simple::SimpleProvider;
use pretty_assertions::assert_eq;

fn build(universe: &SimpleProvider, seeds: &[&str], include_std: bool) -> ImportGraph {
    let option = GraphBuildOption::new().with_include_std(include_std);
    build_import_graph(universe, Path::new("."), seeds.iter().copied(), option)
}

fn node_set(graph: &ImportGraph) -> HashSet<String> {
    graph.nodes().iter().cloned().collect()
}

fn layered_universe() -> SimpleProvider {
    SimpleProvider::new()
        .package("example.com/app", &["example.com/app/db", "example.com/app/web", "fmt"])
        .package("example.com/app/db", &["example.com/app/model", "database/sql"])
        .package("example.com/app/web", &["example.com/app/model", "net/http", "fmt"])
        .package("example.com/app/model", &["time"])
        .std_package("fmt", &["io", "os"])
        .std_package("io", &[])
        .std_package("os", &["io"])
        .std_package("database/sql", &["io"])
        .std_package("net/http", &["io", "net"])
        .std_package("net", &["io", "os"])
        .std_package("time", &[])
}

#[test]
fn diamond_scenario_visits_in_documented_order() {
    let universe = SimpleProvider::new()
        .package("app", &["libA", "libB"])
        .package("libA", &["libB"])
        .package("libB", &[]);

    let graph = build(&universe, &["app"], false);

    assert_eq!(graph.nodes(), ["app", "libA", "libB"]);
    assert_eq!(graph.imports("app"), ["libA", "libB"]);
    assert_eq!(graph.imports("libA"), ["libB"]);
    assert!(graph.imports("libB").is_empty());
    assert_eq!(universe.calls("libB"), 1);
}

#[test]
fn cycles_terminate_with_each_node_once() {
    let universe = SimpleProvider::new()
        .package("a", &["b"])
        .package("b", &["c"])
        .package("c", &["a", "d"])
        .package("d", &["d", "b"]);

    let graph = build(&universe, &["a"], false);

    assert_eq!(graph.nodes(), ["a", "b", "c", "d"]);
    for package in ["a", "b", "c", "d"] {
        assert_eq!(universe.calls(package), 1, "{package} classified more than once");
    }
    // Cycles are preserved, not broken.
    assert_eq!(graph.imports("c"), ["a", "d"]);
    assert_eq!(graph.imports("d"), ["b", "d"]);
}

#[test]
fn rebuilding_is_idempotent() {
    let universe = layered_universe();
    let first = build(&universe, &["example.com/app"], false);
    let second = build(&universe, &["example.com/app"], false);
    assert_eq!(first, second);

    let with_std = build(&universe, &["example.com/app"], true);
    let again = build(&universe, &["example.com/app"], true);
    assert_eq!(with_std, again);
}

#[test]
fn seed_order_only_changes_visitation_order() {
    let universe = layered_universe();
    let forward = build(&universe, &["example.com/app/db", "example.com/app/web"], false);
    let reverse = build(&universe, &["example.com/app/web", "example.com/app/db"], false);

    assert_eq!(node_set(&forward), node_set(&reverse));
    for package in forward.nodes() {
        assert_eq!(forward.imports(package), reverse.imports(package));
    }
    assert_eq!(forward.nodes()[0], "example.com/app/db");
    assert_eq!(reverse.nodes()[0], "example.com/app/web");
}

#[test]
fn standard_library_toggle_only_adds_standard_nodes() {
    let universe = layered_universe();
    let without = build(&universe, &["example.com/app"], false);
    let with = build(&universe, &["example.com/app"], true);

    let without_nodes = node_set(&without);
    let with_nodes = node_set(&with);
    assert!(without_nodes.is_subset(&with_nodes));
    for added in with_nodes.difference(&without_nodes) {
        assert!(with.is_standard(added), "{added} added but not standard library");
    }
    for package in &without_nodes {
        assert!(!without.is_standard(package));
    }

    assert_eq!(
        without.nodes(),
        [
            "example.com/app",
            "example.com/app/db",
            "example.com/app/model",
            "example.com/app/web",
        ]
    );
    assert_eq!(with.len(), 11);
}

#[test]
fn excluded_standard_packages_are_classified_once() {
    let universe = layered_universe();
    let _ = build(&universe, &["example.com/app"], false);

    assert_eq!(universe.calls("fmt"), 1);
    // Only reached through other standard packages, which are never expanded.
    assert_eq!(universe.calls("io"), 0);
}

#[test]
fn unresolved_package_drops_its_exclusive_subtree() {
    let universe = SimpleProvider::new()
        .package("app", &["broken", "shared"])
        .broken("broken", "cannot find package")
        .package("only-via-broken", &[])
        .package("shared", &["leaf"])
        .package("leaf", &[]);

    let mut builder = GraphBuilder::new(&universe, Path::new("."), GraphBuildOption::new());
    builder.seed(["app"]);
    let (graph, stats) = builder.build();

    assert_eq!(graph.nodes(), ["app", "shared", "leaf"]);
    assert!(!graph.contains("broken"));
    assert!(!graph.contains("only-via-broken"));
    assert_eq!(universe.calls("only-via-broken"), 0);
    // The edge to the dropped package stays in the import list.
    assert_eq!(graph.imports("app"), ["broken", "shared"]);
    assert_eq!(stats.failed, 1);
}

#[test]
fn sibling_reachable_elsewhere_survives_failure() {
    let universe = SimpleProvider::new()
        .package("app", &["a", "b"])
        .broken("a", "no Go files")
        .package("b", &["c"])
        .package("c", &[]);

    let graph = build(&universe, &["app"], false);
    assert_eq!(graph.nodes(), ["app", "b", "c"]);
}

#[test]
fn broken_package_shared_by_importers_is_looked_up_once() {
    let universe = SimpleProvider::new()
        .package("app", &["a", "b", "gone"])
        .package("a", &["gone"])
        .package("b", &["gone"]);

    let mut builder = GraphBuilder::new(&universe, Path::new("."), GraphBuildOption::new());
    builder.seed(["app"]);
    let (graph, stats) = builder.build();

    assert_eq!(graph.nodes(), ["app", "a", "b"]);
    assert_eq!(universe.calls("gone"), 1);
    assert_eq!(stats.failed, 1);
    assert_eq!(graph.imports("b"), ["gone"]);
}

#[test]
fn vendored_identity_is_exact_string() {
    let universe = SimpleProvider::new()
        .package("app", &["app/vendor/github.com/y", "github.com/y"])
        .package_at("app/vendor/github.com/y", "app/vendor/github.com/y", &[])
        .package("github.com/y", &[]);

    let graph = build(&universe, &["app"], false);

    assert_eq!(graph.len(), 3);
    assert!(graph.is_vendored("app/vendor/github.com/y"));
    assert!(!graph.is_vendored("github.com/y"));
}

#[test]
fn canonical_path_is_recorded_per_node() {
    let universe = SimpleProvider::new()
        .package_at("./cmd/tool", "example.com/repo/cmd/tool", &["example.com/repo/lib"])
        .package("example.com/repo/lib", &[]);

    let graph = build(&universe, &["./cmd/tool"], false);
    assert_eq!(graph.canonical_path("./cmd/tool"), Some("example.com/repo/cmd/tool"));
    assert_eq!(graph.canonical_path("example.com/repo/lib"), Some("example.com/repo/lib"));
}
