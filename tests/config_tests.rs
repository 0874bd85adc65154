//! Integration tests for configuration loading

use algokit::config::Config;
use algokit::graph::{dijkstra_with_options, Cost, Direction, Graph};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempdir().unwrap();
    let config = Config::load(&dir.path().join("algokit.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_drives_traversal() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("algokit.toml");
    fs::write(&path, "[dijkstra]\ndirection = \"both\"\nmax_cost = 5.0\n").unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.dijkstra.direction, Direction::Both);

    let graph = Graph::from_triples([(1, 2, 2.0), (3, 2, 3.0), (3, 4, 1.0)]).unwrap();
    let paths = dijkstra_with_options(&graph, 1, &config.dijkstra).unwrap();
    assert_eq!(paths.distance(3), Some(Cost::from(5)));
    assert_eq!(paths.distance(4), Some(Cost::INFINITY));
}

#[test]
fn test_invalid_file_is_invalid_argument() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("algokit.toml");
    fs::write(&path, "[dijkstra\n").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert_eq!(err.error_type(), "invalid_argument");
    assert_eq!(err.context(), "config");
}
