use cluster_analysis::cluster::{connected_components, dbscan, optics, Clustering, Optics};
use cluster_analysis::space::{GraphSpace, MatrixCell, MatrixSpace, MetricSpace, SparseMatrixSpace};

/// Four points a, b, c, d with a–d (1) and d–c (1); b is isolated.
fn connect_adc<T, S: MetricSpace<T>>(points: &[T], space: &mut S) {
    space.add_connection(&points[0], &points[3], 1.0).unwrap();
    space.add_connection(&points[3], &points[2], 1.0).unwrap();
}

/// a–b (6), a–c (4), a–d (4).
fn connect_star<T, S: MetricSpace<T>>(points: &[T], space: &mut S) {
    space.add_connection(&points[0], &points[1], 6.0).unwrap();
    space.add_connection(&points[0], &points[2], 4.0).unwrap();
    space.add_connection(&points[0], &points[3], 4.0).unwrap();
}

fn assert_adc_then_b<T: Clone + PartialEq + std::fmt::Debug>(clusters: &[Vec<T>], points: &[T]) {
    assert_eq!(clusters.len(), 2);

    let first = &clusters[0];
    assert_eq!(first.len(), 3);
    assert!(first.contains(&points[0]));
    assert!(first.contains(&points[2]));
    assert!(first.contains(&points[3]));

    assert_eq!(clusters[1], vec![points[1].clone()]);
}

#[test]
fn connected_components_graph() {
    let points = ["a", "b", "c", "d"];
    let mut space = GraphSpace::new();
    connect_adc(&points, &mut space);

    let clusters = connected_components(&points, &space, f32::INFINITY).unwrap();
    assert_adc_then_b(&clusters, &points);
}

#[test]
fn connected_components_sparse_matrix() {
    let points: Vec<MatrixCell> = (0..4).map(MatrixCell::new).collect();
    let mut space = SparseMatrixSpace::new();
    connect_adc(&points, &mut space);

    let clusters = connected_components(&points, &space, f32::INFINITY).unwrap();
    assert_adc_then_b(&clusters, &points);
}

#[test]
fn connected_components_dense_matrix() {
    let points: Vec<MatrixCell> = (0..4).map(MatrixCell::new).collect();
    let mut space = MatrixSpace::new(4).unwrap();
    connect_adc(&points, &mut space);

    let clusters = connected_components(&points, &space, f32::INFINITY).unwrap();
    assert_adc_then_b(&clusters, &points);
}

#[test]
fn dbscan_min_points_2() {
    let points = ["a", "b", "c", "d"];
    let mut space = GraphSpace::new();
    connect_star(&points, &mut space);

    let clusters = dbscan(&points, &space, 5.0, 2).unwrap();
    assert_eq!(clusters.len(), 1);

    let cluster = &clusters[0];
    assert_eq!(cluster.len(), 3);
    assert!(cluster.contains(&"a"));
    assert!(cluster.contains(&"c"));
    assert!(cluster.contains(&"d"));
}

#[test]
fn dbscan_min_points_3() {
    let points = ["a", "b", "c", "d"];
    let mut space = GraphSpace::new();
    connect_star(&points, &mut space);

    let clusters = dbscan(&points, &space, 5.0, 3).unwrap();
    assert!(clusters.is_empty());
}

#[test]
fn dbscan_sparse_matrix_matches_graph() {
    let cells: Vec<MatrixCell> = (0..4).map(MatrixCell::new).collect();
    let mut sparse = SparseMatrixSpace::new();
    connect_star(&cells, &mut sparse);

    let ids = [0usize, 1, 2, 3];
    let mut graph = GraphSpace::new();
    connect_star(&ids, &mut graph);

    let from_sparse = dbscan(&cells, &sparse, 5.0, 2).unwrap();
    let from_graph = dbscan(&ids, &graph, 5.0, 2).unwrap();
    let from_sparse: Vec<Vec<usize>> = from_sparse
        .into_iter()
        .map(|c| c.into_iter().map(|cell| cell.value()).collect())
        .collect();
    assert_eq!(from_sparse, from_graph);
}

#[test]
fn optics_range_7() {
    let points = ["a", "b", "c", "d", "e"];
    let mut space = GraphSpace::new();
    connect_star(&points, &mut space);
    space.add_connection(&"a", &"e", 20.0).unwrap();

    let clusters = optics(&points, &space, 3, 7.0).unwrap();
    assert_eq!(clusters.len(), 1);

    let cluster = &clusters[0];
    assert_eq!(cluster.len(), 4);
    for p in ["a", "b", "c", "d"] {
        assert!(cluster.contains(&p));
    }
    assert!(!cluster.contains(&"e"));

    let labels = Optics::new(3, 7.0)
        .fit_predict_with_noise(&points, &space)
        .unwrap();
    assert_eq!(labels, vec![Some(0), Some(0), Some(0), Some(0), None]);
}
