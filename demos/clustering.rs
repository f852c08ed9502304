//! Connected components, DBSCAN, and OPTICS on a small weighted graph.

use cluster_analysis::cluster::{Clustering, ConnectedComponents, Dbscan, Optics};
use cluster_analysis::space::{GraphSpace, MetricSpace};
use cluster_analysis::NOISE;

fn main() -> cluster_analysis::Result<()> {
    // Two tight groups joined by one long edge, plus a loner.
    let points = ["a", "b", "c", "d", "e", "f", "g", "h"];
    let mut space = GraphSpace::new();
    for (x, y, d) in [
        ("a", "b", 1.0),
        ("a", "c", 1.5),
        ("b", "c", 1.0),
        ("d", "e", 1.0),
        ("d", "f", 1.2),
        ("e", "f", 0.8),
        ("c", "d", 8.0),
        ("f", "g", 6.0),
    ] {
        space.add_connection(&x, &y, d)?;
    }

    print_labels(
        "Connected components (range=inf)",
        &points,
        &ConnectedComponents::new().fit_predict(&points, &space)?,
    );
    print_labels(
        "Connected components (range=2)",
        &points,
        &ConnectedComponents::new()
            .with_range(2.0)
            .fit_predict(&points, &space)?,
    );
    print_labels(
        "DBSCAN (range=2, min_points=2)",
        &points,
        &Dbscan::new(2.0, 2).fit_predict(&points, &space)?,
    );

    let optics = Optics::new(2, 2.0);
    let plot = optics.reachability_plot(&points, &space)?;
    println!("\n=== OPTICS reachability (min_points=2, range=2) ===");
    for &i in plot.order() {
        println!("  {} => {:>5.1}", points[i], plot.reachability()[i]);
    }
    print_labels(
        "OPTICS (min_points=2, range=2)",
        &points,
        &optics.fit_predict(&points, &space)?,
    );

    Ok(())
}

fn print_labels(title: &str, points: &[&str], labels: &[usize]) {
    println!("\n=== {} ===", title);
    for (point, label) in points.iter().zip(labels) {
        let tag = if *label == NOISE {
            "NOISE".to_string()
        } else {
            format!("cluster {}", label)
        };
        println!("  {} => {}", point, tag);
    }
}
