//! Build a registry by hand, toggle a category and print statistics.
//!
//! Run with: cargo run --example survey_stats

use rgn_vertices::{Category, GeodesicVertex, Registry, VertexStats};

fn print_stats(title: &str, stats: &VertexStats<'_>) {
    println!("{title}");
    println!("   Visible vertices: {}", stats.count_all);
    for (category, count) in &stats.count_per_category {
        println!("     - Order {category}: {count}");
    }
    match (stats.highest, stats.lowest) {
        (Some(h), Some(l)) => println!(
            "   Highest: {} ({:.0}m), lowest: {} ({:.0}m)\n",
            h.name(),
            h.altitude(),
            l.name(),
            l.altitude()
        ),
        _ => println!("   No visible altitude\n"),
    }
}

fn main() {
    let vertices = vec![
        GeodesicVertex::new("Monsanto", 38.7223, -9.1880, 227.0, "Pilar", Category::Order(1)),
        GeodesicVertex::new("Montejunto", 39.1740, -9.0577, 666.0, "Pilar", Category::Order(1)),
        GeodesicVertex::new("Palmela", 38.5690, -8.9010, 238.0, "Pilar", Category::Order(2)),
        GeodesicVertex::new("Caparica", 38.6420, -9.2150, 72.0, "Marco", Category::Order(3)),
        GeodesicVertex::new("Sobreda", 38.6010, -9.1890, f64::NAN, "Marco", Category::Order(3)),
        GeodesicVertex::new("Cabo Raso", 38.7100, -9.4860, 36.0, "Bolembreano", Category::Order(4)),
    ];

    let mut registry = Registry::new();
    registry.populate(vertices);

    println!("Geodesic Vertices\n");
    print_stats("1. All categories visible:", &registry.calculate_stats());

    registry.set_visibility(Category::Order(1), false);
    print_stats("2. Order 1 hidden:", &registry.calculate_stats());

    println!("3. Invalid vertices (whole dataset):");
    for vertex in registry.find_invalid() {
        let band = vertex.band();
        println!(
            "   {} (order {}) has no neighbour within {:?}..={:?} km",
            vertex.name(),
            vertex.category(),
            band.min_km,
            band.max_km
        );
    }

    let fct = (38.661, -9.2044);
    println!(
        "\n4. Vertices within 10 km of FCT: {}",
        registry.count_neighbours(fct.0, fct.1, 10.0)
    );
}
