//! Load the sample dataset from JSON and list what the map would show.
//!
//! Run with: cargo run --example load_dataset [path/to/rgn.json]

use std::path::PathBuf;

use rgn_vertices::{loader, MapConfig, Registry};

fn main() {
    let config = MapConfig {
        resources_dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/demos/data")),
        ..MapConfig::default()
    };
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| config.dataset_path());

    let registry = match loader::load_registry(&path) {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("{e}; no vertices will be visible");
            Registry::new()
        }
    };

    println!("Loaded {} vertices from {}", registry.len(), path.display());
    if let Some(bounds) = registry.bounds() {
        let c = bounds.center();
        println!("Fit view around {:.4}, {:.4}\n", c.latitude, c.longitude);
    }

    for group in registry.groups() {
        let icon = group
            .category()
            .icon_key()
            .map(|key| config.icon_path(&key).display().to_string())
            .unwrap_or_else(|| "default marker".to_string());
        println!("Order {} ({} vertices, {})", group.category(), group.count(), icon);
        for vertex in group.members() {
            let p = vertex.position();
            let status = if vertex.is_valid(group) { "" } else { "  [invalid]" };
            println!("   {:<16} {:>9.4} {:>9.4}{}", vertex.name(), p.latitude, p.longitude, status);
        }
    }
}
