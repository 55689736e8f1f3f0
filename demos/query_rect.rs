//! Rectangular range query over a small point set.
//!
//! Run with: `cargo run --example query_rect`

use glam::Vec2;
use quadpoint::{Aabb2D, QuadElement, QuadTree};

fn main() {
    let bounds = Aabb2D::square(Vec2::ZERO, 100.0);
    let mut tree = QuadTree::new(bounds, 6, 4).expect("valid configuration");

    let points = [
        ("station", Vec2::new(-80.0, 75.0)),
        ("depot", Vec2::new(-20.0, 10.0)),
        ("market", Vec2::new(5.0, -3.0)),
        ("harbor", Vec2::new(15.0, 12.0)),
        ("tower", Vec2::new(90.0, -90.0)),
    ];
    let elements = points
        .iter()
        .map(|&(name, position)| QuadElement::new(position, name))
        .collect();
    tree.bulk_insert(elements).expect("points inside bounds");

    let query = Aabb2D::square(Vec2::ZERO, 25.0);
    let mut results = Vec::new();
    tree.query_rect(query, &mut results);

    println!(
        "query [{:?}..{:?}] found {} of {} points:",
        query.min(),
        query.max(),
        results.len(),
        tree.len()
    );
    for element in &results {
        println!("  {} at {:?}", element.payload, element.position);
    }
}
