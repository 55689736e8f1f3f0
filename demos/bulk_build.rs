//! Build a tree from a large random batch and probe a few regions.
//!
//! Run with: `cargo run --example bulk_build --release`

use glam::Vec2;
use quadpoint::{Aabb2D, QuadElement, QuadTree};
use rand::{Rng, SeedableRng, rngs::StdRng};

fn main() {
    let mut rng = StdRng::seed_from_u64(7);
    let bounds = Aabb2D::square(Vec2::ZERO, 256.0);
    let mut tree = QuadTree::new(bounds, 7, 32).expect("valid configuration");

    let elements: Vec<QuadElement<u32>> = (0..100_000)
        .map(|i| {
            let position = Vec2::new(
                rng.random_range(-256.0..256.0),
                rng.random_range(-256.0..256.0),
            );
            QuadElement::new(position, i)
        })
        .collect();
    tree.bulk_insert(elements).expect("points inside bounds");
    println!("built tree with {} points", tree.len());

    let mut results = Vec::new();
    for half in [4.0, 32.0, 256.0] {
        results.clear();
        tree.query_rect(Aabb2D::square(Vec2::ZERO, half), &mut results);
        println!("query half-extent {half:>5}: {} points", results.len());
    }
}
