//! Prototype (object copy) pattern scenario.
//!
//! Run with: cargo run --bin p1_prototype_registry

use design_patterns::creational::prototype_registry;

fn main() -> design_patterns::Result<()> {
    design_patterns::run_main(prototype_registry::run)
}
