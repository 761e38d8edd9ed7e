//! Abstract Factory pattern scenario.
//!
//! Run with: cargo run --bin p1_abstract_factory

use design_patterns::creational::abstract_factory;

fn main() -> design_patterns::Result<()> {
    design_patterns::run_main(abstract_factory::run)
}
