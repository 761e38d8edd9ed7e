//! # Design Patterns Catalog
//!
//! Classic object-oriented design patterns, each written as a small, self-contained
//! module with a scripted scenario that prints a fixed transcript.
//!
//! ## Creational Patterns
//! - Singleton (`OnceLock`)
//! - Factory Method (trait with a provided template operation)
//! - Abstract Factory (product families, abstract instantiation refused)
//! - Builder (director + builder)
//! - Prototype (clone + init hook, and a registry of named prototypes)
//!
//! ## Structural Patterns
//! - Adapter
//! - Bridge (remote controls over devices)
//! - Composite (pre-order tree display)
//! - Decorator (stacked cost decorators)
//! - Facade
//!
//! ## Behavioral Patterns
//! - Observer
//! - Strategy (trait objects and closures)
//! - Command (with undo history)
//! - State
//! - Chain of Responsibility
//!
//! Every role is a trait. [`dispatch::Placeholder`] is the role-level stand-in
//! whose operations fail with [`error::PatternError::UnimplementedOperation`], and
//! [`dispatch::Target`] lets abstract-only roles refuse direct construction.
//!
//! Each scenario exposes `run(out: &mut dyn Write)`. Run one with:
//! ```bash
//! cargo run --bin p3_strategy
//! ```
//! or all of them in order with `cargo run --bin catalog`.

pub mod behavioral;
pub mod catalog;
pub mod creational;
pub mod dispatch;
pub mod error;
pub mod logging;
pub mod structural;

pub use error::{PatternError, Result};

/// Shared body of every scenario binary: logging on stderr, transcript on stdout.
pub fn run_main(run: catalog::Runner) -> Result<()> {
    logging::init();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&mut out)
}
