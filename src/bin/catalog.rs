//! Runs every pattern scenario in catalog order, under colored headings.
//!
//! Run with: cargo run --bin catalog

use std::io::Write;

use colored::Colorize;
use design_patterns::catalog::{self, Category};
use design_patterns::{logging, Result};

fn main() -> Result<()> {
    logging::init();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "{}", "Design Patterns Catalog".bold())?;
    writeln!(out, "=======================")?;

    for category in [Category::Creational, Category::Structural, Category::Behavioral] {
        writeln!(out)?;
        writeln!(
            out,
            "{} {}",
            format!("{} Patterns:", category).bold().cyan(),
            category.summary().dimmed()
        )?;

        for entry in catalog::by_category(category) {
            writeln!(out)?;
            writeln!(out, "=== {} ===", entry.name.green())?;
            writeln!(out, "{}", entry.summary.dimmed())?;

            if let Err(err) = (entry.run)(&mut out) {
                tracing::error!(pattern = entry.name, error = %err, "scenario failed");
                writeln!(out, "{}", format!("{} failed: {}", entry.name, err).red())?;
                return Err(err);
            }
        }
    }

    writeln!(out)?;
    writeln!(out, "{}", "Described, not yet implemented:".yellow())?;
    for (name, summary) in catalog::DESCRIBED_ONLY {
        writeln!(out, "  - {}: {}", name, summary)?;
    }
    Ok(())
}
