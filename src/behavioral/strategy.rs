// Strategy: a family of interchangeable algorithms, picked at runtime.

use std::io::Write;

use crate::dispatch::Placeholder;
use crate::error::{PatternError, Result};

pub trait Strategy {
    fn execute(&self, a: f64, b: f64) -> Result<f64>;

    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
            .rsplit("::")
            .next()
            .unwrap_or("Strategy")
    }
}

pub struct AddStrategy;

impl Strategy for AddStrategy {
    fn execute(&self, a: f64, b: f64) -> Result<f64> {
        Ok(a + b)
    }
}

pub struct SubtractStrategy;

impl Strategy for SubtractStrategy {
    fn execute(&self, a: f64, b: f64) -> Result<f64> {
        Ok(a - b)
    }
}

pub struct MultiplyStrategy;

impl Strategy for MultiplyStrategy {
    fn execute(&self, a: f64, b: f64) -> Result<f64> {
        Ok(a * b)
    }
}

pub struct DivideStrategy;

impl Strategy for DivideStrategy {
    fn execute(&self, a: f64, b: f64) -> Result<f64> {
        if b == 0.0 {
            return Err(PatternError::invalid("Division by zero!"));
        }
        Ok(a / b)
    }
}

impl Strategy for Placeholder {
    fn execute(&self, _a: f64, _b: f64) -> Result<f64> {
        Placeholder::fail("Strategy", "execute")
    }
}

// Closures are strategies too
impl<F> Strategy for F
where
    F: Fn(f64, f64) -> Result<f64>,
{
    fn execute(&self, a: f64, b: f64) -> Result<f64> {
        self(a, b)
    }

    fn name(&self) -> &'static str {
        "closure"
    }
}

/// Context that delegates arithmetic to whichever strategy is current.
pub struct Calculator {
    strategy: Box<dyn Strategy>,
}

impl Calculator {
    pub fn new(strategy: Box<dyn Strategy>) -> Self {
        Self { strategy }
    }

    /// Applies from the next `execute_strategy` call on.
    pub fn set_strategy(&mut self, strategy: Box<dyn Strategy>) {
        tracing::debug!(from = self.strategy.name(), to = strategy.name(), "strategy swapped");
        self.strategy = strategy;
    }

    pub fn execute_strategy(&self, a: f64, b: f64) -> Result<f64> {
        self.strategy.execute(a, b)
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let mut calculator = Calculator::new(Box::new(AddStrategy));
    writeln!(out, "{}", calculator.execute_strategy(5.0, 3.0)?)?;

    calculator.set_strategy(Box::new(SubtractStrategy));
    writeln!(out, "{}", calculator.execute_strategy(5.0, 3.0)?)?;

    calculator.set_strategy(Box::new(MultiplyStrategy));
    writeln!(out, "{}", calculator.execute_strategy(5.0, 3.0)?)?;

    calculator.set_strategy(Box::new(DivideStrategy));
    writeln!(out, "{}", calculator.execute_strategy(6.0, 3.0)?)?;
    Ok(())
}
