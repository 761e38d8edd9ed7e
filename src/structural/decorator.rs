// Decorator: add behavior to one object at runtime by wrapping it.

use std::io::Write;

use crate::error::Result;

pub trait Beverage {
    fn cost(&self) -> f64;
    fn description(&self) -> String;
}

pub struct Coffee;

impl Beverage for Coffee {
    fn cost(&self) -> f64 {
        5.0
    }

    fn description(&self) -> String {
        "Coffee".to_string()
    }
}

pub struct MilkDecorator {
    inner: Box<dyn Beverage>,
}

impl MilkDecorator {
    pub fn new(inner: Box<dyn Beverage>) -> Self {
        Self { inner }
    }
}

impl Beverage for MilkDecorator {
    fn cost(&self) -> f64 {
        self.inner.cost() + 1.0
    }

    fn description(&self) -> String {
        format!("{}, milk", self.inner.description())
    }
}

pub struct SugarDecorator {
    inner: Box<dyn Beverage>,
}

impl SugarDecorator {
    pub fn new(inner: Box<dyn Beverage>) -> Self {
        Self { inner }
    }
}

impl Beverage for SugarDecorator {
    fn cost(&self) -> f64 {
        self.inner.cost() + 0.5
    }

    fn description(&self) -> String {
        format!("{}, sugar", self.inner.description())
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let mut my_coffee: Box<dyn Beverage> = Box::new(Coffee);
    writeln!(out, "{}", my_coffee.cost())?;

    my_coffee = Box::new(MilkDecorator::new(my_coffee));
    writeln!(out, "{}", my_coffee.cost())?;

    my_coffee = Box::new(SugarDecorator::new(my_coffee));
    writeln!(out, "{}", my_coffee.cost())?;

    tracing::debug!(order = %my_coffee.description(), "decorated beverage");
    Ok(())
}
