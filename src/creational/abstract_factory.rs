// Abstract Factory: create families of related products without naming
// their concrete types.

use std::fmt;
use std::io::Write;

use crate::dispatch::{Placeholder, Target};
use crate::error::Result;

/// Product family a concrete factory builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    One,
    Two,
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::One => write!(f, "1"),
            Family::Two => write!(f, "2"),
        }
    }
}

// ============================================================================
// Products
// ============================================================================

#[derive(Debug, PartialEq, Eq)]
pub struct ProductA {
    family: Family,
}

impl ProductA {
    /// Build a product of the given family. `Target::Role` is the abstract
    /// `AbstractProductA` and is refused.
    pub fn new(target: Target<Family>, out: &mut dyn Write) -> Result<Self> {
        let family = target.concrete("AbstractProductA")?;
        writeln!(out, "ProductA{} created", family)?;
        Ok(Self { family })
    }

    pub fn family(&self) -> Family {
        self.family
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ProductB {
    family: Family,
}

impl ProductB {
    pub fn new(target: Target<Family>, out: &mut dyn Write) -> Result<Self> {
        let family = target.concrete("AbstractProductB")?;
        writeln!(out, "ProductB{} created", family)?;
        Ok(Self { family })
    }

    pub fn family(&self) -> Family {
        self.family
    }
}

// ============================================================================
// Factories
// ============================================================================

pub trait AbstractFactory {
    fn create_product_a(&self, out: &mut dyn Write) -> Result<ProductA>;
    fn create_product_b(&self, out: &mut dyn Write) -> Result<ProductB>;
}

pub struct ConcreteFactory1;

impl AbstractFactory for ConcreteFactory1 {
    fn create_product_a(&self, out: &mut dyn Write) -> Result<ProductA> {
        ProductA::new(Target::Variant(Family::One), out)
    }

    fn create_product_b(&self, out: &mut dyn Write) -> Result<ProductB> {
        ProductB::new(Target::Variant(Family::One), out)
    }
}

pub struct ConcreteFactory2;

impl AbstractFactory for ConcreteFactory2 {
    fn create_product_a(&self, out: &mut dyn Write) -> Result<ProductA> {
        ProductA::new(Target::Variant(Family::Two), out)
    }

    fn create_product_b(&self, out: &mut dyn Write) -> Result<ProductB> {
        ProductB::new(Target::Variant(Family::Two), out)
    }
}

impl AbstractFactory for Placeholder {
    fn create_product_a(&self, _out: &mut dyn Write) -> Result<ProductA> {
        Placeholder::fail("AbstractFactory", "create_product_a")
    }

    fn create_product_b(&self, _out: &mut dyn Write) -> Result<ProductB> {
        Placeholder::fail("AbstractFactory", "create_product_b")
    }
}

/// Client code builds one product of each kind; the factory fixes the family.
pub fn client_code(
    factory: &dyn AbstractFactory,
    out: &mut dyn Write,
) -> Result<(ProductA, ProductB)> {
    let product_a = factory.create_product_a(out)?;
    let product_b = factory.create_product_b(out)?;
    Ok((product_a, product_b))
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Client: Testing client code with the first factory type:")?;
    client_code(&ConcreteFactory1, out)?;

    writeln!(
        out,
        "Client: Testing the same client code with the second factory type:"
    )?;
    client_code(&ConcreteFactory2, out)?;
    Ok(())
}
