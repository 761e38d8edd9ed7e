// Factory Method: an interface for creating objects, where concrete creators
// decide which product type gets built.

use std::io::Write;

use crate::dispatch::Placeholder;
use crate::error::Result;

pub trait Product {
    fn operation(&self) -> Result<String>;
}

pub struct ConcreteProductA;

impl Product for ConcreteProductA {
    fn operation(&self) -> Result<String> {
        Ok("Result of ConcreteProductA".to_string())
    }
}

pub struct ConcreteProductB;

impl Product for ConcreteProductB {
    fn operation(&self) -> Result<String> {
        Ok("Result of ConcreteProductB".to_string())
    }
}

impl Product for Placeholder {
    fn operation(&self) -> Result<String> {
        Placeholder::fail("Product", "operation")
    }
}

// ============================================================================
// Creators
// ============================================================================

pub trait Creator {
    fn factory_method(&self) -> Result<Box<dyn Product>>;

    /// Business logic shared by every creator; only the product differs.
    fn some_operation(&self) -> Result<String> {
        let product = self.factory_method()?;
        Ok(format!(
            "Creator: The same creator's code has just worked with {}",
            product.operation()?
        ))
    }
}

pub struct ConcreteCreatorA;

impl Creator for ConcreteCreatorA {
    fn factory_method(&self) -> Result<Box<dyn Product>> {
        Ok(Box::new(ConcreteProductA))
    }
}

pub struct ConcreteCreatorB;

impl Creator for ConcreteCreatorB {
    fn factory_method(&self) -> Result<Box<dyn Product>> {
        Ok(Box::new(ConcreteProductB))
    }
}

impl Creator for Placeholder {
    fn factory_method(&self) -> Result<Box<dyn Product>> {
        Placeholder::fail("Creator", "factory_method")
    }
}

/// Client code only knows the `Creator` role.
pub fn client_code(creator: &dyn Creator, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{}", creator.some_operation()?)?;
    Ok(())
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "App: Launched with ConcreteCreatorA.")?;
    client_code(&ConcreteCreatorA, out)?;

    writeln!(out, "App: Launched with ConcreteCreatorB.")?;
    client_code(&ConcreteCreatorB, out)?;
    Ok(())
}
