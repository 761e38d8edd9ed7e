// Prototype: create new objects by copying an existing one.

use std::io::Write;

use crate::error::Result;

/// Hook run on every fresh copy taken from a [`Prototype`].
pub trait Initialize {
    fn init(&self, out: &mut dyn Write) -> Result<()>;
}

/// Holds the original value and hands out initialised, independent copies.
pub struct Prototype<T> {
    proto: T,
}

impl<T: Clone + Initialize> Prototype<T> {
    pub fn new(proto: T) -> Self {
        Self { proto }
    }

    pub fn clone_instance(&self, out: &mut dyn Write) -> Result<T> {
        let clone = self.proto.clone();
        clone.init(out)?;
        Ok(clone)
    }

    pub fn proto(&self) -> &T {
        &self.proto
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    pub wheels: u32,
}

impl Initialize for Car {
    fn init(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "This car has {} wheels", self.wheels)?;
        Ok(())
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let car = Car { wheels: 4 };
    let prototype = Prototype::new(car);
    let _car_clone = prototype.clone_instance(out)?;
    Ok(())
}
