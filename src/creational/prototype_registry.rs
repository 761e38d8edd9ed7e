// Prototype (object copy): start every car from a default prototype and
// customise the copy. A registry keeps named prototypes to spawn from.

use std::collections::HashMap;
use std::fmt;
use std::io::Write;

use crate::error::{PatternError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrototypeCar {
    pub make: String,
    pub model: String,
    pub year: u16,
}

impl Default for PrototypeCar {
    fn default() -> Self {
        Self {
            make: "Default".to_string(),
            model: "Default".to_string(),
            year: 2000,
        }
    }
}

// Object-literal rendering, including the inherited clone slot.
impl fmt::Display for PrototypeCar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ make: '{}', model: '{}', year: {}, clone: [Function: clone] }}",
            self.make, self.model, self.year
        )
    }
}

/// Named prototypes, each cloned on demand.
#[derive(Debug, Default)]
pub struct PrototypeRegistry {
    prototypes: HashMap<String, PrototypeCar>,
}

impl PrototypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) a prototype under `name`.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        proto: PrototypeCar,
    ) -> Option<PrototypeCar> {
        self.prototypes.insert(name.into(), proto)
    }

    pub fn spawn(&self, name: &str) -> Result<PrototypeCar> {
        self.prototypes
            .get(name)
            .cloned()
            .ok_or_else(|| PatternError::invalid(format!("no prototype registered as '{}'", name)))
    }

    pub fn len(&self) -> usize {
        self.prototypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prototypes.is_empty()
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let mut registry = PrototypeRegistry::new();
    registry.register("car", PrototypeCar::default());

    let mut car1 = registry.spawn("car")?;
    car1.make = "Toyota".to_string();
    car1.model = "Corolla".to_string();
    car1.year = 2021;

    let mut car2 = registry.spawn("car")?;
    car2.make = "Honda".to_string();
    car2.model = "Civic".to_string();
    car2.year = 2022;

    writeln!(out, "{}", car1)?;
    writeln!(out, "{}", car2)?;
    Ok(())
}
