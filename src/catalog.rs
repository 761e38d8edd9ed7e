//! Ordered index of every runnable pattern, grouped by category.

use std::fmt;
use std::io::Write;

use crate::error::Result;
use crate::{behavioral, creational, structural};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Creational,
    Structural,
    Behavioral,
}

impl Category {
    pub fn summary(&self) -> &'static str {
        match self {
            Category::Creational => "object creation mechanisms suited to the situation",
            Category::Structural => "composing objects into larger structures",
            Category::Behavioral => "algorithms and the assignment of responsibilities",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Creational => "Creational",
            Category::Structural => "Structural",
            Category::Behavioral => "Behavioral",
        };
        write!(f, "{}", name)
    }
}

pub type Runner = fn(&mut dyn Write) -> Result<()>;

pub struct Entry {
    pub category: Category,
    pub name: &'static str,
    /// Binary that runs this entry on its own.
    pub bin: &'static str,
    pub summary: &'static str,
    pub run: Runner,
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("category", &self.category)
            .field("name", &self.name)
            .field("bin", &self.bin)
            .finish()
    }
}

const ENTRIES: &[Entry] = &[
    Entry {
        category: Category::Creational,
        name: "Singleton",
        bin: "p1_singleton",
        summary: "Ensures a type has only one instance and provides a global access point to it.",
        run: creational::singleton::run,
    },
    Entry {
        category: Category::Creational,
        name: "Factory Method",
        bin: "p1_factory_method",
        summary: "Defines an interface for creating objects; implementors decide which type gets built.",
        run: creational::factory_method::run,
    },
    Entry {
        category: Category::Creational,
        name: "Abstract Factory",
        bin: "p1_abstract_factory",
        summary: "Creates families of related objects without naming their concrete types.",
        run: creational::abstract_factory::run,
    },
    Entry {
        category: Category::Creational,
        name: "Builder",
        bin: "p1_builder",
        summary: "Separates the construction of a complex object from its representation.",
        run: creational::builder::run,
    },
    Entry {
        category: Category::Creational,
        name: "Prototype",
        bin: "p1_prototype",
        summary: "Creates new objects by copying an existing object, the prototype.",
        run: creational::prototype::run,
    },
    Entry {
        category: Category::Creational,
        name: "Prototype (object copy)",
        bin: "p1_prototype_registry",
        summary: "Spawns independent copies of a registered prototype and customises them.",
        run: creational::prototype_registry::run,
    },
    Entry {
        category: Category::Structural,
        name: "Adapter",
        bin: "p2_adapter",
        summary: "Allows incompatible interfaces to work together.",
        run: structural::adapter::run,
    },
    Entry {
        category: Category::Structural,
        name: "Bridge",
        bin: "p2_bridge",
        summary: "Separates abstraction from implementation so both can vary independently.",
        run: structural::bridge::run,
    },
    Entry {
        category: Category::Structural,
        name: "Composite",
        bin: "p2_composite",
        summary: "Composes objects into trees to represent part-whole hierarchies.",
        run: structural::composite::run,
    },
    Entry {
        category: Category::Structural,
        name: "Decorator",
        bin: "p2_decorator",
        summary: "Adds behavior to an individual object dynamically.",
        run: structural::decorator::run,
    },
    Entry {
        category: Category::Structural,
        name: "Facade",
        bin: "p2_facade",
        summary: "Provides a simplified interface to a complex set of subsystems.",
        run: structural::facade::run,
    },
    Entry {
        category: Category::Behavioral,
        name: "Observer",
        bin: "p3_observer",
        summary: "Notifies every dependent when the subject changes.",
        run: behavioral::observer::run,
    },
    Entry {
        category: Category::Behavioral,
        name: "Strategy",
        bin: "p3_strategy",
        summary: "Encapsulates interchangeable algorithms selected at runtime.",
        run: behavioral::strategy::run,
    },
    Entry {
        category: Category::Behavioral,
        name: "Command",
        bin: "p3_command",
        summary: "Encapsulates a request as an object.",
        run: behavioral::command::run,
    },
    Entry {
        category: Category::Behavioral,
        name: "State",
        bin: "p3_state",
        summary: "Lets an object alter its behavior when its internal state changes.",
        run: behavioral::state::run,
    },
    Entry {
        category: Category::Behavioral,
        name: "Chain of Responsibility",
        bin: "p3_chain",
        summary: "Passes a request along a chain of handlers until one handles it.",
        run: behavioral::chain::run,
    },
];

/// Patterns the catalog describes but has no runnable example for.
pub const DESCRIBED_ONLY: &[(&str, &str)] = &[
    (
        "Template Method",
        "Defines the skeleton of an algorithm and lets implementors override specific steps.",
    ),
    (
        "Interpreter",
        "Implements a specialized language and evaluates sentences in it.",
    ),
    ("Visitor", "Defines a new operation over a type without changing the type."),
    ("Memento", "Captures and restores an object's internal state."),
    (
        "Mediator",
        "Routes communication between objects so they do not refer to each other directly.",
    ),
    (
        "Flyweight",
        "Reduces the cost of creating and manipulating many similar objects.",
    ),
];

pub fn entries() -> &'static [Entry] {
    ENTRIES
}

pub fn by_category(category: Category) -> impl Iterator<Item = &'static Entry> {
    ENTRIES.iter().filter(move |entry| entry.category == category)
}

pub fn find(name: &str) -> Option<&'static Entry> {
    ENTRIES
        .iter()
        .find(|entry| entry.name.eq_ignore_ascii_case(name) || entry.bin == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_every_example_in_category_order() {
        let entries = entries();
        assert_eq!(entries.len(), 16);

        let categories: Vec<Category> = entries.iter().map(|e| e.category).collect();
        let mut sorted = categories.clone();
        sorted.sort_by_key(|c| *c as u8);
        assert_eq!(categories, sorted);

        assert_eq!(by_category(Category::Creational).count(), 6);
        assert_eq!(by_category(Category::Structural).count(), 5);
        assert_eq!(by_category(Category::Behavioral).count(), 5);
    }

    #[test]
    fn test_every_entry_runs_cleanly() {
        for entry in entries() {
            let mut out: Vec<u8> = Vec::new();
            (entry.run)(&mut out).unwrap_or_else(|e| panic!("{} failed: {}", entry.name, e));
            assert!(!out.is_empty(), "{} printed nothing", entry.name);
        }
    }

    #[test]
    fn test_find_by_name_or_bin() {
        assert_eq!(find("strategy").map(|e| e.bin), Some("p3_strategy"));
        assert_eq!(find("p2_composite").map(|e| e.name), Some("Composite"));
        assert!(find("Visitor").is_none());
    }

    #[test]
    fn test_described_only_patterns_are_not_runnable() {
        assert_eq!(DESCRIBED_ONLY.len(), 6);
        for (name, _) in DESCRIBED_ONLY {
            assert!(find(name).is_none());
        }
    }
}
