// Composite: compose nodes into trees and treat leaves and branches uniformly.

use std::io::Write;

use crate::dispatch::Placeholder;
use crate::error::{PatternError, Result};

pub trait Component {
    fn name(&self) -> &str;

    fn add(&mut self, child: Box<dyn Component>) -> Result<()>;

    /// Detach the first child called `name`, if any.
    fn remove(&mut self, name: &str) -> Result<Option<Box<dyn Component>>>;

    /// Pre-order traversal; `visit` receives each node's name and depth.
    fn walk(&self, depth: usize, visit: &mut dyn FnMut(&str, usize)) -> Result<()>;

    /// One line per node: `depth` dashes then the name, children indented by two.
    fn display(&self, depth: usize, out: &mut dyn Write) -> Result<()> {
        let mut lines = Vec::new();
        self.walk(depth, &mut |name, depth| {
            lines.push(format!("{}{}", "-".repeat(depth), name))
        })?;
        for line in lines {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }
}

// ============================================================================
// Leaf
// ============================================================================

pub struct Leaf {
    name: String,
}

impl Leaf {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    fn unsupported(&self, operation: &'static str) -> PatternError {
        tracing::warn!(leaf = %self.name, operation, "leaf nodes cannot have children");
        PatternError::UnsupportedOperation {
            operation,
            node: self.name.clone(),
        }
    }
}

impl Component for Leaf {
    fn name(&self) -> &str {
        &self.name
    }

    fn add(&mut self, _child: Box<dyn Component>) -> Result<()> {
        Err(self.unsupported("add"))
    }

    fn remove(&mut self, _name: &str) -> Result<Option<Box<dyn Component>>> {
        Err(self.unsupported("remove"))
    }

    fn walk(&self, depth: usize, visit: &mut dyn FnMut(&str, usize)) -> Result<()> {
        visit(&self.name, depth);
        Ok(())
    }
}

// ============================================================================
// Composite
// ============================================================================

pub struct Composite {
    name: String,
    children: Vec<Box<dyn Component>>,
}

impl Composite {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Builder-style `add` for assembling trees bottom-up.
    pub fn with(mut self, child: impl Component + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }

    pub fn children(&self) -> impl Iterator<Item = &dyn Component> {
        self.children.iter().map(|child| child.as_ref())
    }
}

impl Component for Composite {
    fn name(&self) -> &str {
        &self.name
    }

    fn add(&mut self, child: Box<dyn Component>) -> Result<()> {
        self.children.push(child);
        Ok(())
    }

    fn remove(&mut self, name: &str) -> Result<Option<Box<dyn Component>>> {
        let Some(index) = self.children.iter().position(|child| child.name() == name) else {
            return Ok(None);
        };
        Ok(Some(self.children.remove(index)))
    }

    fn walk(&self, depth: usize, visit: &mut dyn FnMut(&str, usize)) -> Result<()> {
        visit(&self.name, depth);
        for child in &self.children {
            child.walk(depth + 2, visit)?;
        }
        Ok(())
    }
}

impl Component for Placeholder {
    fn name(&self) -> &str {
        "Component"
    }

    fn add(&mut self, _child: Box<dyn Component>) -> Result<()> {
        Placeholder::fail("Component", "add")
    }

    fn remove(&mut self, _name: &str) -> Result<Option<Box<dyn Component>>> {
        Placeholder::fail("Component", "remove")
    }

    fn walk(&self, _depth: usize, _visit: &mut dyn FnMut(&str, usize)) -> Result<()> {
        Placeholder::fail("Component", "walk")
    }
}

/// Node names in traversal order.
pub fn preorder(root: &dyn Component) -> Result<Vec<String>> {
    let mut names = Vec::new();
    root.walk(0, &mut |name, _| names.push(name.to_string()))?;
    Ok(names)
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let mut branch1 = Composite::new("branch1");
    let mut branch2 = Composite::new("branch2");

    branch1.add(Box::new(Leaf::new("leaf1")))?;
    branch2.add(Box::new(Leaf::new("leaf2")))?;
    branch2.add(Box::new(Leaf::new("leaf3")))?;

    let mut root = Composite::new("root");
    root.add(Box::new(branch1))?;
    root.add(Box::new(branch2))?;

    root.display(1, out)?;
    Ok(())
}
