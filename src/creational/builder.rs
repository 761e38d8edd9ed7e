// Builder: separate the construction of a complex object from its representation.

use std::io::Write;

use itertools::Itertools;

use crate::error::{PatternError, Result};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Product {
    parts: Vec<String>,
}

impl Product {
    pub fn add_part(&mut self, part: impl Into<String>) {
        self.parts.push(part.into());
    }

    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    pub fn show_parts(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Product parts: {}", self.parts.iter().join(", "))?;
        Ok(())
    }
}

pub trait Builder {
    fn build_part_a(&mut self);
    fn build_part_b(&mut self);
}

/// Accumulates parts into a [`Product`].
#[derive(Debug, Default)]
pub struct PartsBuilder {
    product: Product,
}

impl PartsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn result(&self) -> &Product {
        &self.product
    }

    pub fn into_result(self) -> Product {
        self.product
    }
}

impl Builder for PartsBuilder {
    fn build_part_a(&mut self) {
        self.product.add_part("PartA");
    }

    fn build_part_b(&mut self) {
        self.product.add_part("PartB");
    }
}

/// Knows the order of construction steps, not the parts themselves.
pub struct Director<B: Builder> {
    builder: Option<B>,
}

impl<B: Builder> Director<B> {
    pub fn new() -> Self {
        Self { builder: None }
    }

    pub fn set_builder(&mut self, builder: B) {
        self.builder = Some(builder);
    }

    pub fn construct(&mut self) -> Result<()> {
        let builder = self
            .builder
            .as_mut()
            .ok_or_else(|| PatternError::invalid("Director has no builder to construct with"))?;
        builder.build_part_a();
        builder.build_part_b();
        Ok(())
    }

    /// Hand the builder back so its result can be collected.
    pub fn into_builder(self) -> Option<B> {
        self.builder
    }
}

impl<B: Builder> Default for Director<B> {
    fn default() -> Self {
        Self::new()
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let mut director = Director::new();
    director.set_builder(PartsBuilder::new());
    director.construct()?;

    let builder = director
        .into_builder()
        .ok_or_else(|| PatternError::invalid("builder was not returned by the director"))?;
    let product = builder.into_result();
    product.show_parts(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_director_builds_parts_in_order() {
        let mut director = Director::new();
        director.set_builder(PartsBuilder::new());
        director.construct().unwrap();

        let builder = director.into_builder().unwrap();
        assert_eq!(builder.result().parts(), ["PartA", "PartB"]);
    }

    #[test]
    fn test_construct_without_builder_fails() {
        let mut director: Director<PartsBuilder> = Director::new();
        let err = director.construct().unwrap_err();
        assert!(matches!(err, PatternError::InvalidOperation(_)));
    }

    #[test]
    fn test_empty_product_shows_no_parts() {
        let mut out: Vec<u8> = Vec::new();
        Product::default().show_parts(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Product parts: \n");
    }

    #[test]
    fn test_transcript() {
        let mut out: Vec<u8> = Vec::new();
        run(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Product parts: PartA, PartB\n");
    }
}
