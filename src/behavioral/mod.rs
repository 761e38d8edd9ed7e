//! Behavioral patterns: how objects share responsibility and communicate.

pub mod chain;
pub mod command;
pub mod observer;
pub mod state;
pub mod strategy;
