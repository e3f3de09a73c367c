//! Error types produced by ribbon operations.

mod constructors;
mod types;

pub use types::{RibbonError, RibbonResult};

#[cfg(test)]
mod tests;
