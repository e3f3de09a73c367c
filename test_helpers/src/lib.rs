//! Test helpers shared across crates.
//!
//! [`fixtures`] builds representative ribbon trees from plain data and
//! [`tree`] inspects their shape (container paths, wrapper counts) so
//! integration tests can assert on structure without re-walking trees by
//! hand.

pub mod fixtures;
pub mod tree;
