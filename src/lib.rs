//! testgen - Generate unit-test skeletons from class descriptors
//!
//! Reads class metadata from a `TypeSource`, assembles one test file per class
//! (package and imports, fixture field, setup method, stub test methods for every
//! public method) and writes the files under a configured test source root.

pub mod cli;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod generators;
pub mod pipeline;

pub use error::{GenerateError, Result};
