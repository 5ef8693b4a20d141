// Collaborators that write the bodies of individual test methods.
//
// The assembler owns file layout and method selection; these traits own what a
// single stub or setup method looks like for a given test framework.

pub mod junit;

pub use junit::{JUnitFixtureGenerator, JUnitStubGenerator};

use crate::descriptor::{ClassDescriptor, MethodDescriptor};

/// Produces the source of one stub test method.
pub trait StubGenerator {
    /// `variant` runs from 0 to `variants_per_method - 1` for each public method.
    fn generate_stub(&self, method: &MethodDescriptor, fixture_field: &str, variant: usize)
        -> String;
}

/// Produces the source of the setup method that initializes the fixture field.
pub trait FixtureGenerator {
    fn generate_fixture(&self, class: &ClassDescriptor, fixture_field: &str) -> String;
}
