use tracing::debug;

use super::header::HeaderAssembler;
use crate::descriptor::ClassDescriptor;
use crate::generators::{FixtureGenerator, StubGenerator};

/// A class to generate tests for, and how many stub variants each public method gets.
#[derive(Debug, Clone, Copy)]
pub struct GenerationRequest<'a> {
    pub class: &'a ClassDescriptor,
    pub variants_per_method: usize,
}

impl<'a> GenerationRequest<'a> {
    pub fn new(class: &'a ClassDescriptor, variants_per_method: usize) -> Self {
        Self {
            class,
            variants_per_method,
        }
    }
}

/// Lowercases the first character only: "URLParser" becomes "uRLParser".
pub fn fixture_field_name(simple_name: &str) -> String {
    let mut chars = simple_name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Ordered text fragments, concatenated once when the file body is complete.
#[derive(Debug, Default)]
pub struct FileBodyBuilder {
    fragments: Vec<String>,
}

impl FileBodyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, fragment: impl Into<String>) -> &mut Self {
        self.fragments.push(fragment.into());
        self
    }

    pub fn push_joined(&mut self, items: &[String], separator: &str) -> &mut Self {
        self.fragments.push(items.join(separator));
        self
    }

    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    pub fn build(self) -> String {
        self.fragments.concat()
    }
}

/// Composes header, fixture field, setup method and stub methods into one file body.
pub struct ClassTestAssembler<'g> {
    header: HeaderAssembler,
    stubs: &'g dyn StubGenerator,
    fixtures: &'g dyn FixtureGenerator,
    line_separator: String,
}

impl<'g> ClassTestAssembler<'g> {
    pub fn new(
        header: HeaderAssembler,
        stubs: &'g dyn StubGenerator,
        fixtures: &'g dyn FixtureGenerator,
        line_separator: impl Into<String>,
    ) -> Self {
        Self {
            header,
            stubs,
            fixtures,
            line_separator: line_separator.into(),
        }
    }

    /// Stub sources for every public method, method-major then variant-minor.
    pub fn stub_methods(&self, request: &GenerationRequest<'_>, fixture_field: &str) -> Vec<String> {
        let mut stubs = Vec::new();
        for method in request.class.public_methods() {
            for variant in 0..request.variants_per_method {
                stubs.push(self.stubs.generate_stub(method, fixture_field, variant));
            }
        }
        stubs
    }

    fn test_class_header(&self, class: &ClassDescriptor, fixture_field: &str) -> Vec<String> {
        let ls = &self.line_separator;
        vec![
            format!("public class {}Test {{{}", class.simple_name, ls),
            format!("\tprivate {} {};{}", class.simple_name, fixture_field, ls),
            ls.clone(),
            self.fixtures.generate_fixture(class, fixture_field),
            ls.clone(),
        ]
    }

    pub fn builder(&self, request: &GenerationRequest<'_>) -> FileBodyBuilder {
        let class = request.class;
        let fixture_field = fixture_field_name(&class.simple_name);

        let mut builder = FileBodyBuilder::new();
        builder.push(self.header.assemble(class));
        for fragment in self.test_class_header(class, &fixture_field) {
            builder.push(fragment);
        }

        let stubs = self.stub_methods(request, &fixture_field);
        debug!(
            "{}: {} stub methods ({} per public method)",
            class.canonical_name,
            stubs.len(),
            request.variants_per_method
        );
        builder.push_joined(&stubs, &self.line_separator);
        builder.push(format!("}}{}", self.line_separator));
        builder
    }

    pub fn assemble(&self, request: &GenerationRequest<'_>) -> String {
        self.builder(request).build()
    }
}
