pub mod assembler;
pub mod header;
pub mod paths;
pub mod writer;

pub use assembler::{fixture_field_name, ClassTestAssembler, FileBodyBuilder, GenerationRequest};
pub use header::HeaderAssembler;
pub use paths::OutputPathResolver;
pub use writer::{WriteBatch, WriteReconciler};

use std::path::PathBuf;
use tracing::info;

use crate::config::Config;
use crate::descriptor::ClassDescriptor;
use crate::error::Result;
use crate::generators::{FixtureGenerator, StubGenerator};

/// Generates and writes one test skeleton per class.
pub struct TestGenerator<'g> {
    assembler: ClassTestAssembler<'g>,
    paths: OutputPathResolver,
    writer: WriteReconciler,
}

impl<'g> TestGenerator<'g> {
    pub fn new(
        config: &Config,
        stubs: &'g dyn StubGenerator,
        fixtures: &'g dyn FixtureGenerator,
    ) -> Self {
        let ls = config.generation.line_separator.clone();
        Self {
            assembler: ClassTestAssembler::new(
                HeaderAssembler::new(&config.framework, &config.generation),
                stubs,
                fixtures,
                ls.clone(),
            ),
            paths: OutputPathResolver::from_config(&config.output),
            writer: WriteReconciler::new(ls),
        }
    }

    pub fn bodies(&self, classes: &[ClassDescriptor], variants_per_method: usize) -> Vec<String> {
        classes
            .iter()
            .map(|class| {
                self.assembler
                    .assemble(&GenerationRequest::new(class, variants_per_method))
            })
            .collect()
    }

    pub fn targets(&self, classes: &[ClassDescriptor]) -> Vec<PathBuf> {
        classes.iter().map(|class| self.paths.resolve(class)).collect()
    }

    /// Target path and body for every class, without touching the filesystem.
    pub fn render(
        &self,
        classes: &[ClassDescriptor],
        variants_per_method: usize,
    ) -> Vec<(PathBuf, String)> {
        self.targets(classes)
            .into_iter()
            .zip(self.bodies(classes, variants_per_method))
            .collect()
    }

    pub fn run(&self, classes: &[ClassDescriptor], variants_per_method: usize) -> Result<()> {
        info!(
            "Generating tests for {} classes ({} variants per method)",
            classes.len(),
            variants_per_method
        );
        let bodies = self.bodies(classes, variants_per_method);
        let targets = self.targets(classes);
        self.writer.reconcile(bodies, targets)
    }
}
