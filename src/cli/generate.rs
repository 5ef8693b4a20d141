use anyhow::{bail, Context, Result};
use std::path::Path;
use tracing::info;

use crate::config::Config;
use crate::descriptor::{ClassDescriptor, ManifestSource, TypeSource};
use crate::generators::{JUnitFixtureGenerator, JUnitStubGenerator};
use crate::pipeline::TestGenerator;

#[allow(clippy::too_many_arguments)]
pub fn run(
    manifest: String,
    classes: Vec<String>,
    variants_override: Option<usize>,
    base_path_override: Option<String>,
    output_root_override: Option<String>,
    extension_override: Option<String>,
    config_path: Option<String>,
    dry_run: bool,
) -> Result<()> {
    let mut config = Config::load_with_path(config_path)?;

    // Apply CLI overrides
    if let Some(variants) = variants_override {
        info!("CLI override: variants_per_method = {}", variants);
        config.generation.variants_per_method = variants;
    }
    if let Some(base_path) = base_path_override {
        info!("CLI override: base_path = {}", base_path);
        config.output.base_path = base_path;
    }
    if let Some(root) = output_root_override {
        info!("CLI override: output root = {}", root);
        config.output.root = root;
    }
    if let Some(extension) = extension_override {
        info!("CLI override: extension = {}", extension);
        config.output.extension = extension;
    }

    let source = ManifestSource::load(Path::new(&manifest))
        .with_context(|| format!("Failed to load class manifest {}", manifest))?;
    let selected = select_classes(&source, &classes)?;
    if selected.is_empty() {
        bail!("No classes to generate tests for in {}", manifest);
    }

    info!("Manifest: {}", manifest);
    info!("Classes: {}", selected.len());
    info!("Dry run: {}", dry_run);

    let stubs = JUnitStubGenerator::new(&config.framework, &config.generation);
    let fixtures = JUnitFixtureGenerator::new(&config.framework, &config.generation);
    let generator = TestGenerator::new(&config, &stubs, &fixtures);
    let variants = config.generation.variants_per_method;

    if dry_run {
        for (target, body) in generator.render(&selected, variants) {
            println!("==> {} <==", target.display());
            println!("{}", body);
        }
        return Ok(());
    }

    generator.run(&selected, variants)?;
    info!("Generated {} test files", selected.len());
    Ok(())
}

/// Requested classes in request order, or every manifest class when none are named.
fn select_classes(source: &ManifestSource, names: &[String]) -> Result<Vec<ClassDescriptor>> {
    if names.is_empty() {
        return Ok(source.classes().to_vec());
    }
    names
        .iter()
        .map(|name| source.describe(name).map_err(anyhow::Error::from))
        .collect()
}
