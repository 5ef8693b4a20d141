use crate::config::{FrameworkConfig, GenerationConfig};
use crate::descriptor::ClassDescriptor;

/// Builds the package and import block at the top of a generated test file.
#[derive(Debug, Clone)]
pub struct HeaderAssembler {
    imports: Vec<String>,
    line_separator: String,
}

impl HeaderAssembler {
    pub fn new(framework: &FrameworkConfig, generation: &GenerationConfig) -> Self {
        Self {
            imports: vec![framework.test_import.clone(), framework.setup_import.clone()],
            line_separator: generation.line_separator.clone(),
        }
    }

    pub fn package_statement(&self, package_name: &str) -> String {
        format!(
            "package {};{}{}",
            package_name, self.line_separator, self.line_separator
        )
    }

    pub fn import_statement(&self, import: &str) -> String {
        format!("import {};{}", import, self.line_separator)
    }

    /// Package statement (omitted for the default package), one import per
    /// framework symbol, then a blank line.
    pub fn assemble(&self, class: &ClassDescriptor) -> String {
        let mut header = String::new();
        if let Some(package_name) = class.package_name() {
            header.push_str(&self.package_statement(package_name));
        }
        for import in &self.imports {
            header.push_str(&self.import_statement(import));
        }
        header.push_str(&self.line_separator);
        header
    }
}

impl Default for HeaderAssembler {
    fn default() -> Self {
        Self::new(&FrameworkConfig::default(), &GenerationConfig::default())
    }
}
