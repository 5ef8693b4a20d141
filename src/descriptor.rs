//! Class and method descriptors, and the `TypeSource` capability that supplies them.
//!
//! Descriptors are plain immutable data. Whatever does the introspection (a compiler
//! plugin, a bytecode reader, a hand-written manifest) only has to produce these.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

use crate::error::{GenerateError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Package,
    Private,
}

impl Visibility {
    pub fn is_public(&self) -> bool {
        matches!(self, Visibility::Public)
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visibility::Public => write!(f, "public"),
            Visibility::Protected => write!(f, "protected"),
            Visibility::Package => write!(f, "package"),
            Visibility::Private => write!(f, "private"),
        }
    }
}

impl FromStr for Visibility {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "public" => Ok(Visibility::Public),
            "protected" => Ok(Visibility::Protected),
            "package" | "package-private" | "" => Ok(Visibility::Package),
            "private" => Ok(Visibility::Private),
            other => Err(GenerateError::Descriptor(format!(
                "Unknown visibility: {}",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
}

impl ParameterDescriptor {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    pub name: String,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default = "default_return_type")]
    pub return_type: String,
    #[serde(default)]
    pub parameters: Vec<ParameterDescriptor>,
}

fn default_return_type() -> String {
    "void".to_string()
}

impl MethodDescriptor {
    /// A public `void` method with no parameters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Public,
            return_type: default_return_type(),
            parameters: Vec::new(),
        }
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_return_type(mut self, return_type: impl Into<String>) -> Self {
        self.return_type = return_type.into();
        self
    }

    pub fn with_parameter(mut self, param: ParameterDescriptor) -> Self {
        self.parameters.push(param);
        self
    }

    pub fn is_public(&self) -> bool {
        self.visibility.is_public()
    }

    pub fn returns_value(&self) -> bool {
        self.return_type != "void"
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDescriptor {
    pub canonical_name: String,
    /// Filled from `canonical_name` when a manifest leaves it out.
    #[serde(default)]
    pub simple_name: String,
    #[serde(default)]
    pub methods: Vec<MethodDescriptor>,
    #[serde(default)]
    pub constructor_parameters: Vec<ParameterDescriptor>,
}

impl ClassDescriptor {
    pub fn new(canonical_name: impl Into<String>) -> Self {
        let canonical_name = canonical_name.into();
        let simple_name = simple_name_of(&canonical_name).to_string();
        Self {
            canonical_name,
            simple_name,
            methods: Vec::new(),
            constructor_parameters: Vec::new(),
        }
    }

    pub fn with_method(mut self, method: MethodDescriptor) -> Self {
        self.methods.push(method);
        self
    }

    pub fn with_constructor_parameter(mut self, param: ParameterDescriptor) -> Self {
        self.constructor_parameters.push(param);
        self
    }

    /// Canonical name with the final segment stripped; `None` in the default package.
    pub fn package_name(&self) -> Option<&str> {
        self.canonical_name
            .rfind('.')
            .map(|idx| &self.canonical_name[..idx])
    }

    pub fn public_methods(&self) -> impl Iterator<Item = &MethodDescriptor> {
        self.methods.iter().filter(|m| m.is_public())
    }

    fn fill_simple_name(&mut self) {
        if self.simple_name.is_empty() {
            self.simple_name = simple_name_of(&self.canonical_name).to_string();
        }
    }
}

fn simple_name_of(canonical_name: &str) -> &str {
    canonical_name
        .rsplit('.')
        .next()
        .unwrap_or(canonical_name)
}

/// Introspection capability: resolves a class name into its descriptor.
pub trait TypeSource {
    fn describe(&self, canonical_name: &str) -> Result<ClassDescriptor>;
}

#[derive(Debug, Default, Deserialize)]
struct Manifest {
    #[serde(default)]
    classes: Vec<ClassDescriptor>,
}

/// A `TypeSource` backed by a JSON manifest of `{ "classes": [...] }`.
#[derive(Debug, Clone, Default)]
pub struct ManifestSource {
    classes: Vec<ClassDescriptor>,
}

impl ManifestSource {
    pub fn from_json(content: &str) -> Result<Self> {
        let manifest: Manifest = serde_json::from_str(content)
            .map_err(|e| GenerateError::Descriptor(format!("Invalid manifest: {}", e)))?;

        let mut classes = manifest.classes;
        for class in &mut classes {
            if class.canonical_name.trim().is_empty() {
                return Err(GenerateError::Descriptor(
                    "Manifest entry has an empty canonical_name".to_string(),
                ));
            }
            class.fill_simple_name();
            if class.simple_name.trim().is_empty() {
                return Err(GenerateError::Descriptor(format!(
                    "Manifest entry {} has no simple name",
                    class.canonical_name
                )));
            }
        }

        debug!("Loaded {} class descriptors from manifest", classes.len());
        Ok(Self { classes })
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| GenerateError::io(path, e))?;
        Self::from_json(&content)
    }

    /// All classes, in manifest order.
    pub fn classes(&self) -> &[ClassDescriptor] {
        &self.classes
    }
}

impl TypeSource for ManifestSource {
    fn describe(&self, canonical_name: &str) -> Result<ClassDescriptor> {
        self.classes
            .iter()
            .find(|c| c.canonical_name == canonical_name)
            .cloned()
            .ok_or_else(|| {
                GenerateError::Descriptor(format!("Class not found in manifest: {}", canonical_name))
            })
    }
}
