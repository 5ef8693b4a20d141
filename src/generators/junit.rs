use tracing::debug;

use super::{FixtureGenerator, StubGenerator};
use crate::config::{FrameworkConfig, GenerationConfig};
use crate::descriptor::{ClassDescriptor, MethodDescriptor, ParameterDescriptor};

/// Argument literal for a parameter type, varied by variant index so that each
/// variant of the same method calls it with different inputs.
pub fn argument_literal(type_name: &str, variant: usize) -> String {
    match type_name.trim() {
        "int" | "Integer" => variant.to_string(),
        // Literals are not narrowed in invocation context
        "byte" | "Byte" => format!("(byte) {}", variant),
        "short" | "Short" => format!("(short) {}", variant),
        "long" | "Long" => format!("{}L", variant),
        "float" | "Float" => format!("{}.0f", variant),
        "double" | "Double" => format!("{}.0", variant),
        "boolean" | "Boolean" => (variant % 2 == 1).to_string(),
        "char" | "Character" => {
            let offset = (variant % 26) as u8;
            format!("'{}'", (b'a' + offset) as char)
        }
        "String" | "java.lang.String" => format!("\"value{}\"", variant),
        _ => "null".to_string(),
    }
}

/// Overload-distinguishing part of a test name: `int` gives "Int",
/// `java.util.List<String>` gives "List", `byte[]` and `byte...` give "ByteArray".
pub fn type_suffix(type_name: &str) -> String {
    let trimmed = type_name.trim();
    let raw = trimmed.split('<').next().unwrap_or(trimmed);
    let dims = trimmed.matches("[]").count() + usize::from(trimmed.ends_with("..."));
    let base = raw
        .trim_end_matches("...")
        .trim_end_matches("[]")
        .rsplit('.')
        .next()
        .unwrap_or(raw);

    let mut chars = base.chars().filter(|c| c.is_ascii_alphanumeric() || *c == '_');
    let mut suffix: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };
    for _ in 0..dims {
        suffix.push_str("Array");
    }
    suffix
}

/// `<method><ParamTypes>Test<variant>`, unique across overloads of one method.
pub fn stub_method_name(method: &MethodDescriptor, variant: usize) -> String {
    let types: String = method
        .parameters
        .iter()
        .map(|p| type_suffix(&p.type_name))
        .collect();
    format!("{}{}Test{}", method.name, types, variant)
}

fn argument_list(params: &[ParameterDescriptor], variant: usize) -> String {
    params
        .iter()
        .map(|p| argument_literal(&p.type_name, variant))
        .collect::<Vec<_>>()
        .join(", ")
}

/// JUnit 5 stub: one `@Test` method invoking the method under test on the fixture.
#[derive(Debug, Clone)]
pub struct JUnitStubGenerator {
    test_annotation: String,
    line_separator: String,
}

impl JUnitStubGenerator {
    pub fn new(framework: &FrameworkConfig, generation: &GenerationConfig) -> Self {
        Self {
            test_annotation: framework.test_annotation.clone(),
            line_separator: generation.line_separator.clone(),
        }
    }
}

impl Default for JUnitStubGenerator {
    fn default() -> Self {
        Self::new(&FrameworkConfig::default(), &GenerationConfig::default())
    }
}

impl StubGenerator for JUnitStubGenerator {
    fn generate_stub(
        &self,
        method: &MethodDescriptor,
        fixture_field: &str,
        variant: usize,
    ) -> String {
        let ls = &self.line_separator;
        let call = format!(
            "{}.{}({})",
            fixture_field,
            method.name,
            argument_list(&method.parameters, variant)
        );
        let statement = if method.returns_value() {
            format!("{} result = {};", method.return_type, call)
        } else {
            format!("{};", call)
        };

        let test_name = stub_method_name(method, variant);
        debug!("Stub {} -> {}", test_name, statement);

        let mut out = String::new();
        out.push_str(&format!("\t{}{}", self.test_annotation, ls));
        out.push_str(&format!("\tpublic void {}() {{{}", test_name, ls));
        out.push_str(&format!("\t\t{}{}", statement, ls));
        out.push_str(&format!("\t}}{}", ls));
        out
    }
}

/// JUnit 5 setup method: constructs the class under test into the fixture field.
#[derive(Debug, Clone)]
pub struct JUnitFixtureGenerator {
    setup_annotation: String,
    line_separator: String,
}

impl JUnitFixtureGenerator {
    pub fn new(framework: &FrameworkConfig, generation: &GenerationConfig) -> Self {
        Self {
            setup_annotation: framework.setup_annotation.clone(),
            line_separator: generation.line_separator.clone(),
        }
    }
}

impl Default for JUnitFixtureGenerator {
    fn default() -> Self {
        Self::new(&FrameworkConfig::default(), &GenerationConfig::default())
    }
}

impl FixtureGenerator for JUnitFixtureGenerator {
    fn generate_fixture(&self, class: &ClassDescriptor, fixture_field: &str) -> String {
        let ls = &self.line_separator;
        let mut out = String::new();
        out.push_str(&format!("\t{}{}", self.setup_annotation, ls));
        out.push_str(&format!("\tpublic void setUp() {{{}", ls));
        out.push_str(&format!(
            "\t\t{} = new {}({});{}",
            fixture_field,
            class.simple_name,
            argument_list(&class.constructor_parameters, 0),
            ls
        ));
        out.push_str(&format!("\t}}{}", ls));
        out
    }
}
