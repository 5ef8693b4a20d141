//! End-to-end generation: descriptors in, test files on disk.

use std::fs;
use tempfile::TempDir;
use testgen::config::Config;
use testgen::descriptor::{ClassDescriptor, MethodDescriptor, ParameterDescriptor, Visibility};
use testgen::generators::{JUnitFixtureGenerator, JUnitStubGenerator};
use testgen::pipeline::TestGenerator;

fn config_for(dir: &TempDir) -> Config {
    let mut config = Config::default();
    config.output.base_path = dir.path().to_string_lossy().into_owned();
    config.output.root = "src/test/java".to_string();
    config
}

fn foo_class() -> ClassDescriptor {
    ClassDescriptor::new("pkg.Foo")
        .with_method(MethodDescriptor::new("doWork"))
        .with_method(MethodDescriptor::new("secret").with_visibility(Visibility::Private))
}

#[test]
fn test_end_to_end_single_class() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&dir);
    let stubs = JUnitStubGenerator::default();
    let fixtures = JUnitFixtureGenerator::default();
    let generator = TestGenerator::new(&config, &stubs, &fixtures);

    generator.run(&[foo_class()], 2).unwrap();

    let target = dir.path().join("src/test/java/pkg/FooTest.java");
    let body = fs::read_to_string(&target).unwrap();

    assert!(body.starts_with("package pkg;\n\n"));
    assert!(body.contains("import org.junit.jupiter.api.Test;\n"));
    assert!(body.contains("import org.junit.jupiter.api.BeforeEach;\n"));
    assert!(body.contains("public class FooTest {\n"));
    assert!(body.contains("\tprivate Foo foo;\n"));
    assert_eq!(body.matches("public void setUp()").count(), 1);
    assert!(body.contains("\t\tfoo = new Foo();\n"));
    assert_eq!(body.matches("@Test").count(), 2);
    assert!(body.contains("public void doWorkTest0()"));
    assert!(body.contains("public void doWorkTest1()"));
    assert!(!body.contains("secret"));
    assert!(body.ends_with("}\n"));
}

#[test]
fn test_stub_count_is_public_methods_times_variants() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&dir);
    let stubs = JUnitStubGenerator::default();
    let fixtures = JUnitFixtureGenerator::default();
    let generator = TestGenerator::new(&config, &stubs, &fixtures);

    let class = ClassDescriptor::new("a.b.Widget")
        .with_method(MethodDescriptor::new("open"))
        .with_method(
            MethodDescriptor::new("resize")
                .with_return_type("boolean")
                .with_parameter(ParameterDescriptor::new("width", "int")),
        )
        .with_method(MethodDescriptor::new("tick").with_visibility(Visibility::Protected));

    let bodies = generator.bodies(&[class], 3);
    let body = &bodies[0];
    assert_eq!(body.matches("@Test").count(), 2 * 3);

    let open_first = body.find("openTest0").unwrap();
    let open_last = body.find("openTest2").unwrap();
    let resize_first = body.find("resizeIntTest0").unwrap();
    assert!(open_first < open_last && open_last < resize_first);
    assert!(body.contains("boolean result = widget.resize(2);"));
}

#[test]
fn test_zero_variants_still_well_formed() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&dir);
    let stubs = JUnitStubGenerator::default();
    let fixtures = JUnitFixtureGenerator::default();
    let generator = TestGenerator::new(&config, &stubs, &fixtures);

    let bodies = generator.bodies(&[foo_class()], 0);
    let body = &bodies[0];
    assert!(body.starts_with("package pkg;"));
    assert!(body.contains("public void setUp()"));
    assert!(!body.contains("@Test\n"));
    assert!(body.ends_with("\t}\n\n}\n"));
}

#[test]
fn test_regeneration_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&dir);
    let stubs = JUnitStubGenerator::default();
    let fixtures = JUnitFixtureGenerator::default();
    let generator = TestGenerator::new(&config, &stubs, &fixtures);
    let target = dir.path().join("src/test/java/pkg/FooTest.java");

    generator.run(&[foo_class()], 2).unwrap();
    let first = fs::read(&target).unwrap();
    generator.run(&[foo_class()], 2).unwrap();
    let second = fs::read(&target).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_multiple_classes_each_get_a_file() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&dir);
    let stubs = JUnitStubGenerator::default();
    let fixtures = JUnitFixtureGenerator::default();
    let generator = TestGenerator::new(&config, &stubs, &fixtures);

    let classes = vec![
        foo_class(),
        ClassDescriptor::new("other.URLParser").with_method(MethodDescriptor::new("parse")),
    ];
    generator.run(&classes, 1).unwrap();

    let parser = fs::read_to_string(dir.path().join("src/test/java/other/URLParserTest.java"))
        .unwrap();
    assert!(parser.contains("\tprivate URLParser uRLParser;\n"));
    assert!(parser.contains("uRLParser.parse();"));
    assert!(dir.path().join("src/test/java/pkg/FooTest.java").exists());
}

#[test]
fn test_render_does_not_write() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&dir);
    let stubs = JUnitStubGenerator::default();
    let fixtures = JUnitFixtureGenerator::default();
    let generator = TestGenerator::new(&config, &stubs, &fixtures);

    let rendered = generator.render(&[foo_class()], 1);
    assert_eq!(rendered.len(), 1);
    assert!(rendered[0].0.ends_with("pkg/FooTest.java"));
    assert!(rendered[0].1.contains("doWorkTest0"));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_overloads_and_narrow_types_compile_cleanly() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&dir);
    let stubs = JUnitStubGenerator::default();
    let fixtures = JUnitFixtureGenerator::default();
    let generator = TestGenerator::new(&config, &stubs, &fixtures);

    let class = ClassDescriptor::new("p.Calc")
        .with_method(
            MethodDescriptor::new("add").with_parameter(ParameterDescriptor::new("x", "int")),
        )
        .with_method(
            MethodDescriptor::new("add").with_parameter(ParameterDescriptor::new("s", "String")),
        )
        .with_method(
            MethodDescriptor::new("scale").with_parameter(ParameterDescriptor::new("s", "short")),
        );

    let bodies = generator.bodies(&[class], 1);
    let body = &bodies[0];
    assert_eq!(body.matches("public void addIntTest0()").count(), 1);
    assert_eq!(body.matches("public void addStringTest0()").count(), 1);
    assert!(!body.contains("public void addTest0()"));
    assert!(body.contains("calc.scale((short) 0);"));
}
