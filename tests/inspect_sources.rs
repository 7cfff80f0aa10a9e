use call_inspector::utils::normalize_path;
use call_inspector::{
    Closure, Config, InspectError, InspectableCallable, Instance, Reflector, SourceIndex, Value,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const SAMPLE_CLASSES: &str = include_str!("fixtures/sample_classes.rs");

const MANIFEST: &str = r#"[package]
name = "sample"
version = "0.1.0"

[package.metadata.call-inspector]
builtins = ["strlen"]
"#;

struct Project {
    dir: TempDir,
    index: SourceIndex,
}

impl Project {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("src")).unwrap();
        fs::create_dir_all(root.join("target/debug")).unwrap();
        fs::write(root.join("Cargo.toml"), MANIFEST).unwrap();
        fs::write(root.join("src/sample_classes.rs"), SAMPLE_CLASSES).unwrap();
        fs::write(root.join("src/broken.rs"), "fn (").unwrap();
        fs::write(root.join("target/debug/stale.rs"), "pub fn stale() {}").unwrap();

        let config = Config::discover(root).unwrap();
        let index = SourceIndex::from_project(root, &config).unwrap();
        Self { dir, index }
    }

    fn sample_path(&self) -> String {
        normalize_path(&self.path("src/sample_classes.rs").display().to_string())
    }

    fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    fn inspect(&self, value: Value) -> InspectableCallable<'_> {
        InspectableCallable::from_value(value, &self.index).unwrap()
    }
}

#[test]
fn format_name() {
    let project = Project::new();
    let name = |value: Value| project.inspect(value).format_name();

    assert_eq!(name(Value::str("strlen")), "strlen");
    assert_eq!(
        name(Value::static_pair("DateTime", "createFromFormat")),
        "DateTime::createFromFormat"
    );
    assert_eq!(
        name(Value::str("DateTime::createFromFormat")),
        "DateTime::createFromFormat"
    );
    assert_eq!(
        name(Value::instance_pair(Instance::new("DateTime"), "format")),
        "DateTime->format"
    );
    assert_eq!(name(Value::Closure(Closure::here())), "{closure}");
    assert_eq!(name(Value::Object(Instance::new("Greeter"))), "Greeter");
}

#[test]
fn file_name_and_line_number() {
    let project = Project::new();
    let sample = project.sample_path();

    let instance_method =
        project.inspect(Value::instance_pair(Instance::new("ClassWithMethods"), "public_method"));
    assert_eq!(instance_method.file_name(), sample);
    assert_eq!(instance_method.start_line(), 4);
    assert_eq!(
        instance_method.file_name_and_line_number(),
        format!("{}:4", sample)
    );
    assert_eq!(instance_method.end_line(), 6);

    let static_method =
        project.inspect(Value::static_pair("ClassWithMethods", "public_static_method"));
    assert_eq!(
        static_method.file_name_and_line_number(),
        format!("{}:8", sample)
    );

    let scoped = project.inspect(Value::str("DateTime::createFromFormat"));
    assert_eq!(scoped.file_name_and_line_number(), format!("{}:16", sample));

    let function = project.inspect(Value::str("greet"));
    assert_eq!(function.file_name_and_line_number(), format!("{}:33", sample));

    let invokable = project.inspect(Value::Object(Instance::new("Greeter")));
    assert_eq!(invokable.file_name_and_line_number(), format!("{}:28", sample));
}

#[test]
fn provided_trait_methods_resolve_on_implementors() {
    let project = Project::new();
    let sample = project.sample_path();

    let provided =
        project.inspect(Value::instance_pair(Instance::new("ClassWithMethods"), "describe"));

    assert_eq!(provided.format_name(), "ClassWithMethods->describe");
    assert_eq!(provided.file_name_and_line_number(), format!("{}:38", sample));
}

#[test]
fn builtins_have_no_location() {
    let project = Project::new();
    let builtin = project.inspect(Value::str("strlen"));

    assert_eq!(builtin.file_name(), "");
    assert_eq!(builtin.start_line(), 0);
    assert_eq!(builtin.file_name_and_line_number(), "");
    assert_eq!(
        builtin.reflection().map(|info| info.name.as_str()),
        Some("strlen")
    );
}

#[test]
fn closures_point_at_their_creation() {
    let project = Project::new();
    let closure = project.inspect(Value::Closure(Closure::here()));

    assert_eq!(closure.file_name(), normalize_path(file!()));
    assert_ne!(closure.start_line(), 0);
}

#[test]
fn native_closures_have_no_location() {
    let project = Project::new();
    let closure = project.inspect(Value::Closure(Closure::native()));

    assert!(closure.reflection().is_some());
    assert_eq!(closure.file_name_and_line_number(), "");
}

#[test]
fn non_callables_are_rejected() {
    let project = Project::new();
    let values = vec![
        Value::Bool(true),
        Value::Float(1.5),
        Value::str("strpos"),
        Value::str("DateTime::diff"),
        Value::static_pair("Unknown", "format"),
        Value::instance_pair(Instance::new("DateTime"), "diff"),
        Value::Object(Instance::new("DateTime")),
        Value::List(Vec::new()),
    ];

    for value in values {
        let result = InspectableCallable::from_value(value, &project.index);
        assert!(matches!(result, Err(InspectError::InvalidArgument(_))));
    }
}

#[test]
fn broken_and_excluded_files_are_skipped() {
    let project = Project::new();

    assert!(!project.index.function_exists("stale"));
    assert!(project
        .index
        .method_exists("ClassWithMethods", "public_method"));
    assert!(project.index.function_exists("greet"));
}

proptest! {
    #[test]
    fn builtin_names_format_unchanged(name in "[a-z_][a-z0-9_]{0,16}") {
        let mut index = SourceIndex::new();
        index.add_builtin(&name);

        let callable = InspectableCallable::from_value(Value::str(name.clone()), &index).unwrap();

        prop_assert_eq!(callable.format_name(), name);
        prop_assert_eq!(callable.file_name_and_line_number(), "");
    }
}
