use reflscope_api::{
    EmptyIndex, FieldDescriptor, MethodDescriptor, RegistrationRecord, TypeDescriptor, TypeKind,
    TypeRef,
};
use reflscope_core::config::ClosureConfig;
use reflscope_core::ReflscopeError;
use reflscope_java::IndexDocument;
use reflscope_runtime::{build_step, run_closure};
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

fn write_index(dir: &Path, file: &str, types: Vec<TypeDescriptor>) {
    let raw = serde_json::to_string_pretty(&IndexDocument { types }).unwrap();
    std::fs::write(dir.join(file), raw).unwrap();
}

fn shop_types() -> Vec<TypeDescriptor> {
    vec![
        TypeDescriptor::new("com.acme.Order")
            .with_field(FieldDescriptor::new(
                "items",
                TypeRef::parameterized("java.util.List", vec![TypeRef::class("com.acme.Item")]),
            ))
            .with_field(
                FieldDescriptor::new("LOG", TypeRef::class("org.slf4j.Logger"))
                    .with_modifier("static"),
            )
            .with_field(FieldDescriptor::new(
                "vendor",
                TypeRef::class("com.vendor.Thing"),
            ))
            .with_method(MethodDescriptor::new(
                "getCustomer",
                TypeRef::class("com.acme.Customer"),
            )),
        TypeDescriptor::new("com.acme.Item"),
        TypeDescriptor::new("com.acme.Customer").with_super("com.acme.Party"),
        TypeDescriptor::new("com.acme.Party"),
        TypeDescriptor::new("com.acme.Shape").with_kind(TypeKind::Interface),
        TypeDescriptor::new("com.acme.Circle").with_interface("com.acme.Shape"),
    ]
}

fn workspace(config: &str) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write_index(dir.path(), "index.json", shop_types());
    std::fs::write(dir.path().join("closure.json"), config).unwrap();
    dir
}

fn names(records: &[RegistrationRecord]) -> Vec<&str> {
    records.iter().map(|r| r.name.as_str()).collect()
}

#[test]
fn test_run_closure_from_files() {
    let dir = workspace(
        r#"{
            "seeds": [
                { "type": "com.acme.Order", "source": "rest" },
                { "type": "com.acme.Shape" }
            ],
            "writable": [{ "exact": "com.acme.Customer" }]
        }"#,
    );

    let mut records: Vec<RegistrationRecord> = Vec::new();
    let report = run_closure(
        &dir.path().join("index.json"),
        &dir.path().join("closure.json"),
        &mut records,
    )
    .unwrap();

    assert_eq!(
        names(&records),
        vec![
            "com.acme.Order",
            "com.acme.Item",
            "com.vendor.Thing",
            "com.acme.Customer",
            "com.acme.Party",
            "com.acme.Shape",
            "com.acme.Circle",
        ]
    );
    assert_eq!(report.records, 7);
    assert_eq!(report.unresolved.len(), 1);
    assert_eq!(report.unresolved[0].as_str(), "com.vendor.Thing");

    let customer = records.iter().find(|r| r.name.as_str() == "com.acme.Customer").unwrap();
    assert!(customer.final_fields_writable);
    let party = records.iter().find(|r| r.name.as_str() == "com.acme.Party").unwrap();
    assert!(!party.final_fields_writable);
}

#[test]
fn test_records_follow_traversal_order() {
    let dir = workspace(r#"{ "seeds": [{ "type": "com.acme.Order" }] }"#);

    let mut records: Vec<RegistrationRecord> = Vec::new();
    run_closure(
        &dir.path().join("index.json"),
        &dir.path().join("closure.json"),
        &mut records,
    )
    .unwrap();

    // Fields in declaration order, then getters
    assert_eq!(
        names(&records),
        vec![
            "com.acme.Order",
            "com.acme.Item",
            "com.vendor.Thing",
            "com.acme.Customer",
            "com.acme.Party",
        ]
    );
}

#[test]
fn test_top_level_ignore_prefixes_replace_default() {
    let dir = workspace(
        r#"{
            "seeds": [{ "type": "com.acme.Order" }],
            "ignore_prefixes": ["com.vendor.", "java."]
        }"#,
    );

    let mut records: Vec<RegistrationRecord> = Vec::new();
    let report = run_closure(
        &dir.path().join("index.json"),
        &dir.path().join("closure.json"),
        &mut records,
    )
    .unwrap();

    assert!(!names(&records).contains(&"com.vendor.Thing"));
    assert!(report.unresolved.is_empty());
}

#[test]
fn test_seed_level_ignore_prefixes_win() {
    let dir = workspace(
        r#"{
            "seeds": [{ "type": "java.util.List<com.acme.Item>", "ignore_prefixes": [] }]
        }"#,
    );

    let mut records: Vec<RegistrationRecord> = Vec::new();
    let report = run_closure(
        &dir.path().join("index.json"),
        &dir.path().join("closure.json"),
        &mut records,
    )
    .unwrap();

    assert_eq!(names(&records), vec!["java.util.List", "com.acme.Item"]);
    // java.util.List is unresolved, but platform types never warn
    assert!(report.unresolved.is_empty());
}

#[test]
fn test_seed_index_is_relative_to_config() {
    let dir = workspace(
        r#"{
            "seeds": [{ "type": "com.extra.Dto", "index": "extra.json" }]
        }"#,
    );
    write_index(
        dir.path(),
        "extra.json",
        vec![TypeDescriptor::new("com.extra.Dto").with_super("com.acme.Party")],
    );

    let mut records: Vec<RegistrationRecord> = Vec::new();
    let report = run_closure(
        &dir.path().join("index.json"),
        &dir.path().join("closure.json"),
        &mut records,
    )
    .unwrap();

    // Party comes from the global index, and so do its subtypes
    assert_eq!(
        names(&records),
        vec!["com.extra.Dto", "com.acme.Party", "com.acme.Customer"]
    );
    assert!(report.unresolved.is_empty());
}

#[test]
fn test_missing_seed_index_fails() {
    let dir = workspace(r#"{ "seeds": [{ "type": "com.acme.Order", "index": "nope.json" }] }"#);

    let err = run_closure(
        &dir.path().join("index.json"),
        &dir.path().join("closure.json"),
        &mut Vec::<RegistrationRecord>::new(),
    )
    .unwrap_err();

    assert!(matches!(err, ReflscopeError::Io(_)));
}

#[test]
fn test_bad_seed_signature_is_a_config_error() {
    let config =
        ClosureConfig::from_json_str(r#"{ "seeds": [{ "type": "java.util.List<" }] }"#).unwrap();

    let err = build_step(&config, Arc::new(EmptyIndex), Path::new(".")).unwrap_err();

    match err {
        ReflscopeError::Config(message) => assert!(message.contains("java.util.List<")),
        other => panic!("expected a config error, got {:?}", other),
    }
}

#[test]
fn test_build_step_keeps_seed_order_and_sources() {
    let config = ClosureConfig::from_json_str(
        r#"{ "seeds": [{ "type": "a.First", "source": "one" }, { "type": "a.Second[]" }] }"#,
    )
    .unwrap();

    let step = build_step(&config, Arc::new(EmptyIndex), Path::new(".")).unwrap();

    let requests = step.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].seed(), &TypeRef::class("a.First"));
    assert_eq!(requests[0].source(), Some("one"));
    assert_eq!(
        requests[1].seed(),
        &TypeRef::array(TypeRef::class("a.Second"))
    );
    assert_eq!(requests[1].source(), None);
}
