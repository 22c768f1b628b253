//! Integration tests for the persistent type catalog.

use std::fs;

use envuse_dts::{
    Attached, CatalogError, Interface, StoreLocations, TypeNode, TypeStore, Union, register,
    register_async,
};
use envuse_manifest::{ParsedDocument, Variable};
use tempfile::TempDir;

fn locations(temp: &TempDir) -> StoreLocations {
    StoreLocations::new(temp.path().join("def.json"), temp.path().join("types.ts"))
}

fn attach_sample(store: &mut TypeStore) {
    store.attach(
        &Interface::new("a")
            .field("name", TypeNode::PrimitiveString)
            .field(
                "age",
                Union::new(TypeNode::PrimitiveString).or(TypeNode::PrimitiveNumber),
            ),
    );
    store.attach(&Interface::new("c"));
    store.attach(&Interface::new(".envuse"));
    store.attach(&Interface::new(".envuse.prod"));
    store.attach(&Interface::new(".envuse/dev.env1"));
    store.attach(&Interface::new(".envuse/prod.env"));
}

#[test]
fn test_store_of_types() {
    let temp = TempDir::new().unwrap();
    let locations = locations(&temp);
    let mut store = TypeStore::new(locations.clone());

    store.pull().unwrap();
    attach_sample(&mut store);
    store.sync().unwrap();

    let definition = fs::read_to_string(&locations.definition).unwrap();
    assert_eq!(
        definition,
        r#"[
  [
    "a",
    "interface a {\n  name: string\n  age: string\n  | number\n}"
  ],
  [
    "c",
    "interface c {\n}"
  ],
  [
    ".envuse",
    "interface _envuse {\n}"
  ],
  [
    ".envuse.prod",
    "interface _envuse_prod {\n}"
  ],
  [
    ".envuse/dev.env1",
    "interface _envuse_dev_env1 {\n}"
  ],
  [
    ".envuse/prod.env",
    "interface _envuse_prod_env {\n}"
  ]
]"#
    );

    let declarations = fs::read_to_string(&locations.declarations).unwrap();
    insta::assert_snapshot!(declarations, @r#"
interface a {
  name: string
  age: string
  | number
}

interface c {
}

interface _envuse {
}

interface _envuse_prod {
}

interface _envuse_dev_env1 {
}

interface _envuse_prod_env {
}


export interface MapParsers {
  a: a
  c: c
  ".envuse": _envuse
  ".envuse.prod": _envuse_prod
  ".envuse/dev.env1": _envuse_dev_env1
  ".envuse/prod.env": _envuse_prod_env
}
"#);
}

#[test]
fn test_round_trip() {
    let temp = TempDir::new().unwrap();
    let mut store = TypeStore::new(locations(&temp));
    attach_sample(&mut store);
    store.attach(&Interface::new("quotes \"and\" \\slashes\n").field("X", TypeNode::Any));
    store.sync().unwrap();

    let mut reloaded = TypeStore::new(locations(&temp));
    reloaded.pull().unwrap();

    assert_eq!(reloaded.catalog(), store.catalog());
    assert_eq!(
        reloaded.catalog().keys().collect::<Vec<_>>(),
        store.catalog().keys().collect::<Vec<_>>()
    );
}

#[test]
fn test_sync_is_idempotent() {
    let temp = TempDir::new().unwrap();
    let locations = locations(&temp);
    let mut store = TypeStore::new(locations.clone());
    attach_sample(&mut store);

    store.sync().unwrap();
    let first = (
        fs::read(&locations.definition).unwrap(),
        fs::read(&locations.declarations).unwrap(),
    );
    store.sync().unwrap();
    let second = (
        fs::read(&locations.definition).unwrap(),
        fs::read(&locations.declarations).unwrap(),
    );

    assert_eq!(first, second);
}

#[test]
fn test_empty_pull_from_missing_definition() {
    let temp = TempDir::new().unwrap();
    let mut store = TypeStore::new(StoreLocations::in_dir(temp.path()));

    let catalog = store.pull().unwrap();
    assert_eq!(catalog.len(), 0);
}

#[test]
fn test_upsert_across_invocations() {
    let temp = TempDir::new().unwrap();

    let mut first = TypeStore::new(locations(&temp));
    first.pull().unwrap();
    first.attach(&Interface::new("a").field("OLD", TypeNode::PrimitiveNumber));
    first.attach(&Interface::new("b"));
    first.sync().unwrap();

    let mut second = TypeStore::new(locations(&temp));
    second.pull().unwrap();
    let outcome = second.attach(&Interface::new("a").field("NEW", TypeNode::PrimitiveString));
    second.sync().unwrap();

    assert_eq!(outcome, Attached::Replaced);
    let catalog = second.catalog();
    assert_eq!(catalog.keys().collect::<Vec<_>>(), ["a", "b"]);
    assert_eq!(catalog.get("a"), Some("interface a {\n  NEW: string\n}"));
}

#[test]
fn test_malformed_definition_is_an_error() {
    let temp = TempDir::new().unwrap();
    let locations = locations(&temp);
    fs::write(&locations.definition, "{}").unwrap();

    let mut store = TypeStore::new(locations.clone());
    let err = store.pull().unwrap_err();

    assert!(matches!(err, CatalogError::Malformed { .. }));
    assert!(store.catalog().is_empty());
    // The broken artifact is not touched.
    assert_eq!(fs::read_to_string(&locations.definition).unwrap(), "{}");
}

#[test]
fn test_register_document() {
    let temp = TempDir::new().unwrap();
    let locations = StoreLocations::in_dir(temp.path());
    let document = ParsedDocument::new([
        Variable::new("PORT").typed("number"),
        Variable::new("HOST").typed("string").nullable(),
    ]);

    let registration = register(&document, ".envuse", &locations).unwrap();

    assert_eq!(registration.key, ".envuse");
    assert_eq!(registration.attached, Attached::Inserted);
    assert_eq!(registration.entries, 1);
    assert_eq!(
        registration.text,
        "interface _envuse {\n  PORT: number\n  HOST: null\n  | string\n}"
    );

    let again = register(&document, ".envuse", &locations).unwrap();
    assert_eq!(again.attached, Attached::Replaced);
    assert_eq!(again.entries, 1);
}

#[tokio::test]
async fn test_async_store_matches_blocking_store() {
    let blocking_dir = TempDir::new().unwrap();
    let async_dir = TempDir::new().unwrap();

    let mut blocking = TypeStore::new(locations(&blocking_dir));
    blocking.pull().unwrap();
    attach_sample(&mut blocking);
    blocking.sync().unwrap();

    let mut suspending = TypeStore::new(locations(&async_dir));
    suspending.pull_async().await.unwrap();
    attach_sample(&mut suspending);
    suspending.sync_async().await.unwrap();

    assert_eq!(blocking.catalog(), suspending.catalog());
    assert_eq!(
        fs::read(blocking_dir.path().join("def.json")).unwrap(),
        fs::read(async_dir.path().join("def.json")).unwrap()
    );
    assert_eq!(
        fs::read(blocking_dir.path().join("types.ts")).unwrap(),
        fs::read(async_dir.path().join("types.ts")).unwrap()
    );

    let mut reloaded = TypeStore::new(locations(&async_dir));
    reloaded.pull_async().await.unwrap();
    assert_eq!(reloaded.catalog(), suspending.catalog());
}

#[tokio::test]
async fn test_register_async() {
    let temp = TempDir::new().unwrap();
    let locations = locations(&temp);
    let document = ParsedDocument::new([Variable::new("FLAG").typed("boolean")]);

    register_async(&document, "one", &locations).await.unwrap();
    let registration = register_async(&document, "two", &locations).await.unwrap();

    assert_eq!(registration.entries, 2);
    let declarations = fs::read_to_string(&locations.declarations).unwrap();
    assert!(declarations.ends_with("export interface MapParsers {\n  one: one\n  two: two\n}"));
}

#[tokio::test]
async fn test_malformed_definition_is_an_error_async() {
    let temp = TempDir::new().unwrap();
    let locations = locations(&temp);
    fs::write(&locations.definition, "{}").unwrap();

    let mut store = TypeStore::new(locations.clone());
    store.attach(&Interface::new("kept"));
    let err = store.pull_async().await.unwrap_err();

    assert!(matches!(err, CatalogError::Malformed { .. }));
    assert_eq!(err.path(), locations.definition);
    assert_eq!(store.catalog().keys().collect::<Vec<_>>(), ["kept"]);
    assert_eq!(fs::read_to_string(&locations.definition).unwrap(), "{}");
}

#[test]
fn test_sanitized_name_collision_keeps_both_entries() {
    let temp = TempDir::new().unwrap();
    let locations = locations(&temp);
    let mut store = TypeStore::new(locations.clone());
    store.attach(&Interface::new("a.b").field("X", TypeNode::PrimitiveString));
    store.attach(&Interface::new("a/b").field("Y", TypeNode::PrimitiveNumber));
    store.sync().unwrap();

    assert_eq!(store.catalog().len(), 2);
    let declarations = fs::read_to_string(&locations.declarations).unwrap();
    insta::assert_snapshot!(declarations, @r#"
interface a_b {
  X: string
}

interface a_b {
  Y: number
}


export interface MapParsers {
  "a.b": a_b
  "a/b": a_b
}
"#);
}

#[test]
fn test_empty_key_renders_placeholder_identifier() {
    let temp = TempDir::new().unwrap();
    let mut store = TypeStore::new(locations(&temp));
    store.attach(&Interface::new(""));

    assert_eq!(
        store.catalog().declarations(),
        "interface _ {\n}\n\n\nexport interface MapParsers {\n  \"\": _\n}"
    );

    store.sync().unwrap();
    let mut reloaded = TypeStore::new(locations(&temp));
    reloaded.pull().unwrap();
    assert_eq!(reloaded.catalog().get(""), Some("interface _ {\n}"));
}
