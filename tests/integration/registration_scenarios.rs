//! Integration tests for registering modules into a command tree and freezing it

use super::test_utils::FixtureRegistrar;
use std::sync::Arc;
use vppcli::{
    BuildError, BuildState, CommandPath, CommandRegistry, ModuleRegistrar, RegistryError,
    TreeBuilder,
};

fn empty_registry() -> CommandRegistry {
    CommandRegistry::new("vppcli", "test")
}

/// R1 adds fdio/list, R2 adds util; lookups and post-freeze registration behave as expected
#[test]
fn test_two_registrars_build_and_freeze() {
    let r1 = FixtureRegistrar::new("r1").group("fdio", &["list"]);
    let r2 = FixtureRegistrar::new("r2").group("util", &[]);

    let registry = TreeBuilder::new()
        .registrar(r1.clone())
        .registrar(r2)
        .build(empty_registry())
        .unwrap();
    assert!(registry.is_frozen());

    let list = registry.resolve_path(&["fdio", "list"]).unwrap();
    assert_eq!(list.name(), "list");
    assert_eq!(list.parent_path(), Some(CommandPath::from(["fdio"])));
    assert!(registry.resolve_path(&["util"]).is_ok());

    let err = registry.resolve_path(&["fdio", "missing"]).unwrap_err();
    assert_eq!(
        err,
        RegistryError::NotFound(CommandPath::from(["fdio", "missing"]))
    );

    let before = registry.paths();
    let mut registry = registry;
    let err = r1.register(&mut registry).unwrap_err();
    assert!(matches!(err, RegistryError::FrozenTree { .. }));
    assert_eq!(registry.paths(), before, "frozen tree must be unchanged");
}

/// Two registrars both claiming the root child "fdio" abort startup
#[test]
fn test_conflicting_registrars_abort_without_freezing() {
    let mut builder = TreeBuilder::new()
        .registrar(FixtureRegistrar::new("interface").group("fdio", &["list"]))
        .registrar(FixtureRegistrar::new("other").group("fdio", &["show"]));

    let mut registry = empty_registry();
    let err = builder.build_into(&mut registry).unwrap_err();

    match &err {
        BuildError::Registration { registrar, source } => {
            assert_eq!(registrar, "other");
            assert_eq!(
                source,
                &RegistryError::DuplicateName {
                    parent: CommandPath::root(),
                    name: "fdio".to_string(),
                }
            );
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(!registry.is_frozen());
    assert!(matches!(builder.state(), BuildState::Aborted { .. }));

    // the first module's contribution is still there, the second left nothing behind
    assert!(registry.resolve_path(&["fdio", "list"]).is_ok());
    assert!(registry.resolve_path(&["fdio", "show"]).is_err());
}

/// A single registrar attaching the same child twice under one parent
#[test]
fn test_duplicate_sibling_from_one_registrar() {
    let registrar = FixtureRegistrar::under("dup", CommandPath::root())
        .group("fdio", &[])
        .group("fdio", &[]);

    let mut builder = TreeBuilder::new().registrar(registrar);
    let mut registry = empty_registry();
    let err = builder.build_into(&mut registry).unwrap_err();

    assert!(matches!(
        err.registry_error(),
        Some(RegistryError::DuplicateName { .. })
    ));
    assert!(!registry.is_frozen());
}

/// resolve(["a","b"]) succeeds iff "a" is a root child and "b" is one of its children
#[test]
fn test_two_segment_resolution() {
    let registry = TreeBuilder::new()
        .registrar(FixtureRegistrar::new("a").group("a", &["b"]))
        .registrar(FixtureRegistrar::new("c").group("c", &["d"]))
        .build(empty_registry())
        .unwrap();

    assert!(registry.resolve_path(&["a", "b"]).is_ok());
    assert!(registry.resolve_path(&["c", "d"]).is_ok());
    assert!(registry.resolve_path(&["a", "d"]).is_err());
    assert!(registry.resolve_path(&["c", "b"]).is_err());
    assert!(registry.resolve_path(&["b"]).is_err());
    assert!(registry.resolve_path(&["x", "b"]).is_err());
}

/// A module attaching beneath another module's group depends on declared order
#[test]
fn test_nested_module_requires_declared_order() {
    let parent = FixtureRegistrar::new("fdio").group("fdio", &[]);
    let child =
        FixtureRegistrar::under("fdio-route", CommandPath::from(["fdio"])).group("route", &["create"]);

    let registry = TreeBuilder::new()
        .registrar(parent.clone())
        .registrar(child.clone())
        .build(empty_registry())
        .unwrap();
    assert!(registry.resolve_path(&["fdio", "route", "create"]).is_ok());

    let err = TreeBuilder::new()
        .registrar(child)
        .registrar(parent)
        .build(empty_registry())
        .unwrap_err();
    assert!(matches!(
        err.registry_error(),
        Some(RegistryError::NotFound(_))
    ));
}

/// The frozen tree can be read from many threads without locking
#[test]
fn test_frozen_tree_concurrent_reads() {
    let registry = TreeBuilder::new()
        .registrar(FixtureRegistrar::new("r1").group("fdio", &["list", "show"]))
        .registrar(FixtureRegistrar::new("r2").group("util", &["version"]))
        .build(empty_registry())
        .unwrap();
    let registry = Arc::new(registry);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let registry = Arc::clone(&registry);
            std::thread::spawn(move || {
                for _ in 0..100 {
                    assert!(registry.resolve_path(&["fdio", "show"]).is_ok());
                    assert!(registry.resolve_path(&["util", "missing"]).is_err());
                }
                registry.paths().len()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 5);
    }
}
