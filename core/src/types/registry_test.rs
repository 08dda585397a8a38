use std::thread;

use pretty_assertions::assert_eq;

use crate::types::{INT_TYPE, MethodTable, ROOT_TYPE, STRING_TYPE, Type, TypeRegistry};

#[test]
fn test_builtins_lookup_by_name() {
    let registry = TypeRegistry::builtins();

    assert_eq!(registry.len(), 3);
    assert!(registry.get("Root").unwrap().is(&ROOT_TYPE));
    assert!(registry.get("Int").unwrap().is(&INT_TYPE));
    assert!(registry.get("String").unwrap().is(&STRING_TYPE));
    assert!(registry.get("Float").is_none());
}

#[test]
fn test_builtins_registration_order() {
    let names: Vec<_> = TypeRegistry::builtins().iter().map(Type::name).collect();
    assert_eq!(names, vec!["Root", "Int", "String"]);
}

#[test]
fn test_contains_uses_identity() {
    let registry = TypeRegistry::builtins();
    let lookalike = Type::new("Int", MethodTable::empty());

    assert!(registry.contains(&INT_TYPE));
    assert!(!registry.contains(&lookalike));
}

#[test]
fn test_first_registration_wins() {
    static FIRST: once_cell::sync::Lazy<Type> =
        once_cell::sync::Lazy::new(|| Type::new("Dup", MethodTable::empty()));
    static SECOND: once_cell::sync::Lazy<Type> =
        once_cell::sync::Lazy::new(|| Type::new("Dup", MethodTable::empty()));

    let registry = TypeRegistry::new([&*FIRST, &*SECOND]);
    assert_eq!(registry.len(), 1);
    assert!(registry.get("Dup").unwrap().is(&FIRST));
}

#[test]
fn test_singletons_shared_across_threads() {
    let here = &*INT_TYPE as *const Type as usize;

    let handles: Vec<_> = (0..4)
        .map(|_| thread::spawn(|| &*INT_TYPE as *const Type as usize))
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), here);
    }
}
