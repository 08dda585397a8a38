//! Unit tests for directly boxed integers.

use pretty_assertions::assert_eq;

use crate::{
    interop::{Interop, InteropError, NumericValue, NumericWidth},
    types::{INT_TYPE, STRING_TYPE},
    values::{PhotonInt, Value},
};

#[test]
fn test_photon_int_type() {
    assert!(PhotonInt::new(1).type_of().is(&INT_TYPE));
}

#[test]
fn test_photon_int_is_number() {
    let n = PhotonInt::new(42);
    assert!(n.is_number());
    assert!(n.fits_in(NumericWidth::Int));
    assert_eq!(n.as_width(NumericWidth::Int).unwrap(), NumericValue::Int(42));
}

#[test]
fn test_photon_int_fits_only_native_width() {
    let n = PhotonInt::new(5);

    let fitting: Vec<_> = NumericWidth::ALL
        .into_iter()
        .filter(|&width| n.fits_in(width))
        .collect();
    assert_eq!(fitting, vec![PhotonInt::NATIVE_WIDTH]);

    for width in NumericWidth::ALL {
        if width == NumericWidth::Int {
            continue;
        }
        // Must fail rather than answer a default zero.
        assert!(matches!(
            n.as_width(width),
            Err(InteropError::UnsupportedRepresentation { width: w }) if w == width
        ));
    }
}

#[test]
fn test_photon_int_members() {
    let n = PhotonInt::new(0);
    assert!(n.has_members());
    assert!(n.is_member_invocable("+"));
    assert!(!n.is_member_invocable("-"));
    assert_eq!(n.members(false).collect::<Vec<_>>(), vec!["+"]);
}

#[test]
fn test_photon_int_plus() {
    let sum = PhotonInt::new(2)
        .invoke_member("+", &[Value::int(3)])
        .unwrap();

    assert!(sum.is_number());
    assert_eq!(sum.as_width(NumericWidth::Int).unwrap(), NumericValue::Int(5));
    assert!(sum.type_of().is(&INT_TYPE));
}

#[test]
fn test_photon_int_plus_wraps() {
    let sum = PhotonInt::new(i32::MAX)
        .invoke_member("+", &[Value::int(1)])
        .unwrap();
    assert_eq!(sum.as_int(), Some(i32::MIN));
}

#[test]
fn test_photon_int_unknown_member() {
    let err = PhotonInt::new(2)
        .invoke_member("-", &[Value::int(3)])
        .unwrap_err();
    assert!(matches!(err, InteropError::UnknownMember { member } if member == "-"));
}

#[test]
fn test_photon_int_plus_arity() {
    let err = PhotonInt::new(2).invoke_member("+", &[]).unwrap_err();
    assert!(matches!(
        err,
        InteropError::ArityMismatch {
            expected: 1,
            actual: 0,
            ..
        }
    ));

    let err = PhotonInt::new(2)
        .invoke_member("+", &[Value::int(1), Value::int(2)])
        .unwrap_err();
    assert!(matches!(err, InteropError::ArityMismatch { actual: 2, .. }));
}

#[test]
fn test_photon_int_plus_rejects_objects() {
    let text = Value::object(String::from("3"), &STRING_TYPE);
    let err = PhotonInt::new(2).invoke_member("+", &[text]).unwrap_err();
    assert!(matches!(err, InteropError::UnsupportedType { index: 0, .. }));
    assert!(!err.is_fatal());
}
