//! Unit tests for violation handling.

use crate::errors::errors::{DeclarationError, Violation, ViolationKind};

#[test]
fn test_violation_creation() {
    let violation = Violation::new(
        ViolationKind::ParameterTypeMismatch,
        "f(): Parameter number 1, x=1.1: Declared type=<int>, actual type=<float>.".to_string(),
    );

    assert_eq!(violation.get_error_name(), "ParameterTypeMismatch");
    assert_eq!(violation.get_kind(), &ViolationKind::ParameterTypeMismatch);
}

#[test]
fn test_violation_display_is_message() {
    let message = "g(): return value=-1:  Fails condition check.".to_string();
    let violation = Violation::new(ViolationKind::ConditionFailed, message.clone());

    assert_eq!(violation.to_string(), message);
}

#[test]
fn test_reraise_preserves_message_and_drops_trace() {
    let violation = Violation::new(ViolationKind::CollectionElementMismatch, "bad set".to_string())
        .within("check_collection")
        .within("check_arguments");
    assert_eq!(violation.get_trace(), &["check_collection", "check_arguments"]);

    let reraised = violation.clone().reraise();
    assert!(reraised.get_trace().is_empty());
    assert_eq!(reraised.get_message(), violation.get_message());
    assert_eq!(reraised.get_kind(), violation.get_kind());
}

#[test]
fn test_from_kind_uses_description() {
    let violation = Violation::from_kind(ViolationKind::UnresolvedForwardReference {
        name: "Node".to_string(),
        scope: "graph".to_string(),
    });

    assert_eq!(violation.get_error_name(), "UnresolvedForwardReference");
    assert_eq!(
        violation.to_string(),
        "name \"Node\" is not defined in scope \"graph\""
    );
}

#[test]
fn test_construction_failed_name() {
    let violation = Violation::from_kind(ViolationKind::ConstructionFailed {
        type_name: "Point".to_string(),
        reason: "missing field `y`".to_string(),
    });

    assert_eq!(violation.get_error_name(), "ConstructionFailed");
    assert_eq!(violation.to_string(), "cannot construct Point: missing field `y`");
}

#[test]
fn test_kind_names() {
    let kinds = [
        (ViolationKind::ReturnTypeMismatch, "ReturnTypeMismatch"),
        (ViolationKind::AbsenceMismatch, "AbsenceMismatch"),
        (ViolationKind::CollectionContainerMismatch, "CollectionContainerMismatch"),
    ];

    for (kind, name) in kinds {
        assert_eq!(Violation::from_kind(kind).get_error_name(), name);
    }
}

#[test]
fn test_declaration_error_display() {
    let error = DeclarationError::UnexpectedToken {
        token: ")".to_string(),
        offset: 4,
        expected: "a declaration".to_string(),
    };

    assert_eq!(
        error.to_string(),
        "unexpected token \")\" at offset 4, expected a declaration"
    );
}
