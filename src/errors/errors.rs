use thiserror::Error;

/// The diagnostic returned when a checked call breaks its contract.
///
/// Displays as the one-line message alone.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct Violation {
    kind: ViolationKind,
    message: String,
    trace: Vec<&'static str>,
}

impl Violation {
    pub fn new(kind: ViolationKind, message: String) -> Self {
        Violation {
            kind,
            message,
            trace: vec![],
        }
    }

    /// Builds a violation whose message is the kind's own description.
    pub fn from_kind(kind: ViolationKind) -> Self {
        let message = kind.to_string();
        Violation::new(kind, message)
    }

    pub fn get_kind(&self) -> &ViolationKind {
        &self.kind
    }

    pub fn get_message(&self) -> &str {
        &self.message
    }

    /// Checker frames the violation unwound through, innermost first.
    pub fn get_trace(&self) -> &[&'static str] {
        &self.trace
    }

    /// Records that the violation passed through the named checker frame.
    pub fn within(mut self, frame: &'static str) -> Self {
        self.trace.push(frame);
        self
    }

    /// Re-raises with the same kind and message, discarding the frame trail.
    pub fn reraise(self) -> Self {
        Violation::new(self.kind, self.message)
    }

    pub fn get_error_name(&self) -> &str {
        match &self.kind {
            ViolationKind::ParameterTypeMismatch => "ParameterTypeMismatch",
            ViolationKind::ReturnTypeMismatch => "ReturnTypeMismatch",
            ViolationKind::AbsenceMismatch => "AbsenceMismatch",
            ViolationKind::ConditionFailed => "ConditionFailed",
            ViolationKind::CollectionContainerMismatch => "CollectionContainerMismatch",
            ViolationKind::CollectionElementMismatch => "CollectionElementMismatch",
            ViolationKind::UnresolvedForwardReference { .. } => "UnresolvedForwardReference",
            ViolationKind::ConstructionFailed { .. } => "ConstructionFailed",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ViolationKind {
    #[error("declared parameter type does not match the argument")]
    ParameterTypeMismatch,
    #[error("declared return type does not match the result")]
    ReturnTypeMismatch,
    #[error("absence value where a concrete value was declared, or the reverse")]
    AbsenceMismatch,
    #[error("value fails condition check")]
    ConditionFailed,
    #[error("container type is not among the declared container types")]
    CollectionContainerMismatch,
    #[error("container holds elements of an undeclared type")]
    CollectionElementMismatch,
    #[error("name {name:?} is not defined in scope {scope:?}")]
    UnresolvedForwardReference { name: String, scope: String },
    #[error("cannot construct {type_name}: {reason}")]
    ConstructionFailed { type_name: String, reason: String },
}

/// Errors in the textual declaration syntax.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DeclarationError {
    #[error("unrecognised token {token:?} at offset {offset}")]
    UnrecognisedToken { token: String, offset: usize },
    #[error("unexpected token {token:?} at offset {offset}, expected {expected}")]
    UnexpectedToken {
        token: String,
        offset: usize,
        expected: String,
    },
    #[error("unknown container type {name:?}")]
    UnknownContainer { name: String },
}

/// An unrecognised value for the contract mode switch.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("unrecognised contract mode {0:?}, expected one of on, off, enabled, disabled, true, false, 1, 0")]
pub struct ParseModeError(pub String);
