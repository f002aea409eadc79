use crate::{
    errors::errors::{Violation, ViolationKind},
    values::value::Value,
};

/// Rendered values longer than this many characters are cut off.
pub const VALUE_REPR_LIMIT: usize = 32;

/// The position a checked value occupies in a call.
#[derive(Debug, Clone, PartialEq)]
pub enum Site {
    /// `position` is the 1-based index into the positional arguments, or
    /// `None` for keyword arguments.
    Parameter { position: Option<usize>, name: String },
    Return,
}

impl Site {
    pub fn positional(position: usize, name: impl Into<String>) -> Self {
        Site::Parameter {
            position: Some(position),
            name: name.into(),
        }
    }

    pub fn keyword(name: impl Into<String>) -> Self {
        Site::Parameter {
            position: None,
            name: name.into(),
        }
    }

    fn label(&self) -> String {
        match self {
            Site::Parameter {
                position: Some(position),
                name,
            } => format!("Parameter number {}, {}", position, name),
            Site::Parameter { position: None, name } => name.clone(),
            Site::Return => String::from("return value"),
        }
    }
}

/// Renders a value for a diagnostic, truncated to [`VALUE_REPR_LIMIT`].
pub fn render_value(value: &Value) -> String {
    let rendered = value.to_string();
    if rendered.chars().count() > VALUE_REPR_LIMIT {
        let mut truncated: String = rendered.chars().take(VALUE_REPR_LIMIT).collect();
        truncated.push_str("...");
        truncated
    } else {
        rendered
    }
}

/// Builds the violation for one failing check of `function` at `site`.
#[derive(Debug, Clone)]
pub struct Report<'a> {
    function: &'a str,
    site: Site,
}

impl<'a> Report<'a> {
    pub fn new(function: &'a str, site: Site) -> Self {
        Report { function, site }
    }

    pub fn function(&self) -> &str {
        self.function
    }

    pub fn site(&self) -> &Site {
        &self.site
    }

    /// The value is not an instance of any declared type.
    pub fn type_mismatch(&self, value: &Value, declared: &[String]) -> Violation {
        let actual = value.type_of().name().to_string();

        match (&self.site, value.is_none()) {
            (Site::Return, false) => Violation::new(
                ViolationKind::ReturnTypeMismatch,
                format!(
                    "{}() -> <{}>: Actual type of return value, <{}>, is <{}>",
                    self.function,
                    declared.join(", "),
                    render_value(value),
                    actual
                ),
            ),
            (_, true) => Violation::new(
                ViolationKind::AbsenceMismatch,
                self.declared_actual(&render_value(value), declared, &[actual]),
            ),
            (Site::Parameter { .. }, false) => Violation::new(
                ViolationKind::ParameterTypeMismatch,
                self.declared_actual(&render_value(value), declared, &[actual]),
            ),
        }
    }

    /// Only the absence value was declared.
    pub fn absence_expected(&self, value: &Value) -> Violation {
        let actual = value.type_of().name().to_string();
        Violation::new(
            ViolationKind::AbsenceMismatch,
            self.declared_actual(&render_value(value), &[String::from("None")], &[actual]),
        )
    }

    pub fn condition_failed(&self, value: &Value) -> Violation {
        Violation::new(
            ViolationKind::ConditionFailed,
            format!(
                "{}(): {}={}:  Fails condition check.",
                self.function,
                self.site.label(),
                render_value(value)
            ),
        )
    }

    /// The container's exact type is none of `containers`.
    pub fn container_mismatch(&self, value: &Value, containers: &[String]) -> Violation {
        let actual = value.type_of().name().to_string();
        Violation::new(
            ViolationKind::CollectionContainerMismatch,
            self.declared_actual(&render_value(value), containers, &[actual]),
        )
    }

    /// Lists the offending values and their distinct types, not positions.
    pub fn element_mismatch(&self, offending: &[Value], declared: &[String], offending_types: &[String]) -> Violation {
        let offending = Value::set(offending.iter().cloned());
        Violation::new(
            ViolationKind::CollectionElementMismatch,
            self.declared_actual(&render_value(&offending), declared, offending_types),
        )
    }

    /// The value's type is a declared container but it has no elements to
    /// check.
    pub fn not_iterable(&self, value: &Value, declared: &[String]) -> Violation {
        let actual = value.type_of().name().to_string();
        Violation::new(
            ViolationKind::CollectionElementMismatch,
            self.declared_actual(&render_value(value), declared, &[actual]),
        )
    }

    fn declared_actual(&self, rendered_value: &str, declared: &[String], actual: &[String]) -> String {
        format!(
            "{}(): {}={}: Declared type=<{}>, actual type=<{}>.",
            self.function,
            self.site.label(),
            rendered_value,
            declared.join(", "),
            actual.join(", ")
        )
    }
}
