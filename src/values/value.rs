use std::{fmt::Display, sync::Arc};

use super::types::{Type, BOOL, BYTES, DICT, FLOAT, INT, LIST, NONE_TYPE, SET, STR, TUPLE};

/// A runtime value handed to or returned from a checked callable.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The absence value.
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Bytes(Vec<u8>),
    List(Vec<Value>),
    Tuple(Vec<Value>),
    /// Insertion ordered, without duplicates. Build with [`Value::set`].
    Set(Vec<Value>),
    Dict(Vec<(Value, Value)>),
    Object(Arc<Instance>),
}

impl Value {
    /// Builds a set, dropping duplicate elements.
    pub fn set<I: IntoIterator<Item = Value>>(values: I) -> Self {
        let mut elements: Vec<Value> = vec![];
        for value in values {
            if !elements.contains(&value) {
                elements.push(value);
            }
        }
        Value::Set(elements)
    }

    /// The exact runtime type of the value.
    pub fn type_of(&self) -> Type {
        match self {
            Value::None => NONE_TYPE.clone(),
            Value::Bool(_) => BOOL.clone(),
            Value::Int(_) => INT.clone(),
            Value::Float(_) => FLOAT.clone(),
            Value::Str(_) => STR.clone(),
            Value::Bytes(_) => BYTES.clone(),
            Value::List(_) => LIST.clone(),
            Value::Tuple(_) => TUPLE.clone(),
            Value::Set(_) => SET.clone(),
            Value::Dict(_) => DICT.clone(),
            Value::Object(instance) => instance.class().clone(),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    pub fn is_instance(&self, ty: &Type) -> bool {
        self.type_of().is_subtype_of(ty)
    }

    /// The elements the value yields when iterated. Dictionaries yield their
    /// keys, strings their characters and bytes their integer values.
    /// `None` for values that cannot be iterated.
    pub fn elements(&self) -> Option<Vec<Value>> {
        match self {
            Value::List(values) | Value::Tuple(values) | Value::Set(values) => Some(values.clone()),
            Value::Dict(entries) => Some(entries.iter().map(|(key, _)| key.clone()).collect()),
            Value::Str(value) => Some(value.chars().map(|c| Value::Str(c.to_string())).collect()),
            Value::Bytes(bytes) => Some(bytes.iter().map(|byte| Value::Int(i64::from(*byte))).collect()),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(value) => Some(*value),
            Value::Bool(value) => Some(*value as i64),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(value) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Numeric view used by conditions: ints, bools and floats.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Float(value) => Some(*value),
            _ => self.as_int().map(|value| value as f64),
        }
    }

    /// Unambiguous rendering; strings are quoted.
    pub fn repr(&self) -> String {
        match self {
            Value::None => String::from("None"),
            Value::Bool(true) => String::from("True"),
            Value::Bool(false) => String::from("False"),
            Value::Int(value) => value.to_string(),
            Value::Float(value) => render_float(*value),
            Value::Str(value) => format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'")),
            Value::Bytes(bytes) => render_bytes(bytes),
            Value::List(values) => format!("[{}]", join_repr(values)),
            Value::Tuple(values) if values.len() == 1 => format!("({},)", values[0].repr()),
            Value::Tuple(values) => format!("({})", join_repr(values)),
            Value::Set(values) if values.is_empty() => String::from("set()"),
            Value::Set(values) => format!("{{{}}}", join_repr(values)),
            Value::Dict(entries) => format!(
                "{{{}}}",
                entries
                    .iter()
                    .map(|(key, value)| format!("{}: {}", key.repr(), value.repr()))
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
            Value::Object(instance) => format!(
                "{}({})",
                instance.class().name(),
                instance
                    .fields()
                    .iter()
                    .map(|(name, value)| format!("{}={}", name, value.repr()))
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

fn join_repr(values: &[Value]) -> String {
    values.iter().map(Value::repr).collect::<Vec<String>>().join(", ")
}

fn render_float(value: f64) -> String {
    if value.is_nan() {
        String::from("nan")
    } else if value.is_infinite() {
        String::from(if value > 0.0 { "inf" } else { "-inf" })
    } else {
        let rendered = format!("{:?}", value);
        match rendered.split_once('e') {
            Some((mantissa, exponent)) => {
                let (sign, digits) = match exponent.strip_prefix('-') {
                    Some(digits) => ('-', digits),
                    None => ('+', exponent),
                };
                format!("{}e{}{:0>2}", mantissa, sign, digits)
            }
            None => rendered,
        }
    }
}

fn render_bytes(bytes: &[u8]) -> String {
    let mut rendered = String::from("b'");
    for byte in bytes {
        match byte {
            b'\\' => rendered.push_str("\\\\"),
            b'\'' => rendered.push_str("\\'"),
            b'\n' => rendered.push_str("\\n"),
            b'\t' => rendered.push_str("\\t"),
            b'\r' => rendered.push_str("\\r"),
            0x20..=0x7e => rendered.push(*byte as char),
            _ => rendered.push_str(&format!("\\x{:02x}", byte)),
        }
    }
    rendered.push('\'');
    rendered
}

/// Plain rendering: strings appear without quotes, everything else as `repr`.
impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Str(value) => write!(f, "{}", value),
            _ => write!(f, "{}", self.repr()),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Value::List(values)
    }
}

/// An instance of a user class.
#[derive(Debug, PartialEq)]
pub struct Instance {
    class: Type,
    fields: Vec<(String, Value)>,
}

impl Instance {
    pub fn new(class: Type, fields: Vec<(String, Value)>) -> Self {
        Instance { class, fields }
    }

    pub fn class(&self) -> &Type {
        &self.class
    }

    pub fn fields(&self) -> &[(String, Value)] {
        &self.fields
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }
}
