use std::{collections::HashMap, fmt::Display, sync::Arc};

use lazy_static::lazy_static;

use crate::{
    errors::errors::{Violation, ViolationKind},
    invocation::callable::Arguments,
};

use super::value::{Instance, Value};

lazy_static! {
    pub static ref OBJECT: Type = Type::builtin(Builtin::Object, "object", None);
    pub static ref NONE_TYPE: Type = Type::builtin(Builtin::NoneType, "NoneType", Some(&*OBJECT));
    pub static ref INT: Type = Type::builtin(Builtin::Int, "int", Some(&*OBJECT));
    pub static ref BOOL: Type = Type::builtin(Builtin::Bool, "bool", Some(&*INT));
    pub static ref FLOAT: Type = Type::builtin(Builtin::Float, "float", Some(&*OBJECT));
    pub static ref STR: Type = Type::builtin(Builtin::Str, "str", Some(&*OBJECT));
    pub static ref BYTES: Type = Type::builtin(Builtin::Bytes, "bytes", Some(&*OBJECT));
    pub static ref LIST: Type = Type::builtin(Builtin::List, "list", Some(&*OBJECT));
    pub static ref TUPLE: Type = Type::builtin(Builtin::Tuple, "tuple", Some(&*OBJECT));
    pub static ref SET: Type = Type::builtin(Builtin::Set, "set", Some(&*OBJECT));
    pub static ref DICT: Type = Type::builtin(Builtin::Dict, "dict", Some(&*OBJECT));

    pub static ref BUILTIN_LOOKUP: HashMap<&'static str, Type> = {
        let mut map = HashMap::new();
        for ty in [
            &*OBJECT, &*NONE_TYPE, &*INT, &*BOOL, &*FLOAT, &*STR,
            &*BYTES, &*LIST, &*TUPLE, &*SET, &*DICT,
        ] {
            map.insert(ty.builtin_name(), ty.clone());
        }
        map
    };
}

/// Builtin runtime types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Object,
    NoneType,
    Bool,
    Int,
    Float,
    Str,
    Bytes,
    List,
    Tuple,
    Set,
    Dict,
}

impl Builtin {
    /// The value a no-argument construction produces.
    ///
    /// `object` has no value representation of its own.
    fn zero_value(&self) -> Option<Value> {
        match self {
            Builtin::Object => None,
            Builtin::NoneType => Some(Value::None),
            Builtin::Bool => Some(Value::Bool(false)),
            Builtin::Int => Some(Value::Int(0)),
            Builtin::Float => Some(Value::Float(0.0)),
            Builtin::Str => Some(Value::Str(String::new())),
            Builtin::Bytes => Some(Value::Bytes(vec![])),
            Builtin::List => Some(Value::List(vec![])),
            Builtin::Tuple => Some(Value::Tuple(vec![])),
            Builtin::Set => Some(Value::Set(vec![])),
            Builtin::Dict => Some(Value::Dict(vec![])),
        }
    }
}

#[derive(Debug)]
struct TypeInfo {
    name: String,
    base: Option<Type>,
    fields: Vec<String>,
    builtin: Option<Builtin>,
}

/// A nominal runtime type.
///
/// Types compare by identity: two classes declared with the same name are
/// still different types. Every type except `object` has exactly one base.
#[derive(Clone)]
pub struct Type(Arc<TypeInfo>);

impl Type {
    fn builtin(builtin: Builtin, name: &str, base: Option<&Type>) -> Self {
        Type(Arc::new(TypeInfo {
            name: name.to_string(),
            base: base.cloned(),
            fields: vec![],
            builtin: Some(builtin),
        }))
    }

    /// Starts declaring a user class deriving from `object`.
    pub fn class(name: impl Into<String>) -> TypeBuilder {
        TypeBuilder {
            name: name.into(),
            base: OBJECT.clone(),
            fields: vec![],
        }
    }

    /// Looks a builtin type up by its name.
    pub fn lookup_builtin(name: &str) -> Option<Type> {
        BUILTIN_LOOKUP.get(name).cloned()
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    fn builtin_name(&self) -> &'static str {
        match self.0.builtin {
            Some(Builtin::Object) => "object",
            Some(Builtin::NoneType) => "NoneType",
            Some(Builtin::Bool) => "bool",
            Some(Builtin::Int) => "int",
            Some(Builtin::Float) => "float",
            Some(Builtin::Str) => "str",
            Some(Builtin::Bytes) => "bytes",
            Some(Builtin::List) => "list",
            Some(Builtin::Tuple) => "tuple",
            Some(Builtin::Set) => "set",
            Some(Builtin::Dict) => "dict",
            None => "",
        }
    }

    pub fn base(&self) -> Option<&Type> {
        self.0.base.as_ref()
    }

    pub fn get_builtin(&self) -> Option<Builtin> {
        self.0.builtin
    }

    /// Field names in construction order, inherited fields first.
    pub fn fields(&self) -> Vec<String> {
        let mut fields = match self.base() {
            Some(base) => base.fields(),
            None => vec![],
        };
        fields.extend(self.0.fields.iter().cloned());
        fields
    }

    /// Whether `self` is `other` or derives from it, directly or not.
    pub fn is_subtype_of(&self, other: &Type) -> bool {
        let mut current = Some(self);
        while let Some(ty) = current {
            if ty == other {
                return true;
            }
            current = ty.base();
        }
        false
    }

    /// Constructs a value of this type from call arguments.
    pub fn instantiate(&self, arguments: Arguments) -> Result<Value, Violation> {
        match self.0.builtin {
            Some(builtin) => self.instantiate_builtin(builtin, arguments),
            None => self.instantiate_class(arguments),
        }
    }

    fn instantiate_builtin(&self, builtin: Builtin, arguments: Arguments) -> Result<Value, Violation> {
        if !arguments.keyword.is_empty() {
            return Err(self.construction_failed("keyword arguments are not accepted"));
        }
        if arguments.positional.len() > 1 {
            return Err(self.construction_failed(format!(
                "takes at most 1 argument ({} given)",
                arguments.positional.len()
            )));
        }

        match (builtin, arguments.positional.into_iter().next()) {
            (_, None) => builtin
                .zero_value()
                .ok_or_else(|| self.construction_failed("has no value of its own")),
            (Builtin::List | Builtin::Tuple | Builtin::Set, Some(source)) => {
                let elements = source
                    .elements()
                    .ok_or_else(|| {
                        self.construction_failed(format!(
                            "`{}` object is not iterable",
                            source.type_of().name()
                        ))
                    })?
                    .into_iter();
                Ok(match builtin {
                    Builtin::List => Value::List(elements.collect()),
                    Builtin::Tuple => Value::Tuple(elements.collect()),
                    _ => Value::set(elements),
                })
            }
            (_, Some(value)) if value.is_instance(self) => Ok(value),
            (_, Some(value)) => Err(self.construction_failed(format!(
                "expected `{}` argument, received `{}`",
                self.name(),
                value.type_of().name()
            ))),
        }
    }

    fn instantiate_class(&self, arguments: Arguments) -> Result<Value, Violation> {
        let fields = self.fields();
        if arguments.positional.len() > fields.len() {
            return Err(self.construction_failed(format!(
                "takes {} positional arguments but {} were given",
                fields.len(),
                arguments.positional.len()
            )));
        }

        let mut slots: Vec<Option<Value>> = vec![None; fields.len()];
        for (slot, value) in slots.iter_mut().zip(arguments.positional) {
            *slot = Some(value);
        }
        for (name, value) in arguments.keyword {
            let index = fields
                .iter()
                .position(|field| *field == name)
                .ok_or_else(|| self.construction_failed(format!("unexpected keyword argument `{}`", name)))?;
            if slots[index].is_some() {
                return Err(self.construction_failed(format!("multiple values for field `{}`", name)));
            }
            slots[index] = Some(value);
        }

        let values = fields
            .into_iter()
            .zip(slots)
            .map(|(name, slot)| match slot {
                Some(value) => Ok((name, value)),
                None => Err(self.construction_failed(format!("missing field `{}`", name))),
            })
            .collect::<Result<Vec<(String, Value)>, Violation>>()?;

        Ok(Value::Object(Arc::new(Instance::new(self.clone(), values))))
    }

    fn construction_failed(&self, reason: impl Into<String>) -> Violation {
        Violation::from_kind(ViolationKind::ConstructionFailed {
            type_name: self.name().to_string(),
            reason: reason.into(),
        })
    }
}

impl PartialEq for Type {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Type {}

impl std::fmt::Debug for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Type({})", self.name())
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Builder for user classes.
#[derive(Debug)]
pub struct TypeBuilder {
    name: String,
    base: Type,
    fields: Vec<String>,
}

impl TypeBuilder {
    pub fn extends(mut self, base: &Type) -> Self {
        self.base = base.clone();
        self
    }

    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.fields.push(name.into());
        self
    }

    pub fn build(self) -> Type {
        Type(Arc::new(TypeInfo {
            name: self.name,
            base: Some(self.base),
            fields: self.fields,
            builtin: None,
        }))
    }
}
