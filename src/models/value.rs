// Copyright (c) 2025 Nicholas D. Crosbie
use std::fmt;
use std::panic::Location;

/// A value handed to the inspector by its host.
///
/// Only some shapes are callable: a function name, a `[target, method]`
/// pair, a closure, or an object whose type has a call operator.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    Object(Instance),
    Closure(Closure),
}

impl Value {
    pub fn str(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    /// `[target, method]` pair with a type name as target (static binding).
    pub fn static_pair(type_name: impl Into<String>, method: impl Into<String>) -> Self {
        Value::List(vec![Value::Str(type_name.into()), Value::Str(method.into())])
    }

    /// `[target, method]` pair with an instance as target.
    pub fn instance_pair(instance: Instance, method: impl Into<String>) -> Self {
        Value::List(vec![Value::Object(instance), Value::Str(method.into())])
    }
}

/// An object of some runtime type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    pub type_name: String,
}

impl Instance {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
        }
    }
}

/// An anonymous function value. It remembers where it was created, if known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Closure {
    pub file_path: Option<String>,
    pub line_number: Option<usize>,
}

impl Closure {
    /// Creates a closure whose declaration site is the caller's location.
    #[track_caller]
    pub fn here() -> Self {
        let caller = Location::caller();
        Self {
            file_path: Some(caller.file().to_string()),
            line_number: Some(caller.line() as usize),
        }
    }

    pub fn at(file_path: impl Into<String>, line_number: usize) -> Self {
        Self {
            file_path: Some(file_path.into()),
            line_number: Some(line_number),
        }
    }

    /// A closure with no known source, e.g. one produced by native code.
    pub fn native() -> Self {
        Self {
            file_path: None,
            line_number: None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Str(s) => write!(f, "{:?}", s),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Object(instance) => write!(f, "object({})", instance.type_name),
            Value::Closure(_) => write!(f, "{{closure}}"),
        }
    }
}
