// Copyright (c) 2025 Nicholas D. Crosbie
use super::value::{Closure, Instance};

/// The shape of a value that passed the callable check.
#[derive(Debug, Clone, PartialEq)]
pub enum Callable {
    /// A function name, possibly in `Type::method` form.
    Named(String),
    /// A `[target, method]` pair.
    Method { target: MethodTarget, method: String },
    Closure(Closure),
    /// An object whose type defines the call operator.
    Invokable(Instance),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MethodTarget {
    /// Bound to an object: `Type->method`.
    Instance(Instance),
    /// Bound to a type: `Type::method`.
    Type(String),
}

impl MethodTarget {
    pub fn type_name(&self) -> &str {
        match self {
            MethodTarget::Instance(instance) => &instance.type_name,
            MethodTarget::Type(name) => name,
        }
    }
}

/// Display name of every anonymous function.
pub const CLOSURE_NAME: &str = "{closure}";

/// Scope resolution marker separating a type from one of its methods.
pub const SCOPE_MARKER: &str = "::";

/// Splits `Type::method` into its two parts. Anything after a second
/// marker is ignored; the type part is not checked.
pub fn split_scoped(name: &str) -> Option<(&str, &str)> {
    let mut parts = name.split(SCOPE_MARKER);
    let type_name = parts.next()?;
    let method = parts.next()?;
    Some((type_name, method))
}
