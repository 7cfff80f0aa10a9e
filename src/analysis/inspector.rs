// Copyright (c) 2025 Nicholas D. Crosbie
use crate::analysis::reflector::{ReflectionTarget, Reflector};
use crate::error::InspectError;
use crate::models::{split_scoped, Callable, MethodTarget, ReflectionInfo, Value, CLOSURE_NAME};
use crate::utils::normalize_path;
use std::sync::OnceLock;
use tracing::{debug, trace};

/// Wraps a callable value and describes it: display name, defining file and
/// start line.
///
/// Reflection is deferred until one of the location queries needs it, then
/// done at most once. Lookup failures are remembered as missing metadata, so
/// every query succeeds with possibly empty results.
pub struct InspectableCallable<'r> {
    callable: Callable,
    reflector: &'r dyn Reflector,
    reflection: OnceLock<Option<ReflectionInfo>>,
}

impl<'r> InspectableCallable<'r> {
    /// Fails with [`InspectError::InvalidArgument`] when `value` is not callable.
    pub fn from_value(value: Value, reflector: &'r dyn Reflector) -> Result<Self, InspectError> {
        match classify(value, reflector) {
            Ok(callable) => Ok(Self {
                callable,
                reflector,
                reflection: OnceLock::new(),
            }),
            Err(value) => Err(InspectError::InvalidArgument(value.to_string())),
        }
    }

    /// Examples:
    /// - `foo` for a function named `foo`.
    /// - `Foo::bar` for a static method `bar` on type `Foo`.
    /// - `Foo->bar` for an instance method `bar` on type `Foo`.
    pub fn format_name(&self) -> String {
        match &self.callable {
            Callable::Named(name) => name.clone(),
            Callable::Method {
                target: MethodTarget::Instance(instance),
                method,
            } => format!("{}->{}", instance.type_name, method),
            Callable::Method {
                target: MethodTarget::Type(type_name),
                method,
            } => format!("{}::{}", type_name, method),
            Callable::Closure(_) => CLOSURE_NAME.to_string(),
            Callable::Invokable(instance) => instance.type_name.clone(),
        }
    }

    /// The resolved declaration, or `None` if it could not be determined.
    pub fn reflection(&self) -> Option<&ReflectionInfo> {
        self.reflection.get_or_init(|| self.resolve()).as_ref()
    }

    /// Defining file with `/` separators, or an empty string if unknown
    /// (e.g. a builtin).
    pub fn file_name(&self) -> String {
        self.reflection()
            .and_then(|info| info.file_path.as_deref())
            .map(normalize_path)
            .unwrap_or_default()
    }

    /// 1-based start line, or 0 if unknown.
    pub fn start_line(&self) -> usize {
        self.reflection()
            .and_then(|info| info.start_line)
            .unwrap_or(0)
    }

    /// Last line of the declaration, or 0 if unknown.
    pub fn end_line(&self) -> usize {
        self.reflection()
            .and_then(|info| info.end_line)
            .unwrap_or(0)
    }

    /// `path/to/file.rs:123`, or an empty string unless both parts are known.
    pub fn file_name_and_line_number(&self) -> String {
        let file_name = self.file_name();
        let line_number = self.start_line();

        if file_name.is_empty() || line_number == 0 {
            return String::new();
        }

        format!("{}:{}", file_name, line_number)
    }

    fn resolve(&self) -> Option<ReflectionInfo> {
        let reflector = self.reflector;
        let result = match &self.callable {
            Callable::Closure(closure) => reflector.reflect(ReflectionTarget::Closure(closure)),
            Callable::Invokable(instance) => {
                let call_operator = reflector.call_operator();
                if !reflector.method_exists(&instance.type_name, call_operator) {
                    debug!(type_name = %instance.type_name, "object has no call operator");
                    return None;
                }
                reflector.reflect(ReflectionTarget::Method {
                    type_name: instance.type_name.as_str(),
                    method: call_operator,
                })
            }
            Callable::Method { target, method } => reflector.reflect(ReflectionTarget::Method {
                type_name: target.type_name(),
                method: method.as_str(),
            }),
            Callable::Named(name) => {
                if reflector.function_exists(name) {
                    reflector.reflect(ReflectionTarget::Function(name.as_str()))
                } else if let Some((type_name, method)) = split_scoped(name) {
                    reflector.reflect(ReflectionTarget::Method { type_name, method })
                } else {
                    debug!(name = %name, "name is neither a function nor a method");
                    return None;
                }
            }
        };

        match result {
            Ok(info) => {
                trace!(callable = %self.format_name(), declaration = %info, "resolved");
                Some(info)
            }
            Err(err) => {
                debug!(callable = %self.format_name(), error = %err, "reflection failed");
                None
            }
        }
    }
}

/// Sorts a value into one of the callable shapes, handing it back untouched
/// when it is not callable.
fn classify(value: Value, reflector: &dyn Reflector) -> Result<Callable, Value> {
    match value {
        Value::Str(name) => {
            let callable = reflector.function_exists(&name)
                || split_scoped(&name)
                    .is_some_and(|(type_name, method)| reflector.method_exists(type_name, method));
            if callable {
                Ok(Callable::Named(name))
            } else {
                Err(Value::Str(name))
            }
        }
        Value::List(items) => classify_pair(items, reflector),
        Value::Closure(closure) => Ok(Callable::Closure(closure)),
        Value::Object(instance) => {
            if reflector.method_exists(&instance.type_name, reflector.call_operator()) {
                Ok(Callable::Invokable(instance))
            } else {
                Err(Value::Object(instance))
            }
        }
        other => Err(other),
    }
}

fn classify_pair(items: Vec<Value>, reflector: &dyn Reflector) -> Result<Callable, Value> {
    let pair = match items.as_slice() {
        [Value::Object(instance), Value::Str(method)] => {
            Some((MethodTarget::Instance(instance.clone()), method.clone()))
        }
        [Value::Str(type_name), Value::Str(method)] => {
            Some((MethodTarget::Type(type_name.clone()), method.clone()))
        }
        _ => None,
    };

    match pair {
        Some((target, method)) if reflector.method_exists(target.type_name(), &method) => {
            Ok(Callable::Method { target, method })
        }
        _ => Err(Value::List(items)),
    }
}
