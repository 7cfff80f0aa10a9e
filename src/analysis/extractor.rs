// Copyright (c) 2025 Nicholas D. Crosbie
use crate::models::{Instance, Value};

/// Turns a command line descriptor into a host value:
/// - `Type->method` is a method bound to an instance of `Type`,
/// - `[Type, method]` is a method bound to the type itself,
/// - `new Type` is an instance of `Type`,
/// - anything else is a plain name, `Type::method` included.
pub fn parse_descriptor(descriptor: &str) -> Value {
    let descriptor = descriptor.trim();

    if let Some((type_name, method)) = descriptor.split_once("->") {
        return Value::instance_pair(Instance::new(type_name.trim()), method.trim());
    }

    if let Some(inner) = descriptor
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
    {
        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
        return match parts.as_slice() {
            [type_name, method] => Value::static_pair(*type_name, *method),
            _ => Value::List(parts.into_iter().map(Value::str).collect()),
        };
    }

    if let Some(type_name) = descriptor.strip_prefix("new ") {
        return Value::Object(Instance::new(type_name.trim()));
    }

    Value::str(descriptor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_each_form() {
        assert_eq!(parse_descriptor("strlen"), Value::str("strlen"));
        assert_eq!(
            parse_descriptor("DateTime::createFromFormat"),
            Value::str("DateTime::createFromFormat")
        );
        assert_eq!(
            parse_descriptor("DateTime->format"),
            Value::instance_pair(Instance::new("DateTime"), "format")
        );
        assert_eq!(
            parse_descriptor("[DateTime, createFromFormat]"),
            Value::static_pair("DateTime", "createFromFormat")
        );
        assert_eq!(
            parse_descriptor("new Greeter"),
            Value::Object(Instance::new("Greeter"))
        );
    }

    #[test]
    fn odd_lists_stay_lists() {
        assert_eq!(
            parse_descriptor("[a, b, c]"),
            Value::List(vec![Value::str("a"), Value::str("b"), Value::str("c")])
        );
    }
}
