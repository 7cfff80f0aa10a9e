// Copyright (c) 2025 Nicholas D. Crosbie
use crate::error::ReflectionError;
use crate::models::{Closure, ReflectionInfo};

/// Method name treated as the call operator unless configured otherwise.
pub const DEFAULT_CALL_OPERATOR: &str = "call";

/// A declaration the reflector can be asked about.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReflectionTarget<'a> {
    Function(&'a str),
    Method { type_name: &'a str, method: &'a str },
    Closure(&'a Closure),
}

/// The host's introspection facility.
///
/// `reflect` may fail even for names that passed the existence checks; the
/// inspector treats any failure as missing metadata.
pub trait Reflector: Send + Sync {
    fn function_exists(&self, name: &str) -> bool;

    fn method_exists(&self, type_name: &str, method: &str) -> bool;

    fn reflect(&self, target: ReflectionTarget<'_>) -> Result<ReflectionInfo, ReflectionError>;

    fn call_operator(&self) -> &str {
        DEFAULT_CALL_OPERATOR
    }
}
