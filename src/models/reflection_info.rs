use serde::Serialize;
use std::fmt;

/// What the reflector knows about a callable's declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReflectionInfo {
    pub name: String,
    pub file_path: Option<String>,
    pub start_line: Option<usize>,
    pub end_line: Option<usize>,
}

impl ReflectionInfo {
    pub fn new(
        name: impl Into<String>,
        file_path: Option<String>,
        start_line: Option<usize>,
        end_line: Option<usize>,
    ) -> Self {
        Self {
            name: name.into(),
            file_path,
            start_line,
            end_line,
        }
    }

    /// A declaration without any source, such as a native builtin.
    pub fn native(name: impl Into<String>) -> Self {
        Self::new(name, None, None, None)
    }
}

impl fmt::Display for ReflectionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.file_path, self.start_line) {
            (Some(file_path), Some(line)) => write!(f, "{} at {}:{}", self.name, file_path, line),
            _ => write!(f, "{} (native)", self.name),
        }
    }
}
