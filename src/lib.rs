//! Describe callables by name and by where they are defined.
//!
//! ```
//! use call_inspector::{InspectableCallable, SourceIndex, Value};
//!
//! let mut index = SourceIndex::new();
//! index.add_builtin("strlen");
//!
//! let callable = InspectableCallable::from_value(Value::str("strlen"), &index).unwrap();
//! assert_eq!(callable.format_name(), "strlen");
//! assert_eq!(callable.file_name_and_line_number(), "");
//! ```
pub mod analysis;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod utils;

pub use analysis::{InspectableCallable, ReflectionTarget, Reflector, SourceIndex};
pub use config::Config;
pub use error::{ConfigError, IndexError, InspectError, ReflectionError};
pub use models::{Callable, Closure, Instance, MethodTarget, ReflectionInfo, Value};
