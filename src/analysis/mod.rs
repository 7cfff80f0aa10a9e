// Copyright (c) 2025 Nicholas D. Crosbie
pub mod extractor;
pub mod inspector;
pub mod reflector;
pub mod source_index;
pub mod type_names;
pub mod visitor;

pub use extractor::*;
pub use inspector::*;
pub use reflector::*;
pub use source_index::*;
pub use type_names::*;
pub use visitor::*;
