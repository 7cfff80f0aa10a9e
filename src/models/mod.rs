pub mod callable;
pub mod reflection_info;
pub mod value;

pub use callable::*;
pub use reflection_info::*;
pub use value::*;
