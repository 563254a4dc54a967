pub mod error;
pub mod types;
pub mod value;

pub use error::{MappingError, Result};
pub use types::{DataType, ValueType};
pub use value::Value;
