use std::fmt;

use serde::{Deserialize, Serialize};

/// Scalar column types the persistence layer knows how to store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    Integer,
    Float,
    Text,
    Boolean,
    Timestamp,
    Date,
    Uuid,
    Bytes,
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer => write!(f, "INTEGER"),
            Self::Float => write!(f, "FLOAT"),
            Self::Text => write!(f, "TEXT"),
            Self::Boolean => write!(f, "BOOLEAN"),
            Self::Timestamp => write!(f, "TIMESTAMP"),
            Self::Date => write!(f, "DATE"),
            Self::Uuid => write!(f, "UUID"),
            Self::Bytes => write!(f, "BYTES"),
        }
    }
}

/// Declared type of an accessor slot: a getter's return type or a
/// setter's single parameter type.
///
/// Compatibility between getter and setter is plain equality; there is
/// no implicit widening or narrowing between variants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueType {
    /// A scalar the persistence layer can store directly.
    Scalar(DataType),
    /// A non-scalar host type, carried by name for diagnostics only.
    Object(String),
    /// The void/unit type. Only legal as a setter return type.
    Unit,
}

impl ValueType {
    pub fn object(name: impl Into<String>) -> Self {
        Self::Object(name.into())
    }

    pub fn is_unit(&self) -> bool {
        matches!(self, Self::Unit)
    }
}

impl From<DataType> for ValueType {
    fn from(data_type: DataType) -> Self {
        Self::Scalar(data_type)
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(dt) => write!(f, "{}", dt),
            Self::Object(name) => write!(f, "{}", name),
            Self::Unit => write!(f, "VOID"),
        }
    }
}
