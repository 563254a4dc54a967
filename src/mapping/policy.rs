use crate::core::ValueType;

/// Type-support predicate supplied by the persistence layer above the
/// resolver. The resolver consults it during getter winnowing but does
/// not define which types a concrete backend can store.
pub trait ScalarPolicy {
    fn supports(&self, ty: &ValueType) -> bool;
}

/// Accepts every scalar type and rejects object and void types.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultScalarPolicy;

impl ScalarPolicy for DefaultScalarPolicy {
    fn supports(&self, ty: &ValueType) -> bool {
        matches!(ty, ValueType::Scalar(_))
    }
}
