// ============================================================================
// persistmap
// ============================================================================
//
// Resolves, for an arbitrary registered type, which pairs of accessor
// methods represent persistable fields, reconciles the annotations
// attached to each pair, and produces a validated binding table that
// higher persistence layers (query building, row hydration) consume.

pub mod core;
pub mod descriptor;
pub mod mapping;

// Re-export main types for convenience
pub use crate::core::{DataType, MappingError, Result, Value, ValueType};
pub use descriptor::{ColumnSpec, MethodDescriptor, TypeDescriptor};
pub use mapping::{
    AccessorLookup, BindingTable, DefaultScalarPolicy, FieldBinding, ScalarPolicy,
    extract_field_name, resolve_field_bindings, resolve_with_default_policy,
};

/// One-stop entry point bound to a scalar policy.
///
/// # Examples
///
/// ```
/// use persistmap::{DataType, MethodDescriptor, Resolver, TypeDescriptor};
///
/// # fn main() -> persistmap::Result<()> {
/// let user = TypeDescriptor::new("User")
///     .with_method(MethodDescriptor::getter("getName", DataType::Text))
///     .with_method(MethodDescriptor::setter("setName", DataType::Text))
///     .with_method(MethodDescriptor::getter("isActive", DataType::Boolean))
///     .with_method(MethodDescriptor::setter("setActive", DataType::Boolean));
///
/// let table = Resolver::default().resolve(&user)?;
/// assert_eq!(table.len(), 2);
/// assert!(table.binding("active").is_some());
/// # Ok(())
/// # }
/// ```
pub struct Resolver<P: ScalarPolicy = DefaultScalarPolicy> {
    policy: P,
}

impl<P: ScalarPolicy> Resolver<P> {
    pub fn with_policy(policy: P) -> Self {
        Self { policy }
    }

    pub fn resolve(&self, descriptor: &TypeDescriptor) -> Result<BindingTable> {
        resolve_field_bindings(descriptor, &self.policy)
    }
}

impl Default for Resolver<DefaultScalarPolicy> {
    fn default() -> Self {
        Self {
            policy: DefaultScalarPolicy,
        }
    }
}
