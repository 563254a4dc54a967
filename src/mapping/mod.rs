//! Accessor resolution pipeline: collect candidates, winnow them to
//! one getter/setter pair per field, reconcile annotations, build the
//! binding table.
//!
//! Fatal conflicts abort the whole type's resolution; a failed call
//! never yields a partial table. Fields that merely fail winnowing are
//! dropped quietly, that is how a type opts a method pair out of
//! persistence without saying anything.

pub mod collector;
pub mod pattern;
pub mod policy;
pub mod reconcile;
pub mod table;
pub mod winnow;

use std::collections::HashMap;

use tracing::debug;

use crate::core::Result;
use crate::descriptor::TypeDescriptor;

pub use collector::{CandidateGroup, collect_candidates};
pub use pattern::{AccessorKind, extract_field_name};
pub use policy::{DefaultScalarPolicy, ScalarPolicy};
pub use reconcile::{Disposition, reconcile};
pub use table::{AccessorLookup, BindingTable, FieldBinding};
pub use winnow::winnow;

/// Resolves the binding table for one type: which getter/setter pairs
/// are persistable fields, under which reconciled annotation, with
/// which declared type.
///
/// Deterministic and synchronous; resolving an unchanged type twice
/// yields structurally equal tables. The only process-level side
/// effect is marking the chosen accessors accessible, which is
/// idempotent.
pub fn resolve_field_bindings(
    descriptor: &TypeDescriptor,
    policy: &dyn ScalarPolicy,
) -> Result<BindingTable> {
    debug!(type_name = descriptor.name(), "resolving field bindings");

    let groups = collect_candidates(descriptor);
    let mut bindings = HashMap::new();

    for (field, group) in &groups {
        let Some((getter, setter)) = winnow(field, group, policy) else {
            continue;
        };

        match reconcile(descriptor.name(), field, &getter, &setter)? {
            Disposition::Exclude => continue,
            Disposition::Include(column) => {
                let value_type = getter.returns().clone();
                bindings.insert(
                    field.clone(),
                    FieldBinding::new(field.clone(), getter, setter, value_type, column),
                );
            }
        }
    }

    debug!(
        type_name = descriptor.name(),
        fields = bindings.len(),
        "field bindings resolved"
    );
    Ok(BindingTable::new(descriptor.name().to_string(), bindings))
}

/// [`resolve_field_bindings`] with the [`DefaultScalarPolicy`].
pub fn resolve_with_default_policy(descriptor: &TypeDescriptor) -> Result<BindingTable> {
    resolve_field_bindings(descriptor, &DefaultScalarPolicy)
}
