use std::sync::Arc;

use tracing::debug;

use crate::core::{MappingError, Result};
use crate::descriptor::{ColumnSpec, MethodDescriptor};

/// Outcome of reconciling the annotations on a winnowed accessor pair.
#[derive(Debug)]
pub enum Disposition {
    /// The field participates in persistence, with at most one
    /// authoritative annotation.
    Include(Option<ColumnSpec>),
    /// A NoColumn directive removes the field from the table entirely.
    Exclude,
}

/// Reconciles the Column annotations and NoColumn directives declared
/// independently on the chosen getter and setter.
///
/// Exclusion and annotation on the same pair is a conflict, not an
/// override. Two annotations must be structurally equal. The
/// getter/setter type compatibility already guaranteed by winnowing is
/// re-checked here; a mismatch at this point is an internal-invariant
/// violation and always fatal.
pub fn reconcile(
    type_name: &str,
    field: &str,
    getter: &Arc<MethodDescriptor>,
    setter: &Arc<MethodDescriptor>,
) -> Result<Disposition> {
    let getter_column = getter.column();
    let setter_column = setter.column();

    if getter.is_no_column() || setter.is_no_column() {
        if getter_column.is_some() || setter_column.is_some() {
            return Err(MappingError::ConflictingDirective {
                type_name: type_name.to_string(),
                field: field.to_string(),
            });
        }
        debug!(field, "field excluded by NoColumn directive");
        return Ok(Disposition::Exclude);
    }

    // Re-assert what winnowing already guaranteed; a binding with
    // mismatched accessor types must never reach the table.
    if setter.param_count() != 1 {
        return Err(incompatible(
            type_name,
            field,
            getter,
            setter,
            format!(
                "setter should have a single parameter but has {}",
                setter.param_count()
            ),
        ));
    }
    if getter.returns().is_unit() {
        return Err(incompatible(
            type_name,
            field,
            getter,
            setter,
            "getter must have a return type".to_string(),
        ));
    }
    if &setter.params()[0] != getter.returns() {
        return Err(incompatible(
            type_name,
            field,
            getter,
            setter,
            format!(
                "getter returns {} but setter takes {}",
                getter.returns(),
                setter.params()[0]
            ),
        ));
    }

    let column = match (getter_column, setter_column) {
        (Some(g), Some(s)) => {
            if g != s {
                return Err(MappingError::ConflictingAnnotation {
                    type_name: type_name.to_string(),
                    field: field.to_string(),
                    getter: getter.signature(),
                    setter: setter.signature(),
                    getter_column: g.to_string(),
                    setter_column: s.to_string(),
                });
            }
            Some(g.clone())
        }
        (Some(g), None) => Some(g.clone()),
        (None, Some(s)) => Some(s.clone()),
        (None, None) => None,
    };

    // lift the access barrier once, at resolution time
    getter.make_accessible();
    setter.make_accessible();

    Ok(Disposition::Include(column))
}

fn incompatible(
    type_name: &str,
    field: &str,
    getter: &MethodDescriptor,
    setter: &MethodDescriptor,
    detail: String,
) -> MappingError {
    MappingError::IncompatibleAccessors {
        type_name: type_name.to_string(),
        field: field.to_string(),
        getter: getter.signature(),
        setter: setter.signature(),
        detail,
    }
}
