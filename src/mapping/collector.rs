use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use crate::descriptor::{MethodDescriptor, TypeDescriptor};
use crate::mapping::pattern::{AccessorKind, extract_field_name};

/// Raw accessor candidates discovered for one field name, in
/// declaration order. Winnowing reduces each list to at most one entry.
#[derive(Debug, Default)]
pub struct CandidateGroup {
    pub getters: Vec<Arc<MethodDescriptor>>,
    pub setters: Vec<Arc<MethodDescriptor>>,
}

/// Scans the type's method list and groups accessor candidates by
/// field name. `is`-pattern methods are getter candidates exactly like
/// `get`-pattern ones. Nothing is excluded here, no matter how many
/// candidates accumulate.
///
/// Returns a `BTreeMap` so downstream processing is independent of the
/// host's method enumeration order.
pub fn collect_candidates(descriptor: &TypeDescriptor) -> BTreeMap<String, CandidateGroup> {
    let mut groups: BTreeMap<String, CandidateGroup> = BTreeMap::new();

    for method in descriptor.methods() {
        let Some((field, kind)) = extract_field_name(method.name()) else {
            debug!(method = method.name(), "skipping method, not an accessor name");
            continue;
        };

        let group = groups.entry(field).or_default();
        match kind {
            AccessorKind::Getter => group.getters.push(Arc::clone(method)),
            AccessorKind::Setter => group.setters.push(Arc::clone(method)),
        }
    }

    groups
}
