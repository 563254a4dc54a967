use std::sync::Arc;

use tracing::debug;

use crate::descriptor::MethodDescriptor;
use crate::mapping::collector::CandidateGroup;
use crate::mapping::policy::ScalarPolicy;

/// Reduces a candidate group to exactly one getter and one setter, or
/// drops the field.
///
/// Getters must take no parameters, return a non-void type, and return
/// a type the policy supports. Setters must take exactly one parameter
/// whose type equals the surviving getter's return type. Any survivor
/// count other than one, in either phase, drops the field: silent
/// arbitrary selection among overloads is worse than omitting the
/// field. Drops are never errors.
pub fn winnow(
    field: &str,
    group: &CandidateGroup,
    policy: &dyn ScalarPolicy,
) -> Option<(Arc<MethodDescriptor>, Arc<MethodDescriptor>)> {
    if group.getters.is_empty() || group.setters.is_empty() {
        debug!(
            field,
            getters = group.getters.len(),
            setters = group.setters.len(),
            "dropping field, needs at least one getter and one setter"
        );
        return None;
    }

    let getters: Vec<&Arc<MethodDescriptor>> = group
        .getters
        .iter()
        .filter(|m| {
            if m.param_count() != 0 {
                debug!(field, getter = %m.signature(), "getter discarded, has parameters");
                return false;
            }
            if m.returns().is_unit() {
                debug!(field, getter = %m.signature(), "getter discarded, returns void");
                return false;
            }
            if !policy.supports(m.returns()) {
                debug!(field, getter = %m.signature(), "getter discarded, unsupported return type");
                return false;
            }
            true
        })
        .collect();

    if getters.len() != 1 {
        debug!(
            field,
            survivors = getters.len(),
            "dropping field, getter candidates did not winnow to one"
        );
        return None;
    }
    let getter = Arc::clone(getters[0]);
    let return_type = getter.returns();

    let setters: Vec<&Arc<MethodDescriptor>> = group
        .setters
        .iter()
        .filter(|m| {
            if m.param_count() != 1 {
                debug!(field, setter = %m.signature(), "setter discarded, needs exactly one parameter");
                return false;
            }
            if &m.params()[0] != return_type {
                debug!(
                    field,
                    setter = %m.signature(),
                    expected = %return_type,
                    "setter discarded, parameter type does not match getter return type"
                );
                return false;
            }
            true
        })
        .collect();

    if setters.len() != 1 {
        debug!(
            field,
            survivors = setters.len(),
            "dropping field, setter candidates did not winnow to one"
        );
        return None;
    }

    Some((getter, Arc::clone(setters[0])))
}
