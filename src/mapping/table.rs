use std::collections::HashMap;
use std::sync::Arc;

use crate::core::ValueType;
use crate::descriptor::{ColumnSpec, MethodDescriptor};

/// The resolved unit for one logical field: its name, its chosen
/// accessor pair, the declared value type, and the reconciled
/// annotation if any.
#[derive(Debug, Clone)]
pub struct FieldBinding {
    name: String,
    getter: Arc<MethodDescriptor>,
    setter: Arc<MethodDescriptor>,
    value_type: ValueType,
    column: Option<ColumnSpec>,
}

impl FieldBinding {
    pub(crate) fn new(
        name: String,
        getter: Arc<MethodDescriptor>,
        setter: Arc<MethodDescriptor>,
        value_type: ValueType,
        column: Option<ColumnSpec>,
    ) -> Self {
        Self {
            name,
            getter,
            setter,
            value_type,
            column,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn getter(&self) -> &Arc<MethodDescriptor> {
        &self.getter
    }

    pub fn setter(&self) -> &Arc<MethodDescriptor> {
        &self.setter
    }

    pub fn value_type(&self) -> &ValueType {
        &self.value_type
    }

    pub fn column(&self) -> Option<&ColumnSpec> {
        self.column.as_ref()
    }

    /// The column name this field binds to: the annotation's explicit
    /// name when present, the field name otherwise.
    pub fn column_name(&self) -> &str {
        self.column
            .as_ref()
            .and_then(|c| c.name.as_deref())
            .unwrap_or(&self.name)
    }
}

/// The two lookups every concrete mapping strategy layered above the
/// resolver relies on.
pub trait AccessorLookup {
    fn getter_for_column(&self, column_name: &str) -> Option<&Arc<MethodDescriptor>>;
    fn setter_for_column(&self, column_name: &str) -> Option<&Arc<MethodDescriptor>>;
}

/// Field-name-indexed result of one resolution call. Read-only after
/// construction; callers may query it repeatedly or cache it, the
/// resolver itself never does.
#[derive(Debug, Clone)]
pub struct BindingTable {
    type_name: String,
    bindings: HashMap<String, FieldBinding>,
}

impl BindingTable {
    pub(crate) fn new(type_name: String, bindings: HashMap<String, FieldBinding>) -> Self {
        Self {
            type_name,
            bindings,
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn binding(&self, field_name: &str) -> Option<&FieldBinding> {
        self.bindings.get(field_name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }

    pub fn bindings(&self) -> impl Iterator<Item = &FieldBinding> {
        self.bindings.values()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    fn lookup(&self, column_name: &str) -> Option<&FieldBinding> {
        self.bindings
            .get(column_name)
            .or_else(|| self.bindings.values().find(|b| b.column_name() == column_name))
    }
}

impl AccessorLookup for BindingTable {
    fn getter_for_column(&self, column_name: &str) -> Option<&Arc<MethodDescriptor>> {
        self.lookup(column_name).map(FieldBinding::getter)
    }

    fn setter_for_column(&self, column_name: &str) -> Option<&Arc<MethodDescriptor>> {
        self.lookup(column_name).map(FieldBinding::setter)
    }
}
