//! Descriptors for the type under resolution.
//!
//! Rust has no runtime reflection, so the method list the resolver
//! scans is registered explicitly: the caller (or a host-side code
//! generator) builds a [`TypeDescriptor`] listing every method of the
//! type with its name, parameter types, return type and annotations.
//! Optional invocation thunks make the chosen accessors callable
//! against live objects through `dyn Any`.

use std::any::Any;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::{Deserialize, Serialize};

use crate::core::{Value, ValueType};

/// Column annotation payload attached to a getter or setter.
///
/// Reconciliation compares these structurally, so two annotations are
/// the same exactly when they would produce the same column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Explicit column name; `None` means "derive from the field name".
    pub name: Option<String>,
}

impl ColumnSpec {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

impl fmt::Display for ColumnSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "name={}", name),
            None => write!(f, "name=<default>"),
        }
    }
}

pub type GetterThunk = Arc<dyn Fn(&dyn Any) -> Value + Send + Sync>;
pub type SetterThunk = Arc<dyn Fn(&mut dyn Any, Value) + Send + Sync>;

/// Callable body of an accessor, operating on type-erased objects.
#[derive(Clone)]
pub enum AccessorThunk {
    Get(GetterThunk),
    Set(SetterThunk),
}

/// One declared method of the type under resolution.
pub struct MethodDescriptor {
    name: String,
    params: Vec<ValueType>,
    returns: ValueType,
    column: Option<ColumnSpec>,
    no_column: bool,
    accessible: AtomicBool,
    thunk: Option<AccessorThunk>,
}

impl MethodDescriptor {
    /// A conventional getter: no parameters, returns `ty`.
    pub fn getter(name: impl Into<String>, ty: impl Into<ValueType>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            returns: ty.into(),
            column: None,
            no_column: false,
            accessible: AtomicBool::new(false),
            thunk: None,
        }
    }

    /// A conventional setter: one parameter of `ty`, returns void.
    pub fn setter(name: impl Into<String>, ty: impl Into<ValueType>) -> Self {
        Self {
            name: name.into(),
            params: vec![ty.into()],
            returns: ValueType::Unit,
            column: None,
            no_column: false,
            accessible: AtomicBool::new(false),
            thunk: None,
        }
    }

    /// An arbitrary method; shape it with [`with_params`](Self::with_params)
    /// and [`returning`](Self::returning).
    pub fn method(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            returns: ValueType::Unit,
            column: None,
            no_column: false,
            accessible: AtomicBool::new(false),
            thunk: None,
        }
    }

    pub fn with_params(mut self, params: Vec<ValueType>) -> Self {
        self.params = params;
        self
    }

    pub fn returning(mut self, ty: impl Into<ValueType>) -> Self {
        self.returns = ty.into();
        self
    }

    pub fn with_column(mut self, column: ColumnSpec) -> Self {
        self.column = Some(column);
        self
    }

    /// Marks this accessor as excluded from persistence.
    pub fn no_column(mut self) -> Self {
        self.no_column = true;
        self
    }

    pub fn with_getter_thunk<F>(mut self, f: F) -> Self
    where
        F: Fn(&dyn Any) -> Value + Send + Sync + 'static,
    {
        self.thunk = Some(AccessorThunk::Get(Arc::new(f)));
        self
    }

    pub fn with_setter_thunk<F>(mut self, f: F) -> Self
    where
        F: Fn(&mut dyn Any, Value) + Send + Sync + 'static,
    {
        self.thunk = Some(AccessorThunk::Set(Arc::new(f)));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn params(&self) -> &[ValueType] {
        &self.params
    }

    pub fn param_count(&self) -> usize {
        self.params.len()
    }

    pub fn returns(&self) -> &ValueType {
        &self.returns
    }

    pub fn column(&self) -> Option<&ColumnSpec> {
        self.column.as_ref()
    }

    pub fn is_no_column(&self) -> bool {
        self.no_column
    }

    /// Lifts the access-control barrier on this accessor. Idempotent;
    /// called once at resolution time for every accessor that lands in
    /// a binding table.
    pub fn make_accessible(&self) {
        self.accessible.store(true, Ordering::Relaxed);
    }

    pub fn is_accessible(&self) -> bool {
        self.accessible.load(Ordering::Relaxed)
    }

    /// Human-readable signature, e.g. `getName() -> TEXT` or
    /// `setName(TEXT)`. Used in error messages and traces.
    pub fn signature(&self) -> String {
        let params = self
            .params
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        if self.returns.is_unit() {
            format!("{}({})", self.name, params)
        } else {
            format!("{}({}) -> {}", self.name, params, self.returns)
        }
    }

    /// Invokes this method as a getter against `object`. Returns `None`
    /// if no getter thunk was registered.
    pub fn get(&self, object: &dyn Any) -> Option<Value> {
        match &self.thunk {
            Some(AccessorThunk::Get(f)) => Some(f(object)),
            _ => None,
        }
    }

    /// Invokes this method as a setter against `object`. Returns `false`
    /// if no setter thunk was registered.
    pub fn set(&self, object: &mut dyn Any, value: Value) -> bool {
        match &self.thunk {
            Some(AccessorThunk::Set(f)) => {
                f(object, value);
                true
            }
            _ => false,
        }
    }
}

impl fmt::Debug for MethodDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodDescriptor")
            .field("name", &self.name)
            .field("params", &self.params)
            .field("returns", &self.returns)
            .field("column", &self.column)
            .field("no_column", &self.no_column)
            .field("accessible", &self.is_accessible())
            .field("has_thunk", &self.thunk.is_some())
            .finish()
    }
}

/// The introspected type under resolution: a name plus its declared
/// methods in declaration order. Immutable for the duration of a
/// resolution call.
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    name: String,
    methods: Vec<Arc<MethodDescriptor>>,
}

impl TypeDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: Vec::new(),
        }
    }

    pub fn with_method(mut self, method: MethodDescriptor) -> Self {
        self.methods.push(Arc::new(method));
        self
    }

    pub fn add_method(&mut self, method: MethodDescriptor) {
        self.methods.push(Arc::new(method));
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn methods(&self) -> &[Arc<MethodDescriptor>] {
        &self.methods
    }
}
