use thiserror::Error;

#[derive(Error, Debug)]
pub enum MappingError {
    #[error("Field '{field}' in type '{type_name}' has conflicting NoColumn and Column annotations")]
    ConflictingDirective { type_name: String, field: String },

    #[error(
        "Annotations for getter [{getter}] and setter [{setter}] of field '{field}' in type '{type_name}' differ: [{getter_column}] [{setter_column}]"
    )]
    ConflictingAnnotation {
        type_name: String,
        field: String,
        getter: String,
        setter: String,
        getter_column: String,
        setter_column: String,
    },

    #[error(
        "Getter [{getter}] and setter [{setter}] of field '{field}' in type '{type_name}' are incompatible: {detail}"
    )]
    IncompatibleAccessors {
        type_name: String,
        field: String,
        getter: String,
        setter: String,
        detail: String,
    },
}

pub type Result<T> = std::result::Result<T, MappingError>;
