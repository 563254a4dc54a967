use persistmap::core::{DataType, MappingError, Result};
use persistmap::{
    AccessorLookup, ColumnSpec, MethodDescriptor, TypeDescriptor, resolve_with_default_policy,
};

#[test]
fn test_conflicting_annotations_fail_resolution() {
    let descriptor = TypeDescriptor::new("Invoice")
        .with_method(
            MethodDescriptor::getter("getTotal", DataType::Float)
                .with_column(ColumnSpec::named("A")),
        )
        .with_method(
            MethodDescriptor::setter("setTotal", DataType::Float)
                .with_column(ColumnSpec::named("B")),
        );

    let err = resolve_with_default_policy(&descriptor).unwrap_err();
    match err {
        MappingError::ConflictingAnnotation {
            type_name,
            field,
            getter,
            setter,
            getter_column,
            setter_column,
        } => {
            assert_eq!(type_name, "Invoice");
            assert_eq!(field, "total");
            assert!(getter.contains("getTotal"));
            assert!(setter.contains("setTotal"));
            assert!(getter_column.contains("A"));
            assert!(setter_column.contains("B"));
        }
        other => panic!("expected ConflictingAnnotation, got {:?}", other),
    }
}

#[test]
fn test_exclusion_with_annotation_fails_resolution() {
    let descriptor = TypeDescriptor::new("Invoice")
        .with_method(MethodDescriptor::getter("getInternalId", DataType::Integer).no_column())
        .with_method(
            MethodDescriptor::setter("setInternalId", DataType::Integer)
                .with_column(ColumnSpec::named("INTERNAL_ID")),
        );

    let err = resolve_with_default_policy(&descriptor).unwrap_err();
    assert!(matches!(
        err,
        MappingError::ConflictingDirective { ref field, .. } if field == "internalId"
    ));
}

#[test]
fn test_fatal_error_yields_no_partial_table() {
    // the healthy "name" pair must not leak out when "total" conflicts
    let descriptor = TypeDescriptor::new("Invoice")
        .with_method(MethodDescriptor::getter("getName", DataType::Text))
        .with_method(MethodDescriptor::setter("setName", DataType::Text))
        .with_method(
            MethodDescriptor::getter("getTotal", DataType::Float)
                .with_column(ColumnSpec::named("A")),
        )
        .with_method(
            MethodDescriptor::setter("setTotal", DataType::Float)
                .with_column(ColumnSpec::named("B")),
        );

    assert!(resolve_with_default_policy(&descriptor).is_err());
}

#[test]
fn test_bare_exclusion_removes_field_quietly() -> Result<()> {
    let descriptor = TypeDescriptor::new("Session")
        .with_method(MethodDescriptor::getter("getToken", DataType::Text).no_column())
        .with_method(MethodDescriptor::setter("setToken", DataType::Text))
        .with_method(MethodDescriptor::getter("getUser", DataType::Text))
        .with_method(MethodDescriptor::setter("setUser", DataType::Text));

    let table = resolve_with_default_policy(&descriptor)?;
    assert!(table.binding("token").is_none());
    assert!(table.binding("user").is_some());
    Ok(())
}

#[test]
fn test_equal_annotations_reconcile() -> Result<()> {
    let descriptor = TypeDescriptor::new("User")
        .with_method(
            MethodDescriptor::getter("getName", DataType::Text)
                .with_column(ColumnSpec::named("FULL_NAME")),
        )
        .with_method(
            MethodDescriptor::setter("setName", DataType::Text)
                .with_column(ColumnSpec::named("FULL_NAME")),
        );

    let table = resolve_with_default_policy(&descriptor)?;
    let binding = table.binding("name").unwrap();
    assert_eq!(binding.column(), Some(&ColumnSpec::named("FULL_NAME")));
    assert_eq!(binding.column_name(), "FULL_NAME");
    Ok(())
}

#[test]
fn test_setter_only_annotation_adopted() -> Result<()> {
    let descriptor = TypeDescriptor::new("User")
        .with_method(MethodDescriptor::getter("getName", DataType::Text))
        .with_method(
            MethodDescriptor::setter("setName", DataType::Text)
                .with_column(ColumnSpec::named("FULL_NAME")),
        );

    let table = resolve_with_default_policy(&descriptor)?;
    assert_eq!(
        table.binding("name").unwrap().column(),
        Some(&ColumnSpec::named("FULL_NAME"))
    );
    Ok(())
}

#[test]
fn test_lookup_by_field_and_by_explicit_column_name() -> Result<()> {
    let descriptor = TypeDescriptor::new("User")
        .with_method(
            MethodDescriptor::getter("getName", DataType::Text)
                .with_column(ColumnSpec::named("FULL_NAME")),
        )
        .with_method(MethodDescriptor::setter("setName", DataType::Text))
        .with_method(MethodDescriptor::getter("getAge", DataType::Integer))
        .with_method(MethodDescriptor::setter("setAge", DataType::Integer));

    let table = resolve_with_default_policy(&descriptor)?;

    // unannotated field answers to its field name
    assert!(table.getter_for_column("age").is_some());
    assert!(table.setter_for_column("age").is_some());

    // annotated field answers to both its field name and its column name
    assert_eq!(
        table.getter_for_column("FULL_NAME").map(|m| m.name()),
        Some("getName")
    );
    assert_eq!(
        table.setter_for_column("name").map(|m| m.name()),
        Some("setName")
    );

    // unknown names are "not found", never an error
    assert!(table.getter_for_column("missing").is_none());
    assert!(table.setter_for_column("missing").is_none());
    Ok(())
}

#[test]
fn test_error_messages_name_the_offender() {
    let descriptor = TypeDescriptor::new("Invoice")
        .with_method(
            MethodDescriptor::getter("getTotal", DataType::Float)
                .with_column(ColumnSpec::named("A")),
        )
        .with_method(
            MethodDescriptor::setter("setTotal", DataType::Float)
                .with_column(ColumnSpec::named("B")),
        );

    let message = resolve_with_default_policy(&descriptor)
        .unwrap_err()
        .to_string();
    assert!(message.contains("Invoice"));
    assert!(message.contains("total"));
    assert!(message.contains("getTotal() -> FLOAT"));
    assert!(message.contains("setTotal(FLOAT)"));
}
