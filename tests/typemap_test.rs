use indigo::typemap::{column_type, target_type};

#[test]
fn test_numeric_types() {
    for storage in
        ["integer", "bigint", "numeric", "decimal", "real", "double precision", "smallint"]
    {
        assert_eq!(target_type(storage), "number", "storage type {}", storage);
    }
}

#[test]
fn test_text_types() {
    for storage in ["text", "character varying", "varchar", "char", "time", "uuid"] {
        assert_eq!(target_type(storage), "string", "storage type {}", storage);
    }
}

#[test]
fn test_temporal_types() {
    for storage in
        ["timestamp", "timestamp with time zone", "timestamp without time zone", "date"]
    {
        assert_eq!(target_type(storage), "Date", "storage type {}", storage);
    }
}

#[test]
fn test_opaque_and_boolean_types() {
    assert_eq!(target_type("boolean"), "boolean");
    assert_eq!(target_type("json"), "unknown");
    assert_eq!(target_type("jsonb"), "unknown");
}

#[test]
fn test_unmapped_types_fall_back() {
    assert_eq!(target_type("tsvector"), "unknown");
    assert_eq!(target_type("int4range"), "unknown");
    assert_eq!(target_type(""), "unknown");
}

#[test]
fn test_array_columns_resolve_element_type() {
    assert_eq!(column_type("ARRAY", "_text"), "string[]");
    assert_eq!(column_type("ARRAY", "_varchar"), "string[]");
    assert_eq!(column_type("ARRAY", "_uuid"), "string[]");
    // Element names outside the fixed table fall back as well.
    assert_eq!(column_type("ARRAY", "_int4"), "unknown[]");
}

#[test]
fn test_scalar_columns_ignore_udt_name() {
    assert_eq!(column_type("integer", "int4"), "number");
    assert_eq!(column_type("text", "text"), "string");
}
