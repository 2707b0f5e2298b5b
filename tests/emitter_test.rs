use indigo::emitter::{emit, group_by_table, is_auto_generated};
use indigo::introspect::ColumnMeta;

fn column(
    table: &str,
    name: &str,
    data_type: &str,
    nullable: bool,
    default: Option<&str>,
) -> ColumnMeta {
    ColumnMeta {
        table_name: table.to_string(),
        column_name: name.to_string(),
        data_type: data_type.to_string(),
        is_nullable: nullable,
        column_default: default.map(|d| d.to_string()),
        udt_name: String::new(),
    }
}

#[test]
fn test_auto_generated_by_name_without_default() {
    assert!(is_auto_generated(&column("demo", "id", "integer", false, None)));
    assert!(is_auto_generated(&column("demo", "created_at", "timestamp", true, None)));
    assert!(is_auto_generated(&column("demo", "updated_at", "timestamp", true, None)));
}

#[test]
fn test_auto_generated_by_default_expression() {
    assert!(is_auto_generated(&column("demo", "amount", "numeric", false, Some("now()"))));
    assert!(is_auto_generated(&column(
        "demo",
        "ref",
        "uuid",
        false,
        Some("gen_random_uuid()")
    )));
    assert!(is_auto_generated(&column(
        "demo",
        "seq",
        "integer",
        false,
        Some("nextval('demo_seq_seq'::regclass)")
    )));
    assert!(is_auto_generated(&column(
        "demo",
        "stamp",
        "date",
        false,
        Some("CURRENT_DATE")
    )));
}

#[test]
fn test_plain_columns_are_required() {
    assert!(!is_auto_generated(&column("demo", "amount", "numeric", false, None)));
    assert!(!is_auto_generated(&column("demo", "amount", "numeric", false, Some("0"))));
    assert!(!is_auto_generated(&column("demo", "name", "text", false, None)));
}

#[test]
fn test_grouping_preserves_catalog_order() {
    let columns = vec![
        column("alpha", "id", "integer", false, None),
        column("alpha", "name", "text", false, None),
        column("beta", "id", "integer", false, None),
    ];
    let groups = group_by_table(columns);

    let tables: Vec<&String> = groups.keys().collect();
    assert_eq!(tables, vec!["alpha", "beta"]);
    let alpha: Vec<&str> =
        groups["alpha"].iter().map(|c| c.column_name.as_str()).collect();
    assert_eq!(alpha, vec!["id", "name"]);
}

#[test]
fn test_emit_demo_table() {
    let columns = vec![
        column("demo", "id", "integer", false, Some("nextval('demo_id_seq'::regclass)")),
        column("demo", "name", "text", false, None),
        column("demo", "created_at", "timestamp", true, Some("now()")),
    ];
    let output = emit(&group_by_table(columns));

    assert!(output.contains("export interface Database {"));
    assert!(output.contains("  demo: {\n"));
    assert!(output.contains("    id?: ColumnType<number>;\n"));
    assert!(output.contains("    name: ColumnType<string>;\n"));
    assert!(output.contains("    created_at?: ColumnType<Date | null>;\n"));
    assert!(output
        .contains("export type Row<Table extends keyof Database> = Selectable<Database[Table]>;"));
    assert!(output.contains(
        "export type InsertRow<Table extends keyof Database> = Insertable<Database[Table]>;"
    ));
    assert!(output.contains(
        "export type UpdateRow<Table extends keyof Database> = Updateable<Database[Table]>;"
    ));
}

#[test]
fn test_emit_is_deterministic() {
    let make = || {
        vec![
            column("demo", "id", "integer", false, None),
            column("demo", "tags", "ARRAY", true, None),
        ]
    };
    let mut with_udt = make();
    with_udt[1].udt_name = "_text".to_string();
    let mut again = make();
    again[1].udt_name = "_text".to_string();

    assert_eq!(emit(&group_by_table(with_udt)), emit(&group_by_table(again)));
}

#[test]
fn test_emit_array_column() {
    let mut tags = column("demo", "tags", "ARRAY", true, None);
    tags.udt_name = "_text".to_string();
    let output = emit(&group_by_table(vec![tags]));
    assert!(output.contains("    tags: ColumnType<string[] | null>;\n"));
}
