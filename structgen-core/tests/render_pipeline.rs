//! End-to-end rendering over hand-built descriptor sequences, exercising
//! the normalized-descriptor half of the pipeline without a database.

use structgen_core::models::ColumnDescriptor;
use structgen_core::render_struct;

fn column(name: &str, raw_type: &str, comment: &str) -> ColumnDescriptor {
    ColumnDescriptor {
        name: name.to_string(),
        raw_type: raw_type.to_string(),
        comment: comment.to_string(),
        ..ColumnDescriptor::default()
    }
}

#[test]
fn renders_mysql_shaped_table() {
    let columns = vec![column("user_id", "bigint(20)", "primary key")];
    let handlers = vec!["t_".to_string()];

    let rendered = render_struct("t_user", &columns, &handlers);

    assert_eq!(
        rendered,
        "type User struct {\n\tUserId int64 `json:\"user_id\"` //primary key\n}\n"
    );
}

#[test]
fn renders_postgres_shaped_table() {
    // The PostgreSQL reader only populates name, raw_type and comment.
    let columns = vec![
        column("id", "integer", ""),
        column("created_at", "timestamp without time zone", "row creation time"),
        column("payload", "jsonb", ""),
    ];

    let rendered = render_struct("events", &columns, &[]);
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines[0], "type Events struct {");
    assert_eq!(lines[1], "\tId int64 `json:\"id\"` //");
    assert_eq!(
        lines[2],
        "\tCreatedAt datetime `json:\"created_at\"` //row creation time"
    );
    assert_eq!(lines[3], "\tPayload jsonb `json:\"payload\"` //");
    assert_eq!(lines[4], "}");
}

#[test]
fn stacked_handlers_strip_before_case_conversion() {
    let columns = vec![column("id", "int", "")];
    let handlers = vec!["t_".to_string(), "sys_".to_string()];

    let rendered = render_struct("t_sys_user", &columns, &handlers);

    assert!(rendered.starts_with("type User struct {\n"));
}

#[test]
fn empty_descriptor_sequence_is_not_an_error() {
    let rendered = render_struct("ghost_table", &[], &[]);

    assert_eq!(rendered, "type GhostTable struct {\n}\n");
}
