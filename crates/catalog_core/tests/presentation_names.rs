use catalog_core::db::{open_store, StoreConfig};
use catalog_core::{display_names, EntityTypeRecord, EntityTypeRepository, SqliteEntityTypeRepository};
use rusqlite::{params, Connection};

#[test]
fn active_records_project_to_names_end_to_end() {
    let conn = open_store(&StoreConfig::in_memory()).unwrap();
    seed_entity_type(&conn, 1, "sensor", None);
    seed_entity_type(&conn, 2, "camera", Some(1_672_531_200_000));
    seed_entity_type(&conn, 3, "beacon", None);

    let repo = SqliteEntityTypeRepository::try_new(&conn).unwrap();
    let records = repo.list_active_entity_types().unwrap();
    let names = display_names(&records);

    assert_eq!(names, vec!["sensor", "beacon"]);
}

#[test]
fn projection_preserves_order_and_length() {
    let records = vec![
        EntityTypeRecord::new(10, "gateway"),
        EntityTypeRecord::new(2, "sensor"),
        EntityTypeRecord::new(7, "beacon"),
    ];

    let names = display_names(&records);

    assert_eq!(names.len(), records.len());
    for (index, record) in records.iter().enumerate() {
        assert_eq!(names[index], record.name);
    }
}

#[test]
fn names_serialize_to_a_json_string_array() {
    let records = vec![
        EntityTypeRecord::new(1, "sensor"),
        EntityTypeRecord::new(3, "beacon"),
    ];

    let json = serde_json::to_value(display_names(&records)).unwrap();

    assert!(json.is_array());
    assert_eq!(json[0], "sensor");
    assert_eq!(json[1], "beacon");
}

#[test]
fn record_serialization_uses_expected_wire_fields() {
    let mut record = EntityTypeRecord::new(2, "camera");
    record.deleted_at = Some(1_672_531_200_000);

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["id"], 2);
    assert_eq!(json["name"], "camera");
    assert_eq!(json["deleted_at"], 1_672_531_200_000_i64);

    let decoded: EntityTypeRecord = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, record);
}

fn seed_entity_type(conn: &Connection, id: i64, name: &str, deleted_at: Option<i64>) {
    conn.execute(
        "INSERT INTO entity_types (id, name, deleted_at) VALUES (?1, ?2, ?3);",
        params![id, name, deleted_at],
    )
    .unwrap();
}
