use catalog_core::db::{open_store, StoreConfig};
use catalog_core::{
    EntityTypeId, EntityTypeListQuery, EntityTypeRecord, EntityTypeRepository, EntityTypeService,
    ListOrder, RepoResult, SqliteEntityTypeRepository,
};
use rusqlite::{params, Connection};

#[test]
fn service_wraps_repository_reads() {
    let conn = open_store(&StoreConfig::in_memory()).unwrap();
    seed_entity_type(&conn, 1, "sensor", None);
    seed_entity_type(&conn, 2, "camera", Some(1_672_531_200_000));

    let repo = SqliteEntityTypeRepository::try_new(&conn).unwrap();
    let service = EntityTypeService::new(repo);

    assert_eq!(service.list_active_entity_types().unwrap().len(), 1);
    assert!(service.get_entity_type(2, false).unwrap().is_none());
    assert!(service.get_entity_type(2, true).unwrap().is_some());

    let query = EntityTypeListQuery {
        include_deleted: true,
        order: ListOrder::NameAscending,
    };
    let names: Vec<String> = service
        .list_entity_types(&query)
        .unwrap()
        .into_iter()
        .map(|record| record.name)
        .collect();
    assert_eq!(names, vec!["camera", "sensor"]);
}

#[test]
fn service_lists_active_display_names_in_sequence() {
    let conn = open_store(&StoreConfig::in_memory()).unwrap();
    seed_entity_type(&conn, 1, "sensor", None);
    seed_entity_type(&conn, 2, "camera", Some(1_672_531_200_000));
    seed_entity_type(&conn, 3, "beacon", None);

    let repo = SqliteEntityTypeRepository::try_new(&conn).unwrap();
    let service = EntityTypeService::new(repo);

    assert_eq!(
        service.list_active_display_names().unwrap(),
        vec!["sensor", "beacon"]
    );
}

#[test]
fn empty_store_lists_no_display_names() {
    let conn = open_store(&StoreConfig::in_memory()).unwrap();

    let repo = SqliteEntityTypeRepository::try_new(&conn).unwrap();
    let service = EntityTypeService::new(repo);

    assert!(service.list_active_display_names().unwrap().is_empty());
}

#[test]
fn service_accepts_storage_free_repository_at_the_trait_seam() {
    let mut tombstoned = EntityTypeRecord::new(2, "camera");
    tombstoned.deleted_at = Some(1_672_531_200_000);
    let repo = FixedEntityTypeRepository {
        records: vec![
            EntityTypeRecord::new(1, "sensor"),
            tombstoned,
            EntityTypeRecord::new(3, "beacon"),
        ],
    };

    let service = EntityTypeService::new(repo);

    assert_eq!(
        service.list_active_display_names().unwrap(),
        vec!["sensor", "beacon"]
    );
    assert!(service.get_entity_type(2, false).unwrap().is_none());
}

/// In-memory fake standing in for the SQLite repository in service tests.
struct FixedEntityTypeRepository {
    records: Vec<EntityTypeRecord>,
}

impl EntityTypeRepository for FixedEntityTypeRepository {
    fn list_active_entity_types(&self) -> RepoResult<Vec<EntityTypeRecord>> {
        self.list_entity_types(&EntityTypeListQuery::default())
    }

    fn list_entity_types(
        &self,
        query: &EntityTypeListQuery,
    ) -> RepoResult<Vec<EntityTypeRecord>> {
        let mut records: Vec<EntityTypeRecord> = self
            .records
            .iter()
            .filter(|record| query.include_deleted || record.is_active())
            .cloned()
            .collect();
        if query.order == ListOrder::NameAscending {
            records.sort_by(|left, right| {
                left.name
                    .to_lowercase()
                    .cmp(&right.name.to_lowercase())
                    .then(left.id.cmp(&right.id))
            });
        }
        Ok(records)
    }

    fn get_entity_type(
        &self,
        id: EntityTypeId,
        include_deleted: bool,
    ) -> RepoResult<Option<EntityTypeRecord>> {
        Ok(self
            .records
            .iter()
            .find(|record| record.id == id && (include_deleted || record.is_active()))
            .cloned())
    }
}

fn seed_entity_type(conn: &Connection, id: i64, name: &str, deleted_at: Option<i64>) {
    conn.execute(
        "INSERT INTO entity_types (id, name, deleted_at) VALUES (?1, ?2, ?3);",
        params![id, name, deleted_at],
    )
    .unwrap();
}
