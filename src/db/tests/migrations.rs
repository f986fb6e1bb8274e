use super::*;
use tempfile::NamedTempFile;

#[tokio::test]
async fn test_database_creation() {
    let temp_file = NamedTempFile::new().unwrap();
    let db_path = temp_file.path();

    let db = Database::new(db_path).await.unwrap();

    // Verify tables exist
    let mut conn = db.pool.acquire().await.unwrap();

    let tables: Vec<String> =
        sqlx::query_scalar("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .fetch_all(&mut *conn)
            .await
            .unwrap();

    assert!(tables.contains(&"files".to_string()));
    assert!(tables.contains(&"schema_version".to_string()));

    db.close().await;
}

#[tokio::test]
async fn test_migrations_record_versions() {
    let (db, _temp_file) = create_test_db().await;

    let mut conn = db.pool.acquire().await.unwrap();
    let versions: Vec<i64> =
        sqlx::query_scalar("SELECT version FROM schema_version ORDER BY version")
            .fetch_all(&mut *conn)
            .await
            .unwrap();

    assert_eq!(versions, vec![1, 2]);

    db.close().await;
}

#[tokio::test]
async fn test_reopening_database_is_idempotent() {
    let temp_file = NamedTempFile::new().unwrap();
    let db_path = temp_file.path();

    // First open creates the schema and a record survives reopening
    let db = Database::new(db_path).await.unwrap();
    let id = db.insert_file(&sample_record()).await.unwrap();
    db.close().await;

    // Second open must not re-run migrations or lose data
    let db = Database::new(db_path).await.unwrap();
    let record = db.get_file(id).await.unwrap().expect("record survives");
    assert_eq!(record.original_filename, "annual report.pdf");

    let mut conn = db.pool.acquire().await.unwrap();
    let version_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM schema_version")
        .fetch_one(&mut *conn)
        .await
        .unwrap();
    assert_eq!(version_count, 2, "migrations must not be recorded twice");

    db.close().await;
}

#[tokio::test]
async fn test_created_at_index_exists() {
    let (db, _temp_file) = create_test_db().await;

    let mut conn = db.pool.acquire().await.unwrap();
    let indexes: Vec<String> =
        sqlx::query_scalar("SELECT name FROM sqlite_master WHERE type='index'")
            .fetch_all(&mut *conn)
            .await
            .unwrap();

    assert!(indexes.contains(&"idx_files_created_at".to_string()));

    db.close().await;
}

#[tokio::test]
async fn test_database_creation_creates_parent_directory() {
    let temp_dir = tempfile::tempdir().unwrap();
    let db_path = temp_dir.path().join("nested").join("dir").join("gate.db");

    let db = Database::new(&db_path).await.unwrap();
    assert!(db_path.exists());

    db.close().await;
}
