use crate::db::*;

mod migrations;

/// Helper to create an in-temp-file database for tests
async fn create_test_db() -> (Database, tempfile::NamedTempFile) {
    let temp_file = tempfile::NamedTempFile::new().unwrap();
    let db = Database::new(temp_file.path()).await.unwrap();
    (db, temp_file)
}

/// A representative record for insert-based tests
fn sample_record() -> NewFileRecord {
    NewFileRecord {
        original_filename: "annual report.pdf".to_string(),
        archive_filename: "7d9f2c4e8a1b.pdf".to_string(),
        mime_browser: "application/pdf".to_string(),
        size_bytes: 4096,
    }
}
