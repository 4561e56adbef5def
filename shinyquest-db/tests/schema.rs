use shinyquest_db::open_memory;
use shinyquest_db::schema::{create_schema, open_database, CURRENT_VERSION};

#[test]
fn create_schema_in_memory() {
    let conn = open_memory().unwrap();
    let version: i32 = conn
        .query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_version",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(version, CURRENT_VERSION);
}

#[test]
fn schema_is_idempotent() {
    let conn = open_memory().unwrap();
    // Creating again should not error
    create_schema(&conn).unwrap();
}

#[test]
fn all_tables_exist() {
    let conn = open_memory().unwrap();
    let tables = [
        "schema_version",
        "accounts",
        "hunts",
        "guest_hunts",
        "living_dex",
        "dex_removals",
    ];
    for table in tables {
        let exists: bool = conn
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name=?1)",
                [table],
                |row| row.get(0),
            )
            .unwrap();
        assert!(exists, "table '{}' should exist", table);
    }
}

#[test]
fn open_database_creates_and_reopens() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shinyquest.db");

    {
        let conn = open_database(&path).unwrap();
        conn.execute(
            "INSERT INTO accounts (username, email, password_digest, bio)
             VALUES ('red', 'red@pallet.town', 'abc', '')",
            [],
        )
        .unwrap();
    }

    // Reopening an existing database must not recreate or reset anything
    let conn = open_database(&path).unwrap();
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM accounts", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn open_database_fails_on_unwritable_path() {
    let result = open_database(std::path::Path::new("/nonexistent-dir/shinyquest.db"));
    assert!(result.is_err());
}
