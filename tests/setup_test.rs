mod helpers;

use helpers::{row_count, seeded_agf_db};

use agf_cleanup::db::{self, schema};
use agf_cleanup::reset::{reset_database, ResetPolicy};
use tempfile::TempDir;

#[test]
fn create_database_builds_parent_directories() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("nested").join("dir").join("agf.db");

    let conn = db::create_database(&path).unwrap();
    schema::init_agf_schema(&conn).unwrap();

    assert!(path.exists());
    assert_eq!(row_count(&path, "service_types"), 5);
}

#[test]
fn setup_after_reset_does_not_duplicate_surviving_rows() {
    // A reset keeps the catalog and admin accounts; re-running setup on the
    // same file must leave them as they are.
    let tmp = TempDir::new().unwrap();
    let path = seeded_agf_db(&tmp);

    let mut out = Vec::new();
    reset_database(&path, &ResetPolicy::agf(), &mut out).unwrap();

    let conn = db::open_existing(&path).unwrap();
    schema::init_agf_schema(&conn).unwrap();

    assert_eq!(row_count(&path, "service_types"), 5);
    assert_eq!(row_count(&path, "service_prices"), 5);
    assert_eq!(row_count(&path, "platform_settings"), 1);
    assert_eq!(row_count(&path, "users"), 2);
}
