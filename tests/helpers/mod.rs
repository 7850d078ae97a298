#![allow(dead_code)]

use std::path::{Path, PathBuf};

use agf_cleanup::db::{self, schema};
use tempfile::TempDir;

/// Build the AGF database in `dir`, seeded with three accounts and a spread
/// of operational rows. The accounts cover every branch of the admin filter:
/// id 1 is an admin by role, id 2 a plain user, id 3 a plain user holding
/// the reserved address in a different case.
pub fn seeded_agf_db(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("agf_database.db");
    let conn = db::create_database(&path).unwrap();
    schema::init_agf_schema(&conn).unwrap();
    conn.execute_batch(
        "INSERT INTO users (email, password, first_name, last_name, phone_number, role) VALUES
             ('admin@gmail.com', 'hash-a', 'Site', 'Admin', '9000000000', 'Admin'),
             ('alice@example.com', 'hash-b', 'Alice', 'Archer', '9000000001', 'User'),
             ('ADMIN@GMAIL.COM', 'hash-c', 'Casey', 'Clone', '9000000002', 'User');
         INSERT INTO workers (email, password, first_name, last_name, phone_number) VALUES
             ('wade@example.com', 'hash-d', 'Wade', 'Walker', '9000000003');
         INSERT INTO service_requests
             (user_id, vehicle_number, driving_licence, phone_number, service_type, amount) VALUES
             (2, 'KA-01-AB-1234', 'DL-1111', '9000000001', 'petrol', 100),
             (3, 'KA-02-CD-5678', 'DL-2222', '9000000002', 'diesel', 150);
         INSERT INTO payments (service_request_id, provider, amount) VALUES
             (1, 'razorpay', 100);",
    )
    .unwrap();
    path
}

/// Build the connectivity database in `dir` with a couple of reports.
pub fn seeded_connectivity_db(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("connectivity.db");
    let conn = db::create_database(&path).unwrap();
    schema::init_connectivity_schema(&conn).unwrap();
    conn.execute_batch(
        "INSERT INTO connectivity_reports (lat, lng, severity, reported_at) VALUES
             (12.9716, 77.5946, 'poor', '2024-05-01T08:30:00Z'),
             (13.0827, 80.2707, 'offline', '2024-05-01T09:00:00Z');",
    )
    .unwrap();
    path
}

/// Row count for `table`, through a fresh read-only connection.
pub fn row_count(path: &Path, table: &str) -> i64 {
    let conn = db::open_readonly(path).unwrap();
    conn.query_row(
        &format!("SELECT COUNT(*) FROM {}", db::quoted(table)),
        [],
        |row| row.get(0),
    )
    .unwrap()
}

/// The `sqlite_sequence` counter for `table`, or `None` if it has no row.
pub fn sequence_for(path: &Path, table: &str) -> Option<i64> {
    let conn = db::open_readonly(path).unwrap();
    conn.query_row(
        "SELECT seq FROM sqlite_sequence WHERE name = ?1",
        [table],
        |row| row.get(0),
    )
    .ok()
}
