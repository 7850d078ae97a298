//! SQL DDL for both AGF Petrol databases.
//!
//! Defines the primary application schema (`users`, `workers`, the protected
//! catalog tables, and the operational tables) and the connectivity-report
//! schema. All DDL uses `IF NOT EXISTS` and seed inserts use
//! `ON CONFLICT DO NOTHING`, so initialization is idempotent.

use rusqlite::Connection;

/// DDL for the primary application database.
const AGF_SCHEMA_SQL: &str = r#"
-- Accounts
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    email VARCHAR(255) UNIQUE NOT NULL,
    password VARCHAR(255) NOT NULL,
    first_name VARCHAR(100) NOT NULL,
    last_name VARCHAR(100) NOT NULL,
    phone_number VARCHAR(20) NOT NULL,
    driving_licence VARCHAR(100),
    role VARCHAR(20) DEFAULT 'User' CHECK(role IN ('User', 'Admin')),
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
);

CREATE TABLE IF NOT EXISTS workers (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    email VARCHAR(255) UNIQUE NOT NULL,
    password VARCHAR(255) NOT NULL,
    first_name VARCHAR(100) NOT NULL,
    last_name VARCHAR(100) NOT NULL,
    phone_number VARCHAR(20) NOT NULL,
    status VARCHAR(20) DEFAULT 'Available' CHECK(status IN ('Available', 'Busy', 'Offline')),
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
);

-- Catalog tables, preserved in full by the reset
CREATE TABLE IF NOT EXISTS service_types (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    code VARCHAR(50) UNIQUE NOT NULL,
    label VARCHAR(100) NOT NULL,
    amount INTEGER NOT NULL,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
);

CREATE TABLE IF NOT EXISTS service_prices (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    service_type VARCHAR(50) UNIQUE NOT NULL,
    amount INTEGER NOT NULL,
    updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
);

CREATE TABLE IF NOT EXISTS platform_settings (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    delivery_fee_base INTEGER DEFAULT 50,
    platform_service_fee_percentage REAL DEFAULT 5,
    surge_enabled INTEGER DEFAULT 1,
    surge_night_start VARCHAR(5) DEFAULT '21:00',
    surge_night_end VARCHAR(5) DEFAULT '06:00',
    surge_night_multiplier REAL DEFAULT 1.5,
    surge_rain_multiplier REAL DEFAULT 1.3,
    surge_emergency_multiplier REAL DEFAULT 2.0,
    platform_margin_target_percentage REAL DEFAULT 15,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
);

-- Operational data, fully cleared by the reset
CREATE TABLE IF NOT EXISTS service_requests (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER,
    vehicle_number VARCHAR(50) NOT NULL,
    driving_licence VARCHAR(100) NOT NULL,
    phone_number VARCHAR(20) NOT NULL,
    service_type VARCHAR(50) NOT NULL,
    amount INTEGER NOT NULL,
    status VARCHAR(20) DEFAULT 'Pending' CHECK(status IN ('Pending', 'Assigned', 'In Progress', 'Completed', 'Cancelled')),
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    FOREIGN KEY (user_id) REFERENCES users(id)
);

CREATE TABLE IF NOT EXISTS payments (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    service_request_id INTEGER NOT NULL,
    provider VARCHAR(50) NOT NULL,
    provider_payment_id VARCHAR(128),
    amount INTEGER NOT NULL,
    currency VARCHAR(10) DEFAULT 'INR',
    status VARCHAR(30) DEFAULT 'created',
    metadata TEXT,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    FOREIGN KEY (service_request_id) REFERENCES service_requests(id)
);

CREATE TABLE IF NOT EXISTS settlements (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    service_request_id INTEGER,
    worker_id INTEGER,
    settlement_date TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    customer_amount INTEGER NOT NULL,
    fuel_cost INTEGER NOT NULL,
    delivery_fee INTEGER NOT NULL,
    platform_service_fee INTEGER NOT NULL,
    surge_fee INTEGER DEFAULT 0,
    worker_payout REAL NOT NULL,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    FOREIGN KEY (service_request_id) REFERENCES service_requests(id),
    FOREIGN KEY (worker_id) REFERENCES workers(id)
);

CREATE INDEX IF NOT EXISTS idx_users_email ON users(email);
CREATE INDEX IF NOT EXISTS idx_workers_email ON workers(email);
CREATE INDEX IF NOT EXISTS idx_workers_status ON workers(status);
CREATE INDEX IF NOT EXISTS idx_service_types_code ON service_types(code);
CREATE INDEX IF NOT EXISTS idx_service_requests_user_id ON service_requests(user_id);
CREATE INDEX IF NOT EXISTS idx_service_requests_status ON service_requests(status);
CREATE INDEX IF NOT EXISTS idx_service_requests_created_at ON service_requests(created_at);
"#;

/// Catalog seed rows. The app expects these to exist from day one; the reset
/// preserves them.
const AGF_SEED_SQL: &str = r#"
INSERT INTO service_types (code, label, amount) VALUES
    ('petrol', 'Petrol', 100),
    ('diesel', 'Diesel', 150),
    ('crane', 'Crane', 200),
    ('mechanic_bike', 'Mechanic (Bike)', 300),
    ('mechanic_car', 'Mechanic (Car)', 300)
ON CONFLICT DO NOTHING;

INSERT INTO service_prices (service_type, amount) VALUES
    ('petrol', 100),
    ('diesel', 100),
    ('crane', 1500),
    ('mechanic_bike', 500),
    ('mechanic_car', 1200)
ON CONFLICT DO NOTHING;

INSERT INTO platform_settings (id) VALUES (1)
ON CONFLICT DO NOTHING;
"#;

/// DDL for the connectivity-report database.
const CONNECTIVITY_SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS connectivity_reports (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    lat REAL NOT NULL,
    lng REAL NOT NULL,
    severity VARCHAR(20) NOT NULL,
    effective_type VARCHAR(50),
    downlink REAL,
    rtt INTEGER,
    failures INTEGER DEFAULT 0,
    offline INTEGER DEFAULT 0,
    reported_at TIMESTAMP NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_connectivity_reports_time ON connectivity_reports(reported_at);
CREATE INDEX IF NOT EXISTS idx_connectivity_reports_latlng ON connectivity_reports(lat, lng);
"#;

/// Initialize the primary application schema and its catalog seeds.
pub fn init_agf_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(AGF_SCHEMA_SQL)?;
    conn.execute_batch(AGF_SEED_SQL)?;
    Ok(())
}

/// Initialize the connectivity-report schema.
pub fn init_connectivity_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(CONNECTIVITY_SCHEMA_SQL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn agf_schema_creates_all_tables() {
        let conn = Connection::open_in_memory().unwrap();
        init_agf_schema(&conn).unwrap();

        let tables = crate::db::user_tables(&conn).unwrap();
        for expected in [
            "payments",
            "platform_settings",
            "service_prices",
            "service_requests",
            "service_types",
            "settlements",
            "users",
            "workers",
        ] {
            assert!(tables.contains(&expected.to_string()), "missing {expected}");
        }
    }

    #[test]
    fn agf_schema_seeds_catalog() {
        let conn = Connection::open_in_memory().unwrap();
        init_agf_schema(&conn).unwrap();

        let types: i64 = conn
            .query_row("SELECT COUNT(*) FROM service_types", [], |r| r.get(0))
            .unwrap();
        assert_eq!(types, 5);

        let prices: i64 = conn
            .query_row("SELECT COUNT(*) FROM service_prices", [], |r| r.get(0))
            .unwrap();
        assert_eq!(prices, 5);

        let settings: i64 = conn
            .query_row("SELECT COUNT(*) FROM platform_settings", [], |r| r.get(0))
            .unwrap();
        assert_eq!(settings, 1);
    }

    #[test]
    fn schemas_are_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        init_agf_schema(&conn).unwrap();
        init_agf_schema(&conn).unwrap(); // second call should not error or duplicate

        let types: i64 = conn
            .query_row("SELECT COUNT(*) FROM service_types", [], |r| r.get(0))
            .unwrap();
        assert_eq!(types, 5);

        let conn = Connection::open_in_memory().unwrap();
        init_connectivity_schema(&conn).unwrap();
        init_connectivity_schema(&conn).unwrap();
    }

    #[test]
    fn connectivity_schema_has_report_table() {
        let conn = Connection::open_in_memory().unwrap();
        init_connectivity_schema(&conn).unwrap();

        assert!(crate::db::table_exists(&conn, "connectivity_reports").unwrap());
        // AUTOINCREMENT means sequence bookkeeping exists for the reset to wipe
        assert!(crate::db::table_exists(&conn, "sqlite_sequence").unwrap());
    }
}
