//! CLI `setup` command — create both databases with schema and seed data.

use anyhow::{Context, Result};

use crate::config::CleanupConfig;
use crate::db::{self, schema};

/// Create both database files and bring their schemas up. Safe to run
/// against existing databases: the DDL and seeds are idempotent.
pub fn setup(config: &CleanupConfig) -> Result<()> {
    let agf_path = config.agf_db_path();
    let conn = db::create_database(&agf_path)?;
    schema::init_agf_schema(&conn)
        .with_context(|| format!("failed to initialize schema at {}", agf_path.display()))?;
    println!("[AGF] Database ready at {}", agf_path.display());

    let connectivity_path = config.connectivity_db_path();
    let conn = db::create_database(&connectivity_path)?;
    schema::init_connectivity_schema(&conn).with_context(|| {
        format!("failed to initialize schema at {}", connectivity_path.display())
    })?;
    println!("[CONNECTIVITY] Database ready at {}", connectivity_path.display());

    Ok(())
}
