use anyhow::Result;
use std::path::Path;

use crate::config::CleanupConfig;
use crate::db;

/// Display per-table row counts for both databases in the terminal.
pub fn stats(config: &CleanupConfig) -> Result<()> {
    report("AGF", &config.agf_db_path())?;
    println!();
    report("CONNECTIVITY", &config.connectivity_db_path())?;
    Ok(())
}

fn report(label: &str, path: &Path) -> Result<()> {
    println!("[{label}] {}", path.display());
    println!("{}", "=".repeat(40));

    if !path.exists() {
        println!("  (database not found)");
        return Ok(());
    }

    let conn = db::open_readonly(path)?;
    let tables = db::user_tables(&conn)?;
    if tables.is_empty() {
        println!("  (no tables)");
        return Ok(());
    }

    for table in tables {
        let rows: i64 = conn.query_row(
            &format!("SELECT COUNT(*) FROM {}", db::quoted(&table)),
            [],
            |row| row.get(0),
        )?;
        println!("  {table:<28} {rows}");
    }
    Ok(())
}
