//! The reset engine.
//!
//! [`reset_database`] clears one database according to a [`ResetPolicy`]:
//! every mutation for a database happens inside a single transaction, so a
//! reset either commits completely or leaves the file exactly as it was.
//! A missing database file is skipped, never created.

pub mod policy;

use std::io::Write;
use std::path::Path;

use rusqlite::{params, Connection};

use crate::db;
use crate::error::CleanupError;
use policy::{ADMIN_EMAIL, ADMIN_ROLE};

pub use policy::{ResetPolicy, TablePolicy};

/// What a reset did to one database.
#[derive(Debug)]
pub enum ResetOutcome {
    /// The database file did not exist; nothing was opened or created.
    Skipped,
    /// The reset committed.
    Completed(ResetSummary),
}

/// Per-table accounting for a committed reset.
#[derive(Debug, Default)]
pub struct ResetSummary {
    /// Protected tables left untouched.
    pub kept: Vec<String>,
    /// Tables fully cleared.
    pub cleared: Vec<String>,
    /// The table cleared under the admin-preservation filter, if present.
    pub filtered: Option<String>,
}

/// Reset the database at `path` under `policy`, writing progress lines to
/// `out`.
///
/// If the file is missing the reset is skipped. Otherwise all deletions and
/// sequence maintenance run in one transaction; any failure rolls the whole
/// database back and surfaces as [`CleanupError::Cleanup`]. Foreign key
/// enforcement is turned off for the duration and restored before the
/// connection closes.
pub fn reset_database(
    path: &Path,
    policy: &ResetPolicy,
    out: &mut dyn Write,
) -> Result<ResetOutcome, CleanupError> {
    let label = policy.label();

    if !path.exists() {
        writeln!(out, "[{label}] Skipped: database not found at {}", path.display())?;
        return Ok(ResetOutcome::Skipped);
    }

    tracing::debug!(path = %path.display(), label, "resetting database");

    let mut conn = db::open_existing(path).map_err(|source| CleanupError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let result = run_cleanup(&mut conn, policy, out);

    // Constraint enforcement comes back on regardless of how the cleanup
    // ended. Referential integrity of the surviving rows is the schema's
    // business, not ours.
    let restored = conn.pragma_update(None, "foreign_keys", "ON");

    let summary = result?;
    restored.map_err(|source| CleanupError::Cleanup {
        label: label.to_owned(),
        source,
    })?;

    tracing::info!(
        label,
        kept = summary.kept.len(),
        cleared = summary.cleared.len(),
        filtered = ?summary.filtered,
        "cleanup committed"
    );
    Ok(ResetOutcome::Completed(summary))
}

fn run_cleanup(
    conn: &mut Connection,
    policy: &ResetPolicy,
    out: &mut dyn Write,
) -> Result<ResetSummary, CleanupError> {
    let label = policy.label();
    let fail = |source: rusqlite::Error| CleanupError::Cleanup {
        label: label.to_owned(),
        source,
    };

    // Cannot be toggled once the transaction is open.
    conn.pragma_update(None, "foreign_keys", "OFF").map_err(fail)?;

    let tx = conn.transaction().map_err(fail)?;
    let tables = db::user_tables(&tx).map_err(fail)?;
    let mut summary = ResetSummary::default();

    for table in tables {
        match policy.policy_for(&table) {
            TablePolicy::Keep => {
                writeln!(out, "[{label}] Kept table: {table}")?;
                summary.kept.push(table);
            }
            TablePolicy::FilteredDelete => {
                let sql = format!(
                    "DELETE FROM {} WHERE role != ?1 AND lower(email) != lower(?2)",
                    db::quoted(&table)
                );
                tx.execute(&sql, params![ADMIN_ROLE, ADMIN_EMAIL]).map_err(fail)?;
                writeln!(out, "[{label}] Cleared non-admin {table}")?;
                summary.filtered = Some(table);
            }
            TablePolicy::FullDelete => {
                tx.execute(&format!("DELETE FROM {}", db::quoted(&table)), [])
                    .map_err(fail)?;
                writeln!(out, "[{label}] Cleared table: {table}")?;
                summary.cleared.push(table);
            }
        }
    }

    reset_sequences(&tx, policy, &summary).map_err(fail)?;

    tx.commit().map_err(fail)?;
    writeln!(out, "[{label}] Cleanup committed")?;
    Ok(summary)
}

/// Bring `sqlite_sequence` in line with the rows that survived.
///
/// Fully cleared tables lose their counter so ids restart at 1. The
/// filtered table keeps a counter equal to the highest surviving id. With
/// no filtered table every counter goes.
fn reset_sequences(
    tx: &Connection,
    policy: &ResetPolicy,
    summary: &ResetSummary,
) -> rusqlite::Result<()> {
    if !db::table_exists(tx, "sqlite_sequence")? {
        return Ok(());
    }

    match policy.filtered_table() {
        Some(filtered) => {
            for table in &summary.cleared {
                tx.execute("DELETE FROM sqlite_sequence WHERE name = ?1", params![table])?;
            }
            let sql = format!(
                "UPDATE sqlite_sequence SET seq = COALESCE((SELECT MAX(id) FROM {}), 0) \
                 WHERE name = ?1",
                db::quoted(filtered)
            );
            tx.execute(&sql, params![filtered])?;
        }
        None => {
            tx.execute("DELETE FROM sqlite_sequence", [])?;
        }
    }
    Ok(())
}
