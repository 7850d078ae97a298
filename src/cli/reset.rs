//! CLI `reset` command — clear both databases after user confirmation.

use anyhow::Result;
use std::io::Write;

use crate::config::CleanupConfig;
use crate::reset::{reset_database, ResetPolicy};

/// Clear both databases after user confirmation.
///
/// Anything other than a literal `YES` cancels without touching either file,
/// and cancelling is a normal exit, not an error.
pub fn reset(config: &CleanupConfig) -> Result<()> {
    println!("This will permanently clear both databases.");
    println!("Admin rows in users table are preserved.");
    print!("Type YES to continue: ");
    std::io::stdout().flush()?;

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;

    if !confirmed(&input) {
        println!("Cancelled.");
        return Ok(());
    }

    let mut out = std::io::stdout();
    reset_database(&config.agf_db_path(), &ResetPolicy::agf(), &mut out)?;
    reset_database(
        &config.connectivity_db_path(),
        &ResetPolicy::connectivity(),
        &mut out,
    )?;

    println!("Done.");
    Ok(())
}

/// Only the exact string `YES` confirms, after trimming the line ending.
fn confirmed(input: &str) -> bool {
    input.trim() == "YES"
}
