//! Maintenance tooling for the AGF Petrol databases — reset, setup, and
//! inspection.
//!
//! The core operation is a policy-driven reset that clears operational data
//! from the two application databases while preserving the reference tables
//! and administrator accounts the platform cannot run without. Each table in
//! a database resolves to one policy:
//!
//! | Policy | Effect | AGF tables |
//! |--------|--------|------------|
//! | **Keep** | Rows untouched | `service_types`, `service_prices`, `platform_settings` |
//! | **FilteredDelete** | Non-admin rows deleted | `users` |
//! | **FullDelete** | All rows deleted | everything else |
//!
//! The connectivity database has no protected tables; every table there is
//! fully cleared.
//!
//! # Guarantees
//!
//! - **Atomic per database**: all deletions and sequence maintenance for one
//!   database run in a single transaction. A failure rolls everything back.
//! - **Missing files are skipped**, never created.
//! - **`AUTOINCREMENT` counters** are reset for cleared tables and recomputed
//!   to the highest surviving id for the filtered `users` table.
//!
//! # Modules
//!
//! - [`config`] — Configuration loading from TOML files and environment variables
//! - [`db`] — SQLite connection helpers, schema DDL, and catalog queries
//! - [`error`] — Typed failures surfaced by the reset engine
//! - [`reset`] — The reset engine and its table policies

pub mod config;
pub mod db;
pub mod error;
pub mod reset;
