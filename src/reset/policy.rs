//! Per-table reset rules.
//!
//! Which tables survive a reset is data, not control flow: a [`ResetPolicy`]
//! maps table names to a [`TablePolicy`] variant, so protecting another
//! table is a one-line change to the policy constructor.

use std::collections::BTreeSet;

/// Role label that marks an account as an administrator (case-sensitive).
pub const ADMIN_ROLE: &str = "Admin";

/// Reserved administrator address, compared case-insensitively.
pub const ADMIN_EMAIL: &str = "admin@gmail.com";

/// What the reset does to a single table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TablePolicy {
    /// Protected table: rows are left untouched.
    Keep,
    /// Rows failing the admin-preservation predicate are deleted; admin
    /// accounts survive.
    FilteredDelete,
    /// Every row is deleted.
    FullDelete,
}

/// Reset rules for one database, resolved per table by name.
#[derive(Debug, Clone)]
pub struct ResetPolicy {
    label: &'static str,
    protected: BTreeSet<&'static str>,
    filtered: Option<&'static str>,
}

impl ResetPolicy {
    /// Policy for the primary application database: the catalog tables are
    /// kept whole and `users` keeps its admin rows.
    pub fn agf() -> Self {
        Self {
            label: "AGF",
            protected: ["service_types", "service_prices", "platform_settings"]
                .into_iter()
                .collect(),
            filtered: Some("users"),
        }
    }

    /// Policy for the connectivity store: nothing is protected, every table
    /// is fully cleared.
    pub fn connectivity() -> Self {
        Self {
            label: "CONNECTIVITY",
            protected: BTreeSet::new(),
            filtered: None,
        }
    }

    /// Tag printed in every progress line, e.g. `[AGF]`.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// The table subject to the admin-preservation filter, if any. Its
    /// sequence counter is recomputed rather than removed.
    pub fn filtered_table(&self) -> Option<&'static str> {
        self.filtered
    }

    /// Resolve the policy for a table. The filtered table wins over the
    /// protected set, so listing it in both places keeps the filter.
    pub fn policy_for(&self, table: &str) -> TablePolicy {
        if self.filtered == Some(table) {
            TablePolicy::FilteredDelete
        } else if self.protected.contains(table) {
            TablePolicy::Keep
        } else {
            TablePolicy::FullDelete
        }
    }
}
