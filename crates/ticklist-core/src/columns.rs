//! Checklist-to-spreadsheet-column mapping.
//!
//! Each checklist logs its completion time into a fixed spreadsheet
//! column. The mapping is static configuration, read-only after
//! startup: a checklist name resolves (case-insensitively) to a
//! logical column, and a logical column to a 1-based column number.
//! A rushed completion lands one column to the right of its base.

use std::collections::HashMap;
use std::fmt;

/// Logical spreadsheet column a checklist logs into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SheetColumn {
    /// Daytime checklist column (column B).
    Day,
    /// Nighttime checklist column (column D).
    Night,
}

impl SheetColumn {
    /// 1-based base column number in the spreadsheet.
    pub fn base_number(self) -> u32 {
        match self {
            Self::Day => 2,
            Self::Night => 4,
        }
    }

    /// 1-based column number, shifted one right for rushed completions.
    pub fn number(self, rushed: bool) -> u32 {
        self.base_number() + u32::from(rushed)
    }
}

impl fmt::Display for SheetColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Day => write!(f, "Day"),
            Self::Night => write!(f, "Night"),
        }
    }
}

/// Static mapping from checklist names to their logical columns.
///
/// Lookup is case-insensitive; unmapped names fall back to
/// [`SheetColumn::Day`].
#[derive(Clone, Debug)]
pub struct ColumnMap {
    by_checklist: HashMap<String, SheetColumn>,
}

impl ColumnMap {
    /// Create an empty map (everything resolves to `Day`).
    pub fn empty() -> Self {
        Self {
            by_checklist: HashMap::new(),
        }
    }

    /// Add a checklist-name-to-column entry. Names are stored lowercased.
    pub fn with_entry<S: Into<String>>(mut self, checklist: S, column: SheetColumn) -> Self {
        self.by_checklist
            .insert(checklist.into().to_lowercase(), column);
        self
    }

    /// Resolve the logical column for a checklist name.
    pub fn resolve(&self, checklist_name: &str) -> SheetColumn {
        self.by_checklist
            .get(&checklist_name.to_lowercase())
            .copied()
            .unwrap_or(SheetColumn::Day)
    }
}

impl Default for ColumnMap {
    /// The standard mapping: `morning` → Day, `night` → Night.
    fn default() -> Self {
        Self::empty()
            .with_entry("morning", SheetColumn::Day)
            .with_entry("night", SheetColumn::Night)
    }
}
