//! Accumulated validation.
//!
//! [`ValidationCollector`] gathers every failed check for one input into a
//! single [`SchemaError::Invalid`]. Validators run in stages and call
//! [`checkpoint`](ValidationCollector::checkpoint) between them, so later
//! checks only run on inputs whose structure is already known to be sound.

use pasture_calendar::DayKey;

use crate::error::{SchemaError, TableKind, Violation};
use crate::table::Table;

pub(crate) struct ValidationCollector {
    table: TableKind,
    violations: Vec<Violation>,
}

impl ValidationCollector {
    /// Create an empty collector for `table`.
    pub(crate) fn new(table: TableKind) -> Self {
        Self {
            table,
            violations: Vec::new(),
        }
    }

    /// Record one failed check.
    pub(crate) fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// Returns `true` when no failures have been recorded.
    pub(crate) fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Fail with everything recorded so far, or continue with an empty
    /// collector.
    pub(crate) fn checkpoint(&mut self) -> Result<(), SchemaError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::Invalid {
                table: self.table,
                violations: std::mem::take(&mut self.violations),
            })
        }
    }

    /// Consume the collector: `Ok(())` if nothing was recorded.
    pub(crate) fn finish(mut self) -> Result<(), SchemaError> {
        self.checkpoint()
    }
}

/// Records a [`Violation::KeySetMismatch`] unless `present` equals `expected`
/// as a set.
pub(crate) fn check_key_set<'a>(
    c: &mut ValidationCollector,
    present: impl IntoIterator<Item = &'a str>,
    expected: &[&str],
) {
    let present: Vec<&str> = present.into_iter().collect();
    let missing: Vec<String> = expected
        .iter()
        .filter(|k| !present.contains(k))
        .map(|k| k.to_string())
        .collect();
    let unexpected: Vec<String> = present
        .iter()
        .filter(|k| !expected.contains(k))
        .map(|k| k.to_string())
        .collect();
    if !missing.is_empty() || !unexpected.is_empty() {
        c.push(Violation::KeySetMismatch {
            missing,
            unexpected,
        });
    }
}

/// Records a [`Violation::NotInteger`] for every listed column that is
/// present but float typed.
pub(crate) fn check_integer_columns(c: &mut ValidationCollector, table: &Table, names: &[&str]) {
    for &name in names {
        if let Some(col) = table.column(name)
            && !col.is_integer()
        {
            c.push(Violation::NotInteger {
                column: name.to_string(),
            });
        }
    }
}

/// Records a [`Violation::MissingValues`] for every column holding NaN.
pub(crate) fn check_missing(c: &mut ValidationCollector, table: &Table) {
    for (name, col) in table.iter() {
        let count = col.missing_count();
        if count > 0 {
            c.push(Violation::MissingValues {
                column: name.to_string(),
                count,
            });
        }
    }
}

/// Converts the integer `year`/`doy` columns into keys.
///
/// Rows outside the representable year range or outside `1..=max_doy` are
/// recorded and skipped, so the returned keys are only meaningful when the
/// collector is still empty.
pub(crate) fn read_day_keys(
    c: &mut ValidationCollector,
    table: &Table,
    max_doy: u16,
) -> Vec<DayKey> {
    let (Some(years), Some(doys)) = (table.int_column("year"), table.int_column("doy")) else {
        return Vec::new();
    };
    let mut keys = Vec::with_capacity(years.len());
    for (row, (&year, &doy)) in years.iter().zip(doys).enumerate() {
        let Ok(y) = i32::try_from(year) else {
            c.push(Violation::YearOutOfRange { row, year });
            continue;
        };
        if doy < 1 || doy > i64::from(max_doy) {
            c.push(Violation::DoyOutOfRange {
                row,
                doy,
                max: max_doy,
            });
            continue;
        }
        keys.push(DayKey::new(y, doy as u16));
    }
    keys
}
