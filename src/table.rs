//! Validated rectangular tables and their record projection.
//!
//! A [`Table`] is constructed exactly once through [`TableBuilder`], which
//! enforces set-once assignment of titles and rows and validates the result
//! before any caller can observe it. After `build()` the table is immutable.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::error::{Error, Result};

/// A validated, immutable rectangular table.
///
/// Invariants guaranteed after construction:
/// - at least one row;
/// - every row has the same length;
/// - the title count equals the row width (titles default to the ordinal
///   strings `"0".."n-1"` when none were supplied).
///
/// # Example
///
/// ```rust
/// use wikitable_extract::Table;
///
/// let mut builder = Table::builder();
/// builder.titles(vec!["A".into(), "B".into()])?;
/// builder.rows(vec![vec!["1".into(), "2".into()]])?;
/// let table = builder.build()?;
///
/// assert_eq!(table.titles(), ["A", "B"]);
/// assert_eq!(table.row_count(), 1);
/// # Ok::<(), wikitable_extract::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    titles: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create an empty builder.
    #[must_use]
    pub fn builder() -> TableBuilder {
        TableBuilder::default()
    }

    /// Column titles, in document order.
    #[must_use]
    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    /// Data rows, in document order.
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of columns (equals the title count).
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.titles.len()
    }

    /// Number of data rows. Always at least one.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Project the table into one [`Record`] per row, lazily.
    ///
    /// Records borrow the table; they are not stored independently.
    pub fn records(&self) -> impl Iterator<Item = Record<'_>> + '_ {
        self.rows.iter().map(|row| Record {
            titles: &self.titles,
            values: row,
        })
    }
}

/// Single-shot builder for [`Table`].
///
/// `titles` and `rows` may each be assigned exactly once; a second
/// assignment fails with [`Error::AlreadyInitialized`] and leaves the first
/// assignment intact. `build()` performs the rectangularity validation.
#[derive(Debug, Default)]
pub struct TableBuilder {
    titles: Option<Vec<String>>,
    rows: Option<Vec<Vec<String>>>,
}

impl TableBuilder {
    /// Assign the column titles. May be called at most once; an empty
    /// vector still counts as the one allowed assignment.
    pub fn titles(&mut self, titles: Vec<String>) -> Result<&mut Self> {
        if self.titles.is_some() {
            return Err(Error::AlreadyInitialized("titles"));
        }
        self.titles = Some(titles);
        Ok(self)
    }

    /// Assign the data rows, all at once. May be called at most once.
    pub fn rows(&mut self, rows: Vec<Vec<String>>) -> Result<&mut Self> {
        if self.rows.is_some() {
            return Err(Error::AlreadyInitialized("rows"));
        }
        self.rows = Some(rows);
        Ok(self)
    }

    /// Validate and produce the immutable [`Table`].
    ///
    /// Fails with [`Error::EmptyTable`] when no rows were assigned (or the
    /// assigned vector was empty), [`Error::RowLengthMismatch`] on ragged
    /// rows, and [`Error::ColumnCountMismatch`] when supplied titles do not
    /// line up with the row width.
    pub fn build(self) -> Result<Table> {
        let rows = self.rows.unwrap_or_default();
        let Some(first) = rows.first() else {
            return Err(Error::EmptyTable);
        };

        let width = first.len();
        for (index, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(Error::RowLengthMismatch {
                    row: index,
                    expected: width,
                    found: row.len(),
                });
            }
        }

        let titles = match self.titles {
            Some(titles) if !titles.is_empty() => {
                if titles.len() != width {
                    return Err(Error::ColumnCountMismatch {
                        titles: titles.len(),
                        columns: width,
                    });
                }
                titles
            }
            // No header cells found: fall back to ordinal titles.
            _ => (0..width).map(|i| i.to_string()).collect(),
        };

        Ok(Table { titles, rows })
    }
}

/// One row of a [`Table`] expressed as a title-to-value mapping.
///
/// Keys iterate in table order. Serializes as a JSON object, so a table's
/// record projection matches the row-dictionary shape downstream tabular
/// consumers load directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    titles: &'a [String],
    values: &'a [String],
}

impl<'a> Record<'a> {
    /// Value for `title`, or `None` when the table has no such column.
    #[must_use]
    pub fn get(&self, title: &str) -> Option<&'a str> {
        let index = self.titles.iter().position(|t| t.as_str() == title)?;
        self.values.get(index).map(String::as_str)
    }

    /// Iterate `(title, value)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> + '_ {
        self.titles
            .iter()
            .zip(self.values)
            .map(|(title, value)| (title.as_str(), value.as_str()))
    }

    /// Number of columns in the record.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the record has no columns. Never true for records produced
    /// by a validated table.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Serialize for Record<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (title, value) in self.iter() {
            map.serialize_entry(title, value)?;
        }
        map.end()
    }
}
