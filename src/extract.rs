//! Core table extraction algorithm.
//!
//! Generic over [`TableSource`]: locate the table node, pull trimmed header
//! and cell texts through the capability queries, and hand the result to the
//! validating table builder. Stateless; invoke repeatedly on fresh sources.

use crate::error::{Error, Result};
use crate::options::Options;
use crate::source::TableSource;
use crate::table::Table;

/// Extract a validated [`Table`] from any [`TableSource`].
///
/// Fails with [`Error::TableNotFound`] when the source has no table node,
/// and with the builder's validation errors when the extracted content is
/// not rectangular.
pub fn extract_table<S: TableSource>(source: &S, options: &Options) -> Result<Table> {
    let table_node = source.first_table().ok_or(Error::TableNotFound)?;

    let titles: Vec<String> = source
        .header_cells(&table_node)
        .iter()
        .map(|text| clean_cell(text))
        .collect();

    let mut row_nodes = source.rows(&table_node);
    if cfg!(debug_assertions) {
        eprintln!(
            "DEBUG: table extraction found {} header cells, {} row nodes",
            titles.len(),
            row_nodes.len()
        );
    }

    // The first row node is assumed to duplicate the header cells.
    if options.drop_leading_row && !row_nodes.is_empty() {
        row_nodes.remove(0);
    }

    let rows: Vec<Vec<String>> = row_nodes
        .iter()
        .map(|row| {
            source
                .data_cells(row)
                .iter()
                .map(|text| clean_cell(text))
                .collect()
        })
        .collect();

    let mut builder = Table::builder();
    builder.titles(titles)?;
    builder.rows(rows)?;
    builder.build()
}

/// Trim leading/trailing whitespace and newline characters from cell text.
fn clean_cell(text: &str) -> String {
    text.trim().to_string()
}
