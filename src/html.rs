//! HTML adapter for the capability interface.
//!
//! Implements [`TableSource`] on top of the `dom_query` crate: the table
//! node is located by CSS selector, header cells are `th` descendants of
//! the table node, row nodes are `tr`, data cells are `td`.

use dom_query::{Document, Selection};

use crate::source::TableSource;

/// A parsed HTML document ready for table extraction.
///
/// # Example
///
/// ```rust
/// use wikitable_extract::{extract_from_source, HtmlTableSource, Options};
///
/// let source = HtmlTableSource::new("<table><tr><th>A</th></tr><tr><td>1</td></tr></table>");
/// let table = extract_from_source(&source, &Options::default())?;
/// assert_eq!(table.titles(), ["A"]);
/// # Ok::<(), wikitable_extract::Error>(())
/// ```
pub struct HtmlTableSource {
    doc: Document,
    selector: String,
}

impl HtmlTableSource {
    /// Parse `html` and target the first `table` element.
    #[must_use]
    pub fn new(html: &str) -> Self {
        Self::with_selector(html, "table")
    }

    /// Parse `html` and target the first element matching `selector`.
    ///
    /// An invalid selector never matches, so extraction reports the table
    /// as not found rather than panicking.
    #[must_use]
    pub fn with_selector(html: &str, selector: &str) -> Self {
        Self {
            doc: Document::from(html),
            selector: selector.to_string(),
        }
    }
}

impl TableSource for HtmlTableSource {
    type Table<'a>
        = Selection<'a>
    where
        Self: 'a;

    type Row<'a>
        = Selection<'a>
    where
        Self: 'a;

    fn first_table(&self) -> Option<Selection<'_>> {
        let matched = self.doc.try_select(self.selector.as_str())?;
        matched.nodes().first().map(|node| Selection::from(*node))
    }

    fn header_cells<'a>(&'a self, table: &Selection<'a>) -> Vec<String> {
        cell_texts(table, "th")
    }

    fn rows<'a>(&'a self, table: &Selection<'a>) -> Vec<Selection<'a>> {
        table
            .select("tr")
            .nodes()
            .iter()
            .map(|node| Selection::from(*node))
            .collect()
    }

    fn data_cells<'a>(&'a self, row: &Selection<'a>) -> Vec<String> {
        cell_texts(row, "td")
    }
}

fn cell_texts(scope: &Selection<'_>, tag: &str) -> Vec<String> {
    scope
        .select(tag)
        .nodes()
        .iter()
        .map(|node| Selection::from(*node).text().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locates_only_the_first_table() {
        let html = r#"
            <table id="one"><tr><td>first</td></tr></table>
            <table id="two"><tr><td>second</td></tr></table>
        "#;
        let source = HtmlTableSource::new(html);

        let table = source.first_table().expect("first table");
        let rows = source.rows(&table);
        assert_eq!(rows.len(), 1);
        assert_eq!(source.data_cells(&rows[0]), vec!["first".to_string()]);
    }

    #[test]
    fn no_matching_node_yields_none() {
        let source = HtmlTableSource::new("<p>no tables here</p>");
        assert!(source.first_table().is_none());
    }

    #[test]
    fn selector_narrows_the_target_table() {
        let html = r#"
            <table><tr><td>layout</td></tr></table>
            <table class="wikitable sortable"><tr><td>data</td></tr></table>
        "#;
        let source = HtmlTableSource::with_selector(html, "table.wikitable.sortable");

        let table = source.first_table().expect("wikitable");
        let rows = source.rows(&table);
        assert_eq!(source.data_cells(&rows[0]), vec!["data".to_string()]);
    }

    #[test]
    fn invalid_selector_matches_nothing() {
        let source = HtmlTableSource::with_selector("<table></table>", "table[");
        assert!(source.first_table().is_none());
    }

    #[test]
    fn header_cells_come_from_the_table_node() {
        let html = "<table><tr><th>A</th><th>B</th></tr><tr><td>1</td><td>2</td></tr></table>";
        let source = HtmlTableSource::new(html);

        let table = source.first_table().expect("table");
        assert_eq!(
            source.header_cells(&table),
            vec!["A".to_string(), "B".to_string()]
        );
    }
}
