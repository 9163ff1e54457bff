//! Capability interface over an opaque parse tree.
//!
//! The extractor never touches a concrete parser. It only needs four
//! queries against a document: locate the first table node, list a table's
//! header-cell texts, list a table's row nodes, and list a row's data-cell
//! texts. Any parser satisfies this by implementing [`TableSource`] in an
//! adapter; [`crate::html::HtmlTableSource`] is the built-in one.

/// The four capability queries the extractor requires of a parsed document.
///
/// Node handles borrow the source, so the associated types are generic over
/// the borrow lifetime. Cell queries hand out the cells' raw text content;
/// trimming is the extractor's job, not the adapter's.
pub trait TableSource {
    /// Handle for a located table node.
    type Table<'a>
    where
        Self: 'a;

    /// Handle for a row node within a table.
    type Row<'a>
    where
        Self: 'a;

    /// Locate the first table node in the document, if any.
    fn first_table(&self) -> Option<Self::Table<'_>>;

    /// Raw text content of every header cell of `table`, in document
    /// order. Header cells belong to the table node itself, not to the
    /// individual rows. Empty when the table carries no header cells.
    fn header_cells<'a>(&'a self, table: &Self::Table<'a>) -> Vec<String>;

    /// All row nodes within `table`, in document order.
    fn rows<'a>(&'a self, table: &Self::Table<'a>) -> Vec<Self::Row<'a>>;

    /// Raw text content of every data cell of `row`, in document order.
    fn data_cells<'a>(&'a self, row: &Self::Row<'a>) -> Vec<String>;
}
