//! Configuration options for table extraction.
//!
//! The `Options` struct controls how the extractor locates the table node
//! and how it treats the leading row.

/// Configuration options for table extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use wikitable_extract::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     drop_leading_row: false,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// CSS selector locating the table node. The first match is used.
    ///
    /// Default: `"table"`
    pub table_selector: String,

    /// Discard the first row node unconditionally, on the structural
    /// assumption that it duplicates the header cells.
    ///
    /// When the document genuinely has no header row, the default silently
    /// drops the first data row. Set to `false` for headerless tables.
    ///
    /// Default: `true`
    pub drop_leading_row: bool,
}

impl Options {
    /// Preset targeting sortable wiki tables (`table.wikitable.sortable`).
    #[must_use]
    pub fn wikitable() -> Self {
        Self {
            table_selector: "table.wikitable.sortable".to_string(),
            ..Self::default()
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            table_selector: "table".to_string(),
            drop_leading_row: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let opts = Options::default();
        assert_eq!(opts.table_selector, "table");
        assert!(opts.drop_leading_row);
    }

    #[test]
    fn wikitable_preset_targets_sortable_wiki_tables() {
        let opts = Options::wikitable();
        assert_eq!(opts.table_selector, "table.wikitable.sortable");
        assert!(opts.drop_leading_row);
    }
}
