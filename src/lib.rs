//! # wikitable-extract
//!
//! Wiki table extraction library.
//!
//! This library converts a parsed HTML document containing a wiki-style
//! table into a validated rectangular [`Table`] and projects it into
//! ordered title-to-value [`Record`]s, one per row.
//!
//! ## Quick Start
//!
//! ```rust
//! use wikitable_extract::extract;
//!
//! let html = r#"<table>
//!     <tr><th>Postcode</th><th>Borough</th></tr>
//!     <tr><td>M3A</td><td>North York</td></tr>
//! </table>"#;
//!
//! let table = extract(html)?;
//! assert_eq!(table.titles(), ["Postcode", "Borough"]);
//! assert_eq!(table.rows(), [["M3A", "North York"]]);
//! # Ok::<(), wikitable_extract::Error>(())
//! ```
//!
//! ## Structure
//!
//! - **Extraction**: a small generic algorithm over a four-query
//!   capability interface ([`TableSource`]), so any parser can feed it
//! - **Validation**: tables are rectangular or they are errors; nothing
//!   partially populated ever reaches the caller
//! - **Records**: lazy projection of each row into a title-keyed mapping
//!
//! The companion modules clean extracted postal-area rows, resolve their
//! coordinates through a caller-supplied geocoder with a bounded retry,
//! and load venue-API credentials from the environment.

mod error;
mod extract;
mod options;
mod source;
mod table;

/// HTML adapter implementing the capability interface via dom_query.
pub mod html;

/// Character encoding detection for byte inputs.
pub mod encoding;

/// Postal-area record cleaning.
pub mod postcodes;

/// Bounded coordinate resolution over an external geocoder.
pub mod geocode;

/// Externally supplied venue-API configuration.
pub mod config;

// Public API - re-exports
pub use error::{Error, Result};
pub use extract::extract_table as extract_from_source;
pub use html::HtmlTableSource;
pub use options::Options;
pub use source::TableSource;
pub use table::{Record, Table, TableBuilder};

/// Extract the first table from an HTML document using default options.
///
/// # Example
///
/// ```rust
/// use wikitable_extract::extract;
///
/// let table = extract("<table><tr><th>A</th></tr><tr><td>1</td></tr></table>")?;
/// assert_eq!(table.row_count(), 1);
/// # Ok::<(), wikitable_extract::Error>(())
/// ```
pub fn extract(html: &str) -> Result<Table> {
    extract_with_options(html, &Options::default())
}

/// Extract the first matching table from an HTML document with custom
/// options.
///
/// # Example
///
/// ```rust
/// use wikitable_extract::{extract_with_options, Options};
///
/// let html = r#"<table class="wikitable sortable">
///     <tr><th>Postcode</th></tr><tr><td>M3A</td></tr>
/// </table>"#;
/// let table = extract_with_options(html, &Options::wikitable())?;
/// assert_eq!(table.titles(), ["Postcode"]);
/// # Ok::<(), wikitable_extract::Error>(())
/// ```
pub fn extract_with_options(html: &str, options: &Options) -> Result<Table> {
    let source = HtmlTableSource::with_selector(html, &options.table_selector);
    extract_from_source(&source, options)
}

/// Extract a table from HTML bytes with automatic encoding detection.
///
/// Detects the charset from meta tags and transcodes to UTF-8 before
/// parsing; undecodable characters are replaced rather than fatal.
///
/// # Example
///
/// ```rust
/// use wikitable_extract::extract_bytes;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body>\
///     <table><tr><th>Caf\xE9</th></tr><tr><td>1</td></tr></table></body></html>";
/// let table = extract_bytes(html)?;
/// assert_eq!(table.titles(), ["Caf\u{e9}"]);
/// # Ok::<(), wikitable_extract::Error>(())
/// ```
pub fn extract_bytes(html: &[u8]) -> Result<Table> {
    extract_bytes_with_options(html, &Options::default())
}

/// Extract a table from HTML bytes with custom options and automatic
/// encoding detection.
pub fn extract_bytes_with_options(html: &[u8], options: &Options) -> Result<Table> {
    let html_str = encoding::decode_to_utf8(html);
    extract_with_options(&html_str, options)
}
