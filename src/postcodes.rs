//! Postal-area record cleaning.
//!
//! The extracted wiki table lists one postal area per row under the
//! `Postcode` / `Borough` / `Neighbourhood` columns, padded with
//! "Not assigned" placeholders and split across duplicate postcode rows.
//! These passes turn the raw rows into a clean area list.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::table::{Record, Table};

/// Column title carrying the postal code.
pub const POSTCODE_COLUMN: &str = "Postcode";
/// Column title carrying the borough name.
pub const BOROUGH_COLUMN: &str = "Borough";
/// Column title carrying the neighbourhood name(s).
pub const NEIGHBOURHOOD_COLUMN: &str = "Neighbourhood";

/// Placeholder the source table uses for missing boroughs/neighbourhoods.
pub const NOT_ASSIGNED: &str = "Not assigned";

/// One postal area row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalArea {
    /// Postal code, e.g. `M5A`.
    pub postcode: String,
    /// Borough the area belongs to.
    pub borough: String,
    /// Neighbourhood name; comma-joined after merging.
    pub neighbourhood: String,
}

impl PostalArea {
    /// Build a postal area from an extracted record.
    ///
    /// Fails with [`Error::MissingColumn`] when the table lacks one of the
    /// three expected columns.
    pub fn from_record(record: &Record<'_>) -> Result<Self> {
        let column = |title: &str| -> Result<String> {
            record
                .get(title)
                .map(ToString::to_string)
                .ok_or_else(|| Error::MissingColumn(title.to_string()))
        };

        Ok(Self {
            postcode: column(POSTCODE_COLUMN)?,
            borough: column(BOROUGH_COLUMN)?,
            neighbourhood: column(NEIGHBOURHOOD_COLUMN)?,
        })
    }
}

/// Project an extracted table into postal areas, one per row.
pub fn postal_areas(table: &Table) -> Result<Vec<PostalArea>> {
    table
        .records()
        .map(|record| PostalArea::from_record(&record))
        .collect()
}

/// Drop areas whose borough was never assigned.
#[must_use]
pub fn retain_assigned(areas: Vec<PostalArea>) -> Vec<PostalArea> {
    areas
        .into_iter()
        .filter(|area| area.borough != NOT_ASSIGNED)
        .collect()
}

/// Give unnamed neighbourhoods the name of their borough.
pub fn name_unassigned_neighbourhoods(areas: &mut [PostalArea]) {
    for area in areas {
        if area.neighbourhood == NOT_ASSIGNED {
            area.neighbourhood.clone_from(&area.borough);
        }
    }
}

/// Merge rows sharing a postcode into one area per (postcode, borough),
/// comma-joining the neighbourhood names. Groups are emitted in key order.
#[must_use]
pub fn merge_same_postcode(areas: Vec<PostalArea>) -> Vec<PostalArea> {
    let mut grouped: BTreeMap<(String, String), Vec<String>> = BTreeMap::new();
    for area in areas {
        grouped
            .entry((area.postcode, area.borough))
            .or_default()
            .push(area.neighbourhood);
    }

    grouped
        .into_iter()
        .map(|((postcode, borough), neighbourhoods)| PostalArea {
            postcode,
            borough,
            neighbourhood: neighbourhoods.join(", "),
        })
        .collect()
}
