//! Full street address synthesis.
//!
//! Two independent constructions run for every record:
//!
//! - **legacy**: direction, name and designation groups, each possibly fed
//!   by several columns. Only available when all three groups resolved to at
//!   least one column in the table.
//! - **extended**: street number, direction, name, designation and unit, one
//!   column each, skipping blank parts.
//!
//! The extended form wins whenever it is non-empty.

use serde::Serialize;

use billmerge_map::AddressColumns;
use billmerge_model::Record;

use crate::data_utils::{collapse_whitespace, join_columns, trimmed_value};

/// Which construction produced a record's preferred address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressSource {
    Extended,
    Legacy,
    None,
}

/// Both candidate addresses for one record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynthesizedAddress {
    pub legacy: String,
    pub extended: String,
}

impl SynthesizedAddress {
    /// Extended when non-empty, else legacy, else empty.
    pub fn preferred(&self) -> &str {
        match self.source() {
            AddressSource::Extended => self.extended.as_str(),
            AddressSource::Legacy => self.legacy.as_str(),
            AddressSource::None => "",
        }
    }

    pub fn source(&self) -> AddressSource {
        if !self.extended.is_empty() {
            AddressSource::Extended
        } else if !self.legacy.is_empty() {
            AddressSource::Legacy
        } else {
            AddressSource::None
        }
    }
}

/// Legacy construction: `direction name designation`, whitespace collapsed.
///
/// Empty for every record of a table lacking any of the three groups.
pub fn legacy_address(record: &Record, columns: &AddressColumns) -> String {
    if !columns.has_legacy_street_parts() {
        return String::new();
    }
    let direction = join_columns(record, &columns.street_direction);
    let name = join_columns(record, &columns.street_name);
    let designation = join_columns(record, &columns.street_designation);
    collapse_whitespace(&format!("{direction} {name} {designation}"))
}

/// Extended construction: `number direction name designation unit`, blank
/// parts omitted.
pub fn extended_address(record: &Record, columns: &AddressColumns) -> String {
    let street_parts = [
        columns.street_number.as_deref(),
        columns.location_street_direction.as_deref(),
        columns.location_street_name.as_deref(),
        columns.location_street_designation.as_deref(),
    ];
    let mut address = street_parts
        .into_iter()
        .map(|column| trimmed_value(record, column))
        .filter(|value| !value.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    let unit = trimmed_value(record, columns.unit_number.as_deref());
    if !unit.is_empty() {
        address.push(' ');
        address.push_str(unit);
    }
    address.trim().to_string()
}

/// Runs both constructions for one record.
pub fn synthesize(record: &Record, columns: &AddressColumns) -> SynthesizedAddress {
    SynthesizedAddress {
        legacy: legacy_address(record, columns),
        extended: extended_address(record, columns),
    }
}
