//! Resolution of every address field against a loaded table's columns.

use serde::Serialize;
use tracing::debug;

use billmerge_model::{AddressField, ResolutionMode};

use crate::variants::{match_all, match_first};

/// Raw columns resolved for one canonical field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldResolution {
    pub field: &'static str,
    pub mode: ResolutionMode,
    pub columns: Vec<String>,
}

/// Raw columns backing each address field of one table.
///
/// Match-all fields hold zero or more columns in table order; match-first
/// fields hold at most one. A column may appear under several fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressColumns {
    pub billing_address1: Vec<String>,
    pub billing_address2: Vec<String>,
    pub street_direction: Vec<String>,
    pub street_name: Vec<String>,
    pub street_designation: Vec<String>,
    pub street_number: Option<String>,
    pub location_street_direction: Option<String>,
    pub location_street_name: Option<String>,
    pub location_street_designation: Option<String>,
    pub unit_number: Option<String>,
}

impl AddressColumns {
    /// Resolves every [`AddressField`] against `columns`.
    pub fn resolve<S: AsRef<str>>(columns: &[S]) -> Self {
        let all = |field: AddressField| -> Vec<String> {
            match_all(field.synonyms(), columns)
                .into_iter()
                .map(str::to_string)
                .collect()
        };
        let first = |field: AddressField| -> Option<String> {
            match_first(field.synonyms(), columns).map(str::to_string)
        };

        let resolved = Self {
            billing_address1: all(AddressField::BillingAddress1),
            billing_address2: all(AddressField::BillingAddress2),
            street_direction: all(AddressField::StreetDirection),
            street_name: all(AddressField::StreetName),
            street_designation: all(AddressField::StreetDesignation),
            street_number: first(AddressField::StreetNumber),
            location_street_direction: first(AddressField::LocationStreetDirection),
            location_street_name: first(AddressField::LocationStreetName),
            location_street_designation: first(AddressField::LocationStreetDesignation),
            unit_number: first(AddressField::UnitNumber),
        };

        for field in AddressField::ALL {
            let matched = resolved.columns_for(field);
            if matched.is_empty() {
                debug!(field = %field, mode = %field.resolution_mode(), "no column matched");
            } else {
                debug!(
                    field = %field,
                    mode = %field.resolution_mode(),
                    columns = ?matched,
                    "resolved columns"
                );
            }
        }
        resolved
    }

    /// Columns resolved for `field`, as a uniform list.
    pub fn columns_for(&self, field: AddressField) -> Vec<&str> {
        fn many(columns: &[String]) -> Vec<&str> {
            columns.iter().map(String::as_str).collect()
        }
        fn one(column: &Option<String>) -> Vec<&str> {
            column.as_deref().into_iter().collect()
        }
        match field {
            AddressField::BillingAddress1 => many(&self.billing_address1),
            AddressField::BillingAddress2 => many(&self.billing_address2),
            AddressField::StreetDirection => many(&self.street_direction),
            AddressField::StreetName => many(&self.street_name),
            AddressField::StreetDesignation => many(&self.street_designation),
            AddressField::StreetNumber => one(&self.street_number),
            AddressField::LocationStreetDirection => one(&self.location_street_direction),
            AddressField::LocationStreetName => one(&self.location_street_name),
            AddressField::LocationStreetDesignation => one(&self.location_street_designation),
            AddressField::UnitNumber => one(&self.unit_number),
        }
    }

    /// True when the direction, name and designation groups each matched
    /// at least one column. This is a property of the whole table.
    pub fn has_legacy_street_parts(&self) -> bool {
        !self.street_direction.is_empty()
            && !self.street_name.is_empty()
            && !self.street_designation.is_empty()
    }

    /// True when at least one extended-path column was found.
    pub fn has_extended_street_parts(&self) -> bool {
        self.street_number.is_some()
            || self.location_street_direction.is_some()
            || self.location_street_name.is_some()
            || self.location_street_designation.is_some()
            || self.unit_number.is_some()
    }

    /// Per-field view for reporting.
    pub fn resolutions(&self) -> Vec<FieldResolution> {
        AddressField::ALL
            .iter()
            .map(|&field| FieldResolution {
                field: field.name(),
                mode: field.resolution_mode(),
                columns: self
                    .columns_for(field)
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_parts_need_all_three_groups() {
        let partial = AddressColumns::resolve(&["STREET_DIR", "ST_NAME"]);
        assert!(!partial.has_legacy_street_parts());

        let full = AddressColumns::resolve(&["STREET_DIR", "ST_NAME", "STREET_TYPE"]);
        assert!(full.has_legacy_street_parts());
    }

    #[test]
    fn one_column_can_feed_both_paths() {
        let resolved = AddressColumns::resolve(&["STREETDIRECTION"]);
        assert_eq!(resolved.street_direction, vec!["STREETDIRECTION"]);
        assert_eq!(
            resolved.location_street_direction.as_deref(),
            Some("STREETDIRECTION")
        );
    }

    #[test]
    fn resolutions_cover_every_field() {
        let resolved = AddressColumns::resolve(&["ADDR1"]);
        let resolutions = resolved.resolutions();
        assert_eq!(resolutions.len(), AddressField::ALL.len());
        assert_eq!(resolutions[0].field, "BILLINGADDRESS1");
        assert_eq!(resolutions[0].columns, vec!["ADDR1"]);
        assert!(resolutions[1].columns.is_empty());
    }
}
