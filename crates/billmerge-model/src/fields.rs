//! Canonical field names and the synonym lists used to recognize them.
//!
//! Source exports disagree on column naming. Every address component the
//! reconciler needs is described here by an [`AddressField`]: its canonical
//! name, the ordered list of raw column names believed to carry it, and the
//! [`ResolutionMode`] that decides whether several raw columns may feed it.

use std::fmt;

use serde::{Deserialize, Serialize};

pub const CUSTOMER_NUMBER: &str = "CUSTOMERNUMBER";
pub const CUSTOMER_FRIENDLY_NAME: &str = "CUSTOMERFRIENDLYNAME";
pub const BILLING_ADDRESS1: &str = "BILLINGADDRESS1";
pub const BILLING_ADDRESS2: &str = "BILLINGADDRESS2";
pub const LOCATION_NUMBER: &str = "LOCATIONNUMBER";

/// Output schema, in emission order.
pub const EXPECTED_COLUMNS: [&str; 14] = [
    CUSTOMER_NUMBER,
    CUSTOMER_FRIENDLY_NAME,
    BILLING_ADDRESS1,
    BILLING_ADDRESS2,
    "BILLINGCITY",
    "BILLINGSTATE",
    "BILLINGZIP",
    LOCATION_NUMBER,
    "CUSTOMERON",
    "PREVIOUSLOCATION",
    "CUSTOMERPREVIOUSOFF",
    "CUSTOMERIDINFO",
    "CUSTOMERIDOWNER",
    "CUSTOMERREFUSEEXEMPT",
];

/// How raw columns are resolved for a canonical field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionMode {
    /// Every column equal to, or containing, a synonym (case-insensitive).
    MatchAll,
    /// The first synonym, in priority order, present verbatim in the table.
    MatchFirst,
}

impl ResolutionMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MatchAll => "match_all",
            Self::MatchFirst => "match_first",
        }
    }
}

impl fmt::Display for ResolutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Address-related canonical fields.
///
/// The legacy street fields (`StreetDirection`, `StreetName`,
/// `StreetDesignation`) and the location street fields deliberately share
/// synonyms such as `STREETDIRECTION`: a raw column can feed both address
/// paths, and the synthesizer settles the overlap by preferring the extended
/// result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AddressField {
    BillingAddress1,
    BillingAddress2,
    StreetDirection,
    StreetName,
    StreetDesignation,
    StreetNumber,
    LocationStreetDirection,
    LocationStreetName,
    LocationStreetDesignation,
    UnitNumber,
}

impl AddressField {
    pub const ALL: [AddressField; 10] = [
        Self::BillingAddress1,
        Self::BillingAddress2,
        Self::StreetDirection,
        Self::StreetName,
        Self::StreetDesignation,
        Self::StreetNumber,
        Self::LocationStreetDirection,
        Self::LocationStreetName,
        Self::LocationStreetDesignation,
        Self::UnitNumber,
    ];

    /// Canonical column name.
    pub fn name(self) -> &'static str {
        match self {
            Self::BillingAddress1 => BILLING_ADDRESS1,
            Self::BillingAddress2 => BILLING_ADDRESS2,
            Self::StreetDirection => "STREETDIRECTION",
            Self::StreetName => "STREETNAME",
            Self::StreetDesignation => "STREETDESIGNATION",
            Self::StreetNumber => "STREETNUMBER",
            Self::LocationStreetDirection => "LOCATIONSTREETDIRECTION",
            Self::LocationStreetName => "LOCATIONSTREETNAME",
            Self::LocationStreetDesignation => "LOCATIONSTREETDESIGNATION",
            Self::UnitNumber => "UNITNUMBER",
        }
    }

    /// Known raw column names for this field, highest priority first.
    pub fn synonyms(self) -> &'static [&'static str] {
        match self {
            Self::BillingAddress1 => &[
                "BILLINGADDRESS1",
                "BILLING_ADDR1",
                "ADDR1",
                "ADDRESS1",
                "BILLINGADDRESSLINE1",
                "BILLINGADDRESS_1",
            ],
            Self::BillingAddress2 => &[
                "BILLINGADDRESS2",
                "BILLING_ADDR2",
                "ADDR2",
                "ADDRESS2",
                "BILLINGADDRESSLINE2",
                "BILLINGADDRESS_2",
            ],
            Self::StreetDirection => &["STREETDIRECTION", "STREET_DIR", "STDIR", "STREET_DIRECTION"],
            Self::StreetName => &["STREETNAME", "ST_NAME", "STREET_NM"],
            Self::StreetDesignation => &[
                "STREETDESIGNATION",
                "STREET_DESIG",
                "STDESIG",
                "STREET_TYPE",
                "STREET_SUFFIX",
            ],
            Self::StreetNumber => &["LOCATIONSTREETNUMBER", "STREETNUMBER", "STNUM", "LOCSTNUM"],
            Self::LocationStreetDirection => &[
                "LOCATIONSTREETDIRECTION",
                "STREETDIRECTION",
                "STDIR",
                "LOCSTDIR",
            ],
            Self::LocationStreetName => &["LOCATIONSTREETNAME", "STREETNAME", "STNAME", "LOCSTNAME"],
            Self::LocationStreetDesignation => &[
                "LOCATIONSTREETDESIGNATION",
                "STREETDESIGNATION",
                "STDESIG",
                "STREETTYPE",
                "STREET_SUFFIX",
            ],
            Self::UnitNumber => &[
                "LOCATIONUNITNUMBER",
                "UNITNUMBER",
                "APTNUMBER",
                "UNITNO",
                "APTNO",
            ],
        }
    }

    pub fn resolution_mode(self) -> ResolutionMode {
        match self {
            Self::BillingAddress1
            | Self::BillingAddress2
            | Self::StreetDirection
            | Self::StreetName
            | Self::StreetDesignation => ResolutionMode::MatchAll,
            Self::StreetNumber
            | Self::LocationStreetDirection
            | Self::LocationStreetName
            | Self::LocationStreetDesignation
            | Self::UnitNumber => ResolutionMode::MatchFirst,
        }
    }

    /// Short human description used by the `fields` listing.
    pub fn description(self) -> &'static str {
        match self {
            Self::BillingAddress1 => "Primary billing address line",
            Self::BillingAddress2 => "Secondary billing address line",
            Self::StreetDirection => "Street direction (legacy exports)",
            Self::StreetName => "Street name (legacy exports)",
            Self::StreetDesignation => "Street designation (legacy exports)",
            Self::StreetNumber => "Service location street number",
            Self::LocationStreetDirection => "Service location street direction",
            Self::LocationStreetName => "Service location street name",
            Self::LocationStreetDesignation => "Service location street designation",
            Self::UnitNumber => "Service location unit or apartment number",
        }
    }
}

impl fmt::Display for AddressField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns true if `column` is part of the output schema.
pub fn is_expected_column(column: &str) -> bool {
    EXPECTED_COLUMNS.contains(&column)
}
