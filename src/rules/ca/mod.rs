//! Canadian address profile (English forms).
//!
//! Shares the street grammar with the US profile and adds a few street types
//! common in Canada.

use crate::engine::BucketMask;
use crate::error::Result;
use crate::field::*;
use crate::grammar::{CharSet, Pattern, class, label, opt, word};
use crate::locale::LocaleProfile;
use crate::rules::street::rules::*;
use crate::rules::street::tokens::{NUMBER_WORDS, StreetTypeFamily, US_STREET_TYPES};
use crate::rules::us::region_rule;

pub const EXTRA_STREET_TYPES: &[StreetTypeFamily] = &[
    StreetTypeFamily { name: "Crescent", abbreviations: &["Cres"] },
    StreetTypeFamily { name: "Place", abbreviations: &["Pl"] },
    StreetTypeFamily { name: "Terrace", abbreviations: &["Terr"] },
];

pub const PROVINCE_CODES: &[&str] = &["AB", "BC", "MB", "NB", "NL", "NS", "NT", "NU", "ON", "PE", "QC", "SK", "YT"];

pub const PROVINCE_NAMES: &[&str] = &[
    "Alberta",
    "British Columbia",
    "Manitoba",
    "New Brunswick",
    "Newfoundland and Labrador",
    "Newfoundland",
    "Nova Scotia",
    "Northwest Territories",
    "Nunavut",
    "Ontario",
    "Prince Edward Island",
    "Quebec",
    "Saskatchewan",
    "Yukon",
];

/// `K1A 0B1`, `K1A0B1`.
pub fn postal_code() -> Pattern {
    let letter = || class(CharSet::letters(), 1, 1);
    let digit = || class(CharSet::digits(), 1, 1);
    label(
        POSTAL_CODE,
        seq![letter(), digit(), letter(), opt(class(CharSet::new().chars(" "), 1, 1)), digit(), letter(), digit()],
    )
}

pub fn country() -> Pattern {
    label(COUNTRY, word("canada"))
}

/// Build the CA profile.
pub fn profile() -> Result<LocaleProfile> {
    profile! {
        id: "CA",
        rules: [
            STREET_NUMBER => street_number(),
            STREET_NAME => street_name(STREET_NAME_MAX),
            STREET_TYPE => street_type(US_STREET_TYPES.iter().chain(EXTRA_STREET_TYPES)),
            ROUTE_ID => route_id(),
            POST_DIRECTION => post_direction(),
            FLOOR => floor(),
            BUILDING_ID => building(),
            OCCUPANCY => occupancy(),
            PO_BOX => po_box(),
            CITY => city(20),
            REGION1 => region_rule(PROVINCE_CODES, PROVINCE_NAMES),
            POSTAL_CODE => postal_code(),
            COUNTRY => country(),
            DIVIDER => divider(),
        ],
        phrases: NUMBER_WORDS,
        gate: BucketMask::HAS_DIGITS,
    }
}

#[cfg(test)]
mod tests;
