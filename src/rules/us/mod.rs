//! United States address profile.

use crate::engine::BucketMask;
use crate::error::Result;
use crate::field::*;
use crate::grammar::{CharSet, Pattern, alt, any_word, boundary, class, label, literal, opt, word};
use crate::locale::LocaleProfile;
use crate::rules::street::rules::*;
use crate::rules::street::tokens::{NUMBER_WORDS, US_STREET_TYPES};

/// The 50 states and DC, then the inhabited territories.
pub const REGION_CODES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN", "IA", "KS", "KY", "LA",
    "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH", "OK", "OR",
    "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT", "VA", "WA", "WV", "WI", "WY", // territories
    "AS", "GU", "MP", "PR", "VI",
];

pub const REGION_NAMES: &[&str] = &[
    "Alabama",
    "Alaska",
    "Arizona",
    "Arkansas",
    "California",
    "Colorado",
    "Connecticut",
    "Delaware",
    "District of Columbia",
    "Florida",
    "Georgia",
    "Hawaii",
    "Idaho",
    "Illinois",
    "Indiana",
    "Iowa",
    "Kansas",
    "Kentucky",
    "Louisiana",
    "Maine",
    "Maryland",
    "Massachusetts",
    "Michigan",
    "Minnesota",
    "Mississippi",
    "Missouri",
    "Montana",
    "Nebraska",
    "Nevada",
    "New Hampshire",
    "New Jersey",
    "New Mexico",
    "New York",
    "North Carolina",
    "North Dakota",
    "Ohio",
    "Oklahoma",
    "Oregon",
    "Pennsylvania",
    "Rhode Island",
    "South Carolina",
    "South Dakota",
    "Tennessee",
    "Texas",
    "Utah",
    "Vermont",
    "Virginia",
    "Washington",
    "West Virginia",
    "Wisconsin",
    "Wyoming",
    // territories
    "American Samoa",
    "Guam",
    "Northern Mariana Islands",
    "Puerto Rico",
    "Virgin Islands",
];

/// Codes in exact upper or exact lower case ("IL", "il", never "Il"), then
/// full names in any case. Either form must stand as a whole word, so the
/// tail of a city ("Austin", "Peoria") is never read as a code.
pub fn region_rule(codes: &[&str], names: &[&str]) -> Pattern {
    let upper = codes.iter().map(|c| literal(c));
    let lower = codes.iter().map(|c| literal(&c.to_ascii_lowercase()));
    label(REGION1, seq![boundary(), alt![alt(upper.chain(lower)), any_word(names)], boundary()])
}

/// `62704`, `62704-1234`.
pub fn postal_code() -> Pattern {
    let digits = |n| class(CharSet::digits(), n, n);
    label(POSTAL_CODE, seq![digits(5), opt(seq![literal("-"), digits(4)])])
}

/// `USA`, `U.S.A.`, `usa`, `United States`.
///
/// "United States of America" matches only as far as "United States".
pub fn country() -> Pattern {
    let dot = || opt(literal("."));
    label(
        COUNTRY,
        alt![seq![word("u"), dot(), word("s"), dot(), word("a"), dot()], word("united states")],
    )
}

/// Build the US profile.
pub fn profile() -> Result<LocaleProfile> {
    profile! {
        id: "US",
        rules: [
            STREET_NUMBER => street_number(),
            STREET_NAME => street_name(STREET_NAME_MAX),
            STREET_TYPE => street_type(US_STREET_TYPES),
            ROUTE_ID => route_id(),
            POST_DIRECTION => post_direction(),
            FLOOR => floor(),
            BUILDING_ID => building(),
            OCCUPANCY => occupancy(),
            PO_BOX => po_box(),
            CITY => city(20),
            REGION1 => region_rule(REGION_CODES, REGION_NAMES),
            POSTAL_CODE => postal_code(),
            COUNTRY => country(),
            DIVIDER => divider(),
        ],
        phrases: NUMBER_WORDS,
        gate: BucketMask::HAS_DIGITS,
    }
}
