//! Full-address assembly.
//!
//! Profiles store rules one by one; this module decides how they line up.
//!
//! ```text
//! full_street  = street_number street_name? ,?␣? [␣,] street_type route_id? ,?␣?
//!                post_direction? ,?␣? floor? ,?␣? building_id? ,?␣?
//!                occupancy? ,?␣? po_box?
//!
//! full_address = full_street DIV city (DIV region1)? (DIV postal_code)? (DIV country)?
//! ```
//!
//! `DIV` is the profile's `divider` rule, or `[, ]{0,2}` when it has none.
//! Everything after the city is optional. Rules a profile does not define are left out,
//! except the three every address needs: `street_number`, `street_type` and
//! `city`.

use crate::error::{ProfileError, Result};
use crate::field::*;
use crate::grammar::{CharSet, Pattern, class, label, literal, one_of, opt, seq};
use crate::locale::LocaleProfile;

fn required<'p>(profile: &'p LocaleProfile, name: &str) -> Result<&'p Pattern> {
    profile.rule(name).ok_or_else(|| ProfileError::MissingRule(name.to_string()).in_locale(profile.id()))
}

/// `,? ?`, the loose separator that trails each street part.
fn trailing_separator() -> Pattern {
    seq(vec![opt(literal(",")), opt(literal(" "))])
}

fn default_divider() -> Pattern {
    class(CharSet::new().chars(", "), 0, 2)
}

/// Build the `full_street` pattern from `profile`'s street rules.
pub fn build_street_pattern(profile: &LocaleProfile) -> Result<Pattern> {
    let number = required(profile, STREET_NUMBER)?;
    let street_type = required(profile, STREET_TYPE)?;

    let mut parts = vec![number.clone()];
    if let Some(name) = profile.rule(STREET_NAME) {
        parts.push(opt(name.clone()));
    }
    parts.push(trailing_separator());
    parts.push(one_of(CharSet::new().chars(" ,")));
    parts.push(street_type.clone());
    if let Some(route) = profile.rule(ROUTE_ID) {
        parts.push(opt(route.clone()));
    }
    parts.push(trailing_separator());

    for name in [POST_DIRECTION, FLOOR, BUILDING_ID, OCCUPANCY] {
        if let Some(rule) = profile.rule(name) {
            parts.push(opt(rule.clone()));
            parts.push(trailing_separator());
        }
    }
    if let Some(po_box) = profile.rule(PO_BOX) {
        parts.push(opt(po_box.clone()));
    }

    Ok(label(FULL_STREET, seq(parts)))
}

/// Build the top-level `full_address` pattern for `profile`.
pub fn build_address_pattern(profile: &LocaleProfile) -> Result<Pattern> {
    let street = build_street_pattern(profile)?;
    let city = required(profile, CITY)?;
    let divider = profile.rule(DIVIDER).cloned().unwrap_or_else(default_divider);

    let mut parts = vec![street, divider.clone(), city.clone()];
    if let Some(region) = profile.rule(REGION1) {
        parts.push(opt(seq(vec![divider.clone(), region.clone()])));
    }
    if let Some(postal) = profile.rule(POSTAL_CODE) {
        parts.push(opt(seq(vec![divider.clone(), postal.clone()])));
    }
    if let Some(country) = profile.rule(COUNTRY) {
        parts.push(opt(seq(vec![divider, country.clone()])));
    }

    Ok(label(FULL_ADDRESS, seq(parts)))
}
