use crate::field::*;
use crate::{AddressMatch, find_addresses, find_streets};

fn addresses(text: &str) -> Vec<AddressMatch> {
    find_addresses(text, "CA").unwrap().collect()
}

#[test]
fn ottawa_address() {
    let found = addresses("1500 Bank Street, Ottawa, ON K1H 7Z1, Canada");
    assert_eq!(found.len(), 1);
    let a = &found[0];
    assert_eq!(a.locale, "CA");
    assert_eq!(a.value(STREET_TYPE), Some("Street"));
    assert_eq!(a.get(CITY), Some("Ottawa"));
    assert_eq!(a.get(REGION1), Some("ON"));
    assert_eq!(a.get(POSTAL_CODE), Some("K1H 7Z1"));
    assert_eq!(a.get(COUNTRY), Some("Canada"));
}

#[test]
fn full_province_name_and_compact_postal_code() {
    let found = addresses("Mail it to 24 Sussex Crescent, Halifax, Nova Scotia B3H2Y9 today");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].value(STREET_TYPE), Some("Crescent"));
    assert_eq!(found[0].get(REGION1), Some("Nova Scotia"));
    assert_eq!(found[0].get(POSTAL_CODE), Some("B3H2Y9"));
}

#[test]
fn canadian_street_types() {
    for text in ["12 Maple Cres", "12 Maple Place", "12 Maple Terr", "12 Maple Terrace"] {
        let found: Vec<_> = find_streets(text, "CA").unwrap().collect();
        assert_eq!(found.len(), 1, "{}", text);
    }
    // Not part of the US table.
    assert_eq!(find_streets("12 Maple Terrace", "US").unwrap().count(), 0);
}

#[test]
fn us_states_are_not_provinces() {
    let found = addresses("1022 Hoover Boulevard, Springfield, IL 62704");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].text, "1022 Hoover Boulevard, Springfield");
    assert_eq!(found[0].get(REGION1), None);
    assert_eq!(found[0].get(POSTAL_CODE), None);
}
