//! Atomic tokens shared by the street rules.
//!
//! Every constructor returns a `Pattern` with no trailing separator; callers
//! decide what may follow. Word tokens are case-insensitive through
//! `grammar::word`, exact-case tokens (compass abbreviations) through
//! `grammar::literal`.

use crate::grammar::{CharSet, Pattern, alt, any_literal, any_word, class, literal, word};

/// Number words zero..nineteen.
pub const ZERO_TO_NINETEEN: &[&str] = &[
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

/// Tens, ten..ninety. "fourty" is a common misspelling seen in real text.
pub const TENS: &[&str] = &["ten", "twenty", "thirty", "forty", "fourty", "fifty", "sixty", "seventy", "eighty", "ninety"];

/// Every word that can appear in a word-form street number, except "and".
/// Used as trigger phrases by profiles that accept word-form numbers.
pub const NUMBER_WORDS: &[&str] = &[
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
    "twenty",
    "thirty",
    "forty",
    "fourty",
    "fifty",
    "sixty",
    "seventy",
    "eighty",
    "ninety",
    "hundred",
    "thousand",
];

pub fn zero_to_nineteen() -> Pattern {
    any_word(ZERO_TO_NINETEEN)
}

pub fn tens() -> Pattern {
    any_word(TENS)
}

pub fn hundred() -> Pattern {
    word("hundred")
}

pub fn thousand() -> Pattern {
    word("thousand")
}

pub fn and() -> Pattern {
    word("and")
}

/// Any single number word (not "and").
pub fn number_word() -> Pattern {
    alt(vec![thousand(), hundred(), zero_to_nineteen(), tens()])
}

pub fn digits(min: u32, max: u32) -> Pattern {
    class(CharSet::digits(), min, max)
}

pub fn letters(min: u32, max: u32) -> Pattern {
    class(CharSet::letters(), min, max)
}

pub fn space() -> Pattern {
    literal(" ")
}

// --- Directions --------------------------------------------------------------

pub const COMPASS_WORDS: &[&str] = &["north", "south", "east", "west"];
pub const INTERCARDINAL_CODES: &[&str] = &["NW", "NE", "SW", "SE"];
pub const CARDINAL_CODES: &[&str] = &["N", "S", "E", "W"];

/// `North`, `south`, `EAST`, ...
pub fn compass_word() -> Pattern {
    any_word(COMPASS_WORDS)
}

/// `NW|NE|SW|SE`, exact case.
pub fn intercardinal_code() -> Pattern {
    any_literal(INTERCARDINAL_CODES)
}

/// `N|S|E|W`, exact case.
pub fn cardinal_code() -> Pattern {
    any_literal(CARDINAL_CODES)
}

// --- Street types ------------------------------------------------------------

/// A street type: the full word followed by its accepted abbreviations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreetTypeFamily {
    pub name: &'static str,
    pub abbreviations: &'static [&'static str],
}

impl StreetTypeFamily {
    const fn new(name: &'static str, abbreviations: &'static [&'static str]) -> Self {
        StreetTypeFamily { name, abbreviations }
    }

    /// Full word first, then abbreviations.
    pub fn keywords(&self) -> impl Iterator<Item = &'static str> {
        std::iter::once(self.name).chain(self.abbreviations.iter().copied())
    }
}

/// Street types in match order. "Parkway" must precede "Park".
pub const US_STREET_TYPES: &[StreetTypeFamily] = &[
    StreetTypeFamily::new("Street", &["St"]),
    StreetTypeFamily::new("Boulevard", &["Blvd"]),
    StreetTypeFamily::new("Highway", &["Hwy"]),
    StreetTypeFamily::new("Broadway", &[]),
    StreetTypeFamily::new("Freeway", &[]),
    StreetTypeFamily::new("Causeway", &["Cswy"]),
    StreetTypeFamily::new("Expressway", &[]),
    StreetTypeFamily::new("Way", &[]),
    StreetTypeFamily::new("Walk", &[]),
    StreetTypeFamily::new("Lane", &["Ln"]),
    StreetTypeFamily::new("Road", &["Rd"]),
    StreetTypeFamily::new("Avenue", &["Ave"]),
    StreetTypeFamily::new("Circle", &["Cir"]),
    StreetTypeFamily::new("Cove", &["Cv"]),
    StreetTypeFamily::new("Drive", &["Dr"]),
    StreetTypeFamily::new("Parkway", &["Pkwy"]),
    StreetTypeFamily::new("Park", &[]),
    StreetTypeFamily::new("Court", &["Ct"]),
    StreetTypeFamily::new("Square", &["Sq"]),
    StreetTypeFamily::new("Loop", &["Lp"]),
];

/// Case-insensitive alternation over one family's keywords.
pub fn street_type_keyword(family: &StreetTypeFamily) -> Pattern {
    alt(family.keywords().map(word))
}

// --- Units -------------------------------------------------------------------

pub fn suite() -> Pattern {
    word("suite")
}

pub fn apartment() -> Pattern {
    word("apartment")
}

pub fn room() -> Pattern {
    word("room")
}

pub fn floor() -> Pattern {
    word("floor")
}

/// `Building` or `Bldg`.
pub fn building() -> Pattern {
    alt(vec![word("building"), word("bldg")])
}

pub fn po_box_keyword() -> Pattern {
    word("box")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::compile::{CompileOptions, compile};

    fn whole(p: Pattern) -> regex::Regex {
        compile(&seq![crate::grammar::boundary(), p, crate::grammar::boundary()], &CompileOptions::default()).unwrap()
    }

    #[test]
    fn number_words_cover_both_lists() {
        for w in ZERO_TO_NINETEEN.iter().chain(TENS) {
            assert!(NUMBER_WORDS.contains(w), "{} missing", w);
        }
        let re = whole(number_word());
        for w in ["One", "THOUSAND", "fourty", "Nineteen", "hundred"] {
            assert!(re.is_match(w), "{}", w);
        }
        assert!(!re.is_match("and"));
    }

    #[test]
    fn direction_codes_are_exact_case() {
        let re = whole(alt![intercardinal_code(), cardinal_code()]);
        assert!(re.is_match("NW"));
        assert!(re.is_match("E"));
        assert!(!re.is_match("nw"));
        assert!(!re.is_match("e"));

        let re = whole(compass_word());
        assert!(re.is_match("NORTH"));
        assert!(re.is_match("west"));
    }

    #[test]
    fn parkway_is_listed_before_park() {
        let names: Vec<_> = US_STREET_TYPES.iter().map(|f| f.name).collect();
        let parkway = names.iter().position(|n| *n == "Parkway").unwrap();
        let park = names.iter().position(|n| *n == "Park").unwrap();
        assert!(parkway < park);
        assert_eq!(US_STREET_TYPES[0].keywords().collect::<Vec<_>>(), vec!["Street", "St"]);
    }

    #[test]
    fn units_are_case_insensitive() {
        assert!(whole(suite()).is_match("SUITE"));
        assert!(whole(building()).is_match("bldg"));
        assert!(whole(floor()).is_match("Floor"));
        assert!(whole(apartment()).is_match("Apartment"));
        assert!(whole(room()).is_match("rOOm"));
    }
}
