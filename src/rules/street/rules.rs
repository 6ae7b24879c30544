//! Labeled street-level rules.
//!
//! Each function returns a rule ready to be stored in a profile under the
//! field name it is labeled with. Rules that end in a keyword carry their own
//! trailing space where the address format demands one (a street number is
//! always followed by a space, for instance); the loose `,? ?` separators
//! between parts are added by the assembler.

use super::tokens::{self, StreetTypeFamily};
use crate::field::*;
use crate::grammar::{CharSet, Pattern, alt, boundary, class, label, literal, one_of, opt, repeat, word};

/// Longest street name accepted by default. The longest US street name,
/// "Northeast Kentucky Industrial", is 29 characters.
pub const STREET_NAME_MAX: u32 = 31;

/// Further number words allowed after the first one in a word-form number.
const MAX_EXTRA_NUMBER_WORDS: u32 = 4;

/// `street_number`: "1022 ", "85-1190 ", "85 1190 ", "One thousand twenty two ".
///
/// Word form is tried first. The trailing space is part of the capture.
pub fn street_number() -> Pattern {
    let word_form = seq![
        tokens::number_word(),
        tokens::space(),
        repeat(
            seq![opt(seq![tokens::and(), tokens::space()]), tokens::number_word(), tokens::space()],
            0,
            MAX_EXTRA_NUMBER_WORDS,
        ),
    ];
    let numeric = seq![
        tokens::digits(1, 5),
        opt(seq![opt(tokens::space()), opt(literal("-")), opt(tokens::space()), tokens::digits(1, 5)]),
        tokens::space(),
    ];
    label(STREET_NUMBER, seq![boundary(), alt![word_form, numeric]])
}

/// `street_name`: 1 to `max` characters of `[A-Za-z0-9 .]`.
pub fn street_name(max: u32) -> Pattern {
    label(STREET_NAME, class(CharSet::alphanumeric().chars(" ."), 1, max))
}

/// `street_type`: the families in order, each keyword followed by a word
/// boundary and an optional `.`, space or comma.
pub fn street_type<'a>(families: impl IntoIterator<Item = &'a StreetTypeFamily>) -> Pattern {
    let families = families
        .into_iter()
        .map(|f| seq![tokens::street_type_keyword(f), boundary(), opt(one_of(CharSet::new().chars(". ,")))]);
    label(STREET_TYPE, alt(families))
}

/// `route_id`: "(Route 66)", ", Route 9A,".
pub fn route_id() -> Pattern {
    label(
        ROUTE_ID,
        seq![
            class(CharSet::new().chars("( ,"), 0, 3),
            word("route"),
            tokens::space(),
            class(CharSet::alphanumeric(), 1, 8),
            class(CharSet::new().chars(") ,"), 0, 3),
        ],
    )
}

/// `post_direction`: "North ", "NW ", "S.".
pub fn post_direction() -> Pattern {
    label(
        POST_DIRECTION,
        alt![
            seq![tokens::compass_word(), tokens::space()],
            seq![tokens::intercardinal_code(), tokens::space()],
            seq![tokens::cardinal_code(), one_of(CharSet::new().chars(". "))],
        ],
    )
}

/// `floor`: "5th Floor ", "Floor 12 ".
pub fn floor() -> Pattern {
    let level = seq![tokens::digits(1, 3), tokens::letters(0, 2)];
    label(
        FLOOR,
        alt![
            seq![level.clone(), opt(literal(".")), tokens::space(), tokens::floor(), tokens::space()],
            seq![tokens::floor(), tokens::space(), level, tokens::space()],
        ],
    )
}

/// `building_id`: "Building 4A", "Bldg 12", "Bldg ".
pub fn building() -> Pattern {
    label(
        BUILDING_ID,
        seq![tokens::building(), tokens::space(), tokens::digits(0, 2), tokens::letters(0, 1)],
    )
}

/// `occupancy`: "Suite 5B", "Apt. 12", "Rm 3", "#12A", with an optional
/// trailing space.
pub fn occupancy() -> Pattern {
    let dotted = |abbr: &str| seq![word(abbr), opt(literal(".")), tokens::space()];
    let unit = alt![
        seq![tokens::suite(), tokens::space()],
        dotted("ste"),
        dotted("apt"),
        seq![tokens::apartment(), tokens::space()],
        seq![tokens::room(), tokens::space()],
        dotted("rm"),
    ];
    let unit_id = class(CharSet::letters().chars("#&-").range('0', '9'), 1, 7);
    let hash_form = seq![literal("#"), tokens::digits(0, 3), tokens::letters(1, 1)];

    label(OCCUPANCY, seq![alt![seq![unit, opt(unit_id)], hash_form], opt(tokens::space())])
}

/// `po_box`: "P.O. Box 1234", "PO Box 9", "p o box 12".
pub fn po_box() -> Pattern {
    label(
        PO_BOX,
        seq![
            word("p"),
            opt(literal(".")),
            opt(tokens::space()),
            word("o"),
            opt(literal(".")),
            tokens::space(),
            tokens::po_box_keyword(),
            tokens::space(),
            tokens::digits(1, 6),
        ],
    )
}

/// `city`: a letter, then 2 to `max_tail` of letters, spaces, `-`, `'`, `.`.
///
/// ASCII letters only; accented names stop at the first non-ASCII letter.
pub fn city(max_tail: u32) -> Pattern {
    label(
        CITY,
        seq![tokens::letters(1, 1), class(CharSet::letters().chars(" -'."), 2, max_tail)],
    )
}

/// Separator between address parts: up to two commas or spaces.
pub fn divider() -> Pattern {
    class(CharSet::new().chars(", "), 0, 2)
}
