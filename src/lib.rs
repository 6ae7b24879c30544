//! Rule-based postal address extraction.
//!
//! Grammars are immutable [`Pattern`](grammar::Pattern) trees composed from
//! small combinators, grouped per locale into a [`LocaleProfile`], compiled
//! once, and run over free text to yield non-overlapping [`AddressMatch`]
//! records with labeled fields.
//!
//! ```
//! use addrscan::{field, find_addresses};
//!
//! let text = "Visit us at 1022 Hoover Boulevard, Springfield, IL 62704, USA.";
//! let found: Vec<_> = find_addresses(text, "US").unwrap().collect();
//!
//! assert_eq!(found.len(), 1);
//! assert_eq!(found[0].value(field::STREET_NUMBER), Some("1022"));
//! assert_eq!(found[0].get(field::REGION1), Some("IL"));
//! ```
//!
//! Built-in locales: `US` and `CA`. More can be added at runtime with
//! [`register_profile`].

extern crate self as addrscan;

#[macro_use]
mod macros;
mod api;
mod engine;
mod error;
pub mod field;
pub mod grammar;
mod locale;
pub mod rules;

pub use api::{
    AddressMatch, Field, Options, ScanDetails, find_addresses, find_addresses_verbose_with, find_addresses_with,
    find_streets, find_streets_with,
};
pub use engine::{
    AddressMatches, BucketMask, CompileOptions, CompiledMatcher, MAX_DEPTH, MAX_REPEAT, ScanMetrics, TriggerInfo,
    build_address_pattern, build_street_pattern, get_profile, register_profile, register_profile_with,
    registered_locales,
};
pub use error::{AddressError, ProfileError, Result};
pub use locale::{LocaleProfile, ProfileBuilder};
