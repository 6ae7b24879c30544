//! Address grammars.
//!
//! `street` holds the shared English street grammar; each locale module
//! combines it with its own region, postal code and country rules and exposes
//! a `profile()` constructor.

pub mod ca;
pub mod street;
pub mod us;

use crate::error::Result;
use crate::locale::LocaleProfile;

/// Profiles registered automatically the first time the registry is used.
pub(crate) fn builtin_profiles() -> Vec<Result<LocaleProfile>> {
    vec![us::profile(), ca::profile()]
}
