//! Grammar compilation and matching engine.
//!
//! This module is the *engine side* of the crate: everything between a frozen
//! [`LocaleProfile`](crate::LocaleProfile) and the `AddressMatch` records the
//! public API hands out. Rules themselves (what an address looks like) live in
//! `src/rules/**`; this module only knows how to combine, check, compile and run
//! them.
//!
//! ## How the parts work together
//!
//! ```text
//! LocaleProfile (rule table)
//!        │
//!        │  assemble.rs     build_street_pattern / build_address_pattern
//!        v
//!   Pattern (full_address)
//!        │
//!        │  compile.rs      validate (bounds, labels, depth) + lower to regex
//!        v
//!   CompiledMatcher (matcher.rs) ◀── cached per locale (registry.rs)
//!        │
//! input ─┼─ TriggerInfo::scan (trigger.rs): skip inputs that cannot match
//!        v
//!   AddressMatches iterator: leftmost-first, non-overlapping captures
//!        │
//!        v
//!   AddressMatch { span, fields }
//! ```
//!
//! ## Responsibilities by module
//!
//! - `assemble.rs`: stitches profile rules into the street and full-address
//!   patterns, with the profile's divider between parts.
//! - `compile.rs`: structural validation and lowering of a `Pattern` into
//!   `regex` syntax; builds the `Regex` under configurable size limits.
//! - `matcher.rs`: `CompiledMatcher` and the lazy match iterator.
//! - `registry.rs`: process-wide table of registered locales and their
//!   compiled matchers.
//! - `trigger.rs`: cheap input pre-classification (`BucketMask` + phrases).
//! - `metrics.rs`: timing data for verbose scans.
//!
//! ## Matching guarantees
//!
//! Compiled patterns run on the `regex` crate, whose search time is linear in
//! the input length regardless of the grammar, so there is no backtracking
//! blowup to defend against at match time. Grammar size is bounded at compile
//! time instead (`MAX_REPEAT`, `MAX_DEPTH`, `CompileOptions::size_limit`).
//!
//! ## Debugging
//!
//! Everything here logs through the `log` facade under the `addrscan::*`
//! targets. With the CLI, run with `RUST_LOG=addrscan=debug` (or `trace` to
//! see the lowered regex sources).

#[path = "engine/assemble.rs"]
pub(crate) mod assemble;
#[path = "engine/compile.rs"]
pub(crate) mod compile;
#[path = "engine/matcher.rs"]
mod matcher;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/registry.rs"]
mod registry;
#[path = "engine/trigger.rs"]
mod trigger;

pub use assemble::{build_address_pattern, build_street_pattern};
pub use compile::{CompileOptions, MAX_DEPTH, MAX_REPEAT};
pub use matcher::{AddressMatches, CompiledMatcher};
pub use metrics::ScanMetrics;
pub use registry::{get_profile, register_profile, register_profile_with, registered_locales};
pub(crate) use registry::{address_matcher, street_matcher};
pub use trigger::{BucketMask, TriggerInfo};
