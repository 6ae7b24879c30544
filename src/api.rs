use std::time::Instant;

use crate::engine::{self, AddressMatches, ScanMetrics};
use crate::error::Result;

/// Options that affect a single scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Treat `\r`, `\n` and `\t` as spaces while matching, so addresses split
    /// across lines are still found. Offsets and reported text always refer
    /// to the original input.
    pub fold_line_breaks: bool,
    /// Inputs longer than this are refused with
    /// [`AddressError::MatchAborted`](crate::AddressError::MatchAborted).
    pub max_input_bytes: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self { fold_line_breaks: true, max_input_bytes: 16 * (1 << 20) }
    }
}

/// One labeled part of a match.
///
/// `start`/`end` are byte offsets into the original input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub start: usize,
    pub end: usize,
    /// Raw captured text, including any trailing separator the grammar
    /// consumed (e.g. `"1022 "` for a street number).
    pub text: String,
}

/// An address (or street) found in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressMatch {
    /// Id of the profile that produced this match.
    pub locale: String,
    /// Start byte index of the match.
    pub start: usize,
    /// End byte index of the match (exclusive).
    pub end: usize,
    /// Slice of the original input that matched.
    pub text: String,
    /// Every labeled part that matched non-empty text, in pattern order.
    pub fields: Vec<Field>,
}

impl AddressMatch {
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Raw text of field `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.field(name).map(|f| f.text.as_str())
    }

    /// Text of field `name` without surrounding whitespace and commas.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.get(name).map(|t| t.trim_matches(|c: char| c.is_whitespace() || c == ','))
    }
}

/// Result from [`find_addresses_verbose_with`].
#[derive(Debug, Clone)]
pub struct ScanDetails {
    /// The scanned input text.
    pub text: String,
    /// Locale id the scan ran with (normalized).
    pub locale: String,
    pub results: Vec<AddressMatch>,
    pub metrics: ScanMetrics,
    /// Fields the compiled grammar can report.
    pub fields: Vec<String>,
    /// Lowered regex source of the grammar.
    pub source: String,
}

/// Find every address in `text` using the profile registered as `locale`.
///
/// # Example
/// ```
/// use addrscan::find_addresses;
///
/// let found: Vec<_> = find_addresses("1022 Hoover Boulevard, Springfield, IL 62704", "US")
///     .unwrap()
///     .collect();
/// assert_eq!(found[0].get("city"), Some("Springfield"));
/// ```
pub fn find_addresses<'t>(text: &'t str, locale: &str) -> Result<AddressMatches<'t>> {
    find_addresses_with(text, locale, &Options::default())
}

/// Like [`find_addresses`], with explicit [`Options`].
pub fn find_addresses_with<'t>(text: &'t str, locale: &str, options: &Options) -> Result<AddressMatches<'t>> {
    engine::address_matcher(locale)?.find_iter(text, options)
}

/// Find street-level matches (number, name, type and unit parts) without
/// requiring a city or region after them.
pub fn find_streets<'t>(text: &'t str, locale: &str) -> Result<AddressMatches<'t>> {
    find_streets_with(text, locale, &Options::default())
}

/// Like [`find_streets`], with explicit [`Options`].
pub fn find_streets_with<'t>(text: &'t str, locale: &str, options: &Options) -> Result<AddressMatches<'t>> {
    engine::street_matcher(locale)?.find_iter(text, options)
}

/// Find addresses and return timing and gating details along with them.
///
/// This is meant for debugging grammars; [`find_addresses_with`] does no
/// timing and allocates nothing up front.
pub fn find_addresses_verbose_with(text: &str, locale: &str, options: &Options) -> Result<ScanDetails> {
    let started = Instant::now();
    let matcher = engine::address_matcher(locale)?;
    let profile = matcher.profile();
    let matches = matcher.find_iter_ungated(text, options)?;

    let trigger_started = Instant::now();
    let admitted = matcher.admits(text);
    let trigger = trigger_started.elapsed();

    let matching_started = Instant::now();
    let results: Vec<AddressMatch> = if admitted { matches.collect() } else { Vec::new() };
    let matching = matching_started.elapsed();

    log::debug!(
        target: "addrscan::api",
        "verbose scan {}: {} bytes, admitted={}, {} matches",
        profile.id(),
        text.len(),
        admitted,
        results.len()
    );

    let metrics = ScanMetrics {
        total: started.elapsed(),
        trigger,
        matching,
        gated_out: !admitted,
        matches: results.len(),
        input_bytes: text.len(),
    };

    Ok(ScanDetails {
        text: text.to_string(),
        locale: profile.id().to_string(),
        fields: matcher.field_names().map(str::to_string).collect(),
        source: matcher.source().to_string(),
        results,
        metrics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::*;
    use crate::{AddressError, LocaleProfile, register_profile};

    const SAMPLE: &str = "Send to 1022 Hoover Boulevard, Springfield, IL 62704, USA or 2 Oak Ave, Austin, TX 78701.";

    #[test]
    fn find_addresses_is_idempotent() {
        let first: Vec<_> = find_addresses(SAMPLE, "US").unwrap().collect();
        let second: Vec<_> = find_addresses(SAMPLE, "us").unwrap().collect();
        assert_eq!(first.len(), 2);
        assert_eq!(first, second);
    }

    #[test]
    fn matches_do_not_overlap() {
        let found: Vec<_> = find_addresses(SAMPLE, "US").unwrap().collect();
        for pair in found.windows(2) {
            assert!(pair[0].end <= pair[1].start);
        }
        for m in &found {
            assert_eq!(&SAMPLE[m.start..m.end], m.text);
        }
    }

    #[test]
    fn value_trims_separators() {
        let found: Vec<_> = find_addresses(SAMPLE, "US").unwrap().collect();
        let a = &found[0];
        assert_eq!(a.get(STREET_NUMBER), Some("1022 "));
        assert_eq!(a.value(STREET_NUMBER), Some("1022"));
        assert_eq!(a.value(FULL_STREET), Some("1022 Hoover Boulevard"));
        assert_eq!(a.value("no_such_field"), None);
    }

    #[test]
    fn unknown_locale() {
        let err = find_addresses("1 Elm St", "XX").unwrap_err();
        assert_eq!(err, AddressError::UnknownLocale("XX".into()));
        assert!(find_streets("1 Elm St", "").is_err());
    }

    #[test]
    fn oversized_input_is_aborted() {
        let options = Options { max_input_bytes: 10, ..Options::default() };
        let err = find_addresses_with(SAMPLE, "US", &options).unwrap_err();
        assert!(matches!(err, AddressError::MatchAborted(_)));
    }

    #[test]
    fn verbose_reports_metrics() {
        let res = find_addresses_verbose_with(SAMPLE, "us", &Options::default()).unwrap();
        assert_eq!(res.locale, "US");
        assert_eq!(res.results.len(), 2);
        assert_eq!(res.metrics.matches, 2);
        assert_eq!(res.metrics.input_bytes, SAMPLE.len());
        assert!(!res.metrics.gated_out);
        assert!(res.metrics.trigger <= res.metrics.total);
        assert!(res.fields.iter().any(|f| f == CITY));

        let res = find_addresses_verbose_with("nothing here", "US", &Options::default()).unwrap();
        assert!(res.metrics.gated_out);
        assert!(res.results.is_empty());
    }

    #[test]
    fn registered_profile_is_usable() {
        use crate::grammar::{CharSet, class, label, literal, word};

        let profile = LocaleProfile::builder("api-test")
            .rule(STREET_NUMBER, label(STREET_NUMBER, seq![class(CharSet::digits(), 1, 4), literal(" ")]))
            .rule(STREET_NAME, label(STREET_NAME, class(CharSet::letters(), 1, 20)))
            .rule(STREET_TYPE, label(STREET_TYPE, word("gata")))
            .rule(CITY, label(CITY, class(CharSet::letters(), 3, 20)))
            .build()
            .unwrap();
        register_profile(profile).unwrap();

        let found: Vec<_> = find_addresses("Drottning 12 Kungs gata, Uppsala", "API-TEST").unwrap().collect();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].locale, "API-TEST");
        assert_eq!(found[0].get(CITY), Some("Uppsala"));
    }
}
