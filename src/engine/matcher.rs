//! Compiled matchers and the match iterator.
//!
//! A `CompiledMatcher` pairs a compiled `Regex` with the profile it came from
//! and a table mapping capture-group indexes to field names. It holds no
//! mutable state, so one matcher can serve any number of concurrent scans.
//!
//! Matching is leftmost-first and non-overlapping: after a match ending at
//! `e`, the next search starts at `e`. The search restarts with
//! `Regex::captures_at`, which still sees the text before the restart point,
//! so word boundaries behave exactly as in a single pass.

use std::borrow::Cow;
use std::sync::Arc;

use regex::{Captures, Regex};

use super::assemble::{build_address_pattern, build_street_pattern};
use super::compile::{CompileOptions, compile};
use super::trigger::TriggerInfo;
use crate::api::{AddressMatch, Field, Options};
use crate::error::{AddressError, ProfileError, Result};
use crate::field::{FULL_ADDRESS, FULL_STREET};
use crate::grammar::Pattern;
use crate::locale::LocaleProfile;

/// A grammar compiled for one profile.
#[derive(Debug)]
pub struct CompiledMatcher {
    profile: Arc<LocaleProfile>,
    rule: String,
    regex: Regex,
    /// Capture group index -> field name, in group order.
    fields: Vec<(usize, Arc<str>)>,
    min_len: usize,
}

impl CompiledMatcher {
    /// Compile the profile's full-address grammar.
    pub fn for_address(profile: Arc<LocaleProfile>, options: &CompileOptions) -> Result<Self> {
        let pattern = build_address_pattern(&profile)?;
        Self::new(profile, FULL_ADDRESS, &pattern, options)
    }

    /// Compile the profile's street grammar alone.
    pub fn for_street(profile: Arc<LocaleProfile>, options: &CompileOptions) -> Result<Self> {
        let pattern = build_street_pattern(&profile)?;
        Self::new(profile, FULL_STREET, &pattern, options)
    }

    /// Compile a single named rule of the profile.
    pub fn for_rule(profile: Arc<LocaleProfile>, name: &str, options: &CompileOptions) -> Result<Self> {
        let pattern = match profile.rule(name) {
            Some(p) => p.clone(),
            None => return Err(ProfileError::MissingRule(name.to_string()).in_locale(profile.id())),
        };
        Self::new(profile, name, &pattern, options)
    }

    fn new(profile: Arc<LocaleProfile>, rule: &str, pattern: &Pattern, options: &CompileOptions) -> Result<Self> {
        let regex = compile(pattern, options).map_err(|e| e.in_locale(profile.id()))?;
        let fields = regex
            .capture_names()
            .enumerate()
            .filter_map(|(idx, name)| name.map(|n| (idx, Arc::from(n))))
            .collect::<Vec<_>>();

        log::debug!(
            target: "addrscan::matcher",
            "compiled {}/{}: {} fields, {} bytes of regex source",
            profile.id(),
            rule,
            fields.len(),
            regex.as_str().len()
        );

        Ok(CompiledMatcher { min_len: pattern.min_len(), profile, rule: rule.to_string(), regex, fields })
    }

    pub fn profile(&self) -> &Arc<LocaleProfile> {
        &self.profile
    }

    /// Name of the rule this matcher was compiled from.
    pub fn rule(&self) -> &str {
        &self.rule
    }

    /// The lowered regex source.
    pub fn source(&self) -> &str {
        self.regex.as_str()
    }

    /// Field names this matcher can report, in capture-group order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(_, name)| &**name)
    }

    /// Whether `text` passes the cheap pre-checks (length and trigger gate).
    ///
    /// A `false` answer is definitive: the grammar cannot match `text`.
    pub fn admits(&self, text: &str) -> bool {
        if text.len() < self.min_len {
            return false;
        }
        let phrases = self.profile.trigger_phrases();
        TriggerInfo::scan(text, phrases).admits(self.profile.gate(), phrases)
    }

    /// Lazily find every non-overlapping match in `text`.
    ///
    /// Fails only when `text` is longer than `options.max_input_bytes`.
    pub fn find_iter<'t>(self: &Arc<Self>, text: &'t str, options: &Options) -> Result<AddressMatches<'t>> {
        let mut matches = self.find_iter_ungated(text, options)?;
        if !self.admits(text) {
            log::debug!(target: "addrscan::matcher", "{}/{}: input gated out", self.profile.id(), self.rule);
            matches.done = true;
        }
        Ok(matches)
    }

    /// Like [`find_iter`](Self::find_iter) but skips the trigger gate.
    pub(crate) fn find_iter_ungated<'t>(self: &Arc<Self>, text: &'t str, options: &Options) -> Result<AddressMatches<'t>> {
        if text.len() > options.max_input_bytes {
            return Err(AddressError::MatchAborted(format!(
                "input is {} bytes, limit is {}",
                text.len(),
                options.max_input_bytes
            )));
        }

        let haystack = if options.fold_line_breaks && text.bytes().any(|b| matches!(b, b'\r' | b'\n' | b'\t')) {
            Cow::Owned(text.replace(['\r', '\n', '\t'], " "))
        } else {
            Cow::Borrowed(text)
        };

        Ok(AddressMatches { matcher: Arc::clone(self), original: text, haystack, pos: 0, done: false })
    }

    /// Turn one set of captures into an owned record. Spans index into
    /// `original`, which shares byte offsets with the searched haystack.
    fn extract(&self, caps: &Captures<'_>, original: &str) -> Option<AddressMatch> {
        let whole = caps.get(0)?;
        let mut fields = Vec::new();
        for (idx, name) in &self.fields {
            match caps.get(*idx) {
                Some(m) if !m.is_empty() => fields.push(Field {
                    name: name.to_string(),
                    start: m.start(),
                    end: m.end(),
                    text: original[m.range()].to_string(),
                }),
                _ => {}
            }
        }

        Some(AddressMatch {
            locale: self.profile.id().to_string(),
            start: whole.start(),
            end: whole.end(),
            text: original[whole.range()].to_string(),
            fields,
        })
    }
}

/// Iterator over the matches of one [`CompiledMatcher`] in one text.
///
/// Cloning the iterator restarts nothing; the clone continues from the same
/// position. Calling `find_iter` again on the same text yields the same
/// sequence.
#[derive(Debug, Clone)]
pub struct AddressMatches<'t> {
    matcher: Arc<CompiledMatcher>,
    original: &'t str,
    haystack: Cow<'t, str>,
    pos: usize,
    done: bool,
}

impl Iterator for AddressMatches<'_> {
    type Item = AddressMatch;

    fn next(&mut self) -> Option<AddressMatch> {
        while !self.done {
            let Some(caps) = self.matcher.regex.captures_at(&self.haystack, self.pos) else {
                self.done = true;
                break;
            };
            let Some(whole) = caps.get(0) else {
                self.done = true;
                break;
            };

            if whole.is_empty() {
                // Step over one character and search again.
                match self.haystack[whole.end()..].chars().next() {
                    Some(c) => self.pos = whole.end() + c.len_utf8(),
                    None => self.done = true,
                }
                continue;
            }

            self.pos = whole.end();
            let found = self.matcher.extract(&caps, self.original);
            if let Some(m) = &found {
                log::trace!(
                    target: "addrscan::matcher",
                    "{}/{} matched {}..{}: {:?}",
                    m.locale,
                    self.matcher.rule,
                    m.start,
                    m.end,
                    m.text
                );
            }
            return found;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::BucketMask;
    use crate::field::*;
    use crate::grammar::{CharSet, class, label, literal, opt, word};

    fn toy_profile() -> Arc<LocaleProfile> {
        let profile = LocaleProfile::builder("toy")
            .rule(STREET_NUMBER, label(STREET_NUMBER, seq![class(CharSet::digits(), 1, 5), literal(" ")]))
            .rule(STREET_NAME, label(STREET_NAME, class(CharSet::letters(), 1, 10)))
            .rule(STREET_TYPE, label(STREET_TYPE, word("rd")))
            .rule(CITY, label(CITY, class(CharSet::letters(), 3, 12)))
            .rule(COUNTRY, label(COUNTRY, literal("Toyland")))
            .gate(BucketMask::HAS_DIGITS)
            .build()
            .unwrap();
        Arc::new(profile)
    }

    fn collect(m: &Arc<CompiledMatcher>, text: &str) -> Vec<AddressMatch> {
        m.find_iter(text, &Options::default()).unwrap().collect()
    }

    #[test]
    fn reports_fields_and_offsets() {
        let m = Arc::new(CompiledMatcher::for_address(toy_profile(), &CompileOptions::default()).unwrap());
        let text = "at 12 Elm Rd, Dale, Toyland.";
        let found = collect(&m, text);
        assert_eq!(found.len(), 1);

        let a = &found[0];
        assert_eq!(a.locale, "TOY");
        assert_eq!(&text[a.start..a.end], a.text);
        assert_eq!(a.get(STREET_NUMBER), Some("12 "));
        assert_eq!(a.get(STREET_NAME), Some("Elm"));
        assert_eq!(a.get(CITY), Some("Dale"));
        assert_eq!(a.get(COUNTRY), Some("Toyland"));
        for f in &a.fields {
            assert_eq!(&text[f.start..f.end], f.text);
        }
    }

    #[test]
    fn matches_do_not_overlap_and_restart_identically() {
        let m = Arc::new(CompiledMatcher::for_street(toy_profile(), &CompileOptions::default()).unwrap());
        let text = "1 Ash Rd 2 Oak Rd 3 Fir Rd";
        let first = collect(&m, text);
        assert_eq!(first.len(), 3);
        for pair in first.windows(2) {
            assert!(pair[0].end <= pair[1].start);
        }
        assert_eq!(first, collect(&m, text));
    }

    #[test]
    fn cloned_iterator_continues_from_same_position() {
        let m = Arc::new(CompiledMatcher::for_street(toy_profile(), &CompileOptions::default()).unwrap());
        let mut it = m.find_iter("1 Ash Rd 2 Oak Rd", &Options::default()).unwrap();
        it.next();
        let rest: Vec<_> = it.clone().collect();
        assert_eq!(rest, it.collect::<Vec<_>>());
        assert_eq!(rest.len(), 1);
    }

    #[test]
    fn zero_length_matches_are_skipped() {
        let profile = toy_profile();
        let profile = Arc::new(
            LocaleProfile::builder("empty")
                .rule(STREET_NUMBER, profile.rule(STREET_NUMBER).unwrap().clone())
                .rule(STREET_TYPE, profile.rule(STREET_TYPE).unwrap().clone())
                .rule(CITY, profile.rule(CITY).unwrap().clone())
                .rule("maybe", opt(literal("x")))
                .build()
                .unwrap(),
        );
        let m = Arc::new(CompiledMatcher::for_rule(profile, "maybe", &CompileOptions::default()).unwrap());
        let found = collect(&m, "héllo x");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].start, 7);
    }

    #[test]
    fn line_breaks_fold_without_moving_offsets() {
        let m = Arc::new(CompiledMatcher::for_street(toy_profile(), &CompileOptions::default()).unwrap());
        let text = "12\nElm Rd";
        let found = collect(&m, text);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].text, "12\nElm Rd");

        let strict = Options { fold_line_breaks: false, ..Options::default() };
        assert_eq!(m.find_iter(text, &strict).unwrap().count(), 0);
    }

    #[test]
    fn gate_skips_inputs_without_digits() {
        let m = Arc::new(CompiledMatcher::for_street(toy_profile(), &CompileOptions::default()).unwrap());
        assert!(!m.admits("no numbers at all in this sentence"));
        assert!(m.admits("12 Elm Rd"));
        assert!(collect(&m, "no numbers at all in this sentence").is_empty());
    }

    #[test]
    fn oversized_input_is_refused() {
        let m = Arc::new(CompiledMatcher::for_street(toy_profile(), &CompileOptions::default()).unwrap());
        let options = Options { max_input_bytes: 4, ..Options::default() };
        let err = m.find_iter("12 Elm Rd", &options).unwrap_err();
        assert!(matches!(err, AddressError::MatchAborted(_)));
    }

    #[test]
    fn for_rule_requires_existing_rule() {
        let err = CompiledMatcher::for_rule(toy_profile(), "nope", &CompileOptions::default()).unwrap_err();
        assert_eq!(err, ProfileError::MissingRule("nope".into()).in_locale("TOY"));
    }
}
