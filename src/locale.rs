//! Locale profiles.
//!
//! A [`LocaleProfile`] is data: a table of named grammar rules for one
//! country's address format, plus a couple of prefilter hints. The engine
//! never hardcodes a locale; it asks a profile for rules by name (see
//! [`crate::field`]) and assembles them.
//!
//! Profiles are built through [`ProfileBuilder`], which validates every rule
//! and the assembled address/street patterns before handing out the frozen
//! profile. After that nothing can change it.

use std::collections::BTreeMap;

use crate::engine::{BucketMask, assemble, compile};
use crate::error::{ProfileError, Result};
use crate::grammar::Pattern;

/// Named grammar rules for one locale.
#[derive(Debug, Clone)]
pub struct LocaleProfile {
    id: String,
    rules: BTreeMap<String, Pattern>,
    trigger_phrases: Vec<String>,
    gate: BucketMask,
}

impl LocaleProfile {
    /// Start building a profile for `id` (normalized to ASCII upper case).
    pub fn builder(id: &str) -> ProfileBuilder {
        ProfileBuilder {
            id: id.trim().to_ascii_uppercase(),
            rules: Vec::new(),
            trigger_phrases: Vec::new(),
            gate: BucketMask::empty(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Rule stored under `name`, if any.
    pub fn rule(&self, name: &str) -> Option<&Pattern> {
        self.rules.get(name)
    }

    pub fn rule_names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    /// Lowercase words whose presence in the input can start an address
    /// (e.g. number words).
    pub fn trigger_phrases(&self) -> &[String] {
        &self.trigger_phrases
    }

    /// Input buckets that can start an address. Empty means "no gate".
    pub fn gate(&self) -> BucketMask {
        self.gate
    }
}

/// Builder returned by [`LocaleProfile::builder`].
#[derive(Debug, Clone)]
pub struct ProfileBuilder {
    id: String,
    rules: Vec<(String, Pattern)>,
    trigger_phrases: Vec<String>,
    gate: BucketMask,
}

impl ProfileBuilder {
    pub fn rule(mut self, name: &str, pattern: Pattern) -> Self {
        self.rules.push((name.to_string(), pattern));
        self
    }

    pub fn trigger_phrases(mut self, phrases: &[&str]) -> Self {
        self.trigger_phrases.extend(phrases.iter().map(|p| p.to_ascii_lowercase()));
        self
    }

    pub fn gate(mut self, gate: BucketMask) -> Self {
        self.gate |= gate;
        self
    }

    /// Validate and freeze the profile.
    ///
    /// Checks, in order: the id is non-empty, no rule name is repeated, each
    /// rule is structurally valid on its own, and the assembled street and
    /// full-address patterns carry unique labels.
    pub fn build(self) -> Result<LocaleProfile> {
        let id = self.id;
        if id.is_empty() {
            return Err(ProfileError::EmptyLocaleId.in_locale(&id));
        }

        let mut rules = BTreeMap::new();
        for (name, pattern) in self.rules {
            compile::validate(&pattern).map_err(|e| e.in_locale(&id))?;
            if rules.insert(name.clone(), pattern).is_some() {
                return Err(ProfileError::DuplicateRule(name).in_locale(&id));
            }
        }

        let profile = LocaleProfile { id, rules, trigger_phrases: self.trigger_phrases, gate: self.gate };

        let street = assemble::build_street_pattern(&profile)?;
        compile::validate(&street).map_err(|e| e.in_locale(&profile.id))?;
        let address = assemble::build_address_pattern(&profile)?;
        compile::validate(&address).map_err(|e| e.in_locale(&profile.id))?;

        log::debug!(
            target: "addrscan::locale",
            "built profile {} ({} rules, {} trigger phrases, gate={:?})",
            profile.id,
            profile.rules.len(),
            profile.trigger_phrases.len(),
            profile.gate
        );

        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AddressError;
    use crate::field::*;
    use crate::grammar::{CharSet, class, label, literal, repeat, word};

    fn minimal() -> ProfileBuilder {
        LocaleProfile::builder("zz")
            .rule(STREET_NUMBER, label(STREET_NUMBER, class(CharSet::digits(), 1, 5)))
            .rule(STREET_TYPE, label(STREET_TYPE, word("street")))
            .rule(CITY, label(CITY, class(CharSet::letters(), 3, 21)))
    }

    #[test]
    fn builds_minimal_profile() {
        let profile = minimal().gate(BucketMask::HAS_DIGITS).build().unwrap();
        assert_eq!(profile.id(), "ZZ");
        assert!(profile.rule(CITY).is_some());
        assert!(profile.rule(REGION1).is_none());
        assert_eq!(profile.rule_names().collect::<Vec<_>>(), vec![CITY, STREET_NUMBER, STREET_TYPE]);
        assert_eq!(profile.gate(), BucketMask::HAS_DIGITS);
    }

    #[test]
    fn trigger_phrases_are_lowercased() {
        let profile = minimal().trigger_phrases(&["One", "TWO"]).build().unwrap();
        assert_eq!(profile.trigger_phrases(), ["one".to_string(), "two".to_string()]);
    }

    #[test]
    fn rejects_duplicate_rule_names() {
        let err = minimal().rule(CITY, label(CITY, literal("x"))).build().unwrap_err();
        assert_eq!(err, ProfileError::DuplicateRule(CITY.to_string()).in_locale("ZZ"));
    }

    #[test]
    fn rejects_missing_required_rule() {
        let err = LocaleProfile::builder("zz")
            .rule(STREET_NUMBER, label(STREET_NUMBER, class(CharSet::digits(), 1, 5)))
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            AddressError::InvalidProfile { source: ProfileError::MissingRule(ref name), .. } if name == STREET_TYPE
        ));
    }

    #[test]
    fn rejects_label_reused_across_rules() {
        // The city rule smuggles in a second `street_type` label.
        let err = LocaleProfile::builder("zz")
            .rule(STREET_NUMBER, label(STREET_NUMBER, class(CharSet::digits(), 1, 5)))
            .rule(STREET_TYPE, label(STREET_TYPE, word("street")))
            .rule(CITY, label(CITY, label(STREET_TYPE, literal("x"))))
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            AddressError::InvalidProfile { source: ProfileError::DuplicateLabel(ref name), .. } if name == STREET_TYPE
        ));
    }

    #[test]
    fn rejects_unbounded_repetition() {
        let err = minimal().rule(COUNTRY, label(COUNTRY, repeat(literal("x"), 1, 10_000))).build().unwrap_err();
        assert!(matches!(
            err,
            AddressError::InvalidProfile { source: ProfileError::UnboundedRepeat { max: 10_000, .. }, .. }
        ));
    }

    #[test]
    fn rejects_empty_id() {
        assert!(LocaleProfile::builder("  ").build().is_err());
    }
}
