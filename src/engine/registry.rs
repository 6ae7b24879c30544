//! Process-wide locale registry.
//!
//! Maps a locale id to its frozen profile and the two matchers compiled from
//! it (full address and street only). The built-in locales are compiled the
//! first time the registry is touched; later registrations only ever add
//! entries.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use once_cell::sync::Lazy;

use super::compile::CompileOptions;
use super::matcher::CompiledMatcher;
use crate::error::{AddressError, Result};
use crate::locale::LocaleProfile;

#[derive(Debug)]
struct LocaleEntry {
    profile: Arc<LocaleProfile>,
    address: Arc<CompiledMatcher>,
    street: Arc<CompiledMatcher>,
}

impl LocaleEntry {
    fn compile(profile: LocaleProfile, options: &CompileOptions) -> Result<Self> {
        let profile = Arc::new(profile);
        let address = Arc::new(CompiledMatcher::for_address(Arc::clone(&profile), options)?);
        let street = Arc::new(CompiledMatcher::for_street(Arc::clone(&profile), options)?);
        Ok(LocaleEntry { profile, address, street })
    }
}

static REGISTRY: Lazy<RwLock<HashMap<String, Arc<LocaleEntry>>>> = Lazy::new(|| {
    let mut table = HashMap::new();
    for built in crate::rules::builtin_profiles() {
        match built.and_then(|p| LocaleEntry::compile(p, &CompileOptions::default())) {
            Ok(entry) => {
                log::debug!(target: "addrscan::registry", "registered built-in locale {}", entry.profile.id());
                table.insert(entry.profile.id().to_string(), Arc::new(entry));
            }
            Err(e) => log::error!(target: "addrscan::registry", "skipping built-in locale: {}", e),
        }
    }
    RwLock::new(table)
});

fn normalize(id: &str) -> String {
    id.trim().to_ascii_uppercase()
}

fn entry(id: &str) -> Result<Arc<LocaleEntry>> {
    let table = REGISTRY.read().unwrap_or_else(PoisonError::into_inner);
    table.get(&normalize(id)).cloned().ok_or_else(|| AddressError::UnknownLocale(id.to_string()))
}

/// Register `profile` with default compile options.
///
/// See [`register_profile_with`].
pub fn register_profile(profile: LocaleProfile) -> Result<()> {
    register_profile_with(profile, &CompileOptions::default())
}

/// Compile `profile` and make it available under its id.
///
/// Fails with [`AddressError::LocaleAlreadyRegistered`] if the id is taken and
/// with [`AddressError::InvalidProfile`] if the grammar does not compile. On
/// failure nothing is registered.
pub fn register_profile_with(profile: LocaleProfile, options: &CompileOptions) -> Result<()> {
    let id = profile.id().to_string();
    if REGISTRY.read().unwrap_or_else(PoisonError::into_inner).contains_key(&id) {
        return Err(AddressError::LocaleAlreadyRegistered(id));
    }

    let entry = LocaleEntry::compile(profile, options)?;

    let mut table = REGISTRY.write().unwrap_or_else(PoisonError::into_inner);
    if table.contains_key(&id) {
        return Err(AddressError::LocaleAlreadyRegistered(id));
    }
    table.insert(id.clone(), Arc::new(entry));
    log::info!(target: "addrscan::registry", "registered locale {}", id);
    Ok(())
}

/// Look up a registered profile. Ids are matched case-insensitively.
pub fn get_profile(id: &str) -> Result<Arc<LocaleProfile>> {
    entry(id).map(|e| Arc::clone(&e.profile))
}

/// Ids of every registered locale, sorted.
pub fn registered_locales() -> Vec<String> {
    let table = REGISTRY.read().unwrap_or_else(PoisonError::into_inner);
    let mut ids: Vec<String> = table.keys().cloned().collect();
    ids.sort();
    ids
}

pub(crate) fn address_matcher(id: &str) -> Result<Arc<CompiledMatcher>> {
    entry(id).map(|e| Arc::clone(&e.address))
}

pub(crate) fn street_matcher(id: &str) -> Result<Arc<CompiledMatcher>> {
    entry(id).map(|e| Arc::clone(&e.street))
}
