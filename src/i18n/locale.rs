//! Locale type: a locale code validated against the registry.

use crate::i18n::{LocaleConfig, LocaleRegistry};
use anyhow::{bail, Result};
use std::fmt;

/// A registered locale.
///
/// Can only be constructed from codes present in the `LocaleRegistry`, so
/// holding a `Locale` means the code is part of the closed output set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Locale {
    code: &'static str,
}

impl Locale {
    pub const ENGLISH: Locale = Locale { code: "en" };
    pub const SPANISH: Locale = Locale { code: "es" };

    /// Create a Locale from a code string.
    ///
    /// # Returns
    /// * `Ok(Locale)` if the code is registered
    /// * `Err` if the code is unknown
    pub fn from_code(code: &str) -> Result<Locale> {
        match LocaleRegistry::get().get_by_code(code) {
            Some(config) => Ok(Locale { code: config.code }),
            None => bail!("Unknown locale code: '{}'", code),
        }
    }

    /// Every registered locale, in registry order.
    pub fn all() -> Vec<Locale> {
        LocaleRegistry::get()
            .list_all()
            .into_iter()
            .map(|config| Locale { code: config.code })
            .collect()
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// File name used for both fragments and output: `{code}.json`.
    pub fn file_name(&self) -> String {
        format!("{}.json", self.code)
    }

    /// Get the full locale configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is not registered, which cannot happen for a
    /// `Locale` built through `from_code`, `all` or the constants.
    pub fn config(&self) -> &'static LocaleConfig {
        LocaleRegistry::get()
            .get_by_code(self.code)
            .expect("Locale code should always be registered")
    }

    pub fn name(&self) -> &'static str {
        self.config().name
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}
