//! Locale registry: the closed set of locales the merge produces output for.
//!
//! The registry is built once per process behind a `OnceLock` and never
//! mutated afterwards. Every other component asks it which locales exist;
//! nothing else decides whether a locale code is valid.

use std::sync::OnceLock;

/// Metadata for a supported locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleConfig {
    /// Locale code, also the fragment and output file stem (e.g. "en", "es")
    pub code: &'static str,

    /// English name of the locale (e.g. "English", "Spanish")
    pub name: &'static str,

    /// Native name of the locale (e.g. "English", "Español")
    pub native_name: &'static str,
}

/// Global locale registry singleton.
///
/// Entries keep their declaration order, which is the order output files
/// are bootstrapped, finalized and reported in.
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global locale registry instance.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: default_locales(),
        })
    }

    /// Get a locale configuration by its code.
    ///
    /// # Returns
    /// * `Some(&LocaleConfig)` if the locale is registered
    /// * `None` otherwise
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|locale| locale.code == code)
    }

    /// All registered locales, in registry order.
    pub fn list_all(&self) -> Vec<&LocaleConfig> {
        self.locales.iter().collect()
    }

    /// All registered locale codes, in registry order.
    pub fn codes(&self) -> Vec<&'static str> {
        self.locales.iter().map(|locale| locale.code).collect()
    }

    /// Check if a locale code is registered.
    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }
}

/// Default locale configurations: English and Spanish.
fn default_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            code: "en",
            name: "English",
            native_name: "English",
        },
        LocaleConfig {
            code: "es",
            name: "Spanish",
            native_name: "Español",
        },
    ]
}
