//! Locale definitions for the merge.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for the supported locales
//! - `locale`: Copyable `Locale` handle validated against the registry
//!
//! # Example
//!
//! ```rust,ignore
//! use i18n_merge::i18n::Locale;
//!
//! for locale in Locale::all() {
//!     println!("{} -> {}", locale, locale.file_name());
//! }
//! ```

mod locale;
mod registry;

pub use locale::Locale;
pub use registry::{LocaleConfig, LocaleRegistry};
