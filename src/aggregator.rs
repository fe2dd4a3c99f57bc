//! Per-locale accumulation of validated fragments.
//!
//! The aggregator is owned by a single run and fed one fragment at a time.
//! Namespace keys are unique per locale across the whole source tree; the
//! first duplicate aborts the run.

use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::debug;

use crate::error::{MergeError, MergeResult};
use crate::fragment::Fragment;
use crate::i18n::Locale;

/// Merged namespace mapping for one locale.
pub type Messages = Map<String, Value>;

/// Accumulates fragments into one `Messages` map per registered locale.
#[derive(Debug, Clone)]
pub struct Aggregator {
    messages: BTreeMap<Locale, Messages>,
    absorbed: usize,
}

impl Aggregator {
    /// Create an aggregator holding an empty mapping for every registered
    /// locale.
    pub fn new() -> Self {
        let messages = Locale::all()
            .into_iter()
            .map(|locale| (locale, Map::new()))
            .collect();

        Self {
            messages,
            absorbed: 0,
        }
    }

    /// Add a fragment's namespace to its locale's mapping.
    ///
    /// # Errors
    ///
    /// Returns `MergeError::DuplicateNamespace` if the locale already holds
    /// the namespace. The aggregator is left unchanged in that case.
    pub fn absorb(&mut self, fragment: Fragment) -> MergeResult<()> {
        let Fragment {
            locale,
            path,
            namespace,
            payload,
        } = fragment;

        let messages = self.messages.entry(locale).or_default();

        if messages.contains_key(&namespace) {
            return Err(MergeError::DuplicateNamespace {
                locale,
                key: namespace,
                path,
            });
        }

        debug!(%locale, namespace = %namespace, path = %path.display(), "Absorbed fragment");
        messages.insert(namespace, payload);
        self.absorbed += 1;
        Ok(())
    }

    /// The merged mapping for `locale`; empty if it never absorbed anything.
    pub fn messages(&self, locale: Locale) -> &Messages {
        // `new` seeds every registered locale and `Locale` only holds
        // registered codes.
        &self.messages[&locale]
    }

    /// Number of fragments absorbed so far, across all locales.
    pub fn absorbed(&self) -> usize {
        self.absorbed
    }

    /// Consume the aggregator, yielding each locale's mapping in registry
    /// order.
    pub fn into_messages(self) -> Vec<(Locale, Messages)> {
        let mut messages = self.messages;
        Locale::all()
            .into_iter()
            .map(|locale| {
                let merged = messages.remove(&locale).unwrap_or_default();
                (locale, merged)
            })
            .collect()
    }
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new()
    }
}
