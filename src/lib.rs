//! Merge per-feature translation fragments into one messages file per locale.
//!
//! Fragments live in `i18n/{locale}.json` files scattered across a source
//! tree. Each holds a single namespace. A run collects every fragment,
//! rejects malformed or conflicting ones, and writes `{output}/{locale}.json`
//! for every registered locale.

pub mod aggregator;
pub mod config;
pub mod error;
pub mod fragment;
pub mod i18n;
pub mod merge;
pub mod output;
pub mod walker;

pub use error::{MergeError, MergeResult};
