//! Loading and shape validation of per-locale translation fragments.
//!
//! A fragment file lives at `.../i18n/{locale}.json` and must hold a JSON
//! object with exactly one top-level key. That key is the namespace, its
//! value (any JSON except `null`) is the payload. Only the shape is checked,
//! never the translated strings themselves.

use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{MergeError, MergeResult};
use crate::i18n::Locale;

/// One validated fragment.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    pub locale: Locale,
    /// The fragment file this came from, for diagnostics.
    pub path: PathBuf,
    pub namespace: String,
    pub payload: Value,
}

/// Load the fragment for `locale` from a fragment directory.
///
/// # Returns
/// * `Ok(None)` if the directory has no `{locale}.json`
/// * `Ok(Some(Fragment))` if the file exists and has a valid shape
///
/// # Errors
///
/// Fails on unreadable files, invalid JSON and every shape violation.
pub fn load(dir: &Path, locale: Locale) -> MergeResult<Option<Fragment>> {
    let path = dir.join(locale.file_name());

    let contents = match fs::read(&path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(dir = %dir.display(), %locale, "No fragment for locale");
            return Ok(None);
        }
        Err(e) => return Err(MergeError::io(path, e)),
    };

    parse(&path, locale, &contents).map(Some)
}

/// Parse and validate fragment bytes read from `path`.
///
/// Bytes that are not UTF-8 are reported as a malformed fragment.
pub fn parse(path: &Path, locale: Locale, contents: &[u8]) -> MergeResult<Fragment> {
    let value: Value = serde_json::from_slice(contents).map_err(|source| MergeError::Malformed {
        path: path.to_path_buf(),
        source,
    })?;

    let Value::Object(map) = value else {
        return Err(MergeError::NotAnObject {
            path: path.to_path_buf(),
        });
    };

    match map.len() {
        0 => {
            return Err(MergeError::NoKey {
                path: path.to_path_buf(),
            })
        }
        1 => {}
        count => {
            return Err(MergeError::TooManyKeys {
                path: path.to_path_buf(),
                count,
            })
        }
    }

    let (namespace, payload) = map
        .into_iter()
        .next()
        .ok_or_else(|| MergeError::NoKey {
            path: path.to_path_buf(),
        })?;

    if payload.is_null() {
        return Err(MergeError::MissingValue {
            path: path.to_path_buf(),
            key: namespace,
        });
    }

    Ok(Fragment {
        locale,
        path: path.to_path_buf(),
        namespace,
        payload,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn parse_en(contents: &str) -> MergeResult<Fragment> {
        parse(
            Path::new("feature/i18n/en.json"),
            Locale::ENGLISH,
            contents.as_bytes(),
        )
    }

    // ==================== Valid Fragment Tests ====================

    #[test]
    fn test_parse_single_namespace() {
        let fragment = parse_en(r#"{"home": {"title": "Hi"}}"#).expect("valid fragment");

        assert_eq!(fragment.locale, Locale::ENGLISH);
        assert_eq!(fragment.namespace, "home");
        assert_eq!(fragment.payload, json!({"title": "Hi"}));
        assert_eq!(fragment.path, Path::new("feature/i18n/en.json"));
    }

    #[test]
    fn test_parse_keeps_deeply_nested_payload() {
        let fragment =
            parse_en(r#"{"nav": {"menu": {"items": ["a", "b"], "depth": 3, "on": true}}}"#)
                .expect("valid fragment");

        assert_eq!(
            fragment.payload,
            json!({"menu": {"items": ["a", "b"], "depth": 3, "on": true}})
        );
    }

    #[test]
    fn test_parse_accepts_scalar_payload() {
        let fragment = parse_en(r#"{"greeting": "Hello"}"#).expect("valid fragment");
        assert_eq!(fragment.payload, json!("Hello"));
    }

    // ==================== Shape Violation Tests ====================

    #[test]
    fn test_malformed_json() {
        let err = parse_en(r#"{"home": "#).unwrap_err();
        assert!(matches!(err, MergeError::Malformed { .. }));
        assert!(err.to_string().contains("feature/i18n/en.json"));
    }

    #[test]
    fn test_invalid_utf8_is_malformed() {
        let err = parse(
            Path::new("feature/i18n/en.json"),
            Locale::ENGLISH,
            b"{\"a\":\"\xff\"}",
        )
        .unwrap_err();
        assert!(matches!(err, MergeError::Malformed { .. }));
    }

    #[test]
    fn test_load_invalid_utf8_file_is_malformed() {
        let temp = TempDir::new().expect("temp dir");
        fs::write(temp.path().join("en.json"), b"{\"home\": \"\xff\xfe\"}").unwrap();

        let err = load(temp.path(), Locale::ENGLISH).unwrap_err();

        let expected = temp.path().join("en.json");
        assert!(matches!(err, MergeError::Malformed { ref path, .. } if path == &expected));
    }

    #[test]
    fn test_array_root_is_not_an_object() {
        let err = parse_en(r#"[{"home": {}}]"#).unwrap_err();
        assert!(matches!(err, MergeError::NotAnObject { .. }));
    }

    #[test]
    fn test_string_root_is_not_an_object() {
        let err = parse_en(r#""home""#).unwrap_err();
        assert!(matches!(err, MergeError::NotAnObject { .. }));
    }

    #[test]
    fn test_empty_object_has_no_key() {
        let err = parse_en("{}").unwrap_err();
        assert!(matches!(err, MergeError::NoKey { .. }));
    }

    #[test]
    fn test_two_keys_rejected_with_count() {
        let err = parse_en(r#"{"home": {}, "about": {}}"#).unwrap_err();
        assert!(matches!(err, MergeError::TooManyKeys { count: 2, .. }));
    }

    #[test]
    fn test_null_value_is_missing() {
        let err = parse_en(r#"{"home": null}"#).unwrap_err();
        assert!(matches!(err, MergeError::MissingValue { ref key, .. } if key == "home"));
    }

    // ==================== Loading Tests ====================

    #[test]
    fn test_load_missing_file_is_skipped() {
        let temp = TempDir::new().expect("temp dir");
        let loaded = load(temp.path(), Locale::SPANISH).expect("no error");
        assert!(loaded.is_none());
    }

    #[test]
    fn test_load_reads_locale_file() {
        let temp = TempDir::new().expect("temp dir");
        fs::write(temp.path().join("es.json"), r#"{"home": {"title": "Hola"}}"#).unwrap();
        fs::write(temp.path().join("en.json"), r#"{"home": {"title": "Hi"}}"#).unwrap();

        let fragment = load(temp.path(), Locale::SPANISH)
            .expect("no error")
            .expect("fragment present");

        assert_eq!(fragment.locale, Locale::SPANISH);
        assert_eq!(fragment.payload, json!({"title": "Hola"}));
        assert_eq!(fragment.path, temp.path().join("es.json"));
    }

    #[test]
    fn test_load_directory_named_like_fragment_is_io_error() {
        let temp = TempDir::new().expect("temp dir");
        fs::create_dir(temp.path().join("en.json")).unwrap();

        let err = load(temp.path(), Locale::ENGLISH).unwrap_err();
        assert!(matches!(err, MergeError::Io { .. }));
    }
}
