use std::path::PathBuf;

/// Default directory walked for fragment directories.
pub const DEFAULT_SOURCE_ROOT: &str = "src";

/// Default directory the merged per-locale files are written to.
pub const DEFAULT_OUTPUT_DIR: &str = "src/messages";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Root of the tree searched for `i18n` directories
    pub source_root: PathBuf,

    /// Directory holding one `{locale}.json` per registered locale
    pub output_dir: PathBuf,

    /// Validate and merge without writing any output file
    pub check_only: bool,
}

impl Config {
    pub fn new(source_root: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_root: source_root.into(),
            output_dir: output_dir.into(),
            check_only: false,
        }
    }

    /// Build the configuration from the environment.
    ///
    /// Every variable is optional:
    /// - `I18N_SOURCE_ROOT` (defaults to `src`)
    /// - `I18N_OUTPUT_DIR` (defaults to `src/messages`)
    /// - `I18N_CHECK` (`1` or `true` enables check-only mode)
    pub fn from_env() -> Self {
        Self {
            source_root: std::env::var("I18N_SOURCE_ROOT")
                .unwrap_or_else(|_| DEFAULT_SOURCE_ROOT.to_string())
                .into(),
            output_dir: std::env::var("I18N_OUTPUT_DIR")
                .unwrap_or_else(|_| DEFAULT_OUTPUT_DIR.to_string())
                .into(),
            check_only: std::env::var("I18N_CHECK")
                .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true"))
                .unwrap_or(false),
        }
    }

    pub fn with_check_only(mut self, check_only: bool) -> Self {
        self.check_only = check_only;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        std::env::remove_var("I18N_SOURCE_ROOT");
        std::env::remove_var("I18N_OUTPUT_DIR");
        std::env::remove_var("I18N_CHECK");
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();

        let config = Config::from_env();

        assert_eq!(config, Config::new("src", "src/messages"));
        assert!(!config.check_only);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var("I18N_SOURCE_ROOT", "app");
        std::env::set_var("I18N_OUTPUT_DIR", "public/locales");
        std::env::set_var("I18N_CHECK", "TRUE");

        let config = Config::from_env();
        clear_env();

        assert_eq!(config.source_root, PathBuf::from("app"));
        assert_eq!(config.output_dir, PathBuf::from("public/locales"));
        assert!(config.check_only);
    }

    #[test]
    #[serial]
    fn test_check_flag_ignores_other_values() {
        clear_env();
        std::env::set_var("I18N_CHECK", "yes");

        let config = Config::from_env();
        clear_env();

        assert!(!config.check_only);
    }

    #[test]
    fn test_with_check_only() {
        let config = Config::new("src", "out").with_check_only(true);
        assert!(config.check_only);
    }
}
