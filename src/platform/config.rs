// logdiff - platform/config.rs
//
// Optional config.toml loading with startup validation.
//
// The file is read only when the user passes --config; a default run reads no
// configuration at all. Invalid values produce actionable warnings and fall
// back to defaults, while an unreadable or unparseable file is an error
// because the user explicitly asked for it.

use crate::core::pairing::PairingConfig;
use crate::util::constants;
use crate::util::error::ConfigError;
use std::path::Path;

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[discovery]` section.
    pub discovery: DiscoverySection,
    /// `[output]` section.
    pub output: OutputSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[discovery]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct DiscoverySection {
    /// Maximum directory recursion depth.
    pub max_depth: Option<usize>,
    /// Include glob patterns.
    pub include_patterns: Option<Vec<String>>,
}

/// `[output]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct OutputSection {
    /// Name of the saved report inside the newer directory.
    pub file_name: Option<String>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory walk settings.
    pub pairing: PairingConfig,

    /// Name of the saved report inside the newer directory.
    pub output_file_name: String,

    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            pairing: PairingConfig::default(),
            output_file_name: constants::DEFAULT_OUTPUT_FILE_NAME.to_string(),
            log_level: None,
        }
    }
}

/// Load and validate the config file at `path`.
///
/// Returns the validated config and a list of non-fatal warnings.
pub fn load_config(path: &Path) -> Result<(AppConfig, Vec<String>), ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let raw: RawConfig = toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(validate(raw))
}

/// Validate each field against named constants, accumulating all warnings.
pub fn validate(raw: RawConfig) -> (AppConfig, Vec<String>) {
    let mut config = AppConfig::default();
    let mut warnings: Vec<String> = Vec::new();

    // -- Discovery: max_depth --
    if let Some(depth) = raw.discovery.max_depth {
        if (1..=constants::ABSOLUTE_MAX_DEPTH).contains(&depth) {
            config.pairing.max_depth = depth;
        } else {
            warnings.push(format!(
                "[discovery] max_depth = {depth} is out of range (1-{}). Using default ({}).",
                constants::ABSOLUTE_MAX_DEPTH,
                constants::DEFAULT_MAX_DEPTH,
            ));
        }
    }

    // -- Discovery: include_patterns --
    if let Some(patterns) = raw.discovery.include_patterns {
        let invalid: Vec<&String> = patterns
            .iter()
            .filter(|p| glob::Pattern::new(p).is_err())
            .collect();
        if patterns.is_empty() {
            warnings.push(
                "[discovery] include_patterns is empty. Using default ([\"*.log\"]).".to_string(),
            );
        } else if !invalid.is_empty() {
            warnings.push(format!(
                "[discovery] include_patterns contains invalid glob(s) {invalid:?}. \
                 Using default ([\"*.log\"]).",
            ));
        } else {
            config.pairing.include_patterns = patterns;
        }
    }

    // -- Output: file_name --
    if let Some(name) = raw.output.file_name {
        let is_bare_name = !name.is_empty()
            && Path::new(&name).file_name().and_then(|n| n.to_str()) == Some(name.as_str());
        if is_bare_name {
            config.output_file_name = name;
        } else {
            warnings.push(format!(
                "[output] file_name = \"{name}\" must be a plain file name. Using default ({}).",
                constants::DEFAULT_OUTPUT_FILE_NAME,
            ));
        }
    }

    // -- Logging: level --
    if let Some(level) = raw.logging.level {
        if constants::VALID_LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level);
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: error, warn, info, debug, trace. Using default ({}).",
                constants::DEFAULT_LOG_LEVEL,
            ));
        }
    }

    (config, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn parse(text: &str) -> (AppConfig, Vec<String>) {
        validate(toml::from_str(text).expect("valid toml"))
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let (config, warnings) = parse("");
        assert!(warnings.is_empty());
        assert_eq!(config.output_file_name, "new_messages_output.txt");
        assert_eq!(config.pairing.include_patterns, vec!["*.log".to_string()]);
        assert_eq!(config.pairing.max_depth, constants::DEFAULT_MAX_DEPTH);
        assert!(config.log_level.is_none());
    }

    #[test]
    fn test_valid_values_applied() {
        let (config, warnings) = parse(
            r#"
            [discovery]
            max_depth = 3
            include_patterns = ["*.log", "*.txt"]

            [output]
            file_name = "diff.txt"

            [logging]
            level = "debug"
            "#,
        );
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
        assert_eq!(config.pairing.max_depth, 3);
        assert_eq!(config.pairing.include_patterns.len(), 2);
        assert_eq!(config.output_file_name, "diff.txt");
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_out_of_range_values_warn_and_fall_back() {
        let (config, warnings) = parse(
            r#"
            [discovery]
            max_depth = 0
            include_patterns = ["[bad"]

            [output]
            file_name = "../escape.txt"

            [logging]
            level = "loud"
            "#,
        );
        assert_eq!(warnings.len(), 4, "got: {warnings:?}");
        assert_eq!(config.pairing.max_depth, constants::DEFAULT_MAX_DEPTH);
        assert_eq!(config.pairing.include_patterns, vec!["*.log".to_string()]);
        assert_eq!(config.output_file_name, "new_messages_output.txt");
        assert!(config.log_level.is_none());
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let (_, warnings) = parse("[ui]\ntheme = \"dark\"\n");
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config(&dir.path().join("nope.toml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_load_unparseable_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[discovery\nmax_depth = ").unwrap();
        assert!(matches!(
            load_config(&path),
            Err(ConfigError::TomlParse { .. })
        ));
    }
}
