//! Domain types shared across the model, views and controller.

use serde::Serialize;

// ============================================================================
// FIELDS
// ============================================================================

/// One of the three editable text fields held by the Model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Version,
    Credits,
}

impl Field {
    /// Map a controller command key to the field it edits.
    ///
    /// Keys are case-sensitive: only `t`, `v` and `c` are recognized.
    pub fn from_key(key: char) -> Option<Field> {
        match key {
            't' => Some(Field::Title),
            'v' => Some(Field::Version),
            'c' => Some(Field::Credits),
            _ => None,
        }
    }
}

// ============================================================================
// SNAPSHOTS
// ============================================================================

/// Plain copy of the Model's field values, for machine-readable output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelSnapshot {
    pub title: String,
    pub version: String,
    pub credits: String,
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Output format for broadcasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Caption lines followed by the command menu.
    #[default]
    Human,
    /// One JSON object per broadcast.
    Json,
}

/// When to emit terminal colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Color only when the sink is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve the mode against whether the sink is a terminal.
    pub fn enabled(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Application configuration, assembled from the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    pub format: OutputFormat,
    pub color: ColorMode,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_keys_map_to_fields() {
        assert_eq!(Field::from_key('t'), Some(Field::Title));
        assert_eq!(Field::from_key('v'), Some(Field::Version));
        assert_eq!(Field::from_key('c'), Some(Field::Credits));
    }

    #[test]
    fn command_keys_are_case_sensitive() {
        assert_eq!(Field::from_key('T'), None);
        assert_eq!(Field::from_key('q'), None);
        assert_eq!(Field::from_key(' '), None);
    }

    #[test]
    fn color_mode_resolution() {
        assert!(ColorMode::Auto.enabled(true));
        assert!(!ColorMode::Auto.enabled(false));
        assert!(ColorMode::Always.enabled(false));
        assert!(!ColorMode::Never.enabled(true));
    }

    #[test]
    fn snapshot_serializes_field_names() {
        let snapshot = ModelSnapshot {
            title: "T".to_string(),
            version: "1".to_string(),
            credits: "me".to_string(),
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        assert_eq!(json, r#"{"title":"T","version":"1","credits":"me"}"#);
    }

    #[test]
    fn config_defaults_to_human_auto() {
        let config = Config::default();
        assert_eq!(config.format, OutputFormat::Human);
        assert_eq!(config.color, ColorMode::Auto);
    }
}
