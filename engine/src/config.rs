use serde::Deserialize;
use std::{
    env, fs,
    path::{Path, PathBuf},
    time::Duration,
};
use thiserror::Error;

use peaky_types::ui::UiOptions;

use crate::carousel::CarouselTimings;

const REDUCED_MOTION_ENV: &str = "PEAKY_REDUCED_MOTION";

#[derive(Debug, Default, Deserialize)]
pub struct PeakyConfig {
    pub app: Option<AppConfig>,
    pub carousel: Option<CarouselConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config at {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// "full" (alternate screen) or "inline".
    pub tui: Option<String>,
    /// Use ASCII-only glyphs for icons and indicators.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Disable autoplay and timed transitions.
    #[serde(default)]
    pub reduced_motion: bool,
    /// Path opened at startup. Defaults to `/`.
    pub start_path: Option<String>,
}

/// Showcase carousel tuning.
///
/// ```toml
/// [carousel]
/// autoplay_interval_ms = 5000
/// cooldown_ms = 3000
/// swipe_threshold = 50
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct CarouselConfig {
    pub autoplay_interval_ms: Option<u64>,
    pub cooldown_ms: Option<u64>,
    pub swipe_threshold: Option<i32>,
}

impl CarouselConfig {
    #[must_use]
    pub fn timings(&self) -> CarouselTimings {
        let defaults = CarouselTimings::default();

        let autoplay_interval = match self.autoplay_interval_ms {
            Some(0) => {
                tracing::warn!("carousel.autoplay_interval_ms must be positive; using default");
                defaults.autoplay_interval
            }
            Some(ms) => Duration::from_millis(ms),
            None => defaults.autoplay_interval,
        };

        let swipe_threshold = match self.swipe_threshold {
            Some(threshold) if threshold < 0 => {
                tracing::warn!(threshold, "carousel.swipe_threshold is negative; using default");
                defaults.swipe_threshold
            }
            Some(threshold) => threshold,
            None => defaults.swipe_threshold,
        };

        CarouselTimings {
            autoplay_interval,
            cooldown: self
                .cooldown_ms
                .map_or(defaults.cooldown, Duration::from_millis),
            swipe_threshold,
        }
    }
}

impl PeakyConfig {
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    /// Load from an explicit path. A missing file is not an error.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    #[must_use]
    pub fn carousel_timings(&self) -> CarouselTimings {
        self.carousel
            .as_ref()
            .map(CarouselConfig::timings)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn start_path(&self) -> Option<&str> {
        self.app.as_ref().and_then(|app| app.start_path.as_deref())
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        let app = self.app.as_ref();
        UiOptions {
            ascii_only: app.is_some_and(|cfg| cfg.ascii_only),
            high_contrast: app.is_some_and(|cfg| cfg.high_contrast),
            reduced_motion: app.is_some_and(|cfg| cfg.reduced_motion),
        }
    }
}

/// Resolve UI options from an optional config plus the environment.
///
/// `PEAKY_REDUCED_MOTION` wins over the config file when it parses.
#[must_use]
pub fn resolve_ui_options(config: Option<&PeakyConfig>) -> UiOptions {
    let env_override = env::var(REDUCED_MOTION_ENV)
        .ok()
        .and_then(|raw| parse_flag(&raw));
    apply_reduced_motion_override(
        config.map(PeakyConfig::ui_options).unwrap_or_default(),
        env_override,
    )
}

fn apply_reduced_motion_override(mut options: UiOptions, value: Option<bool>) -> UiOptions {
    if let Some(reduced_motion) = value {
        options.reduced_motion = reduced_motion;
    }
    options
}

/// Parse a boolean-ish environment value.
#[must_use]
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        other => {
            tracing::warn!("Ignoring unrecognized flag value: {}", other);
            None
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".peaky").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty_config() {
        let config: PeakyConfig = toml::from_str("").unwrap();
        assert!(config.app.is_none());
        assert!(config.carousel.is_none());
        assert_eq!(config.carousel_timings(), CarouselTimings::default());
        assert_eq!(config.ui_options(), UiOptions::default());
    }

    #[test]
    fn parse_app_config() {
        let toml_str = r#"
[app]
tui = "inline"
ascii_only = true
high_contrast = false
reduced_motion = true
start_path = "/privacy"
"#;
        let config: PeakyConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.start_path(), Some("/privacy"));
        let app = config.app.as_ref().unwrap();
        assert_eq!(app.tui.as_deref(), Some("inline"));
        let options = config.ui_options();
        assert!(options.ascii_only);
        assert!(!options.high_contrast);
        assert!(options.reduced_motion);
    }

    #[test]
    fn parse_carousel_config() {
        let toml_str = r#"
[carousel]
autoplay_interval_ms = 7000
cooldown_ms = 1500
swipe_threshold = 30
"#;
        let config: PeakyConfig = toml::from_str(toml_str).unwrap();
        let timings = config.carousel_timings();
        assert_eq!(timings.autoplay_interval, Duration::from_millis(7000));
        assert_eq!(timings.cooldown, Duration::from_millis(1500));
        assert_eq!(timings.swipe_threshold, 30);
    }

    #[test]
    fn partial_carousel_config_keeps_defaults() {
        let config: PeakyConfig = toml::from_str("[carousel]\ncooldown_ms = 10\n").unwrap();
        let timings = config.carousel_timings();
        assert_eq!(timings.cooldown, Duration::from_millis(10));
        assert_eq!(
            timings.autoplay_interval,
            CarouselTimings::default().autoplay_interval
        );
    }

    #[test]
    fn invalid_carousel_values_fall_back() {
        let config: PeakyConfig =
            toml::from_str("[carousel]\nautoplay_interval_ms = 0\nswipe_threshold = -5\n")
                .unwrap();
        assert_eq!(config.carousel_timings(), CarouselTimings::default());
    }

    #[test]
    fn flag_parsing() {
        assert_eq!(parse_flag("1"), Some(true));
        assert_eq!(parse_flag(" TRUE "), Some(true));
        assert_eq!(parse_flag("off"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn reduced_motion_override_wins() {
        let base = UiOptions {
            reduced_motion: true,
            ..UiOptions::default()
        };
        assert!(!apply_reduced_motion_override(base, Some(false)).reduced_motion);
        assert!(apply_reduced_motion_override(base, None).reduced_motion);
    }

    #[test]
    fn load_from_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = PeakyConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn load_from_reports_parse_errors_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[app\nreduced_motion = true").unwrap();
        let err = PeakyConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert_eq!(err.path(), &path);
    }

    #[test]
    fn load_from_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[app]\nhigh_contrast = true\n").unwrap();
        let config = PeakyConfig::load_from(&path).unwrap().unwrap();
        assert!(config.ui_options().high_contrast);
    }
}
