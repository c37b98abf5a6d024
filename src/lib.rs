//! FridgeChef: an AI recipe generator for whatever is in the fridge.
//!
//! FridgeChef collects an ingredient inventory and a meal type, asks Google
//! Gemini for a structured recipe, then asks for a picture of the dish:
//! - Normalized, deduplicated ingredient inventory
//! - Schema-constrained recipe text with explicit validation
//! - Best-effort 16:9 dish image delivered after the recipe is shown
//! - Stale results fenced off by a per-request generation token
//! - Terminal recipe card rendering with theme support

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal front-end (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Session controller (session.rs)                    │  ← Action execution
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Input parsing                                    │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Worker Layer  │   │ Client Layer  │
//! │ (ui/)         │   │ (worker/)     │   │ (client/)     │
//! │ - Rendering   │   │ - Async tasks │   │ - Gemini REST │
//! │ - Theming     │   │ - Responses   │   │ - Prompts     │
//! │ - Components  │   │ - Trace links │   │ - Schema      │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! │  - Recipe, ingredients, meal type, generation       │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing                            │
//! │  - File-based OTLP export                           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`client`]: Recipe generation trait and the Gemini implementation
//! - [`domain`]: Core domain types (Recipe, ingredients, errors)
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`session`]: Action execution and worker response delivery
//! - [`worker`]: Background generation tasks
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: OpenTelemetry tracing
//!
//! # Configuration
//!
//! Settings come from `~/.config/fridgechef/config.toml` (or `--config`),
//! then the environment, then command line flags:
//!
//! ```toml
//! api_key = "..."            # or GEMINI_API_KEY / API_KEY
//! meal_type = "salad"
//! theme = "catppuccin-mocha"
//! trace_level = "debug"
//! width = 100
//! ```
//!
//! # Example
//!
//! ```rust
//! use fridgechef::{handle_event, initialize, Action, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//!
//! handle_event(&mut state, &Event::AddIngredient("Spinach".to_string()))?;
//! let (_, actions) = handle_event(&mut state, &Event::Generate)?;
//!
//! assert!(state.request.is_loading());
//! assert!(matches!(actions.as_slice(), [Action::PostToWorker(_)]));
//! # Ok::<(), fridgechef::FridgeChefError>(())
//! ```

pub mod app;
pub mod client;
pub mod domain;
pub mod infrastructure;
pub mod session;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, parse_line, Action, AppState, Event, Input, RequestState};
pub use client::{GeminiClient, GeminiConfig, RecipeGenerator};
pub use domain::{FridgeChefError, Generation, MealType, Recipe, Result};
pub use session::Session;
pub use ui::Theme;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variables checked for the API key, in order.
pub const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

/// File name of the configuration file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application configuration.
///
/// Every key is optional. Unknown keys are rejected so typos surface early.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Gemini API key.
    ///
    /// Overridden by `GEMINI_API_KEY`, then `API_KEY`, when set.
    pub api_key: Option<String>,

    /// REST base URL, for proxies and tests.
    pub base_url: Option<String>,

    /// Model used for recipe text.
    pub text_model: Option<String>,

    /// Model used for the dish image.
    pub image_model: Option<String>,

    /// Per-request timeout in seconds.
    pub timeout_seconds: Option<u64>,

    /// Meal type selected at startup. Default: `Main Meal`
    pub meal_type: MealType,

    /// Built-in theme name to use.
    ///
    /// Options: `noir`, `catppuccin-mocha`, `catppuccin-latte`. Ignored if
    /// `theme_file` is set.
    #[serde(rename = "theme")]
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme`. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// Tracing filter for exported spans.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,

    /// Render width in columns. Default: 80
    pub width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            text_model: None,
            image_model: None,
            timeout_seconds: None,
            meal_type: MealType::default(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
            width: app::state::DEFAULT_WIDTH,
        }
    }
}

impl Config {
    /// Parses configuration from TOML text.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fridgechef::{Config, MealType};
    ///
    /// let config = Config::from_toml_str("meal_type = \"salad\"\ntheme = \"noir\"").unwrap();
    /// assert_eq!(config.meal_type, MealType::Salad);
    /// assert_eq!(config.theme_name.as_deref(), Some("noir"));
    /// assert_eq!(config.width, 80);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`FridgeChefError::Config`] for malformed TOML, unknown keys or
    /// invalid values.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents)
            .map_err(|e| FridgeChefError::Config(format!("failed to parse config: {e}")))
    }

    /// Reads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`FridgeChefError::Config`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            FridgeChefError::Config(format!("failed to read config file {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&contents)
    }

    /// Loads configuration, then applies environment overrides.
    ///
    /// An explicit `path` must exist. Without one, `<config_dir>/config.toml`
    /// is used when present and defaults otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`FridgeChefError::Config`] if a config file exists but is
    /// invalid, or if an explicit path cannot be read.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = Self::default_path();
                if default_path.is_file() {
                    Self::from_file(&default_path)?
                } else {
                    Self::default()
                }
            }
        };

        config.apply_env(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// `<config_dir>/config.toml`.
    #[must_use]
    pub fn default_path() -> PathBuf {
        infrastructure::paths::get_config_dir().join(CONFIG_FILE_NAME)
    }

    /// Overrides the API key from the first non-blank variable in
    /// [`API_KEY_VARS`].
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = API_KEY_VARS
            .iter()
            .filter_map(|name| lookup(name))
            .find(|value| !value.trim().is_empty())
        {
            self.api_key = Some(key);
        }
    }

    /// Builds the Gemini client settings from this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FridgeChefError::Config`] when no API key is configured.
    pub fn gemini_config(&self) -> Result<GeminiConfig> {
        let api_key = self
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                FridgeChefError::Config(
                    "missing API key: set GEMINI_API_KEY or api_key in config.toml".to_string(),
                )
            })?;

        let mut gemini = GeminiConfig::new(api_key);
        if let Some(base_url) = &self.base_url {
            gemini = gemini.with_base_url(base_url.trim_end_matches('/'));
        }
        if let Some(model) = &self.text_model {
            gemini.text_model.clone_from(model);
        }
        if let Some(model) = &self.image_model {
            gemini.image_model.clone_from(model);
        }
        if let Some(timeout) = self.timeout_seconds {
            gemini.timeout_seconds = timeout;
        }
        Ok(gemini)
    }
}

/// Creates the initial application state from configuration.
///
/// Loads the theme (from file, name, or default), selects the configured
/// meal type and applies the render width. Theme problems are logged and fall
/// back to the default theme rather than failing startup.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing fridgechef session state");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(infrastructure::expand_tilde(theme_file)).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    let mut state = AppState::new(theme);
    state.meal_type = config.meal_type;
    state.width = config.width;
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_keys_are_rejected() {
        let err = Config::from_toml_str("scan_depth = 4").unwrap_err();
        assert!(matches!(err, FridgeChefError::Config(_)));
    }

    #[test]
    fn bad_meal_type_is_config_error() {
        assert!(Config::from_toml_str("meal_type = \"dessert\"").is_err());
    }

    #[test]
    fn env_overrides_in_order() {
        let mut config = Config {
            api_key: Some("from-file".to_string()),
            ..Config::default()
        };
        config.apply_env(|name| (name == "API_KEY").then(|| "fallback".to_string()));
        assert_eq!(config.api_key.as_deref(), Some("fallback"));

        config.apply_env(|name| Some(format!("{name}-value")));
        assert_eq!(config.api_key.as_deref(), Some("GEMINI_API_KEY-value"));

        config.apply_env(|_| Some("  ".to_string()));
        assert_eq!(config.api_key.as_deref(), Some("GEMINI_API_KEY-value"));
    }

    #[test]
    fn gemini_config_requires_key() {
        assert!(matches!(
            Config::default().gemini_config(),
            Err(FridgeChefError::Config(_))
        ));

        let config = Config::from_toml_str(
            "api_key = \"k\"\nbase_url = \"http://localhost:9/\"\ntext_model = \"m\"\ntimeout_seconds = 5",
        )
        .unwrap();
        let gemini = config.gemini_config().unwrap();
        assert_eq!(gemini.api_key, "k");
        assert_eq!(gemini.base_url, "http://localhost:9");
        assert_eq!(gemini.text_model, "m");
        assert_eq!(gemini.image_model, client::gemini::DEFAULT_IMAGE_MODEL);
        assert_eq!(gemini.timeout_seconds, 5);
    }

    #[test]
    fn loads_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "width = 100\ntheme = \"catppuccin-latte\"\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.width, 100);

        let state = initialize(&config);
        assert_eq!(state.theme.name, "catppuccin-latte");
        assert_eq!(state.width, 100);
    }

    #[test]
    fn missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load(Some(&dir.path().join("nope.toml"))).is_err());
    }

    #[test]
    fn unknown_theme_falls_back() {
        let config = Config {
            theme_name: Some("sepia".to_string()),
            meal_type: MealType::Appetizer,
            ..Config::default()
        };
        let state = initialize(&config);
        assert_eq!(state.theme, Theme::default());
        assert_eq!(state.meal_type, MealType::Appetizer);
    }
}
