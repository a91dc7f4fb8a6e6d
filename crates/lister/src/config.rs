//! Model-wide configuration.
//!
//! `ListConfig` holds the defaults a [`ListModel`](crate::model::ListModel)
//! applies to rows that do not set their own values, plus the animation
//! attached to deltas emitted by the plain mutators.
//!
//! # Example
//!
//! ```
//! use lister::config::ListConfig;
//! use lister::model::RowAnimation;
//! use lister::EdgeInsets;
//!
//! let config = ListConfig::new()
//!     .with_default_row_height(44.0)
//!     .with_default_edges(EdgeInsets::symmetric(16.0, 0.0))
//!     .with_animation(RowAnimation::Automatic)
//!     .with_empty_titles(true);
//!
//! assert_eq!(config.default_row_height(), 44.0);
//! ```
//!
//! The same settings can be loaded from TOML:
//!
//! ```
//! use lister::config::ListConfig;
//!
//! let config = ListConfig::from_toml_str(r#"
//!     default_row_height = 52.0
//!     animation = "top"
//!
//!     [default_edges]
//!     left = 12.0
//!     right = 12.0
//! "#).unwrap();
//!
//! assert_eq!(config.default_edges().left, 12.0);
//! ```

use lister_core::EdgeInsets;
use lister_core::logging::targets;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::model::RowAnimation;

/// Row height used when neither the row nor the configuration provide one.
pub const DEFAULT_ROW_HEIGHT: f32 = 60.0;

/// Configuration for a list model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    /// Height for rows that do not set their own.
    default_row_height: f32,
    /// Insets for rows that do not set their own.
    default_edges: EdgeInsets,
    /// Animation attached to deltas from the non-`_with` mutators.
    animation: RowAnimation,
    /// Report missing header/footer titles as `Some("")` instead of `None`.
    empty_titles: bool,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            default_row_height: DEFAULT_ROW_HEIGHT,
            default_edges: EdgeInsets::ZERO,
            animation: RowAnimation::default(),
            empty_titles: false,
        }
    }
}

impl ListConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from TOML and validate it.
    ///
    /// Missing keys take their default values.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        tracing::debug!(target: targets::CONFIG, ?config, "loaded list configuration");
        Ok(config)
    }

    /// Check that the stored values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_valid_height(self.default_row_height) {
            return Err(ConfigError::InvalidRowHeight(self.default_row_height));
        }
        let e = self.default_edges;
        if [e.top, e.left, e.bottom, e.right]
            .iter()
            .any(|v| !v.is_finite() || *v < 0.0)
        {
            return Err(ConfigError::InvalidInsets(e));
        }
        Ok(())
    }

    /// Set the height for rows that do not set their own.
    pub fn with_default_row_height(mut self, height: f32) -> Self {
        self.default_row_height = height;
        self
    }

    /// Set the insets for rows that do not set their own.
    pub fn with_default_edges(mut self, edges: EdgeInsets) -> Self {
        self.default_edges = edges;
        self
    }

    /// Set the animation used by the plain mutators.
    pub fn with_animation(mut self, animation: RowAnimation) -> Self {
        self.animation = animation;
        self
    }

    /// Report missing header/footer titles as empty strings.
    pub fn with_empty_titles(mut self, empty_titles: bool) -> Self {
        self.empty_titles = empty_titles;
        self
    }

    /// The default row height.
    ///
    /// Falls back to [`DEFAULT_ROW_HEIGHT`] if the stored value is not a
    /// positive finite number.
    pub fn default_row_height(&self) -> f32 {
        if is_valid_height(self.default_row_height) {
            self.default_row_height
        } else {
            DEFAULT_ROW_HEIGHT
        }
    }

    /// The default row insets.
    pub fn default_edges(&self) -> EdgeInsets {
        self.default_edges
    }

    /// The animation used by the plain mutators.
    pub fn animation(&self) -> RowAnimation {
        self.animation
    }

    /// Whether missing titles are reported as empty strings.
    pub fn empty_titles(&self) -> bool {
        self.empty_titles
    }
}

pub(crate) fn is_valid_height(height: f32) -> bool {
    height.is_finite() && height > 0.0
}
