//! Site configuration.
//!
//! Every field has a default, so an absent or partial config block still
//! yields a usable site. The page may embed overrides as
//! `<script id="site-config" type="application/json">`; `load` reads it under
//! `csr` and falls back to defaults with a warning when it is unusable.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::state::theme::ThemeState;
use crate::util::reveal::RevealPolicy;
use crate::util::variants::{self, AnimationVariantSet, StaggerSpec};

/// DOM id of the embedded config block.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid site config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("reveal.amount must be within 0.0..=1.0, got {0}")]
    RevealAmount(f64),
    #[error("reveal.item_duration_ms must be positive")]
    ItemDuration,
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub amount: f64,
    pub root_margin_px: i32,
    pub stagger_ms: u32,
    pub delay_children_ms: u32,
    pub item_duration_ms: u32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self { amount: 0.0, root_margin_px: 0, stagger_ms: 100, delay_children_ms: 200, item_duration_ms: 600 }
    }
}

impl RevealConfig {
    #[must_use]
    pub fn policy(&self) -> RevealPolicy {
        RevealPolicy { amount: self.amount, root_margin_px: self.root_margin_px }
    }

    /// Default stagger for section containers.
    #[must_use]
    pub fn stagger(&self) -> StaggerSpec {
        StaggerSpec::new(self.delay_children_ms, self.stagger_ms)
    }

    /// Entrance for the fixed header, played on mount.
    #[must_use]
    pub fn header_entrance(&self) -> AnimationVariantSet {
        variants::fade_down(self.item_duration_ms)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// How long the simulated submission takes to settle.
    pub settle_delay_ms: u32,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self { settle_delay_ms: 3000 }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub initial_theme: ThemeState,
    pub reveal: RevealConfig,
    pub contact: ContactConfig,
}

impl SiteConfig {
    /// Parse and validate a JSON config block.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for malformed JSON or out-of-range values.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns the first out-of-range value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.reveal.amount) {
            return Err(ConfigError::RevealAmount(self.reveal.amount));
        }
        if self.reveal.item_duration_ms == 0 {
            return Err(ConfigError::ItemDuration);
        }
        Ok(())
    }

    /// Read the embedded config block, or defaults.
    #[must_use]
    pub fn load() -> Self {
        #[cfg(feature = "csr")]
        {
            let raw = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
                .and_then(|el| el.text_content());
            match raw {
                Some(raw) if !raw.trim().is_empty() => match Self::from_json(&raw) {
                    Ok(config) => config,
                    Err(err) => {
                        log::warn!("{err}; using defaults");
                        Self::default()
                    }
                },
                _ => Self::default(),
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::default()
        }
    }
}
