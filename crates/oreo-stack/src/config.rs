//! Feedback configuration.

use serde::{Deserialize, Serialize};

use crate::feedback::Cue;

/// Errors from validating configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A cue has no audio source.
    #[error("cue {0:?} has an empty source")]
    EmptySource(Cue),

    /// The finish sequence would schedule every cue at once.
    #[error("cue interval must be positive")]
    ZeroInterval,
}

/// Audio source URL for each [`Cue`].
///
/// Defaults point at `/sounds/<key>.mp3`, served as static files next
/// to the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CueSources {
    /// Short "O", played per cookie.
    pub o: String,
    /// Long "OOO", the all-cookie celebration.
    pub ooo: String,
    /// Short "RE", played per filling.
    pub re: String,
    /// Long "REE", the all-filling celebration.
    pub ree: String,
}

impl CueSources {
    /// Source URL for `cue`.
    #[must_use]
    pub fn source(&self, cue: Cue) -> &str {
        match cue {
            Cue::O => &self.o,
            Cue::Ooo => &self.ooo,
            Cue::Re => &self.re,
            Cue::Ree => &self.ree,
        }
    }
}

impl Default for CueSources {
    fn default() -> Self {
        let url = |cue: Cue| format!("/sounds/{}.mp3", cue.key());
        Self {
            o: url(Cue::O),
            ooo: url(Cue::Ooo),
            re: url(Cue::Re),
            ree: url(Cue::Ree),
        }
    }
}

/// Settings for the audio played while building and finishing.
///
/// All fields have defaults matching the shipped behavior, and missing
/// fields are filled in when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackConfig {
    /// Delay between consecutive cue start times in the finish
    /// sequence, in milliseconds.
    pub cue_interval_ms: u32,

    /// A tower made of only one kind of part gets the celebration cue
    /// once it has strictly more than this many parts.
    pub celebration_threshold: usize,

    /// Where each cue is loaded from.
    pub sources: CueSources,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            cue_interval_ms: 300,
            celebration_threshold: 5,
            sources: CueSources::default(),
        }
    }
}

impl FeedbackConfig {
    /// Check that the configuration can drive playback.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroInterval`] if `cue_interval_ms` is 0.
    /// Returns [`ConfigError::EmptySource`] for the first cue whose
    /// source is blank.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cue_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        for cue in Cue::ALL {
            if self.sources.source(cue).trim().is_empty() {
                return Err(ConfigError::EmptySource(cue));
            }
        }
        Ok(())
    }

    /// Return `self` if it passes [`validate`](Self::validate).
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] from [`validate`](Self::validate).
    pub fn validated(self) -> Result<Self, ConfigError> {
        self.validate()?;
        Ok(self)
    }
}
