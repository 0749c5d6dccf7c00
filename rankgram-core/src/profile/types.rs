//! Analyzer type and limits.

use rankgram_types::{ProfileConfig, Result};

/// Profile builder holding explicit, read-only configuration.
///
/// Every call owns its working data, so one analyzer can be shared across
/// threads and reused for any number of texts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProfileAnalyzer {
    pub(crate) config: ProfileConfig,
}

impl ProfileAnalyzer {
    /// Creates an analyzer without validating `config`.
    pub const fn new(config: ProfileConfig) -> Self {
        Self { config }
    }

    /// Creates an analyzer after validating `config`.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::GramDepthTooLarge` if the gram depth exceeds
    /// `MAX_GRAM_DEPTH`.
    pub fn try_new(config: ProfileConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Default settings with the given gram depth.
    pub const fn with_gram_depth(gram_depth: usize) -> Self {
        Self::new(ProfileConfig::new().with_gram_depth(gram_depth))
    }

    /// The analyzer's configuration.
    #[inline(always)]
    #[must_use]
    pub const fn config(&self) -> &ProfileConfig {
        &self.config
    }
}
