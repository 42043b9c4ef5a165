//! Error types for uniform sampling.

use thiserror::Error;

/// Uniform sampler error.
///
/// All variants are raised while validating a request, before any sample is
/// produced; a rejected request never yields partial output.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SamplerError {
    /// Caller contract violation at the call boundary.
    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        reason: String,
    },
}

impl SamplerError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}
