//! Uniform sampling request configuration.
//!
//! This module provides [`UniformConfig`], the named-field request
//! `{count, min, max, seed}` with defaults `min = 0.0`, `max = 1.0` and
//! `seed = 1`, and its validating builder.

use crate::error::SamplerError;

/// Default lower bound of the target interval.
pub const DEFAULT_MIN: f64 = 0.0;

/// Default upper bound of the target interval.
pub const DEFAULT_MAX: f64 = 1.0;

/// Default seed forwarded to the engine.
pub const DEFAULT_SEED: u32 = 1;

/// Largest number of realisations a single request may ask for.
pub const MAX_COUNT: u32 = u32::MAX;

/// Uniform sampling request.
///
/// Immutable once built. Bounds are validated by
/// [`UniformConfigBuilder::build`], or left unchecked when assembled
/// internally by [`sample_uniform`](crate::sample_uniform). `min > max` is
/// accepted and maps the stream onto the interval in reversed orientation;
/// the bounds are never swapped.
///
/// # Examples
///
/// ```rust
/// use uniform_sampler::UniformConfig;
///
/// // Defaults: [0, 1], seed 1
/// let config = UniformConfig::new(100);
/// assert_eq!(config.min(), 0.0);
/// assert_eq!(config.max(), 1.0);
/// assert_eq!(config.seed(), 1);
///
/// // Explicit overrides
/// let config = UniformConfig::builder()
///     .count(1_000)
///     .min(10.0)
///     .max(20.0)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
/// assert_eq!(config.count(), 1_000);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "UniformConfigBuilder")
)]
pub struct UniformConfig {
    /// Number of realisations requested.
    count: u32,
    /// Interval bound mapped from raw value `0`.
    min: f64,
    /// Interval bound mapped from raw value `CounterEngine::MAX`.
    max: f64,
    /// Engine seed.
    seed: u32,
}

impl UniformConfig {
    /// Creates a request for `count` samples on `[0, 1]` with seed `1`.
    #[inline]
    pub fn new(count: u32) -> Self {
        Self {
            count,
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            seed: DEFAULT_SEED,
        }
    }

    /// Assembles a request without validating the bounds.
    #[inline]
    pub(crate) fn from_parts(count: u32, min: f64, max: f64, seed: u32) -> Self {
        Self {
            count,
            min,
            max,
            seed,
        }
    }

    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> UniformConfigBuilder {
        UniformConfigBuilder::default()
    }

    /// Returns the number of realisations requested.
    #[inline]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Returns the bound mapped from raw value `0`.
    #[inline]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Returns the bound mapped from the engine ceiling.
    #[inline]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Returns the engine seed.
    #[inline]
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Returns `true` when `min > max`.
    #[inline]
    pub fn is_reversed(&self) -> bool {
        self.min > self.max
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SamplerError::InvalidArgument`] if either bound is NaN or
    /// infinite.
    pub fn validate(&self) -> Result<(), SamplerError> {
        if !self.min.is_finite() {
            return Err(SamplerError::invalid(
                "min",
                format!("must be finite, got {}", self.min),
            ));
        }
        if !self.max.is_finite() {
            return Err(SamplerError::invalid(
                "max",
                format!("must be finite, got {}", self.max),
            ));
        }
        Ok(())
    }
}

/// Builder for [`UniformConfig`].
///
/// `count` is accepted as a signed integer so that binding layers can pass
/// host integers straight through; range checking happens in
/// [`build`](Self::build).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default))]
pub struct UniformConfigBuilder {
    count: Option<i64>,
    min: f64,
    max: f64,
    seed: u32,
}

impl Default for UniformConfigBuilder {
    fn default() -> Self {
        Self {
            count: None,
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            seed: DEFAULT_SEED,
        }
    }
}

impl UniformConfigBuilder {
    /// Sets the number of realisations.
    ///
    /// # Arguments
    ///
    /// * `count` - Number of samples in `[0, u32::MAX]`
    #[inline]
    pub fn count(mut self, count: impl Into<i64>) -> Self {
        self.count = Some(count.into());
        self
    }

    /// Sets the bound mapped from raw value `0`.
    #[inline]
    pub fn min(mut self, min: f64) -> Self {
        self.min = min;
        self
    }

    /// Sets the bound mapped from the engine ceiling.
    #[inline]
    pub fn max(mut self, max: f64) -> Self {
        self.max = max;
        self
    }

    /// Sets both bounds at once.
    #[inline]
    pub fn interval(self, min: f64, max: f64) -> Self {
        self.min(min).max(max)
    }

    /// Sets the engine seed.
    #[inline]
    pub fn seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SamplerError::InvalidArgument`] if:
    /// - `count` is not set, negative, or above [`MAX_COUNT`]
    /// - `min` or `max` is not finite
    pub fn build(self) -> Result<UniformConfig, SamplerError> {
        let raw = self
            .count
            .ok_or_else(|| SamplerError::invalid("count", "must be specified"))?;

        if raw < 0 {
            return Err(SamplerError::invalid(
                "count",
                format!("must be non-negative, got {}", raw),
            ));
        }
        let count = u32::try_from(raw).map_err(|_| {
            SamplerError::invalid("count", format!("must not exceed {}, got {}", MAX_COUNT, raw))
        })?;

        let config = UniformConfig {
            count,
            min: self.min,
            max: self.max,
            seed: self.seed,
        };

        config.validate()?;
        Ok(config)
    }
}

impl TryFrom<UniformConfigBuilder> for UniformConfig {
    type Error = SamplerError;

    fn try_from(builder: UniformConfigBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}
