//! Shared, immutable generation context.

use crate::corpus::Corpora;
use crate::generator::GeneratorError;
use sampler_core::SchemaStore;

/// Probability that an optional (or recommended) scalar attribute is populated.
///
/// Event samples have historically been described as carrying "20% of optional
/// fields", but the selection they actually perform keeps about 9% of them.
/// The measured figure is what is used here; override it through
/// [`GenerationSettings::optional_probability`].
pub const OPTIONAL_INCLUSION_PROBABILITY: f64 = 0.09;

/// Default minimum length of a generic array attribute.
///
/// Setting it to 0 (`--array-min 0`) allows empty arrays, giving the full
/// `[0, 5)` range.
pub const DEFAULT_ARRAY_MIN: usize = 1;

/// Default exclusive maximum length of a generic array attribute.
pub const DEFAULT_ARRAY_MAX: usize = 5;

/// Tunables for record generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationSettings {
    /// Probability in `[0, 1]` of populating a non-required scalar
    pub optional_probability: f64,
    /// Minimum generic array length (inclusive)
    pub array_min: usize,
    /// Maximum generic array length (exclusive)
    pub array_max: usize,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            optional_probability: OPTIONAL_INCLUSION_PROBABILITY,
            array_min: DEFAULT_ARRAY_MIN,
            array_max: DEFAULT_ARRAY_MAX,
        }
    }
}

impl GenerationSettings {
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if !(0.0..=1.0).contains(&self.optional_probability) {
            return Err(GeneratorError::InvalidSettings(format!(
                "optional probability {} is outside [0, 1]",
                self.optional_probability
            )));
        }
        if self.array_min >= self.array_max {
            return Err(GeneratorError::InvalidSettings(format!(
                "array length range [{}, {}) is empty",
                self.array_min, self.array_max
            )));
        }
        Ok(())
    }
}

/// Everything generation reads: corpora, schema, and settings.
///
/// Built once at startup from fully loaded corpora and shared read-only
/// (typically behind an `Arc`) by every generator.
#[derive(Debug)]
pub struct SamplerContext<S> {
    corpora: Corpora,
    schema: S,
    settings: GenerationSettings,
}

impl<S: SchemaStore> SamplerContext<S> {
    /// Create a context with default settings.
    pub fn new(corpora: Corpora, schema: S) -> Self {
        Self {
            corpora,
            schema,
            settings: GenerationSettings::default(),
        }
    }

    /// Replace the settings after validating them.
    pub fn with_settings(mut self, settings: GenerationSettings) -> Result<Self, GeneratorError> {
        settings.validate()?;
        self.settings = settings;
        Ok(self)
    }

    pub fn corpora(&self) -> &Corpora {
        &self.corpora
    }

    pub fn schema(&self) -> &S {
        &self.schema
    }

    pub fn settings(&self) -> &GenerationSettings {
        &self.settings
    }
}
