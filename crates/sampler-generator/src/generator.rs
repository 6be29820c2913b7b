//! Record generator: walks a class or object definition and assembles a record.

use crate::context::SamplerContext;
use crate::generators::{composite_event_id, digest, numeric, text, DigestAlgorithm};
use crate::overrides::{self, OverrideRule};
use crate::synthesizer::ValueSynthesizer;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sampler_core::{
    ClassDefinition, FieldSpec, GeneratedRecord, GeneratedValue, ObjectDefinition,
    RecordDefinition, SchemaStore, SemanticType,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Definition `type` producing a geolocation record.
pub const LOCATION_TYPE: &str = "location";
/// Definition `type` producing a fingerprint record.
pub const FINGERPRINT_TYPE: &str = "fingerprint";

/// Attribute read as the class id of an event.
pub const CLASS_ID_FIELD: &str = "class_id";
/// Attribute read as the outcome id of an event.
pub const OUTCOME_ID_FIELD: &str = "disposition_id";
/// Attribute set to the composite event identifier.
pub const EVENT_UID_FIELD: &str = "event_uid";

/// Maximum length of `loaded_modules` and `fingerprints` arrays.
pub const MAX_SPECIAL_ARRAY_LEN: usize = 4;
/// Number of words in `image_labels` and `groups` arrays.
pub const LABEL_COUNT: usize = 5;

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Nested object expansion revisited an object already being expanded
    #[error("Schema cycle detected: {path}")]
    SchemaCycle { path: String },

    /// Class not found in schema
    #[error("Class not found: {0}")]
    ClassNotFound(String),

    /// Object not found in schema
    #[error("Object not found: {0}")]
    ObjectNotFound(String),

    /// Generation settings out of range
    #[error("Invalid generation settings: {0}")]
    InvalidSettings(String),
}

/// Generate a top-level event for `class`.
///
/// Returns `Ok(None)` when no class is given.
pub fn generate_event<S: SchemaStore, R: Rng + ?Sized>(
    context: &SamplerContext<S>,
    class: Option<&ClassDefinition>,
    rng: &mut R,
) -> Result<Option<GeneratedRecord>, GeneratorError> {
    let Some(class) = class else {
        return Ok(None);
    };

    let mut builder = RecordBuilder::new(context, rng);
    builder.root = Some(class.name.clone());
    let mut record = builder.record(class)?;

    let class_id = record
        .get(CLASS_ID_FIELD)
        .and_then(GeneratedValue::as_i64)
        .unwrap_or(class.uid);
    let outcome_id = record
        .get(OUTCOME_ID_FIELD)
        .and_then(GeneratedValue::as_i64)
        .unwrap_or(0);
    record.insert(EVENT_UID_FIELD, composite_event_id(class_id, outcome_id));

    debug!(
        "Generated '{}' event with {} attributes",
        class.name,
        record.len()
    );
    Ok(Some(record))
}

/// Generate a standalone instance of `object`.
pub fn generate_object<S: SchemaStore, R: Rng + ?Sized>(
    context: &SamplerContext<S>,
    object: &ObjectDefinition,
    rng: &mut R,
) -> Result<GeneratedRecord, GeneratorError> {
    let mut builder = RecordBuilder::new(context, rng);
    builder.stack.push(object.name.clone());
    builder.record(object)
}

/// One generation call's working state.
struct RecordBuilder<'c, 'r, S, R: ?Sized> {
    context: &'c SamplerContext<S>,
    synthesizer: ValueSynthesizer<'c>,
    rng: &'r mut R,
    /// Class being generated, for diagnostics
    root: Option<String>,
    /// Objects currently being expanded, outermost first
    stack: Vec<String>,
}

impl<'c, 'r, S: SchemaStore, R: Rng + ?Sized> RecordBuilder<'c, 'r, S, R> {
    fn new(context: &'c SamplerContext<S>, rng: &'r mut R) -> Self {
        Self {
            context,
            synthesizer: ValueSynthesizer::new(context.corpora()),
            rng,
            root: None,
            stack: Vec::new(),
        }
    }

    fn record(&mut self, definition: &RecordDefinition) -> Result<GeneratedRecord, GeneratorError> {
        match definition.record_type.as_deref() {
            Some(LOCATION_TYPE) => return Ok(self.location()),
            Some(FINGERPRINT_TYPE) => return Ok(self.fingerprint()),
            _ => {}
        }

        let mut record = GeneratedRecord::new();
        for field in &definition.attributes {
            self.populate(&mut record, &definition.name, field)?;
        }
        Ok(record)
    }

    fn populate(
        &mut self,
        record: &mut GeneratedRecord,
        owner: &str,
        field: &FieldSpec,
    ) -> Result<(), GeneratorError> {
        if overrides::lookup(&field.name) == Some(OverrideRule::Omit) {
            return Ok(());
        }

        if field.is_array {
            if let Some(values) = self.array(owner, field)? {
                record.insert(field.name.clone(), values);
            }
            return Ok(());
        }

        let Some(semantic_type) = field.field_type.as_ref() else {
            warn!(
                "Skipping attribute '{}' of '{}': type is missing",
                field.name, owner
            );
            return Ok(());
        };

        if semantic_type.is_object() {
            if let Some(nested) = self.nested(owner, field)? {
                record.insert(field.name.clone(), nested);
            }
            return Ok(());
        }

        let include = field.is_required()
            || self
                .rng
                .random_bool(self.context.settings().optional_probability);
        if include {
            if let Some(value) =
                self.synthesizer
                    .synthesize(&field.name, semantic_type, field, self.rng)
            {
                record.insert(field.name.clone(), value);
            }
        }
        Ok(())
    }

    /// Resolve and generate a single nested object attribute.
    fn nested(
        &mut self,
        owner: &str,
        field: &FieldSpec,
    ) -> Result<Option<GeneratedRecord>, GeneratorError> {
        let Some(definition) = self.resolve_object(owner, field) else {
            return Ok(None);
        };
        self.expand(definition).map(Some)
    }

    fn resolve_object(&self, owner: &str, field: &FieldSpec) -> Option<&'c ObjectDefinition> {
        let Some(object_type) = field.object_type.as_deref() else {
            warn!(
                "Skipping attribute '{}' of '{}': object type is missing",
                field.name, owner
            );
            return None;
        };
        let context: &'c SamplerContext<S> = self.context;
        let definition = context.schema().object(object_type);
        if definition.is_none() {
            warn!(
                "Skipping attribute '{}' of '{}': object '{}' is not defined",
                field.name, owner, object_type
            );
        }
        definition
    }

    fn expand(&mut self, definition: &ObjectDefinition) -> Result<GeneratedRecord, GeneratorError> {
        if self.stack.iter().any(|name| name == &definition.name) {
            let mut path: Vec<&str> = self.root.iter().map(String::as_str).collect();
            path.extend(self.stack.iter().map(String::as_str));
            path.push(&definition.name);
            return Err(GeneratorError::SchemaCycle {
                path: path.join(" -> "),
            });
        }

        self.stack.push(definition.name.clone());
        let result = self.record(definition);
        self.stack.pop();
        result
    }

    fn array(
        &mut self,
        owner: &str,
        field: &FieldSpec,
    ) -> Result<Option<GeneratedValue>, GeneratorError> {
        let context: &'c SamplerContext<S> = self.context;
        let corpora = context.corpora();
        let values: Vec<GeneratedValue> = match field.name.as_str() {
            "coordinates" => numeric::coordinates(self.rng)
                .into_iter()
                .map(GeneratedValue::Float)
                .collect(),
            "loaded_modules" => {
                let count = self.rng.random_range(0..=MAX_SPECIAL_ARRAY_LEN);
                (0..count)
                    .map(|_| GeneratedValue::String(text::file_path(corpora, self.rng)))
                    .collect()
            }
            "fingerprints" => {
                let count = self.rng.random_range(0..=MAX_SPECIAL_ARRAY_LEN);
                (0..count)
                    .map(|_| GeneratedValue::Object(self.fingerprint()))
                    .collect()
            }
            "image_labels" | "groups" => text::words(corpora, self.rng, LABEL_COUNT)
                .into_iter()
                .map(GeneratedValue::from)
                .collect(),
            _ => return self.generic_array(owner, field),
        };
        Ok(Some(GeneratedValue::Array(values)))
    }

    fn generic_array(
        &mut self,
        owner: &str,
        field: &FieldSpec,
    ) -> Result<Option<GeneratedValue>, GeneratorError> {
        let Some(semantic_type) = field.field_type.as_ref() else {
            warn!(
                "Skipping array attribute '{}' of '{}': type is missing",
                field.name, owner
            );
            return Ok(None);
        };

        let settings = *self.context.settings();
        let count = self.rng.random_range(settings.array_min..settings.array_max);

        if semantic_type.is_object() {
            let Some(definition) = self.resolve_object(owner, field) else {
                return Ok(None);
            };
            let mut items = Vec::with_capacity(count);
            for _ in 0..count {
                items.push(GeneratedValue::Object(self.expand(definition)?));
            }
            return Ok(Some(GeneratedValue::Array(items)));
        }

        let items = (0..count)
            .filter_map(|_| self.element(field, semantic_type))
            .collect();
        Ok(Some(GeneratedValue::Array(items)))
    }

    fn element(&mut self, field: &FieldSpec, semantic_type: &SemanticType) -> Option<GeneratedValue> {
        self.synthesizer
            .synthesize(&field.name, semantic_type, field, self.rng)
    }

    fn location(&mut self) -> GeneratedRecord {
        let context: &'c SamplerContext<S> = self.context;
        let corpora = context.corpora();
        let [longitude, latitude] = numeric::coordinates(self.rng);
        let country = corpora.countries.sample(self.rng);

        let mut record = GeneratedRecord::new();
        record.insert(
            "coordinates",
            vec![GeneratedValue::Float(longitude), GeneratedValue::Float(latitude)],
        );
        record.insert("continent", country.continent_name.as_str());
        record.insert("country", country.country_code.as_str());
        record.insert("city", text::city(corpora, self.rng));
        record.insert("desc", country.country_name.as_str());
        record
    }

    fn fingerprint(&mut self) -> GeneratedRecord {
        let algorithm = DigestAlgorithm::random(self.rng);
        let context: &'c SamplerContext<S> = self.context;
        let value = digest::digest_of_word(algorithm, context.corpora(), self.rng);

        let mut record = GeneratedRecord::new();
        record.insert("algorithm", algorithm.name());
        record.insert("value", value);
        record
    }
}

/// Event generator owning its random source.
///
/// Each generator holds its own `StdRng`; create one per thread or task and
/// share the context between them.
pub struct EventGenerator<S> {
    context: Arc<SamplerContext<S>>,
    rng: StdRng,
}

impl<S: SchemaStore> EventGenerator<S> {
    /// Create a generator with a seeded RNG for reproducible output.
    pub fn new(context: Arc<SamplerContext<S>>, seed: u64) -> Self {
        Self {
            context,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a generator seeded from the operating system.
    pub fn from_entropy(context: Arc<SamplerContext<S>>) -> Self {
        Self {
            context,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Get a reference to the shared context.
    pub fn context(&self) -> &SamplerContext<S> {
        &self.context
    }

    /// Generate an event; `Ok(None)` iff `class` is `None`.
    pub fn generate_event(
        &mut self,
        class: Option<&ClassDefinition>,
    ) -> Result<Option<GeneratedRecord>, GeneratorError> {
        generate_event(&*self.context, class, &mut self.rng)
    }

    /// Generate an event for the class named `name`.
    pub fn generate_event_by_name(&mut self, name: &str) -> Result<GeneratedRecord, GeneratorError> {
        let context = Arc::clone(&self.context);
        let class = context
            .schema()
            .class(name)
            .ok_or_else(|| GeneratorError::ClassNotFound(name.to_string()))?;
        generate_event(&*context, Some(class), &mut self.rng)?
            .ok_or_else(|| GeneratorError::ClassNotFound(name.to_string()))
    }

    /// Generate an instance of `object`.
    pub fn generate_object(
        &mut self,
        object: &ObjectDefinition,
    ) -> Result<GeneratedRecord, GeneratorError> {
        generate_object(&*self.context, object, &mut self.rng)
    }

    /// Generate an instance of the object named `name`.
    pub fn generate_object_by_name(
        &mut self,
        name: &str,
    ) -> Result<GeneratedRecord, GeneratorError> {
        let context = Arc::clone(&self.context);
        let object = context
            .schema()
            .object(name)
            .ok_or_else(|| GeneratorError::ObjectNotFound(name.to_string()))?;
        generate_object(&*context, object, &mut self.rng)
    }

    /// Generate `count` events for the class named `class`.
    ///
    /// Returns an iterator that lazily generates events.
    pub fn events(
        &mut self,
        class: &str,
        count: u64,
    ) -> Result<EventIterator<'_, S>, GeneratorError> {
        // Verify the class exists
        if self.context.schema().class(class).is_none() {
            return Err(GeneratorError::ClassNotFound(class.to_string()));
        }

        Ok(EventIterator {
            generator: self,
            class: class.to_string(),
            remaining: count,
        })
    }
}

/// Iterator that lazily generates events.
pub struct EventIterator<'a, S> {
    generator: &'a mut EventGenerator<S>,
    class: String,
    remaining: u64,
}

impl<S: SchemaStore> Iterator for EventIterator<'_, S> {
    type Item = Result<GeneratedRecord, GeneratorError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(self.generator.generate_event_by_name(&self.class))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl<S: SchemaStore> ExactSizeIterator for EventIterator<'_, S> {}
