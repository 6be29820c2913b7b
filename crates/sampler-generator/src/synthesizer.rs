//! Scalar value synthesis.
//!
//! [`ValueSynthesizer::synthesize`] turns one attribute into one value. The
//! attribute-name overrides in [`crate::overrides`] are checked first, then
//! the semantic type picks the rule.

use crate::corpus::Corpora;
use crate::generators::{digest, identifier, network, numeric, text, timestamp};
use crate::overrides::{self, OverrideRule};
use rand::Rng;
use sampler_core::{FieldSpec, GeneratedValue, SemanticType};
use std::collections::BTreeMap;

/// Number of words in a generic string value.
pub const STRING_WORDS: usize = 3;

/// Produces scalar values from the shared corpora.
#[derive(Debug, Clone, Copy)]
pub struct ValueSynthesizer<'a> {
    corpora: &'a Corpora,
}

impl<'a> ValueSynthesizer<'a> {
    pub fn new(corpora: &'a Corpora) -> Self {
        Self { corpora }
    }

    pub fn corpora(&self) -> &'a Corpora {
        self.corpora
    }

    /// Generate a value for `field_name` of type `semantic_type`.
    ///
    /// Returns `None` when the attribute must be left out of the record.
    pub fn synthesize<R: Rng + ?Sized>(
        &self,
        field_name: &str,
        semantic_type: &SemanticType,
        field: &FieldSpec,
        rng: &mut R,
    ) -> Option<GeneratedValue> {
        match overrides::lookup(field_name) {
            Some(rule) => self.apply_override(rule, rng),
            None => Some(self.by_type(field_name, semantic_type, field.enum_entries(), rng)),
        }
    }

    fn apply_override<R: Rng + ?Sized>(
        &self,
        rule: OverrideRule,
        rng: &mut R,
    ) -> Option<GeneratedValue> {
        let corpora = self.corpora;
        let value = match rule {
            OverrideRule::Omit => return None,
            OverrideRule::Constant(value) => GeneratedValue::from(value),
            OverrideRule::UniqueId => identifier::unique_id(rng).into(),
            OverrideRule::Domain => text::domain(corpora, rng).into(),
            OverrideRule::Name => text::name(corpora, rng).into(),
            OverrideRule::FullName => text::full_name(corpora, rng).into(),
            OverrideRule::Shell => text::shell(rng).into(),
            OverrideRule::Timezone => numeric::timezone_offset(rng).into(),
            OverrideRule::Digest(algorithm) => digest::digest_of_word(algorithm, corpora, rng).into(),
            OverrideRule::Words(count) => text::sentence(corpora, rng, count).into(),
        };
        Some(value)
    }

    /// Type-directed generation, without name overrides.
    pub fn by_type<R: Rng + ?Sized>(
        &self,
        field_name: &str,
        semantic_type: &SemanticType,
        enum_values: Option<&BTreeMap<String, i64>>,
        rng: &mut R,
    ) -> GeneratedValue {
        let corpora = self.corpora;
        match semantic_type {
            SemanticType::String if is_identifier_name(field_name) => {
                identifier::unique_id(rng).into()
            }
            SemanticType::String => match enum_values {
                Some(values) => pick_enum(values, rng)
                    .map(|(key, _)| GeneratedValue::from(key.as_str()))
                    .unwrap_or_else(|| text::sentence(corpora, rng, STRING_WORDS).into()),
                None => text::sentence(corpora, rng, STRING_WORDS).into(),
            },
            SemanticType::Timestamp => timestamp::now_millis().into(),
            SemanticType::Ip | SemanticType::Subnet | SemanticType::Ipv4 => {
                network::ipv4(rng).into()
            }
            SemanticType::Ipv6 => network::ipv6(rng).into(),
            SemanticType::Mac => network::mac(rng).into(),
            SemanticType::Directory => text::directory(corpora, rng).into(),
            SemanticType::File => text::file_path(corpora, rng).into(),
            SemanticType::Email => text::email(corpora, rng).into(),
            SemanticType::Port => network::port(rng).into(),
            SemanticType::Long => numeric::long(rng).into(),
            SemanticType::Integer => match enum_values.and_then(|values| pick_enum(values, rng)) {
                Some((_, code)) => GeneratedValue::Int(*code),
                None => numeric::integer(rng).into(),
            },
            SemanticType::Boolean => rng.random_bool(0.5).into(),
            SemanticType::Float => numeric::float(rng).into(),
            SemanticType::Object | SemanticType::Unknown(_) => text::word(corpora, rng).into(),
        }
    }
}

/// Attribute names whose string values are identifiers.
pub fn is_identifier_name(field_name: &str) -> bool {
    field_name.ends_with("_uid") || field_name.ends_with("_id")
}

fn pick_enum<'v, R: Rng + ?Sized>(
    values: &'v BTreeMap<String, i64>,
    rng: &mut R,
) -> Option<(&'v String, &'v i64)> {
    if values.is_empty() {
        return None;
    }
    values.iter().nth(rng.random_range(0..values.len()))
}
