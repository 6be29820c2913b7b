//! Attribute-name overrides.
//!
//! Some attribute names carry conventional meaning whatever their declared
//! type (`version`, `hostname`, `md5`, ...). The synthesizer consults
//! [`FIELD_OVERRIDES`] in order before dispatching on the semantic type; the
//! first matching entry wins.

use crate::generators::DigestAlgorithm;

/// What to produce for an overridden attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverrideRule {
    /// Fixed string value
    Constant(&'static str),
    /// Time-ordered unique identifier
    UniqueId,
    /// `word.tld`
    Domain,
    /// Capitalized single word
    Name,
    /// Two person names
    FullName,
    /// One of the known shells
    Shell,
    /// Offset in minutes from UTC
    Timezone,
    /// Hex digest of a sampled word
    Digest(DigestAlgorithm),
    /// Sampled words joined by spaces
    Words(usize),
    /// Never populated
    Omit,
}

/// One entry of the override table.
#[derive(Debug, Clone, Copy)]
pub struct FieldOverride {
    pub names: &'static [&'static str],
    pub rule: OverrideRule,
}

impl FieldOverride {
    pub fn matches(&self, field_name: &str) -> bool {
        self.names.contains(&field_name)
    }
}

/// Overrides in priority order.
pub const FIELD_OVERRIDES: &[FieldOverride] = &[
    FieldOverride {
        names: &["raw_data"],
        rule: OverrideRule::Omit,
    },
    FieldOverride {
        names: &["version"],
        rule: OverrideRule::Constant("1.0"),
    },
    FieldOverride {
        names: &["lang"],
        rule: OverrideRule::Constant("en"),
    },
    FieldOverride {
        names: &["uuid", "uid"],
        rule: OverrideRule::UniqueId,
    },
    FieldOverride {
        names: &["domain", "hostname"],
        rule: OverrideRule::Domain,
    },
    FieldOverride {
        names: &["name"],
        rule: OverrideRule::Name,
    },
    FieldOverride {
        names: &["full_name", "company_name", "owner"],
        rule: OverrideRule::FullName,
    },
    FieldOverride {
        names: &["shell"],
        rule: OverrideRule::Shell,
    },
    FieldOverride {
        names: &["timezone"],
        rule: OverrideRule::Timezone,
    },
    FieldOverride {
        names: &["md5"],
        rule: OverrideRule::Digest(DigestAlgorithm::Md5),
    },
    FieldOverride {
        names: &["sha1"],
        rule: OverrideRule::Digest(DigestAlgorithm::Sha1),
    },
    FieldOverride {
        names: &["sha256"],
        rule: OverrideRule::Digest(DigestAlgorithm::Sha256),
    },
    FieldOverride {
        names: &["unmapped"],
        rule: OverrideRule::Words(4),
    },
];

/// First override matching `field_name`.
pub fn lookup(field_name: &str) -> Option<OverrideRule> {
    FIELD_OVERRIDES
        .iter()
        .find(|entry| entry.matches(field_name))
        .map(|entry| entry.rule)
}
