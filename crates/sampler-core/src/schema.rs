//! Class and object definitions consumed by the record generator.
//!
//! The authoritative schema lives outside this workspace. Generation only
//! needs to look definitions up, which is what [`SchemaStore`] captures.
//! [`Schema`] is an in-memory store read from a YAML (or JSON) file:
//!
//! ```yaml
//! classes:
//!   - name: file_activity
//!     uid: 1001
//!     attributes:
//!       - name: class_id
//!         type: integer
//!         requirement: required
//!         enum: { file_activity: 1001 }
//!       - name: file
//!         type: object
//!         object_type: file
//!         requirement: required
//! objects:
//!   - name: file
//!     uid: 24
//!     attributes:
//!       - name: path
//!         type: file
//!         requirement: required
//! ```

use crate::types::{Requirement, SemanticType};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

/// Error type for schema operations.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Error reading schema file
    #[error("Failed to read schema file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Two definitions of the same kind share a name
    #[error("Duplicate {kind} definition: {name}")]
    Duplicate { kind: &'static str, name: String },
}

/// Metadata for one attribute of a class or object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldSpec {
    /// Attribute name
    pub name: String,

    /// Semantic type; absent means the type could not be resolved
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub field_type: Option<SemanticType>,

    /// Requirement level
    #[serde(default)]
    pub requirement: Requirement,

    /// Whether the attribute holds an array
    #[serde(default)]
    pub is_array: bool,

    /// Allowed values mapped to their numeric codes
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<BTreeMap<String, i64>>,

    /// Name of the nested object definition for `object` attributes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_type: Option<String>,
}

impl FieldSpec {
    /// Create an optional scalar attribute.
    pub fn new(name: impl Into<String>, field_type: SemanticType) -> Self {
        Self {
            name: name.into(),
            field_type: Some(field_type),
            requirement: Requirement::Optional,
            is_array: false,
            enum_values: None,
            object_type: None,
        }
    }

    /// Create an attribute referencing a nested object definition.
    pub fn object(name: impl Into<String>, object_type: impl Into<String>) -> Self {
        Self {
            object_type: Some(object_type.into()),
            ..Self::new(name, SemanticType::Object)
        }
    }

    /// Mark the attribute as required.
    pub fn required(mut self) -> Self {
        self.requirement = Requirement::Required;
        self
    }

    /// Mark the attribute as an array.
    pub fn array(mut self) -> Self {
        self.is_array = true;
        self
    }

    /// Attach an enum of allowed values.
    pub fn with_enum<I, K>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = (K, i64)>,
        K: Into<String>,
    {
        self.enum_values = Some(values.into_iter().map(|(k, v)| (k.into(), v)).collect());
        self
    }

    /// Whether the attribute must always be populated.
    pub fn is_required(&self) -> bool {
        self.requirement.is_required()
    }

    /// Whether the attribute is a nested object (single or array).
    pub fn is_object(&self) -> bool {
        self.field_type.as_ref().is_some_and(SemanticType::is_object)
    }

    /// Enum entries, if the attribute has a non-empty enum.
    pub fn enum_entries(&self) -> Option<&BTreeMap<String, i64>> {
        self.enum_values.as_ref().filter(|values| !values.is_empty())
    }
}

/// A class or object definition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecordDefinition {
    /// Definition name
    pub name: String,

    /// Numeric class or object id
    #[serde(default)]
    pub uid: i64,

    /// Specialized generation path (e.g. `location`, `fingerprint`)
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub record_type: Option<String>,

    /// Attributes in declaration order
    #[serde(default)]
    pub attributes: Vec<FieldSpec>,
}

/// Top-level event kinds.
pub type ClassDefinition = RecordDefinition;

/// Nested, reusable record kinds.
pub type ObjectDefinition = RecordDefinition;

impl RecordDefinition {
    /// Create an empty definition.
    pub fn new(name: impl Into<String>, uid: i64) -> Self {
        Self {
            name: name.into(),
            uid,
            record_type: None,
            attributes: Vec::new(),
        }
    }

    /// Set the specialized type discriminator.
    pub fn with_type(mut self, record_type: impl Into<String>) -> Self {
        self.record_type = Some(record_type.into());
        self
    }

    /// Append an attribute.
    pub fn with_attribute(mut self, field: FieldSpec) -> Self {
        self.attributes.push(field);
        self
    }

    /// Get an attribute by name.
    pub fn get_attribute(&self, name: &str) -> Option<&FieldSpec> {
        self.attributes.iter().find(|f| f.name == name)
    }

    /// Names of all required attributes.
    pub fn required_attributes(&self) -> impl Iterator<Item = &str> {
        self.attributes
            .iter()
            .filter(|f| f.is_required())
            .map(|f| f.name.as_str())
    }
}

/// Lookup interface onto a schema definition store.
pub trait SchemaStore {
    /// Get a class definition by name.
    fn class(&self, name: &str) -> Option<&ClassDefinition>;

    /// Get an object definition by name.
    fn object(&self, name: &str) -> Option<&ObjectDefinition>;
}

impl<S: SchemaStore + ?Sized> SchemaStore for &S {
    fn class(&self, name: &str) -> Option<&ClassDefinition> {
        (**self).class(name)
    }

    fn object(&self, name: &str) -> Option<&ObjectDefinition> {
        (**self).object(name)
    }
}

/// In-memory schema loaded from a definition file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Schema {
    /// Class definitions
    #[serde(default)]
    pub classes: Vec<ClassDefinition>,

    /// Object definitions
    #[serde(default)]
    pub objects: Vec<ObjectDefinition>,

    /// Cached class lookup (not serialized)
    #[serde(skip)]
    class_map: HashMap<String, usize>,

    /// Cached object lookup (not serialized)
    #[serde(skip)]
    object_map: HashMap<String, usize>,
}

impl Schema {
    /// Build a schema from definitions.
    pub fn new(
        classes: Vec<ClassDefinition>,
        objects: Vec<ObjectDefinition>,
    ) -> Result<Self, SchemaError> {
        let mut schema = Self {
            classes,
            objects,
            class_map: HashMap::new(),
            object_map: HashMap::new(),
        };
        schema.build_maps()?;
        Ok(schema)
    }

    /// Load schema from a YAML or JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse schema from a YAML string. JSON input parses too.
    pub fn from_yaml(yaml: &str) -> Result<Self, SchemaError> {
        let mut schema: Schema = serde_yaml::from_str(yaml)?;
        schema.build_maps()?;
        Ok(schema)
    }

    fn build_maps(&mut self) -> Result<(), SchemaError> {
        self.class_map = index_by_name(&self.classes, "class")?;
        self.object_map = index_by_name(&self.objects, "object")?;
        Ok(())
    }

    /// Get a class definition by its numeric id.
    pub fn class_by_uid(&self, uid: i64) -> Option<&ClassDefinition> {
        self.classes.iter().find(|c| c.uid == uid)
    }

    /// Get all class names in declaration order.
    pub fn class_names(&self) -> Vec<&str> {
        self.classes.iter().map(|c| c.name.as_str()).collect()
    }

    /// Get all object names in declaration order.
    pub fn object_names(&self) -> Vec<&str> {
        self.objects.iter().map(|o| o.name.as_str()).collect()
    }
}

fn index_by_name(
    definitions: &[RecordDefinition],
    kind: &'static str,
) -> Result<HashMap<String, usize>, SchemaError> {
    let mut map = HashMap::with_capacity(definitions.len());
    for (idx, definition) in definitions.iter().enumerate() {
        if map.insert(definition.name.clone(), idx).is_some() {
            return Err(SchemaError::Duplicate {
                kind,
                name: definition.name.clone(),
            });
        }
    }
    Ok(map)
}

impl SchemaStore for Schema {
    fn class(&self, name: &str) -> Option<&ClassDefinition> {
        self.class_map
            .get(name)
            .and_then(|&idx| self.classes.get(idx))
    }

    fn object(&self, name: &str) -> Option<&ObjectDefinition> {
        self.object_map
            .get(name)
            .and_then(|&idx| self.objects.get(idx))
    }
}
