//! Self-referential schemas fail with the offending path.

use super::{bundled_context, SEED};
use sampler_generator::{EventGenerator, GeneratorError};

#[test]
fn test_cyclic_schema_fails_fast() {
    let context = bundled_context("tests/fixtures/cyclic_schema.yaml");
    let mut generator = EventGenerator::new(context, SEED);

    match generator.generate_event_by_name("tree_activity") {
        Err(GeneratorError::SchemaCycle { path }) => {
            assert_eq!(path, "tree_activity -> branch -> leaf -> branch");
        }
        other => panic!("Expected SchemaCycle, got {other:?}"),
    }
}

#[test]
fn test_cyclic_object_fails_fast() {
    let context = bundled_context("tests/fixtures/cyclic_schema.yaml");
    let mut generator = EventGenerator::new(context, SEED);

    match generator.generate_object_by_name("leaf") {
        Err(GeneratorError::SchemaCycle { path }) => {
            assert_eq!(path, "leaf -> branch -> leaf");
        }
        other => panic!("Expected SchemaCycle, got {other:?}"),
    }
}
