//! Identifier helpers exposed by the generator crate.

use rand::rngs::StdRng;
use rand::SeedableRng;
use sampler_generator::{composite_event_id, unique_id};
use std::collections::HashSet;

#[test]
fn test_composite_event_id_examples() {
    assert_eq!(composite_event_id(1001, 5), 1_001_005);
    assert_eq!(composite_event_id(4001, 2), 4_001_002);
    assert_eq!(composite_event_id(1007, 0), 1_007_000);
    // Only the low 16 bits of the outcome contribute
    assert_eq!(composite_event_id(2, 65_537), 2001);
}

#[test]
fn test_unique_ids_do_not_repeat() {
    let mut rng = StdRng::seed_from_u64(super::SEED);
    let ids: HashSet<String> = (0..1000).map(|_| unique_id(&mut rng)).collect();
    assert_eq!(ids.len(), 1000);
}

#[test]
fn test_unique_ids_sort_by_creation_time() {
    let mut rng = StdRng::seed_from_u64(super::SEED);
    let earlier = unique_id(&mut rng);
    std::thread::sleep(std::time::Duration::from_millis(2));
    let later = unique_id(&mut rng);
    assert!(earlier < later, "{earlier} >= {later}");
}
