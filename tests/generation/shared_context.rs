//! One context shared by generators on separate threads.

use super::{bundled_context, SEED};
use sampler_core::SchemaStore;
use sampler_generator::EventGenerator;
use std::sync::Arc;
use std::thread;

const WORKERS: u64 = 4;
const EVENTS_PER_WORKER: u64 = 100;

#[test]
fn test_generators_share_context_across_threads() {
    let context = bundled_context("schemas/sample.yaml");

    let handles: Vec<_> = (0..WORKERS)
        .map(|i| {
            let context = Arc::clone(&context);
            thread::spawn(move || {
                let mut generator = EventGenerator::new(Arc::clone(&context), SEED + i);
                let class = context.schema().class("process_activity").unwrap();
                let mut generated = 0;
                for event in generator.events(&class.name, EVENTS_PER_WORKER).unwrap() {
                    let event = event.unwrap();
                    for name in class.required_attributes() {
                        assert!(event.contains(name), "worker {i}: missing {name}");
                    }
                    generated += 1;
                }
                generated
            })
        })
        .collect();

    let total: u64 = handles.into_iter().map(|h| h.join().unwrap()).sum();
    assert_eq!(total, WORKERS * EVENTS_PER_WORKER);
    // Workers released their clones
    assert_eq!(Arc::strong_count(&context), 1);
}
