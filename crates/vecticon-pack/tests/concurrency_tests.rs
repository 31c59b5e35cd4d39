//! First access from many threads at once.
//!
//! Kept in its own test binary so the slots under test start empty.

use std::sync::{Arc, Barrier};
use std::thread;

use vecticon_graphics::VectorIcon;
use vecticon_pack::logging::targets;
use vecticon_pack::{icon, icons, is_initialized, IconId, IconRegistry};

const THREADS: usize = 16;

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(format!("{}=debug", targets::PACK))
        .with_test_writer()
        .try_init();
}

fn race<F>(access: F) -> Vec<usize>
where
    F: Fn() -> &'static VectorIcon + Send + Sync + 'static,
{
    init_logging();
    let barrier = Arc::new(Barrier::new(THREADS));
    let access = Arc::new(access);

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let barrier = Arc::clone(&barrier);
            let access = Arc::clone(&access);
            thread::spawn(move || {
                barrier.wait();
                access() as *const VectorIcon as usize
            })
        })
        .collect();

    handles.into_iter().map(|h| h.join().unwrap()).collect()
}

#[test]
fn test_concurrent_first_access_yields_one_instance() {
    assert!(!is_initialized(IconId::Visibility));

    let addresses = race(icons::visibility);

    assert!(is_initialized(IconId::Visibility));
    assert!(addresses.iter().all(|&a| a == addresses[0]));
    assert_eq!(addresses[0], icons::visibility() as *const VectorIcon as usize);
}

#[test]
fn test_concurrent_generic_access() {
    let addresses = race(|| icon(IconId::Calendar));
    assert!(addresses.iter().all(|&a| a == addresses[0]));
}

#[test]
fn test_registry_shared_between_threads() {
    let registry = Arc::new(IconRegistry::new());

    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                let icon = VectorIcon::builder(format!("Dot{i}"), 24.0, 24.0, 24.0, 24.0)
                    .path(
                        vecticon_graphics::PathStyle::fill(vecticon_graphics::Color::WHITE),
                        |p| {
                            p.add_circle(12.0, 12.0, 4.0);
                        },
                    )
                    .build();
                registry.register(icon).unwrap();
                assert!(registry.get("Folder").unwrap().is_builtin());
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(registry.len(), THREADS);
    assert!(registry.contains("Dot0"));
}
