// Identifier allocation against existing rows

mod common;
use common::{seed_customer, setup_test_db};
use mechanic_shop::IdGenerator;
use mechanic_shop::entities::{Customer, Mechanic};
use std::collections::HashSet;

/// The first `n` candidates of the default sequence.
fn default_candidates(n: usize) -> Vec<i32> {
    let mut ids = IdGenerator::default();
    let mut seen = HashSet::new();
    (0..n)
        .map(|_| {
            let id = ids.next_unused(&seen);
            seen.insert(id);
            id
        })
        .collect()
}

#[tokio::test]
async fn test_allocate_skips_ids_in_use() {
    let db = setup_test_db().await.expect("Failed to setup test database");
    let candidates = default_candidates(4);
    for id in &candidates[..3] {
        seed_customer(&db, *id, "Ann", "Lee").await;
    }

    let mut ids = IdGenerator::default();
    let id = ids.allocate::<Customer, _>(&db).await.unwrap();

    assert!(!candidates[..3].contains(&id));
    assert_eq!(id, candidates[3]);
}

#[tokio::test]
async fn test_allocation_is_per_table() {
    let db = setup_test_db().await.expect("Failed to setup test database");
    let first = default_candidates(1)[0];
    seed_customer(&db, first, "Ann", "Lee").await;

    // Mechanic IDs are probed against the mechanic table only.
    let mut ids = IdGenerator::default();
    assert_eq!(ids.allocate::<Mechanic, _>(&db).await.unwrap(), first);
}

#[tokio::test]
async fn test_fixed_seed_repeats_across_runs() {
    let db = setup_test_db().await.expect("Failed to setup test database");

    let mut first_run = IdGenerator::default();
    let mut second_run = IdGenerator::seeded(IdGenerator::DEFAULT_SEED);
    for _ in 0..5 {
        assert_eq!(
            first_run.allocate::<Customer, _>(&db).await.unwrap(),
            second_run.allocate::<Customer, _>(&db).await.unwrap()
        );
    }
}

#[tokio::test]
async fn test_allocated_ids_are_non_negative() {
    let db = setup_test_db().await.expect("Failed to setup test database");
    let mut ids = IdGenerator::seeded(1234);
    for _ in 0..50 {
        assert!(ids.allocate::<Customer, _>(&db).await.unwrap() >= 0);
    }
}
