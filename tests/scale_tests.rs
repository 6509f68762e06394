use keyspan::prelude::*;
use rand::Rng;
use std::time::Instant;

type Reading = (u32, u32, u64);

fn random_readings(count: usize) -> Vec<Reading> {
    let mut rng = rand::rng();
    (0..count)
        .map(|_| {
            (
                rng.random_range(0..1_000),
                rng.random_range(0..100),
                rng.random(),
            )
        })
        .collect()
}

#[test]
fn test_search_1m() {
    let count = 1_000_000;
    println!("Generating {} random readings...", count);
    let readings = random_readings(count);

    println!("Building list of {} readings...", count);
    let start = Instant::now();
    let list = SortedList::new(
        readings,
        (
            key(|r: &Reading| &r.0),
            key(|r: &Reading| &r.1),
            key(|r: &Reading| &r.2),
        ),
    )
    .unwrap();
    println!("Built in {:?}", start.elapsed());

    assert_eq!(list.len(), count);

    let start = Instant::now();
    let mut total = 0;
    for sensor in 0..1_000u32 {
        let range = list.find_equal((sensor,));
        assert!(range.iter().all(|r| r.0 == sensor));
        total += range.len();
    }
    println!("1000 equal searches in {:?}", start.elapsed());
    assert_eq!(total, count);

    // Spot-check two-key searches against a filtered scan of the one-key range.
    for sensor in (0..1_000u32).step_by(97) {
        let outer = list.find_equal((sensor,));
        for channel in [0u32, 13, 50, 99] {
            let expected = outer.iter().filter(|r| r.1 >= channel).count();
            let found = outer.find_greater_or_equal((sensor, channel));
            assert_eq!(found.len(), expected);
        }
    }
}

#[test]
#[ignore]
fn test_search_100m() {
    // WARNING: This test requires significant RAM (~3GB for the readings).
    let count = 100_000_000;
    println!(
        "Generating {} random readings... (Expect high RAM usage)",
        count
    );

    // Unknown-size input exercises the chunked collection path at scale.
    let mut rng = rand::rng();
    let readings = (0..count)
        .map(move |_| -> Reading {
            (
                rng.random_range(0..10_000),
                rng.random_range(0..100),
                0,
            )
        })
        .filter(|r| r.1 != 0);

    let start = Instant::now();
    let list = SortedList::new(
        readings,
        (key(|r: &Reading| &r.0), key(|r: &Reading| &r.1)),
    )
    .unwrap();
    println!("Built {} readings in {:?}", list.len(), start.elapsed());

    for sensor in (0..10_000u32).step_by(1_000) {
        let range = list.find_equal((sensor,));
        assert!(range.find_equal((sensor, 0u32)).is_empty());
        assert_eq!(range.find_greater((sensor, 0u32)).len(), range.len());
    }
}
