use keysort::prelude::*;
use rand::Rng;
use std::time::Instant;

#[test]
fn test_sort_1m() {
    let count = 1_000_000;
    println!("Generating {} random elements...", count);

    let mut rng = rand::rng();
    let mut input: Vec<(u64, u32)> = Vec::with_capacity(count);

    for id in 0..count {
        input.push((rng.random(), id as u32));
    }

    println!("Sorting {} elements...", count);
    let start = Instant::now();
    uint::sort(&mut input, |r| r.0);
    let duration = start.elapsed();
    println!("Sorted 1M elements in {:?}", duration);

    assert_eq!(input.len(), count);

    for i in 0..count - 1 {
        assert!(input[i].0 <= input[i + 1].0, "Sort failed at index {}", i);
    }
}

#[test]
fn test_tuple_sort_100k() {
    let count = 100_000;
    let mut rng = rand::rng();

    let input: Vec<(String, i32)> = (0..count)
        .map(|_| {
            let len = rng.random_range(0..6);
            let word: String = (0..len)
                .map(|_| rng.random_range(b'a'..=b'z') as char)
                .collect();
            (word, rng.random_range(-1000..1000))
        })
        .collect();

    let start = Instant::now();
    let order = argsort(&by_position(input.len(), |i| {
        vec![Component::from(input[i].0.as_str()), Component::from(input[i].1)]
    }));
    println!("Argsorted 100k tuples in {:?}", start.elapsed());

    let mut sorted = input.clone();
    apply_permutation(&mut sorted, order);

    let mut expected = input;
    expected.sort();
    assert_eq!(sorted, expected);
}
