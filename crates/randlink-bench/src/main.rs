//! Round-trip benchmark for randlink using a large generated list.
//!
//! Builds a 100k-node list with dense random links, then times
//! serialization, deserialization, and in-memory deep copy, verifying
//! structural equality at each step.

use std::time::Instant;

use randlink::{RandomList, deserialize, serialize};

const NODES: usize = 100_000;

/// xorshift64* — deterministic across runs, so the generated shape is
/// stable without pulling in an RNG crate.
fn next_rand(state: &mut u64) -> u64 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 7;
    x ^= x << 17;
    *state = x;
    x.wrapping_mul(0x2545f4914f6cdd1d)
}

fn build_list(len: usize) -> RandomList {
    let mut list = RandomList::with_capacity(len);
    let ids: Vec<_> = (0..len)
        .map(|i| list.push_back(Some(format!("qwerty{i}"))))
        .collect();

    let mut state = 0x9e3779b97f4a7c15_u64;
    for &id in &ids {
        let roll = next_rand(&mut state);
        // Roughly 3 in 4 nodes get a random link.
        if roll % 4 != 0 {
            let target = ids[(roll % len as u64) as usize];
            list.set_random(id, Some(target))
                .expect("handles come from this list");
        }
    }
    list
}

fn main() {
    println!("Building {NODES} node list...");
    let t0 = Instant::now();
    let list = build_list(NODES);
    println!("  build: {:?}", t0.elapsed());

    let t1 = Instant::now();
    let mut bytes = Vec::new();
    serialize(&list, &mut bytes).expect("vec sink never fails");
    let encode_time = t1.elapsed();
    println!(
        "  serialize: {:?} ({} bytes, {:.1} MB/s)",
        encode_time,
        bytes.len(),
        bytes.len() as f64 / 1_000_000.0 / encode_time.as_secs_f64()
    );

    let t2 = Instant::now();
    let decoded = deserialize(&mut bytes.as_slice()).expect("own output must decode");
    let decode_time = t2.elapsed();
    println!(
        "  deserialize: {:?} ({:.0} records/s)",
        decode_time,
        NODES as f64 / decode_time.as_secs_f64()
    );
    assert_eq!(decoded, list, "round-trip must preserve structure");

    let t3 = Instant::now();
    let copy = list.deep_copy();
    let copy_time = t3.elapsed();
    println!("  deep copy: {:?}", copy_time);
    assert_eq!(copy, list, "deep copy must preserve structure");

    println!("OK: {} nodes round-tripped and deep-copied", decoded.len());
}
