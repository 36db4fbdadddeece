use rayon::prelude::*;
use std::time::Instant;

// Big enough that the rayon build is worth comparing against the serial one.
const BENCH_XMAX: i64 = 10_000_000;

// the squares built by pushing in a for cycle
fn squares_loop(xmax: i64) -> Vec<i64> {
    let mut cubes = Vec::new();
    for i in 0..xmax {
        cubes.push(i * i);
    }
    cubes
}

// the same list from an iterator chain
fn squares_iter(xmax: i64) -> Vec<i64> {
    (0..xmax).map(|i| i * i).collect()
}

fn squares_rayon(xmax: i64) -> Vec<i64> {
    (0..xmax).into_par_iter().map(|i| i * i).collect()
}

pub(crate) fn main() {
    let my_list: Vec<i64> = (0..10).collect();
    println!("{:?}", my_list);

    let cubes = squares_loop(10);
    println!("{:?}", cubes);
    let cubes = squares_iter(10);
    println!("{:?}", cubes);

    // serial against rayon on a larger range, timed like the samplers
    let start = Instant::now();
    let serial = squares_iter(BENCH_XMAX);
    let serial_elapsed = start.elapsed();
    let start = Instant::now();
    let parallel = squares_rayon(BENCH_XMAX);
    let rayon_elapsed = start.elapsed();
    assert_eq!(serial.len(), parallel.len());
    println!(
        "squares of 0..{}: serial {:?}, rayon {:?}",
        BENCH_XMAX, serial_elapsed, rayon_elapsed
    );
}
