use pretty_assertions::assert_eq;
use q15vec::axpy_saturating_i16;
use q15vec::kernel::par_axpy_saturating_i16;

fn make_inputs(n: usize, seed: u64) -> (Vec<i16>, Vec<i16>) {
    let mut state = seed;
    let mut next_i16 = move || {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (state >> 48) as i16
    };
    let a: Vec<i16> = (0..n).map(|_| next_i16()).collect();
    let b: Vec<i16> = (0..n).map(|_| next_i16()).collect();
    (a, b)
}

#[test]
fn parallel_matches_sequential_on_large_input() {
    // Large enough to split into several rayon grains
    let n = 100_000;
    let (a, b) = make_inputs(n, 42);
    let mut seq = vec![0i16; n];
    let mut par = vec![0i16; n];
    axpy_saturating_i16(&a, &b, &mut seq, -129);
    par_axpy_saturating_i16(&a, &b, &mut par, -129);
    assert_eq!(seq, par);
}

#[test]
fn parallel_matches_sequential_on_small_input() {
    let (a, b) = make_inputs(37, 7);
    let mut seq = vec![0i16; 37];
    let mut par = vec![0i16; 37];
    axpy_saturating_i16(&a, &b, &mut seq, 32767);
    par_axpy_saturating_i16(&a, &b, &mut par, 32767);
    assert_eq!(seq, par);
}

#[test]
fn parallel_handles_empty_input() {
    let a: [i16; 0] = [];
    let b: [i16; 0] = [];
    let mut y = [3i16; 2];
    par_axpy_saturating_i16(&a, &b, &mut y, 1);
    assert_eq!(y, [3, 3]);
}
