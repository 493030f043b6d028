use q15vec::kernel::backend::Rounding;
use q15vec::{axpy_saturating_i16, axpy_saturating_i16_with};

#[test]
fn rounding_modes_agree() {
    // The i32 -> i16 narrow carries no fractional bit, so Down and Nearest
    // must produce identical outputs.
    let mut seed = 0xdead_beef_cafe_f00du64;
    let mut next_i16 = move || {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
        (seed >> 48) as i16
    };
    let n = 257;
    let a: Vec<i16> = (0..n).map(|_| next_i16()).collect();
    let b: Vec<i16> = (0..n).map(|_| next_i16()).collect();
    for &alpha in &[1i16, -1, 255, -32768, 32767] {
        let mut down = vec![0i16; n];
        let mut nearest = vec![0i16; n];
        axpy_saturating_i16_with(&a, &b, &mut down, alpha, Rounding::Down);
        axpy_saturating_i16_with(&a, &b, &mut nearest, alpha, Rounding::Nearest);
        assert_eq!(down, nearest, "alpha={}", alpha);
    }
}

#[test]
fn default_mode_is_down() {
    let a = [-32768i16, 32767];
    let b = [100i16, -100];
    let mut plain = [0i16; 2];
    let mut explicit = [0i16; 2];
    axpy_saturating_i16(&a, &b, &mut plain, 9);
    axpy_saturating_i16_with(&a, &b, &mut explicit, 9, Rounding::Down);
    assert_eq!(plain, explicit);
}
