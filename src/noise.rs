//! Deterministic 2D lattice value noise with cosine interpolation.
//!
//! The raw generator hashes integer lattice points to pseudo-random scalars;
//! `noise2d` interpolates between the four surrounding corners so the field
//! varies smoothly. Same seed, same output, across runs and platforms.

use std::f32::consts::PI;

/// Folds the y lattice axis into the hash input. Large enough to decorrelate
/// the axes at the frequencies we sample.
pub const STRIDE: i32 = 1999;

/// Hash a lattice index to a pseudo-random value in (-1, 1].
///
/// Bit-shuffle (shift-xor) followed by a cubic polynomial masked to 31 bits.
/// Wrapping arithmetic keeps the result well-defined for any input.
pub fn lattice_noise(n: i32) -> f32 {
    let n = (n << 13) ^ n;
    let m = n
        .wrapping_mul(n.wrapping_mul(n).wrapping_mul(15731))
        .wrapping_add(1_376_312_589)
        & 0x7fff_ffff;
    1.0 - m as f32 / 1_073_741_824.0
}

/// Cosine interpolation between `a` and `b` for `mu` in [0, 1].
///
/// Eases in and out instead of blending linearly, which would leave visible
/// creases along lattice lines.
fn cos_interp(a: f32, b: f32, mu: f32) -> f32 {
    let mu2 = (1.0 - (mu * PI).cos()) / 2.0;
    a * (1.0 - mu2) + b * mu2
}

/// Sample smooth 2D value noise at `(x, y)`.
///
/// Scales the input by `frequency`, floors to the containing lattice cell
/// (floor, not truncation, so negative coordinates land in the right cell),
/// hashes the four corners and cosine-interpolates between them. Output is
/// bounded to [-1, 1].
pub fn noise2d(x: f32, y: f32, seed: i32, frequency: f32) -> f32 {
    let sx = x * frequency;
    let sy = y * frequency;
    let ix = sx.floor() as i32;
    let iy = sy.floor() as i32;
    let rx = sx - ix as f32;
    let ry = sy - iy as f32;

    let corner = |dx: i32, dy: i32| {
        let folded = ix
            .wrapping_add(dx)
            .wrapping_add(iy.wrapping_add(dy).wrapping_mul(STRIDE))
            .wrapping_add(seed);
        lattice_noise(folded)
    };

    let a0 = corner(0, 0);
    let a1 = corner(1, 0);
    let a2 = corner(0, 1);
    let a3 = corner(1, 1);

    let b0 = cos_interp(a0, a1, rx);
    let b1 = cos_interp(a2, a3, rx);
    cos_interp(b0, b1, ry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_noise2d_is_deterministic() {
        let samples = [
            (0.0, 0.0),
            (1.5, -2.25),
            (-0.3, 0.7),
            (123.456, -789.012),
        ];
        for &(x, y) in &samples {
            let a = noise2d(x, y, 1337, 4.0);
            let b = noise2d(x, y, 1337, 4.0);
            assert_eq!(a.to_bits(), b.to_bits(), "non-deterministic at ({x}, {y})");
        }
    }

    #[test]
    fn test_noise2d_output_bounded() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        for _ in 0..10_000 {
            let x = rng.gen_range(-1000.0..1000.0);
            let y = rng.gen_range(-1000.0..1000.0);
            let seed = rng.gen::<i32>();
            let frequency = rng.gen_range(0.01..64.0);
            let v = noise2d(x, y, seed, frequency);
            assert!(
                (-1.0001..=1.0001).contains(&v),
                "noise2d({x}, {y}, {seed}, {frequency}) = {v} out of range"
            );
        }
    }

    #[test]
    fn test_noise2d_continuous_across_lattice_boundaries() {
        // Step a small epsilon across several integer boundaries; the value
        // must not jump. With frequency 1 the slope is bounded by pi per
        // unit, so eps * 10 is a generous allowance.
        let eps = 1e-4_f32;
        let seed = 42;
        for step in -300..300 {
            let x = step as f32 * 0.01;
            let a = noise2d(x, 0.37, seed, 1.0);
            let b = noise2d(x + eps, 0.37, seed, 1.0);
            assert!(
                (a - b).abs() < 5e-3,
                "jump of {} at x = {x}",
                (a - b).abs()
            );
        }
    }

    #[test]
    fn test_noise2d_exact_at_lattice_points() {
        // At integer coordinates the fractional offsets are zero and the
        // interpolation collapses to the raw corner hash.
        let seed = 99;
        for (ix, iy) in [(0, 0), (3, -4), (-7, 11), (250, 125)] {
            let expected = lattice_noise(ix + iy * STRIDE + seed);
            let got = noise2d(ix as f32, iy as f32, seed, 1.0);
            assert_eq!(got.to_bits(), expected.to_bits());
        }
    }

    #[test]
    fn test_lattice_noise_bounded() {
        for n in (-100_000..100_000).step_by(17) {
            let v = lattice_noise(n);
            assert!((-1.0..=1.0).contains(&v), "lattice_noise({n}) = {v}");
        }
    }

    #[test]
    fn test_cos_interp_endpoints() {
        assert_eq!(cos_interp(-0.5, 0.8, 0.0), -0.5);
        assert!((cos_interp(-0.5, 0.8, 1.0) - 0.8).abs() < 1e-6);
        // Midpoint is the arithmetic mean.
        assert!((cos_interp(0.0, 1.0, 0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_different_seeds_decorrelate() {
        let a = noise2d(0.5, 0.5, 1, 1.0);
        let b = noise2d(0.5, 0.5, 2, 1.0);
        assert_ne!(a.to_bits(), b.to_bits());
    }
}
