//! Seedless 3D simplex noise over fixed tables.

use super::NoiseField;

/// Permutation table from Ken Perlin's reference implementation.
const PERM: [u8; 256] = [
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225, 140, 36, 103, 30, 69,
    142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148, 247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219,
    203, 117, 35, 11, 32, 57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175,
    74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122, 60, 211, 133, 230,
    220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54, 65, 25, 63, 161, 1, 216, 80, 73, 209, 76,
    132, 187, 208, 89, 18, 169, 200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198, 173,
    186, 3, 64, 52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212, 207, 206,
    59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213, 119, 248, 152, 2, 44, 154, 163,
    70, 221, 153, 101, 155, 167, 43, 172, 9, 129, 22, 39, 253, 19, 98, 108, 110, 79, 113, 224, 232,
    178, 185, 112, 104, 218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12, 191, 179, 162,
    241, 81, 51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157, 184, 84, 204,
    176, 115, 121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93, 222, 114, 67, 29, 24, 72, 243, 141,
    128, 195, 78, 66, 215, 61, 156, 180,
];

/// Gradients toward the 12 edge midpoints of a cube.
const GRAD3: [[f32; 3]; 12] = [
    [1.0, 1.0, 0.0],
    [-1.0, 1.0, 0.0],
    [1.0, -1.0, 0.0],
    [-1.0, -1.0, 0.0],
    [1.0, 0.0, 1.0],
    [-1.0, 0.0, 1.0],
    [1.0, 0.0, -1.0],
    [-1.0, 0.0, -1.0],
    [0.0, 1.0, 1.0],
    [0.0, -1.0, 1.0],
    [0.0, 1.0, -1.0],
    [0.0, -1.0, -1.0],
];

/// Skew factor into simplex space.
const F3: f32 = 1.0 / 3.0;
/// Unskew factor back to Cartesian space.
const G3: f32 = 1.0 / 6.0;
/// Squared radius of each corner's kernel.
const KERNEL_RADIUS_SQ: f32 = 0.6;
/// Brings the summed corner contributions into [-1, 1].
const NORMALIZATION: f32 = 32.0;

#[inline]
fn perm(i: i32) -> i32 {
    PERM[(i & 255) as usize] as i32
}

#[inline]
fn gradient_index(i: i32, j: i32, k: i32) -> usize {
    (perm(i.wrapping_add(perm(j.wrapping_add(perm(k))))) % 12) as usize
}

/// Contribution of one simplex corner at offset (x, y, z).
#[inline]
fn corner(gi: usize, x: f32, y: f32, z: f32) -> f32 {
    let t = KERNEL_RADIUS_SQ - x * x - y * y - z * z;
    if t < 0.0 {
        return 0.0;
    }
    let t2 = t * t;
    let g = GRAD3[gi];
    t2 * t2 * (g[0] * x + g[1] * y + g[2] * z)
}

/// 3D simplex noise.
///
/// Pure and deterministic. Returns a value in [-1, 1]. Non-finite input does not
/// panic, but the result carries no meaning.
pub fn noise3(x: f32, y: f32, z: f32) -> f32 {
    // Which skewed cell are we in?
    let s = (x + y + z) * F3;
    let i = (x + s).floor() as i32;
    let j = (y + s).floor() as i32;
    let k = (z + s).floor() as i32;

    let t = i.wrapping_add(j).wrapping_add(k) as f32 * G3;
    let x0 = x - (i as f32 - t);
    let y0 = y - (j as f32 - t);
    let z0 = z - (k as f32 - t);

    // Pick the simplex within the cell by ordering the offsets.
    let (i1, j1, k1, i2, j2, k2) = if x0 >= y0 {
        if y0 >= z0 {
            (1, 0, 0, 1, 1, 0)
        } else if x0 >= z0 {
            (1, 0, 0, 1, 0, 1)
        } else {
            (0, 0, 1, 1, 0, 1)
        }
    } else if y0 < z0 {
        (0, 0, 1, 0, 1, 1)
    } else if x0 < z0 {
        (0, 1, 0, 0, 1, 1)
    } else {
        (0, 1, 0, 1, 1, 0)
    };

    let x1 = x0 - i1 as f32 + G3;
    let y1 = y0 - j1 as f32 + G3;
    let z1 = z0 - k1 as f32 + G3;
    let x2 = x0 - i2 as f32 + 2.0 * G3;
    let y2 = y0 - j2 as f32 + 2.0 * G3;
    let z2 = z0 - k2 as f32 + 2.0 * G3;
    let x3 = x0 - 1.0 + 3.0 * G3;
    let y3 = y0 - 1.0 + 3.0 * G3;
    let z3 = z0 - 1.0 + 3.0 * G3;

    let n0 = corner(gradient_index(i, j, k), x0, y0, z0);
    let n1 = corner(
        gradient_index(i.wrapping_add(i1), j.wrapping_add(j1), k.wrapping_add(k1)),
        x1,
        y1,
        z1,
    );
    let n2 = corner(
        gradient_index(i.wrapping_add(i2), j.wrapping_add(j2), k.wrapping_add(k2)),
        x2,
        y2,
        z2,
    );
    let n3 = corner(
        gradient_index(i.wrapping_add(1), j.wrapping_add(1), k.wrapping_add(1)),
        x3,
        y3,
        z3,
    );

    (NORMALIZATION * (n0 + n1 + n2 + n3)).clamp(-1.0, 1.0)
}

/// The seedless simplex field. Zero-sized; tables are compile-time constants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimplexField;

impl NoiseField for SimplexField {
    #[inline]
    fn sample(&self, x: f32, y: f32, z: f32) -> f32 {
        noise3(x, y, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noise3_range() {
        for i in 0..24 {
            for j in 0..24 {
                for k in 0..24 {
                    let x = i as f32 * 0.37 - 4.0;
                    let y = j as f32 * 0.41 - 5.0;
                    let z = k as f32 * 0.29 - 3.0;
                    let v = noise3(x, y, z);
                    assert!(
                        (-1.0..=1.0).contains(&v),
                        "noise3({}, {}, {}) = {} out of range",
                        x,
                        y,
                        z,
                        v
                    );
                }
            }
        }
    }

    #[test]
    fn test_noise3_large_coordinates_in_range() {
        for i in 0..200 {
            let x = i as f32 * 123.456 - 10_000.0;
            let v = noise3(x, x * 0.5 + 7.0, 1000.0 - x);
            assert!((-1.0..=1.0).contains(&v), "noise3 out of range: {}", v);
        }
    }

    #[test]
    fn test_noise3_deterministic() {
        for i in 0..100 {
            let x = i as f32 * 0.173;
            let a = noise3(x, -x * 2.0, x + 0.5);
            let b = noise3(x, -x * 2.0, x + 0.5);
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn test_noise3_reference_values() {
        // Lattice vertices sit on a zero crossing
        assert_eq!(noise3(0.0, 0.0, 0.0), 0.0);
        assert!(noise3(0.5, 0.5, 0.5).abs() < 1e-6);

        assert!((noise3(1.3, -2.7, 0.25) - -0.194_975_45).abs() < 1e-4);
        assert!((noise3(10.1, 20.2, 30.3) - -0.003_974_78).abs() < 1e-4);
        assert!((noise3(0.148, -1.225, 0.0) - -0.157_003_31).abs() < 1e-4);
    }

    #[test]
    fn test_noise3_continuous() {
        let eps = 1e-3;
        for i in 0..50 {
            for j in 0..50 {
                let x = i as f32 * 0.21 - 5.0;
                let y = j as f32 * 0.19 - 5.0;
                let z = 0.7;
                let v = noise3(x, y, z);
                let dx = (noise3(x + eps, y, z) - v).abs();
                let dy = (noise3(x, y + eps, z) - v).abs();
                let dz = (noise3(x, y, z + eps) - v).abs();
                // Slope stays under ~5; the 0.6 kernel leaves seams of ~1e-3 at simplex faces
                assert!(dx < 10.0 * eps, "jump in x at ({}, {}): {}", x, y, dx);
                assert!(dy < 10.0 * eps, "jump in y at ({}, {}): {}", x, y, dy);
                assert!(dz < 10.0 * eps, "jump in z at ({}, {}): {}", x, y, dz);
            }
        }
    }

    #[test]
    fn test_noise3_continuous_across_negative_lattice() {
        let eps = 1e-4;
        for c in [-1.0_f32, -2.0, -3.0, -17.0] {
            let below = noise3(c - eps, 0.3, 0.4);
            let above = noise3(c + eps, 0.3, 0.4);
            assert!((above - below).abs() < 1e-2, "discontinuity at x = {}", c);
        }
    }

    #[test]
    fn test_noise3_varies() {
        let v1 = noise3(0.3, 0.1, 0.0);
        let v2 = noise3(1.7, 2.2, 0.0);
        let v3 = noise3(5.5, -3.1, 2.0);
        assert!(v1 != v2 || v2 != v3, "noise should vary");
    }

    #[test]
    fn test_noise3_non_finite_does_not_panic() {
        let _ = noise3(f32::NAN, 0.0, 0.0);
        let _ = noise3(f32::INFINITY, f32::NEG_INFINITY, 1.0);
    }
}
