//! Terrain height sampling.
//!
//! Heights sit at `Y_BASE` on the center column and dip by a random fraction of the
//! squared distance from it, so the grid forms a valley that rises toward the edges
//! once projected (screen y grows downward).

use rand::Rng;

use crate::types::Y_BASE;

/// Distance of a column from the lateral center of the grid.
#[inline]
pub fn center_distance(column: usize, columns: usize) -> f64 {
    (column as f64 - columns as f64 / 2.0).abs()
}

/// Draw a fresh height for `column`: `Y_BASE - U(0,1) * distance²`.
#[inline]
pub fn sample_height<R: Rng + ?Sized>(rng: &mut R, column: usize, columns: usize) -> f64 {
    let distance = center_distance(column, columns);
    Y_BASE - rng.gen_range(0.0..=1.0) * distance * distance
}

/// Inclusive range `sample_height` can produce for `column`.
pub fn height_bounds(column: usize, columns: usize) -> (f64, f64) {
    let distance = center_distance(column, columns);
    (Y_BASE - distance * distance, Y_BASE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn center_distance_is_symmetric_around_half_width() {
        assert_eq!(center_distance(0, 60), 30.0);
        assert_eq!(center_distance(30, 60), 0.0);
        assert_eq!(center_distance(59, 60), 29.0);
        // Odd widths center between columns.
        assert_eq!(center_distance(2, 5), 0.5);
    }

    #[test]
    fn center_column_is_always_at_base() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            assert_eq!(sample_height(&mut rng, 30, 60), Y_BASE);
        }
    }

    #[test]
    fn samples_stay_within_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        for column in 0..60 {
            let (lo, hi) = height_bounds(column, 60);
            for _ in 0..20 {
                let y = sample_height(&mut rng, column, 60);
                assert!(y >= lo && y <= hi, "column {column}: {y} not in [{lo}, {hi}]");
            }
        }
    }
}
