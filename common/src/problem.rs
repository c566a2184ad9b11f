use rand::Rng;

use crate::{GridPoint, GRID_MAX, GRID_MIN};

/// Picks a uniformly random grid point other than the origin.
///
/// Draws are simply repeated until one misses the origin; with 441 cells
/// that is rarely more than one retry.
pub fn random_point<R: Rng + ?Sized>(rng: &mut R) -> GridPoint {
    loop {
        let x = rng.gen_range(GRID_MIN..=GRID_MAX);
        let y = rng.gen_range(GRID_MIN..=GRID_MAX);
        if let Some(point) = GridPoint::new(x, y) {
            return point;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn never_returns_origin() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..5_000 {
            let point = random_point(&mut rng);
            assert_ne!((point.x(), point.y()), (0, 0));
            assert!((GRID_MIN..=GRID_MAX).contains(&point.x()));
            assert!((GRID_MIN..=GRID_MAX).contains(&point.y()));
        }
    }

    #[test]
    fn reaches_every_other_cell() {
        let mut rng = StdRng::seed_from_u64(2024);
        let seen: HashSet<GridPoint> = (0..40_000).map(|_| random_point(&mut rng)).collect();
        let cells = (GRID_MAX - GRID_MIN + 1).pow(2) as usize;
        assert_eq!(seen.len(), cells - 1);
    }
}
