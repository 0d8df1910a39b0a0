//! Seeded train/test partitioning of row indices.

use crate::model::ModelError;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Serialize;

/// Disjoint train/test row indices covering the whole dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Split {
    pub train: Vec<usize>,
    pub test: Vec<usize>,
}

/// Shuffle `0..n_rows` with a seeded RNG and cut at `round(n_rows * train_fraction)`.
pub fn train_test_split(
    n_rows: usize,
    train_fraction: f64,
    seed: u64,
) -> Result<Split, ModelError> {
    if !(train_fraction > 0.0 && train_fraction < 1.0) {
        return Err(ModelError::InvalidProportion(train_fraction));
    }

    let mut indices: Vec<usize> = (0..n_rows).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let n_train = ((n_rows as f64 * train_fraction).round() as usize).min(n_rows);
    let test = indices.split_off(n_train);

    Ok(Split {
        train: indices,
        test,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ten_rows_split_eight_two() {
        let split = train_test_split(10, 0.8, 42).unwrap();
        assert_eq!(split.train.len(), 8);
        assert_eq!(split.test.len(), 2);
    }

    #[test]
    fn partitions_are_disjoint_and_complete() {
        let split = train_test_split(37, 0.8, 42).unwrap();
        let train: HashSet<usize> = split.train.iter().copied().collect();
        let test: HashSet<usize> = split.test.iter().copied().collect();

        assert!(train.is_disjoint(&test));
        let all: HashSet<usize> = train.union(&test).copied().collect();
        assert_eq!(all, (0..37).collect::<HashSet<_>>());
        // round(29.6) = 30
        assert_eq!(split.train.len(), 30);
        assert_eq!(split.test.len(), 7);
    }

    #[test]
    fn same_seed_same_partition() {
        let a = train_test_split(10, 0.8, 42).unwrap();
        let b = train_test_split(10, 0.8, 42).unwrap();
        assert_eq!(a, b);

        let c = train_test_split(200, 0.8, 7).unwrap();
        let d = train_test_split(200, 0.8, 8).unwrap();
        assert_ne!(c.test, d.test);
    }

    #[test]
    fn rejects_out_of_range_fraction() {
        for bad in [0.0, 1.0, -0.2, 1.5, f64::NAN] {
            assert!(matches!(
                train_test_split(10, bad, 42),
                Err(ModelError::InvalidProportion(_))
            ));
        }
    }
}
