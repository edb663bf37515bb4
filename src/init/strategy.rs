use rand::{seq::index::sample, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::clusterer::{Point, PointList};
use crate::init::error::InitError;

/// How the starting centroids are drawn from the dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InitStrategy {
    /// The first k points, in input order
    #[default]
    First,
    /// k points evenly spaced through the input
    Spaced,
    /// k distinct points chosen by a seeded RNG
    Random { seed: u64 },
}

/// Copy `k` data points to serve as the initial centroid set
pub fn initial_centroids(
    data: &[Point],
    k: usize,
    strategy: InitStrategy,
) -> Result<PointList, InitError> {
    if k == 0 {
        return Err(InitError::InvalidK);
    }
    if k > data.len() {
        return Err(InitError::TooManyClusters {
            k,
            points: data.len(),
        });
    }

    let n = data.len();
    let indices: Vec<usize> = match strategy {
        InitStrategy::First => (0..k).collect(),
        InitStrategy::Spaced => (0..k).map(|i| i * n / k).collect(),
        InitStrategy::Random { seed } => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            sample(&mut rng, n, k).into_vec()
        }
    };

    log::debug!("initial centroid indices: {:?}", indices);

    Ok(indices.into_iter().map(|i| data[i].clone()).collect())
}
