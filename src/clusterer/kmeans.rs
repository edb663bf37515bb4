use crate::clusterer::{
    centroid::{compute_centroid, CentroidUpdate},
    config::{EmptyClusterPolicy, KmeansConfig},
    distance::max_coordinate_shift,
    error::ClusterError,
    types::{Assignments, ClusterResult, Point, PointList, Termination},
};

/// Index of the closest centroid; ties go to the earliest centroid.
pub fn nearest_centroid(centroids: &[Point], point: &Point) -> Result<usize, ClusterError> {
    let mut best = None;
    let mut min = f64::INFINITY;

    for (i, centroid) in centroids.iter().enumerate() {
        let d = centroid.distance(point)?;
        if best.is_none() || d < min || (min.is_nan() && !d.is_nan()) {
            min = d;
            best = Some(i);
        }
    }

    best.ok_or(ClusterError::EmptyCentroids)
}

/// Fresh assignment vector, one nearest-centroid index per data point
pub fn assign(centroids: &[Point], data: &[Point]) -> Result<Assignments, ClusterError> {
    data.iter()
        .map(|point| nearest_centroid(centroids, point))
        .collect()
}

/// Move every centroid to the mean of its assigned points, in place
pub fn update_centroids(
    centroids: &mut [Point],
    data: &[Point],
    assignments: &[usize],
    dim: usize,
    policy: EmptyClusterPolicy,
) -> Result<(), ClusterError> {
    for (i, centroid) in centroids.iter_mut().enumerate() {
        match compute_centroid(data, assignments, i, dim)? {
            CentroidUpdate::Mean(mean) => *centroid = mean,
            CentroidUpdate::Empty => match policy {
                EmptyClusterPolicy::Keep => {
                    log::warn!("centroid {} has no assigned points, keeping it in place", i);
                }
                EmptyClusterPolicy::Fail => {
                    return Err(ClusterError::EmptyCluster { index: i });
                }
            },
        }
    }

    Ok(())
}

/// True when no coordinate moved by more than `tolerance`
pub fn has_converged(
    before: &[Point],
    after: &[Point],
    tolerance: f64,
) -> Result<bool, ClusterError> {
    if before.len() != after.len() {
        return Err(ClusterError::DimensionMismatch {
            expected: before.len(),
            found: after.len(),
        });
    }

    for (old, new) in before.iter().zip(after.iter()) {
        if old.dim() != new.dim() {
            return Err(ClusterError::DimensionMismatch {
                expected: old.dim(),
                found: new.dim(),
            });
        }
        // equal infinities subtract to NaN, so compare them directly; NaN never converges
        let moved = old
            .coords()
            .iter()
            .zip(new.coords().iter())
            .any(|(x, y)| !(x == y || (x - y).abs() <= tolerance));
        if moved {
            return Ok(false);
        }
    }

    Ok(true)
}

fn check_dimensions(points: &[Point], dim: usize) -> Result<(), ClusterError> {
    match points.iter().find(|p| p.dim() != dim) {
        Some(p) => Err(ClusterError::DimensionMismatch {
            expected: dim,
            found: p.dim(),
        }),
        None => Ok(()),
    }
}

/// Run Lloyd's algorithm from the given initial centroids.
///
/// Each iteration assigns every point to its nearest centroid, moves the
/// centroids to the mean of their members, then compares against the
/// previous centroids. Stops on convergence or after
/// `config.max_iterations` iterations.
pub fn kmeans(
    data: &[Point],
    initial: PointList,
    dim: usize,
    config: &KmeansConfig,
) -> Result<ClusterResult, ClusterError> {
    config.validate()?;

    if initial.is_empty() {
        return Err(ClusterError::EmptyCentroids);
    }
    check_dimensions(&initial, dim)?;
    check_dimensions(data, dim)?;

    let mut centroids = initial;
    let mut assignments = Assignments::new();
    let mut iterations = 0;

    while iterations < config.max_iterations {
        iterations += 1;

        assignments = assign(&centroids, data)?;

        let previous = centroids.clone();
        update_centroids(
            &mut centroids,
            data,
            &assignments,
            dim,
            config.empty_cluster,
        )?;

        if log::log_enabled!(log::Level::Debug) {
            let mut shift: f64 = 0.0;
            for (old, new) in previous.iter().zip(centroids.iter()) {
                shift = shift.max(max_coordinate_shift(old.coords(), new.coords())?);
            }
            log::debug!("iteration {:>4}  max shift {:.6e}", iterations, shift);
        }

        if has_converged(&previous, &centroids, config.tolerance)? {
            log::info!("converged after {} iterations", iterations);
            return Ok(ClusterResult {
                centroids,
                assignments,
                iterations,
                termination: Termination::Converged,
            });
        }
    }

    log::info!(
        "stopped at iteration cap ({}) without converging",
        config.max_iterations
    );

    Ok(ClusterResult {
        centroids,
        assignments,
        iterations,
        termination: Termination::CapReached,
    })
}
