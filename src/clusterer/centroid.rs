use crate::clusterer::error::ClusterError;
use crate::clusterer::types::Point;

/// Outcome of averaging the members of one cluster
#[derive(Debug, Clone, PartialEq)]
pub enum CentroidUpdate {
    Mean(Point),
    Empty,
}

/// Per-dimension mean of the points whose assignment equals `index`.
///
/// Returns `CentroidUpdate::Empty` instead of dividing by zero when nothing
/// is assigned to the centroid.
pub fn compute_centroid(
    data: &[Point],
    assignments: &[usize],
    index: usize,
    dim: usize,
) -> Result<CentroidUpdate, ClusterError> {
    let mut sum = Point::zeros(dim);
    let mut count = 0usize;

    for (point, &assigned) in data.iter().zip(assignments.iter()) {
        if assigned == index {
            sum.accumulate(point)?;
            count += 1;
        }
    }

    if count == 0 {
        return Ok(CentroidUpdate::Empty);
    }

    sum.scale_down(count as f64);
    Ok(CentroidUpdate::Mean(sum))
}
