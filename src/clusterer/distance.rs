use crate::clusterer::error::ClusterError;

pub fn euclidean_distance(a: &[f64], b: &[f64]) -> Result<f64, ClusterError> {
    if a.len() != b.len() {
        return Err(ClusterError::DimensionMismatch {
            expected: a.len(),
            found: b.len(),
        });
    }

    let mut sum = 0.0;
    for i in 0..a.len() {
        let d = a[i] - b[i];
        sum += d * d;
    }

    Ok(sum.sqrt())
}

/// Largest absolute coordinate change between two equally shaped centroid sets
pub fn max_coordinate_shift(before: &[f64], after: &[f64]) -> Result<f64, ClusterError> {
    if before.len() != after.len() {
        return Err(ClusterError::DimensionMismatch {
            expected: before.len(),
            found: after.len(),
        });
    }

    Ok(before
        .iter()
        .zip(after.iter())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max))
}
