//! Euclidean distance over standardized feature rows

/// Euclidean distance between two equal-length slices.
///
/// Returns `f64::INFINITY` when the lengths differ.
#[inline]
pub fn l2_distance(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() {
        return f64::INFINITY;
    }

    squared_l2_distance(a, b).sqrt()
}

/// Sum of squared differences, without the final square root.
///
/// Returns `f64::INFINITY` when the lengths differ.
#[inline]
pub fn squared_l2_distance(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() {
        return f64::INFINITY;
    }

    let mut sum0 = 0.0f64;
    let mut sum1 = 0.0f64;

    // Two accumulators over chunks of 4
    let chunks = a.chunks_exact(4);
    let remainder = chunks.remainder();
    let b_chunks = b.chunks_exact(4);

    for (a_chunk, b_chunk) in chunks.zip(b_chunks) {
        let d0 = a_chunk[0] - b_chunk[0];
        let d1 = a_chunk[1] - b_chunk[1];
        let d2 = a_chunk[2] - b_chunk[2];
        let d3 = a_chunk[3] - b_chunk[3];

        sum0 += d0 * d0 + d1 * d1;
        sum1 += d2 * d2 + d3 * d3;
    }

    for i in (a.len() - remainder.len())..a.len() {
        let d = a[i] - b[i];
        sum0 += d * d;
    }

    sum0 + sum1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_dims() {
        let a = [1.0, 2.0, 3.0, 4.0];
        let b = [2.0, 4.0, 6.0, 8.0];
        // 1 + 4 + 9 + 16 = 30
        assert!((l2_distance(&a, &b) - 30.0f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_remainder_dims() {
        let a = [0.0, 0.0, 0.0, 0.0, 0.0, 3.0];
        let b = [0.0, 0.0, 0.0, 0.0, 4.0, 0.0];
        assert!((l2_distance(&a, &b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_identical_is_exactly_zero() {
        let a = [-0.3, 1.7, 2.25, -4.0];
        assert_eq!(l2_distance(&a, &a), 0.0);
    }

    #[test]
    fn test_length_mismatch() {
        assert!(l2_distance(&[1.0], &[1.0, 2.0]).is_infinite());
        assert!(squared_l2_distance(&[1.0, 2.0, 3.0], &[1.0]).is_infinite());
        assert!(squared_l2_distance(&[1.0], &[1.0, 2.0, 3.0]).is_infinite());
    }
}
