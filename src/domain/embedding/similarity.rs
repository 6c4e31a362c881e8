//! Cosine similarity between embedding vectors

use crate::domain::DomainError;

/// Calculate cosine similarity between two vectors, in [-1, 1].
///
/// Vectors of unequal length are a programmer error (embeddings from
/// different models) and fail with `DimensionMismatch`. A zero-magnitude
/// vector on either side yields 0 rather than NaN so downstream sorting
/// stays stable.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32, DomainError> {
    if a.len() != b.len() {
        return Err(DomainError::dimension_mismatch(a.len(), b.len()));
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }

    Ok(dot_product / (norm_a * norm_b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_vectors() {
        let a = vec![1.0, 0.0, 0.0];
        let b = vec![1.0, 0.0, 0.0];

        let similarity = cosine_similarity(&a, &b).unwrap();

        assert!((similarity - 1.0).abs() < 0.0001);
    }

    #[test]
    fn test_self_similarity_is_one() {
        let a = vec![0.3, -1.2, 4.5, 0.007];

        let similarity = cosine_similarity(&a, &a).unwrap();

        assert!((similarity - 1.0).abs() < 0.0001);
    }

    #[test]
    fn test_symmetry() {
        let a = vec![1.0, 2.0, 3.0];
        let b = vec![-0.5, 0.25, 4.0];

        assert_eq!(
            cosine_similarity(&a, &b).unwrap(),
            cosine_similarity(&b, &a).unwrap()
        );
    }

    #[test]
    fn test_orthogonal_vectors() {
        let a = vec![1.0, 0.0, 0.0];
        let b = vec![0.0, 1.0, 0.0];

        let similarity = cosine_similarity(&a, &b).unwrap();

        assert!(similarity.abs() < 0.0001);
    }

    #[test]
    fn test_opposite_vectors() {
        let a = vec![1.0, 0.0, 0.0];
        let b = vec![-1.0, 0.0, 0.0];

        let similarity = cosine_similarity(&a, &b).unwrap();

        assert!((similarity + 1.0).abs() < 0.0001);
    }

    #[test]
    fn test_zero_vector_scores_zero() {
        let a = vec![1.0, 2.0, 3.0];
        let zero = vec![0.0, 0.0, 0.0];

        assert_eq!(cosine_similarity(&a, &zero).unwrap(), 0.0);
        assert_eq!(cosine_similarity(&zero, &a).unwrap(), 0.0);
        assert_eq!(cosine_similarity(&zero, &zero).unwrap(), 0.0);
    }

    #[test]
    fn test_mismatched_lengths_fail() {
        let a = vec![1.0, 2.0];
        let b = vec![1.0, 2.0, 3.0];

        let error = cosine_similarity(&a, &b).unwrap_err();

        assert!(error.is_dimension_mismatch());
        assert_eq!(error.to_string(), "Dimension mismatch: 2 vs 3");
    }

    #[test]
    fn test_empty_vectors() {
        let empty: Vec<f32> = vec![];

        // Equal (zero) lengths with zero magnitude: defined as 0
        assert_eq!(cosine_similarity(&empty, &empty).unwrap(), 0.0);
    }

    #[test]
    fn test_result_never_nan_for_finite_input() {
        let tiny = vec![1e-30f32, 0.0];
        let a = vec![1.0, 1.0];

        let similarity = cosine_similarity(&a, &tiny).unwrap();

        assert!(!similarity.is_nan());
    }
}
