//! Vector math for semantic scoring.

use medassist_core::constants::COSINE_EPSILON;
use medassist_core::errors::{EmbeddingError, MedAssistResult};

/// Cosine similarity with `COSINE_EPSILON` added to each norm, so zero
/// vectors score 0.0 instead of dividing by zero.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> MedAssistResult<f64> {
    if a.len() != b.len() {
        return Err(EmbeddingError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        }
        .into());
    }

    let eps = f64::from(COSINE_EPSILON);
    let norm_a = a.iter().map(|&x| f64::from(x).powi(2)).sum::<f64>().sqrt() + eps;
    let norm_b = b.iter().map(|&x| f64::from(x).powi(2)).sum::<f64>().sqrt() + eps;
    let dot: f64 = a
        .iter()
        .zip(b)
        .map(|(&x, &y)| f64::from(x) * f64::from(y))
        .sum();

    Ok(dot / (norm_a * norm_b))
}

/// Mean-pool token embeddings over non-padding positions.
///
/// `shape` is the encoder output shape: `[1, seq, dims]` (pooled here) or
/// `[1, dims]` (already pooled). `mask` is the attention mask, one entry per
/// sequence position.
pub fn mean_pool(shape: &[i64], data: &[f32], mask: &[i64]) -> MedAssistResult<Vec<f32>> {
    match shape.len() {
        3 => {
            let seq = shape[1] as usize;
            let dims = shape[2] as usize;
            if data.len() < seq * dims || mask.len() < seq {
                return Err(EmbeddingError::InferenceFailed {
                    reason: format!(
                        "output shape {shape:?} does not match data ({}) or mask ({})",
                        data.len(),
                        mask.len()
                    ),
                }
                .into());
            }
            let mut pooled = vec![0.0f32; dims];
            let mut count = 0.0f32;
            for s in 0..seq {
                if mask[s] == 0 {
                    continue;
                }
                count += 1.0;
                let row = &data[s * dims..(s + 1) * dims];
                for (acc, v) in pooled.iter_mut().zip(row) {
                    *acc += v;
                }
            }
            let count = count.max(1.0);
            for v in &mut pooled {
                *v /= count;
            }
            Ok(pooled)
        }
        2 => {
            let dims = shape[1] as usize;
            if data.len() < dims {
                return Err(EmbeddingError::InferenceFailed {
                    reason: format!("output shape {shape:?} larger than data ({})", data.len()),
                }
                .into());
            }
            Ok(data[..dims].to_vec())
        }
        _ => Err(EmbeddingError::InferenceFailed {
            reason: format!("unexpected output shape: {shape:?}"),
        }
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_vectors_score_one() {
        let v = vec![0.3, 0.4, 0.5];
        let sim = cosine_similarity(&v, &v).unwrap();
        assert!((sim - 1.0).abs() < 1e-6);
    }

    #[test]
    fn orthogonal_vectors_score_zero() {
        let sim = cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).unwrap();
        assert!(sim.abs() < 1e-9);
    }

    #[test]
    fn zero_vector_does_not_divide_by_zero() {
        let sim = cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]).unwrap();
        assert_eq!(sim, 0.0);
    }

    #[test]
    fn dimension_mismatch_is_an_error() {
        assert!(cosine_similarity(&[1.0], &[1.0, 2.0]).is_err());
    }

    #[test]
    fn mean_pool_skips_padding_positions() {
        // seq = 3, dims = 2; last position is padding.
        let data = [1.0, 2.0, 3.0, 4.0, 100.0, 100.0];
        let pooled = mean_pool(&[1, 3, 2], &data, &[1, 1, 0]).unwrap();
        assert_eq!(pooled, vec![2.0, 3.0]);
    }

    #[test]
    fn mean_pool_all_padding_yields_zero_vector() {
        let data = [5.0, 5.0];
        let pooled = mean_pool(&[1, 1, 2], &data, &[0]).unwrap();
        assert_eq!(pooled, vec![0.0, 0.0]);
    }

    #[test]
    fn mean_pool_passes_through_pooled_output() {
        let pooled = mean_pool(&[1, 3], &[0.1, 0.2, 0.3], &[1]).unwrap();
        assert_eq!(pooled, vec![0.1, 0.2, 0.3]);
    }

    #[test]
    fn mean_pool_rejects_unknown_rank() {
        assert!(mean_pool(&[4], &[0.0; 4], &[1]).is_err());
    }
}
