//! Beam search over a step function that returns next-token logits.
//!
//! Kept free of any inference runtime so the decoding policy can be tested
//! with scripted logits.

use medassist_core::errors::MedAssistResult;
use medassist_core::traits::GenerationParams;

/// Token ids that steer decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecialTokens {
    pub decoder_start: i64,
    pub eos: i64,
    pub pad: i64,
}

#[derive(Debug, Clone)]
struct Hypothesis {
    tokens: Vec<i64>,
    log_prob: f32,
}

impl Hypothesis {
    /// Mean log-probability per generated token.
    fn normalized(&self) -> f32 {
        let generated = self.tokens.len().saturating_sub(1).max(1);
        self.log_prob / generated as f32
    }
}

/// Run beam search and return the generated ids without the start token or EOS.
///
/// `next_logits` receives the decoder input so far (starting with
/// `decoder_start`) and returns logits over the vocabulary for the next
/// position. The pad token is never generated. Search stops when
/// `num_beams` hypotheses have reached EOS or after `max_new_tokens` steps.
/// Unfinished hypotheses are only considered when none reached EOS.
pub fn beam_search<F>(
    mut next_logits: F,
    special: SpecialTokens,
    params: &GenerationParams,
) -> MedAssistResult<Vec<i64>>
where
    F: FnMut(&[i64]) -> MedAssistResult<Vec<f32>>,
{
    let width = params.num_beams.max(1);
    let mut live = vec![Hypothesis {
        tokens: vec![special.decoder_start],
        log_prob: 0.0,
    }];
    let mut finished: Vec<Hypothesis> = Vec::new();

    for _ in 0..params.max_new_tokens {
        let mut candidates: Vec<(usize, i64, f32)> = Vec::with_capacity(live.len() * width);
        for (beam, hyp) in live.iter().enumerate() {
            let log_probs = log_softmax(&next_logits(&hyp.tokens)?, special.pad);
            for (token, lp) in top_k(&log_probs, width) {
                candidates.push((beam, token, hyp.log_prob + lp));
            }
        }
        candidates.sort_by(|a, b| b.2.total_cmp(&a.2));

        let mut next = Vec::with_capacity(width);
        for (beam, token, log_prob) in candidates {
            if !log_prob.is_finite() {
                continue;
            }
            let mut tokens = live[beam].tokens.clone();
            tokens.push(token);
            let hyp = Hypothesis { tokens, log_prob };
            if token == special.eos {
                if finished.len() < width {
                    finished.push(hyp);
                }
            } else {
                next.push(hyp);
            }
            if next.len() == width {
                break;
            }
        }

        live = next;
        if finished.len() >= width || live.is_empty() {
            break;
        }
    }

    let pool = if finished.is_empty() { live } else { finished };
    let best = pool
        .into_iter()
        .max_by(|a, b| a.normalized().total_cmp(&b.normalized()));

    Ok(best
        .map(|hyp| {
            hyp.tokens
                .into_iter()
                .skip(1)
                .filter(|&t| t != special.eos)
                .collect()
        })
        .unwrap_or_default())
}

/// Log-softmax with the pad token masked to negative infinity.
fn log_softmax(logits: &[f32], pad: i64) -> Vec<f32> {
    let masked = |i: usize, v: f32| {
        if i64::try_from(i).is_ok_and(|i| i == pad) {
            f32::NEG_INFINITY
        } else {
            v
        }
    };
    let max = logits
        .iter()
        .enumerate()
        .map(|(i, &v)| masked(i, v))
        .fold(f32::NEG_INFINITY, f32::max);
    let sum: f32 = logits
        .iter()
        .enumerate()
        .map(|(i, &v)| (masked(i, v) - max).exp())
        .sum();
    let log_sum = max + sum.ln();
    logits
        .iter()
        .enumerate()
        .map(|(i, &v)| masked(i, v) - log_sum)
        .collect()
}

/// The `k` highest-scoring token ids, best first. Ties keep the lower id.
fn top_k(log_probs: &[f32], k: usize) -> Vec<(i64, f32)> {
    let mut indexed: Vec<(i64, f32)> = log_probs
        .iter()
        .enumerate()
        .filter_map(|(i, &lp)| i64::try_from(i).ok().map(|i| (i, lp)))
        .collect();
    let k = k.min(indexed.len());
    if k == 0 {
        return Vec::new();
    }
    let by_score = |a: &(i64, f32), b: &(i64, f32)| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0));
    if k < indexed.len() {
        indexed.select_nth_unstable_by(k - 1, by_score);
        indexed.truncate(k);
    }
    indexed.sort_by(by_score);
    indexed
}

#[cfg(test)]
mod tests {
    use super::*;
    use medassist_core::errors::{MedAssistError, TranslationError};

    const EOS: i64 = 0;
    const PAD: i64 = 1;
    const A: i64 = 2;
    const B: i64 = 3;

    const SPECIAL: SpecialTokens = SpecialTokens {
        decoder_start: PAD,
        eos: EOS,
        pad: PAD,
    };

    fn logits_favoring(token: i64) -> Vec<f32> {
        let mut logits = vec![0.0; 4];
        logits[token as usize] = 10.0;
        logits
    }

    fn params(num_beams: usize, max_new_tokens: usize) -> GenerationParams {
        GenerationParams {
            num_beams,
            max_new_tokens,
        }
    }

    #[test]
    fn follows_the_most_likely_path_to_eos() {
        let out = beam_search(
            |tokens| {
                Ok(match tokens.len() {
                    1 => logits_favoring(A),
                    2 => logits_favoring(B),
                    _ => logits_favoring(EOS),
                })
            },
            SPECIAL,
            &params(4, 16),
        )
        .unwrap();
        assert_eq!(out, vec![A, B]);
    }

    #[test]
    fn pad_is_never_generated() {
        let out = beam_search(
            |_| Ok(vec![-5.0, 10.0, 0.0, -5.0]),
            SPECIAL,
            &params(2, 3),
        )
        .unwrap();
        assert_eq!(out, vec![A]);
    }

    #[test]
    fn output_is_bounded_by_max_new_tokens() {
        let out = beam_search(
            |_| Ok(vec![-50.0, 0.0, 3.0, 2.0]),
            SPECIAL,
            &params(2, 5),
        )
        .unwrap();
        assert_eq!(out.len(), 5);
    }

    #[test]
    fn immediate_eos_yields_empty_output() {
        let out = beam_search(|_| Ok(logits_favoring(EOS)), SPECIAL, &params(1, 8)).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn length_normalization_prefers_confident_longer_output() {
        // EOS is slightly ahead of A at the first step, but after A the EOS
        // is near certain, so the two-token hypothesis wins per token.
        let out = beam_search(
            |tokens| {
                Ok(match tokens {
                    [_] => vec![1.0, f32::MIN, 0.9, -5.0],
                    [_, a] if *a == A => logits_favoring(EOS),
                    _ => logits_favoring(B),
                })
            },
            SPECIAL,
            &params(2, 8),
        )
        .unwrap();
        assert_eq!(out, vec![A]);
    }

    #[test]
    fn step_errors_propagate() {
        let result = beam_search(
            |_| {
                Err(MedAssistError::from(TranslationError::GenerationFailed {
                    reason: "decoder crashed".to_string(),
                }))
            },
            SPECIAL,
            &params(4, 8),
        );
        assert!(result.is_err());
    }

    #[test]
    fn top_k_orders_best_first() {
        let picked = top_k(&[0.1, 0.7, 0.7, 0.3], 3);
        let ids: Vec<i64> = picked.iter().map(|(i, _)| *i).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn log_softmax_masks_pad() {
        let lp = log_softmax(&[1.0, 100.0, 1.0], 1);
        assert_eq!(lp[1], f32::NEG_INFINITY);
        let total: f32 = lp.iter().map(|v| v.exp()).sum();
        assert!((total - 1.0).abs() < 1e-5);
    }
}
