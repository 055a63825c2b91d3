use crate::core::{Sample, ZiaError, ZiaResult};

use super::predictor::predict_next;

/// Rebuild a signal from coefficients, seed values and residuals.
///
/// Each new sample is predicted from the M-1 samples already rebuilt, so
/// the loop runs strictly in order. Output length is `seed + residuals`.
pub fn reconstruct<T: Sample>(coefficients: &[f32], seed: &[T], residuals: &[T]) -> ZiaResult<Vec<T>> {
    if coefficients.len() < 2 {
        return Err(ZiaError::InvalidOrder {
            order: coefficients.len(),
        });
    }
    if coefficients.len() != seed.len() + 1 {
        return Err(ZiaError::CoefficientMismatch {
            coefficients: coefficients.len(),
            seed: seed.len(),
        });
    }

    let context = seed.len();
    let (weights, bias) = coefficients.split_at(context);
    let bias = bias[0];

    let mut samples = Vec::with_capacity(context + residuals.len());
    samples.extend_from_slice(seed);

    for (i, &residual) in residuals.iter().enumerate() {
        let predicted = predict_next(weights, bias, &samples[i..i + context]);
        samples.push(predicted.wrapping_add(residual));
    }

    Ok(samples)
}
