use log::debug;
use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

use crate::core::{Sample, ZiaError, ZiaResult, DEFAULT_ORDER, DEFAULT_TRAINING_SAMPLES};

use super::solver::solve_least_squares;

/// Fitting configuration for the order-M predictor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkovConfig {
    /// number of samples per window: M-1 predictors plus the target
    pub order: usize,
    /// upper bound on windows fed to the least-squares fit
    pub training_samples: usize,
}

impl Default for MarkovConfig {
    fn default() -> Self {
        MarkovConfig {
            order: DEFAULT_ORDER,
            training_samples: DEFAULT_TRAINING_SAMPLES,
        }
    }
}

impl MarkovConfig {
    pub fn new(order: usize) -> Self {
        MarkovConfig {
            order,
            ..Default::default()
        }
    }

    pub fn with_training_samples(mut self, training_samples: usize) -> Self {
        self.training_samples = training_samples;
        self
    }

    /// check order and training budget on their own
    pub fn check(&self) -> ZiaResult<()> {
        if self.order < 2 {
            return Err(ZiaError::InvalidOrder { order: self.order });
        }
        if self.training_samples == 0 {
            return Err(ZiaError::InvalidTrainingSamples);
        }
        Ok(())
    }

    /// check the configuration against a signal length
    pub fn validate(&self, signal_len: usize) -> ZiaResult<()> {
        self.check()?;
        if signal_len < self.order {
            return Err(ZiaError::SignalTooShort {
                len: signal_len,
                order: self.order,
            });
        }
        Ok(())
    }

    /// fit coefficients, then compute seed and residuals over the whole signal
    pub fn fit_predict<T: Sample>(&self, signal: &[T]) -> ZiaResult<MarkovFrame<T>> {
        let coefficients = self.fit(signal)?;
        let residuals = compute_residuals(signal, &coefficients)?;
        Ok(MarkovFrame {
            coefficients,
            seed: signal[..self.order - 1].to_vec(),
            residuals,
        })
    }

    /// fit the M coefficients (M-1 weights then bias) on strided windows
    pub fn fit<T: Sample>(&self, signal: &[T]) -> ZiaResult<Vec<f32>> {
        self.validate(signal.len())?;

        let order = self.order;
        let windows = signal.len() - order + 1;
        let selected = windows.min(self.training_samples);
        let stride = if windows > self.training_samples {
            windows / self.training_samples
        } else {
            1
        };

        // predictors plus a trailing ones column for the bias
        let design = DMatrix::from_fn(selected, order, |i, j| {
            if j < order - 1 {
                signal[i * stride + j].to_f32()
            } else {
                1.0
            }
        });
        let target = DVector::from_fn(selected, |i, _| signal[i * stride + order - 1].to_f32());

        let fit = solve_least_squares(design, target);
        debug!(
            "markov fit: order {}, {} of {} windows, stride {}, rank {}",
            order, selected, windows, stride, fit.rank
        );

        Ok(fit.solution)
    }
}

/// Output of [`fit_predict`]: everything needed to rebuild the signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound = "T: Sample")]
pub struct MarkovFrame<T> {
    /// M-1 weights followed by the bias
    pub coefficients: Vec<f32>,
    /// first M-1 samples, verbatim
    pub seed: Vec<T>,
    /// one residual per window, N-M+1 in total
    pub residuals: Vec<T>,
}

impl<T: Sample> MarkovFrame<T> {
    pub fn order(&self) -> usize {
        self.coefficients.len()
    }

    /// length of the signal this frame reconstructs to
    pub fn signal_len(&self) -> usize {
        self.seed.len() + self.residuals.len()
    }

    pub fn weights(&self) -> &[f32] {
        &self.coefficients[..self.coefficients.len().saturating_sub(1)]
    }

    pub fn bias(&self) -> f32 {
        self.coefficients.last().copied().unwrap_or(0.0)
    }

    pub fn reconstruct(&self) -> ZiaResult<Vec<T>> {
        super::reconstruct(&self.coefficients, &self.seed, &self.residuals)
    }
}

/// Fit an order-`order` predictor and return coefficients, seed and residuals.
///
/// # Example
/// ```
/// # use libzia::markov::fit_predict;
/// let signal: Vec<i16> = (1..=10).collect();
/// let frame = fit_predict(&signal, 3, 10_000).unwrap();
/// assert_eq!(frame.seed, vec![1, 2]);
/// assert_eq!(frame.residuals, vec![0; 8]);
/// ```
pub fn fit_predict<T: Sample>(
    signal: &[T],
    order: usize,
    training_samples: usize,
) -> ZiaResult<MarkovFrame<T>> {
    MarkovConfig::new(order)
        .with_training_samples(training_samples)
        .fit_predict(signal)
}

/// Rounded prediction of the sample following `context`.
///
/// Shared by residual computation and reconstruction so both sides cast,
/// accumulate (weights in index order, bias last) and round identically.
#[inline]
pub(crate) fn predict_next<T: Sample>(weights: &[f32], bias: f32, context: &[T]) -> T {
    let mut prediction = 0.0f32;
    for (&w, &x) in weights.iter().zip(context) {
        prediction += w * x.to_f32();
    }
    prediction += bias;
    T::from_rounded(prediction.round())
}

#[inline]
fn window_residual<T: Sample>(weights: &[f32], bias: f32, window: &[T]) -> T {
    let (context, target) = window.split_at(weights.len());
    target[0].wrapping_sub(predict_next(weights, bias, context))
}

/// Residuals of every window of `signal` under `coefficients`.
///
/// A signal shorter than `coefficients` has no windows and yields no residuals.
pub fn compute_residuals<T: Sample>(signal: &[T], coefficients: &[f32]) -> ZiaResult<Vec<T>> {
    let order = coefficients.len();
    if order < 2 {
        return Err(ZiaError::InvalidOrder { order });
    }
    let (weights, bias) = coefficients.split_at(order - 1);
    let bias = bias[0];

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        Ok(signal
            .par_windows(order)
            .map(|window| window_residual(weights, bias, window))
            .collect())
    }

    #[cfg(not(feature = "parallel"))]
    {
        Ok(signal
            .windows(order)
            .map(|window| window_residual(weights, bias, window))
            .collect())
    }
}
