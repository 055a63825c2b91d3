//! Predictive transform tests for libzia

use libzia::markov::{
    compute_residuals, fit_predict, reconstruct, solve_least_squares, MarkovConfig,
};
use nalgebra::{DMatrix, DVector};
use libzia::ZiaError;

fn wavy_i16(len: usize) -> Vec<i16> {
    (0..len)
        .map(|i| {
            let t = i as f32;
            ((t * 0.05).sin() * 3000.0 + (t * 0.31).cos() * 200.0) as i16
        })
        .collect()
}

// ============================================================================
// Fit & Predict
// ============================================================================

#[test]
fn test_linear_sequence_has_zero_residuals() {
    let signal: Vec<i32> = (1..=10).collect();
    let frame = fit_predict(&signal, 3, 10_000).unwrap();

    assert_eq!(frame.coefficients.len(), 3);
    assert_eq!(frame.seed, vec![1, 2]);
    assert_eq!(frame.residuals, vec![0; 8]);
}

#[test]
fn test_output_lengths() {
    let signal = wavy_i16(500);
    for order in [2, 3, 6, 12] {
        let frame = fit_predict(&signal, order, 10_000).unwrap();
        assert_eq!(frame.coefficients.len(), order);
        assert_eq!(frame.seed.len(), order - 1);
        assert_eq!(frame.residuals.len(), signal.len() - order + 1);
        assert_eq!(frame.signal_len(), signal.len());
        assert_eq!(&frame.seed[..], &signal[..order - 1]);
    }
}

#[test]
fn test_prediction_beats_raw_magnitude() {
    let signal = wavy_i16(4000);
    let frame = fit_predict(&signal, 6, 10_000).unwrap();

    let raw: i64 = signal.iter().map(|&s| (s as i64).abs()).sum();
    let resid: i64 = frame.residuals.iter().map(|&r| (r as i64).abs()).sum();
    assert!(resid * 10 < raw, "residual mass {} vs raw {}", resid, raw);
}

#[test]
fn test_order_equal_to_length() {
    let signal = vec![3i16, -1, 4, 1, 5];
    let frame = fit_predict(&signal, 5, 10_000).unwrap();
    assert_eq!(frame.residuals.len(), 1);
    assert_eq!(frame.reconstruct().unwrap(), signal);
}

#[test]
fn test_fit_is_deterministic() {
    let signal = wavy_i16(3000);
    let a = fit_predict(&signal, 6, 10_000).unwrap();
    let b = fit_predict(&signal, 6, 10_000).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_training_budget_strides_over_signal() {
    let signal = wavy_i16(20_000);
    let small = fit_predict(&signal, 6, 100).unwrap();
    let full = fit_predict(&signal, 6, 100_000).unwrap();

    // both fits cover every window when computing residuals
    assert_eq!(small.residuals.len(), full.residuals.len());
    assert_eq!(small.reconstruct().unwrap(), signal);
    assert_eq!(full.reconstruct().unwrap(), signal);
}

#[test]
fn test_residuals_match_compute_residuals() {
    let signal = wavy_i16(800);
    let frame = fit_predict(&signal, 4, 10_000).unwrap();
    assert_eq!(
        compute_residuals(&signal, &frame.coefficients).unwrap(),
        frame.residuals
    );
}

#[test]
fn test_fit_uses_evenly_strided_windows() {
    // 1000 windows, budget 7: stride 142, rows at 0, 142, .., 852
    let signal = wavy_i16(1003);
    let (order, budget) = (4, 7);
    let stride = (signal.len() - order + 1) / budget;
    assert_eq!(stride, 142);

    let design = DMatrix::from_fn(budget, order, |i, j| {
        if j < order - 1 {
            signal[i * stride + j] as f32
        } else {
            1.0
        }
    });
    let target = DVector::from_fn(budget, |i, _| signal[i * stride + order - 1] as f32);
    let expected = solve_least_squares(design, target).solution;

    let coefficients = MarkovConfig::new(order)
        .with_training_samples(budget)
        .fit(&signal)
        .unwrap();
    let expected_bits: Vec<u32> = expected.iter().map(|c| c.to_bits()).collect();
    let actual_bits: Vec<u32> = coefficients.iter().map(|c| c.to_bits()).collect();
    assert_eq!(actual_bits, expected_bits);
}

#[test]
fn test_fit_uses_every_window_within_budget() {
    let signal = wavy_i16(60);
    let order = 3;
    let windows = signal.len() - order + 1;

    let design = DMatrix::from_fn(windows, order, |i, j| {
        if j < order - 1 {
            signal[i + j] as f32
        } else {
            1.0
        }
    });
    let target = DVector::from_fn(windows, |i, _| signal[i + order - 1] as f32);
    let expected = solve_least_squares(design, target).solution;

    let coefficients = MarkovConfig::new(order).fit(&signal).unwrap();
    assert_eq!(coefficients, expected);
}

// ============================================================================
// Reconstruct
// ============================================================================

#[test]
fn test_reconstruct_hand_coefficients() {
    // weight 1, bias 0: each sample repeats the previous one
    let out = reconstruct(&[1.0, 0.0], &[5i32], &[1, 1, 1]).unwrap();
    assert_eq!(out, vec![5, 6, 7, 8]);

    // weight 0, bias 2.5: prediction rounds half away from zero to 3
    let out = reconstruct(&[0.0, 2.5], &[0i16], &[0, -3]).unwrap();
    assert_eq!(out, vec![0, 3, 0]);
}

#[test]
fn test_roundtrip_i16() {
    let signal = wavy_i16(10_000);
    let frame = fit_predict(&signal, 6, 10_000).unwrap();
    let rebuilt = reconstruct(&frame.coefficients, &frame.seed, &frame.residuals).unwrap();
    assert_eq!(rebuilt, signal);
}

#[test]
fn test_roundtrip_i32_large_values() {
    // beyond f32's exact integer range
    let signal: Vec<i32> = (0..5000)
        .map(|i| 100_000_000 + ((i as f64 * 0.02).sin() * 1_000_000.0) as i32 + (i % 7))
        .collect();
    let frame = fit_predict(&signal, 4, 10_000).unwrap();
    assert_eq!(frame.reconstruct().unwrap(), signal);
}

#[test]
fn test_roundtrip_extremes_wrap() {
    let signal: Vec<i16> = (0..300)
        .map(|i| if i % 3 == 0 { i16::MIN } else { i16::MAX })
        .collect();
    let frame = fit_predict(&signal, 3, 10_000).unwrap();
    assert_eq!(frame.reconstruct().unwrap(), signal);
}

#[test]
fn test_roundtrip_order_two() {
    let signal = wavy_i16(1000);
    let frame = fit_predict(&signal, 2, 10_000).unwrap();
    assert_eq!(frame.seed.len(), 1);
    assert_eq!(frame.reconstruct().unwrap(), signal);
}

// ============================================================================
// Contract violations
// ============================================================================

#[test]
fn test_signal_shorter_than_order() {
    let err = fit_predict(&[1i16, 2, 3], 4, 10_000).unwrap_err();
    assert_eq!(err, ZiaError::SignalTooShort { len: 3, order: 4 });
}

#[test]
fn test_order_below_two() {
    let err = fit_predict(&[1i32, 2, 3], 1, 10_000).unwrap_err();
    assert_eq!(err, ZiaError::InvalidOrder { order: 1 });
}

#[test]
fn test_zero_training_budget() {
    let err = fit_predict(&[1i32, 2, 3], 2, 0).unwrap_err();
    assert_eq!(err, ZiaError::InvalidTrainingSamples);
}

#[test]
fn test_reconstruct_length_mismatch() {
    let err = reconstruct(&[0.5, 0.5, 0.0], &[1i16], &[0, 0]).unwrap_err();
    assert_eq!(
        err,
        ZiaError::CoefficientMismatch {
            coefficients: 3,
            seed: 1
        }
    );

    let err = reconstruct::<i16>(&[0.0], &[], &[1]).unwrap_err();
    assert_eq!(err, ZiaError::InvalidOrder { order: 1 });
}

#[test]
fn test_compute_residuals_rejects_short_coefficients() {
    let err = compute_residuals(&[1i16, 2, 3], &[]).unwrap_err();
    assert_eq!(err, ZiaError::InvalidOrder { order: 0 });

    let err = compute_residuals(&[1i32, 2, 3], &[0.5]).unwrap_err();
    assert_eq!(err, ZiaError::InvalidOrder { order: 1 });
}

#[test]
fn test_config_defaults() {
    let config = MarkovConfig::default();
    assert_eq!(config.order, 6);
    assert_eq!(config.training_samples, 10_000);
}
