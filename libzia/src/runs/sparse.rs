// Split a signal into its non-zero-run samples and merge them back

use crate::core::{Sample, ZiaError, ZiaResult};

use super::RunLengths;

/// Concatenate the samples of every non-zero run, dropping the zero runs.
pub fn split_sparse<T: Sample>(signal: &[T], runs: &RunLengths) -> ZiaResult<Vec<T>> {
    let expected = runs.total();
    if expected != signal.len() {
        return Err(ZiaError::RunLengthMismatch {
            expected,
            actual: signal.len(),
        });
    }

    let mut dense = Vec::with_capacity(runs.non_zero_total());
    let mut pos = 0;
    for (idx, run) in runs.iter().enumerate() {
        let run = run as usize;
        if idx % 2 == 0 {
            dense.extend_from_slice(&signal[pos..pos + run]);
        }
        pos += run;
    }

    Ok(dense)
}

/// Inverse of [`split_sparse`]: re-insert the zero runs around `dense`.
pub fn merge_sparse<T: Sample>(dense: &[T], runs: &RunLengths) -> ZiaResult<Vec<T>> {
    let expected = runs.non_zero_total();
    if expected != dense.len() {
        return Err(ZiaError::RunLengthMismatch {
            expected,
            actual: dense.len(),
        });
    }

    let mut signal = Vec::with_capacity(runs.total());
    let mut dense_pos = 0;
    for (idx, run) in runs.iter().enumerate() {
        let run = run as usize;
        if idx % 2 == 0 {
            signal.extend_from_slice(&dense[dense_pos..dense_pos + run]);
            dense_pos += run;
        } else {
            signal.resize(signal.len() + run, T::ZERO);
        }
    }

    Ok(signal)
}
